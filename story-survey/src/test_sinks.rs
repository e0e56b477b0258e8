//! Recording sinks for testing surveys without real collaborators.
//!
//! `RecordingStore`, `RecordingAnalytics` and `RecordingEffects` remember
//! everything they receive so tests can assert on it. Each can also be told
//! to fail, and the store can hold inserts until the test releases them.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use story_survey::{EffectDispatcher, FormController};
//! use story_survey::test_sinks::RecordingStore;
//!
//! let store = Arc::new(RecordingStore::new());
//! let survey = FormController::new(store.clone(), EffectDispatcher::new());
//!
//! // ... fill in and submit ...
//!
//! assert_eq!(store.records().len(), 1);
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use tokio::sync::Semaphore;

use crate::{
    AnalyticsEvent, AnalyticsSink, ConfettiBurst, EffectSink, PersistenceError, PersistenceSink,
    SurveyRecord,
};

/// Releases inserts held by a gated `RecordingStore`.
#[derive(Debug, Clone)]
pub struct StoreGate {
    permits: Arc<Semaphore>,
}

impl StoreGate {
    /// Let one pending (or future) insert finish.
    pub fn release(&self) {
        self.permits.add_permits(1);
    }
}

/// A persistence sink that keeps inserted records in memory.
#[derive(Debug, Default)]
pub struct RecordingStore {
    records: Mutex<Vec<SurveyRecord>>,
    attempts: AtomicUsize,
    failures_left: AtomicUsize,
    gate: Option<Arc<Semaphore>>,
}

impl RecordingStore {
    /// Create a store that accepts every record immediately.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject the first `times` inserts, then accept.
    pub fn failing_times(self, times: usize) -> Self {
        self.failures_left.store(times, Ordering::SeqCst);
        self
    }

    /// Reject every insert.
    pub fn failing() -> Self {
        Self::new().failing_times(usize::MAX)
    }

    /// Hold every insert until the returned gate releases it.
    pub fn gated(mut self) -> (Self, StoreGate) {
        let permits = Arc::new(Semaphore::new(0));
        self.gate = Some(permits.clone());
        (self, StoreGate { permits })
    }

    /// Records accepted so far.
    pub fn records(&self) -> Vec<SurveyRecord> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of times `insert` was called, accepted or not.
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }

    fn take_failure(&self) -> bool {
        self.failures_left
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |left| {
                match left {
                    0 => None,
                    usize::MAX => Some(usize::MAX),
                    n => Some(n - 1),
                }
            })
            .is_ok()
    }
}

#[async_trait]
impl PersistenceSink for RecordingStore {
    async fn insert(&self, record: &SurveyRecord) -> Result<(), PersistenceError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);

        if let Some(gate) = &self.gate {
            let permit = gate.acquire().await.map_err(PersistenceError::backend)?;
            permit.forget();
        }

        if self.take_failure() {
            return Err(PersistenceError::rejected(503, "simulated failure"));
        }

        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(record.clone());
        Ok(())
    }
}

/// An analytics sink that keeps every event.
#[derive(Debug, Default)]
pub struct RecordingAnalytics {
    events: Mutex<Vec<AnalyticsEvent>>,
    fail: bool,
}

impl RecordingAnalytics {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink that records events but reports failure for each one.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn events(&self) -> Vec<AnalyticsEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Event names in emission order.
    pub fn names(&self) -> Vec<String> {
        self.events().into_iter().map(|event| event.name).collect()
    }

    /// How many events named `name` were emitted.
    pub fn count(&self, name: &str) -> usize {
        self.events().iter().filter(|event| event.name == name).count()
    }
}

impl AnalyticsSink for RecordingAnalytics {
    fn emit(&self, event: &AnalyticsEvent) -> anyhow::Result<()> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event.clone());
        if self.fail {
            anyhow::bail!("analytics unavailable");
        }
        Ok(())
    }
}

/// An effect sink that keeps every burst.
#[derive(Debug, Default)]
pub struct RecordingEffects {
    bursts: Mutex<Vec<ConfettiBurst>>,
    attempts: AtomicUsize,
    fail: bool,
}

impl RecordingEffects {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink that fails every burst without recording it.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Bursts rendered successfully.
    pub fn bursts(&self) -> Vec<ConfettiBurst> {
        self.bursts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of bursts requested, rendered or not.
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

impl EffectSink for RecordingEffects {
    fn burst(&self, burst: &ConfettiBurst) -> anyhow::Result<()> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            anyhow::bail!("no canvas to draw on");
        }
        self.bursts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(burst.clone());
        Ok(())
    }
}
