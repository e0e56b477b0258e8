//! Sinks for a terminal session.

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use story_survey::{
    AnalyticsEvent, AnalyticsSink, ConfettiBurst, EffectSink, PersistenceError, PersistenceSink,
    SurveyRecord,
};

/// Keeps stored responses in memory for the lifetime of the process.
///
/// Used when no database is configured.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<Vec<SurveyRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Responses stored so far.
    pub fn records(&self) -> Vec<SurveyRecord> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl PersistenceSink for MemoryStore {
    async fn insert(&self, record: &SurveyRecord) -> Result<(), PersistenceError> {
        let stored = {
            let mut records = self.records.lock().unwrap_or_else(PoisonError::into_inner);
            records.push(record.clone());
            records.len()
        };
        tracing::info!(stored, "response kept in memory");
        Ok(())
    }
}

/// Writes analytics events to `tracing` under the `analytics` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingAnalytics;

impl AnalyticsSink for TracingAnalytics {
    fn emit(&self, event: &AnalyticsEvent) -> anyhow::Result<()> {
        let attributes = serde_json::to_string(&event.attributes)?;
        tracing::info!(target: "analytics", event = %event.name, %attributes);
        Ok(())
    }
}

/// Prints each celebration burst as a row of hearts.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalHearts;

impl EffectSink for TerminalHearts {
    fn burst(&self, burst: &ConfettiBurst) -> anyhow::Result<()> {
        println!("{}", heart_row(burst));
        Ok(())
    }
}

/// One heart per ten particles, indented by the burst's spread.
pub fn heart_row(burst: &ConfettiBurst) -> String {
    let hearts = (burst.particle_count / 10).max(1) as usize;
    let indent = (burst.spread / 10.0) as usize;
    let row = vec!["\u{2665}"; hearts].join(" ");
    format!("{}{row}", " ".repeat(indent))
}
