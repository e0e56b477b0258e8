use async_trait::async_trait;

use crate::{AnalyticsEvent, ConfettiBurst, PersistenceError, SurveyRecord};

/// Where completed submissions are stored.
///
/// Implementations insert exactly one record per call and report success or
/// failure; they are never asked to read anything back.
#[async_trait]
pub trait PersistenceSink: Send + Sync {
    /// Insert one record into the story-responses collection.
    async fn insert(&self, record: &SurveyRecord) -> Result<(), PersistenceError>;
}

/// Fire-and-forget analytics.
///
/// Errors are reported so they can be logged, but callers never act on them.
pub trait AnalyticsSink: Send + Sync {
    fn emit(&self, event: &AnalyticsEvent) -> anyhow::Result<()>;
}

/// Fire-and-forget cosmetic effect trigger.
pub trait EffectSink: Send + Sync {
    fn burst(&self, burst: &ConfettiBurst) -> anyhow::Result<()>;
}

/// Analytics sink used when no analytics are configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopAnalytics;

impl AnalyticsSink for NoopAnalytics {
    fn emit(&self, _event: &AnalyticsEvent) -> anyhow::Result<()> {
        Ok(())
    }
}

/// Effect sink used when nothing can render the celebration.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopEffects;

impl EffectSink for NoopEffects {
    fn burst(&self, _burst: &ConfettiBurst) -> anyhow::Result<()> {
        Ok(())
    }
}
