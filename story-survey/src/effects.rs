//! Analytics and the completion celebration.
//!
//! Everything here is best-effort. Sink failures are logged at debug level
//! and otherwise ignored; they never reach the respondent and never affect
//! whether a submission counts as stored.

use std::sync::Arc;

use story_survey_types::{
    AnalyticsEvent, AnalyticsSink, ConfettiBurst, EffectSink, NoopAnalytics, NoopEffects,
    ResponseDraft,
};

/// Emitted when the respondent opens the survey from the story page.
pub const SURVEY_CLICK: &str = "survey_click";

/// Emitted when the respondent follows the scheduling link.
pub const CALENDAR_CLICK: &str = "calendar_click";

/// Emitted once a response has been stored.
pub const SURVEY_COMPLETED: &str = "survey_completed";

/// Category attached to every event.
pub const EVENT_CATEGORY: &str = "engagement";

/// Particles shared out across the five bursts.
pub const PARTICLE_BUDGET: u32 = 200;

/// Where the bursts start, as a fraction of the viewport height.
pub const ORIGIN_Y: f32 = 0.7;

pub const HEART_SHAPE: &str = "heart";

pub const HEART_COLORS: &[&str] = &["#ff69b4", "#ff1493", "#ff6347", "#ffc0cb", "#dda0dd"];

/// Tuning for one burst. `percent` is its share of the particle budget.
struct BurstTuning {
    percent: u32,
    spread: f32,
    start_velocity: Option<f32>,
    decay: Option<f32>,
    scalar: Option<f32>,
}

const BURSTS: [BurstTuning; 5] = [
    BurstTuning {
        percent: 25,
        spread: 26.0,
        start_velocity: Some(55.0),
        decay: None,
        scalar: None,
    },
    BurstTuning {
        percent: 20,
        spread: 60.0,
        start_velocity: None,
        decay: None,
        scalar: None,
    },
    BurstTuning {
        percent: 35,
        spread: 100.0,
        start_velocity: None,
        decay: Some(0.91),
        scalar: Some(0.8),
    },
    BurstTuning {
        percent: 10,
        spread: 120.0,
        start_velocity: Some(25.0),
        decay: Some(0.92),
        scalar: Some(1.2),
    },
    BurstTuning {
        percent: 10,
        spread: 120.0,
        start_velocity: Some(45.0),
        decay: None,
        scalar: None,
    },
];

/// The five heart bursts fired after a successful submission.
pub fn celebration() -> Vec<ConfettiBurst> {
    BURSTS
        .iter()
        .map(|tuning| ConfettiBurst {
            particle_count: PARTICLE_BUDGET * tuning.percent / 100,
            spread: tuning.spread,
            start_velocity: tuning.start_velocity,
            decay: tuning.decay,
            scalar: tuning.scalar,
            origin_y: ORIGIN_Y,
            shape: HEART_SHAPE,
            colors: HEART_COLORS,
        })
        .collect()
}

fn engagement_event(name: &str, label: &str) -> AnalyticsEvent {
    AnalyticsEvent::new(name)
        .with_attribute("event_category", EVENT_CATEGORY)
        .with_attribute("event_label", label)
        .with_attribute("value", 1)
}

/// Sends analytics events and triggers the celebration.
///
/// Both sinks default to no-ops, so a dispatcher with nothing configured is
/// always safe to call.
#[derive(Clone)]
pub struct EffectDispatcher {
    analytics: Arc<dyn AnalyticsSink>,
    effects: Arc<dyn EffectSink>,
}

impl EffectDispatcher {
    /// Create a dispatcher with no-op sinks.
    pub fn new() -> Self {
        Self {
            analytics: Arc::new(NoopAnalytics),
            effects: Arc::new(NoopEffects),
        }
    }

    /// Send analytics events to `analytics`.
    pub fn with_analytics(mut self, analytics: Arc<dyn AnalyticsSink>) -> Self {
        self.analytics = analytics;
        self
    }

    /// Render the celebration through `effects`.
    pub fn with_effects(mut self, effects: Arc<dyn EffectSink>) -> Self {
        self.effects = effects;
        self
    }

    /// The respondent clicked the call-to-action to share their story.
    pub fn survey_started(&self) {
        self.emit(engagement_event(SURVEY_CLICK, "share_story_button"));
    }

    /// The respondent followed the link to schedule a conversation.
    pub fn calendar_opened(&self) {
        self.emit(engagement_event(CALENDAR_CLICK, "schedule_conversation"));
    }

    /// A response was stored. Emits the completion event, then celebrates.
    pub fn survey_completed(&self, draft: &ResponseDraft) {
        let mut event = engagement_event(SURVEY_COMPLETED, "survey_submission");
        if let Some(relationship) = draft.relationship() {
            event = event.with_attribute("relationship", relationship.label());
        }
        if let Some(age) = draft.age() {
            event = event.with_attribute("age", age);
        }
        self.emit(event);
        self.celebrate();
    }

    fn emit(&self, event: AnalyticsEvent) {
        if let Err(err) = self.analytics.emit(&event) {
            tracing::debug!(event = %event.name, error = %err, "analytics sink failed");
        }
    }

    fn celebrate(&self) {
        for burst in celebration() {
            if let Err(err) = self.effects.burst(&burst) {
                tracing::debug!(error = %err, "celebration burst failed");
            }
        }
    }
}

impl Default for EffectDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EffectDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EffectDispatcher").finish_non_exhaustive()
    }
}
