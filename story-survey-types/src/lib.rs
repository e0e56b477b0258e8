//! Core types for the story-survey crate.
//!
//! This crate provides the foundational types for the caregiver story survey:
//! - `ResponseDraft` and `FieldUpdate` - The in-progress response and typed edits to it
//! - `Section` and `TextField` - The five survey stages and the free-text fields they own
//! - `Relationship`, `CaregivingDuration`, `SupportSystem`, `DifficultyRating` - Fixed answer options
//! - `SurveyRecord`, `AnalyticsEvent`, `ConfettiBurst` - Payloads handed to external sinks
//! - `PersistenceSink`, `AnalyticsSink` and `EffectSink` traits - For plugging in collaborators

mod options;
pub use options::{CaregivingDuration, ParseOptionError, Relationship, SupportSystem};

mod rating;
pub use rating::{DifficultyRating, RatingError};

mod text_field;
pub use text_field::{ParseFieldError, TextField};

mod support_systems;
pub use support_systems::SupportSystems;

mod section;
pub use section::Section;

mod draft;
pub use draft::{AGE_HINT, FieldUpdate, ResponseDraft};

mod record;
pub use record::{GENDER_PLACEHOLDER, SurveyRecord};

mod event;
pub use event::{AnalyticsEvent, ConfettiBurst};

mod error;
pub use error::PersistenceError;

mod traits;
pub use traits::{AnalyticsSink, EffectSink, NoopAnalytics, NoopEffects, PersistenceSink};
