//! # story-survey
//!
//! The multi-step caregiver story survey, independent of how it is rendered
//! or where responses end up.
//!
//! The survey walks a respondent through five sections. A `FormController`
//! owns the in-progress `ResponseDraft`, only lets the respondent move
//! forward once the current section is complete, and submits the mapped
//! `SurveyRecord` to a `PersistenceSink`. On success an `EffectDispatcher`
//! emits analytics and the celebration.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use story_survey::{EffectDispatcher, FormController, FieldUpdate, TextField};
//!
//! let survey = FormController::new(store, EffectDispatcher::new());
//! survey.set_field(FieldUpdate::text(TextField::Name, "Asha"));
//! survey.set_field(FieldUpdate::text(TextField::Email, "asha@example.com"));
//! assert!(survey.advance());
//!
//! // ... fill in the remaining sections, then:
//! let outcome = survey.submit().await?;
//! ```
//!
//! ## Collaborators
//!
//! Sinks are plain traits so each front end can bring its own:
//! - `PersistenceSink` - stores the record (see `story-survey-supabase`)
//! - `AnalyticsSink` - receives `survey_click`, `calendar_click` and `survey_completed`
//! - `EffectSink` - renders the five-burst celebration
//!
//! `test_sinks` provides recording implementations for tests.

// Re-export all types from story-survey-types
pub use story_survey_types::*;

pub mod validator;
pub use validator::{Requirement, first_invalid, is_valid, missing_fields};

pub mod mapper;
pub use mapper::to_record;

pub mod effects;
pub use effects::EffectDispatcher;

mod controller;
pub use controller::{FormController, Notice, NoticeKind, SubmitOutcome};

mod site;
pub use site::{Page, SCHEDULING_URL, StorySite};

// Recording sinks for testing surveys without real collaborators
pub mod test_sinks;
