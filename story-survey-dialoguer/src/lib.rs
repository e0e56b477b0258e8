//! # story-survey-dialoguer
//!
//! Terminal front end for story-survey.
//!
//! Shows the story, walks the respondent through the five survey sections
//! with `dialoguer` prompts, and stores the response through whichever
//! persistence sink the caller provides. Analytics go to `tracing` under the
//! `analytics` target and the celebration is printed as rows of hearts.
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use story_survey::{EffectDispatcher, StorySite};
//! use story_survey_dialoguer::{DialoguerWizard, MemoryStore, TerminalHearts, TracingAnalytics};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let effects = EffectDispatcher::new()
//!         .with_analytics(Arc::new(TracingAnalytics))
//!         .with_effects(Arc::new(TerminalHearts));
//!     let mut site = StorySite::new(Arc::new(MemoryStore::new()), effects);
//!     DialoguerWizard::new().run(&mut site).await?;
//!     Ok(())
//! }
//! ```

mod questions;
mod terminal;
mod wizard;

pub use questions::{STORY, question};
pub use terminal::{MemoryStore, TerminalHearts, TracingAnalytics, heart_row};
pub use wizard::{DialoguerWizard, WizardError};
