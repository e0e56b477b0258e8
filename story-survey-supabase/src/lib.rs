//! # story-survey-supabase
//!
//! Stores story-survey responses in a Supabase table through its PostgREST
//! endpoint.
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use story_survey::{EffectDispatcher, FormController};
//! use story_survey_supabase::{SupabaseConfig, SupabaseStore};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = SupabaseConfig::new("https://project.supabase.co", "anon-key")?;
//!     let store = SupabaseStore::new(&config)?;
//!     let survey = FormController::new(Arc::new(store), EffectDispatcher::new());
//!     Ok(())
//! }
//! ```

mod config;
mod store;

pub use config::{ConfigError, DEFAULT_TABLE, DEFAULT_TIMEOUT, SupabaseConfig};
pub use store::SupabaseStore;
