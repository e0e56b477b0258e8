//! Interactive caregiver story survey.
//!
//! # Environment Variables
//! - `SUPABASE_URL`, `SUPABASE_ANON_KEY`: where responses are stored. Without
//!   them responses are kept in memory for this session only.
//! - `SUPABASE_TABLE`: target table (default: "survey_responses")
//! - `SUPABASE_TIMEOUT_SECS`: insert timeout (default: 10)
//! - `RUST_LOG`: log filter (default: "story_survey=info,analytics=info")

use std::sync::Arc;

use story_survey::{EffectDispatcher, PersistenceSink, StorySite};
use story_survey_dialoguer::{
    DialoguerWizard, MemoryStore, TerminalHearts, TracingAnalytics, WizardError,
};
use story_survey_supabase::{SupabaseConfig, SupabaseStore};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "story_survey=info,analytics=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let store: Arc<dyn PersistenceSink> = match SupabaseConfig::from_env()? {
        Some(config) => {
            tracing::info!(table = config.table(), "storing responses in Supabase");
            Arc::new(SupabaseStore::new(&config)?)
        }
        None => {
            println!("SUPABASE_URL is not set; responses are kept in memory for this session.");
            Arc::new(MemoryStore::new())
        }
    };

    let effects = EffectDispatcher::new()
        .with_analytics(Arc::new(TracingAnalytics))
        .with_effects(Arc::new(TerminalHearts));
    let mut site = StorySite::new(store, effects);

    match DialoguerWizard::new().run(&mut site).await {
        Ok(()) => Ok(()),
        Err(WizardError::Cancelled) => {
            println!("Goodbye.");
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}
