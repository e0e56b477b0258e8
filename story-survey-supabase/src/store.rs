use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;
use story_survey::{PersistenceError, PersistenceSink, SurveyRecord};

use crate::config::{ConfigError, SupabaseConfig};

/// Error body returned by PostgREST.
#[derive(Debug, Deserialize)]
struct PostgrestError {
    message: String,
}

/// Inserts survey records into a Supabase table.
///
/// Each record is sent as a one-row insert. Any non-2xx answer is reported
/// as `PersistenceError::Rejected`; network failures and timeouts as
/// `PersistenceError::Backend`.
#[derive(Debug, Clone)]
pub struct SupabaseStore {
    client: Client,
    endpoint: Url,
    anon_key: String,
}

impl SupabaseStore {
    pub fn new(config: &SupabaseConfig) -> Result<Self, ConfigError> {
        let client = Client::builder().timeout(config.timeout()).build()?;
        Ok(Self {
            client,
            endpoint: config.endpoint()?,
            anon_key: config.anon_key().to_string(),
        })
    }

    /// Where records are posted.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl PersistenceSink for SupabaseStore {
    async fn insert(&self, record: &SurveyRecord) -> Result<(), PersistenceError> {
        tracing::debug!(endpoint = %self.endpoint, "inserting survey response");

        let response = self
            .client
            .post(self.endpoint.clone())
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
            .header("Prefer", "return=minimal")
            .json(&[record])
            .send()
            .await
            .map_err(PersistenceError::backend)?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        let message = match serde_json::from_str::<PostgrestError>(&body) {
            Ok(err) => err.message,
            Err(_) if body.is_empty() => status
                .canonical_reason()
                .unwrap_or("request rejected")
                .to_string(),
            Err(_) => body,
        };
        tracing::warn!(status = status.as_u16(), %message, "Supabase rejected insert");
        Err(PersistenceError::rejected(status.as_u16(), message))
    }
}
