//! Connection settings for the Supabase store.
//!
//! Settings are resolved once at startup and handed to `SupabaseStore`;
//! nothing reads the environment while a submission is running.

use std::time::Duration;

use reqwest::Url;

/// Table that receives survey responses unless configured otherwise.
pub const DEFAULT_TABLE: &str = "survey_responses";

/// How long one insert may take before it counts as failed.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

pub const URL_VAR: &str = "SUPABASE_URL";
pub const KEY_VAR: &str = "SUPABASE_ANON_KEY";
pub const TABLE_VAR: &str = "SUPABASE_TABLE";
pub const TIMEOUT_VAR: &str = "SUPABASE_TIMEOUT_SECS";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{0} cannot be empty")]
    Empty(&'static str),
    #[error("invalid Supabase URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("invalid {TIMEOUT_VAR} '{0}': expected a whole number of seconds")]
    InvalidTimeout(String),
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Where and how to reach the Supabase project.
#[derive(Clone, Debug)]
pub struct SupabaseConfig {
    url: Url,
    anon_key: String,
    table: String,
    timeout: Duration,
}

impl SupabaseConfig {
    /// Create a config for the project at `url`, authenticating with the
    /// project's anonymous key.
    pub fn new(url: impl AsRef<str>, anon_key: impl Into<String>) -> Result<Self, ConfigError> {
        let raw = url.as_ref().trim();
        if raw.is_empty() {
            return Err(ConfigError::Empty("Supabase URL"));
        }
        let url = Url::parse(raw).map_err(|err| ConfigError::InvalidUrl {
            url: raw.to_string(),
            reason: err.to_string(),
        })?;

        let anon_key = anon_key.into();
        if anon_key.trim().is_empty() {
            return Err(ConfigError::Empty("Supabase anon key"));
        }

        Ok(Self {
            url,
            anon_key,
            table: DEFAULT_TABLE.to_string(),
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Insert into `table` instead of `survey_responses`.
    pub fn with_table(mut self, table: impl Into<String>) -> Result<Self, ConfigError> {
        let table = table.into();
        if table.trim().is_empty() {
            return Err(ConfigError::Empty("table name"));
        }
        self.table = table;
        Ok(self)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Read settings from the process environment.
    ///
    /// Returns `Ok(None)` when `SUPABASE_URL` is unset, meaning no store is
    /// configured. Call once at startup, after loading any `.env` file.
    pub fn from_env() -> Result<Option<Self>, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Option<Self>, ConfigError> {
        let Some(url) = lookup(URL_VAR) else {
            if lookup(KEY_VAR).is_some() {
                return Err(ConfigError::Missing(URL_VAR));
            }
            return Ok(None);
        };
        let anon_key = lookup(KEY_VAR).ok_or(ConfigError::Missing(KEY_VAR))?;

        let mut config = Self::new(url, anon_key)?;
        if let Some(table) = lookup(TABLE_VAR) {
            config = config.with_table(table)?;
        }
        if let Some(raw) = lookup(TIMEOUT_VAR) {
            let secs: u64 = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidTimeout(raw.clone()))?;
            config = config.with_timeout(Duration::from_secs(secs));
        }
        Ok(Some(config))
    }

    /// The PostgREST endpoint for the configured table.
    pub fn endpoint(&self) -> Result<Url, ConfigError> {
        let base = self.url.as_str().trim_end_matches('/');
        let endpoint = format!("{base}/rest/v1/{}", self.table);
        Url::parse(&endpoint).map_err(|err| ConfigError::InvalidUrl {
            reason: err.to_string(),
            url: endpoint,
        })
    }

    pub fn anon_key(&self) -> &str {
        &self.anon_key
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}
