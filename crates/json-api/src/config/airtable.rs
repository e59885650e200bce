//! Airtable Config

use std::time::Duration;

use clap::Args;
use ramal_app::{
    airtable::{AirtableConfig, DEFAULT_API_URL, DEFAULT_TABLE_NAME},
    auth::Secret,
};

/// Airtable record store settings.
///
/// Credentials may be absent at startup; requests needing the store fail
/// until they are provided.
#[derive(Debug, Args)]
pub struct AirtableSettings {
    /// Airtable personal access token
    #[arg(long = "airtable-api-key", env = "AIRTABLE_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Airtable base identifier
    #[arg(long = "airtable-base-id", env = "AIRTABLE_BASE_ID")]
    pub base_id: Option<String>,

    /// Airtable table holding agent records
    #[arg(long = "airtable-table-name", env = "AIRTABLE_TABLE_NAME", default_value = DEFAULT_TABLE_NAME)]
    pub table_name: String,

    /// Airtable REST endpoint
    #[arg(long = "airtable-api-url", env = "AIRTABLE_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Timeout for a single Airtable request, in seconds
    #[arg(long = "airtable-timeout-seconds", env = "AIRTABLE_TIMEOUT_SECONDS", default_value_t = 10)]
    pub timeout_seconds: u64,
}

impl AirtableSettings {
    #[must_use]
    pub fn to_airtable_config(&self) -> AirtableConfig {
        AirtableConfig {
            api_url: self.api_url.clone(),
            api_key: self.api_key.as_deref().map(Secret::new),
            base_id: self.base_id.clone(),
            table_name: Some(self.table_name.clone()),
            timeout: Duration::from_secs(self.timeout_seconds),
        }
    }
}
