//! Airtable REST client for agent records.

use async_trait::async_trait;
use reqwest::{Client, Response, Url};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{debug, error};

use crate::{
    airtable::{AirtableConfig, config::TableLocation, equality_formula},
    domain::agents::{
        errors::AgentsRepositoryError,
        records::AgentFields,
        repository::{AgentsRepository, EqualityFilter},
    },
};

/// HTTP client for a single Airtable table.
///
/// Built once at startup; configuration is validated on every call so a
/// missing credential only fails the requests that need the store.
#[derive(Debug, Clone)]
pub struct AirtableClient {
    config: AirtableConfig,
    http: Client,
}

impl AirtableClient {
    /// Create a new client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: AirtableConfig) -> Result<Self, AirtableError> {
        let http = Client::builder().timeout(config.timeout).build()?;

        Ok(Self { config, http })
    }

    /// List every record matching `formula`, following pagination offsets.
    ///
    /// # Errors
    ///
    /// Returns an error when configuration is incomplete, on HTTP failure or
    /// on an unexpected response.
    pub async fn list_records(
        &self,
        formula: &str,
    ) -> Result<Vec<AirtableRecord>, AirtableError> {
        let location = self.config.table_location()?;
        let url = self.table_url(&location)?;

        let mut records = Vec::new();
        let mut offset: Option<String> = None;

        loop {
            let mut query = vec![("filterByFormula", formula)];

            if let Some(offset) = offset.as_deref() {
                query.push(("offset", offset));
            }

            let response = self
                .http
                .get(url.clone())
                .bearer_auth(location.api_key.expose())
                .query(&query)
                .send()
                .await?;

            let page: ListRecordsResponse = successful(response, "list").await?.json().await?;

            records.extend(page.records);

            match page.offset {
                Some(next) => offset = Some(next),
                None => break,
            }
        }

        debug!(count = records.len(), "listed Airtable records");

        Ok(records)
    }

    /// Create a single record from `fields`.
    ///
    /// # Errors
    ///
    /// Returns an error when configuration is incomplete, on HTTP failure or
    /// on an unexpected response.
    pub async fn insert_record(
        &self,
        fields: &AgentFields,
    ) -> Result<AirtableRecord, AirtableError> {
        let location = self.config.table_location()?;
        let url = self.table_url(&location)?;

        let response = self
            .http
            .post(url)
            .bearer_auth(location.api_key.expose())
            .json(&CreateRecordRequest {
                fields,
                typecast: false,
            })
            .send()
            .await?;

        let record: AirtableRecord = successful(response, "create").await?.json().await?;

        debug!(id = %record.id, "created Airtable record");

        Ok(record)
    }

    fn table_url(&self, location: &TableLocation<'_>) -> Result<Url, AirtableError> {
        let mut url = Url::parse(&self.config.api_url)
            .map_err(|source| AirtableError::InvalidUrl(source.to_string()))?;

        url.path_segments_mut()
            .map_err(|()| AirtableError::InvalidUrl(self.config.api_url.clone()))?
            .pop_if_empty()
            .extend(["v0", location.base_id, location.table_name]);

        Ok(url)
    }
}

async fn successful(response: Response, operation: &str) -> Result<Response, AirtableError> {
    let status = response.status();

    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await.unwrap_or_default();

    Err(AirtableError::UnexpectedResponse(format!(
        "{operation} request failed with status {status}: {text}"
    )))
}

#[async_trait]
impl AgentsRepository for AirtableClient {
    async fn list_matching(
        &self,
        filter: &EqualityFilter,
    ) -> Result<Vec<AgentFields>, AgentsRepositoryError> {
        let records = self
            .list_records(&equality_formula(filter))
            .await
            .inspect_err(|source| error!("failed to query Airtable: {source}"))?;

        Ok(records
            .into_iter()
            .map(|record| AgentFields::from_store(record.fields))
            .collect())
    }

    async fn create_record(
        &self,
        fields: &AgentFields,
    ) -> Result<AgentFields, AgentsRepositoryError> {
        let record = self
            .insert_record(fields)
            .await
            .inspect_err(|source| error!("failed to create Airtable record: {source}"))?;

        Ok(AgentFields::from_store(record.fields))
    }
}

/// A record as returned by the Airtable API.
#[derive(Debug, Clone, Deserialize)]
pub struct AirtableRecord {
    pub id: String,

    #[serde(rename = "createdTime", default)]
    pub created_time: Option<String>,

    #[serde(default)]
    pub fields: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
struct ListRecordsResponse {
    records: Vec<AirtableRecord>,

    #[serde(default)]
    offset: Option<String>,
}

#[derive(Debug, Serialize)]
struct CreateRecordRequest<'a> {
    fields: &'a AgentFields,
    typecast: bool,
}

/// Errors that can occur when communicating with Airtable.
#[derive(Debug, Error)]
pub enum AirtableError {
    /// Required settings are absent or blank.
    #[error("missing required configuration: {}", .0.join(", "))]
    MissingConfiguration(Vec<&'static str>),

    /// The configured API URL cannot carry a table path.
    #[error("invalid Airtable API URL: {0}")]
    InvalidUrl(String),

    /// An HTTP transport, timeout or serialization error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Airtable returned a non-2xx response.
    #[error("unexpected response from Airtable: {0}")]
    UnexpectedResponse(String),
}

impl From<AirtableError> for AgentsRepositoryError {
    fn from(error: AirtableError) -> Self {
        match error {
            AirtableError::MissingConfiguration(missing) => Self::MissingConfiguration(missing),
            other => Self::Upstream(Box::new(other)),
        }
    }
}
