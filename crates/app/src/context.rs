//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    agents::{AgentsService, DirectoryAgentsService},
    airtable::{AirtableClient, AirtableConfig, AirtableError},
    auth::{AdminIdentity, AuthService, JwtAuthService, Secret},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to build Airtable client")]
    Airtable(#[source] AirtableError),
}

#[derive(Clone)]
pub struct AppContext {
    pub agents: Arc<dyn AgentsService>,
    pub auth: Arc<dyn AuthService>,
}

impl AppContext {
    /// Build application context from store and auth settings.
    ///
    /// Store credentials are not checked here; a missing value only fails
    /// the requests that reach the store.
    ///
    /// # Errors
    ///
    /// Returns an error when the HTTP client cannot be constructed.
    pub fn new(
        airtable: AirtableConfig,
        admin: AdminIdentity,
        signing_secret: Secret,
    ) -> Result<Self, AppInitError> {
        let client = AirtableClient::new(airtable).map_err(AppInitError::Airtable)?;

        Ok(Self {
            agents: Arc::new(DirectoryAgentsService::new(client)),
            auth: Arc::new(JwtAuthService::new(admin, signing_secret)),
        })
    }
}
