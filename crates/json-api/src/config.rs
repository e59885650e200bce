//! Server configuration module

use clap::Parser;

use crate::config::{
    airtable::AirtableSettings, auth::AuthConfig, observability::LoggingConfig,
    server::ServerRuntimeConfig,
};

pub(crate) mod airtable;
pub(crate) mod auth;
pub(crate) mod observability;
pub(crate) mod server;

/// Portal de Acessos API server configuration
#[derive(Debug, Parser)]
#[command(name = "ramal-json", about = "Portal de Acessos API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Airtable record store settings.
    #[command(flatten)]
    pub airtable: AirtableSettings,

    /// Admin identity and token signing settings.
    #[command(flatten)]
    pub auth: AuthConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}
