//! Agents service errors.

use std::error::Error as StdError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgentsServiceError {
    #[error("ramal not provided")]
    MissingRamal,

    #[error("invalid agent data: {0}")]
    InvalidData(String),

    #[error("agent not found")]
    NotFound,

    #[error("agent already exists")]
    AlreadyExists,

    #[error("missing required configuration: {}", .0.join(", "))]
    MissingConfiguration(Vec<&'static str>),

    #[error("record store error")]
    Store(#[source] AgentsRepositoryError),
}

impl From<AgentsRepositoryError> for AgentsServiceError {
    fn from(error: AgentsRepositoryError) -> Self {
        match error {
            AgentsRepositoryError::MissingConfiguration(missing) => {
                Self::MissingConfiguration(missing)
            }
            AgentsRepositoryError::Upstream(_) => Self::Store(error),
        }
    }
}

/// Errors reported by a record store backend.
#[derive(Debug, Error)]
pub enum AgentsRepositoryError {
    #[error("missing required configuration: {}", .0.join(", "))]
    MissingConfiguration(Vec<&'static str>),

    #[error("record store request failed")]
    Upstream(#[source] Box<dyn StdError + Send + Sync>),
}
