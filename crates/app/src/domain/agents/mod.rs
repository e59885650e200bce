//! Agents

pub mod data;
pub mod errors;
pub mod records;
pub mod repository;
pub mod service;

pub use errors::{AgentsRepositoryError, AgentsServiceError};
pub use service::*;
