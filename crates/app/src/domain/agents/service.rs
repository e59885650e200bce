//! Agents service: the gateway in front of the agent directory.

use async_trait::async_trait;
use mockall::automock;
use tracing::{debug, info};

use crate::domain::agents::{
    data::NewAgent,
    errors::AgentsServiceError,
    records::{AgentFields, Ramal},
    repository::{AgentsRepository, EqualityFilter},
};

/// Agent directory gateway over any [`AgentsRepository`].
///
/// Uniqueness of `Ramal` is enforced by looking the key up before inserting.
/// The two steps are not atomic: concurrent creators of the same `Ramal` can
/// both pass the check, because the record store offers no conditional write.
#[derive(Debug, Clone)]
pub struct DirectoryAgentsService<R> {
    repository: R,
}

impl<R> DirectoryAgentsService<R> {
    #[must_use]
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

impl<R: AgentsRepository> DirectoryAgentsService<R> {
    async fn find_by_ramal(&self, ramal: &Ramal) -> Result<Vec<AgentFields>, AgentsServiceError> {
        let records = self
            .repository
            .list_matching(&EqualityFilter::ramal(ramal))
            .await?;

        debug!(%ramal, matches = records.len(), "looked up agent");

        Ok(records)
    }
}

#[async_trait]
impl<R: AgentsRepository> AgentsService for DirectoryAgentsService<R> {
    async fn get_agent(&self, ramal: &str) -> Result<AgentFields, AgentsServiceError> {
        let ramal = Ramal::parse(ramal).ok_or(AgentsServiceError::MissingRamal)?;

        self.find_by_ramal(&ramal)
            .await?
            .into_iter()
            .next()
            .ok_or(AgentsServiceError::NotFound)
    }

    async fn create_agent(&self, fields: AgentFields) -> Result<Ramal, AgentsServiceError> {
        let agent = NewAgent::try_from(fields)?;

        if !self.find_by_ramal(&agent.ramal).await?.is_empty() {
            return Err(AgentsServiceError::AlreadyExists);
        }

        self.repository.create_record(&agent.fields).await?;

        info!(ramal = %agent.ramal, "agent created");

        Ok(agent.ramal)
    }
}

#[automock]
#[async_trait]
pub trait AgentsService: Send + Sync {
    /// Retrieve the field-set of the agent registered under `ramal`.
    async fn get_agent(&self, ramal: &str) -> Result<AgentFields, AgentsServiceError>;

    /// Register a new agent, refusing a `Ramal` that already exists.
    async fn create_agent(&self, fields: AgentFields) -> Result<Ramal, AgentsServiceError>;
}
