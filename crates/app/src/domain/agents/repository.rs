//! Agents repository: the record-store capability the gateway relies on.

use async_trait::async_trait;
use mockall::automock;

use crate::domain::agents::{
    errors::AgentsRepositoryError,
    records::{AgentFields, RAMAL_FIELD, Ramal},
};

/// Equality filter over a single field.
///
/// Holds the raw comparison value; backends are responsible for escaping it
/// when rendering their own query syntax.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EqualityFilter {
    field: &'static str,
    value: String,
}

impl EqualityFilter {
    #[must_use]
    pub fn new(field: &'static str, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }

    /// Match records whose `Ramal` equals `ramal`.
    #[must_use]
    pub fn ramal(ramal: &Ramal) -> Self {
        Self::new(RAMAL_FIELD, ramal.as_str())
    }

    #[must_use]
    pub fn field(&self) -> &'static str {
        self.field
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Whether `fields` satisfies this filter, comparing textual forms.
    #[must_use]
    pub fn matches(&self, fields: &AgentFields) -> bool {
        fields
            .get(self.field)
            .is_some_and(|value| value.to_string() == self.value)
    }
}

#[automock]
#[async_trait]
pub trait AgentsRepository: Send + Sync {
    /// List every record matching `filter`, in store order.
    async fn list_matching(
        &self,
        filter: &EqualityFilter,
    ) -> Result<Vec<AgentFields>, AgentsRepositoryError>;

    /// Insert a new record and return the stored field-set.
    async fn create_record(
        &self,
        fields: &AgentFields,
    ) -> Result<AgentFields, AgentsRepositoryError>;
}
