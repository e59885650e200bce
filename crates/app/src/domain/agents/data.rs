//! Agents Data

use crate::domain::agents::{
    errors::AgentsServiceError,
    records::{AgentFields, RAMAL_FIELD, Ramal},
};

/// New Agent Data
///
/// A field-set known to carry a usable `Ramal`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAgent {
    pub ramal: Ramal,
    pub fields: AgentFields,
}

impl TryFrom<AgentFields> for NewAgent {
    type Error = AgentsServiceError;

    fn try_from(fields: AgentFields) -> Result<Self, Self::Error> {
        let ramal = fields
            .get(RAMAL_FIELD)
            .ok_or(AgentsServiceError::MissingRamal)
            .and_then(Ramal::try_from)?;

        Ok(Self { ramal, fields })
    }
}
