//! Agent Records

use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use tracing::debug;

use crate::domain::agents::errors::AgentsServiceError;

/// Name of the field that uniquely identifies an agent.
pub const RAMAL_FIELD: &str = "Ramal";

/// A single agent field value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Boolean(bool),
    Number(Number),
    String(String),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boolean(value) => write!(f, "{value}"),
            Self::Number(value) => write!(f, "{value}"),
            Self::String(value) => f.write_str(value),
        }
    }
}

impl TryFrom<Value> for FieldValue {
    type Error = Value;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Bool(value) => Ok(Self::Boolean(value)),
            Value::Number(value) => Ok(Self::Number(value)),
            Value::String(value) => Ok(Self::String(value)),
            other @ (Value::Null | Value::Array(_) | Value::Object(_)) => Err(other),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

/// Extension number identifying an agent.
///
/// Always non-empty and free of surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ramal(String);

impl Ramal {
    /// Parse a raw extension number, rejecting blank input.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();

        (!value.is_empty()).then(|| Self(value.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Ramal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<&FieldValue> for Ramal {
    type Error = AgentsServiceError;

    fn try_from(value: &FieldValue) -> Result<Self, Self::Error> {
        match value {
            FieldValue::String(value) => {
                Self::parse(value).ok_or(AgentsServiceError::MissingRamal)
            }
            FieldValue::Number(value) => {
                Self::parse(&value.to_string()).ok_or(AgentsServiceError::MissingRamal)
            }
            FieldValue::Boolean(_) => Err(AgentsServiceError::InvalidData(format!(
                "{RAMAL_FIELD} must be a string or a number"
            ))),
        }
    }
}

/// Ordered set of agent fields, as stored in the directory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgentFields(BTreeMap<String, FieldValue>);

impl AgentFields {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.0.insert(name.into(), value.into());
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.0.get(name)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldValue)> {
        self.0.iter()
    }

    /// Build from record-store data, dropping values outside the supported
    /// scalar types (linked records, attachments, ...).
    #[must_use]
    pub fn from_store(fields: Map<String, Value>) -> Self {
        fields
            .into_iter()
            .filter_map(|(name, value)| match FieldValue::try_from(value) {
                Ok(value) => Some((name, value)),
                Err(_unsupported) => {
                    debug!(field = %name, "skipping non-scalar field from record store");

                    None
                }
            })
            .collect()
    }
}

impl FromIterator<(String, FieldValue)> for AgentFields {
    fn from_iter<I: IntoIterator<Item = (String, FieldValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl TryFrom<Map<String, Value>> for AgentFields {
    type Error = AgentsServiceError;

    fn try_from(fields: Map<String, Value>) -> Result<Self, Self::Error> {
        fields
            .into_iter()
            .map(|(name, value)| match FieldValue::try_from(value) {
                Ok(value) => Ok((name, value)),
                Err(_unsupported) => Err(AgentsServiceError::InvalidData(format!(
                    "field \"{name}\" must be a string, number or boolean"
                ))),
            })
            .collect()
    }
}
