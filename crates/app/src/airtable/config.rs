//! Airtable connection settings.

use std::time::Duration;

use crate::{airtable::AirtableError, auth::Secret};

/// Environment variable holding the Airtable personal access token.
pub const API_KEY_VAR: &str = "AIRTABLE_API_KEY";

/// Environment variable holding the Airtable base identifier.
pub const BASE_ID_VAR: &str = "AIRTABLE_BASE_ID";

/// Environment variable holding the Airtable table name.
pub const TABLE_NAME_VAR: &str = "AIRTABLE_TABLE_NAME";

/// Public Airtable REST endpoint.
pub const DEFAULT_API_URL: &str = "https://api.airtable.com";

/// Table holding agent records unless overridden.
pub const DEFAULT_TABLE_NAME: &str = "Acessos";

/// Configuration for the Airtable record store.
///
/// Credentials are optional here so the process can start without them;
/// they are checked each time the store is used.
#[derive(Debug, Clone)]
pub struct AirtableConfig {
    /// REST endpoint, e.g. `"https://api.airtable.com"`.
    pub api_url: String,

    /// Personal access token.
    pub api_key: Option<Secret>,

    /// Base identifier (`app...`).
    pub base_id: Option<String>,

    /// Table name or identifier.
    pub table_name: Option<String>,

    /// Upper bound for a single HTTP request.
    pub timeout: Duration,
}

/// Credentials that passed the presence check.
#[derive(Debug)]
pub(crate) struct TableLocation<'a> {
    pub(crate) api_key: &'a Secret,
    pub(crate) base_id: &'a str,
    pub(crate) table_name: &'a str,
}

impl AirtableConfig {
    /// Resolve the table location, naming every missing setting.
    pub(crate) fn table_location(&self) -> Result<TableLocation<'_>, AirtableError> {
        let api_key = self.api_key.as_ref().filter(|key| !key.is_empty());
        let base_id = present(self.base_id.as_deref());
        let table_name = present(self.table_name.as_deref());

        match (api_key, base_id, table_name) {
            (Some(api_key), Some(base_id), Some(table_name)) => Ok(TableLocation {
                api_key,
                base_id,
                table_name,
            }),
            _ => {
                let missing = [
                    (API_KEY_VAR, api_key.is_none()),
                    (BASE_ID_VAR, base_id.is_none()),
                    (TABLE_NAME_VAR, table_name.is_none()),
                ]
                .into_iter()
                .filter_map(|(name, absent)| absent.then_some(name))
                .collect();

                Err(AirtableError::MissingConfiguration(missing))
            }
        }
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(key: Option<&str>, base: Option<&str>, table: Option<&str>) -> AirtableConfig {
        AirtableConfig {
            api_url: DEFAULT_API_URL.to_string(),
            api_key: key.map(Secret::new),
            base_id: base.map(ToString::to_string),
            table_name: table.map(ToString::to_string),
            timeout: Duration::from_secs(10),
        }
    }

    #[test]
    fn complete_config_resolves() {
        let config = config(Some("pat"), Some("app123"), Some(DEFAULT_TABLE_NAME));

        let location = config.table_location();

        assert!(
            matches!(location, Ok(TableLocation { base_id: "app123", table_name: "Acessos", .. })),
            "complete config should resolve"
        );
    }

    #[test]
    fn missing_values_are_all_named() {
        let config = config(None, Some("  "), Some(DEFAULT_TABLE_NAME));

        let result = config.table_location();

        assert!(
            matches!(
                result,
                Err(AirtableError::MissingConfiguration(ref missing))
                    if missing == &[API_KEY_VAR, BASE_ID_VAR]
            ),
            "absent and blank settings should both be reported"
        );
    }

    #[test]
    fn empty_table_name_is_missing() {
        let config = config(Some("pat"), Some("app123"), Some(""));

        assert!(
            matches!(
                config.table_location(),
                Err(AirtableError::MissingConfiguration(ref missing)) if missing == &[TABLE_NAME_VAR]
            ),
            "empty table name should be reported"
        );
    }
}
