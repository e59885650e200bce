//! Agent Errors

use tracing::error;

use ramal_app::agents::AgentsServiceError;

use crate::errors::ApiError;

/// Directory operation whose failure is being reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Operation {
    Lookup,
    Create,
}

impl Operation {
    fn upstream_message(self) -> &'static str {
        match self {
            Self::Lookup => "Erro ao consultar dados do Airtable.",
            Self::Create => "Erro ao salvar dados no Airtable.",
        }
    }
}

pub(crate) fn into_api_error(error: AgentsServiceError, operation: Operation) -> ApiError {
    match error {
        AgentsServiceError::MissingRamal if operation == Operation::Lookup => {
            ApiError::bad_request("Número do Ramal não fornecido.")
        }
        AgentsServiceError::MissingRamal | AgentsServiceError::InvalidData(_) => {
            ApiError::bad_request("Dados incompletos.")
        }
        AgentsServiceError::NotFound => ApiError::not_found("Ramal não encontrado."),
        AgentsServiceError::AlreadyExists => ApiError::conflict("Ramal já cadastrado."),
        AgentsServiceError::MissingConfiguration(missing) => {
            error!(?operation, missing = %missing.join(", "), "record store is not configured");

            ApiError::missing_configuration(&missing)
        }
        AgentsServiceError::Store(source) => {
            error!(?operation, "record store request failed: {source:?}");

            ApiError::internal(operation.upstream_message())
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use ramal_app::agents::AgentsRepositoryError;
    use salvo::http::StatusCode;

    use super::*;

    #[test]
    fn missing_ramal_message_depends_on_operation() {
        let lookup = into_api_error(AgentsServiceError::MissingRamal, Operation::Lookup);
        let create = into_api_error(AgentsServiceError::MissingRamal, Operation::Create);

        assert_eq!(lookup.status(), StatusCode::BAD_REQUEST);
        assert_eq!(lookup.message(), "Número do Ramal não fornecido.");
        assert_eq!(create.status(), StatusCode::BAD_REQUEST);
        assert_eq!(create.message(), "Dados incompletos.");
    }

    #[test]
    fn upstream_failure_hides_detail() {
        let source = AgentsRepositoryError::Upstream(Box::new(io::Error::other("secret detail")));

        let error = into_api_error(AgentsServiceError::Store(source), Operation::Create);

        assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.message(), "Erro ao salvar dados no Airtable.");
    }

    #[test]
    fn missing_configuration_names_variables() {
        let error = into_api_error(
            AgentsServiceError::MissingConfiguration(vec!["AIRTABLE_API_KEY"]),
            Operation::Lookup,
        );

        assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            error.message(),
            "Variáveis de ambiente obrigatórias ausentes: AIRTABLE_API_KEY"
        );
    }
}
