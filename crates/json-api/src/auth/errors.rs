//! Auth error mapping.

use tracing::error;

use ramal_app::auth::AuthServiceError;

use crate::errors::ApiError;

pub(crate) fn into_api_error(error: AuthServiceError) -> ApiError {
    match error {
        AuthServiceError::InvalidCredentials => ApiError::unauthorized("Credenciais inválidas."),
        AuthServiceError::TokenMissing => ApiError::unauthorized("Token não fornecido."),
        AuthServiceError::TokenExpired => ApiError::forbidden("Token expirado."),
        AuthServiceError::TokenInvalid => ApiError::forbidden("Token inválido."),
        AuthServiceError::Token(source) => {
            error!("failed to process admin token: {source}");

            ApiError::internal_server_error()
        }
    }
}
