//! Auth service errors.

use thiserror::Error;

use crate::auth::TokenError;

#[derive(Debug, Error)]
pub enum AuthServiceError {
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("bearer token missing")]
    TokenMissing,

    #[error("bearer token expired")]
    TokenExpired,

    #[error("bearer token invalid")]
    TokenInvalid,

    #[error("token processing error")]
    Token(#[source] TokenError),
}

impl From<TokenError> for AuthServiceError {
    fn from(error: TokenError) -> Self {
        match error {
            TokenError::Malformed(_) => Self::TokenInvalid,
            TokenError::Signing(_) => Self::Token(error),
        }
    }
}
