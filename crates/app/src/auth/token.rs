//! Admin token signing and decoding (HS256 JWT).

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use thiserror::Error;

use crate::auth::{Claims, Secret};

/// Signing algorithm for admin tokens.
pub const TOKEN_ALGORITHM: Algorithm = Algorithm::HS256;

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("failed to sign token")]
    Signing(#[source] jsonwebtoken::errors::Error),

    #[error("token is malformed or its signature does not match")]
    Malformed(#[source] jsonwebtoken::errors::Error),
}

/// Sign `claims` with the shared secret.
///
/// # Errors
///
/// Returns an error if the claims cannot be serialised or signed.
pub fn sign_claims(claims: &Claims, secret: &Secret) -> Result<String, TokenError> {
    encode(
        &Header::new(TOKEN_ALGORITHM),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(TokenError::Signing)
}

/// Decode `token` and check its signature.
///
/// Expiry is not checked here; callers compare `exp` against their own clock.
///
/// # Errors
///
/// Returns [`TokenError::Malformed`] for any structural or signature failure.
pub fn decode_claims(token: &str, secret: &Secret) -> Result<Claims, TokenError> {
    let mut validation = Validation::new(TOKEN_ALGORITHM);

    validation.validate_exp = false;

    decode::<Claims>(token, &DecodingKey::from_secret(secret.as_bytes()), &validation)
        .map(|data| data.claims)
        .map_err(TokenError::Malformed)
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn claims() -> Claims {
        Claims {
            user: "admin".to_string(),
            exp: 1_700_000_300,
        }
    }

    #[test]
    fn signed_token_decodes_with_same_secret() -> TestResult {
        let secret = Secret::new("top-secret");
        let token = sign_claims(&claims(), &secret)?;

        assert_eq!(decode_claims(&token, &secret)?, claims());

        Ok(())
    }

    #[test]
    fn decode_rejects_foreign_secret() -> TestResult {
        let token = sign_claims(&claims(), &Secret::new("one"))?;

        let result = decode_claims(&token, &Secret::new("two"));

        assert!(
            matches!(result, Err(TokenError::Malformed(_))),
            "foreign signature must be rejected"
        );

        Ok(())
    }

    #[test]
    fn decode_rejects_garbage() {
        let result = decode_claims("not-a-jwt", &Secret::new("one"));

        assert!(
            matches!(result, Err(TokenError::Malformed(_))),
            "garbage must be rejected"
        );
    }

    #[test]
    fn decode_ignores_expiry() -> TestResult {
        let secret = Secret::new("top-secret");
        let expired = Claims {
            user: "admin".to_string(),
            exp: 1,
        };

        let token = sign_claims(&expired, &secret)?;

        assert_eq!(decode_claims(&token, &secret)?.exp, 1);

        Ok(())
    }
}
