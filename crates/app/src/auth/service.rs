//! Auth service.

use jiff::Timestamp;
use mockall::automock;
use subtle::ConstantTimeEq;
use tracing::debug;

use crate::auth::{
    AdminIdentity, AuthServiceError, Claims, Secret, TOKEN_TTL_SECONDS, decode_claims,
    sign_claims,
};

/// Token authority for the single configured admin identity.
#[derive(Debug, Clone)]
pub struct JwtAuthService {
    admin: AdminIdentity,
    secret: Secret,
}

impl JwtAuthService {
    #[must_use]
    pub fn new(admin: AdminIdentity, secret: Secret) -> Self {
        Self { admin, secret }
    }

    /// Issue a token as of `now`.
    ///
    /// # Errors
    ///
    /// Returns [`AuthServiceError::InvalidCredentials`] when either value
    /// does not match the configured identity.
    pub fn issue_at(
        &self,
        username: &str,
        password: &str,
        now: Timestamp,
    ) -> Result<String, AuthServiceError> {
        if !self.credentials_match(username, password) {
            return Err(AuthServiceError::InvalidCredentials);
        }

        let claims = Claims {
            user: username.to_string(),
            exp: now.as_second() + TOKEN_TTL_SECONDS,
        };

        Ok(sign_claims(&claims, &self.secret)?)
    }

    /// Verify a token as of `now`, returning its subject.
    ///
    /// # Errors
    ///
    /// Returns [`AuthServiceError::TokenMissing`] for an empty token,
    /// [`AuthServiceError::TokenInvalid`] for a bad signature or shape and
    /// [`AuthServiceError::TokenExpired`] once `now` reaches `exp`.
    pub fn verify_at(&self, token: &str, now: Timestamp) -> Result<String, AuthServiceError> {
        if token.trim().is_empty() {
            return Err(AuthServiceError::TokenMissing);
        }

        let claims = decode_claims(token, &self.secret)?;

        if now.as_second() >= claims.exp {
            debug!(user = %claims.user, exp = claims.exp, "rejecting expired token");

            return Err(AuthServiceError::TokenExpired);
        }

        Ok(claims.user)
    }

    fn credentials_match(&self, username: &str, password: &str) -> bool {
        let username_matches = username.as_bytes().ct_eq(self.admin.username.as_bytes());
        let password_matches = password.as_bytes().ct_eq(self.admin.password.as_bytes());

        (username_matches & password_matches).into()
    }
}

impl AuthService for JwtAuthService {
    fn issue(&self, username: &str, password: &str) -> Result<String, AuthServiceError> {
        self.issue_at(username, password, Timestamp::now())
    }

    fn verify(&self, token: &str) -> Result<String, AuthServiceError> {
        self.verify_at(token, Timestamp::now())
    }
}

#[automock]
pub trait AuthService: Send + Sync {
    /// Exchange admin credentials for a signed bearer token.
    fn issue(&self, username: &str, password: &str) -> Result<String, AuthServiceError>;

    /// Check a bearer token and return the subject it was issued to.
    fn verify(&self, token: &str) -> Result<String, AuthServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    const ISSUED_AT: i64 = 1_700_000_000;

    fn service() -> JwtAuthService {
        JwtAuthService::new(
            AdminIdentity {
                username: "admin".to_string(),
                password: Secret::new("admin"),
            },
            Secret::new("seu_token_seguro"),
        )
    }

    fn at(seconds: i64) -> Result<Timestamp, jiff::Error> {
        Timestamp::from_second(seconds)
    }

    fn at_half_past(seconds: i64) -> Result<Timestamp, jiff::Error> {
        Timestamp::new(seconds, 500_000_000)
    }

    #[test]
    fn issued_token_verifies_and_carries_subject() -> TestResult {
        let auth = service();
        let token = auth.issue_at("admin", "admin", at(ISSUED_AT)?)?;

        assert_eq!(auth.verify_at(&token, at(ISSUED_AT)?)?, "admin");

        Ok(())
    }

    #[test]
    fn token_is_valid_for_the_whole_window() -> TestResult {
        let auth = service();
        let token = auth.issue_at("admin", "admin", at(ISSUED_AT)?)?;

        for offset in [0, 1, 60, 299] {
            assert!(
                auth.verify_at(&token, at(ISSUED_AT + offset)?).is_ok(),
                "token must be valid {offset}s after issuance"
            );
        }

        assert!(
            auth.verify_at(&token, at_half_past(ISSUED_AT + TOKEN_TTL_SECONDS - 1)?)
                .is_ok(),
            "token must be valid just under the window"
        );

        Ok(())
    }

    #[test]
    fn token_expires_after_the_window() -> TestResult {
        let auth = service();
        let token = auth.issue_at("admin", "admin", at(ISSUED_AT)?)?;

        for offset in [TOKEN_TTL_SECONDS, TOKEN_TTL_SECONDS + 1, 3_600] {
            let result = auth.verify_at(&token, at(ISSUED_AT + offset)?);

            assert!(
                matches!(result, Err(AuthServiceError::TokenExpired)),
                "token must be expired {offset}s after issuance"
            );
        }

        Ok(())
    }

    #[test]
    fn token_expires_within_the_last_second() -> TestResult {
        let auth = service();
        let token = auth.issue_at("admin", "admin", at(ISSUED_AT)?)?;

        let result = auth.verify_at(&token, at_half_past(ISSUED_AT + TOKEN_TTL_SECONDS)?);

        assert!(
            matches!(result, Err(AuthServiceError::TokenExpired)),
            "token must be expired half a second past exp"
        );

        Ok(())
    }

    #[test]
    fn wrong_credentials_are_rejected_without_distinction() -> TestResult {
        let auth = service();

        for (username, password) in [
            ("admin", "wrong"),
            ("wrong", "admin"),
            ("wrong", "wrong"),
            ("", ""),
            ("admin", ""),
            ("Admin", "admin"),
        ] {
            let result = auth.issue_at(username, password, at(ISSUED_AT)?);

            assert!(
                matches!(result, Err(AuthServiceError::InvalidCredentials)),
                "{username}/{password} must be rejected"
            );
        }

        Ok(())
    }

    #[test]
    fn token_signed_with_other_secret_is_invalid() -> TestResult {
        let other = JwtAuthService::new(
            AdminIdentity {
                username: "admin".to_string(),
                password: Secret::new("admin"),
            },
            Secret::new("another-secret"),
        );

        let token = other.issue_at("admin", "admin", at(ISSUED_AT)?)?;
        let result = service().verify_at(&token, at(ISSUED_AT)?);

        assert!(
            matches!(result, Err(AuthServiceError::TokenInvalid)),
            "foreign token must be invalid"
        );

        Ok(())
    }

    #[test]
    fn empty_token_is_missing() -> TestResult {
        let result = service().verify_at("  ", at(ISSUED_AT)?);

        assert!(
            matches!(result, Err(AuthServiceError::TokenMissing)),
            "blank token must be reported as missing"
        );

        Ok(())
    }

    #[test]
    fn tampered_token_is_invalid() -> TestResult {
        let auth = service();
        let mut token = auth.issue_at("admin", "admin", at(ISSUED_AT)?)?;

        token.push('x');

        let result = auth.verify_at(&token, at(ISSUED_AT)?);

        assert!(
            matches!(result, Err(AuthServiceError::TokenInvalid)),
            "tampered token must be invalid"
        );

        Ok(())
    }
}
