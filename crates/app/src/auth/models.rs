//! Auth data models.

use std::fmt;

use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

/// Lifetime of an issued admin token, in seconds.
pub const TOKEN_TTL_SECONDS: i64 = 5 * 60;

/// Secret string material (signing keys, passwords).
///
/// Redacted in debug output and wiped from memory on drop.
#[derive(Clone)]
pub struct Secret {
    value: String,
}

impl Secret {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    #[must_use]
    pub fn expose(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.value.as_bytes()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(**redacted**)")?;
        Ok(())
    }
}

impl Drop for Secret {
    fn drop(&mut self) {
        self.value.zeroize();
    }
}

/// The single administrative principal allowed to log in.
#[derive(Debug, Clone)]
pub struct AdminIdentity {
    pub username: String,
    pub password: Secret,
}

/// Claims carried by an admin bearer token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject the token was issued to.
    pub user: String,

    /// Expiry as unix seconds.
    pub exp: i64,
}
