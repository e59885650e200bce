//! Auth Config

use clap::Args;
use ramal_app::auth::{AdminIdentity, Secret};

const PLACEHOLDER_JWT_SECRET: &str = "seu_token_seguro";
const PLACEHOLDER_ADMIN_USER: &str = "admin";
const PLACEHOLDER_ADMIN_PASS: &str = "admin";

/// Admin identity and token signing settings.
#[derive(Debug, Args)]
pub struct AuthConfig {
    /// Secret used to sign admin tokens (HS256)
    #[arg(long, env = "JWT_SECRET", hide_env_values = true, default_value = PLACEHOLDER_JWT_SECRET)]
    pub jwt_secret: String,

    /// Admin username
    #[arg(long, env = "ADMIN_USER", default_value = PLACEHOLDER_ADMIN_USER)]
    pub admin_user: String,

    /// Admin password
    #[arg(long, env = "ADMIN_PASS", hide_env_values = true, default_value = PLACEHOLDER_ADMIN_PASS)]
    pub admin_pass: String,
}

impl AuthConfig {
    #[must_use]
    pub fn admin_identity(&self) -> AdminIdentity {
        AdminIdentity {
            username: self.admin_user.clone(),
            password: Secret::new(self.admin_pass.as_str()),
        }
    }

    #[must_use]
    pub fn signing_secret(&self) -> Secret {
        Secret::new(self.jwt_secret.as_str())
    }

    /// Names of settings still set to their insecure placeholder values.
    #[must_use]
    pub fn insecure_defaults(&self) -> Vec<&'static str> {
        [
            ("JWT_SECRET", self.jwt_secret == PLACEHOLDER_JWT_SECRET),
            ("ADMIN_USER", self.admin_user == PLACEHOLDER_ADMIN_USER),
            ("ADMIN_PASS", self.admin_pass == PLACEHOLDER_ADMIN_PASS),
        ]
        .into_iter()
        .filter_map(|(name, placeholder)| placeholder.then_some(name))
        .collect()
    }
}
