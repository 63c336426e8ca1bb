use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_PASSWORD_MIN_LENGTH, DEFAULT_SEED_DEMO_USERS,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Minimum accepted length when a user changes their password.
    pub password_min_length: usize,
    /// Seed the registry with the demo accounts at startup.
    pub seed_demo_users: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            password_min_length: DEFAULT_PASSWORD_MIN_LENGTH,
            seed_demo_users: DEFAULT_SEED_DEMO_USERS,
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.password_min_length == 0 || self.password_min_length > 128 {
            return Err(ConfigError::auth(format!(
                "auth.password_min_length must be 1-128, got {}",
                self.password_min_length
            )));
        }
        Ok(())
    }
}
