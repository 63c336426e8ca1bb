use crate::{AccountStatus, Role};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered user of the dashboard.
///
/// Passwords are stored in the clear; this is demo-grade identity data with
/// no hashing or credential storage guarantees.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Identity {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub role: Role,
    pub status: AccountStatus,
    /// OpenRouter API key, if the user configured one.
    pub api_key: Option<String>,
    pub password: String,
    pub registered_at: DateTime<Utc>,
}

impl Identity {
    pub fn new(username: &str, email: &str, role: Role, password: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: username.to_string(),
            email: email.to_string(),
            role,
            status: AccountStatus::Approved,
            api_key: None,
            password: password.to_string(),
            registered_at: Utc::now(),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}
