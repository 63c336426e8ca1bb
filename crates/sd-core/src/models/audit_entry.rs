use crate::AuditAction;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One append-only audit record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    /// Username of the identity that performed the action.
    pub actor: String,
    pub action: AuditAction,
    pub target: Option<String>,
    pub details: Option<String>,
}

impl AuditEntry {
    pub fn new(
        actor: &str,
        action: AuditAction,
        target: Option<String>,
        details: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            actor: actor.to_string(),
            action,
            target,
            details,
        }
    }
}
