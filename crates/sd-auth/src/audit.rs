use sd_core::{AuditAction, AuditEntry};

/// Append-only, in-memory action trail. Nothing is ever removed or edited;
/// readers get views filtered and ordered, never mutated.
#[derive(Debug, Default)]
pub struct AuditLog {
    entries: Vec<AuditEntry>,
}

impl AuditLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(
        &mut self,
        actor: &str,
        action: AuditAction,
        target: Option<String>,
        details: Option<String>,
    ) {
        self.entries
            .push(AuditEntry::new(actor, action, target, details));
    }

    /// Up to `limit` newest entries, newest first.
    pub fn recent(&self, limit: usize) -> Vec<&AuditEntry> {
        self.entries.iter().rev().take(limit).collect()
    }

    pub fn by_action(&self, action: AuditAction) -> Vec<&AuditEntry> {
        self.entries
            .iter()
            .rev()
            .filter(|e| e.action == action)
            .collect()
    }

    pub fn for_actor(&self, actor: &str) -> Vec<&AuditEntry> {
        self.entries
            .iter()
            .rev()
            .filter(|e| e.actor == actor)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
