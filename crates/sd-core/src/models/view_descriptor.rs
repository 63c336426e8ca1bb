use crate::Role;

use serde::Serialize;

/// Static declaration of a reachable screen and the roles allowed to reach
/// it. Declared once at startup, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ViewDescriptor {
    pub path: &'static str,
    pub label: &'static str,
    pub roles: &'static [Role],
}

impl ViewDescriptor {
    pub const fn new(path: &'static str, label: &'static str, roles: &'static [Role]) -> Self {
        Self { path, label, roles }
    }

    pub fn allows(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }
}
