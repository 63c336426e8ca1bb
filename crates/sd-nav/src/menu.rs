use crate::policy::NavPolicy;

use sd_core::{Role, ViewDescriptor};

impl NavPolicy {
    /// Menu entries for the current session: exactly the permitted views, in
    /// declaration order. Empty without a session. Derived on every call,
    /// never cached, so the menu can never drift from the router.
    pub fn menu(&self, role: Option<Role>) -> Vec<&'static ViewDescriptor> {
        match role {
            Some(role) => self.permitted_views(role),
            None => Vec::new(),
        }
    }
}
