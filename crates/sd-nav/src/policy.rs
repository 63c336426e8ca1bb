use crate::views::DEFAULT_VIEWS;

use sd_core::{Role, ViewDescriptor};

/// The single source of truth for which role may reach which view.
///
/// Both the router and the menu builder consult the same policy instance,
/// so they cannot disagree. Role checks live here and nowhere else.
#[derive(Debug, Clone, Copy)]
pub struct NavPolicy {
    views: &'static [ViewDescriptor],
}

impl NavPolicy {
    /// Policy over a custom view table.
    pub fn new(views: &'static [ViewDescriptor]) -> Self {
        Self { views }
    }

    /// The full view table, in declaration order.
    pub fn views(&self) -> &'static [ViewDescriptor] {
        self.views
    }

    /// Views `role` may reach, in declaration order. Deterministic: the same
    /// role always yields the same sequence.
    pub fn permitted_views(&self, role: Role) -> Vec<&'static ViewDescriptor> {
        self.views.iter().filter(|v| v.allows(role)).collect()
    }

    /// Where a role lands after login, or when it requests a view outside
    /// its permitted set. `None` when the role has no views at all.
    pub fn default_view(&self, role: Role) -> Option<&'static ViewDescriptor> {
        self.views.iter().find(|v| v.allows(role))
    }

    /// Look up a view by path, permitted or not.
    pub fn view_at(&self, path: &str) -> Option<&'static ViewDescriptor> {
        self.views.iter().find(|v| v.path == path)
    }

    pub fn is_permitted(&self, role: Role, path: &str) -> bool {
        self.view_at(path).is_some_and(|v| v.allows(role))
    }
}

impl Default for NavPolicy {
    fn default() -> Self {
        Self {
            views: DEFAULT_VIEWS,
        }
    }
}
