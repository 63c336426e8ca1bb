use crate::policy::NavPolicy;
use crate::views::LOGIN_VIEW;

use sd_core::{Role, ViewDescriptor};

use log::debug;

/// What the presentation layer should do with a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteOutcome {
    /// Render the view at the requested path.
    Render(&'static ViewDescriptor),
    /// Requested path is outside the permitted set; go to the default view.
    Redirect(&'static ViewDescriptor),
    /// No session; go to the login view.
    RedirectToLogin,
    /// Authenticated, but the role has no permitted views at all. Rendered
    /// as an explicit dead end instead of redirecting in a loop.
    NoAccess,
}

impl NavPolicy {
    /// Decide a navigation request.
    ///
    /// `role` is the current session's role, `None` when unauthenticated.
    /// Runs on every navigation event; unknown paths are treated the same
    /// as known-but-forbidden ones.
    pub fn route(&self, role: Option<Role>, path: &str) -> RouteOutcome {
        let Some(role) = role else {
            if path == LOGIN_VIEW.path {
                return RouteOutcome::Render(&LOGIN_VIEW);
            }
            return RouteOutcome::RedirectToLogin;
        };

        // A logged-in user has no business on the login screen.
        if path == LOGIN_VIEW.path {
            return match self.default_view(role) {
                Some(view) => RouteOutcome::Redirect(view),
                None => RouteOutcome::NoAccess,
            };
        }

        if let Some(view) = self.view_at(path) {
            if view.allows(role) {
                return RouteOutcome::Render(view);
            }
        }

        debug!("{role} denied {path}, redirecting to default view");
        match self.default_view(role) {
            Some(view) => RouteOutcome::Redirect(view),
            None => RouteOutcome::NoAccess,
        }
    }

    /// Where a fresh login or registration lands.
    pub fn post_login_view(&self, role: Role) -> Option<&'static ViewDescriptor> {
        self.default_view(role)
    }
}
