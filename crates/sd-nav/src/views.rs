use sd_core::{Role, ViewDescriptor};

/// The login screen. Reachable without a session and not part of the
/// role-gated view table.
pub static LOGIN_VIEW: ViewDescriptor = ViewDescriptor::new("/login", "Sign In", &[]);

/// Every role-gated screen of the dashboard, in menu declaration order.
/// Order matters: a role's default view is its first entry here.
pub static DEFAULT_VIEWS: &[ViewDescriptor] = &[
    ViewDescriptor::new(
        "/dashboard",
        "Strategy Dashboard",
        &[Role::Admin, Role::Trader, Role::Viewer, Role::Guest],
    ),
    ViewDescriptor::new("/portfolio", "Portfolio Management", &[Role::Trader]),
    ViewDescriptor::new("/admin/monitoring", "System Monitoring", &[Role::Admin]),
    ViewDescriptor::new("/admin/audit", "Admin Audit Log", &[Role::Admin]),
    ViewDescriptor::new(
        "/settings",
        "Settings",
        &[Role::Admin, Role::Trader, Role::Viewer],
    ),
];
