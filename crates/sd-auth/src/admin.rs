use crate::audit::AuditLog;
use crate::error::{AuthError, Result as AuthErrorResult};
use crate::session::SessionStore;

use sd_core::{AccountStatus, AuditAction, Identity, Role};

use std::panic::Location;

use error_location::ErrorLocation;
use log::info;

/// Admin-only identity management. Every successful mutation lands in the
/// audit log under the acting admin's name.

#[track_caller]
fn require_admin(store: &SessionStore) -> AuthErrorResult<String> {
    let identity = store.current().ok_or(AuthError::NotAuthenticated {
        location: ErrorLocation::from(Location::caller()),
    })?;

    if !identity.is_admin() {
        return Err(AuthError::AdminRequired {
            role: identity.role,
            location: ErrorLocation::from(Location::caller()),
        });
    }
    Ok(identity.username.clone())
}

#[track_caller]
fn resolve_pending(
    store: &mut SessionStore,
    username: &str,
    verdict: AccountStatus,
    action: AuditAction,
    audit: &mut AuditLog,
    actor: &str,
) -> AuthErrorResult<()> {
    let identity = store.registry_mut().find_by_username_mut(username).ok_or(
        AuthError::UnknownUser {
            username: username.to_string(),
            location: ErrorLocation::from(Location::caller()),
        },
    )?;

    if identity.status != AccountStatus::Pending {
        return Err(AuthError::NotPending {
            username: username.to_string(),
            status: identity.status,
            location: ErrorLocation::from(Location::caller()),
        });
    }

    identity.status = verdict;
    info!("{actor} set {username} to {verdict}");
    audit.record(actor, action, Some(username.to_string()), None);
    Ok(())
}

/// Approve a pending registration.
#[track_caller]
pub fn approve_user(
    store: &mut SessionStore,
    audit: &mut AuditLog,
    username: &str,
) -> AuthErrorResult<()> {
    let actor = require_admin(store)?;
    resolve_pending(
        store,
        username,
        AccountStatus::Approved,
        AuditAction::UserApproved,
        audit,
        &actor,
    )
}

/// Deny a pending registration. Denied accounts cannot log in.
#[track_caller]
pub fn deny_user(
    store: &mut SessionStore,
    audit: &mut AuditLog,
    username: &str,
) -> AuthErrorResult<()> {
    let actor = require_admin(store)?;
    resolve_pending(
        store,
        username,
        AccountStatus::Denied,
        AuditAction::UserDenied,
        audit,
        &actor,
    )
}

/// Rewrite a user's role. The only path by which a role ever changes.
#[track_caller]
pub fn change_role(
    store: &mut SessionStore,
    audit: &mut AuditLog,
    username: &str,
    new_role: Role,
) -> AuthErrorResult<()> {
    let actor = require_admin(store)?;

    let identity = store.registry_mut().find_by_username_mut(username).ok_or(
        AuthError::UnknownUser {
            username: username.to_string(),
            location: ErrorLocation::from(Location::caller()),
        },
    )?;

    let old_role = identity.role;
    identity.role = new_role;
    info!("{actor} changed {username} role {old_role} -> {new_role}");
    audit.record(
        &actor,
        AuditAction::RoleChanged,
        Some(username.to_string()),
        Some(format!("{old_role} -> {new_role}")),
    );
    Ok(())
}

/// Registrations awaiting review, in registration order.
#[track_caller]
pub fn pending_users(store: &SessionStore) -> AuthErrorResult<Vec<&Identity>> {
    require_admin(store)?;
    Ok(store.registry().pending())
}
