use crate::tests::{admin_store, demo_store};
use crate::{AuditLog, AuthError, admin};

use sd_core::{AccountStatus, AuditAction, Role};

use googletest::prelude::*;

#[test]
fn given_unauthenticated_store_when_approving_then_not_authenticated_error() {
    // Given
    let mut store = demo_store();
    let mut audit = AuditLog::new();

    // When
    let result = admin::approve_user(&mut store, &mut audit, "newtrader1");

    // Then
    assert_that!(result, err(pat!(AuthError::NotAuthenticated { .. })));
    assert_that!(audit.is_empty(), is_true());
}

#[test]
fn given_trader_session_when_approving_then_admin_required_error() {
    // Given
    let mut store = demo_store();
    assert!(store.login("trader1", "password"));
    let mut audit = AuditLog::new();

    // When
    let result = admin::approve_user(&mut store, &mut audit, "newtrader1");

    // Then
    assert_that!(result, err(pat!(AuthError::AdminRequired { .. })));
}

#[test]
fn given_admin_session_when_approving_pending_user_then_approved_and_audited() {
    // Given
    let mut store = admin_store();
    let mut audit = AuditLog::new();

    // When
    admin::approve_user(&mut store, &mut audit, "newtrader1").unwrap();

    // Then
    let user = store.registry().find_by_username("newtrader1").unwrap();
    assert_that!(user.status, eq(AccountStatus::Approved));

    let entries = audit.by_action(AuditAction::UserApproved);
    assert_that!(entries, len(eq(1)));
    assert_that!(entries[0].actor, eq("admin"));
    assert_that!(entries[0].target, some(eq("newtrader1")));
}

#[test]
fn given_admin_session_when_denying_pending_user_then_login_stays_blocked() {
    // Given
    let mut store = admin_store();
    let mut audit = AuditLog::new();

    // When
    admin::deny_user(&mut store, &mut audit, "analyst2").unwrap();

    // Then
    let user = store.registry().find_by_username("analyst2").unwrap();
    assert_that!(user.status, eq(AccountStatus::Denied));

    store.logout();
    assert_that!(store.login("analyst2", "password"), is_false());
}

#[test]
fn given_already_approved_user_when_approving_then_not_pending_error() {
    // Given
    let mut store = admin_store();
    let mut audit = AuditLog::new();

    // When
    let result = admin::approve_user(&mut store, &mut audit, "trader1");

    // Then
    assert_that!(result, err(pat!(AuthError::NotPending { .. })));
    assert_that!(audit.is_empty(), is_true());
}

#[test]
fn given_unknown_username_when_approving_then_unknown_user_error() {
    // Given
    let mut store = admin_store();
    let mut audit = AuditLog::new();

    // When
    let result = admin::approve_user(&mut store, &mut audit, "ghost");

    // Then
    assert_that!(result, err(pat!(AuthError::UnknownUser { .. })));
}

#[test]
fn given_admin_session_when_changing_role_then_audited_with_transition() {
    // Given
    let mut store = admin_store();
    let mut audit = AuditLog::new();

    // When
    admin::change_role(&mut store, &mut audit, "viewer1", Role::Trader).unwrap();

    // Then
    let user = store.registry().find_by_username("viewer1").unwrap();
    assert_that!(user.role, eq(Role::Trader));

    let entries = audit.by_action(AuditAction::RoleChanged);
    assert_that!(entries, len(eq(1)));
    assert_that!(entries[0].details, some(eq("viewer -> trader")));
}

#[test]
fn given_admin_session_when_listing_pending_then_seeded_pair_in_order() {
    // Given
    let store = admin_store();

    // When
    let pending = admin::pending_users(&store).unwrap();

    // Then
    let usernames: Vec<&str> = pending.iter().map(|i| i.username.as_str()).collect();
    assert_that!(usernames, eq(&vec!["newtrader1", "analyst2"]));
}
