use crate::tests::demo_store;
use crate::AuthError;

use googletest::prelude::*;

const MIN_LENGTH: usize = 6;

#[test]
fn given_no_session_when_updating_email_then_not_authenticated_error() {
    // Given
    let mut store = demo_store();

    // When
    let result = store.update_email("new@email.com");

    // Then
    assert_that!(result, err(pat!(AuthError::NotAuthenticated { .. })));
}

#[test]
fn given_session_when_updating_email_then_applied() {
    // Given
    let mut store = demo_store();
    assert!(store.login("viewer1", "password"));

    // When
    store.update_email("viewer1@new.com").unwrap();

    // Then
    assert_that!(store.current().unwrap().email, eq("viewer1@new.com"));
}

#[test]
fn given_session_when_updating_email_with_empty_value_then_unchanged() {
    // Given
    let mut store = demo_store();
    assert!(store.login("viewer1", "password"));

    // When
    store.update_email("").unwrap();

    // Then
    assert_that!(store.current().unwrap().email, eq("viewer@trading.com"));
}

#[test]
fn given_mismatched_confirmation_when_changing_password_then_error() {
    // Given
    let mut store = demo_store();
    assert!(store.login("trader1", "password"));

    // When
    let result = store.change_password("hunter22", "hunter23", MIN_LENGTH);

    // Then
    assert_that!(result, err(pat!(AuthError::PasswordMismatch { .. })));
}

#[test]
fn given_short_password_when_changing_password_then_error_names_minimum() {
    // Given
    let mut store = demo_store();
    assert!(store.login("trader1", "password"));

    // When
    let result = store.change_password("abc", "abc", MIN_LENGTH);

    // Then
    assert_that!(result, err(pat!(AuthError::PasswordTooShort { min: eq(&MIN_LENGTH), .. })));
}

#[test]
fn given_valid_new_password_when_changing_then_next_login_uses_it() {
    // Given
    let mut store = demo_store();
    assert!(store.login("trader1", "password"));

    // When
    store.change_password("hunter22", "hunter22", MIN_LENGTH).unwrap();
    store.logout();

    // Then
    assert_that!(store.login("trader1", "password"), is_false());
    assert_that!(store.login("trader1", "hunter22"), is_true());
}

#[test]
fn given_session_when_setting_api_key_then_stored_on_identity() {
    // Given
    let mut store = demo_store();
    assert!(store.login("viewer1", "password"));

    // When
    store.set_api_key("sk-or-v1-abc123").unwrap();

    // Then
    assert_that!(
        store.current().unwrap().api_key,
        some(eq("sk-or-v1-abc123"))
    );
}
