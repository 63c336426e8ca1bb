use crate::app::App;
use crate::command::Command;
use crate::error::ShellError;

use sd_config::Config;

use googletest::prelude::*;

fn demo_app() -> App {
    App::new(Config::default())
}

fn dispatch(app: &mut App, line: &str) -> Result<String, ShellError> {
    app.dispatch(Command::parse(line).unwrap())
}

#[test]
fn given_fresh_app_when_logging_in_then_lands_on_dashboard() {
    // Given
    let mut app = demo_app();

    // When
    let output = dispatch(&mut app, "login admin password").unwrap();

    // Then
    assert_that!(output, contains_substring("Logged in as admin"));
    assert_that!(app.current_path(), eq("/dashboard"));
}

#[test]
fn given_wrong_password_when_logging_in_then_failure_message_no_session() {
    // Given
    let mut app = demo_app();

    // When
    let output = dispatch(&mut app, "login admin wrong").unwrap();

    // Then
    assert_that!(output, contains_substring("Login failed"));
    assert_that!(app.session_store().is_authenticated(), is_false());
}

#[test]
fn given_no_session_when_navigating_then_redirected_to_login() {
    // Given
    let mut app = demo_app();

    // When
    let output = dispatch(&mut app, "go /dashboard").unwrap();

    // Then
    assert_that!(output, contains_substring("login"));
    assert_that!(app.current_path(), eq("/login"));
}

#[test]
fn given_viewer_session_when_navigating_to_admin_view_then_redirected_to_default() {
    // Given
    let mut app = demo_app();
    dispatch(&mut app, "login viewer1 password").unwrap();

    // When
    let output = dispatch(&mut app, "go /admin/monitoring").unwrap();

    // Then
    assert_that!(output, contains_substring("Redirected"));
    assert_that!(app.current_path(), eq("/dashboard"));
}

#[test]
fn given_registered_guest_when_reading_settings_then_view_denied() {
    // Given: registration assigns guest, and guests have no settings view
    let mut app = demo_app();
    dispatch(&mut app, "register newbie newbie@email.com admin").unwrap();

    // When
    let result = dispatch(&mut app, "settings email a@b.com");

    // Then
    assert_that!(result, err(pat!(ShellError::ViewDenied { .. })));
}

#[test]
fn given_trader_session_when_building_portfolio_then_positions_and_audit_recorded() {
    // Given
    let mut app = demo_app();
    dispatch(&mut app, "login trader1 password").unwrap();

    // When
    dispatch(&mut app, "portfolio create Growth 50000").unwrap();
    let added = dispatch(&mut app, "portfolio add 1 40").unwrap();
    let shown = dispatch(&mut app, "portfolio show").unwrap();

    // Then
    assert_that!(added, contains_substring("Added Momentum Scalper Pro"));
    assert_that!(shown, contains_substring("total allocation 40.0%"));
}

#[test]
fn given_viewer_session_when_creating_portfolio_then_view_denied() {
    // Given
    let mut app = demo_app();
    dispatch(&mut app, "login viewer1 password").unwrap();

    // When
    let result = dispatch(&mut app, "portfolio create Growth 50000");

    // Then: /portfolio is trader-only
    assert_that!(result, err(pat!(ShellError::ViewDenied { .. })));
}

#[test]
fn given_admin_session_when_approving_then_audit_shows_entry() {
    // Given
    let mut app = demo_app();
    dispatch(&mut app, "login admin password").unwrap();

    // When
    dispatch(&mut app, "admin approve newtrader1").unwrap();
    let audit = dispatch(&mut app, "audit user_approved").unwrap();

    // Then
    assert_that!(audit, contains_substring("admin"));
    assert_that!(audit, contains_substring("newtrader1"));

    // And the approved account can log in now
    dispatch(&mut app, "logout").unwrap();
    let output = dispatch(&mut app, "login newtrader1 password").unwrap();
    assert_that!(output, contains_substring("Logged in as newtrader1"));
}

#[test]
fn given_trader_session_when_reading_audit_then_view_denied() {
    // Given
    let mut app = demo_app();
    dispatch(&mut app, "login trader1 password").unwrap();

    // When
    let result = dispatch(&mut app, "audit");

    // Then
    assert_that!(result, err(pat!(ShellError::ViewDenied { .. })));
}

#[test]
fn given_admin_session_when_tuning_threshold_then_monitor_reflects_it() {
    // Given
    let mut app = demo_app();
    dispatch(&mut app, "login admin password").unwrap();

    // When
    let output = dispatch(&mut app, "threshold task_timeout_minutes 45").unwrap();
    let monitor = dispatch(&mut app, "monitor").unwrap();

    // Then
    assert_that!(output, contains_substring("30 -> 45"));
    assert_that!(monitor, contains_substring("task_timeout_minutes"));
    assert_that!(monitor, contains_substring("45"));
}

#[test]
fn given_session_when_logging_out_then_menu_is_empty_and_nav_locked() {
    // Given
    let mut app = demo_app();
    dispatch(&mut app, "login admin password").unwrap();

    // When
    dispatch(&mut app, "logout").unwrap();

    // Then
    let menu = dispatch(&mut app, "menu").unwrap();
    assert_that!(menu, contains_substring("no menu entries"));
    let go = dispatch(&mut app, "go /settings").unwrap();
    assert_that!(go, contains_substring("login"));
}

#[test]
fn given_password_change_when_too_short_then_config_minimum_enforced() {
    // Given
    let mut app = demo_app();
    dispatch(&mut app, "login trader1 password").unwrap();

    // When
    let result = dispatch(&mut app, "settings password abc abc");

    // Then: default minimum is 6
    assert_that!(result, err(anything()));
    let message = format!("{}", result.unwrap_err());
    assert_that!(message, contains_substring("6"));
}
