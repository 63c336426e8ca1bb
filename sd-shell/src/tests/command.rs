use crate::command::Command;
use crate::error::ShellError;

use googletest::prelude::*;

#[test]
fn given_login_line_when_parsing_then_credentials_captured() {
    // When
    let command = Command::parse("login admin password").unwrap();

    // Then
    assert_that!(
        command,
        eq(&Command::Login {
            username: "admin".to_string(),
            password: "password".to_string(),
        })
    );
}

#[test]
fn given_partial_login_when_parsing_then_usage_error() {
    // When
    let result = Command::parse("login admin");

    // Then
    assert_that!(result, err(pat!(ShellError::Usage { .. })));
}

#[test]
fn given_register_with_role_when_parsing_then_role_kept_as_request() {
    // When
    let command = Command::parse("register x y@z.com admin").unwrap();

    // Then
    assert_that!(
        command,
        eq(&Command::Register {
            username: "x".to_string(),
            email: "y@z.com".to_string(),
            role: Some("admin".to_string()),
        })
    );
}

#[test]
fn given_portfolio_add_when_parsing_then_risk_defaults_to_five() {
    // When
    let command = Command::parse("portfolio add 2 35.5").unwrap();

    // Then
    assert_that!(
        command,
        eq(&Command::PortfolioAdd {
            strategy_id: 2,
            allocation_pct: 35.5,
            risk_level: 5,
        })
    );
}

#[test]
fn given_non_numeric_id_when_parsing_then_usage_error_names_field() {
    // When
    let result = Command::parse("strategy abc");

    // Then
    assert_that!(result, err(pat!(ShellError::Usage { .. })));
    let message = format!("{}", result.unwrap_err());
    assert_that!(message, contains_substring("strategy id"));
}

#[test]
fn given_unknown_command_when_parsing_then_help_suggested() {
    // When
    let result = Command::parse("frobnicate");

    // Then
    let message = format!("{}", result.unwrap_err());
    assert_that!(message, contains_substring("help"));
}

#[test]
fn given_exit_alias_when_parsing_then_quit() {
    assert_that!(Command::parse("exit").unwrap(), eq(&Command::Quit));
    assert_that!(Command::parse("quit").unwrap(), eq(&Command::Quit));
}
