use crate::{AccountStatus, Role};

use std::str::FromStr;

#[test]
fn test_role_as_str() {
    assert_eq!(Role::Admin.as_str(), "admin");
    assert_eq!(Role::Trader.as_str(), "trader");
    assert_eq!(Role::Viewer.as_str(), "viewer");
    assert_eq!(Role::Guest.as_str(), "guest");
}

#[test]
fn test_role_from_str() {
    assert_eq!(Role::from_str("admin").unwrap(), Role::Admin);
    assert_eq!(Role::from_str("guest").unwrap(), Role::Guest);
    assert!(Role::from_str("superuser").is_err());
}

#[test]
fn test_lowest_privilege_is_guest() {
    assert_eq!(Role::lowest_privilege(), Role::Guest);
}

#[test]
fn test_account_status_round_trip() {
    for status in [
        AccountStatus::Pending,
        AccountStatus::Approved,
        AccountStatus::Denied,
    ] {
        assert_eq!(AccountStatus::from_str(status.as_str()).unwrap(), status);
    }
    assert!(AccountStatus::from_str("unknown").is_err());
}
