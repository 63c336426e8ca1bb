use crate::AuditAction;

use std::str::FromStr;

#[test]
fn test_audit_action_round_trip() {
    for action in AuditAction::ALL {
        assert_eq!(AuditAction::from_str(action.as_str()).unwrap(), action);
    }
}

#[test]
fn test_audit_action_rejects_unknown() {
    assert!(AuditAction::from_str("user_promoted").is_err());
}
