use crate::TaskStatus;

use std::str::FromStr;

#[test]
fn test_task_status_round_trip() {
    for status in [
        TaskStatus::New,
        TaskStatus::Processing,
        TaskStatus::Retrying,
        TaskStatus::Completed,
        TaskStatus::Failed,
    ] {
        assert_eq!(TaskStatus::from_str(status.as_str()).unwrap(), status);
    }
    assert!(TaskStatus::from_str("queued").is_err());
}

#[test]
fn test_open_states_occupy_the_queue() {
    assert!(TaskStatus::New.is_open());
    assert!(TaskStatus::Processing.is_open());
    assert!(TaskStatus::Retrying.is_open());
    assert!(!TaskStatus::Completed.is_open());
    assert!(!TaskStatus::Failed.is_open());
}
