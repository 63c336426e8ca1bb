use crate::TaskStatus;

use serde::{Deserialize, Serialize};

/// Snapshot of one task in the optimization queue, as surfaced on the
/// monitoring page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueuedTask {
    pub id: u32,
    pub status: TaskStatus,
    pub attempt_count: u32,
    /// Minutes the task has been waiting since creation.
    pub wait_mins: u32,
}

impl QueuedTask {
    pub fn new(id: u32, status: TaskStatus, attempt_count: u32, wait_mins: u32) -> Self {
        Self {
            id,
            status,
            attempt_count,
            wait_mins,
        }
    }
}
