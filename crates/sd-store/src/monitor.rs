use crate::error::{Result as StoreErrorResult, StoreError};

use sd_core::{QueuedTask, TaskStatus, Threshold};

use std::panic::Location;

use error_location::ErrorLocation;
use log::info;

/// Derived view of queue health for the monitoring page.
#[derive(Debug, Clone)]
pub struct QueueHealth {
    pub open_tasks: u32,
    pub warnings: Vec<String>,
}

impl QueueHealth {
    pub fn is_healthy(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Operational state of the optimization pipeline: tunable thresholds plus
/// a snapshot of the task queue.
#[derive(Debug, Default)]
pub struct SystemMonitor {
    thresholds: Vec<Threshold>,
    tasks: Vec<QueuedTask>,
    completed: u32,
    failed: u32,
}

impl SystemMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Monitor pre-populated with the demo pipeline snapshot.
    pub fn with_demo_state() -> Self {
        Self {
            thresholds: vec![
                Threshold::new("max_retry_attempts", 3),
                Threshold::new("task_timeout_minutes", 30),
                Threshold::new("queue_depth_warning", 50),
                Threshold::new("wait_time_warning_minutes", 60),
                Threshold::new("fine_tune_depth_limit", 5),
            ],
            tasks: vec![
                QueuedTask::new(1001, TaskStatus::New, 1, 45),
                QueuedTask::new(1002, TaskStatus::Retrying, 2, 75),
                QueuedTask::new(1003, TaskStatus::Processing, 1, 15),
                QueuedTask::new(1004, TaskStatus::New, 1, 120),
            ],
            completed: 247,
            failed: 3,
        }
    }

    pub fn thresholds(&self) -> &[Threshold] {
        &self.thresholds
    }

    #[track_caller]
    pub fn threshold(&self, name: &str) -> StoreErrorResult<i64> {
        self.thresholds
            .iter()
            .find(|t| t.name == name)
            .map(|t| t.value)
            .ok_or(StoreError::UnknownThreshold {
                name: name.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    /// Update a threshold and return its previous value.
    #[track_caller]
    pub fn set_threshold(&mut self, name: &str, value: i64) -> StoreErrorResult<i64> {
        let threshold = self
            .thresholds
            .iter_mut()
            .find(|t| t.name == name)
            .ok_or(StoreError::UnknownThreshold {
                name: name.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let old = threshold.value;
        threshold.value = value;
        info!("threshold {name} changed {old} -> {value}");
        Ok(old)
    }

    pub fn tasks(&self) -> &[QueuedTask] {
        &self.tasks
    }

    /// Task counts per status, open queue states first.
    pub fn status_counts(&self) -> Vec<(TaskStatus, u32)> {
        let count = |status: TaskStatus| {
            self.tasks.iter().filter(|t| t.status == status).count() as u32
        };
        vec![
            (TaskStatus::New, count(TaskStatus::New)),
            (TaskStatus::Processing, count(TaskStatus::Processing)),
            (TaskStatus::Retrying, count(TaskStatus::Retrying)),
            (TaskStatus::Completed, self.completed),
            (TaskStatus::Failed, self.failed),
        ]
    }

    /// Evaluate the queue against the warning thresholds.
    pub fn health(&self) -> QueueHealth {
        let open_tasks = self.tasks.iter().filter(|t| t.status.is_open()).count() as u32;
        let mut warnings = Vec::new();

        if let Ok(depth_limit) = self.threshold("queue_depth_warning") {
            if i64::from(open_tasks) > depth_limit {
                warnings.push(format!(
                    "queue depth {open_tasks} exceeds warning level {depth_limit}"
                ));
            }
        }

        if let Ok(wait_limit) = self.threshold("wait_time_warning_minutes") {
            for task in self.tasks.iter().filter(|t| t.status.is_open()) {
                if i64::from(task.wait_mins) > wait_limit {
                    warnings.push(format!(
                        "task {id} waiting {mins} min, limit {wait_limit}",
                        id = task.id,
                        mins = task.wait_mins
                    ));
                }
            }
        }

        QueueHealth {
            open_tasks,
            warnings,
        }
    }
}
