use serde::Serialize;

/// One acceptance-criteria check for a backtested strategy.
#[derive(Debug, Clone, Serialize)]
pub struct CriterionCheck {
    pub name: &'static str,
    pub passed: bool,
    pub reason: String,
}

impl CriterionCheck {
    pub fn new(name: &'static str, passed: bool, reason: String) -> Self {
        Self {
            name,
            passed,
            reason,
        }
    }
}
