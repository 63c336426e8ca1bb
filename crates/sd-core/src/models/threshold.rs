use serde::{Deserialize, Serialize};

/// A named operational threshold tunable from the monitoring page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Threshold {
    pub name: String,
    pub value: i64,
}

impl Threshold {
    pub fn new(name: &str, value: i64) -> Self {
        Self {
            name: name.to_string(),
            value,
        }
    }
}
