use serde::Serialize;

const HIGH_CORRELATION: f64 = 0.6;
const MEDIUM_CORRELATION: f64 = 0.2;

/// Qualitative risk bucket for a pairwise return correlation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CorrelationRisk {
    Low,
    Medium,
    High,
}

impl CorrelationRisk {
    /// Classify by correlation magnitude; sign does not matter.
    pub fn classify(correlation: f64) -> Self {
        let magnitude = correlation.abs();
        if magnitude >= HIGH_CORRELATION {
            Self::High
        } else if magnitude >= MEDIUM_CORRELATION {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl std::fmt::Display for CorrelationRisk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
