use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Closed set of auditable actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    UserApproved,
    UserDenied,
    RoleChanged,
    StrategyViewed,
    StrategyDownloaded,
    ThresholdUpdated,
    PortfolioCreated,
}

impl AuditAction {
    pub const ALL: [AuditAction; 7] = [
        AuditAction::UserApproved,
        AuditAction::UserDenied,
        AuditAction::RoleChanged,
        AuditAction::StrategyViewed,
        AuditAction::StrategyDownloaded,
        AuditAction::ThresholdUpdated,
        AuditAction::PortfolioCreated,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UserApproved => "user_approved",
            Self::UserDenied => "user_denied",
            Self::RoleChanged => "role_changed",
            Self::StrategyViewed => "strategy_viewed",
            Self::StrategyDownloaded => "strategy_downloaded",
            Self::ThresholdUpdated => "threshold_updated",
            Self::PortfolioCreated => "portfolio_created",
        }
    }
}

impl FromStr for AuditAction {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "user_approved" => Ok(Self::UserApproved),
            "user_denied" => Ok(Self::UserDenied),
            "role_changed" => Ok(Self::RoleChanged),
            "strategy_viewed" => Ok(Self::StrategyViewed),
            "strategy_downloaded" => Ok(Self::StrategyDownloaded),
            "threshold_updated" => Ok(Self::ThresholdUpdated),
            "portfolio_created" => Ok(Self::PortfolioCreated),
            _ => Err(CoreError::InvalidAuditAction {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for AuditAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
