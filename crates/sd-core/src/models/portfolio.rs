use crate::PortfolioPosition;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A trader's portfolio of strategy allocations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Portfolio {
    pub id: Uuid,
    pub owner: String,
    pub name: String,
    /// Account balance the allocations are sized against.
    pub balance: f64,
    pub positions: Vec<PortfolioPosition>,
    pub created_at: DateTime<Utc>,
}

impl Portfolio {
    pub fn new(owner: &str, name: &str, balance: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner: owner.to_string(),
            name: name.to_string(),
            balance,
            positions: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Sum of position allocations, in percent.
    pub fn total_allocation(&self) -> f64 {
        self.positions.iter().map(|p| p.allocation_pct).sum()
    }

    /// Sum of position net profits.
    pub fn current_pl(&self) -> f64 {
        self.positions.iter().map(|p| p.net_profit).sum()
    }

    /// True when allocations add up past 100% of the account.
    pub fn is_over_allocated(&self) -> bool {
        self.total_allocation() > 100.0
    }

    pub fn position(&self, strategy_id: u32) -> Option<&PortfolioPosition> {
        self.positions.iter().find(|p| p.strategy_id == strategy_id)
    }
}
