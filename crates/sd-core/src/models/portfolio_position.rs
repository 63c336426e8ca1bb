use crate::Strategy;

use serde::{Deserialize, Serialize};

/// One strategy slot inside a portfolio.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioPosition {
    pub strategy_id: u32,
    pub name: String,
    pub symbol: String,
    /// Share of the account allocated to this strategy, in percent.
    pub allocation_pct: f64,
    pub net_profit: f64,
    pub max_drawdown: f64,
    pub lot_size: f64,
    /// Correlation of this strategy's returns against the portfolio.
    pub correlation: f64,
}

impl PortfolioPosition {
    pub fn from_strategy(strategy: &Strategy, allocation_pct: f64, lot_size: f64) -> Self {
        Self {
            strategy_id: strategy.id,
            name: strategy.name.clone(),
            symbol: strategy.symbol.clone(),
            allocation_pct,
            net_profit: strategy.net_profit,
            max_drawdown: strategy.max_drawdown,
            lot_size,
            correlation: 0.0,
        }
    }
}
