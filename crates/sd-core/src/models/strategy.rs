use crate::{CriterionCheck, StrategyStatus};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Minimum closed trades for a backtest to count.
pub const MIN_TRADES: u32 = 100;
/// Maximum drawdown as a percentage of the reference balance.
pub const MAX_DRAWDOWN_PCT: f64 = 15.0;
pub const MIN_PROFIT_FACTOR: f64 = 1.3;
/// Minimum win rate, in percent.
pub const MIN_WIN_RATE: f64 = 50.0;

/// A ranked, backtested trading strategy as shown on the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Strategy {
    pub id: u32,
    pub rank: u32,
    pub name: String,
    pub symbol: String,
    pub net_profit: f64,
    /// Largest equity dip, negative.
    pub max_drawdown: f64,
    pub total_trades: u32,
    pub recovery_factor: f64,
    pub score: f64,
    /// Percent of winning trades.
    pub win_rate: f64,
    pub profit_factor: f64,
    pub expected_payoff: f64,
    /// Normalized distance to the "good" region of the metric space.
    pub distance: f64,
    pub status: StrategyStatus,
    pub created: NaiveDate,
}

impl Strategy {
    /// Drawdown magnitude as a percentage of `reference_balance`.
    pub fn drawdown_pct(&self, reference_balance: f64) -> f64 {
        self.max_drawdown.abs() / reference_balance * 100.0
    }

    /// Evaluate the acceptance criteria against this strategy's metrics.
    ///
    /// Mirrors the scoring view: trade count, drawdown, profit factor and
    /// win rate, each with a human-readable reason.
    pub fn criteria(&self, reference_balance: f64) -> Vec<CriterionCheck> {
        let dd_pct = self.drawdown_pct(reference_balance);

        vec![
            CriterionCheck::new(
                "Min Trades",
                self.total_trades >= MIN_TRADES,
                format!("{} trades vs {} minimum", self.total_trades, MIN_TRADES),
            ),
            CriterionCheck::new(
                "Max Drawdown",
                dd_pct <= MAX_DRAWDOWN_PCT,
                format!("{dd_pct:.1}% vs {MAX_DRAWDOWN_PCT}% limit"),
            ),
            CriterionCheck::new(
                "Profit Factor",
                self.profit_factor >= MIN_PROFIT_FACTOR,
                format!(
                    "{:.2} vs {} minimum",
                    self.profit_factor, MIN_PROFIT_FACTOR
                ),
            ),
            CriterionCheck::new(
                "Win Rate",
                self.win_rate >= MIN_WIN_RATE,
                format!("{:.1}% vs {}% minimum", self.win_rate, MIN_WIN_RATE),
            ),
        ]
    }

    /// True when every acceptance criterion passes.
    pub fn passes_criteria(&self, reference_balance: f64) -> bool {
        self.criteria(reference_balance).iter().all(|c| c.passed)
    }

    /// Case-insensitive match on name or symbol, used by dashboard search.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.name.to_lowercase().contains(&term) || self.symbol.to_lowercase().contains(&term)
    }
}
