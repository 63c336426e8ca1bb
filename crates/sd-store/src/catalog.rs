use crate::error::{Result as StoreErrorResult, StoreError};

use sd_core::{Strategy, StrategyStatus};

use std::panic::Location;

use chrono::NaiveDate;
use error_location::ErrorLocation;

/// In-memory catalog of ranked, backtested strategies.
///
/// Read-mostly: the dashboard searches and ranks it; nothing mutates a
/// strategy after seeding.
#[derive(Debug, Default)]
pub struct StrategyCatalog {
    strategies: Vec<Strategy>,
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

impl StrategyCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog pre-populated with the demo backtest results.
    pub fn with_demo_strategies() -> Self {
        let strategies = vec![
            Strategy {
                id: 1,
                rank: 1,
                name: "Momentum Scalper Pro".to_string(),
                symbol: "EURUSD".to_string(),
                net_profit: 25_420.50,
                max_drawdown: -1_250.30,
                total_trades: 1_247,
                recovery_factor: 20.33,
                score: 92.5,
                win_rate: 68.5,
                profit_factor: 1.85,
                expected_payoff: 20.40,
                distance: 0.12,
                status: StrategyStatus::Active,
                created: date(2024, 1, 15),
            },
            Strategy {
                id: 2,
                rank: 2,
                name: "Grid Master 2.0".to_string(),
                symbol: "GBPUSD".to_string(),
                net_profit: 18_750.25,
                max_drawdown: -2_100.75,
                total_trades: 892,
                recovery_factor: 8.93,
                score: 87.2,
                win_rate: 72.1,
                profit_factor: 1.67,
                expected_payoff: 21.03,
                distance: 0.18,
                status: StrategyStatus::Active,
                created: date(2024, 1, 22),
            },
            Strategy {
                id: 3,
                rank: 3,
                name: "Trend Follower Elite".to_string(),
                symbol: "USDJPY".to_string(),
                net_profit: 14_320.80,
                max_drawdown: -1_875.40,
                total_trades: 634,
                recovery_factor: 7.64,
                score: 81.9,
                win_rate: 61.4,
                profit_factor: 1.52,
                expected_payoff: 22.59,
                distance: 0.24,
                status: StrategyStatus::Paused,
                created: date(2024, 2, 5),
            },
            Strategy {
                id: 4,
                rank: 4,
                name: "Breakout Hunter".to_string(),
                symbol: "EURUSD".to_string(),
                net_profit: 6_890.10,
                max_drawdown: -3_420.60,
                total_trades: 78,
                recovery_factor: 2.01,
                score: 64.3,
                win_rate: 48.2,
                profit_factor: 1.21,
                expected_payoff: 88.33,
                distance: 0.57,
                status: StrategyStatus::Testing,
                created: date(2024, 2, 19),
            },
        ];

        Self { strategies }
    }

    /// All strategies ordered by rank.
    pub fn ranked(&self) -> Vec<&Strategy> {
        let mut out: Vec<&Strategy> = self.strategies.iter().collect();
        out.sort_by_key(|s| s.rank);
        out
    }

    /// Dashboard search: case-insensitive substring on name or symbol.
    /// An empty term matches everything.
    pub fn search(&self, term: &str) -> Vec<&Strategy> {
        self.ranked()
            .into_iter()
            .filter(|s| term.is_empty() || s.matches(term))
            .collect()
    }

    pub fn by_status(&self, status: StrategyStatus) -> Vec<&Strategy> {
        self.ranked()
            .into_iter()
            .filter(|s| s.status == status)
            .collect()
    }

    #[track_caller]
    pub fn get(&self, id: u32) -> StoreErrorResult<&Strategy> {
        self.strategies
            .iter()
            .find(|s| s.id == id)
            .ok_or(StoreError::UnknownStrategy {
                id,
                location: ErrorLocation::from(Location::caller()),
            })
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }
}
