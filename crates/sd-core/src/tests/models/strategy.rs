use crate::{Strategy, StrategyStatus};

use std::str::FromStr;

use chrono::NaiveDate;

fn sample() -> Strategy {
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
        created: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
    }
}

#[test]
fn test_all_criteria_pass_for_strong_strategy() {
    let strategy = sample();
    let checks = strategy.criteria(25_000.0);

    assert_eq!(checks.len(), 4);
    assert!(checks.iter().all(|c| c.passed));
    assert!(strategy.passes_criteria(25_000.0));
}

#[test]
fn test_low_trade_count_fails_min_trades() {
    let mut strategy = sample();
    strategy.total_trades = 42;

    let checks = strategy.criteria(25_000.0);
    let min_trades = checks.iter().find(|c| c.name == "Min Trades").unwrap();

    assert!(!min_trades.passed);
    assert!(!strategy.passes_criteria(25_000.0));
}

#[test]
fn test_deep_drawdown_fails_limit() {
    let mut strategy = sample();
    strategy.max_drawdown = -5_000.0;

    // 20% of a 25k account
    let checks = strategy.criteria(25_000.0);
    let drawdown = checks.iter().find(|c| c.name == "Max Drawdown").unwrap();

    assert!(!drawdown.passed);
}

#[test]
fn test_drawdown_pct_uses_magnitude() {
    let strategy = sample();
    let pct = strategy.drawdown_pct(25_000.0);

    assert!(pct > 0.0);
    assert!((pct - 5.0012).abs() < 0.01);
}

#[test]
fn test_strategy_status_round_trip() {
    for status in [
        StrategyStatus::Active,
        StrategyStatus::Paused,
        StrategyStatus::Testing,
    ] {
        assert_eq!(StrategyStatus::from_str(status.as_str()).unwrap(), status);
    }
    assert!(StrategyStatus::from_str("archived").is_err());
}

#[test]
fn test_search_matches_name_and_symbol_case_insensitive() {
    let strategy = sample();

    assert!(strategy.matches("momentum"));
    assert!(strategy.matches("eurusd"));
    assert!(strategy.matches("SCALPER"));
    assert!(!strategy.matches("gbpusd"));
}
