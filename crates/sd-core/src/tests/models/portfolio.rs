use crate::{Portfolio, PortfolioPosition};

fn position(strategy_id: u32, allocation_pct: f64, net_profit: f64) -> PortfolioPosition {
    PortfolioPosition {
        strategy_id,
        name: format!("Strategy {strategy_id}"),
        symbol: "EURUSD".to_string(),
        allocation_pct,
        net_profit,
        max_drawdown: -100.0,
        lot_size: 0.04,
        correlation: 0.15,
    }
}

#[test]
fn test_totals_are_sums_over_positions() {
    let mut portfolio = Portfolio::new("trader1", "Conservative Growth", 50_000.0);
    portfolio.positions.push(position(1, 40.0, 1_520.30));
    portfolio.positions.push(position(2, 35.0, 980.45));
    portfolio.positions.push(position(3, 25.0, 350.00));

    assert_eq!(portfolio.total_allocation(), 100.0);
    assert!((portfolio.current_pl() - 2_850.75).abs() < 1e-9);
    assert!(!portfolio.is_over_allocated());
}

#[test]
fn test_empty_portfolio_sums_to_zero() {
    let portfolio = Portfolio::new("trader1", "Empty", 10_000.0);

    assert_eq!(portfolio.total_allocation(), 0.0);
    assert_eq!(portfolio.current_pl(), 0.0);
}

#[test]
fn test_over_allocation_detected_past_100_percent() {
    let mut portfolio = Portfolio::new("trader1", "Greedy", 10_000.0);
    portfolio.positions.push(position(1, 70.0, 0.0));
    portfolio.positions.push(position(2, 45.0, 0.0));

    assert!(portfolio.is_over_allocated());
}

#[test]
fn test_position_lookup_by_strategy_id() {
    let mut portfolio = Portfolio::new("trader1", "Lookup", 10_000.0);
    portfolio.positions.push(position(7, 10.0, 0.0));

    assert!(portfolio.position(7).is_some());
    assert!(portfolio.position(8).is_none());
}
