//! Position sizing helpers for portfolio construction.

/// Kelly criterion fraction of capital to risk, clamped to [0, 1].
///
/// `win_rate` is a fraction in [0, 1]; `avg_win` and `avg_loss` are per-trade
/// amounts (the sign of `avg_loss` is ignored). Degenerate inputs size to
/// zero rather than erroring: sizing advice is cosmetic, not load-bearing.
pub fn kelly_fraction(win_rate: f64, avg_win: f64, avg_loss: f64) -> f64 {
    if !(0.0..=1.0).contains(&win_rate) || avg_win <= 0.0 {
        return 0.0;
    }

    let b = avg_win / avg_loss.abs();
    if !b.is_finite() {
        // No recorded losses; the edge is the win rate itself.
        return win_rate;
    }

    (win_rate - (1.0 - win_rate) / b).clamp(0.0, 1.0)
}

/// Suggested lot size: one lot per 10k of balance at full Kelly and maximum
/// risk appetite, scaled down linearly by `risk_level` (1..=10). Rounded to
/// two decimals.
pub fn suggested_lot(balance: f64, kelly: f64, risk_level: u8) -> f64 {
    if balance <= 0.0 {
        return 0.0;
    }
    let risk = f64::from(risk_level.min(10)) / 10.0;
    let raw = balance / 10_000.0 * kelly * risk;
    (raw * 100.0).round() / 100.0
}
