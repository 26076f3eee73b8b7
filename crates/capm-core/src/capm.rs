//! CAPM estimation: regression plus significance tests for one ticker.

use crate::regression::{linear_regression, t_test_p_value};
use crate::types::TickerStats;

/// Regress a ticker's excess returns against the market's and test both
/// coefficients: alpha against 0, beta against 1, with `n - 2` degrees of
/// freedom.
pub fn estimate_capm(ticker: &str, market_excess: &[f64], excess: &[f64]) -> TickerStats {
    let fit = linear_regression(market_excess, excess);
    let df = excess.len() - 2;
    TickerStats {
        ticker: ticker.to_string(),
        alpha: fit.intercept,
        p_alpha: t_test_p_value(fit.intercept, 0.0, fit.intercept_stderr, df),
        beta: fit.slope,
        p_beta: t_test_p_value(fit.slope, 1.0, fit.slope_stderr, df),
    }
}
