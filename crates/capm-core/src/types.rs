use serde::Serialize;

/// One row of the results table: CAPM estimates for a single ticker.
///
/// The serde renames fix the CSV header to
/// `ticker,alpha,p(alpha=0),beta,p(beta=1)`.
#[derive(Debug, Clone, Serialize)]
pub struct TickerStats {
    pub ticker: String,
    /// Regression intercept: excess return unexplained by market movement.
    pub alpha: f64,
    /// Two-sided p-value testing alpha against 0.
    #[serde(rename = "p(alpha=0)")]
    pub p_alpha: f64,
    /// Regression slope: sensitivity to market excess return.
    pub beta: f64,
    /// Two-sided p-value testing beta against 1.
    #[serde(rename = "p(beta=1)")]
    pub p_beta: f64,
}
