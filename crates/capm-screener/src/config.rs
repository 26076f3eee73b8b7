use std::path::PathBuf;

/// Symbols screened even when the ticker file adds nothing.
pub const BASE_WATCHLIST: &[&str] = &[
    "MSFT", "GOOG", "TSLA", "AMZN", "VRTX", "SPY", "DIA", "IWM", "NSC", "REXR", "MEDP",
];

/// Run parameters, previously scattered literals.
#[derive(Debug, Clone)]
pub struct ScreenerConfig {
    /// Market index regressed against (the reference row).
    pub market_symbol: String,
    /// Label for the market reference row in the output table.
    pub market_label: String,
    /// 13-week T-bill yield, the risk-free proxy.
    pub risk_free_symbol: String,
    /// Calendar days of history requested per fetch; wide enough that the
    /// sample size in trading days is always present.
    pub lookback_days: i64,
    /// Most recent trading days used per regression.
    pub sample_size: usize,
    /// Rows printed to the console.
    pub display_rows: usize,
    /// One ticker symbol per line, merged into the base watchlist.
    pub ticker_file: PathBuf,
    /// Destination of the full results table.
    pub output_file: PathBuf,
}

impl Default for ScreenerConfig {
    fn default() -> Self {
        Self {
            market_symbol: "^GSPC".to_string(),
            market_label: "S&P 500".to_string(),
            risk_free_symbol: "^IRX".to_string(),
            lookback_days: 366,
            sample_size: 50,
            display_rows: 20,
            ticker_file: PathBuf::from("snp500.txt"),
            output_file: PathBuf::from("capm.csv"),
        }
    }
}
