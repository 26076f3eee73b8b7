//! capm-screener: estimate CAPM alpha and beta for a watchlist of tickers.
//!
//! Fetches trailing daily adjusted closes for the market index, the 13-week
//! bill yield, and every watchlist ticker; regresses each ticker's excess
//! returns against the market's; then ranks by significance of alpha and
//! writes the table to `capm.csv`.
//!
//! Usage:
//!   cargo run -p capm-screener
//!
//! Expects `snp500.txt` (one symbol per line) in the working directory.

mod config;
mod report;
mod watchlist;

use anyhow::Context;
use capm_core::{
    daily_risk_free, estimate_capm, excess_returns, holding_period_returns, linear_regression,
    rank_by_alpha_significance, CapmError, TickerStats,
};
use config::ScreenerConfig;
use yahoo_client::YahooClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "capm_screener=info,yahoo_client=warn".into()),
        )
        .init();

    let config = ScreenerConfig::default();
    let client = YahooClient::new();

    let tickers = watchlist::load(&config.ticker_file, config::BASE_WATCHLIST)?;
    tracing::info!(count = tickers.len(), "watchlist loaded");

    let mut rows: Vec<TickerStats> = Vec::new();

    // Market prelude. Failures here are fatal: every later regression needs
    // the market excess series and the daily risk-free rate.
    let market_prices = client
        .fetch_adjusted_closes(&config.market_symbol, config.sample_size, config.lookback_days)
        .await
        .context("fetching market index history")?;
    let market_hpr = holding_period_returns(&market_prices);

    // Reference row: the market regressed against its own (unadjusted) HPR.
    // Trivially alpha 0, beta 1; the zero p-values pin it to the top of the
    // ranking as a fixed baseline.
    let reference = linear_regression(&market_hpr, &market_hpr);
    rows.push(TickerStats {
        ticker: config.market_label.clone(),
        alpha: reference.intercept,
        p_alpha: 0.0,
        beta: reference.slope,
        p_beta: 0.0,
    });

    let bill_yields = client
        .fetch_adjusted_closes(&config.risk_free_symbol, config.sample_size, config.lookback_days)
        .await
        .context("fetching risk-free yield history")?;
    let annual_yield = bill_yields
        .last()
        .copied()
        .context("empty risk-free yield series")?;
    let daily_rf = daily_risk_free(annual_yield);
    tracing::info!(annual_yield, daily_rf, "risk-free rate derived");

    let market_excess = excess_returns(&market_hpr, daily_rf);

    for ticker in &tickers {
        let outcome = screen_ticker(&client, ticker, &market_excess, daily_rf, &config).await;
        fold_success(&mut rows, outcome);
    }

    rank_by_alpha_significance(&mut rows);
    report::print_top(&rows, config.display_rows);
    report::export(&rows, &config.output_file)?;
    tracing::info!(
        rows = rows.len(),
        path = %config.output_file.display(),
        "results table written"
    );

    Ok(())
}

/// Fetch one ticker and produce its results-table row.
async fn screen_ticker(
    client: &YahooClient,
    ticker: &str,
    market_excess: &[f64],
    daily_rf: f64,
    config: &ScreenerConfig,
) -> Result<TickerStats, CapmError> {
    let prices = client
        .fetch_adjusted_closes(ticker, config.sample_size, config.lookback_days)
        .await?;
    let excess = excess_returns(&holding_period_returns(&prices), daily_rf);
    Ok(estimate_capm(ticker, market_excess, &excess))
}

/// Fold one per-ticker outcome into the results table. Successes append a
/// row; either fetch error kind logs a warning and drops the ticker, so a
/// failure never halts the remaining tickers.
fn fold_success(rows: &mut Vec<TickerStats>, outcome: Result<TickerStats, CapmError>) {
    match outcome {
        Ok(row) => rows.push(row),
        Err(err) => tracing::warn!("skipping ticker: {err}"),
    }
}
