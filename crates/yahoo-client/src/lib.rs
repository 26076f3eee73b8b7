//! Client for the Yahoo Finance v7 historical-quotes download endpoint.
//!
//! One request per symbol: a trailing window of daily history as a CSV body,
//! from which the last `n` adjusted closes are kept. No retry; a failed
//! attempt is final for that symbol within a run.

use capm_core::CapmError;
use chrono::{Duration as ChronoDuration, Utc};
use reqwest::Client;
use std::time::Duration;

const BASE_URL: &str = "https://query1.finance.yahoo.com/v7/finance/download";

const ADJ_CLOSE_COLUMN: &str = "Adj Close";

const DEFAULT_USER_AGENT: &str = "capm-screener/0.1";

#[derive(Clone)]
pub struct YahooClient {
    client: Client,
}

impl Default for YahooClient {
    fn default() -> Self {
        Self::new()
    }
}

impl YahooClient {
    pub fn new() -> Self {
        let user_agent =
            std::env::var("YAHOO_USER_AGENT").unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string());

        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(user_agent)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client }
    }

    /// Fetch the most recent `n` daily adjusted closes for `symbol`,
    /// chronologically ascending, requesting `lookback_days` calendar days
    /// of history.
    ///
    /// Fails with [`CapmError::Remote`] on a non-success status or transport
    /// error, and with [`CapmError::InsufficientData`] when fewer than `n`
    /// usable rows come back (newly listed or delisted symbols, data gaps).
    pub async fn fetch_adjusted_closes(
        &self,
        symbol: &str,
        n: usize,
        lookback_days: i64,
    ) -> Result<Vec<f64>, CapmError> {
        let now = Utc::now();
        let start = now - ChronoDuration::days(lookback_days);
        let url = format!("{}/{}", BASE_URL, symbol);

        tracing::debug!(%symbol, "requesting daily history");
        let response = self
            .client
            .get(&url)
            .query(&[
                ("period1", start.timestamp().to_string()),
                ("period2", now.timestamp().to_string()),
                ("interval", "1d".to_string()),
                ("events", "history".to_string()),
                ("includeAdjustedClose", "true".to_string()),
            ])
            .send()
            .await
            .map_err(|e| remote_error(symbol, e.to_string()))?;

        if !response.status().is_success() {
            return Err(remote_error(symbol, format!("HTTP {}", response.status())));
        }

        let body = response
            .text()
            .await
            .map_err(|e| remote_error(symbol, e.to_string()))?;

        decode_adjusted_closes(&body, symbol, n)
    }
}

fn remote_error(symbol: &str, reason: String) -> CapmError {
    CapmError::Remote {
        ticker: symbol.to_string(),
        reason,
    }
}

/// Decode a historical-quotes CSV body down to the trailing `n` adjusted
/// closes, preserving the ascending chronological order of the rows.
///
/// Yahoo emits the literal string `null` for sessions without a quote; those
/// rows are dropped before the row count is checked.
pub fn decode_adjusted_closes(body: &str, symbol: &str, n: usize) -> Result<Vec<f64>, CapmError> {
    let mut reader = csv::Reader::from_reader(body.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| remote_error(symbol, format!("malformed CSV header: {e}")))?;
    let column = headers
        .iter()
        .position(|h| h == ADJ_CLOSE_COLUMN)
        .ok_or_else(|| remote_error(symbol, format!("no {ADJ_CLOSE_COLUMN:?} column")))?;

    let mut closes = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| remote_error(symbol, format!("malformed CSV row: {e}")))?;
        let field = record.get(column).unwrap_or("").trim();
        if field.is_empty() || field == "null" {
            continue;
        }
        let value: f64 = field
            .parse()
            .map_err(|_| remote_error(symbol, format!("bad adjusted close {field:?}")))?;
        closes.push(value);
    }

    if closes.len() < n {
        return Err(CapmError::InsufficientData {
            ticker: symbol.to_string(),
            rows: closes.len(),
            required: n,
        });
    }

    Ok(closes.split_off(closes.len() - n))
}
