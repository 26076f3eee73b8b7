//! Holding-period returns and the risk-free adjustment.

/// Trading days per year, used to de-annualize the bill yield.
const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// One-period holding-period returns: `r[i] = p[i+1] / p[i] - 1`.
///
/// Output is one element shorter than the input. Prices are assumed to be
/// strictly positive; a zero price would produce an infinite return rather
/// than an error, which real adjusted-close data does not exhibit.
pub fn holding_period_returns(prices: &[f64]) -> Vec<f64> {
    prices.windows(2).map(|w| w[1] / w[0] - 1.0).collect()
}

/// Convert an annualized percentage yield to a compounding daily rate.
pub fn daily_risk_free(annual_yield_pct: f64) -> f64 {
    (1.0 + annual_yield_pct / 100.0).powf(1.0 / TRADING_DAYS_PER_YEAR) - 1.0
}

/// Subtract the daily risk-free rate from every return in the series.
pub fn excess_returns(returns: &[f64], daily_rf: f64) -> Vec<f64> {
    returns.iter().map(|r| r - daily_rf).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hpr_length_and_values() {
        let prices = [100.0, 110.0, 99.0, 99.0];
        let hpr = holding_period_returns(&prices);
        assert_eq!(hpr.len(), prices.len() - 1);
        for (i, r) in hpr.iter().enumerate() {
            assert!((r - (prices[i + 1] / prices[i] - 1.0)).abs() < 1e-12);
        }
        assert!((hpr[0] - 0.10).abs() < 1e-12);
        assert_eq!(hpr[2], 0.0);
    }

    #[test]
    fn hpr_of_short_series() {
        assert!(holding_period_returns(&[100.0]).is_empty());
        assert_eq!(holding_period_returns(&[100.0, 105.0]).len(), 1);
    }

    #[test]
    fn zero_yield_gives_zero_daily_rate() {
        assert_eq!(daily_risk_free(0.0), 0.0);
    }

    #[test]
    fn daily_rate_is_monotonic_in_yield() {
        let yields = [-50.0, -5.0, 0.0, 0.01, 1.0, 4.5, 15.0];
        for pair in yields.windows(2) {
            assert!(daily_risk_free(pair[0]) < daily_risk_free(pair[1]));
        }
    }

    #[test]
    fn daily_rate_magnitude_is_sane() {
        // 5% annual compounds to roughly 2 basis points a day
        let daily = daily_risk_free(5.0);
        assert!(daily > 0.00015 && daily < 0.00025);
    }

    #[test]
    fn excess_subtracts_scalar_elementwise() {
        let excess = excess_returns(&[0.01, -0.02, 0.0], 0.0002);
        assert_eq!(excess.len(), 3);
        assert!((excess[0] - 0.0098).abs() < 1e-12);
        assert!((excess[1] + 0.0202).abs() < 1e-12);
        assert!((excess[2] + 0.0002).abs() < 1e-12);
    }
}
