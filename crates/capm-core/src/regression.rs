//! Simple OLS regression and Student-t significance testing.

use statrs::distribution::{ContinuousCDF, StudentsT};

/// Ordinary least-squares fit of `y` on `x`.
#[derive(Debug, Clone, Copy)]
pub struct Regression {
    pub intercept: f64,
    pub intercept_stderr: f64,
    pub slope: f64,
    pub slope_stderr: f64,
}

/// Closed-form simple linear regression of `y` on `x`.
///
/// Both series must have equal length, at least 3 points for meaningful
/// degrees of freedom. A constant `x` has no defined slope and yields NaNs,
/// matching the numeric (rather than error-raising) behavior of standard
/// regression routines. Regressing a series against itself is well defined:
/// intercept 0, slope 1, both standard errors 0.
pub fn linear_regression(x: &[f64], y: &[f64]) -> Regression {
    debug_assert_eq!(x.len(), y.len());
    let n = x.len() as f64;

    let mean_x = x.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;

    let mut sxx = 0.0;
    let mut sxy = 0.0;
    for (xi, yi) in x.iter().zip(y.iter()) {
        sxx += (xi - mean_x) * (xi - mean_x);
        sxy += (xi - mean_x) * (yi - mean_y);
    }

    let slope = sxy / sxx;
    let intercept = mean_y - slope * mean_x;

    let sse: f64 = x
        .iter()
        .zip(y.iter())
        .map(|(xi, yi)| {
            let residual = yi - (intercept + slope * xi);
            residual * residual
        })
        .sum();
    let residual_variance = sse / (n - 2.0);

    Regression {
        intercept,
        intercept_stderr: (residual_variance * (1.0 / n + mean_x * mean_x / sxx)).sqrt(),
        slope,
        slope_stderr: (residual_variance / sxx).sqrt(),
    }
}

/// Two-sided t-test p-value for `estimate` against `hypothesized`.
///
/// `p = 2 * StudentT_cdf(-|t|, df)` with `t = (estimate - hypothesized) / std_err`.
pub fn t_test_p_value(estimate: f64, hypothesized: f64, std_err: f64, df: usize) -> f64 {
    let t = ((estimate - hypothesized) / std_err).abs();
    let dist = StudentsT::new(0.0, 1.0, df as f64).unwrap();
    2.0 * dist.cdf(-t)
}
