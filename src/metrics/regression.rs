use serde::Serialize;

use crate::error::{MetricsError, Result};

/// Ordinary-least-squares fit of `log10(weight) = intercept + slope * log10(length)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RegressionResult {
    pub slope: f64,
    pub intercept: f64,
    pub r_squared: f64,
    /// Number of valid length/weight pairs the fit used.
    pub n: usize,
}

/// Allometric length-weight regression on log10-transformed pairs.
///
/// `lengths` and `weights` are parallel; a pair is valid when both values
/// are finite and positive (log10 otherwise undefined). Fails with
/// [`MetricsError::InsufficientData`] below two valid pairs, or when every
/// valid length is identical (the slope is undefined with zero variance in
/// the predictor).
pub fn length_weight_regression(lengths: &[f64], weights: &[f64]) -> Result<RegressionResult> {
    assert_eq!(
        lengths.len(),
        weights.len(),
        "lengths and weights must be parallel"
    );

    let pairs: Vec<(f64, f64)> = lengths
        .iter()
        .zip(weights.iter())
        .filter(|(&l, &w)| l.is_finite() && w.is_finite() && l > 0.0 && w > 0.0)
        .map(|(&l, &w)| (l.log10(), w.log10()))
        .collect();

    let n = pairs.len();
    if n < 2 {
        return Err(MetricsError::InsufficientData { needed: 2, got: n });
    }

    let x_mean = pairs.iter().map(|(x, _)| x).sum::<f64>() / n as f64;
    let y_mean = pairs.iter().map(|(_, y)| y).sum::<f64>() / n as f64;

    let mut sxx = 0.0;
    let mut syy = 0.0;
    let mut sxy = 0.0;
    for (x, y) in &pairs {
        let dx = x - x_mean;
        let dy = y - y_mean;
        sxx += dx * dx;
        syy += dy * dy;
        sxy += dx * dy;
    }

    if sxx == 0.0 {
        return Err(MetricsError::InsufficientData { needed: 2, got: 1 });
    }

    let slope = sxy / sxx;
    let intercept = y_mean - slope * x_mean;
    // With zero variance in y the flat fit is exact.
    let r_squared = if syy > 0.0 { (sxy * sxy) / (sxx * syy) } else { 1.0 };

    Ok(RegressionResult {
        slope,
        intercept,
        r_squared,
        n,
    })
}
