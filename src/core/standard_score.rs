//! Standard Score Computation
//!
//! Raw component values are standardized across the field and rescaled
//! to the 50-centered index used everywhere in the rating:
//!
//! ```text
//! standard = 50 + 10 * (x - mean) / stdev
//! ```
//!
//! Where:
//!     mean  = arithmetic mean of the field
//!     stdev = sample standard deviation (n-1 denominator) for n > 1
//!
//! When the variance is zero (single rider, or every value identical)
//! the deviation falls back to 1.0, which maps the whole field to
//! exactly 50.

/// Center of the rescaled index
pub const SCORE_CENTER: f64 = 50.0;
/// Spread of the rescaled index (one deviation unit)
pub const SCORE_SPREAD: f64 = 10.0;

/// Arithmetic mean; 0.0 for an empty slice
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation with zero-variance fallback
///
/// Uses the n-1 denominator for two or more values. Returns 1.0 when
/// the variance is not strictly positive so callers never divide by zero.
pub fn sample_std_dev(values: &[f64]) -> f64 {
    let n = values.len();
    if n <= 1 {
        return 1.0;
    }
    let m = mean(values);
    let var = values.iter().map(|x| (x - m).powi(2)).sum::<f64>() / (n - 1) as f64;
    if var > 0.0 {
        var.sqrt()
    } else {
        1.0
    }
}

/// Z-scores for a field of values, in input order
pub fn z_scores(values: &[f64]) -> Vec<f64> {
    let m = mean(values);
    let s = sample_std_dev(values);
    values.iter().map(|x| (x - m) / s).collect()
}

/// Standard scores (50-centered, 10-spread) for a field, in input order
///
/// # Examples
/// ```
/// use velobi::core::standard_score::standard_scores;
/// let scores = standard_scores(&[0.40, 0.40, 0.40]);
/// assert!(scores.iter().all(|&s| (s - 50.0).abs() < 1e-9));
/// ```
pub fn standard_scores(values: &[f64]) -> Vec<f64> {
    z_scores(values)
        .into_iter()
        .map(|z| SCORE_CENTER + SCORE_SPREAD * z)
        .collect()
}
