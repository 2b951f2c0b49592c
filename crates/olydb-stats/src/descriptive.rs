//! Descriptive statistics over `f64` samples.
//!
//! Both functions return `0.0` for an empty sample rather than `NaN`.

/// Computes the arithmetic mean of `values`.
///
/// Returns `0.0` when `values` is empty.
///
/// # Examples
///
/// ```
/// # use olydb_stats::descriptive::mean;
/// assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0]), 2.5);
/// assert_eq!(mean(&[]), 0.0);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Computes the population standard deviation of `values` around `mean`.
///
/// The caller supplies the mean so it can be shared with other measures
/// computed over the same sample. The divisor is `n`, not `n - 1`.
///
/// Returns `0.0` when `values` is empty.
///
/// # Examples
///
/// ```
/// # use olydb_stats::descriptive::std_dev;
/// assert_eq!(std_dev(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0], 5.0), 2.0);
/// assert_eq!(std_dev(&[], 42.0), 0.0);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn std_dev(values: &[f64], mean: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}
