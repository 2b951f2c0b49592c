//! Pearson correlation.
//!
//! # Examples
//!
//! ```
//! use olydb_stats::correlation::{CorrelationMatrix, correlation};
//!
//! let x = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let y = [10.0, 8.0, 6.0, 4.0, 2.0];
//! assert!((correlation(&x, &y) + 1.0).abs() < 1e-12);
//!
//! let matrix = CorrelationMatrix::from_columns(&[x.to_vec(), y.to_vec()]);
//! assert_eq!(matrix.size(), 2);
//! assert_eq!(matrix.get(0, 1), matrix.get(1, 0));
//! ```

use serde::Serialize;

use crate::descriptive::{mean, std_dev};

/// Computes the Pearson correlation coefficient of two paired samples.
///
/// Returns `0.0` when the samples have different lengths, are empty, or
/// either of them is constant (zero variance).
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn correlation(x: &[f64], y: &[f64]) -> f64 {
    if x.len() != y.len() || x.is_empty() {
        return 0.0;
    }

    let mean_x = mean(x);
    let mean_y = mean(y);
    let std_x = std_dev(x, mean_x);
    let std_y = std_dev(y, mean_y);
    if std_x == 0.0 || std_y == 0.0 {
        return 0.0;
    }

    let covariance = x
        .iter()
        .zip(y)
        .map(|(xi, yi)| (xi - mean_x) * (yi - mean_y))
        .sum::<f64>()
        / x.len() as f64;

    covariance / (std_x * std_y)
}

/// Symmetric matrix of pairwise correlations between equally long columns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationMatrix {
    /// Row-major coefficients, `size * size` entries.
    values: Vec<f64>,
    size: usize,
}

impl CorrelationMatrix {
    /// Correlates every pair of `columns`.
    ///
    /// Each pair is computed once and mirrored, so `get(i, j) == get(j, i)`
    /// holds exactly. Diagonal entries are computed like any other pair,
    /// which makes a constant column report `0.0` against itself.
    #[must_use]
    pub fn from_columns<C>(columns: &[C]) -> Self
    where
        C: AsRef<[f64]>,
    {
        let size = columns.len();
        let mut values = vec![0.0; size * size];
        for i in 0..size {
            for j in i..size {
                let r = correlation(columns[i].as_ref(), columns[j].as_ref());
                values[i * size + j] = r;
                values[j * size + i] = r;
            }
        }
        Self { values, size }
    }

    /// Number of rows (and columns) in the matrix.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Coefficient between column `i` and column `j`.
    ///
    /// # Panics
    ///
    /// Panics if `i` or `j` is out of bounds.
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        assert!(i < self.size && j < self.size, "index out of bounds");
        self.values[i * self.size + j]
    }

    /// Iterates over the rows of the matrix.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        // chunks(0) panics; an empty matrix has no rows anyway
        self.values.chunks(self.size.max(1))
    }
}
