//! Statistical primitives for the olympiad results browser.
//!
//! This crate provides the small numeric toolkit the aggregation layer is
//! built on:
//!
//! - **Descriptive statistics**: arithmetic mean and population standard deviation
//! - **Correlation**: Pearson correlation coefficients and pairwise correlation matrices
//! - **Color mapping**: translating a correlation coefficient into a display color
//!
//! Every function here degrades to a neutral default on empty or degenerate
//! input instead of returning an error, so callers can feed them whatever a
//! filter produced without special-casing.
//!
//! # Modules
//!
//! - [`descriptive`]: Mean and standard deviation
//! - [`correlation`]: Pearson correlation and [`correlation::CorrelationMatrix`]
//! - [`color`]: Correlation-to-color mapping for heatmap cells
//!
//! # Examples
//!
//! ## Computing descriptive statistics
//!
//! ```
//! use olydb_stats::descriptive::{mean, std_dev};
//!
//! let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
//! let m = mean(&values);
//! assert_eq!(m, 5.0);
//! assert_eq!(std_dev(&values, m), 2.0);
//! ```
//!
//! ## Correlating two series
//!
//! ```
//! use olydb_stats::correlation::correlation;
//!
//! let r = correlation(&[1.0, 2.0, 3.0, 4.0, 5.0], &[2.0, 4.0, 6.0, 8.0, 10.0]);
//! assert!((r - 1.0).abs() < 1e-12);
//! ```
//!
//! ## Coloring a heatmap cell
//!
//! ```
//! use olydb_stats::color::{CellColor, correlation_color};
//!
//! assert_eq!(correlation_color(f64::NAN, false), CellColor::Transparent);
//! assert_eq!(correlation_color(f64::NAN, true).to_string(), "transparent");
//! ```

pub mod color;
pub mod correlation;
pub mod descriptive;
