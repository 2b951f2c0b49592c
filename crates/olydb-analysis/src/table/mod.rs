//! Generic table helpers shared by every results view.
//!
//! - [`query`]: search, sort and pagination state applied to derived rows
//! - [`body`]: loading / error / empty / data resolution of a table body

pub mod body;
pub mod query;
