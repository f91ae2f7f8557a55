//! Error types for chart layout
//!
//! Provides a unified error type for all chart-* crates.

use thiserror::Error;

/// Core error type for layout and binning operations
#[derive(Error, Debug)]
pub enum Error {
    /// Parameter outside its documented domain
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Nothing to derive a range from
    #[error("Empty input: {0}")]
    EmptyInput(String),

    /// Every pie entry is zero, so no proportional angle exists
    #[error("Pie total is zero: no slice angles can be computed")]
    EmptyTotal,

    /// Font metrics provider failed to measure a string
    #[error("Text metrics error: {0}")]
    TextMetrics(String),

    /// Downstream drawing surface failed
    #[error("Render error: {0}")]
    Render(String),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for an operation that received no data
    pub fn empty_input(operation: &str) -> Self {
        Self::EmptyInput(format!("{operation} requires at least one sample"))
    }

    /// Create an error for a NaN/Inf parameter
    pub fn non_finite(context: &str) -> Self {
        Self::InvalidParameter(format!("{context} must be finite"))
    }
}
