//! Core traits for histogram building

use crate::types::Histogram;
use chart_core::Result;
use num_traits::ToPrimitive;

/// Trait for building histograms from sample data
pub trait HistogramBuilder<T: ToPrimitive = f64> {
    /// Build a histogram from the given sample
    fn build(&self, sample: &[T]) -> Result<Histogram>;

    /// Get the target number of bins (if known)
    fn target_bins(&self) -> Option<usize> {
        None
    }
}
