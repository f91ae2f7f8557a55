//! Fixed-width histogram construction

use crate::traits::HistogramBuilder;
use crate::types::{Histogram, HistogramBin};
use chart_core::{Error, Result};
use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Resolved binning range: `count` equal-width bins over `[min, max]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BinRange {
    pub min: f64,
    pub max: f64,
    pub count: usize,
}

impl BinRange {
    /// Create a validated range
    pub fn new(min: f64, max: f64, count: usize) -> Result<Self> {
        if count == 0 {
            return Err(Error::InvalidParameter(
                "number of bins must be positive".to_string(),
            ));
        }
        if !min.is_finite() {
            return Err(Error::non_finite("histogram min"));
        }
        if !max.is_finite() {
            return Err(Error::non_finite("histogram max"));
        }
        if max < min {
            return Err(Error::InvalidParameter(format!(
                "histogram max ({max}) is below min ({min})"
            )));
        }
        let range = Self { min, max, count };
        if !range.bin_width().is_finite() {
            return Err(Error::InvalidParameter(format!(
                "histogram range [{min}, {max}] overflows the bin width"
            )));
        }
        Ok(range)
    }

    /// Derive the range from the exact extremes of `sample`.
    ///
    /// Non-finite values and values with no `f64` representation do not
    /// take part in the scan.
    pub fn from_sample<T: ToPrimitive>(sample: &[T], count: usize) -> Result<Self> {
        let (min, max) = sample
            .iter()
            .filter_map(ToPrimitive::to_f64)
            .filter(|v| v.is_finite())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            });

        if min > max {
            return Err(Error::empty_input("histogram range derivation"));
        }
        Self::new(min, max, count)
    }

    /// `(max - min) / count`; zero for a degenerate range
    pub fn bin_width(&self) -> f64 {
        (self.max - self.min) / self.count as f64
    }

    /// Index of the bin `value` falls into, or `None` if it is dropped.
    ///
    /// Bins are half-open `[left, right)` except the last, which also
    /// takes a value exactly equal to `max`. Values below `min`, above
    /// `max`, and NaN are dropped.
    pub fn bin_index(&self, value: f64) -> Option<usize> {
        let index = ((value - self.min) / self.bin_width()).floor();

        if index < 0.0 {
            return None;
        }
        if value == self.max {
            return Some(self.count - 1);
        }
        // NaN and infinities come from NaN samples or a zero bin width
        if !index.is_finite() || index >= self.count as f64 {
            return None;
        }
        Some(index as usize)
    }

    fn empty_bins(&self) -> Vec<HistogramBin> {
        let width = self.bin_width();
        (0..self.count)
            .map(|i| {
                let left = self.min + i as f64 * width;
                let right = if i == self.count - 1 {
                    self.max
                } else {
                    self.min + (i + 1) as f64 * width
                };
                HistogramBin::new(left, right)
            })
            .collect()
    }
}

/// Fixed-width histogram builder
///
/// Splits `[min, max]` into a fixed number of equal-width bins. The range
/// is taken from [`with_range`](Self::with_range) when given, otherwise
/// from the exact extremes of the sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedWidthBuilder {
    num_bins: usize,
    range: Option<(f64, f64)>,
}

impl FixedWidthBuilder {
    /// Create a new fixed-width histogram builder
    pub fn new(num_bins: usize) -> Self {
        Self {
            num_bins,
            range: None,
        }
    }

    /// Bin over an explicit `[min, max]` instead of the sample extremes
    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.range = Some((min, max));
        self
    }

    /// Resolve the effective range for `sample`
    pub fn resolve<T: ToPrimitive>(&self, sample: &[T]) -> Result<BinRange> {
        match self.range {
            Some((min, max)) => BinRange::new(min, max, self.num_bins),
            None => {
                if self.num_bins == 0 {
                    // Report the bad parameter before complaining about the data
                    return BinRange::new(0.0, 0.0, 0);
                }
                BinRange::from_sample(sample, self.num_bins)
            }
        }
    }
}

impl<T: ToPrimitive> HistogramBuilder<T> for FixedWidthBuilder {
    #[instrument(skip_all, fields(num_bins = self.num_bins, n = sample.len()))]
    fn build(&self, sample: &[T]) -> Result<Histogram> {
        let range = self.resolve(sample)?;
        debug!(
            "Binning over [{}, {}] with width {}",
            range.min,
            range.max,
            range.bin_width()
        );

        let mut bins = range.empty_bins();
        let mut dropped = 0usize;
        for value in sample {
            match value.to_f64().and_then(|v| range.bin_index(v)) {
                Some(idx) => bins[idx].count += 1,
                None => dropped += 1,
            }
        }

        if dropped > 0 {
            debug!("Dropped {} of {} samples outside the range", dropped, sample.len());
        }

        Ok(Histogram::new(bins, sample.len(), range.min, range.max))
    }

    fn target_bins(&self) -> Option<usize> {
        Some(self.num_bins)
    }
}
