//! Core types for histogram representation

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single bin in a histogram
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    /// Left edge of the bin (inclusive)
    pub left: f64,
    /// Right edge of the bin (exclusive, except for the last bin)
    pub right: f64,
    /// Number of samples counted into this bin
    pub count: usize,
}

impl HistogramBin {
    /// Create a new, empty histogram bin
    pub fn new(left: f64, right: f64) -> Self {
        Self {
            left,
            right,
            count: 0,
        }
    }

    /// Get the width of the bin
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Check if a value falls within the half-open interval of this bin
    pub fn contains(&self, value: f64) -> bool {
        value >= self.left && value < self.right
    }

    /// Relative frequency (count / total_count)
    pub fn frequency(&self, total_count: usize) -> f64 {
        if total_count > 0 {
            self.count as f64 / total_count as f64
        } else {
            0.0
        }
    }
}

impl fmt::Display for HistogramBin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:.3}, {:.3}): count={}",
            self.left, self.right, self.count
        )
    }
}

/// Paired x/y series ready to be handed to a chart as ordinary data
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AxisData {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl AxisData {
    /// Pair two equal-length sequences.
    ///
    /// Returns `None` when the lengths differ.
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Option<Self> {
        (x.len() == y.len()).then_some(Self { x, y })
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Iterate `(x, y)` pairs in order
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }

    /// Split back into `(x, y)`
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.x, self.y)
    }
}

/// A histogram over `[min, max]` split into equal-width bins
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    bins: Vec<HistogramBin>,
    /// Samples offered to the binner, counted or not
    total_count: usize,
    min: f64,
    max: f64,
}

impl Histogram {
    /// Create a new histogram
    pub fn new(bins: Vec<HistogramBin>, total_count: usize, min: f64, max: f64) -> Self {
        Self {
            bins,
            total_count,
            min,
            max,
        }
    }

    /// Get the bins
    pub fn bins(&self) -> &[HistogramBin] {
        &self.bins
    }

    /// Get the number of bins
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    /// Check if the histogram has no bins
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Samples offered to the binner, including dropped ones
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// Samples that landed in some bin
    pub fn counted(&self) -> usize {
        self.bins.iter().map(|bin| bin.count).sum()
    }

    /// Samples discarded as out of range or not representable
    pub fn dropped(&self) -> usize {
        self.total_count - self.counted()
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Get the range of the histogram
    pub fn range(&self) -> f64 {
        self.max - self.min
    }

    /// Nominal width shared by every bin
    pub fn bin_width(&self) -> f64 {
        if self.bins.is_empty() {
            0.0
        } else {
            self.range() / self.bins.len() as f64
        }
    }

    /// Get the maximum count in any bin
    pub fn max_count(&self) -> usize {
        self.bins.iter().map(|bin| bin.count).max().unwrap_or(0)
    }

    /// Find which bin contains a given value
    pub fn find_bin(&self, value: f64) -> Option<usize> {
        // Last bin is closed on the right
        if !self.bins.is_empty() && value == self.max {
            return Some(self.bins.len() - 1);
        }

        self.bins.iter().position(|bin| bin.contains(value))
    }

    /// Get counts as a vector
    pub fn counts(&self) -> Vec<usize> {
        self.bins.iter().map(|bin| bin.count).collect()
    }

    /// Bin centers, `min + i * width + width / 2`
    pub fn centers(&self) -> Vec<f64> {
        let width = self.bin_width();
        (0..self.bins.len())
            .map(|i| self.min + i as f64 * width + width / 2.0)
            .collect()
    }

    /// Get frequencies as a vector
    pub fn frequencies(&self) -> Vec<f64> {
        self.bins
            .iter()
            .map(|bin| bin.frequency(self.total_count))
            .collect()
    }

    /// Get bin edges (including rightmost edge)
    pub fn edges(&self) -> Vec<f64> {
        let mut edges: Vec<f64> = self.bins.iter().map(|bin| bin.left).collect();
        if let Some(last) = self.bins.last() {
            edges.push(last.right);
        }
        edges
    }

    /// Bin centers against bin counts, in ascending bin order
    pub fn axis_data(&self) -> AxisData {
        AxisData {
            x: self.centers(),
            y: self.bins.iter().map(|bin| bin.count as f64).collect(),
        }
    }
}

impl fmt::Display for Histogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Histogram({} bins, n={}, counted={}, range=[{:.3}, {:.3}])",
            self.len(),
            self.total_count,
            self.counted(),
            self.min,
            self.max
        )
    }
}
