//! Fixed-width histogram binning for charts
//!
//! Turns a raw sample collection into equal-width bins and hands the result
//! back as [`AxisData`]: bin centers on x, bin counts on y, ready to be
//! plotted as an ordinary series.
//!
//! # Binning rules
//!
//! - Bins are half-open `[left, right)`; the last bin is also closed on the
//!   right so a sample exactly equal to `max` is always counted.
//! - Samples below `min` or above `max` are dropped silently. They show up
//!   in [`Histogram::dropped`], never as an error.
//! - Without an explicit range, `min`/`max` are the exact extremes of the
//!   sample.
//!
//! # Examples
//!
//! ```rust
//! use chart_histogram::{FixedWidthBuilder, HistogramBuilder};
//!
//! let data = vec![-9.0, -9.0, -1.0, 1.0, 9.0, 9.0];
//! let histogram = FixedWidthBuilder::new(10)
//!     .with_range(-10.0, 10.0)
//!     .build(&data[..])
//!     .unwrap();
//!
//! assert_eq!(histogram.counts(), vec![2, 0, 0, 0, 1, 1, 0, 0, 0, 2]);
//!
//! let axis = histogram.axis_data();
//! assert_eq!(axis.x()[0], -9.0);
//! assert_eq!(axis.y()[0], 2.0);
//! ```
//!
//! Any numeric sample type works:
//!
//! ```rust
//! let counts = chart_histogram::histogram(&[1u8, 2, 2, 3], 2).unwrap().counts();
//! assert_eq!(counts, vec![1, 3]);
//! ```

pub mod builders;
pub mod traits;
pub mod types;

pub use builders::{BinRange, FixedWidthBuilder};
pub use traits::HistogramBuilder;
pub use types::{AxisData, Histogram, HistogramBin};

pub use chart_core::{Error, Result};

use num_traits::ToPrimitive;

/// Bin `data` into `num_bins` equal-width bins spanning its own extremes
pub fn histogram<T: ToPrimitive>(data: &[T], num_bins: usize) -> Result<Histogram> {
    FixedWidthBuilder::new(num_bins).build(data)
}

/// Bin `data` into `num_bins` equal-width bins spanning `[min, max]`
pub fn histogram_in_range<T: ToPrimitive>(
    data: &[T],
    num_bins: usize,
    min: f64,
    max: f64,
) -> Result<Histogram> {
    FixedWidthBuilder::new(num_bins)
        .with_range(min, max)
        .build(data)
}
