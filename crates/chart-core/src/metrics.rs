//! Font metrics seam
//!
//! Layout code never talks to a font engine directly. It asks a
//! [`TextMetrics`] provider for the rendered extent of a string, so the
//! same layout can be driven by a real rasterizer or by a deterministic
//! approximation in tests.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Rendered size of a piece of text
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TextExtent {
    pub width: f64,
    pub height: f64,
}

impl TextExtent {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Provider of rendered text extents
pub trait TextMetrics {
    /// Measure the bounding box of `text` as it would be drawn
    fn measure(&self, text: &str) -> Result<TextExtent>;
}

impl<M: TextMetrics + ?Sized> TextMetrics for &M {
    fn measure(&self, text: &str) -> Result<TextExtent> {
        (**self).measure(text)
    }
}

/// Fixed advance per character and fixed line height
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonospaceMetrics {
    char_width: f64,
    line_height: f64,
}

impl MonospaceMetrics {
    /// Create a monospace approximation
    ///
    /// Both dimensions must be finite and non-negative.
    pub fn new(char_width: f64, line_height: f64) -> Result<Self> {
        if !char_width.is_finite() || !line_height.is_finite() {
            return Err(Error::non_finite("monospace metrics"));
        }
        if char_width < 0.0 || line_height < 0.0 {
            return Err(Error::InvalidParameter(format!(
                "monospace metrics must be non-negative, got {char_width} x {line_height}"
            )));
        }
        Ok(Self {
            char_width,
            line_height,
        })
    }

    pub fn char_width(&self) -> f64 {
        self.char_width
    }

    pub fn line_height(&self) -> f64 {
        self.line_height
    }
}

impl Default for MonospaceMetrics {
    /// Roughly a 12pt sans-serif face
    fn default() -> Self {
        Self {
            char_width: 7.0,
            line_height: 12.0,
        }
    }
}

impl TextMetrics for MonospaceMetrics {
    fn measure(&self, text: &str) -> Result<TextExtent> {
        let chars = text.chars().count() as f64;
        let height = if text.is_empty() { 0.0 } else { self.line_height };
        Ok(TextExtent::new(chars * self.char_width, height))
    }
}
