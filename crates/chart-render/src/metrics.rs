//! Text metrics backed by the plotters font engine

use chart_core::{Error, Result, TextExtent, TextMetrics};
use plotters::style::{FontDesc, IntoFont};

/// Measures text with the same font the renderer draws with
#[derive(Clone)]
pub struct FontMetrics {
    font: FontDesc<'static>,
}

impl FontMetrics {
    pub fn new(family: &'static str, size: f64) -> Self {
        Self {
            font: (family, size).into_font(),
        }
    }

    pub fn font(&self) -> &FontDesc<'static> {
        &self.font
    }
}

impl Default for FontMetrics {
    fn default() -> Self {
        Self::new("sans-serif", 14.0)
    }
}

impl TextMetrics for FontMetrics {
    fn measure(&self, text: &str) -> Result<TextExtent> {
        let (width, height) = self
            .font
            .box_size(text)
            .map_err(|e| Error::TextMetrics(e.to_string()))?;
        Ok(TextExtent::new(width as f64, height as f64))
    }
}
