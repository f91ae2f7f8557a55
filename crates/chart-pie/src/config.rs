//! Configuration types for pie layout

use chart_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// What text, if any, is placed on each slice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AnnotationType {
    /// No annotation
    None,

    /// Entry name
    #[default]
    Label,

    /// Share of the total, one decimal place: `25.0%`
    Percentage,

    /// Name followed by share: `Berlin (29.9%)`
    LabelAndPercentage,
}

/// Immutable layout parameters for a pie chart
///
/// Passed by reference to every layout call; nothing is stored globally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PieStyle {
    /// Share of the available box the pie occupies, in `(0, 1]`
    pub fill_fraction: f64,

    /// Rotation of the first wedge, in degrees
    pub start_angle_degrees: f64,

    /// Force equal width and height
    pub circular: bool,

    pub annotation: AnnotationType,

    /// Annotation radius as a multiple of the pie radius.
    ///
    /// Up to 1.0 the text sits on the wedge; above 1.0 it sits outside and
    /// gets a leader line. Must be below 3.0.
    pub annotation_distance: f64,
}

impl Default for PieStyle {
    fn default() -> Self {
        Self {
            fill_fraction: 0.70,
            start_angle_degrees: 0.0,
            circular: true,
            annotation: AnnotationType::Label,
            annotation_distance: 0.67,
        }
    }
}

impl PieStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fill_fraction(mut self, fill_fraction: f64) -> Self {
        self.fill_fraction = fill_fraction;
        self
    }

    pub fn with_start_angle(mut self, degrees: f64) -> Self {
        self.start_angle_degrees = degrees;
        self
    }

    pub fn with_circular(mut self, circular: bool) -> Self {
        self.circular = circular;
        self
    }

    pub fn with_annotation(mut self, annotation: AnnotationType) -> Self {
        self.annotation = annotation;
        self
    }

    pub fn with_annotation_distance(mut self, distance: f64) -> Self {
        self.annotation_distance = distance;
        self
    }

    /// Annotations above 1.0 sit outside the pie
    pub fn annotations_outside(&self) -> bool {
        self.annotation_distance > 1.0
    }

    /// Check every parameter against its domain
    pub fn validate(&self) -> Result<()> {
        if !self.fill_fraction.is_finite() {
            return Err(Error::non_finite("fill fraction"));
        }
        if self.fill_fraction <= 0.0 || self.fill_fraction > 1.0 {
            return Err(Error::InvalidParameter(format!(
                "fill fraction must be in (0, 1], got {}",
                self.fill_fraction
            )));
        }
        if !self.start_angle_degrees.is_finite() {
            return Err(Error::non_finite("start angle"));
        }
        if !self.annotation_distance.is_finite() {
            return Err(Error::non_finite("annotation distance"));
        }
        // The leader line ends at diameter / (3 - distance)
        if self.annotation_distance <= 0.0 || self.annotation_distance >= 3.0 {
            return Err(Error::InvalidParameter(format!(
                "annotation distance must be in (0, 3), got {}",
                self.annotation_distance
            )));
        }
        Ok(())
    }
}
