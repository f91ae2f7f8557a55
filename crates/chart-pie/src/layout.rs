//! Pie layout: wedges and annotation placements for a whole series

use crate::annotation::{annotation_text, place_annotation, AnnotationPlacement};
use crate::config::PieStyle;
use crate::types::PieSeries;
use crate::wedge::WedgeGeometry;
use chart_core::{Error, Rect, Result, TextMetrics};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

/// Plot areas narrower than this are not laid out at all
pub const MIN_PLOT_WIDTH: f64 = 30.0;

/// Layout of a single entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliceLayout {
    pub name: String,
    pub value: f64,
    pub wedge: WedgeGeometry,
    /// `None` when annotations are switched off
    pub annotation: Option<AnnotationPlacement>,
}

/// Result of laying out a pie
///
/// Empty when the plot area was too small to draw anything.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PieLayout {
    pie_bounds: Option<Rect>,
    total: f64,
    slices: Vec<SliceLayout>,
}

impl PieLayout {
    /// Layout with nothing to draw
    pub fn empty() -> Self {
        Self::default()
    }

    /// Box of the pie ellipse, if anything was laid out
    pub fn pie_bounds(&self) -> Option<Rect> {
        self.pie_bounds
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    /// Slices in input order
    pub fn slices(&self) -> &[SliceLayout] {
        &self.slices
    }

    pub fn len(&self) -> usize {
        self.slices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SliceLayout> {
        self.slices.iter()
    }

    pub fn into_slices(self) -> Vec<SliceLayout> {
        self.slices
    }
}

/// Box the pie occupies inside `bounds`
///
/// A circular pie uses the shorter side for both dimensions. The result is
/// shrunk to `fill_fraction` and centered in `bounds`.
pub fn pie_bounds(bounds: Rect, style: &PieStyle) -> Rect {
    let (width, height) = if style.circular {
        let side = bounds.min_side();
        (side, side)
    } else {
        (bounds.width, bounds.height)
    };
    let half_border = (1.0 - style.fill_fraction) / 2.0;
    let center = bounds.center();

    Rect::new(
        center.x - width / 2.0 + half_border * width,
        center.y - height / 2.0 + half_border * height,
        width * style.fill_fraction,
        height * style.fill_fraction,
    )
}

/// Lay out every entry of `series` inside `bounds`
///
/// Wedges start at `start_angle_degrees + 90` (straight up) and follow
/// each other in input order. Each sweep is the entry's share of 360
/// degrees. Annotation text is measured with `metrics`.
///
/// Fails with [`Error::InvalidParameter`] for an out-of-domain style or
/// non-finite bounds or a total that overflows, and with
/// [`Error::EmptyTotal`] when all values are zero. A plot area narrower
/// than [`MIN_PLOT_WIDTH`] is not an error: the result is simply empty.
#[instrument(skip_all, fields(entries = series.len()))]
pub fn layout<M: TextMetrics + ?Sized>(
    series: &PieSeries,
    style: &PieStyle,
    bounds: Rect,
    metrics: &M,
) -> Result<PieLayout> {
    style.validate()?;
    if ![bounds.x, bounds.y, bounds.width, bounds.height]
        .iter()
        .all(|v| v.is_finite())
    {
        return Err(Error::non_finite("plot bounds"));
    }

    if bounds.width < MIN_PLOT_WIDTH {
        debug!("Plot area {} too small for a pie, skipping layout", bounds);
        return Ok(PieLayout::empty());
    }

    let pie = pie_bounds(bounds, style);

    let total = series.total();
    if total == 0.0 {
        return Err(Error::EmptyTotal);
    }
    if !total.is_finite() {
        return Err(Error::non_finite("pie series total"));
    }
    debug!("Laying out {} slices, total {}", series.len(), total);

    let mut start_angle = style.start_angle_degrees + 90.0;
    let mut slices = Vec::with_capacity(series.len());

    for entry in series {
        let sweep = entry.value / total * 360.0;
        let wedge = WedgeGeometry::new(pie, start_angle, sweep);

        let annotation = match annotation_text(style.annotation, &entry.name, entry.value, total) {
            Some(text) => {
                let placement = place_annotation(&wedge, text, style, metrics)?;
                trace!(
                    "Slice '{}': start={:.3} sweep={:.3} fit={:?}",
                    entry.name,
                    start_angle,
                    sweep,
                    placement.fit
                );
                Some(placement)
            }
            None => None,
        };

        slices.push(SliceLayout {
            name: entry.name.clone(),
            value: entry.value,
            wedge,
            annotation,
        });
        start_angle += sweep;
    }

    Ok(PieLayout {
        pie_bounds: Some(pie),
        total,
        slices,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation::AnnotationFit;
    use crate::config::AnnotationType;
    use approx::assert_abs_diff_eq;
    use chart_core::MonospaceMetrics;

    fn cities() -> PieSeries {
        PieSeries::from_pairs([
            ("Prague", 2.0),
            ("Dresden", 4.0),
            ("Munich", 34.0),
            ("Hamburg", 22.0),
            ("Berlin", 29.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_pie_bounds_circular() {
        let style = PieStyle::new().with_fill_fraction(0.5);
        let pie = pie_bounds(Rect::new(0.0, 0.0, 400.0, 200.0), &style);
        assert_eq!(pie, Rect::new(150.0, 50.0, 100.0, 100.0));
    }

    #[test]
    fn test_pie_bounds_elliptical() {
        let style = PieStyle::new().with_fill_fraction(0.5).with_circular(false);
        let pie = pie_bounds(Rect::new(10.0, 20.0, 400.0, 200.0), &style);
        assert_eq!(pie, Rect::new(110.0, 70.0, 200.0, 100.0));
    }

    #[test]
    fn test_wedges_are_contiguous_from_top() {
        let style = PieStyle::new().with_annotation(AnnotationType::None);
        let layout = layout(
            &cities(),
            &style,
            Rect::new(0.0, 0.0, 800.0, 600.0),
            &MonospaceMetrics::default(),
        )
        .unwrap();

        assert_eq!(layout.len(), 5);
        assert_eq!(layout.total(), 91.0);
        let first = &layout.slices()[0].wedge;
        assert_eq!(first.start_angle, 90.0);
        assert_abs_diff_eq!(first.sweep_angle, 2.0 / 91.0 * 360.0, epsilon = 1e-12);

        for pair in layout.slices().windows(2) {
            assert_abs_diff_eq!(
                pair[0].wedge.end_angle(),
                pair[1].wedge.start_angle,
                epsilon = 1e-12
            );
        }
        let sum: f64 = layout.iter().map(|s| s.wedge.sweep_angle).sum();
        assert_abs_diff_eq!(sum, 360.0, epsilon = 1e-9);
        assert!(layout.iter().all(|s| s.annotation.is_none()));
    }

    #[test]
    fn test_start_angle_offset() {
        let style = PieStyle::new().with_start_angle(30.0);
        let series = PieSeries::from_pairs([("a", 1.0), ("b", 1.0)]).unwrap();
        let layout = layout(
            &series,
            &style,
            Rect::new(0.0, 0.0, 100.0, 100.0),
            &MonospaceMetrics::default(),
        )
        .unwrap();
        assert_eq!(layout.slices()[0].wedge.start_angle, 120.0);
        assert_eq!(layout.slices()[1].wedge.start_angle, 300.0);
    }

    #[test]
    fn test_percentage_annotations() {
        let style = PieStyle::new().with_annotation(AnnotationType::Percentage);
        let series = PieSeries::from_pairs([("A", 25.0), ("B", 75.0)]).unwrap();
        let layout = layout(
            &series,
            &style,
            Rect::new(0.0, 0.0, 400.0, 400.0),
            &MonospaceMetrics::default(),
        )
        .unwrap();
        let texts: Vec<&str> = layout
            .iter()
            .filter_map(|s| s.annotation.as_ref())
            .map(|a| a.text.as_str())
            .collect();
        assert_eq!(texts, vec!["25.0%", "75.0%"]);
    }

    #[test]
    fn test_tiny_slice_annotation_does_not_fit() {
        let style = PieStyle::new().with_annotation(AnnotationType::LabelAndPercentage);
        let series = PieSeries::from_pairs([("Big", 999.0), ("Sliver", 1.0)]).unwrap();
        let layout = layout(
            &series,
            &style,
            Rect::new(0.0, 0.0, 400.0, 400.0),
            &MonospaceMetrics::default(),
        )
        .unwrap();
        let sliver = layout.slices()[1].annotation.as_ref().unwrap();
        assert_eq!(sliver.fit, AnnotationFit::DoesNotFit);
        assert_eq!(sliver.text, "Sliver (0.1%)");
    }

    #[test]
    fn test_too_small_is_empty_not_error() {
        let layout = layout(
            &cities(),
            &PieStyle::default(),
            Rect::new(0.0, 0.0, 29.9, 400.0),
            &MonospaceMetrics::default(),
        )
        .unwrap();
        assert!(layout.is_empty());
        assert_eq!(layout.pie_bounds(), None);

        // Checked before the total, so an all-zero series is fine here too
        let zeros = PieSeries::from_pairs([("A", 0.0), ("B", 0.0)]).unwrap();
        let layout = default_layout(&zeros, Rect::new(0.0, 0.0, 10.0, 10.0));
        assert!(layout.unwrap().is_empty());
    }

    fn default_layout(series: &PieSeries, bounds: Rect) -> Result<PieLayout> {
        layout(series, &PieStyle::default(), bounds, &MonospaceMetrics::default())
    }

    #[test]
    fn test_zero_total_is_error() {
        let zeros = PieSeries::from_pairs([("A", 0.0), ("B", 0.0)]).unwrap();
        let err = default_layout(&zeros, Rect::new(0.0, 0.0, 400.0, 400.0)).unwrap_err();
        assert!(matches!(err, Error::EmptyTotal));

        let err = default_layout(&PieSeries::new(), Rect::new(0.0, 0.0, 400.0, 400.0))
            .unwrap_err();
        assert!(matches!(err, Error::EmptyTotal));
    }

    #[test]
    fn test_overflowing_total_is_error() {
        let series = PieSeries::from_pairs([("A", f64::MAX), ("B", f64::MAX)]).unwrap();
        let err = default_layout(&series, Rect::new(0.0, 0.0, 400.0, 400.0)).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter(_)));
    }

    #[test]
    fn test_zero_height_is_still_laid_out() {
        let zeros = PieSeries::from_pairs([("A", 0.0), ("B", 0.0)]).unwrap();
        let err = default_layout(&zeros, Rect::new(0.0, 0.0, 400.0, 0.0)).unwrap_err();
        assert!(matches!(err, Error::EmptyTotal));

        let layout = default_layout(&cities(), Rect::new(0.0, 0.0, 400.0, 0.0)).unwrap();
        assert_eq!(layout.len(), 5);
        assert_eq!(layout.pie_bounds().unwrap().width, 0.0);
    }

    #[test]
    fn test_invalid_style_and_bounds() {
        let style = PieStyle::new().with_fill_fraction(0.0);
        let err = layout(
            &cities(),
            &style,
            Rect::new(0.0, 0.0, 400.0, 400.0),
            &MonospaceMetrics::default(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidParameter(_)));

        let err = default_layout(&cities(), Rect::new(0.0, 0.0, f64::NAN, 400.0)).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter(_)));
    }

    #[test]
    fn test_zero_value_entry_gets_empty_wedge() {
        let series = PieSeries::from_pairs([("a", 0.0), ("b", 5.0)]).unwrap();
        let layout = default_layout(&series, Rect::new(0.0, 0.0, 200.0, 200.0)).unwrap();
        assert_eq!(layout.slices()[0].wedge.sweep_angle, 0.0);
        assert_eq!(layout.slices()[1].wedge.sweep_angle, 360.0);
        assert_eq!(
            layout.slices()[0].annotation.as_ref().map(|a| a.fit),
            Some(AnnotationFit::DoesNotFit)
        );
    }
}
