//! Annotation text, placement, fit test and leader lines

use crate::config::{AnnotationType, PieStyle};
use crate::wedge::WedgeGeometry;
use chart_core::{polar_to_screen, Point, Result, Segment, TextExtent, TextMetrics};
use serde::{Deserialize, Serialize};

/// Leader line starts at `diameter / LEADER_START_DIVISOR` from the center,
/// a hair inside the rim.
pub const LEADER_START_DIVISOR: f64 = 2.01;

/// Leader line ends at `diameter / (LEADER_END_BASE - annotation_distance)`.
pub const LEADER_END_BASE: f64 = 3.0;

/// Fixed horizontal nudge applied to outside annotations
pub const OUTSIDE_NUDGE: f64 = 3.0;

/// Outcome of the fit heuristic
///
/// The test compares the text box with the span between the wedge's two
/// boundary rays at the annotation radius. It is an approximation, not a
/// collision test against the rotated text box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnnotationFit {
    Fits,
    DoesNotFit,
}

/// Where the annotation sits relative to the pie rim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnnotationSide {
    Inside,
    Outside,
}

/// Placement decision for one slice's text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationPlacement {
    pub text: String,
    pub extent: TextExtent,
    /// Baseline-left corner of the text; no rotation is applied
    pub anchor: Point,
    /// Bisector the text is placed along, in degrees
    pub angle: f64,
    pub side: AnnotationSide,
    pub fit: AnnotationFit,
    /// Present only for outside annotations that fit
    pub leader: Option<Segment>,
}

impl AnnotationPlacement {
    pub fn fits(&self) -> bool {
        self.fit == AnnotationFit::Fits
    }
}

/// Text for an entry under `annotation`; `None` when nothing is shown
pub fn annotation_text(
    annotation: AnnotationType,
    name: &str,
    value: f64,
    total: f64,
) -> Option<String> {
    let percentage = value / total * 100.0;
    match annotation {
        AnnotationType::None => None,
        AnnotationType::Label => Some(name.to_string()),
        AnnotationType::Percentage => Some(format!("{percentage:.1}%")),
        AnnotationType::LabelAndPercentage => Some(format!("{name} ({percentage:.1}%)")),
    }
}

/// Apply the chord-span heuristic
///
/// `x_diff`/`y_diff` are the absolute coordinate deltas between the two
/// boundary projections. A wider-than-tall span is tested against the text
/// width, otherwise against the text height.
pub fn fit_test(extent: TextExtent, x_diff: f64, y_diff: f64) -> AnnotationFit {
    let fits = if x_diff >= y_diff {
        extent.width < x_diff
    } else {
        extent.height < y_diff
    };
    if fits {
        AnnotationFit::Fits
    } else {
        AnnotationFit::DoesNotFit
    }
}

/// Tick from just inside the rim out toward an outside annotation
pub fn leader_line(wedge: &WedgeGeometry, annotation_distance: f64) -> Segment {
    let center = wedge.center();
    let (w, h) = (wedge.bounds.width, wedge.bounds.height);
    let angle = wedge.bisector();
    let end_divisor = LEADER_END_BASE - annotation_distance;

    let start = polar_to_screen(
        center,
        w / LEADER_START_DIVISOR,
        h / LEADER_START_DIVISOR,
        angle,
    );
    let end = polar_to_screen(center, w / end_divisor, h / end_divisor, angle);
    Segment::new(start, end)
}

/// Place `text` for `wedge`
///
/// The text box is centered on the pie center, then pushed out along the
/// bisector by `annotation_distance` times each radius. Outside
/// annotations are shifted sideways so they sit on the leader line.
pub fn place_annotation<M: TextMetrics + ?Sized>(
    wedge: &WedgeGeometry,
    text: String,
    style: &PieStyle,
    metrics: &M,
) -> Result<AnnotationPlacement> {
    let extent = metrics.measure(&text)?;
    let distance = style.annotation_distance;
    let (rx, ry) = wedge.radii();
    let (rx, ry) = (rx * distance, ry * distance);

    let center = wedge.center();
    let origin = Point::new(
        center.x - extent.width / 2.0,
        center.y + extent.height / 2.0,
    );
    let angle = wedge.bisector();
    let mut anchor = polar_to_screen(origin, rx, ry, angle);

    let first = polar_to_screen(origin, rx, ry, wedge.start_angle);
    let second = polar_to_screen(origin, rx, ry, wedge.end_angle());
    let x_diff = (first.x - second.x).abs();
    let y_diff = (first.y - second.y).abs();
    let fit = fit_test(extent, x_diff, y_diff);

    let side = if style.annotations_outside() {
        AnnotationSide::Outside
    } else {
        AnnotationSide::Inside
    };

    let mut leader = None;
    if side == AnnotationSide::Outside {
        anchor.x += -(angle - 90.0).to_radians().sin() * extent.width / 2.0 + OUTSIDE_NUDGE;
        if fit == AnnotationFit::Fits {
            leader = Some(leader_line(wedge, distance));
        }
    }

    Ok(AnnotationPlacement {
        text,
        extent,
        anchor,
        angle,
        side,
        fit,
        leader,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use chart_core::{MonospaceMetrics, Rect};

    fn square_wedge(start: f64, sweep: f64) -> WedgeGeometry {
        WedgeGeometry::new(Rect::new(0.0, 0.0, 200.0, 200.0), start, sweep)
    }

    #[test]
    fn test_annotation_text() {
        assert_eq!(annotation_text(AnnotationType::None, "A", 25.0, 100.0), None);
        assert_eq!(
            annotation_text(AnnotationType::Label, "A", 25.0, 100.0).as_deref(),
            Some("A")
        );
        assert_eq!(
            annotation_text(AnnotationType::Percentage, "A", 25.0, 100.0).as_deref(),
            Some("25.0%")
        );
        assert_eq!(
            annotation_text(AnnotationType::LabelAndPercentage, "Munich", 34.0, 91.0).as_deref(),
            Some("Munich (37.4%)")
        );
    }

    #[test]
    fn test_fit_test_orientation() {
        let text = TextExtent::new(20.0, 10.0);
        // Wide span: width decides
        assert_eq!(fit_test(text, 30.0, 5.0), AnnotationFit::Fits);
        assert_eq!(fit_test(text, 20.0, 5.0), AnnotationFit::DoesNotFit);
        // Equal spans count as wide
        assert_eq!(fit_test(text, 15.0, 15.0), AnnotationFit::DoesNotFit);
        // Tall span: height decides
        assert_eq!(fit_test(text, 5.0, 11.0), AnnotationFit::Fits);
        assert_eq!(fit_test(text, 5.0, 10.0), AnnotationFit::DoesNotFit);
    }

    #[test]
    fn test_inside_placement() {
        let metrics = MonospaceMetrics::new(10.0, 10.0).unwrap();
        let style = PieStyle::new().with_annotation_distance(0.5);
        // Right half of the pie, bisector pointing right
        let wedge = square_wedge(-90.0, 180.0);
        let p = place_annotation(&wedge, "ab".to_string(), &style, &metrics).unwrap();

        assert_eq!(p.side, AnnotationSide::Inside);
        assert_eq!(p.angle, 0.0);
        // center (100,100) - half text width + 50 along x
        assert_abs_diff_eq!(p.anchor.x, 100.0 - 10.0 + 50.0, epsilon = 1e-9);
        assert_abs_diff_eq!(p.anchor.y, 100.0 + 5.0, epsilon = 1e-9);
        // Boundary rays point straight down/up: tall span of 100
        assert!(p.fits());
        assert!(p.leader.is_none());
    }

    #[test]
    fn test_narrow_wedge_does_not_fit() {
        let metrics = MonospaceMetrics::new(10.0, 10.0).unwrap();
        let style = PieStyle::new().with_annotation_distance(0.5);
        let wedge = square_wedge(0.0, 2.0);
        let p = place_annotation(&wedge, "Hamburg".to_string(), &style, &metrics).unwrap();
        assert_eq!(p.fit, AnnotationFit::DoesNotFit);
        assert!(p.leader.is_none());
    }

    #[test]
    fn test_outside_placement_with_leader() {
        let metrics = MonospaceMetrics::new(4.0, 8.0).unwrap();
        let style = PieStyle::new().with_annotation_distance(1.5);
        // Top-left quadrant, bisector at 135 degrees
        let wedge = square_wedge(90.0, 90.0);
        let p = place_annotation(&wedge, "abcde".to_string(), &style, &metrics).unwrap();

        assert_eq!(p.side, AnnotationSide::Outside);
        assert!(p.fits());

        let leader = p.leader.expect("fitting outside annotation has a leader");
        let a = 135f64.to_radians();
        assert_abs_diff_eq!(leader.start.x, 100.0 + a.cos() * 200.0 / 2.01, epsilon = 1e-9);
        assert_abs_diff_eq!(leader.start.y, 100.0 - a.sin() * 200.0 / 2.01, epsilon = 1e-9);
        assert_abs_diff_eq!(leader.end.x, 100.0 + a.cos() * 200.0 / 1.5, epsilon = 1e-9);
        assert_abs_diff_eq!(leader.end.y, 100.0 - a.sin() * 200.0 / 1.5, epsilon = 1e-9);

        // Base position plus the sideways nudge
        let base_x = 100.0 - 10.0 + a.cos() * 150.0;
        let nudge = -(45f64.to_radians().sin()) * 10.0 + 3.0;
        assert_abs_diff_eq!(p.anchor.x, base_x + nudge, epsilon = 1e-9);
        assert_abs_diff_eq!(p.anchor.y, 100.0 + 4.0 - a.sin() * 150.0, epsilon = 1e-9);
    }

    #[test]
    fn test_outside_without_fit_has_no_leader() {
        let metrics = MonospaceMetrics::new(50.0, 50.0).unwrap();
        let style = PieStyle::new().with_annotation_distance(1.2);
        let wedge = square_wedge(10.0, 5.0);
        let p = place_annotation(&wedge, "wide label".to_string(), &style, &metrics).unwrap();
        assert_eq!(p.side, AnnotationSide::Outside);
        assert_eq!(p.fit, AnnotationFit::DoesNotFit);
        assert!(p.leader.is_none());
    }
}
