//! Migration percentage computation.
//!
//! All landmarks are projected onto the Hilgenreiner axis (the line through
//! the two triradiate points), reducing each to a 1-D coordinate along the
//! reference direction. Each hip's migration percentage is the lateral
//! displacement of its femoral head past the Perkins edge, as a fraction of
//! the projected head width. Working in projected coordinates keeps the
//! result correct on tilted X-rays, unlike a raw image-X reading.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::constants::{AXIS_EPSILON, HEAD_WIDTH_EPSILON, LANDMARK_COUNT};
use crate::model::{Point, Side};

/// Errors that can invalidate a computed percentage.
///
/// Both are local to the calculation: the operator recovers by re-marking
/// the offending points.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeasureError {
    /// The two triradiate points coincide, so no reference axis exists.
    #[error("triradiate points coincide, re-mark the reference axis")]
    DegenerateAxis,

    /// The lateral and medial head edges project to the same coordinate.
    #[error("femoral head edges coincide on the {side} side")]
    DegenerateHeadWidth {
        /// The side whose head marking is degenerate
        side: Side,
    },
}

/// Options controlling the percentage computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeasureOptions {
    /// Clamp computed percentages to `[0, 100]`.
    pub clamp: bool,
}

impl Default for MeasureOptions {
    fn default() -> Self {
        Self { clamp: true }
    }
}

/// Unit direction of the Hilgenreiner line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Axis {
    ux: f32,
    uy: f32,
}

impl Axis {
    /// Build the reference axis from the two triradiate points.
    ///
    /// Fails when the points are closer than [`AXIS_EPSILON`]; the near-zero
    /// direction is reported instead of divided through.
    pub fn from_points(p0: &Point, p1: &Point) -> Result<Self, MeasureError> {
        let dx = p1.x - p0.x;
        let dy = p1.y - p0.y;
        let len = (dx * dx + dy * dy).sqrt();
        if len < AXIS_EPSILON {
            return Err(MeasureError::DegenerateAxis);
        }
        Ok(Self {
            ux: dx / len,
            uy: dy / len,
        })
    }

    /// Scalar projection of a point onto the axis direction.
    pub fn project(&self, p: &Point) -> f32 {
        p.x * self.ux + p.y * self.uy
    }

    /// The unit direction along the axis.
    pub fn direction(&self) -> (f32, f32) {
        (self.ux, self.uy)
    }

    /// The unit direction perpendicular to the axis (90 degrees rotated).
    pub fn perpendicular(&self) -> (f32, f32) {
        (-self.uy, self.ux)
    }
}

/// Migration percentage for one hip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SideMigration {
    /// Percentage clamped to `[0, 100]` (equal to `raw` when clamping is off).
    pub percent: f32,
    /// Unclamped value, kept for diagnostics.
    pub raw: f32,
}

/// Result of a complete measurement: one outcome per hip.
///
/// One side can be degenerate while the other remains valid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MigrationResult {
    pub right: Result<SideMigration, MeasureError>,
    pub left: Result<SideMigration, MeasureError>,
}

impl MigrationResult {
    /// The outcome for one side.
    pub fn side(&self, side: Side) -> &Result<SideMigration, MeasureError> {
        match side {
            Side::Right => &self.right,
            Side::Left => &self.left,
        }
    }
}

impl fmt::Display for MigrationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn side(outcome: &Result<SideMigration, MeasureError>) -> String {
            match outcome {
                Ok(m) => format!("{:.1}%", m.percent),
                Err(_) => "invalid".to_string(),
            }
        }
        write!(f, "Right: {} | Left: {}", side(&self.right), side(&self.left))
    }
}

/// Compute both migration percentages from a complete landmark set.
///
/// The points must be in marking order ([`crate::model::Landmark`] indices).
/// Taking a fixed-size array makes incomplete input unrepresentable; a
/// partially marked store is a normal state, not an error, and simply has no
/// result yet.
pub fn migration(points: &[Point; LANDMARK_COUNT], options: MeasureOptions) -> MigrationResult {
    let axis = match Axis::from_points(&points[0], &points[1]) {
        Ok(axis) => axis,
        Err(e) => {
            return MigrationResult {
                right: Err(e),
                left: Err(e),
            };
        }
    };
    let center = (axis.project(&points[0]) + axis.project(&points[1])) / 2.0;

    MigrationResult {
        right: side_migration(&axis, center, points, Side::Right, options),
        left: side_migration(&axis, center, points, Side::Left, options),
    }
}

fn side_migration(
    axis: &Axis,
    center: f32,
    points: &[Point; LANDMARK_COUNT],
    side: Side,
    options: MeasureOptions,
) -> Result<SideMigration, MeasureError> {
    let perkins = axis.project(&points[side.perkins().index()]);
    let e0 = axis.project(&points[side.lateral_edge().index()]);
    let e1 = axis.project(&points[side.medial_edge().index()]);

    // The marked lateral/medial roles are not trusted: whichever edge
    // projects farther from the axis midpoint is lateral. On an exact tie
    // the lateral-role slot wins.
    let (lateral, medial) = if (e0 - center).abs() >= (e1 - center).abs() {
        (e0, e1)
    } else {
        (e1, e0)
    };

    let width = (lateral - medial).abs();
    if width < HEAD_WIDTH_EPSILON {
        return Err(MeasureError::DegenerateHeadWidth { side });
    }

    let raw = (lateral - perkins).abs() / width * 100.0;
    let percent = if options.clamp {
        raw.clamp(0.0, 100.0)
    } else {
        raw
    };
    Ok(SideMigration { percent, raw })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Landmark;

    const EPSILON: f32 = 0.01;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    /// Horizontal-axis configuration where both sides measure 40.0%.
    fn baseline_points() -> [Point; LANDMARK_COUNT] {
        [
            Point::new(0.0, 100.0),   // right triradiate
            Point::new(200.0, 100.0), // left triradiate
            Point::new(50.0, 100.0),  // right Perkins
            Point::new(150.0, 100.0), // left Perkins
            Point::new(30.0, 100.0),  // right head lateral
            Point::new(80.0, 100.0),  // right head medial
            Point::new(170.0, 100.0), // left head lateral
            Point::new(120.0, 100.0), // left head medial
        ]
    }

    fn rotate(p: Point, degrees: f32, cx: f32, cy: f32) -> Point {
        let (s, c) = degrees.to_radians().sin_cos();
        let dx = p.x - cx;
        let dy = p.y - cy;
        Point::new(cx + dx * c - dy * s, cy + dx * s + dy * c)
    }

    #[test]
    fn test_horizontal_axis_scenario() {
        // Right side: center=100, |30-100|=70 > |80-100|=20, so lateral=30,
        // medial=80, and |30-50| / |30-80| * 100 = 40.0.
        let result = migration(&baseline_points(), MeasureOptions::default());
        let right = result.right.expect("right side should be valid");
        let left = result.left.expect("left side should be valid");
        assert!(approx_eq(right.percent, 40.0));
        assert!(approx_eq(left.percent, 40.0));
    }

    #[test]
    fn test_rotational_invariance() {
        let options = MeasureOptions::default();
        let flat = migration(&baseline_points(), options);
        let flat_right = flat.right.unwrap().percent;
        let flat_left = flat.left.unwrap().percent;

        for degrees in [30.0, -45.0, 90.0, 137.0] {
            let mut points = baseline_points();
            for p in points.iter_mut() {
                *p = rotate(*p, degrees, 100.0, 100.0);
            }
            let tilted = migration(&points, options);
            let right = tilted.right.expect("rotated right side should be valid");
            let left = tilted.left.expect("rotated left side should be valid");
            assert!(
                approx_eq(right.percent, flat_right),
                "right differs at {} degrees: {} vs {}",
                degrees,
                right.percent,
                flat_right
            );
            assert!(approx_eq(left.percent, flat_left));
        }
    }

    #[test]
    fn test_tilted_axis_reproduces_40_percent() {
        let mut points = baseline_points();
        for p in points.iter_mut() {
            *p = rotate(*p, 30.0, 100.0, 100.0);
        }
        let result = migration(&points, MeasureOptions::default());
        assert!(approx_eq(result.right.unwrap().percent, 40.0));
    }

    #[test]
    fn test_translation_invariance() {
        let options = MeasureOptions::default();
        let base = migration(&baseline_points(), options);
        let mut points = baseline_points();
        for p in points.iter_mut() {
            p.x += 313.0;
            p.y -= 77.5;
        }
        let shifted = migration(&points, options);
        assert!(approx_eq(
            shifted.right.unwrap().percent,
            base.right.unwrap().percent
        ));
        assert!(approx_eq(
            shifted.left.unwrap().percent,
            base.left.unwrap().percent
        ));
    }

    #[test]
    fn test_idempotence() {
        let points = baseline_points();
        let a = migration(&points, MeasureOptions::default());
        let b = migration(&points, MeasureOptions::default());
        assert_eq!(a, b);
    }

    #[test]
    fn test_degenerate_axis() {
        let mut points = baseline_points();
        points[1] = points[0];
        let result = migration(&points, MeasureOptions::default());
        assert_eq!(result.right, Err(MeasureError::DegenerateAxis));
        assert_eq!(result.left, Err(MeasureError::DegenerateAxis));
    }

    #[test]
    fn test_degenerate_head_width_is_per_side() {
        let mut points = baseline_points();
        // Collapse the left head edges; the right side must stay valid.
        points[Landmark::LeftHeadMedial.index()] = points[Landmark::LeftHeadLateral.index()];
        let result = migration(&points, MeasureOptions::default());
        assert!(result.right.is_ok());
        assert_eq!(
            result.left,
            Err(MeasureError::DegenerateHeadWidth { side: Side::Left })
        );
    }

    #[test]
    fn test_lateral_medial_exact_tie() {
        // Both right edges are exactly 30 from the center (100): the
        // lateral-role slot (index 4) must win the tie.
        let mut points = baseline_points();
        points[Landmark::RightAcetabular.index()] = Point::new(110.0, 100.0);
        points[Landmark::RightHeadLateral.index()] = Point::new(130.0, 100.0);
        points[Landmark::RightHeadMedial.index()] = Point::new(70.0, 100.0);
        let result = migration(&points, MeasureOptions::default());
        // lateral=130, medial=70: |130-110| / 60 * 100
        assert!(approx_eq(result.right.unwrap().percent, 33.33));

        // Swapping the two marks flips which value is lateral.
        points[Landmark::RightHeadLateral.index()] = Point::new(70.0, 100.0);
        points[Landmark::RightHeadMedial.index()] = Point::new(130.0, 100.0);
        let swapped = migration(&points, MeasureOptions::default());
        // lateral=70, medial=130: |70-110| / 60 * 100
        assert!(approx_eq(swapped.right.unwrap().percent, 66.67));
    }

    #[test]
    fn test_swapped_edge_marks_are_reclassified() {
        // Marking lateral and medial in the wrong order must not change the
        // result: classification is by distance from the axis midpoint.
        let mut points = baseline_points();
        points.swap(
            Landmark::RightHeadLateral.index(),
            Landmark::RightHeadMedial.index(),
        );
        let result = migration(&points, MeasureOptions::default());
        assert!(approx_eq(result.right.unwrap().percent, 40.0));
    }

    #[test]
    fn test_clamping_and_raw_value() {
        // Perkins far medial of the head: |30-130| / 50 * 100 = 200.
        let mut points = baseline_points();
        points[Landmark::RightAcetabular.index()] = Point::new(130.0, 100.0);

        let clamped = migration(&points, MeasureOptions { clamp: true });
        let right = clamped.right.unwrap();
        assert!(approx_eq(right.percent, 100.0));
        assert!(approx_eq(right.raw, 200.0));

        let unclamped = migration(&points, MeasureOptions { clamp: false });
        assert!(approx_eq(unclamped.right.unwrap().percent, 200.0));
    }

    #[test]
    fn test_valid_results_stay_in_range() {
        let result = migration(&baseline_points(), MeasureOptions::default());
        for side in Side::all() {
            let m = result.side(*side).unwrap();
            assert!(m.percent >= 0.0 && m.percent <= 100.0);
        }
    }

    #[test]
    fn test_axis_perpendicular_is_orthogonal() {
        let axis =
            Axis::from_points(&Point::new(0.0, 0.0), &Point::new(3.0, 4.0)).expect("valid axis");
        let (dx, dy) = axis.direction();
        let (px, py) = axis.perpendicular();
        assert!(approx_eq(dx * px + dy * py, 0.0));
        assert!(approx_eq(px * px + py * py, 1.0));
    }

    #[test]
    fn test_display_formatting() {
        let result = migration(&baseline_points(), MeasureOptions::default());
        assert_eq!(result.to_string(), "Right: 40.0% | Left: 40.0%");

        let mut points = baseline_points();
        points[1] = points[0];
        let invalid = migration(&points, MeasureOptions::default());
        assert_eq!(invalid.to_string(), "Right: invalid | Left: invalid");
    }
}
