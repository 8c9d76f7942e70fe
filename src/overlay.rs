//! Construction-line geometry for the measurement overlay.
//!
//! Derived from the current landmarks on demand, never stored. The numeric
//! result does not depend on these lines; they exist for visual confirmation
//! and as drag affordances in touch front ends.

use crate::measure::Axis;
use crate::model::{Landmark, Point, Side};
use crate::store::LandmarkStore;

/// A finite line segment in image coordinates.
///
/// Construction lines are conceptually infinite; they are emitted as
/// segments long enough to cross any visible canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

/// The construction lines derivable from the current landmarks.
///
/// Lines appear progressively as their landmarks are marked. Without a valid
/// axis nothing can be drawn, so a degenerate axis yields an empty overlay.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overlay {
    /// Hilgenreiner line through the two triradiate points.
    pub hilgenreiner: Option<Segment>,
    /// Perkins verticals, perpendicular to the Hilgenreiner direction.
    pub perkins: Vec<(Side, Segment)>,
    /// Femoral head edge verticals, perpendicular to the Hilgenreiner direction.
    pub femoral: Vec<(Landmark, Segment)>,
}

/// Build the overlay for however many landmarks are placed.
///
/// `extent` is the half-length of each emitted segment, in image pixels.
pub fn construction_lines(store: &LandmarkStore, extent: f32) -> Overlay {
    let points = store.points();
    let (Some(p0), Some(p1)) = (points.first(), points.get(1)) else {
        return Overlay::default();
    };
    let Ok(axis) = Axis::from_points(p0, p1) else {
        return Overlay::default();
    };

    let mut overlay = Overlay {
        hilgenreiner: Some(line_through(p0, axis.direction(), extent)),
        ..Overlay::default()
    };

    let perp = axis.perpendicular();
    for side in Side::all() {
        if let Some(p) = points.get(side.perkins().index()) {
            overlay.perkins.push((*side, line_through(p, perp, extent)));
        }
    }
    for landmark in Landmark::femoral_edges() {
        if let Some(p) = points.get(landmark.index()) {
            overlay.femoral.push((*landmark, line_through(p, perp, extent)));
        }
    }
    overlay
}

fn line_through(p: &Point, (dx, dy): (f32, f32), extent: f32) -> Segment {
    Segment {
        start: Point::new(p.x - dx * extent, p.y - dy * extent),
        end: Point::new(p.x + dx * extent, p.y + dy * extent),
    }
}
