//! Ordered storage for the eight landmark points.

use serde::{Deserialize, Serialize};

use crate::constants::LANDMARK_COUNT;
use crate::model::{Landmark, Point};

/// Ordered landmark point storage.
///
/// Points are appended in marking order only, so the index of a point always
/// matches the [`Landmark`] role at that index. The store holds at most
/// [`LANDMARK_COUNT`] points; a measurement is complete at exactly that many.
///
/// Invalid operations are rejected rather than panicking: the embedding UI is
/// expected to check `is_complete()`/`len()` before offering further actions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LandmarkStore {
    points: Vec<Point>,
}

impl LandmarkStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of placed points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if no points are placed.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Check if all eight landmarks are marked.
    pub fn is_complete(&self) -> bool {
        self.points.len() == LANDMARK_COUNT
    }

    /// The placed points, in marking order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The point for a landmark, if already marked.
    pub fn get(&self, landmark: Landmark) -> Option<Point> {
        self.points.get(landmark.index()).copied()
    }

    /// The next landmark to be marked, or None when complete.
    pub fn next_landmark(&self) -> Option<Landmark> {
        Landmark::from_index(self.points.len())
    }

    /// Append the next landmark point.
    ///
    /// Returns the role that was just placed, or None if all eight landmarks
    /// are already marked (the point is rejected, no state change).
    pub fn add(&mut self, point: Point) -> Option<Landmark> {
        let Some(role) = self.next_landmark() else {
            log::debug!("Ignoring extra point, all {} landmarks marked", LANDMARK_COUNT);
            return None;
        };
        self.points.push(point);
        log::debug!("Placed {:?} at ({:.1}, {:.1})", role, point.x, point.y);
        Some(role)
    }

    /// Replace the coordinates of the point at `index` without changing order
    /// or count. Returns false if the index is out of range.
    pub fn move_at(&mut self, index: usize, point: Point) -> bool {
        match self.points.get_mut(index) {
            Some(p) => {
                *p = point;
                true
            }
            None => false,
        }
    }

    /// Replace the coordinates of the most recently placed point.
    pub fn move_last(&mut self, point: Point) -> bool {
        match self.points.last_mut() {
            Some(p) => {
                *p = point;
                true
            }
            None => false,
        }
    }

    /// Remove the most recently placed point. No-op on an empty store.
    pub fn undo(&mut self) -> Option<Point> {
        let point = self.points.pop()?;
        log::debug!("Removed last point, {} remain", self.points.len());
        Some(point)
    }

    /// Clear all points.
    pub fn reset(&mut self) {
        self.points.clear();
    }

    /// Replace the stored points wholesale. Used by undo to reverse a clear.
    pub(crate) fn restore(&mut self, points: &[Point]) {
        self.points.clear();
        let n = points.len().min(LANDMARK_COUNT);
        self.points.extend_from_slice(&points[..n]);
    }

    /// Find the placed point nearest to `query` within `tolerance`.
    ///
    /// Tolerance is in image-space units: for zoom-independent hit-testing
    /// the caller converts a screen radius with `radius / display_scale`.
    /// Returns the index of the nearest point, or None if none is close
    /// enough. Used by the UI to choose between "add new point" and "drag
    /// existing point".
    pub fn hit_test(&self, query: &Point, tolerance: f32) -> Option<usize> {
        let mut best: Option<(usize, f32)> = None;
        for (i, p) in self.points.iter().enumerate() {
            let d = p.distance_to(query);
            if d <= tolerance && best.is_none_or(|(_, bd)| d < bd) {
                best = Some((i, d));
            }
        }
        best.map(|(i, _)| i)
    }
}
