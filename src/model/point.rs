//! Core geometry types.

use serde::{Deserialize, Serialize};

/// A 2D point in image coordinates.
///
/// Screen coordinates must be converted by the caller (divide by the current
/// display scale) before they reach the engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Calculate distance to another point.
    pub fn distance_to(&self, other: &Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_distance() {
        let p1 = Point::new(0.0, 0.0);
        let p2 = Point::new(3.0, 4.0);
        assert!((p1.distance_to(&p2) - 5.0).abs() < 0.001);
    }

    #[test]
    fn test_point_distance_symmetric() {
        let p1 = Point::new(12.5, -3.0);
        let p2 = Point::new(-7.0, 9.0);
        assert_eq!(p1.distance_to(&p2), p2.distance_to(&p1));
    }
}
