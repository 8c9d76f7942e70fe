//! Global constants for the measurement engine.

/// Number of landmark points in a complete measurement.
pub const LANDMARK_COUNT: usize = 8;

/// Hit radius for landmark selection (in screen pixels at scale 1.0).
pub const POINT_HIT_RADIUS: f32 = 10.0;

/// Minimum separation between the two triradiate points for a valid axis.
pub const AXIS_EPSILON: f32 = 1e-3;

/// Minimum projected femoral head width for a valid percentage.
pub const HEAD_WIDTH_EPSILON: f32 = 1e-3;

/// Half-length of overlay construction lines, long enough to cross any image.
pub const OVERLAY_EXTENT: f32 = 5000.0;
