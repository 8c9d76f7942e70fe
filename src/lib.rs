//! hipmark - hip migration measurement engine
//!
//! Geometry core for marking the eight pelvic landmarks on an X-ray and
//! computing the Reimers migration percentage for each hip. The embedding
//! application owns image decoding, canvas scaling and input gestures; this
//! crate owns the ordered landmark store, the projection-based percentage
//! calculation and the overlay construction lines, so any number of front
//! ends (mouse, touch, stylus) can share one measurement behavior.

pub mod config;
pub mod constants;
pub mod history;
pub mod measure;
pub mod model;
pub mod overlay;
pub mod session;
pub mod store;

pub use config::{ConfigError, LogLevel, MeasureConfig};
pub use measure::{
    migration, Axis, MeasureError, MeasureOptions, MigrationResult, SideMigration,
};
pub use model::{Landmark, Point, Side};
pub use overlay::{Overlay, Segment};
pub use session::MeasurementSession;
pub use store::LandmarkStore;
