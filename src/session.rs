//! A single measurement session.
//!
//! One session per loaded image: it owns the landmark store, the edit
//! history, the configuration and the cached result, and is discarded when
//! the image changes. All state transitions go through the session so the
//! result can never go stale.

use crate::config::MeasureConfig;
use crate::constants::LANDMARK_COUNT;
use crate::history::{self, Command, UndoStack};
use crate::measure::{self, MeasureOptions, MigrationResult};
use crate::model::{Landmark, Point};
use crate::overlay::{self, Overlay};
use crate::store::LandmarkStore;

/// Measurement state for one image.
#[derive(Debug, Clone, Default)]
pub struct MeasurementSession {
    store: LandmarkStore,
    history: UndoStack,
    config: MeasureConfig,
    result: Option<MigrationResult>,
}

impl MeasurementSession {
    /// Create a session with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session with the given configuration.
    pub fn with_config(config: MeasureConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// The current landmark store, for overlay rendering and inspection.
    pub fn store(&self) -> &LandmarkStore {
        &self.store
    }

    /// The active configuration.
    pub fn config(&self) -> &MeasureConfig {
        &self.config
    }

    /// Place the next landmark.
    ///
    /// Returns the role that was placed, or None if the measurement is
    /// already complete (the point is rejected, no state change).
    pub fn place(&mut self, point: Point) -> Option<Landmark> {
        let role = self.store.add(point)?;
        self.history.push(Command::Place { point });
        self.refresh();
        Some(role)
    }

    /// Move an existing landmark (drag adjustment).
    /// Returns false if the index is out of range.
    pub fn move_point(&mut self, index: usize, to: Point) -> bool {
        let Some(from) = self.store.points().get(index).copied() else {
            return false;
        };
        self.store.move_at(index, to);
        self.history.push(Command::Move { index, from, to });
        self.refresh();
        true
    }

    /// Undo the most recent edit. Returns false if there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        let undone = history::undo_command(&mut self.history, &mut self.store);
        if undone {
            self.refresh();
        }
        undone
    }

    /// Redo a previously undone edit. Returns false if there was nothing to redo.
    pub fn redo(&mut self) -> bool {
        let redone = history::redo_command(&mut self.history, &mut self.store);
        if redone {
            self.refresh();
        }
        redone
    }

    /// Clear all landmarks. Recorded in history, so it can be undone.
    pub fn reset(&mut self) {
        if self.store.is_empty() {
            return;
        }
        self.history.push(Command::Clear {
            points: self.store.points().to_vec(),
        });
        self.store.reset();
        self.refresh();
        log::debug!("Measurement reset");
    }

    /// Check if undo is available.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Check if redo is available.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Find the landmark nearest to `at` within `tolerance` (image units).
    pub fn hit_test(&self, at: &Point, tolerance: f32) -> Option<usize> {
        self.store.hit_test(at, tolerance)
    }

    /// Hit-test with the configured screen-pixel radius converted to image
    /// units for the current display scale, so picking is zoom-independent.
    pub fn hit_test_scaled(&self, at: &Point, display_scale: f32) -> Option<usize> {
        if display_scale <= 0.0 {
            return None;
        }
        self.store.hit_test(at, self.config.hit_radius / display_scale)
    }

    /// Next-step prompt for the operator.
    pub fn instruction(&self) -> String {
        match self.store.next_landmark() {
            Some(landmark) => format!("Mark: {}", landmark.label()),
            None => "Measurement complete".to_string(),
        }
    }

    /// The computed percentages, once all eight landmarks are marked.
    /// None while the measurement is incomplete.
    pub fn result(&self) -> Option<&MigrationResult> {
        self.result.as_ref()
    }

    /// Construction lines for the current landmarks.
    pub fn overlay(&self) -> Overlay {
        overlay::construction_lines(&self.store, self.config.overlay_extent)
    }

    fn options(&self) -> MeasureOptions {
        MeasureOptions {
            clamp: self.config.clamp,
        }
    }

    // Recompute eagerly on completion, invalidate below eight points. The
    // slice-to-array conversion fails exactly when the store is incomplete.
    fn refresh(&mut self) {
        self.result = match <&[Point; LANDMARK_COUNT]>::try_from(self.store.points()) {
            Ok(points) => Some(measure::migration(points, self.options())),
            Err(_) => None,
        };
    }
}
