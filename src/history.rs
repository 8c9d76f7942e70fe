//! Undo/redo for landmark edits.
//!
//! Command pattern: each edit is recorded as a [`Command`] that stores enough
//! information to reverse its effect on the [`LandmarkStore`].

use crate::model::Point;
use crate::store::LandmarkStore;

/// An edit that can be undone and redone.
#[derive(Debug, Clone)]
pub enum Command {
    /// A landmark was placed.
    Place {
        /// The point that was placed
        point: Point,
    },
    /// An existing landmark was moved.
    Move {
        /// Index of the moved landmark
        index: usize,
        /// Coordinates before the move
        from: Point,
        /// Coordinates after the move
        to: Point,
    },
    /// All landmarks were cleared.
    Clear {
        /// The points that were cleared (stored for undo)
        points: Vec<Point>,
    },
}

impl Command {
    /// Get a human-readable description of this command.
    pub fn description(&self) -> String {
        match self {
            Command::Place { .. } => "Place landmark".to_string(),
            Command::Move { .. } => "Move landmark".to_string(),
            Command::Clear { points } => format!("Clear {} landmarks", points.len()),
        }
    }
}

/// Configuration for the undo stack.
#[derive(Debug, Clone)]
pub struct UndoConfig {
    /// Maximum number of commands to keep in history.
    pub max_history: usize,
}

impl Default for UndoConfig {
    fn default() -> Self {
        Self { max_history: 100 }
    }
}

/// The undo/redo history stack.
///
/// When a new command is recorded it is pushed to the undo stack and the redo
/// stack is cleared. Undo moves a command to the redo stack; redo moves it
/// back.
#[derive(Debug, Clone, Default)]
pub struct UndoStack {
    undo_stack: Vec<Command>,
    redo_stack: Vec<Command>,
    config: UndoConfig,
}

impl UndoStack {
    /// Create a new empty undo stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom configuration.
    pub fn with_config(config: UndoConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// Push a command to the undo stack.
    /// This clears the redo stack (can't redo after a new action).
    pub fn push(&mut self, command: Command) {
        log::debug!("History: recorded '{}'", command.description());
        self.undo_stack.push(command);
        self.redo_stack.clear();

        while self.undo_stack.len() > self.config.max_history {
            self.undo_stack.remove(0);
        }
    }

    /// Check if undo is available.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if redo is available.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Pop a command from the undo stack, moving it to the redo stack.
    pub fn pop_undo(&mut self) -> Option<Command> {
        let cmd = self.undo_stack.pop()?;
        log::debug!("History: undo '{}'", cmd.description());
        self.redo_stack.push(cmd.clone());
        Some(cmd)
    }

    /// Pop a command from the redo stack, moving it back to the undo stack.
    pub fn pop_redo(&mut self) -> Option<Command> {
        let cmd = self.redo_stack.pop()?;
        log::debug!("History: redo '{}'", cmd.description());
        self.undo_stack.push(cmd.clone());
        Some(cmd)
    }

    /// Get the description of the command that would be undone.
    pub fn undo_description(&self) -> Option<String> {
        self.undo_stack.last().map(|c| c.description())
    }

    /// Get the description of the command that would be redone.
    pub fn redo_description(&self) -> Option<String> {
        self.redo_stack.last().map(|c| c.description())
    }

    /// Clear all history.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    /// Get the number of commands in undo history.
    pub fn undo_count(&self) -> usize {
        self.undo_stack.len()
    }

    /// Get the number of commands in redo history.
    pub fn redo_count(&self) -> usize {
        self.redo_stack.len()
    }
}

/// Reverse the most recent edit against the store.
/// Returns false if there was nothing to undo.
pub fn undo_command(stack: &mut UndoStack, store: &mut LandmarkStore) -> bool {
    let Some(cmd) = stack.pop_undo() else {
        return false;
    };
    apply_undo(&cmd, store);
    true
}

/// Re-apply a previously undone edit against the store.
/// Returns false if there was nothing to redo.
pub fn redo_command(stack: &mut UndoStack, store: &mut LandmarkStore) -> bool {
    let Some(cmd) = stack.pop_redo() else {
        return false;
    };
    apply_redo(&cmd, store);
    true
}

fn apply_undo(cmd: &Command, store: &mut LandmarkStore) {
    match cmd {
        Command::Place { .. } => {
            // Undo place = remove the last point
            store.undo();
        }
        Command::Move { index, from, .. } => {
            store.move_at(*index, *from);
        }
        Command::Clear { points } => {
            store.restore(points);
        }
    }
}

fn apply_redo(cmd: &Command, store: &mut LandmarkStore) {
    match cmd {
        Command::Place { point } => {
            store.add(*point);
        }
        Command::Move { index, to, .. } => {
            store.move_at(*index, *to);
        }
        Command::Clear { .. } => {
            store.reset();
        }
    }
}
