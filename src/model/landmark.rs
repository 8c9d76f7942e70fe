//! Landmark roles for the eight measurement points.
//!
//! Marking order is fixed: the index of a stored point always equals the
//! discriminant of its role, so the store never has to carry role tags.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The eight anatomical landmarks, in marking order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Landmark {
    /// Right triradiate cartilage (index 0, axis endpoint).
    RightTriradiate,
    /// Left triradiate cartilage (index 1, axis endpoint).
    LeftTriradiate,
    /// Right lateral acetabular edge (index 2, Perkins reference).
    RightAcetabular,
    /// Left lateral acetabular edge (index 3, Perkins reference).
    LeftAcetabular,
    /// Lateral edge of the right femoral head (index 4).
    RightHeadLateral,
    /// Medial edge of the right femoral head (index 5).
    RightHeadMedial,
    /// Lateral edge of the left femoral head (index 6).
    LeftHeadLateral,
    /// Medial edge of the left femoral head (index 7).
    LeftHeadMedial,
}

impl Landmark {
    /// All landmarks, in marking order.
    pub fn all() -> &'static [Landmark; 8] {
        &[
            Landmark::RightTriradiate,
            Landmark::LeftTriradiate,
            Landmark::RightAcetabular,
            Landmark::LeftAcetabular,
            Landmark::RightHeadLateral,
            Landmark::RightHeadMedial,
            Landmark::LeftHeadLateral,
            Landmark::LeftHeadMedial,
        ]
    }

    /// The four femoral head edge landmarks, in marking order.
    pub fn femoral_edges() -> &'static [Landmark; 4] {
        &[
            Landmark::RightHeadLateral,
            Landmark::RightHeadMedial,
            Landmark::LeftHeadLateral,
            Landmark::LeftHeadMedial,
        ]
    }

    /// Position of this landmark in the marking order.
    pub fn index(self) -> usize {
        self as usize
    }

    /// The landmark marked at the given position, if in range.
    pub fn from_index(index: usize) -> Option<Landmark> {
        Landmark::all().get(index).copied()
    }

    /// Instruction label shown to the operator.
    pub fn label(self) -> &'static str {
        match self {
            Landmark::RightTriradiate => "Right triradiate cartilage",
            Landmark::LeftTriradiate => "Left triradiate cartilage",
            Landmark::RightAcetabular => "Right lateral acetabular edge (Perkins)",
            Landmark::LeftAcetabular => "Left lateral acetabular edge (Perkins)",
            Landmark::RightHeadLateral => "Right femoral head, lateral edge",
            Landmark::RightHeadMedial => "Right femoral head, medial edge",
            Landmark::LeftHeadLateral => "Left femoral head, lateral edge",
            Landmark::LeftHeadMedial => "Left femoral head, medial edge",
        }
    }
}

/// One hip side of the measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Right,
    Left,
}

impl Side {
    /// Both sides, right first (matching marking order).
    pub fn all() -> &'static [Side; 2] {
        &[Side::Right, Side::Left]
    }

    /// Get the display name for this side.
    pub fn name(self) -> &'static str {
        match self {
            Side::Right => "right",
            Side::Left => "left",
        }
    }

    /// The acetabular (Perkins) landmark for this side.
    pub fn perkins(self) -> Landmark {
        match self {
            Side::Right => Landmark::RightAcetabular,
            Side::Left => Landmark::LeftAcetabular,
        }
    }

    /// The femoral head edge marked as lateral for this side.
    pub fn lateral_edge(self) -> Landmark {
        match self {
            Side::Right => Landmark::RightHeadLateral,
            Side::Left => Landmark::LeftHeadLateral,
        }
    }

    /// The femoral head edge marked as medial for this side.
    pub fn medial_edge(self) -> Landmark {
        match self {
            Side::Right => Landmark::RightHeadMedial,
            Side::Left => Landmark::LeftHeadMedial,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
