//! Grid positions and Moore adjacency.
//!
//! ## Position
//!
//! An integer (x, y) pair identifying one square of the grid.
//!
//! ## Ordering
//!
//! `Position` orders ascending by `x`, then by `y`. This is the canonical
//! enumeration order of a grid's cells, so it lives on the type rather than
//! being re-stated at every sort site.

use serde::{Deserialize, Serialize};

/// A grid coordinate.
///
/// Positions outside a grid's nominal rectangle are representable; see
/// [`Grid::with_living_cell`](crate::Grid::with_living_cell) for where that
/// matters.
///
/// ```
/// use life_grid::Position;
///
/// let origin = Position::new(0, 0);
/// assert!(origin.is_neighbour(Position::new(1, 1)));
/// assert!(!origin.is_neighbour(Position::new(2, 0)));
/// assert!(!origin.is_neighbour(origin)); // a position is not its own neighbour
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Create a position.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Check 8-connected (Moore) adjacency.
    ///
    /// True iff `other` is a different position within Chebyshev distance 1,
    /// i.e. one of the up to 8 squares surrounding `self`.
    #[must_use]
    pub fn is_neighbour(self, other: Position) -> bool {
        self != other && (self.x - other.x).abs() <= 1 && (self.y - other.y).abs() <= 1
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
