//! A single grid square and its alive/dead status.

use serde::{Deserialize, Serialize};

use crate::position::Position;

/// One cell of the grid: a position plus an alive/dead flag.
///
/// Cells are plain values with equality by field; a state transition
/// produces a new `Cell`, nothing mutates one in place.
///
/// ```
/// use life_grid::{Cell, Position};
///
/// let cell = Cell::alive(Position::new(1, 2));
/// assert!(cell.is_alive());
/// assert_eq!(cell, Cell::alive(Position::new(1, 2)));
/// assert_ne!(cell, Cell::dead(Position::new(1, 2)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    position: Position,
    alive: bool,
}

impl Cell {
    /// Create a living cell at `position`.
    #[must_use]
    pub const fn alive(position: Position) -> Self {
        Self { position, alive: true }
    }

    /// Create a dead cell at `position`.
    #[must_use]
    pub const fn dead(position: Position) -> Self {
        Self { position, alive: false }
    }

    /// The cell's position.
    #[must_use]
    pub const fn position(self) -> Position {
        self.position
    }

    /// Whether the cell is alive.
    #[must_use]
    pub const fn is_alive(self) -> bool {
        self.alive
    }

    /// Check whether `position` is one of this cell's 8 Moore neighbours.
    ///
    /// Adjacency is purely positional; the alive/dead status of either side
    /// plays no part.
    #[must_use]
    pub fn is_neighbour(self, position: Position) -> bool {
        self.position.is_neighbour(position)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let status = if self.alive { "live" } else { "dead" };
        write!(f, "{status} cell at {}", self.position)
    }
}
