//! # life-grid
//!
//! Conway's Game of Life on a bounded, immutable 2D grid.
//!
//! ## Design Principles
//!
//! 1. **Values, Not Objects**: `Cell` and `Grid` are immutable value types.
//!    Seeding living cells and advancing a generation return new grids;
//!    nothing is mutated in place.
//!
//! 2. **Snapshot Semantics**: `Grid::next()` computes every cell from the
//!    pre-transition grid. An in-progress generation can never observe its
//!    own partial results.
//!
//! 3. **Persistent Data Structures**: Grids share structure via `im`, so
//!    cloning and keeping earlier generations is O(1).
//!
//! ## Rules
//!
//! The standard rule set: a dead cell with exactly 3 living 8-connected
//! neighbours is born; a living cell with 2 or 3 survives; every other cell
//! is dead in the next generation.
//!
//! ## Modules
//!
//! - `position`: grid coordinates and Moore adjacency
//! - `cell`: a position plus alive/dead status
//! - `grid`: the rectangle of cells and the generation step
//!
//! ## Example
//!
//! ```
//! use life_grid::Grid;
//!
//! // A glider in a 16x16 grid, run for four generations.
//! let mut grid = Grid::new(16, 16).with_living_cells([(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)]);
//! for _ in 0..4 {
//!     grid = grid.next();
//! }
//! assert_eq!(grid.population(), 5);
//! ```

pub mod cell;
pub mod grid;
pub mod position;

// Re-export the public surface
pub use crate::cell::Cell;
pub use crate::grid::Grid;
pub use crate::position::Position;
