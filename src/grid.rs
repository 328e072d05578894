//! The grid and the generation-advance rule.
//!
//! ## Grid
//!
//! A fixed height×width rectangle of [`Cell`]s, one per integer position in
//! `[0, width) × [0, height)`. Grids are immutable: seeding living cells and
//! advancing a generation both return a *new* `Grid`, leaving the receiver
//! untouched. Backed by `im::Vector` so the rebuild shares structure with
//! the original instead of deep-copying it.
//!
//! ## Generation rule
//!
//! A cell is alive in the next generation iff it is dead with exactly 3
//! living neighbours, or alive with 2 or 3. Everything else dies. Neighbour
//! counts are taken against the pre-transition grid only (snapshot
//! semantics), never against cells already updated within the same step.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::cell::Cell;
use crate::position::Position;

/// An immutable rectangle of cells at one point in simulated time.
///
/// `Clone` is O(1) via persistent data structures, so holding on to earlier
/// generations is cheap.
///
/// ```
/// use life_grid::{Cell, Grid, Position};
///
/// // A blinker: three cells in a row oscillate with period 2.
/// let grid = Grid::new(3, 3).with_living_cells([(0, 1), (1, 1), (2, 1)]);
/// let next = grid.next();
///
/// assert_eq!(next.cell_at((1, 0)), Some(Cell::alive(Position::new(1, 0))));
/// assert_eq!(next.cell_at((0, 1)), Some(Cell::dead(Position::new(0, 1))));
/// assert_eq!(next.next(), grid);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    height: u32,
    width: u32,
    cells: Vector<Cell>,
}

impl Grid {
    /// Create a grid with every position in the rectangle dead.
    ///
    /// Zero-sized grids are valid and hold no cells.
    #[must_use]
    pub fn new(height: u32, width: u32) -> Self {
        let cells = (0..width as i32)
            .flat_map(|x| (0..height as i32).map(move |y| Cell::dead(Position::new(x, y))));
        Self::from_cells(height, width, cells)
    }

    /// Sole constructor from raw cells; establishes the canonical ordering.
    fn from_cells(height: u32, width: u32, cells: impl IntoIterator<Item = Cell>) -> Self {
        let mut ordered: Vec<Cell> = cells.into_iter().collect();
        ordered.sort_by_key(|cell| cell.position());
        Self {
            height,
            width,
            cells: ordered.into_iter().collect(),
        }
    }

    /// Grid height fixed at construction.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Grid width fixed at construction.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Iterate over all cells, sorted ascending by x then y.
    ///
    /// The ordering is part of the observable contract; two grids are
    /// equivalent exactly when their ordered cells compare equal. The
    /// iterator is a pure read and can be restarted by calling again.
    pub fn ordered_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    /// Iterate over just the living cells, in the same order.
    pub fn live_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.ordered_cells().filter(|cell| cell.is_alive())
    }

    /// Number of living cells.
    #[must_use]
    pub fn population(&self) -> usize {
        self.live_cells().count()
    }

    /// Look up the cell at `position`, if the grid holds one there.
    #[must_use]
    pub fn cell_at(&self, position: impl Into<Position>) -> Option<Cell> {
        let position = position.into();
        self.cells.iter().find(|cell| cell.position() == position).copied()
    }

    /// A new grid identical to this one except the cell at `position` is alive.
    ///
    /// Positions outside the nominal rectangle are accepted: the result then
    /// simply carries an extra cell beyond the originally covered area, and
    /// that cell participates in neighbour counting like any other. Callers
    /// wanting a bounded simulation should stay inside
    /// `[0, width) × [0, height)`.
    #[must_use]
    pub fn with_living_cell(&self, position: impl Into<Position>) -> Self {
        self.with_living_cells([position.into()])
    }

    /// Batch form of [`with_living_cell`](Self::with_living_cell).
    ///
    /// Positions are deduplicated before insertion, so repeats collapse to a
    /// single living cell. Equivalent to applying `with_living_cell` once
    /// per distinct position.
    #[must_use]
    pub fn with_living_cells<I>(&self, positions: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Position>,
    {
        let positions: FxHashSet<Position> = positions.into_iter().map(Into::into).collect();
        let kept = self
            .cells
            .iter()
            .copied()
            .filter(|cell| !positions.contains(&cell.position()));
        let born = positions.iter().copied().map(Cell::alive);
        Self::from_cells(self.height, self.width, kept.chain(born))
    }

    /// Advance one generation.
    ///
    /// Every cell's new status is computed from this grid's cells; the
    /// returned grid never influences its own construction. One step scans
    /// all cells per cell, O(cells²), which is fine at the sizes this crate
    /// targets.
    #[must_use]
    pub fn next(&self) -> Self {
        let cells = self.cells.iter().map(|cell| self.update_state(*cell));
        Self::from_cells(self.height, self.width, cells)
    }

    /// Count living cells adjacent to `position`, over ALL cells in the
    /// grid, including any injected outside the rectangle.
    fn living_neighbours(&self, position: Position) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.is_alive() && cell.is_neighbour(position))
            .count()
    }

    /// Birth on 3, survival on 2 or 3, death otherwise.
    fn update_state(&self, cell: Cell) -> Cell {
        let neighbours = self.living_neighbours(cell.position());
        if matches!((cell.is_alive(), neighbours), (false, 3) | (true, 2 | 3)) {
            Cell::alive(cell.position())
        } else {
            Cell::dead(cell.position())
        }
    }
}
