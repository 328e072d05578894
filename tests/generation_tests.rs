//! Generation-advance integration tests.
//!
//! The rules under test:
//! 1. Any live cell with fewer than two live neighbours dies (underpopulation).
//! 2. Any live cell with more than three live neighbours dies (overcrowding).
//! 3. Any live cell with two or three live neighbours lives on.
//! 4. Any dead cell with exactly three live neighbours becomes a live cell.

use life_grid::{Cell, Grid, Position};

// =============================================================================
// Birth
// =============================================================================

/// A dead cell with exactly three living neighbours becomes alive.
#[test]
fn test_cell_becomes_alive_given_three_living_neighbours() {
    let grid = Grid::new(3, 3)
        .with_living_cell((0, 0))
        .with_living_cell((0, 2))
        .with_living_cell((2, 2))
        .next();

    assert_eq!(grid.cell_at((1, 1)), Some(Cell::alive(Position::new(1, 1))));
}

// =============================================================================
// Survival
// =============================================================================

/// A living cell with exactly two living neighbours stays alive.
#[test]
fn test_cell_remains_alive_given_two_living_neighbours() {
    let grid = Grid::new(3, 3)
        .with_living_cell((1, 1))
        .with_living_cell((0, 0))
        .with_living_cell((2, 2))
        .next();

    assert_eq!(grid.cell_at((1, 1)), Some(Cell::alive(Position::new(1, 1))));
}

/// A living cell with exactly three living neighbours stays alive.
#[test]
fn test_cell_remains_alive_given_three_living_neighbours() {
    let grid = Grid::new(3, 3)
        .with_living_cell((1, 1))
        .with_living_cell((0, 0))
        .with_living_cell((0, 2))
        .with_living_cell((2, 2))
        .next();

    assert_eq!(grid.cell_at((1, 1)), Some(Cell::alive(Position::new(1, 1))));
}

// =============================================================================
// Death
// =============================================================================

/// Living cells with no living neighbour at all die.
#[test]
fn test_cell_dies_given_no_living_neighbour() {
    // (0, 2) and (1, 0) are mutually non-adjacent in a 3x2 grid.
    let grid = Grid::new(3, 2)
        .with_living_cell((0, 2))
        .with_living_cell((1, 0))
        .next();

    assert_eq!(grid.cell_at((0, 2)), Some(Cell::dead(Position::new(0, 2))));
    assert_eq!(grid.cell_at((1, 0)), Some(Cell::dead(Position::new(1, 0))));
}

/// Two adjacent living cells each have one neighbour; both die.
#[test]
fn test_cell_dies_given_one_living_neighbour() {
    let grid = Grid::new(3, 3)
        .with_living_cell((0, 2))
        .with_living_cell((1, 2))
        .next();

    assert_eq!(grid.cell_at((0, 2)), Some(Cell::dead(Position::new(0, 2))));
    assert_eq!(grid.cell_at((1, 2)), Some(Cell::dead(Position::new(1, 2))));
}

/// A living cell dies with 4 neighbours, and stays dead as the count grows
/// through every value up to 8.
#[test]
fn test_cell_dies_given_more_than_three_living_neighbours() {
    let surrounding = [
        (0, 0),
        (0, 2),
        (2, 0),
        (2, 2),
        (0, 1),
        (1, 2),
        (2, 1),
        (1, 0),
    ];

    for count in 4..=8 {
        let grid = Grid::new(3, 3)
            .with_living_cell((1, 1))
            .with_living_cells(surrounding.iter().copied().take(count))
            .next();

        assert_eq!(
            grid.cell_at((1, 1)),
            Some(Cell::dead(Position::new(1, 1))),
            "centre should die with {count} living neighbours"
        );
    }
}

// =============================================================================
// Whole-grid behavior
// =============================================================================

/// An all-dead grid stays all-dead.
#[test]
fn test_returns_empty_grid_given_no_living_cells() {
    let next: Vec<Cell> = Grid::new(2, 2).next().ordered_cells().collect();
    let fresh: Vec<Cell> = Grid::new(2, 2).ordered_cells().collect();

    assert_eq!(next, fresh);
}

/// A blinker oscillates with period 2.
#[test]
fn test_blinker_oscillates() {
    let horizontal = Grid::new(3, 3).with_living_cells([(0, 1), (1, 1), (2, 1)]);

    let vertical = horizontal.next();
    assert_eq!(
        vertical.live_cells().map(Cell::position).collect::<Vec<_>>(),
        vec![Position::new(1, 0), Position::new(1, 1), Position::new(1, 2)]
    );

    assert_eq!(vertical.next(), horizontal);
}

/// A block is a still life: it never changes.
#[test]
fn test_block_is_stable() {
    let block = Grid::new(4, 4).with_living_cells([(1, 1), (1, 2), (2, 1), (2, 2)]);

    assert_eq!(block.next(), block);
    assert_eq!(block.next().next(), block);
}

/// Grids built by different seeding sequences with the same final living set
/// are equivalent under ordered-cell comparison.
#[test]
fn test_seeding_order_is_irrelevant() {
    let forward = Grid::new(3, 3)
        .with_living_cell((0, 0))
        .with_living_cell((2, 2));
    let backward = Grid::new(3, 3)
        .with_living_cell((2, 2))
        .with_living_cell((0, 0));

    let forward_cells: Vec<Cell> = forward.ordered_cells().collect();
    let backward_cells: Vec<Cell> = backward.ordered_cells().collect();
    assert_eq!(forward_cells, backward_cells);
}
