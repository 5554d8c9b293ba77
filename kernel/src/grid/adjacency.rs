//! The fixed six-direction neighbor table.
//!
//! Expansion order is a domain constant: Up, Right, Bottom, Bottom-Right,
//! Left, Top-Left. Top-Right and Bottom-Left are not moves. Every traversal
//! result is reproducible only because this order never depends on the
//! iteration order of any container.
//!
//! The table is closed under negation (Up/Bottom, Right/Left,
//! Bottom-Right/Top-Left), so adjacency is symmetric and a backward search
//! from the target can use the same table as the forward search.

use crate::grid::cell::Cell;
use crate::grid::model::Grid;

/// One of the six legal moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    Up,
    Right,
    Bottom,
    BottomRight,
    Left,
    TopLeft,
}

impl Direction {
    /// All moves in expansion order.
    pub const CLOCKWISE: [Direction; 6] = [
        Direction::Up,
        Direction::Right,
        Direction::Bottom,
        Direction::BottomRight,
        Direction::Left,
        Direction::TopLeft,
    ];

    /// `(d_row, d_col)` for this move.
    #[must_use]
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Self::Up => (-1, 0),
            Self::Right => (0, 1),
            Self::Bottom => (1, 0),
            Self::BottomRight => (1, 1),
            Self::Left => (0, -1),
            Self::TopLeft => (-1, -1),
        }
    }

    #[must_use]
    pub const fn is_diagonal(self) -> bool {
        matches!(self, Self::BottomRight | Self::TopLeft)
    }

    /// The move that undoes this one.
    #[cfg(test)]
    const fn reverse(self) -> Self {
        match self {
            Self::Up => Self::Bottom,
            Self::Right => Self::Left,
            Self::Bottom => Self::Up,
            Self::BottomRight => Self::TopLeft,
            Self::Left => Self::Right,
            Self::TopLeft => Self::BottomRight,
        }
    }
}

/// Lazy iterator over the passable neighbors of a cell, in table order.
///
/// Yields at most six cells. Filtering drops out-of-bounds and blocked cells
/// but never reorders the survivors.
#[derive(Debug, Clone)]
pub struct Neighbors<'g> {
    grid: &'g Grid,
    origin: Cell,
    next: usize,
}

impl Iterator for Neighbors<'_> {
    type Item = Cell;

    fn next(&mut self) -> Option<Cell> {
        while let Some(dir) = Direction::CLOCKWISE.get(self.next) {
            self.next += 1;
            let (d_row, d_col) = dir.offset();
            if let Some(cell) = self.origin.offset(d_row, d_col) {
                if self.grid.is_passable(cell) {
                    return Some(cell);
                }
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(Direction::CLOCKWISE.len().saturating_sub(self.next)))
    }
}

/// Passable neighbors of `cell` on `grid`, in expansion order.
#[must_use]
pub fn neighbors(grid: &Grid, cell: Cell) -> Neighbors<'_> {
    Neighbors {
        grid,
        origin: cell,
        next: 0,
    }
}

/// The move that takes `from` to `to`, if it is one of the six.
#[must_use]
pub fn direction_between(from: Cell, to: Cell) -> Option<Direction> {
    let d_row = i64::from(to.row) - i64::from(from.row);
    let d_col = i64::from(to.col) - i64::from(from.col);
    Direction::CLOCKWISE.into_iter().find(|dir| {
        let (r, c) = dir.offset();
        i64::from(r) == d_row && i64::from(c) == d_col
    })
}

/// Whether `to` is one move away from `from` (ignores obstacles and bounds).
#[must_use]
pub fn is_adjacent(from: Cell, to: Cell) -> bool {
    direction_between(from, to).is_some()
}
