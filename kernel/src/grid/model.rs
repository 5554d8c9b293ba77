//! The immutable obstacle map.

use std::collections::BTreeSet;

use crate::grid::adjacency::{neighbors, Neighbors};
use crate::grid::cell::Cell;

/// Error parsing an ASCII grid layout.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridParseError {
    /// The layout had no rows.
    #[error("grid layout is empty")]
    Empty,
    /// A row's width differs from the first row's width.
    #[error("row {row} has width {actual}, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },
    /// A character other than `.` or `#` was found.
    #[error("unexpected character {found:?} at ({row}, {col})")]
    UnexpectedChar { row: usize, col: usize, found: char },
    /// The layout does not fit in `i32` coordinates.
    #[error("grid layout of {rows}x{cols} is too large")]
    TooLarge { rows: usize, cols: usize },
}

/// A rectangular grid with a fixed set of obstacle cells.
///
/// All queries are total over the coordinate domain: any `Cell`, including
/// negative or far out-of-range coordinates, gets a definite answer.
/// There is no mutation after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: u32,
    cols: u32,
    obstacles: BTreeSet<Cell>,
}

impl Grid {
    /// Build a grid. Obstacles outside the bounds are dropped so that
    /// [`Grid::obstacles`] only ever reports cells that exist.
    #[must_use]
    pub fn new(rows: u32, cols: u32, obstacles: impl IntoIterator<Item = Cell>) -> Self {
        let mut grid = Self {
            rows,
            cols,
            obstacles: BTreeSet::new(),
        };
        let obstacles = obstacles
            .into_iter()
            .filter(|c| grid.in_bounds(*c))
            .collect();
        grid.obstacles = obstacles;
        grid
    }

    /// A grid with no obstacles.
    #[must_use]
    pub fn open(rows: u32, cols: u32) -> Self {
        Self::new(rows, cols, std::iter::empty())
    }

    /// Parse a layout of `.` (open) and `#` (obstacle) rows.
    ///
    /// Leading and trailing whitespace on each row is ignored, which lets test
    /// fixtures be written as indented string literals.
    ///
    /// # Errors
    ///
    /// Returns [`GridParseError`] for empty, ragged, oversized, or
    /// unrecognized input.
    pub fn from_ascii(rows: &[&str]) -> Result<Self, GridParseError> {
        let lines: Vec<&str> = rows.iter().map(|r| r.trim()).collect();
        let Some(first) = lines.first() else {
            return Err(GridParseError::Empty);
        };
        let width = first.chars().count();
        if width == 0 {
            return Err(GridParseError::Empty);
        }
        let (Ok(row_count), Ok(col_count)) = (u32::try_from(lines.len()), u32::try_from(width))
        else {
            return Err(GridParseError::TooLarge {
                rows: lines.len(),
                cols: width,
            });
        };
        if i32::try_from(row_count).is_err() || i32::try_from(col_count).is_err() {
            return Err(GridParseError::TooLarge {
                rows: lines.len(),
                cols: width,
            });
        }

        let mut obstacles = BTreeSet::new();
        for (r, line) in lines.iter().enumerate() {
            let actual = line.chars().count();
            if actual != width {
                return Err(GridParseError::RaggedRow {
                    row: r,
                    expected: width,
                    actual,
                });
            }
            for (c, ch) in line.chars().enumerate() {
                match ch {
                    '.' => {}
                    '#' => {
                        // Bounded by the i32 checks above.
                        #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
                        obstacles.insert(Cell::new(r as i32, c as i32));
                    }
                    found => {
                        return Err(GridParseError::UnexpectedChar {
                            row: r,
                            col: c,
                            found,
                        })
                    }
                }
            }
        }

        Ok(Self {
            rows: row_count,
            cols: col_count,
            obstacles,
        })
    }

    #[must_use]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Obstacle cells in row-major order.
    #[must_use]
    pub fn obstacles(&self) -> &BTreeSet<Cell> {
        &self.obstacles
    }

    /// Whether `cell` lies inside `[0, rows) x [0, cols)`.
    #[must_use]
    pub fn in_bounds(&self, cell: Cell) -> bool {
        let (Ok(row), Ok(col)) = (u32::try_from(cell.row), u32::try_from(cell.col)) else {
            return false;
        };
        row < self.rows && col < self.cols
    }

    /// Whether `cell` is an obstacle.
    #[must_use]
    pub fn is_blocked(&self, cell: Cell) -> bool {
        self.obstacles.contains(&cell)
    }

    /// `in_bounds(cell) && !is_blocked(cell)`.
    #[must_use]
    pub fn is_passable(&self, cell: Cell) -> bool {
        self.in_bounds(cell) && !self.is_blocked(cell)
    }

    /// Passable neighbors of `cell` in the fixed expansion order.
    #[must_use]
    pub fn neighbors(&self, cell: Cell) -> Neighbors<'_> {
        neighbors(self, cell)
    }

    /// Every in-bounds cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let rows = i32::try_from(self.rows).unwrap_or(i32::MAX);
        let cols = i32::try_from(self.cols).unwrap_or(i32::MAX);
        (0..rows).flat_map(move |r| (0..cols).map(move |c| Cell::new(r, c)))
    }

    /// Number of passable cells.
    #[must_use]
    pub fn passable_count(&self) -> usize {
        let total = u64::from(self.rows) * u64::from(self.cols);
        usize::try_from(total).unwrap_or(usize::MAX) - self.obstacles.len()
    }

    /// Render as `.`/`#` rows (the inverse of [`Grid::from_ascii`]).
    #[must_use]
    pub fn to_ascii(&self) -> Vec<String> {
        let rows = i32::try_from(self.rows).unwrap_or(i32::MAX);
        let cols = i32::try_from(self.cols).unwrap_or(i32::MAX);
        (0..rows)
            .map(|r| {
                (0..cols)
                    .map(|c| {
                        if self.is_blocked(Cell::new(r, c)) {
                            '#'
                        } else {
                            '.'
                        }
                    })
                    .collect()
            })
            .collect()
    }

    /// JSON form used for layout fingerprints and run reports.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "cols": self.cols,
            "obstacles": self.obstacles.iter().map(|c| c.to_json_value()).collect::<Vec<_>>(),
            "rows": self.rows,
        })
    }
}
