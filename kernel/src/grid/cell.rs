//! Grid coordinates.

/// A grid coordinate `(row, col)`.
///
/// Coordinates are signed so that stepping off any edge of the grid yields a
/// representable (out-of-bounds) cell instead of an underflow. Ordering is
/// row-major: `row` first, then `col`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The cell displaced by `(d_row, d_col)`.
    ///
    /// Returns `None` only when the displacement overflows `i32`; such a cell
    /// could never be inside a grid anyway.
    #[must_use]
    pub fn offset(self, d_row: i32, d_col: i32) -> Option<Self> {
        Some(Self {
            row: self.row.checked_add(d_row)?,
            col: self.col.checked_add(d_col)?,
        })
    }

    /// JSON form used in canonical traces: `[row, col]`.
    #[must_use]
    pub fn to_json_value(self) -> serde_json::Value {
        serde_json::json!([self.row, self.col])
    }
}

impl From<(i32, i32)> for Cell {
    fn from((row, col): (i32, i32)) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
