//! The [`Cell`] type: a grid position addressed by row and column.

use std::fmt;
use std::hash::{Hash, Hasher};

/// A grid position. Rows grow downward, columns grow rightward, both
/// 0-indexed.
///
/// A `Cell` is a pure value identity: two cells are equal iff their row and
/// column match. Whether a cell is obstructed is a property of the
/// [`Grid`](crate::Grid) it is looked up in, not of the cell itself.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    /// Top-left corner (0, 0).
    pub const ORIGIN: Self = Self { row: 0, col: 0 };

    /// Create a new cell.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a cell shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// The four cardinal neighbours in the fixed order up, down, left, right.
    ///
    /// This order decides which of several equal-priority cells the search
    /// frontier sees first, so it is observable in visitation traces.
    #[inline]
    pub const fn neighbors_4(self) -> [Cell; 4] {
        [
            self.shift(-1, 0),
            self.shift(1, 0),
            self.shift(0, -1),
            self.shift(0, 1),
        ]
    }
}

impl Hash for Cell {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.row.hash(state);
        self.col.hash(state);
    }
}

impl PartialOrd for Cell {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cell {
    /// Row-major ordering.
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn neighbor_order_is_up_down_left_right() {
        let c = Cell::new(3, 5);
        assert_eq!(
            c.neighbors_4(),
            [
                Cell::new(2, 5),
                Cell::new(4, 5),
                Cell::new(3, 4),
                Cell::new(3, 6),
            ]
        );
    }

    #[test]
    fn equality_is_by_coordinates() {
        let a = Cell::new(1, 2);
        let b: Cell = (1, 2).into();
        assert_eq!(a, b);
        let set: HashSet<Cell> = [a, b, Cell::new(2, 1)].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn ordering_is_row_major() {
        let mut cells = vec![Cell::new(1, 0), Cell::new(0, 2), Cell::new(0, 1)];
        cells.sort();
        assert_eq!(cells, vec![Cell::new(0, 1), Cell::new(0, 2), Cell::new(1, 0)]);
    }

    #[test]
    fn display() {
        assert_eq!(Cell::new(4, 7).to_string(), "(4, 7)");
    }
}
