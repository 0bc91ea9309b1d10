//! A square grid of open and obstructed cells.
//!
//! [`Grid`] is the snapshot the search engine reads. Callers edit their own
//! copy between runs; a search only ever borrows it immutably.

use std::fmt;

use crate::cell::Cell;

/// Character used for obstructed cells in the ASCII format.
const OBSTRUCTED: char = '#';
/// Character used for open cells in the ASCII format.
const OPEN: char = '.';

/// A square `size`×`size` matrix of cells, each open or obstructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: i32,
    /// Row-major obstruction flags.
    blocked: Vec<bool>,
}

impl Grid {
    /// Create an open grid of side `size`. Fails if `size < 1`.
    pub fn new(size: i32) -> Result<Self, GridError> {
        if size < 1 {
            return Err(GridError::InvalidSize(size));
        }
        let len = size as usize * size as usize;
        Ok(Self {
            size,
            blocked: vec![false; len],
        })
    }

    /// Parse a grid from lines of `#` (obstructed) and `.` (open).
    ///
    /// The picture must be square. Lines may end in `\n` or `\r\n`, and a
    /// single trailing line ending is accepted.
    pub fn from_ascii(text: &str) -> Result<Self, GridError> {
        let lines: Vec<&str> = text.lines().collect();
        let rows = lines.len();
        for line in &lines {
            let cols = line.chars().count();
            if cols != rows {
                return Err(GridError::NotSquare { rows, cols });
            }
        }
        let mut grid = Self::new(rows as i32)?;
        for (row, line) in lines.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                let cell = Cell::new(row as i32, col as i32);
                match ch {
                    OBSTRUCTED => grid.set_obstructed(cell, true),
                    OPEN => {}
                    _ => return Err(GridError::InvalidChar { ch, cell }),
                }
            }
        }
        Ok(grid)
    }

    /// Side length.
    #[inline]
    pub fn size(&self) -> i32 {
        self.size
    }

    /// Number of cells (`size * size`).
    #[inline]
    pub fn area(&self) -> usize {
        self.blocked.len()
    }

    /// Whether `cell` lies within `[0, size) × [0, size)`.
    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row >= 0 && cell.row < self.size && cell.col >= 0 && cell.col < self.size
    }

    /// Row-major flat index of `cell`, or `None` if out of bounds.
    #[inline]
    pub fn index(&self, cell: Cell) -> Option<usize> {
        if !self.contains(cell) {
            return None;
        }
        Some(cell.row as usize * self.size as usize + cell.col as usize)
    }

    /// The cell at a row-major flat index.
    #[inline]
    pub fn cell(&self, idx: usize) -> Cell {
        let size = self.size as usize;
        Cell::new((idx / size) as i32, (idx % size) as i32)
    }

    /// Whether `cell` is obstructed. Out-of-bounds cells are not.
    pub fn is_obstructed(&self, cell: Cell) -> bool {
        self.index(cell).is_some_and(|i| self.blocked[i])
    }

    /// Whether `cell` is in bounds and not obstructed.
    pub fn is_open(&self, cell: Cell) -> bool {
        self.index(cell).is_some_and(|i| !self.blocked[i])
    }

    /// Set the obstruction flag at `cell`. Does nothing if out of bounds.
    pub fn set_obstructed(&mut self, cell: Cell, obstructed: bool) {
        if let Some(i) = self.index(cell) {
            self.blocked[i] = obstructed;
        }
    }

    /// Flip the obstruction flag at `cell`. Does nothing if out of bounds.
    pub fn toggle(&mut self, cell: Cell) {
        if let Some(i) = self.index(cell) {
            self.blocked[i] = !self.blocked[i];
        }
    }

    /// Clear every obstruction.
    pub fn clear(&mut self) {
        self.blocked.fill(false);
    }

    /// Count obstructed cells.
    pub fn obstructed_count(&self) -> usize {
        self.blocked.iter().filter(|&&b| b).count()
    }

    /// Iterate over `(Cell, obstructed)` pairs in row-major order.
    pub fn iter(&self) -> GridIter<'_> {
        GridIter { grid: self, pos: 0 }
    }
}

impl fmt::Display for Grid {
    /// Renders the ASCII format accepted by [`Grid::from_ascii`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &b) in self.blocked.iter().enumerate() {
            if i > 0 && i % self.size as usize == 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}", if b { OBSTRUCTED } else { OPEN })?;
        }
        Ok(())
    }
}

/// Iterator over `(Cell, obstructed)` pairs of a [`Grid`].
pub struct GridIter<'a> {
    grid: &'a Grid,
    pos: usize,
}

impl Iterator for GridIter<'_> {
    type Item = (Cell, bool);

    fn next(&mut self) -> Option<Self::Item> {
        let b = *self.grid.blocked.get(self.pos)?;
        let item = (self.grid.cell(self.pos), b);
        self.pos += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.grid.blocked.len() - self.pos;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for GridIter<'_> {}

impl<'a> IntoIterator for &'a Grid {
    type Item = (Cell, bool);
    type IntoIter = GridIter<'a>;

    fn into_iter(self) -> GridIter<'a> {
        self.iter()
    }
}

/// Errors that can occur when building or parsing a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Side length below 1.
    InvalidSize(i32),
    /// ASCII picture whose lines do not form a square.
    NotSquare { rows: usize, cols: usize },
    /// A character other than `#` or `.` was found.
    InvalidChar { ch: char, cell: Cell },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize(n) => write!(f, "grid: invalid size {n}, must be at least 1"),
            Self::NotSquare { rows, cols } => {
                write!(f, "grid: not square, {rows} rows but a line has {cols} columns")
            }
            Self::InvalidChar { ch, cell } => {
                write!(f, "grid contains invalid character \u{201c}{ch}\u{201d} at {cell}")
            }
        }
    }
}

impl std::error::Error for GridError {}

#[cfg(feature = "serde")]
impl serde::Serialize for Grid {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let rows: Vec<String> = self.to_string().split('\n').map(str::to_owned).collect();
        rows.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Grid {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rows = Vec::<String>::deserialize(deserializer)?;
        Grid::from_ascii(&rows.join("\n")).map_err(serde::de::Error::custom)
    }
}
