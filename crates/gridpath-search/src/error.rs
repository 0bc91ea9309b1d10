use std::fmt;

use gridpath_core::Cell;

/// Precondition violations that stop a search before it starts.
///
/// An unreachable target is not an error; it shows up as an empty path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Start or target lies outside `[0, size) × [0, size)`.
    InvalidBounds { cell: Cell, size: i32 },
    /// Start or target lies on an obstructed cell.
    BlockedEndpoint { cell: Cell },
    /// No variant was requested.
    NoAlgorithmSelected,
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBounds { cell, size } => {
                write!(f, "search: cell {cell} outside {size}x{size} grid")
            }
            Self::BlockedEndpoint { cell } => {
                write!(f, "search: endpoint {cell} is obstructed")
            }
            Self::NoAlgorithmSelected => f.write_str("search: no algorithm selected"),
        }
    }
}

impl std::error::Error for SearchError {}
