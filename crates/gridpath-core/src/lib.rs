//! **gridpath-core**: value types for grid shortest-path search.
//!
//! This crate provides the types shared by the search engine and whatever
//! presentation layer drives it: [`Cell`] coordinates with a fixed
//! neighbour order, and the square obstruction [`Grid`] snapshot.

pub mod cell;
pub mod grid;

pub use cell::Cell;
pub use grid::{Grid, GridError, GridIter};
