use gridpath_core::Cell;

use crate::explore::{Exploration, explore};
use crate::traits::Pather;

/// Uninformed shortest-path search from `start` to `target`.
///
/// Settles cells in order of accumulated cost only, and stops as soon as
/// `target` is settled.
pub fn dijkstra<P: Pather>(pather: &P, start: Cell, target: Cell) -> Exploration {
    explore(pather, start, target, |_| 0)
}
