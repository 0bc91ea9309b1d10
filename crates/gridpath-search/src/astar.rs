use gridpath_core::Cell;

use crate::distance::manhattan;
use crate::explore::{Exploration, explore};
use crate::traits::Pather;

/// Heuristic-guided shortest-path search from `start` to `target`.
///
/// Settles cells in order of accumulated cost plus the Manhattan distance to
/// `target`. Finds paths as short as [`dijkstra`](crate::dijkstra) while
/// settling no more cells than it does.
///
/// Unlike [`run_search`](crate::run_search), endpoints are not validated: an
/// out-of-range start explores nothing and an out-of-range target is never
/// reached.
pub fn astar<P: Pather>(pather: &P, start: Cell, target: Cell) -> Exploration {
    explore(pather, start, target, |c| manhattan(c, target))
}
