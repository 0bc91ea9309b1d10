use gridpath_core::Cell;

use crate::frontier::Frontier;
use crate::traits::Pather;

/// Sentinel cost meaning "not reached yet".
pub const UNREACHABLE: i32 = i32::MAX;

/// Per-cell back-references recorded during one search.
///
/// Each reached cell other than the start points at the cell it was reached
/// from. Used only for [`reconstruct`](crate::reconstruct).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predecessors {
    size: i32,
    parents: Vec<Option<Cell>>,
}

impl Predecessors {
    /// An empty map for a `size`×`size` area.
    pub fn new(size: i32) -> Self {
        let side = size.max(0) as usize;
        Self {
            size,
            parents: vec![None; side * side],
        }
    }

    /// Side length of the area this map covers.
    #[inline]
    pub fn size(&self) -> i32 {
        self.size
    }

    /// Number of cells this map covers.
    #[inline]
    pub fn area(&self) -> usize {
        self.parents.len()
    }

    /// The cell `c` was reached from, if any.
    pub fn get(&self, c: Cell) -> Option<Cell> {
        self.idx(c).and_then(|i| self.parents[i])
    }

    pub(crate) fn set(&mut self, c: Cell, parent: Cell) {
        if let Some(i) = self.idx(c) {
            self.parents[i] = Some(parent);
        }
    }

    #[inline]
    fn idx(&self, c: Cell) -> Option<usize> {
        if c.row < 0 || c.row >= self.size || c.col < 0 || c.col >= self.size {
            return None;
        }
        Some(c.row as usize * self.size as usize + c.col as usize)
    }
}

/// The raw outcome of one frontier expansion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exploration {
    /// Cells in the exact order they were settled.
    pub trace: Vec<Cell>,
    pub predecessors: Predecessors,
}

#[derive(Clone)]
struct Node {
    cost: i32,
    settled: bool,
}

/// Shared frontier expansion behind every search variant.
///
/// Settles cells in order of `cost + estimate(cell)`, with unit cost per
/// step, until `target` is settled or the frontier runs dry. The loop stops
/// the moment the target is settled; the rest of the frontier is left
/// unexpanded. `estimate` must be non-negative and consistent.
///
/// A start outside `pather.size()` yields an empty exploration. A target
/// outside it is never settled, so the whole reachable area is explored.
pub(crate) fn explore<P, H>(pather: &P, start: Cell, target: Cell, estimate: H) -> Exploration
where
    P: Pather,
    H: Fn(Cell) -> i32,
{
    let size = pather.size();
    let mut predecessors = Predecessors::new(size);
    let mut trace = Vec::new();

    let Some(start_idx) = predecessors.idx(start) else {
        return Exploration {
            trace,
            predecessors,
        };
    };

    let mut nodes = vec![
        Node {
            cost: UNREACHABLE,
            settled: false,
        };
        predecessors.area()
    ];
    let mut frontier = Frontier::new();
    let mut nbuf = Vec::with_capacity(4);

    nodes[start_idx].cost = 0;
    frontier.push(start_idx, estimate(start));

    while let Some(current) = frontier.pop() {
        let ci = current.idx;
        // Skip stale entries.
        if nodes[ci].settled {
            continue;
        }
        nodes[ci].settled = true;

        let cp = cell_at(size, ci);
        trace.push(cp);
        if cp == target {
            break;
        }

        let tentative = nodes[ci].cost + 1;
        nbuf.clear();
        pather.neighbors(cp, &mut nbuf);

        for &np in nbuf.iter() {
            let Some(ni) = predecessors.idx(np) else {
                continue;
            };
            let n = &mut nodes[ni];
            if n.settled || tentative >= n.cost {
                continue;
            }
            n.cost = tentative;
            predecessors.set(np, cp);
            frontier.push(ni, tentative.saturating_add(estimate(np)));
        }
    }

    Exploration {
        trace,
        predecessors,
    }
}

#[inline]
fn cell_at(size: i32, idx: usize) -> Cell {
    let side = size as usize;
    Cell::new((idx / side) as i32, (idx % side) as i32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridpath_core::Grid;

    #[test]
    fn predecessors_ignore_out_of_range() {
        let mut p = Predecessors::new(2);
        p.set(Cell::new(5, 5), Cell::ORIGIN);
        assert_eq!(p.get(Cell::new(5, 5)), None);
        p.set(Cell::new(1, 1), Cell::new(0, 1));
        assert_eq!(p.get(Cell::new(1, 1)), Some(Cell::new(0, 1)));
        assert_eq!(p.area(), 4);
    }

    #[test]
    fn zero_estimate_settles_by_distance() {
        let g = Grid::new(4).unwrap();
        let ex = explore(&g, Cell::ORIGIN, Cell::new(3, 3), |_| 0);
        let dists: Vec<i32> = ex
            .trace
            .iter()
            .map(|c| crate::manhattan(Cell::ORIGIN, *c))
            .collect();
        let mut sorted = dists.clone();
        sorted.sort();
        assert_eq!(dists, sorted);
        assert_eq!(ex.trace.len(), 16);
        assert_eq!(ex.trace.last(), Some(&Cell::new(3, 3)));
    }

    #[test]
    fn start_has_no_predecessor() {
        let g = Grid::new(3).unwrap();
        let ex = explore(&g, Cell::new(1, 1), Cell::new(0, 0), |_| 0);
        assert_eq!(ex.predecessors.get(Cell::new(1, 1)), None);
        assert!(ex.predecessors.get(Cell::new(0, 0)).is_some());
    }

    #[test]
    fn out_of_range_start_explores_nothing() {
        let g = Grid::new(3).unwrap();
        let ex = explore(&g, Cell::new(-1, 0), Cell::new(0, 0), |_| 0);
        assert!(ex.trace.is_empty());
    }
}
