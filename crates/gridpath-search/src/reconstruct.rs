use gridpath_core::Cell;

use crate::explore::Predecessors;

/// Walk `predecessors` back from `target` to `start`.
///
/// Returns the route from `start` to `target` inclusive, or an empty vector
/// if `target` was never reached. The walk is bounded by the grid area, so a
/// map inconsistent with `start` also yields an empty route.
pub fn reconstruct(predecessors: &Predecessors, start: Cell, target: Cell) -> Vec<Cell> {
    let mut path = Vec::new();
    let mut cur = target;
    loop {
        path.push(cur);
        if cur == start {
            break;
        }
        if path.len() > predecessors.area() {
            return Vec::new();
        }
        match predecessors.get(cur) {
            Some(prev) => cur = prev,
            None => return Vec::new(),
        }
    }
    path.reverse();

    if path.first() != Some(&start) {
        return Vec::new();
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn follows_chain() {
        let mut p = Predecessors::new(3);
        p.set(Cell::new(0, 1), Cell::new(0, 0));
        p.set(Cell::new(1, 1), Cell::new(0, 1));
        let path = reconstruct(&p, Cell::new(0, 0), Cell::new(1, 1));
        assert_eq!(path, vec![Cell::new(0, 0), Cell::new(0, 1), Cell::new(1, 1)]);
    }

    #[test]
    fn start_equals_target() {
        let p = Predecessors::new(3);
        assert_eq!(
            reconstruct(&p, Cell::new(2, 2), Cell::new(2, 2)),
            vec![Cell::new(2, 2)]
        );
    }

    #[test]
    fn unreached_target_is_empty() {
        let p = Predecessors::new(3);
        assert!(reconstruct(&p, Cell::new(0, 0), Cell::new(2, 2)).is_empty());
    }

    #[test]
    fn chain_not_ending_at_start_is_empty() {
        let mut p = Predecessors::new(3);
        p.set(Cell::new(0, 2), Cell::new(0, 1));
        assert!(reconstruct(&p, Cell::new(0, 0), Cell::new(0, 2)).is_empty());
    }

    #[test]
    fn cyclic_map_terminates() {
        let mut p = Predecessors::new(3);
        p.set(Cell::new(0, 1), Cell::new(0, 2));
        p.set(Cell::new(0, 2), Cell::new(0, 1));
        assert!(reconstruct(&p, Cell::new(0, 0), Cell::new(0, 2)).is_empty());
    }
}
