use gridpath_core::Cell;

/// Manhattan (L1) distance between two cells: |Δrow| + |Δcol|.
///
/// Admissible and consistent for unit-cost 4-directional movement.
/// Saturates at `i32::MAX` for cells too far apart to represent.
#[inline]
pub fn manhattan(a: Cell, b: Cell) -> i32 {
    let d = a.row.abs_diff(b.row).saturating_add(a.col.abs_diff(b.col));
    i32::try_from(d).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_is_symmetric() {
        let a = Cell::new(0, 0);
        let b = Cell::new(4, 3);
        assert_eq!(manhattan(a, b), 7);
        assert_eq!(manhattan(b, a), 7);
        assert_eq!(manhattan(a, a), 0);
    }

    #[test]
    fn manhattan_saturates_on_extreme_cells() {
        let far = Cell::new(i32::MIN, i32::MIN);
        assert_eq!(manhattan(Cell::ORIGIN, far), i32::MAX);
        assert_eq!(manhattan(Cell::new(i32::MAX, 0), Cell::new(i32::MIN, 0)), i32::MAX);
    }
}
