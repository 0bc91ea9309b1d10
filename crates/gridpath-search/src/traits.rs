use gridpath_core::{Cell, Grid};

/// Minimal search interface: provides bounds and neighbor enumeration.
pub trait Pather {
    /// Side length of the square area being searched.
    fn size(&self) -> i32;

    /// Append the traversable neighbors of `c` into `buf`. The caller clears
    /// `buf` before calling.
    ///
    /// Implementations must enumerate in a fixed order; it decides how the
    /// frontier breaks priority ties and so shows up in visitation traces.
    fn neighbors(&self, c: Cell, buf: &mut Vec<Cell>);
}

impl Pather for Grid {
    #[inline]
    fn size(&self) -> i32 {
        Grid::size(self)
    }

    /// Open, in-bounds cardinal neighbors in the order up, down, left, right.
    fn neighbors(&self, c: Cell, buf: &mut Vec<Cell>) {
        buf.extend(c.neighbors_4().into_iter().filter(|&n| self.is_open(n)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn neighbors_of(grid: &Grid, c: Cell) -> Vec<Cell> {
        let mut buf = Vec::new();
        grid.neighbors(c, &mut buf);
        buf
    }

    #[test]
    fn interior_cell_has_four() {
        let g = Grid::new(3).unwrap();
        assert_eq!(
            neighbors_of(&g, Cell::new(1, 1)),
            vec![
                Cell::new(0, 1),
                Cell::new(2, 1),
                Cell::new(1, 0),
                Cell::new(1, 2),
            ]
        );
    }

    #[test]
    fn corner_is_clipped_to_bounds() {
        let g = Grid::new(3).unwrap();
        assert_eq!(
            neighbors_of(&g, Cell::new(0, 0)),
            vec![Cell::new(1, 0), Cell::new(0, 1)]
        );
        assert_eq!(
            neighbors_of(&g, Cell::new(2, 2)),
            vec![Cell::new(1, 2), Cell::new(2, 1)]
        );
    }

    #[test]
    fn obstructed_cells_are_skipped() {
        let g = Grid::from_ascii(".#.\n...\n.#.").unwrap();
        assert_eq!(
            neighbors_of(&g, Cell::new(1, 1)),
            vec![Cell::new(1, 0), Cell::new(1, 2)]
        );
    }

    #[test]
    fn single_cell_grid_has_none() {
        let g = Grid::new(1).unwrap();
        assert!(neighbors_of(&g, Cell::ORIGIN).is_empty());
    }
}
