use std::ops::Index;

use super::Cell;

/// Grid is a fixed-size, edge-bounded board of cells.
///
/// Coordinates are `(row, col)` with `row < height` and `col < width`.
/// Cells are stored row-major in one flat buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Dead; width * height],
        }
    }

    /// Get grid dimensions as (width, height)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub const fn contains(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width
    }

    /// Convert 2D coordinates to 1D index
    const fn get_index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.contains(row, col)
            .then(|| self.cells[self.get_index(row, col)])
    }

    /// Set cell at position; out-of-range writes are dropped
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        if self.contains(row, col) {
            let idx = self.get_index(row, col);
            self.cells[idx] = cell;
        }
    }

    /// Count live cells in the Moore neighborhood.
    ///
    /// Neighbors outside the board are skipped entirely: the grid sits in a
    /// void that is never alive, there is no wraparound.
    pub fn count_live_neighbors(&self, row: usize, col: usize) -> u8 {
        (-1isize..=1)
            .flat_map(|dr| (-1isize..=1).map(move |dc| (dr, dc)))
            .filter(|&(dr, dc)| dr != 0 || dc != 0)
            .filter_map(|(dr, dc)| {
                let r = row.checked_add_signed(dr)?;
                let c = col.checked_add_signed(dc)?;
                self.get(r, c)
            })
            .filter(|cell| cell.is_alive())
            .count() as u8
    }

    /// Write the next generation of `self` into `next`.
    /// `next` must have the same dimensions.
    pub(crate) fn evolve_into(&self, next: &mut Grid) {
        debug_assert_eq!(self.dimensions(), next.dimensions());

        for row in 0..self.height {
            for col in 0..self.width {
                let idx = self.get_index(row, col);
                let neighbors = self.count_live_neighbors(row, col);
                next.cells[idx] = self.cells[idx].evolve(neighbors);
            }
        }
    }

    /// Clear all cells to dead state
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = Cell::Dead);
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Rows as slices, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.width.max(1))
    }

    /// Iterate over all cells with their positions as (row, col, cell)
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (idx / self.width, idx % self.width, cell))
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }
}

impl Index<(usize, usize)> for Grid {
    type Output = Cell;

    /// Panics when `(row, col)` is outside the grid; use [`Grid::get`] for a checked read.
    fn index(&self, (row, col): (usize, usize)) -> &Cell {
        assert!(
            self.contains(row, col),
            "cell ({row}, {col}) outside {}x{} grid",
            self.width,
            self.height
        );
        &self.cells[self.get_index(row, col)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with(width: usize, height: usize, alive: &[(usize, usize)]) -> Grid {
        let mut grid = Grid::new(width, height);
        for &(row, col) in alive {
            grid.set(row, col, Cell::Alive);
        }
        grid
    }

    #[test]
    fn test_new_grid_is_dead() {
        let grid = Grid::new(4, 3);
        assert_eq!(grid.dimensions(), (4, 3));
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_get_out_of_bounds_is_none() {
        let grid = Grid::new(4, 3);
        assert_eq!(grid.get(2, 3), Some(Cell::Dead));
        assert_eq!(grid.get(3, 0), None);
        assert_eq!(grid.get(0, 4), None);
    }

    #[test]
    fn test_non_square_indexing() {
        // 5 columns, 2 rows: (row 1, col 4) is the last cell
        let grid = grid_with(5, 2, &[(1, 4)]);
        assert_eq!(grid[(1, 4)], Cell::Alive);
        assert_eq!(grid[(0, 4)], Cell::Dead);
        let rows: Vec<&[Cell]> = grid.rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1][4], Cell::Alive);
    }

    #[test]
    fn test_center_only_neighbor_counts() {
        let grid = grid_with(3, 3, &[(1, 1)]);
        for corner in [(0, 0), (0, 2), (2, 0), (2, 2)] {
            assert_eq!(grid.count_live_neighbors(corner.0, corner.1), 1);
        }
        assert_eq!(grid.count_live_neighbors(1, 1), 0);
    }

    #[test]
    fn test_edges_do_not_wrap() {
        // A live cell on the far edge must not count for the near edge
        let grid = grid_with(5, 5, &[(0, 4), (4, 0)]);
        assert_eq!(grid.count_live_neighbors(0, 0), 0);
        assert_eq!(grid.count_live_neighbors(4, 4), 0);
    }

    #[test]
    fn test_full_neighborhood() {
        let alive: Vec<_> = (0..3).flat_map(|r| (0..3).map(move |c| (r, c))).collect();
        let grid = grid_with(3, 3, &alive);
        assert_eq!(grid.count_live_neighbors(1, 1), 8);
        assert_eq!(grid.count_live_neighbors(0, 0), 3);
        assert_eq!(grid.count_live_neighbors(0, 1), 5);
    }

    #[test]
    fn test_iter_cells_positions() {
        let grid = grid_with(3, 2, &[(1, 2)]);
        let alive: Vec<_> = grid
            .iter_cells()
            .filter(|(_, _, cell)| cell.is_alive())
            .map(|(r, c, _)| (r, c))
            .collect();
        assert_eq!(alive, vec![(1, 2)]);
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_bounds_panics() {
        let grid = Grid::new(2, 2);
        let _ = grid[(2, 0)];
    }
}
