// grid.rs - Grid state and generation advance for Conway's Game of Life

use quick_error::quick_error;

quick_error! {
    #[derive(Debug, PartialEq, Eq)]
    pub enum GridError {
        InvalidDimension(rows: usize, cols: usize) {
            display("grid dimensions must be positive, got {rows}x{cols}")
        }
        OutOfBounds(row: usize, col: usize) {
            display("cell ({row}, {col}) is outside the grid")
        }
    }
}

/// State of a single cell. Kept as a named enum rather than a raw 0/1 so
/// cell state never leaks into arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

/// Fixed-size, edge-bounded grid. Positions past the edges count as
/// permanently dead, there is no wraparound.
#[derive(Debug)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    // Scratch buffer for `advance`; swapped in whole so no reader ever
    // observes a half-updated generation.
    next: Vec<Cell>,
}

impl Grid {
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::InvalidDimension(rows, cols));
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![Cell::Dead; rows * cols],
            next: vec![Cell::Dead; rows * cols],
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Result<Cell, GridError> {
        if row >= self.rows || col >= self.cols {
            return Err(GridError::OutOfBounds(row, col));
        }
        Ok(self.cells[row * self.cols + col])
    }

    pub fn set(&mut self, row: usize, col: usize, value: Cell) -> Result<(), GridError> {
        if row >= self.rows || col >= self.cols {
            return Err(GridError::OutOfBounds(row, col));
        }
        self.cells[row * self.cols + col] = value;
        Ok(())
    }

    /// Number of live cells among the 8 neighbors of `(row, col)`.
    /// Neighbor positions outside the grid are skipped, so edge and corner
    /// cells have fewer than 8 candidates.
    pub fn live_neighbors(&self, row: usize, col: usize) -> usize {
        let mut count = 0;
        for dr in [-1isize, 0, 1] {
            for dc in [-1isize, 0, 1] {
                if dr == 0 && dc == 0 {
                    continue;
                }
                let nr = row as isize + dr;
                let nc = col as isize + dc;
                if nr < 0 || nc < 0 || nr >= self.rows as isize || nc >= self.cols as isize {
                    continue;
                }
                if self.cells[nr as usize * self.cols + nc as usize] == Cell::Alive {
                    count += 1;
                }
            }
        }
        count
    }

    /// Advance one generation. Every next state is computed from the current
    /// generation's neighbor counts before any cell is replaced: results go
    /// into the scratch buffer, which is then swapped in as the live state.
    pub fn advance(&mut self) {
        for row in 0..self.rows {
            for col in 0..self.cols {
                let count = self.live_neighbors(row, col);
                self.next[row * self.cols + col] = match (self.cells[row * self.cols + col], count)
                {
                    (Cell::Alive, 2) | (Cell::Alive, 3) => Cell::Alive, // Survival
                    (Cell::Dead, 3) => Cell::Alive,                     // Birth
                    _ => Cell::Dead,
                };
            }
        }
        std::mem::swap(&mut self.cells, &mut self.next);
    }

    /// Kill every cell in place. The grid object keeps its identity, so
    /// handles held by the render side stay valid across a reset.
    pub fn reset(&mut self) {
        self.cells.fill(Cell::Dead);
    }

    /// Count of live cells, for the status line.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&c| c == Cell::Alive).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set_alive(grid: &mut Grid, cells: &[(usize, usize)]) {
        for &(r, c) in cells {
            grid.set(r, c, Cell::Alive).unwrap();
        }
    }

    fn alive_cells(grid: &Grid) -> Vec<(usize, usize)> {
        let mut out = Vec::new();
        for r in 0..grid.rows() {
            for c in 0..grid.cols() {
                if grid.get(r, c).unwrap() == Cell::Alive {
                    out.push((r, c));
                }
            }
        }
        out
    }

    #[test]
    fn new_grid_is_all_dead() {
        let grid = Grid::new(4, 7).unwrap();
        assert_eq!(grid.rows(), 4);
        assert_eq!(grid.cols(), 7);
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn grid_and_errors_are_debuggable() {
        // `unwrap`/`unwrap_err` on Result<Grid, GridError> need both sides
        // to format with Debug.
        let grid = Grid::new(2, 2).unwrap();
        assert!(format!("{grid:?}").contains("Grid"));
        let err = Grid::new(0, 0).unwrap_err();
        assert!(format!("{err:?}").contains("InvalidDimension"));
    }

    #[test]
    fn zero_dimension_is_rejected() {
        assert_eq!(
            Grid::new(0, 10).unwrap_err(),
            GridError::InvalidDimension(0, 10)
        );
        assert_eq!(
            Grid::new(10, 0).unwrap_err(),
            GridError::InvalidDimension(10, 0)
        );
        assert_eq!(
            Grid::new(0, 0).unwrap_err(),
            GridError::InvalidDimension(0, 0)
        );
    }

    #[test]
    fn out_of_bounds_access_is_rejected() {
        let mut grid = Grid::new(3, 3).unwrap();
        assert_eq!(grid.get(3, 0).unwrap_err(), GridError::OutOfBounds(3, 0));
        assert_eq!(grid.get(0, 3).unwrap_err(), GridError::OutOfBounds(0, 3));
        assert_eq!(
            grid.set(5, 5, Cell::Alive).unwrap_err(),
            GridError::OutOfBounds(5, 5)
        );
        // In-range access on the same grid still works.
        grid.set(2, 2, Cell::Alive).unwrap();
        assert_eq!(grid.get(2, 2).unwrap(), Cell::Alive);
    }

    #[test]
    fn neighbor_count_interior() {
        let mut grid = Grid::new(5, 5).unwrap();
        set_alive(
            &mut grid,
            &[(1, 1), (1, 2), (1, 3), (2, 1), (2, 3), (3, 1), (3, 2), (3, 3)],
        );
        // (2,2) is surrounded by all 8 neighbors alive.
        assert_eq!(grid.live_neighbors(2, 2), 8);
        // (2,2) itself is dead and does not count toward its own neighbors.
        assert_eq!(grid.get(2, 2).unwrap(), Cell::Dead);
    }

    #[test]
    fn neighbor_count_clips_at_edges() {
        let mut grid = Grid::new(3, 3).unwrap();
        // Fill the whole grid; a corner has only 3 in-range neighbors,
        // an edge cell 5.
        for r in 0..3 {
            for c in 0..3 {
                grid.set(r, c, Cell::Alive).unwrap();
            }
        }
        assert_eq!(grid.live_neighbors(0, 0), 3);
        assert_eq!(grid.live_neighbors(0, 2), 3);
        assert_eq!(grid.live_neighbors(2, 0), 3);
        assert_eq!(grid.live_neighbors(2, 2), 3);
        assert_eq!(grid.live_neighbors(0, 1), 5);
        assert_eq!(grid.live_neighbors(1, 0), 5);
        assert_eq!(grid.live_neighbors(1, 1), 8);
    }

    #[test]
    fn lonely_and_crowded_cells_die() {
        // One isolated live cell: 0 neighbors, dies.
        let mut grid = Grid::new(5, 5).unwrap();
        set_alive(&mut grid, &[(2, 2)]);
        grid.advance();
        assert_eq!(grid.population(), 0);

        // A pair: each has 1 neighbor, both die.
        let mut grid = Grid::new(5, 5).unwrap();
        set_alive(&mut grid, &[(2, 2), (2, 3)]);
        grid.advance();
        assert_eq!(grid.population(), 0);

        // Center of a plus with 4 live neighbors dies of overcrowding.
        let mut grid = Grid::new(5, 5).unwrap();
        set_alive(&mut grid, &[(2, 2), (1, 2), (3, 2), (2, 1), (2, 3)]);
        grid.advance();
        assert_eq!(grid.get(2, 2).unwrap(), Cell::Dead);
    }

    #[test]
    fn dead_cell_with_three_neighbors_is_born() {
        let mut grid = Grid::new(5, 5).unwrap();
        set_alive(&mut grid, &[(1, 1), (1, 2), (1, 3)]);
        grid.advance();
        // (2,2) was dead with exactly 3 live neighbors.
        assert_eq!(grid.get(2, 2).unwrap(), Cell::Alive);
        // (3,2) was dead with 0 live neighbors and stays dead.
        assert_eq!(grid.get(3, 2).unwrap(), Cell::Dead);
    }

    #[test]
    fn block_still_life_is_stable() {
        let mut grid = Grid::new(6, 6).unwrap();
        let block = [(2, 2), (2, 3), (3, 2), (3, 3)];
        set_alive(&mut grid, &block);
        grid.advance();
        assert_eq!(alive_cells(&grid), block.to_vec());
        grid.advance();
        assert_eq!(alive_cells(&grid), block.to_vec());
    }

    #[test]
    fn blinker_oscillates_with_period_two() {
        let mut grid = Grid::new(5, 5).unwrap();
        let row = [(2, 1), (2, 2), (2, 3)];
        let column = [(1, 2), (2, 2), (3, 2)];
        set_alive(&mut grid, &row);
        grid.advance();
        assert_eq!(alive_cells(&grid), column.to_vec());
        grid.advance();
        assert_eq!(alive_cells(&grid), row.to_vec());
    }

    #[test]
    fn reset_is_a_fixed_point() {
        let mut grid = Grid::new(5, 5).unwrap();
        set_alive(&mut grid, &[(1, 1), (1, 2), (2, 1), (2, 2), (0, 0)]);
        grid.reset();
        assert_eq!(grid.population(), 0);
        for _ in 0..5 {
            grid.advance();
            assert_eq!(grid.population(), 0);
        }
    }

    #[test]
    fn advance_reads_only_the_old_generation() {
        // A blinker against the top edge exercises the double buffer: an
        // in-place update would corrupt the neighbor counts of cells
        // scanned later in the same pass.
        let mut grid = Grid::new(3, 3).unwrap();
        set_alive(&mut grid, &[(0, 0), (0, 1), (0, 2)]);
        grid.advance();
        assert_eq!(alive_cells(&grid), vec![(0, 1), (1, 1)]);
    }
}
