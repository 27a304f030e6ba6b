use crate::grid::{Grid, BOARD_SIZE};

/// Backtracking sudoku solver over candidate bitmasks.
pub struct Solver;

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver {
    pub fn new() -> Self {
        Self
    }

    /// Solve a puzzle, returning the first completed grid found.
    ///
    /// `None` means the givens are contradictory or no assignment of the
    /// empty cells satisfies the constraints.
    pub fn solve(&self, grid: &Grid) -> Option<Grid> {
        if !grid.is_consistent() {
            return None;
        }

        let mut work = grid.clone();
        if Self::search(&mut work) {
            Some(work)
        } else {
            None
        }
    }

    /// Count solutions, stopping early once `limit` have been found.
    pub fn count_solutions(&self, grid: &Grid, limit: usize) -> usize {
        if limit == 0 || !grid.is_consistent() {
            return 0;
        }

        let mut work = grid.clone();
        let mut found = 0;
        Self::search_count(&mut work, limit, &mut found);
        found
    }

    fn search(grid: &mut Grid) -> bool {
        let (row, col, mask) = match Self::most_constrained_cell(grid) {
            Some(cell) => cell,
            None => return true, // no empty cell left
        };

        for digit in 1..=BOARD_SIZE as u8 {
            if mask & (1 << (digit - 1)) == 0 {
                continue;
            }
            grid.set(row, col, Some(digit));
            if Self::search(grid) {
                return true;
            }
            grid.set(row, col, None);
        }
        false
    }

    fn search_count(grid: &mut Grid, limit: usize, found: &mut usize) {
        let (row, col, mask) = match Self::most_constrained_cell(grid) {
            Some(cell) => cell,
            None => {
                *found += 1;
                return;
            }
        };

        for digit in 1..=BOARD_SIZE as u8 {
            if mask & (1 << (digit - 1)) == 0 {
                continue;
            }
            grid.set(row, col, Some(digit));
            Self::search_count(grid, limit, found);
            grid.set(row, col, None);
            if *found >= limit {
                return;
            }
        }
    }

    /// The empty cell with the fewest candidates, or `None` when the grid
    /// is complete. A cell with zero candidates is returned immediately so
    /// the search fails fast.
    fn most_constrained_cell(grid: &Grid) -> Option<(usize, usize, u16)> {
        let mut best: Option<(usize, usize, u16)> = None;

        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if grid.get(row, col).is_some() {
                    continue;
                }
                let mask = grid.candidates(row, col);
                let count = mask.count_ones();
                if count == 0 {
                    return Some((row, col, mask));
                }
                match best {
                    Some((_, _, m)) if m.count_ones() <= count => {}
                    _ => best = Some((row, col, mask)),
                }
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PUZZLE: &str =
        "278000401609100050005006900430809000706003000091000800000020173860001004107934685";

    #[test]
    fn test_solves_puzzle() {
        let grid = Grid::from_wire(PUZZLE).unwrap();
        let solver = Solver::new();

        let solution = solver.solve(&grid).unwrap();
        assert!(solution.is_complete());
        assert!(solution.is_consistent());

        // Givens carry through untouched
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if let Some(d) = grid.get(row, col) {
                    assert_eq!(solution.get(row, col), Some(d));
                }
            }
        }
    }

    #[test]
    fn test_contradictory_givens_fail() {
        let mut grid = Grid::empty();
        grid.set(0, 0, Some(5));
        grid.set(0, 1, Some(5));

        assert!(Solver::new().solve(&grid).is_none());
    }

    #[test]
    fn test_unsolvable_puzzle_fails() {
        // Consistent givens that box in (0,0): row takes 1..=6, column the
        // rest, leaving it no candidate.
        let mut grid = Grid::empty();
        for (col, d) in (1..=6u8).enumerate() {
            grid.set(0, col + 1, Some(d));
        }
        grid.set(1, 0, Some(7));
        grid.set(2, 0, Some(8));
        grid.set(3, 0, Some(9));

        assert!(grid.is_consistent());
        assert!(Solver::new().solve(&grid).is_none());
    }

    #[test]
    fn test_count_solutions_on_solved_grid() {
        let grid = Grid::from_wire(PUZZLE).unwrap();
        let solver = Solver::new();
        let solution = solver.solve(&grid).unwrap();

        assert_eq!(solver.count_solutions(&solution, 2), 1);
    }

    #[test]
    fn test_count_solutions_respects_limit() {
        let solver = Solver::new();
        assert_eq!(solver.count_solutions(&Grid::empty(), 2), 2);
    }
}
