//! Sudoku computation engine: solving, random puzzle generation, and an
//! internal throughput benchmark.
//!
//! Callers speak the wire format only: 81 ASCII digit characters per board,
//! row-major, `0` for an empty cell, no delimiters.

pub mod generator;
pub mod grid;
pub mod solver;

pub use generator::Generator;
pub use grid::Grid;
pub use solver::Solver;

/// Solves per `benchmark_intern` call.
const BENCH_SOLVES: usize = 500;

/// Puzzle pinned for the internal benchmark.
const BENCH_PUZZLE: &str =
    "278000401609100050005006900430809000706003000091000800000020173860001004107934685";

/// Facade over the three operations consumed by front ends.
pub struct Engine {
    solver: Solver,
    generator: Generator,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    pub fn new() -> Self {
        Self {
            solver: Solver::new(),
            generator: Generator::new(),
        }
    }

    /// Solve a serialized puzzle. `None` covers both malformed input and
    /// puzzles without a solution.
    pub fn solve(&self, puzzle: &str) -> Option<String> {
        let grid = Grid::from_wire(puzzle)?;
        self.solver.solve(&grid).map(|solved| solved.to_wire())
    }

    /// Produce a fresh random puzzle in wire format.
    pub fn random_puzzle(&mut self) -> String {
        self.generator.generate().to_wire()
    }

    /// Solve a pinned puzzle batch back to back. The iteration count is an
    /// internal detail; callers only time the call.
    pub fn benchmark_intern(&self) {
        let grid = Grid::from_wire(BENCH_PUZZLE).expect("pinned benchmark puzzle is well-formed");
        for _ in 0..BENCH_SOLVES {
            let _ = self.solver.solve(&grid);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solve_wire_to_wire() {
        let engine = Engine::new();
        let solution = engine.solve(BENCH_PUZZLE).unwrap();

        assert_eq!(solution.len(), 81);
        assert!(!solution.contains('0'));

        let grid = Grid::from_wire(&solution).unwrap();
        assert!(grid.is_complete());
        assert!(grid.is_consistent());
    }

    #[test]
    fn test_solve_rejects_malformed_input() {
        let engine = Engine::new();
        assert!(engine.solve("not a puzzle").is_none());
        assert!(engine.solve(&"5".repeat(81)).is_none());
    }

    #[test]
    fn test_random_puzzle_is_solvable() {
        let mut engine = Engine::new();
        let puzzle = engine.random_puzzle();

        assert_eq!(puzzle.len(), 81);
        assert!(engine.solve(&puzzle).is_some());
    }
}
