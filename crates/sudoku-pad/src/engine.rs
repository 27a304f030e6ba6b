//! Boundary to the opaque puzzle engine.
//!
//! The editor consumes exactly three operations over the 81-character wire
//! format and treats everything behind them as a black box.

/// Operations the editor needs from a puzzle engine.
pub trait PuzzleEngine {
    /// Solve a serialized puzzle. `None` means the engine found no
    /// solution (or could not read the input); the board stays untouched.
    fn solve(&mut self, puzzle: &str) -> Option<String>;

    /// Produce a fresh random puzzle in wire format.
    fn generate(&mut self) -> String;

    /// Run the engine's own fixed-size benchmark batch. Side effect only;
    /// the iteration count is opaque to the editor.
    fn run_internal_benchmark(&mut self);
}

impl PuzzleEngine for sudoku_engine::Engine {
    fn solve(&mut self, puzzle: &str) -> Option<String> {
        sudoku_engine::Engine::solve(self, puzzle)
    }

    fn generate(&mut self) -> String {
        self.random_puzzle()
    }

    fn run_internal_benchmark(&mut self) {
        self.benchmark_intern();
    }
}
