use crate::board::{Board, OutOfRangeError, CELL_COUNT};
use crate::engine::PuzzleEngine;
use crate::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent};
use std::io;
use std::time::Instant;
use tracing::warn;

/// Generate+solve cycles in the board benchmark.
pub const BENCH_ROUNDS: usize = 1000;

/// Reported iteration count for the internal benchmark. The engine's own
/// batch size is opaque here; this figure is a display convention.
const INTERNAL_BENCH_NOMINAL: usize = 1000;

/// Result of handling a key press
pub enum AppAction {
    Continue,
    Quit,
    /// Run the board benchmark; the event loop supplies the frame yield.
    BoardBenchmark,
}

/// Focus movement over the 81-cell ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Next focus index from `c`, 1-based with wraparound.
    ///
    /// Up and Down step a full row (9 cells) around the ring, which keeps
    /// the column and wraps between the top and bottom rows. Left and
    /// Right wrap between cell 1 and cell 81. The ring uses the
    /// representatives {1, ..., 81}, so a modulo result of 0 maps to 81.
    pub fn step(self, c: usize) -> usize {
        let next = match self {
            Direction::Up => (c + 72) % 81,
            Direction::Down => (c + 9) % 81,
            Direction::Right => {
                if c + 1 == 82 {
                    1
                } else {
                    c + 1
                }
            }
            Direction::Left => c - 1,
        };
        if next == 0 {
            81
        } else {
            next
        }
    }
}

/// The interaction controller: owns the board, the focused cell, and the
/// solution-overlay state, and drives the engine workflows.
pub struct App<E> {
    board: Board,
    cursor: usize,
    solution_visible: bool,
    status: Option<String>,
    theme: Theme,
    dark_theme: bool,
    engine: E,
}

impl<E: PuzzleEngine> App<E> {
    pub fn new(engine: E) -> Self {
        Self {
            board: Board::new(),
            cursor: 41, // center of the grid
            solution_visible: false,
            status: None,
            theme: Theme::dark(),
            dark_theme: true,
            engine,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn solution_visible(&self) -> bool {
        self.solution_visible
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<AppAction, OutOfRangeError> {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Ok(AppAction::Quit),

            // Navigation
            KeyCode::Up => self.move_cursor(Direction::Up),
            KeyCode::Down => self.move_cursor(Direction::Down),
            KeyCode::Left => self.move_cursor(Direction::Left),
            KeyCode::Right => self.move_cursor(Direction::Right),

            // Direct edits
            KeyCode::Char(c @ '1'..='9') => self.edit_cell(Some(c as u8 - b'0'))?,
            KeyCode::Char('0') | KeyCode::Delete | KeyCode::Backspace => self.edit_cell(None)?,

            // Workflows
            KeyCode::Char('s') | KeyCode::Enter => self.solve()?,
            KeyCode::Char('n') => self.generate_new_board()?,
            KeyCode::Char('b') => return Ok(AppAction::BoardBenchmark),
            KeyCode::Char('i') => self.run_internal_benchmark(),

            KeyCode::Char('t') => self.toggle_theme(),

            // Anything else passes through untouched
            _ => {}
        }
        Ok(AppAction::Continue)
    }

    fn toggle_theme(&mut self) {
        self.dark_theme = !self.dark_theme;
        self.theme = if self.dark_theme {
            Theme::dark()
        } else {
            Theme::light()
        };
    }

    fn move_cursor(&mut self, direction: Direction) {
        let next = direction.step(self.cursor);
        if self.board.contains(next) {
            self.cursor = next;
        } else {
            // Ring arithmetic never leaves 1..=81; log and keep focus.
            warn!(target_index = next, "navigation target missing");
        }
    }

    /// Direct edit of the focused cell. Any edit while the solution
    /// overlay is visible drops every hint on the board, not just this
    /// cell's.
    fn edit_cell(&mut self, digit: Option<u8>) -> Result<(), OutOfRangeError> {
        self.board.set_value(self.cursor, digit)?;
        self.clear_hints_if_visible();
        Ok(())
    }

    fn clear_hints_if_visible(&mut self) {
        if !self.solution_visible {
            return;
        }
        self.board.clear_hints();
        self.solution_visible = false;
    }

    /// Serialize the board: 81 digit characters, `0` for empty cells.
    pub fn read_board(&self) -> String {
        self.board
            .cells()
            .map(|cell| char::from(b'0' + cell.value().unwrap_or(0)))
            .collect()
    }

    /// Write a serialized puzzle into the board. `0` clears a cell, a
    /// digit sets it; anything unreadable clears. Writing counts as a
    /// direct edit, so stale hints never survive under fresh values.
    pub fn write_board(&mut self, puzzle: &str) -> Result<(), OutOfRangeError> {
        for (i, c) in puzzle.chars().take(CELL_COUNT).enumerate() {
            let digit = c.to_digit(10).map(|d| d as u8).filter(|&d| d != 0);
            self.board.set_value(i + 1, digit)?;
        }
        self.clear_hints_if_visible();
        Ok(())
    }

    /// Overlay a solution as hints. Zeros leave cells untouched; digits
    /// set the cell's hint, never its value, so user entries stay
    /// authoritative while the solution shows through the blanks.
    pub fn write_solution_hints(&mut self, solution: &str) -> Result<(), OutOfRangeError> {
        for (i, c) in solution.chars().take(CELL_COUNT).enumerate() {
            if let Some(digit) = c.to_digit(10).map(|d| d as u8).filter(|&d| d != 0) {
                self.board.set_hint(i + 1, Some(digit))?;
            }
        }
        self.solution_visible = true;
        Ok(())
    }

    /// Solve the current board through the engine.
    ///
    /// A failed solve only updates the status line; the board and the
    /// overlay flag stay exactly as they were, and nothing is retried.
    pub fn solve(&mut self) -> Result<(), OutOfRangeError> {
        let puzzle = self.read_board();

        let start = Instant::now();
        let solution = self.engine.solve(&puzzle);
        let elapsed = start.elapsed();

        match solution {
            Some(solution) => {
                self.status = Some(format!(
                    "Solved sudoku in {:.3}ms",
                    elapsed.as_secs_f64() * 1000.0
                ));
                self.write_solution_hints(&solution)?;
            }
            None => {
                self.status = Some("Couldn't solve sudoku".to_string());
            }
        }
        Ok(())
    }

    /// Replace the board with a freshly generated puzzle.
    pub fn generate_new_board(&mut self) -> Result<(), OutOfRangeError> {
        self.clear_hints_if_visible();
        let puzzle = self.engine.generate();
        self.write_board(&puzzle)
    }

    /// Run 1000 generate+solve cycles, yielding to `yield_frame` once per
    /// cycle so every iteration's effect is observable before the next
    /// begins. The reported time covers the whole loop, yields included.
    pub fn run_board_benchmark(
        &mut self,
        mut yield_frame: impl FnMut(&Self) -> io::Result<()>,
    ) -> io::Result<()> {
        let start = Instant::now();
        for _ in 0..BENCH_ROUNDS {
            self.generate_new_board().map_err(io::Error::other)?;
            self.solve().map_err(io::Error::other)?;
            yield_frame(self)?;
        }
        let elapsed = start.elapsed();

        self.status = Some(format!(
            "Benchmark (board edition, including rendering) solved {} sudokus in {:.3}ms",
            BENCH_ROUNDS,
            elapsed.as_secs_f64() * 1000.0
        ));
        Ok(())
    }

    /// Time two back-to-back runs of the engine's internal benchmark. No
    /// yields, no board writes; the nominal count is a display convention.
    pub fn run_internal_benchmark(&mut self) {
        let start = Instant::now();
        self.engine.run_internal_benchmark();
        self.engine.run_internal_benchmark();
        let elapsed = start.elapsed();

        self.status = Some(format!(
            "Benchmark (internal edition, no board writes) solved {} sudokus in {:.3}ms",
            INTERNAL_BENCH_NOMINAL,
            elapsed.as_secs_f64() * 1000.0
        ));
    }
}
