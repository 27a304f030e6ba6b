use std::fmt::{Display, Formatter};

pub const BOARD_SIZE: usize = 9;

/// Bitmask of all nine digits (bit d-1 stands for digit d).
pub(crate) const ALL_DIGITS: u16 = 0x1FF;

/// A 9x9 sudoku grid. `None` marks an empty cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [[Option<u8>; BOARD_SIZE]; BOARD_SIZE],
}

impl Grid {
    /// Create an empty grid
    pub fn empty() -> Self {
        Self {
            cells: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Parse the wire format: exactly 81 ASCII digits, row-major, `0` = empty.
    pub fn from_wire(wire: &str) -> Option<Self> {
        if wire.len() != BOARD_SIZE * BOARD_SIZE {
            return None;
        }

        let mut grid = Self::empty();
        for (i, c) in wire.chars().enumerate() {
            let digit = c.to_digit(10)? as u8;
            if digit != 0 {
                grid.cells[i / BOARD_SIZE][i % BOARD_SIZE] = Some(digit);
            }
        }
        Some(grid)
    }

    /// Serialize to the wire format: 81 digit characters, `0` = empty.
    pub fn to_wire(&self) -> String {
        let mut out = String::with_capacity(BOARD_SIZE * BOARD_SIZE);
        for row in &self.cells {
            for cell in row {
                out.push(char::from(b'0' + cell.unwrap_or(0)));
            }
        }
        out
    }

    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        self.cells[row][col]
    }

    pub fn set(&mut self, row: usize, col: usize, value: Option<u8>) {
        self.cells[row][col] = value;
    }

    /// Whether every cell holds a digit.
    pub fn is_complete(&self) -> bool {
        self.cells.iter().flatten().all(|c| c.is_some())
    }

    /// Number of filled cells.
    pub fn given_count(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_some()).count()
    }

    /// Digits still legal at (row, col), as a bitmask over ALL_DIGITS.
    pub(crate) fn candidates(&self, row: usize, col: usize) -> u16 {
        let mut taken: u16 = 0;

        for i in 0..BOARD_SIZE {
            if let Some(d) = self.cells[row][i] {
                taken |= 1 << (d - 1);
            }
            if let Some(d) = self.cells[i][col] {
                taken |= 1 << (d - 1);
            }
        }

        let box_row = (row / 3) * 3;
        let box_col = (col / 3) * 3;
        for r in box_row..box_row + 3 {
            for c in box_col..box_col + 3 {
                if let Some(d) = self.cells[r][c] {
                    taken |= 1 << (d - 1);
                }
            }
        }

        ALL_DIGITS & !taken
    }

    /// Whether no row, column, or box repeats a digit.
    pub fn is_consistent(&self) -> bool {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if let Some(d) = self.cells[row][col] {
                    // A cell conflicts with its peers if its digit is not a
                    // candidate once the cell itself is vacated.
                    let mut probe = self.clone();
                    probe.cells[row][col] = None;
                    if probe.candidates(row, col) & (1 << (d - 1)) == 0 {
                        return false;
                    }
                }
            }
        }
        true
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            if row > 0 && row % 3 == 0 {
                writeln!(f, "------+-------+------")?;
            }
            for (col, cell) in cells.iter().enumerate() {
                if col > 0 && col % 3 == 0 {
                    write!(f, "| ")?;
                }
                match cell {
                    Some(d) => write!(f, "{} ", d)?,
                    None => write!(f, ". ")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PUZZLE: &str =
        "040100050107003960520008000000000017000906800803050620090060543600080700250097100";

    #[test]
    fn test_wire_round_trip() {
        let grid = Grid::from_wire(PUZZLE).unwrap();
        assert_eq!(grid.to_wire(), PUZZLE);
    }

    #[test]
    fn test_from_wire_rejects_bad_input() {
        assert!(Grid::from_wire("123").is_none());
        assert!(Grid::from_wire(&"x".repeat(81)).is_none());
    }

    #[test]
    fn test_candidates_exclude_peers() {
        let mut grid = Grid::empty();
        grid.set(0, 0, Some(5));
        grid.set(0, 5, Some(3));
        grid.set(4, 1, Some(7));

        let mask = grid.candidates(0, 1);
        assert_eq!(mask & (1 << 4), 0); // 5 in same row
        assert_eq!(mask & (1 << 2), 0); // 3 in same row
        assert_eq!(mask & (1 << 6), 0); // 7 in same column
        assert_ne!(mask & (1 << 0), 0); // 1 still legal
    }

    #[test]
    fn test_consistency() {
        let mut grid = Grid::from_wire(PUZZLE).unwrap();
        assert!(grid.is_consistent());

        // Duplicate the 4 from (0,1) into the same row
        grid.set(0, 8, Some(4));
        assert!(!grid.is_consistent());
    }
}
