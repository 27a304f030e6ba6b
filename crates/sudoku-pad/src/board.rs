use thiserror::Error;

/// Number of cells on a classic board.
pub const CELL_COUNT: usize = 81;

/// A cell index left the valid range. This is a programming defect, not a
/// user-facing condition; it propagates instead of being handled locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cell index {0} is outside 1..=81")]
pub struct OutOfRangeError(pub usize);

/// One of the 81 board positions.
///
/// `value` is what the user typed; `hint` is a solver-provided digit shown
/// placeholder-style. A hint is always recorded when written, even for
/// cells that hold a value; the renderer suppresses it in that case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    index: usize,
    value: Option<u8>,
    hint: Option<u8>,
}

impl Cell {
    fn new(index: usize) -> Self {
        Self {
            index,
            value: None,
            hint: None,
        }
    }

    /// 1-based row-major index, fixed at creation.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn value(&self) -> Option<u8> {
        self.value
    }

    pub fn hint(&self) -> Option<u8> {
        self.hint
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_none()
    }
}

/// The 81-cell grid model, exclusively owned by the interaction controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Vec<Cell>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// 81 empty cells, indices 1..=81.
    pub fn new() -> Self {
        Self {
            cells: (1..=CELL_COUNT).map(Cell::new).collect(),
        }
    }

    pub fn contains(&self, index: usize) -> bool {
        (1..=CELL_COUNT).contains(&index)
    }

    pub fn cell(&self, index: usize) -> Result<&Cell, OutOfRangeError> {
        self.cells
            .get(index.wrapping_sub(1))
            .ok_or(OutOfRangeError(index))
    }

    fn cell_mut(&mut self, index: usize) -> Result<&mut Cell, OutOfRangeError> {
        self.cells
            .get_mut(index.wrapping_sub(1))
            .ok_or(OutOfRangeError(index))
    }

    /// Set or clear a cell's value. Digits outside 1..=9 normalize to empty.
    pub fn set_value(&mut self, index: usize, value: Option<u8>) -> Result<(), OutOfRangeError> {
        self.cell_mut(index)?.value = value.filter(|d| (1..=9).contains(d));
        Ok(())
    }

    /// Set or clear a cell's hint. Digits outside 1..=9 normalize to empty.
    pub fn set_hint(&mut self, index: usize, hint: Option<u8>) -> Result<(), OutOfRangeError> {
        self.cell_mut(index)?.hint = hint.filter(|d| (1..=9).contains(d));
        Ok(())
    }

    /// Drop every hint on the board.
    pub fn clear_hints(&mut self) {
        for cell in &mut self.cells {
            cell.hint = None;
        }
    }

    /// Cells in index order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.cells().count(), CELL_COUNT);
        for (i, cell) in board.cells().enumerate() {
            assert_eq!(cell.index(), i + 1);
            assert!(cell.is_empty());
            assert!(cell.hint().is_none());
        }
    }

    #[test]
    fn test_index_bounds() {
        let board = Board::new();
        assert!(board.cell(1).is_ok());
        assert!(board.cell(81).is_ok());
        assert_eq!(board.cell(0).unwrap_err(), OutOfRangeError(0));
        assert_eq!(board.cell(82).unwrap_err(), OutOfRangeError(82));
    }

    #[test]
    fn test_set_value_normalizes_out_of_range_digits() {
        let mut board = Board::new();
        board.set_value(5, Some(12)).unwrap();
        assert!(board.cell(5).unwrap().is_empty());

        board.set_value(5, Some(9)).unwrap();
        assert_eq!(board.cell(5).unwrap().value(), Some(9));
    }

    #[test]
    fn test_clear_hints() {
        let mut board = Board::new();
        for index in 1..=CELL_COUNT {
            board.set_hint(index, Some(3)).unwrap();
        }
        board.clear_hints();
        assert!(board.cells().all(|c| c.hint().is_none()));
    }
}
