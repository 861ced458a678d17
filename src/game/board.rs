use std::fmt;

use smallvec::{smallvec, SmallVec};

use crate::error::MoveError;

use super::player::Player;

/// Standard board shape: six rows by seven columns.
pub const DEFAULT_ROWS: usize = 6;
pub const DEFAULT_COLS: usize = 7;

/// Open columns of one position, in ascending order. Inline capacity covers
/// the default board width so the search hot path never allocates.
pub type LegalMoves = SmallVec<[usize; DEFAULT_COLS]>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

impl Cell {
    /// Signed encoding: +1 for Red, -1 for Yellow, 0 for empty.
    pub fn value(self) -> i8 {
        match self {
            Cell::Empty => 0,
            Cell::Red => 1,
            Cell::Yellow => -1,
        }
    }
}

/// A Connect Four grid with runtime dimensions.
/// Row 0 is the top, row `rows - 1` is the bottom.
///
/// Cells are stored row-major in a `SmallVec` whose inline capacity covers
/// the default 6x7 board, so the per-branch clones made during search stay
/// off the heap at standard sizes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: SmallVec<[Cell; DEFAULT_ROWS * DEFAULT_COLS]>,
}

impl Board {
    /// Create a new empty board with the given shape.
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(rows >= 1 && cols >= 1, "board must be at least 1x1");
        Board {
            rows,
            cols,
            cells: smallvec![Cell::Empty; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get the cell at a specific position
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.cols + col]
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= self.cols {
            return true;
        }
        self.get(0, col) != Cell::Empty
    }

    /// Columns that can still take a piece, ascending. Empty iff the board
    /// is full.
    pub fn legal_moves(&self) -> LegalMoves {
        (0..self.cols)
            .filter(|&col| !self.is_column_full(col))
            .collect()
    }

    /// Drop a piece for `player` into a column. Scans the column bottom-up
    /// and fills the first empty cell, returning its `(row, column)`.
    ///
    /// A full or out-of-range column is an error, never a silent no-op.
    pub fn drop_piece(&mut self, col: usize, player: Player) -> Result<(usize, usize), MoveError> {
        if col >= self.cols {
            return Err(MoveError::InvalidColumn {
                column: col,
                cols: self.cols,
            });
        }
        for row in (0..self.rows).rev() {
            if self.get(row, col) == Cell::Empty {
                self.cells[row * self.cols + col] = player.to_cell();
                return Ok((row, col));
            }
        }
        Err(MoveError::ColumnFull(col))
    }

    /// Remove the last piece dropped into a column. Scans top-down and
    /// clears the first occupied cell, returning its `(row, column)`.
    ///
    /// Exists for verification and tests; the search explores on clones and
    /// never undoes a move.
    pub fn undo_move(&mut self, col: usize) -> Result<(usize, usize), MoveError> {
        if col >= self.cols {
            return Err(MoveError::InvalidColumn {
                column: col,
                cols: self.cols,
            });
        }
        for row in 0..self.rows {
            if self.get(row, col) != Cell::Empty {
                self.cells[row * self.cols + col] = Cell::Empty;
                return Ok((row, col));
            }
        }
        Err(MoveError::ColumnEmpty(col))
    }

    /// Number of empty cells; zero means the board is full.
    pub fn empty_cells(&self) -> usize {
        self.cells.iter().filter(|&&c| c == Cell::Empty).count()
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..self.cols).all(|col| self.is_column_full(col))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_COLS)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.cols {
                if col > 0 {
                    write!(f, " ")?;
                }
                let glyph = match self.get(row, col) {
                    Cell::Empty => '.',
                    Cell::Red => 'R',
                    Cell::Yellow => 'Y',
                };
                write!(f, "{glyph}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        for (rows, cols) in [(1, 1), (4, 4), (6, 7), (8, 9)] {
            let board = Board::new(rows, cols);
            for row in 0..rows {
                for col in 0..cols {
                    assert_eq!(board.get(row, col), Cell::Empty);
                }
            }
            assert_eq!(board.empty_cells(), rows * cols);
        }
    }

    #[test]
    fn test_default_board_shape() {
        let board = Board::default();
        assert_eq!(board.rows(), 6);
        assert_eq!(board.cols(), 7);
    }

    #[test]
    fn test_drop_piece_lands_bottom_and_stacks() {
        let mut board = Board::default();

        let landed = board.drop_piece(3, Player::Red).unwrap();
        assert_eq!(landed, (5, 3));
        assert_eq!(board.get(5, 3), Cell::Red);

        let landed = board.drop_piece(3, Player::Yellow).unwrap();
        assert_eq!(landed, (4, 3));
        assert_eq!(board.get(4, 3), Cell::Yellow);
    }

    #[test]
    fn test_drop_piece_column_full() {
        let mut board = Board::default();
        for _ in 0..board.rows() {
            board.drop_piece(0, Player::Red).unwrap();
        }
        assert!(board.is_column_full(0));
        assert_eq!(
            board.drop_piece(0, Player::Yellow),
            Err(MoveError::ColumnFull(0))
        );
    }

    #[test]
    fn test_drop_piece_invalid_column() {
        let mut board = Board::default();
        assert_eq!(
            board.drop_piece(7, Player::Red),
            Err(MoveError::InvalidColumn { column: 7, cols: 7 })
        );
    }

    #[test]
    fn test_undo_clears_topmost_piece() {
        let mut board = Board::default();
        board.drop_piece(2, Player::Red).unwrap();
        board.drop_piece(2, Player::Yellow).unwrap();

        assert_eq!(board.undo_move(2), Ok((4, 2)));
        assert_eq!(board.get(4, 2), Cell::Empty);
        assert_eq!(board.get(5, 2), Cell::Red);
    }

    #[test]
    fn test_undo_empty_column() {
        let mut board = Board::default();
        assert_eq!(board.undo_move(5), Err(MoveError::ColumnEmpty(5)));
    }

    #[test]
    fn test_apply_then_undo_round_trips() {
        let mut board = Board::default();
        board.drop_piece(0, Player::Red).unwrap();
        board.drop_piece(3, Player::Yellow).unwrap();
        board.drop_piece(3, Player::Red).unwrap();

        let before = board.clone();
        board.drop_piece(3, Player::Yellow).unwrap();
        board.undo_move(3).unwrap();
        assert_eq!(board, before);
    }

    #[test]
    fn test_empty_cells_counts_down() {
        let mut board = Board::default();
        assert_eq!(board.empty_cells(), 42);
        board.drop_piece(1, Player::Red).unwrap();
        board.drop_piece(1, Player::Yellow).unwrap();
        board.drop_piece(4, Player::Red).unwrap();
        assert_eq!(board.empty_cells(), 39);
    }

    #[test]
    fn test_legal_moves_all_columns_when_empty() {
        let board = Board::default();
        assert_eq!(board.legal_moves().as_slice(), &[0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_legal_moves_skips_full_columns() {
        let mut board = Board::default();
        for _ in 0..board.rows() {
            board.drop_piece(3, Player::Red).unwrap();
        }
        assert_eq!(board.legal_moves().as_slice(), &[0, 1, 2, 4, 5, 6]);
    }

    #[test]
    fn test_full_board_has_no_legal_moves() {
        let mut board = Board::default();
        for col in 0..board.cols() {
            for _ in 0..board.rows() {
                board.drop_piece(col, Player::Red).unwrap();
            }
        }
        assert!(board.is_full());
        assert_eq!(board.empty_cells(), 0);
        assert!(board.legal_moves().is_empty());
    }

    #[test]
    fn test_gravity_keeps_cells_above_pieces_empty() {
        let mut board = Board::default();
        board.drop_piece(2, Player::Red).unwrap();
        board.drop_piece(2, Player::Yellow).unwrap();
        for row in 0..4 {
            assert_eq!(board.get(row, 2), Cell::Empty);
        }
    }

    #[test]
    fn test_display_grid() {
        let mut board = Board::new(2, 2);
        board.drop_piece(0, Player::Red).unwrap();
        assert_eq!(board.to_string(), ". .\nR .\n");
    }
}
