use super::board::{Board, Cell};

/// Length of a winning line.
pub const SECTION_LEN: usize = 4;

/// One straight line of four cells, read in scan order.
pub type Section = [Cell; SECTION_LEN];

/// Number of sections a `rows x cols` board yields: horizontal runs,
/// vertical runs, then one term per diagonal family. Zero when either
/// dimension cannot fit a 4-length line.
pub fn section_count(rows: usize, cols: usize) -> usize {
    if rows < SECTION_LEN || cols < SECTION_LEN {
        return 0;
    }
    (cols - 3) * rows + (rows - 3) * cols + 2 * (rows - 3) * (cols - 3)
}

/// Enumerate every 4-cell line on the board in a fixed order: horizontal
/// sections, then vertical, then "\"-diagonals, then "/"-diagonals.
/// Downstream scans rely on this order being stable.
pub fn sections(board: &Board) -> Vec<Section> {
    let (rows, cols) = (board.rows(), board.cols());
    let count = section_count(rows, cols);
    let mut sections = Vec::with_capacity(count);
    if count == 0 {
        return sections;
    }

    // Horizontal sections, read left to right
    for col in 0..cols - 3 {
        for row in 0..rows {
            sections.push([
                board.get(row, col),
                board.get(row, col + 1),
                board.get(row, col + 2),
                board.get(row, col + 3),
            ]);
        }
    }

    // Vertical sections, read top to bottom
    for row in 0..rows - 3 {
        for col in 0..cols {
            sections.push([
                board.get(row, col),
                board.get(row + 1, col),
                board.get(row + 2, col),
                board.get(row + 3, col),
            ]);
        }
    }

    // "\" diagonal sections, read from the top-left end
    for row in 0..rows - 3 {
        for col in 0..cols - 3 {
            sections.push([
                board.get(row, col),
                board.get(row + 1, col + 1),
                board.get(row + 2, col + 2),
                board.get(row + 3, col + 3),
            ]);
        }
    }

    // "/" diagonal sections, read from the bottom-left end
    for row in 3..rows {
        for col in 0..cols - 3 {
            sections.push([
                board.get(row, col),
                board.get(row - 1, col + 1),
                board.get(row - 2, col + 2),
                board.get(row - 3, col + 3),
            ]);
        }
    }

    sections
}
