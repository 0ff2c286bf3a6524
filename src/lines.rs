//! Four-in-a-row detection

use crate::{board::*, HEIGHT, WIDTH};

/// Finds the first four-in-a-row held by `piece`
///
/// Lines are scanned in a fixed order: horizontals, then verticals, then
/// down-right diagonals, then up-right diagonals, top-to-bottom and
/// left-to-right within each family. The first complete line found is
/// returned as its four `(row, column)` cells, ordered along the line.
pub fn winning_line(board: &Board, piece: Cell) -> Option<[(usize, usize); 4]> {
    let line_at = |row: usize, column: usize, row_step: isize, column_step: isize| {
        let mut line = [(0, 0); 4];
        for (i, cell) in line.iter_mut().enumerate() {
            let r = (row as isize + row_step * i as isize) as usize;
            let c = (column as isize + column_step * i as isize) as usize;
            if board.get(r, c) != piece {
                return None;
            }
            *cell = (r, c);
        }
        Some(line)
    };

    // horizontals
    for row in 0..HEIGHT {
        for column in 0..WIDTH - 3 {
            if let Some(line) = line_at(row, column, 0, 1) {
                return Some(line);
            }
        }
    }
    // verticals
    for row in 0..HEIGHT - 3 {
        for column in 0..WIDTH {
            if let Some(line) = line_at(row, column, 1, 0) {
                return Some(line);
            }
        }
    }
    // down-right diagonals
    for row in 0..HEIGHT - 3 {
        for column in 0..WIDTH - 3 {
            if let Some(line) = line_at(row, column, 1, 1) {
                return Some(line);
            }
        }
    }
    // up-right diagonals
    for row in 3..HEIGHT {
        for column in 0..WIDTH - 3 {
            if let Some(line) = line_at(row, column, -1, 1) {
                return Some(line);
            }
        }
    }
    None
}

/// Whether `piece` holds any four-in-a-row
pub fn has_win(board: &Board, piece: Cell) -> bool {
    winning_line(board, piece).is_some()
}

/// Whether the position admits no further play: a player has won or the
/// board is full
pub fn is_terminal(board: &Board) -> bool {
    has_win(board, Cell::PlayerOne) || has_win(board, Cell::PlayerTwo) || board.is_full()
}
