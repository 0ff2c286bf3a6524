//! Position evaluation for cut-off search nodes

use crate::{board::*, HEIGHT, WIDTH};

/// Scores a single four-cell window from `piece`'s perspective
///
/// A completed four counts 100, an open three 5 and an open two 2, while
/// an opposing open three counts -50. Everything else is worth nothing,
/// including a completed opposing four, which is the tree search's concern
/// rather than the evaluation's.
pub fn evaluate_window(window: [Cell; 4], piece: Cell) -> i32 {
    let count = |cell: Cell| window.iter().filter(|&&c| c == cell).count();

    let own = count(piece);
    let empty = count(Cell::Empty);
    let theirs = count(piece.opponent());

    let mut score = 0;
    if own == 4 {
        score += 100;
    } else if own == 3 && empty == 1 {
        score += 5;
    } else if own == 2 && empty == 2 {
        score += 2;
    }
    if theirs == 3 && empty == 1 {
        score -= 50;
    }
    score
}

/// Scores the whole position from `piece`'s perspective
///
/// Adds a bonus of 6 per own piece in the center column, then the window
/// scores of every horizontal, vertical and diagonal four-cell window on
/// the board.
pub fn score_position(board: &Board, piece: Cell) -> i32 {
    let mut score = 0;

    // center column bonus
    let center_count = (0..HEIGHT)
        .filter(|&row| board.get(row, WIDTH / 2) == piece)
        .count();
    score += center_count as i32 * 6;

    // horizontal windows
    for row in 0..HEIGHT {
        for column in 0..WIDTH - 3 {
            let window = [
                board.get(row, column),
                board.get(row, column + 1),
                board.get(row, column + 2),
                board.get(row, column + 3),
            ];
            score += evaluate_window(window, piece);
        }
    }

    // vertical windows
    for row in 0..HEIGHT - 3 {
        for column in 0..WIDTH {
            let window = [
                board.get(row, column),
                board.get(row + 1, column),
                board.get(row + 2, column),
                board.get(row + 3, column),
            ];
            score += evaluate_window(window, piece);
        }
    }

    // diagonal windows, both directions
    for row in 0..HEIGHT - 3 {
        for column in 0..WIDTH - 3 {
            let down_right = [
                board.get(row, column),
                board.get(row + 1, column + 1),
                board.get(row + 2, column + 2),
                board.get(row + 3, column + 3),
            ];
            score += evaluate_window(down_right, piece);

            let up_right = [
                board.get(row + 3, column),
                board.get(row + 2, column + 1),
                board.get(row + 1, column + 2),
                board.get(row, column + 3),
            ];
            score += evaluate_window(up_right, piece);
        }
    }

    score
}
