//! Depth-bounded game tree search

use crate::{board::*, heuristic::*, lines::*};

/// The score of a position won by either player
pub const WIN_SCORE: i32 = 1_000_000;

/// An agent to choose moves for the second player
///
/// # Notes
/// This agent uses a classical minimax tree search with alpha-beta pruning,
/// cut off at a fixed depth and backed by a heuristic evaluation of the
/// cut-off positions. Deeper searches play stronger and slower.
///
/// # Position Scoring
/// A position won by `PlayerTwo` scores 1,000,000 and one won by
/// `PlayerOne` scores -1,000,000, so forced lines always dominate. A full
/// board scores 0. Any other position reached at the depth limit is scored
/// by a heuristic weighting partial lines and center control, always from
/// `PlayerTwo`'s perspective.
#[derive(Clone)]
pub struct Searcher {
    board: Board,

    /// The number of nodes searched by this `Searcher` so far (for diagnostics only)
    pub node_count: usize,
}

impl Searcher {
    /// Creates a new `Searcher` for a position
    pub fn new(board: Board) -> Self {
        Self {
            board,
            node_count: 0,
        }
    }

    /// Searches the position `depth` plies ahead
    ///
    /// Returns the column chosen for `PlayerTwo` and the score backed up
    /// for it (see [Position Scoring]). The column is `None` when the
    /// position is already terminal or `depth` is 0.
    ///
    /// [Position Scoring]: #position-scoring
    pub fn search(&mut self, depth: usize) -> (Option<usize>, i32) {
        self.minimax(depth, i32::MIN, i32::MAX, true)
    }

    /// Performs game tree search
    ///
    /// Maximizing levels pick the best column for `PlayerTwo` and
    /// minimizing levels the worst, tightening the alpha-beta window as
    /// branches complete. Columns are tried in ascending order and only a
    /// strictly better score replaces the current choice, so ties keep the
    /// lowest column.
    fn minimax(
        &mut self,
        depth: usize,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> (Option<usize>, i32) {
        self.node_count += 1;

        // terminal positions and the depth horizon end the recursion
        if has_win(&self.board, Cell::PlayerTwo) {
            return (None, WIN_SCORE);
        }
        if has_win(&self.board, Cell::PlayerOne) {
            return (None, -WIN_SCORE);
        }
        if self.board.is_full() {
            return (None, 0);
        }
        if depth == 0 {
            return (None, score_position(&self.board, Cell::PlayerTwo));
        }

        if maximizing {
            let mut column = None;
            let mut value = i32::MIN;
            for candidate in self.board.valid_moves() {
                let mut next = self.clone();
                next.node_count = 0;

                // a playable column always has a landing row
                let row = next.board.next_open_row(candidate).unwrap();
                next.board.drop_piece(row, candidate, Cell::PlayerTwo);

                let (_, score) = next.minimax(depth - 1, alpha, beta, false);
                self.node_count += next.node_count;

                if score > value {
                    value = score;
                    column = Some(candidate);
                }
                alpha = alpha.max(value);
                if alpha >= beta {
                    break;
                }
            }
            (column, value)
        } else {
            let mut column = None;
            let mut value = i32::MAX;
            for candidate in self.board.valid_moves() {
                let mut next = self.clone();
                next.node_count = 0;

                let row = next.board.next_open_row(candidate).unwrap();
                next.board.drop_piece(row, candidate, Cell::PlayerOne);

                let (_, score) = next.minimax(depth - 1, alpha, beta, true);
                self.node_count += next.node_count;

                if score < value {
                    value = score;
                    column = Some(candidate);
                }
                beta = beta.min(value);
                if alpha >= beta {
                    break;
                }
            }
            (column, value)
        }
    }
}

/// Chooses the column `PlayerTwo` should play in the given position
///
/// Runs a minimax search `depth` plies deep and returns its column, or
/// `None` when the game is already decided, the board is full or `depth`
/// is 0. The caller's board is never modified.
pub fn choose_move(board: &Board, depth: usize) -> Option<usize> {
    let mut searcher = Searcher::new(*board);
    let (column, _) = searcher.search(depth);
    column
}
