//! A heuristic agent for playing the board game 'Connect 4'
//!
//! This agent uses a depth-bounded game tree search with a hand-tuned
//! position heuristic to pick strong moves quickly.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_engine::{choose_move, Game};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! // player 1 threatens the bottom row, the agent has to block
//! let game = Game::from_moves("001122")?;
//! let block = choose_move(&game.board, 2);
//!
//! assert!(block == Some(3));
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod board;

pub mod lines;

pub mod heuristic;

pub mod search;

pub mod game;

mod test;

/// The width of the game board in tiles
pub const WIDTH: usize = 7;

/// The height of the game board in tiles
pub const HEIGHT: usize = 6;

// ensure that a four-in-a-row fits along both axes of the given dimensions
const_assert!(WIDTH >= 4 && HEIGHT >= 4);

pub use board::{Board, Cell};
pub use game::{Game, GameState};
pub use heuristic::{evaluate_window, score_position};
pub use lines::{has_win, is_terminal, winning_line};
pub use search::{choose_move, Searcher, WIN_SCORE};
