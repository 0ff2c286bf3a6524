use anyhow::{anyhow, Result};
use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use crate::{board::*, lines::*, HEIGHT, WIDTH};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum GameState {
    Playing,
    PlayerOneWin,
    PlayerTwoWin,
    Draw,
}

/// A full game session: the authoritative board, the side to move and how
/// the game stands
#[derive(Clone)]
pub struct Game {
    pub board: Board,
    pub to_move: Cell,
    pub state: GameState,
    /// The cells of the winning line, captured when a win is detected
    pub winning_cells: Option<[(usize, usize); 4]>,
}

impl Game {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Cell::PlayerOne,
            state: GameState::Playing,
            winning_cells: None,
        }
    }

    /// Starts the session over with an empty board
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Replays a game from a string of column digits, played alternately
    /// from player 1
    pub fn from_moves(moves: &str) -> Result<Self> {
        let mut game = Self::new();

        for column_char in moves.chars() {
            match column_char.to_digit(10) {
                Some(column) => {
                    let _ = game.play_checked(column as usize)?;
                }
                _ => return Err(anyhow!("could not parse '{}' as a valid move", column_char)),
            }
        }
        Ok(game)
    }

    /// Plays a piece for the side to move, first validating the move
    ///
    /// On success the game state is updated, the winning line is captured
    /// if the move completed one and the turn passes to the other player.
    pub fn play_checked(&mut self, column: usize) -> Result<GameState> {
        if self.state != GameState::Playing {
            return Err(anyhow!("Invalid move, the game is already over"));
        }
        if column >= WIDTH {
            return Err(anyhow!(
                "Invalid move, column {} out of range. Columns must be between 0 and {}",
                column,
                WIDTH - 1
            ));
        }
        let row = self
            .board
            .next_open_row(column)
            .ok_or_else(|| anyhow!("Invalid move, column {} full", column))?;

        self.board.drop_piece(row, column, self.to_move);

        if let Some(line) = winning_line(&self.board, self.to_move) {
            self.winning_cells = Some(line);
            self.state = match self.to_move {
                Cell::PlayerOne => GameState::PlayerOneWin,
                _ => GameState::PlayerTwoWin,
            };
        } else if self.board.is_full() {
            self.state = GameState::Draw;
        }
        self.to_move = self.to_move.opponent();

        Ok(self.state)
    }

    /// Draws the board to the terminal, highlighting the winning line once
    /// the game has one
    pub fn display(&self) -> Result<()> {
        let mut stdout = stdout();

        let cols: String = (0..WIDTH).map(|x| x.to_string()).collect();
        stdout.queue(PrintStyledContent(style(cols + "\n")))?;

        for row in 0..HEIGHT {
            for column in 0..WIDTH {
                let highlighted = self
                    .winning_cells
                    .map_or(false, |cells| cells.contains(&(row, column)));
                let background = if highlighted {
                    Color::DarkGreen
                } else {
                    Color::DarkBlue
                };

                stdout.queue(PrintStyledContent(
                    style("O")
                        .attribute(Attribute::Bold)
                        .on(background)
                        .with(match self.board.get(row, column) {
                            Cell::PlayerOne => Color::Red,
                            Cell::PlayerTwo => Color::Yellow,
                            Cell::Empty => background,
                        }),
                ))?;
            }
            stdout.queue(PrintStyledContent(style("\n")))?;
        }
        stdout.flush()?;
        Ok(())
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
