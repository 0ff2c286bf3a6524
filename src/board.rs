use crate::{HEIGHT, WIDTH};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Cell {
    PlayerOne,
    PlayerTwo,
    Empty,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            _ => false,
        }
    }

    /// Returns the other player's piece, leaving `Empty` unchanged
    pub fn opponent(&self) -> Cell {
        match self {
            Cell::PlayerOne => Cell::PlayerTwo,
            Cell::PlayerTwo => Cell::PlayerOne,
            Cell::Empty => Cell::Empty,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Board {
    cells: [[Cell; WIDTH]; HEIGHT], // row 0 is the top of the board
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; WIDTH]; HEIGHT],
        }
    }

    pub fn get(&self, row: usize, column: usize) -> Cell {
        self.cells[row][column]
    }

    /// Whether `column` still has room for a piece
    pub fn is_valid_move(&self, column: usize) -> bool {
        column < WIDTH && self.cells[0][column].is_empty()
    }

    /// The row a piece dropped in `column` will settle in, scanning the
    /// column from the bottom up. `None` if the column is full.
    pub fn next_open_row(&self, column: usize) -> Option<usize> {
        (0..HEIGHT)
            .rev()
            .find(|&row| self.cells[row][column].is_empty())
    }

    /// Writes `piece` at the given cell
    ///
    /// The cell must be the landing cell of its column, as reported by
    /// [`next_open_row`](#method.next_open_row).
    pub fn drop_piece(&mut self, row: usize, column: usize, piece: Cell) {
        debug_assert_eq!(self.next_open_row(column), Some(row));
        self.cells[row][column] = piece;
    }

    /// The playable columns, in ascending order
    pub fn valid_moves(&self) -> impl Iterator<Item = usize> + '_ {
        (0..WIDTH).filter(move |&column| self.is_valid_move(column))
    }

    pub fn is_full(&self) -> bool {
        !self.cells[0].iter().any(|cell| cell.is_empty())
    }

    /// Returns a copy of the board with the two players' pieces swapped
    ///
    /// Search and evaluation always act for the second player, so a first
    /// player move can be found by searching the swapped board.
    pub fn swapped(&self) -> Self {
        let mut swapped = *self;
        for row in swapped.cells.iter_mut() {
            for cell in row.iter_mut() {
                *cell = cell.opponent();
            }
        }
        swapped
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
