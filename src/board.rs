//! The game board and its placement primitives

use anyhow::{anyhow, Result};

use crate::{error::GameError, terminal, Side, HEIGHT, WIDTH, WINDOW_LENGTH};

/// Row and column steps of the four window directions:
/// horizontal, vertical, diagonal `/` and diagonal `\`
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Cell {
    Empty,
    Player,
    Bot,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The side owning a piece in this cell, if any
    pub fn side(&self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::Player => Some(Side::Player),
            Cell::Bot => Some(Side::Bot),
        }
    }
}

/// A Connect 4 board
///
/// Row 0 is the bottom row. Pieces only ever enter a column at its lowest
/// empty row, so the filled cells of every column are contiguous from row 0
/// as long as moves go through [`Board::next_open_row`] or
/// [`Board::drop_piece`].
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Board {
    cells: [Cell; WIDTH * HEIGHT], // cells are stored left-to-right, bottom-to-top
}

impl Board {
    /// Creates an empty board
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; WIDTH * HEIGHT],
        }
    }

    /// Builds a position from a string of 1-indexed column digits, with
    /// the sides taking turns starting with `first`
    pub fn from_moves<S: AsRef<str>>(moves: S, first: Side) -> Result<Self> {
        let mut board = Self::new();
        let mut side = first;

        for column_char in moves.as_ref().chars() {
            match column_char.to_digit(10).map(|c| c as usize) {
                Some(column @ 1..=WIDTH) => {
                    // abort if the position is already decided
                    if terminal::is_terminal(&board) {
                        return Err(anyhow!("Invalid position, game is over"));
                    }
                    board
                        .drop_piece(column - 1, side)
                        .map_err(|_| anyhow!("Invalid move, column {} full", column))?;
                    side = side.opponent();
                }
                _ => return Err(anyhow!("could not parse '{}' as a valid move", column_char)),
            }
        }
        Ok(board)
    }

    pub fn get(&self, row: usize, column: usize) -> Cell {
        self.cells[column + WIDTH * row]
    }

    /// Whether a piece can be dropped into `column`
    pub fn is_valid_column(&self, column: usize) -> bool {
        column < WIDTH && self.get(HEIGHT - 1, column).is_empty()
    }

    /// Returns the lowest empty row of `column`
    pub fn next_open_row(&self, column: usize) -> Result<usize, GameError> {
        if column >= WIDTH {
            return Err(GameError::InvalidColumn(column));
        }
        (0..HEIGHT)
            .find(|&row| self.get(row, column).is_empty())
            .ok_or(GameError::InvalidColumn(column))
    }

    /// Sets a cell without any checks, callers must pick the row with
    /// [`Board::next_open_row`]
    pub fn place(&mut self, row: usize, column: usize, side: Side) {
        self.cells[column + WIDTH * row] = side.cell();
    }

    /// Drops a piece into `column`, returning the row it landed in
    pub fn drop_piece(&mut self, column: usize, side: Side) -> Result<usize, GameError> {
        let row = self.next_open_row(column)?;
        self.place(row, column, side);
        Ok(row)
    }

    /// The playable columns in ascending order, empty when the board is full
    pub fn valid_columns(&self) -> Vec<usize> {
        (0..WIDTH)
            .filter(|&column| self.is_valid_column(column))
            .collect()
    }

    pub fn is_full(&self) -> bool {
        (0..WIDTH).all(|column| !self.is_valid_column(column))
    }

    /// The number of pieces `side` has on the board
    pub fn count(&self, side: Side) -> usize {
        let cell = side.cell();
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// The cells of `column`, bottom to top
    pub fn column(&self, column: usize) -> impl Iterator<Item = Cell> + '_ {
        (0..HEIGHT).map(move |row| self.get(row, column))
    }

    /// The same position with the pieces of both sides exchanged
    pub fn swap_sides(&self) -> Self {
        let mut swapped = self.clone();
        for cell in swapped.cells.iter_mut() {
            *cell = match cell {
                Cell::Player => Cell::Bot,
                Cell::Bot => Cell::Player,
                Cell::Empty => Cell::Empty,
            };
        }
        swapped
    }

    /// Every run of [`WINDOW_LENGTH`] cells that fits on the board: all
    /// horizontal windows, then vertical, then both diagonals
    pub fn windows(&self) -> impl Iterator<Item = [Cell; WINDOW_LENGTH]> + '_ {
        DIRECTIONS.iter().flat_map(move |&(d_row, d_column)| {
            (0..HEIGHT)
                .flat_map(|row| (0..WIDTH).map(move |column| (row, column)))
                .filter_map(move |(row, column)| self.window(row, column, d_row, d_column))
        })
    }

    /// The window starting at (`row`, `column`) in the given direction, or
    /// `None` if it leaves the board
    fn window(
        &self,
        row: usize,
        column: usize,
        d_row: isize,
        d_column: isize,
    ) -> Option<[Cell; WINDOW_LENGTH]> {
        let reach = WINDOW_LENGTH as isize - 1;
        let end_row = row as isize + d_row * reach;
        let end_column = column as isize + d_column * reach;
        if end_row < 0 || end_row >= HEIGHT as isize || end_column >= WIDTH as isize {
            return None;
        }

        let mut window = [Cell::Empty; WINDOW_LENGTH];
        for (i, cell) in window.iter_mut().enumerate() {
            let r = (row as isize + d_row * i as isize) as usize;
            let c = (column as isize + d_column * i as isize) as usize;
            *cell = self.get(r, c);
        }
        Some(window)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
