//! A game between a human and the computer

use log::info;

use crate::{
    board::Board,
    error::GameError,
    search::{SearchResult, Searcher, INFINITY},
    terminal::{self, GameOutcome},
    Side, DEFAULT_DEPTH,
};

/// A human-vs-computer game
///
/// The game owns the board; moves by either side are validated before the
/// board changes, and the outcome is recomputed from the board after every
/// move.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    turn: Side,
    depth: usize,
    searcher: Searcher,
}

impl Game {
    /// Starts a game with `first` to move and the computer searching
    /// `depth` plies ahead
    pub fn new(first: Side, depth: usize) -> Self {
        Self {
            board: Board::new(),
            turn: first,
            depth,
            searcher: Searcher::new(Side::Bot),
        }
    }

    /// Continues a game from `board` with `turn` to move
    pub fn from_position(board: Board, turn: Side, depth: usize) -> Self {
        Self {
            board,
            turn,
            depth,
            searcher: Searcher::new(Side::Bot),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side to move next
    pub fn turn(&self) -> Side {
        self.turn
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// The number of positions the computer has searched in this game
    pub fn node_count(&self) -> usize {
        self.searcher.node_count
    }

    pub fn outcome(&self) -> GameOutcome {
        terminal::outcome(&self.board)
    }

    /// Plays the human's move in `column`
    pub fn play_human(&mut self, column: usize) -> Result<GameOutcome, GameError> {
        self.play(Side::Player, column)
    }

    /// Lets the computer search for its move and plays it
    ///
    /// Returns the column played along with the search result.
    pub fn play_bot(&mut self) -> Result<(usize, SearchResult), GameError> {
        self.check_turn(Side::Bot)?;

        let result = self
            .searcher
            .best_move(&self.board, self.depth, -INFINITY, INFINITY, true)?;
        let column = result.column.ok_or(GameError::SearchPrecondition)?;
        self.play(Side::Bot, column)?;
        Ok((column, result))
    }

    /// Clears the board for a new game with `first` to move
    pub fn reset(&mut self, first: Side) {
        self.board = Board::new();
        self.turn = first;
        self.searcher.node_count = 0;
    }

    fn check_turn(&self, side: Side) -> Result<(), GameError> {
        if self.outcome() != GameOutcome::InProgress {
            return Err(GameError::GameOver);
        }
        if self.turn != side {
            return Err(GameError::OutOfTurn(side));
        }
        Ok(())
    }

    fn play(&mut self, side: Side, column: usize) -> Result<GameOutcome, GameError> {
        self.check_turn(side)?;
        if !self.board.is_valid_column(column) {
            return Err(GameError::InvalidColumn(column));
        }

        let row = self.board.next_open_row(column)?;
        self.board.place(row, column, side);
        self.turn = side.opponent();

        let outcome = self.outcome();
        info!("{:?} played column {} (row {}): {:?}", side, column, row, outcome);
        Ok(outcome)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Side::Player, DEFAULT_DEPTH)
    }
}
