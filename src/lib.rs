//! A computer opponent for the board game 'Connect 4'
//!
//! The opponent picks its moves with a depth-bounded minimax search using
//! alpha-beta pruning, scoring unfinished positions with a simple windowed
//! pattern heuristic.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_minimax::{board::Board, search::best_move, Side, INFINITY};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! // the human opens, the computer has three in a row along the bottom
//! let board = Board::from_moves("515263", Side::Player)?;
//! let result = best_move(&board, 3, -INFINITY, INFINITY, true)?;
//!
//! assert_eq!(result.column, Some(3));
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod board;

pub mod terminal;

pub mod evaluator;

pub mod search;

pub mod error;

pub mod game;

pub mod arena;


pub use board::{Board, Cell};
pub use error::GameError;
pub use game::Game;
pub use search::{best_move, SearchResult, Searcher, INFINITY, WIN_SCORE};
pub use terminal::GameOutcome;

/// The width of the game board in tiles
pub const WIDTH: usize = 7;

/// The height of the game board in tiles
pub const HEIGHT: usize = 6;

/// The number of tiles in a row needed to win, and the length of a scoring window
pub const WINDOW_LENGTH: usize = 4;

/// The search depth the computer plays at unless told otherwise
pub const DEFAULT_DEPTH: usize = 5;

/// Scores of positions and search results
pub type Score = i64;

// a board smaller than a window can never be won
const_assert!(WIDTH >= WINDOW_LENGTH);
const_assert!(HEIGHT >= WINDOW_LENGTH);

/// One of the two sides of the game
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Side {
    /// The human player
    Player,
    /// The computer
    Bot,
}

impl Side {
    /// The side moving after this one
    pub fn opponent(self) -> Self {
        match self {
            Side::Player => Side::Bot,
            Side::Bot => Side::Player,
        }
    }

    /// The board cell holding a piece of this side
    pub fn cell(self) -> Cell {
        match self {
            Side::Player => Cell::Player,
            Side::Bot => Cell::Bot,
        }
    }
}
