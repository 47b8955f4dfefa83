//! Detection of finished games

use crate::{board::Board, Side};

/// The state of a game, always derived from the board
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum GameOutcome {
    InProgress,
    Win(Side),
    Draw,
}

/// Whether `side` has four pieces in a row horizontally, vertically or
/// along either diagonal
pub fn has_four_in_a_row(board: &Board, side: Side) -> bool {
    let cell = side.cell();
    board
        .windows()
        .any(|window| window.iter().all(|&c| c == cell))
}

/// Whether the game has ended, by a win for either side or a full board
pub fn is_terminal(board: &Board) -> bool {
    has_four_in_a_row(board, Side::Player)
        || has_four_in_a_row(board, Side::Bot)
        || board.valid_columns().is_empty()
}

pub fn outcome(board: &Board) -> GameOutcome {
    if has_four_in_a_row(board, Side::Player) {
        GameOutcome::Win(Side::Player)
    } else if has_four_in_a_row(board, Side::Bot) {
        GameOutcome::Win(Side::Bot)
    } else if board.valid_columns().is_empty() {
        GameOutcome::Draw
    } else {
        GameOutcome::InProgress
    }
}
