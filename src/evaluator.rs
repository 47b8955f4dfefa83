//! Static evaluation of unfinished positions
//!
//! A position is scored for one side by counting its pieces in the centre
//! column and by looking at every window of [`WINDOW_LENGTH`] cells on the
//! board. These weights decide how well the computer plays, so changing any
//! of them changes its strength.

use crate::{
    board::{Board, Cell},
    Score, Side, HEIGHT, WIDTH, WINDOW_LENGTH,
};

/// Bonus per own piece in the centre column
pub const CENTER_WEIGHT: Score = 3;
/// A window completely filled by own pieces
pub const FOUR_SCORE: Score = 100;
/// Three own pieces and an empty cell
pub const THREE_SCORE: Score = 5;
/// Two own pieces and two empty cells
pub const TWO_SCORE: Score = 2;
/// Three opponent pieces and an empty cell
pub const OPPONENT_THREE_PENALTY: Score = 4;

/// The number of windows on the board, over all four directions
pub const WINDOW_COUNT: usize = HEIGHT * (WIDTH - WINDOW_LENGTH + 1)
    + WIDTH * (HEIGHT - WINDOW_LENGTH + 1)
    + 2 * (WIDTH - WINDOW_LENGTH + 1) * (HEIGHT - WINDOW_LENGTH + 1);

/// An upper bound on the magnitude of any [`score_position`] result
pub const MAX_HEURISTIC_SCORE: Score =
    WINDOW_COUNT as Score * FOUR_SCORE + HEIGHT as Score * CENTER_WEIGHT;

/// Scores a single window for `side`
pub fn evaluate_window(window: &[Cell; WINDOW_LENGTH], side: Side) -> Score {
    let count = |cell: Cell| window.iter().filter(|&&c| c == cell).count();
    let own = count(side.cell());
    let opponent = count(side.opponent().cell());
    let empty = count(Cell::Empty);

    let mut score = 0;
    if own == 4 {
        score += FOUR_SCORE;
    } else if own == 3 && empty == 1 {
        score += THREE_SCORE;
    } else if own == 2 && empty == 2 {
        score += TWO_SCORE;
    }

    if opponent == 3 && empty == 1 {
        score -= OPPONENT_THREE_PENALTY;
    }
    score
}

/// Estimates how favourable `board` is for `side`
///
/// The score has no fixed scale and is only comparable to scores of other
/// positions for the same side.
pub fn score_position(board: &Board, side: Side) -> Score {
    let center = board
        .column(WIDTH / 2)
        .filter(|&cell| cell == side.cell())
        .count() as Score;

    let windows: Score = board
        .windows()
        .map(|window| evaluate_window(&window, side))
        .sum();

    center * CENTER_WEIGHT + windows
}
