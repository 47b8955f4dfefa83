//! Minimax search with alpha-beta pruning

use log::debug;
use static_assertions::const_assert;

use crate::{
    board::Board,
    error::GameError,
    evaluator::{score_position, MAX_HEURISTIC_SCORE},
    terminal::{has_four_in_a_row, is_terminal},
    Score, Side,
};

/// The score of a position won by the searching side
pub const WIN_SCORE: Score = 100_000_000_000_000;

/// The bound of an unlimited search window
pub const INFINITY: Score = Score::MAX;

// wins and losses must outrank every heuristic score
const_assert!(WIN_SCORE > MAX_HEURISTIC_SCORE);

/// The outcome of a search: the move to play and its score
///
/// `column` is `None` when the searched position was a leaf, i.e. the depth
/// was exhausted or the game was already over.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct SearchResult {
    pub column: Option<usize>,
    pub score: Score,
}

/// A minimax agent playing for one side
///
/// # Position Scoring
/// Scores are always from the point of view of the searching side. A won
/// position scores [`WIN_SCORE`], a lost one `-WIN_SCORE` and a drawn one 0.
/// Positions at the depth limit get the static evaluator's score, which is
/// always far smaller in magnitude than [`WIN_SCORE`].
#[derive(Clone, Debug)]
pub struct Searcher {
    side: Side,

    /// The number of nodes searched by this `Searcher` so far (for diagnostics only)
    pub node_count: usize,
}

impl Searcher {
    /// Creates a new `Searcher` maximising the score of `side`
    pub fn new(side: Side) -> Self {
        Self {
            side,
            node_count: 0,
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    /// Searches `depth` plies ahead for the best move
    ///
    /// `maximizing` tells whether the searching side is the one to move.
    /// Fails if the board has no legal moves left.
    pub fn best_move(
        &mut self,
        board: &Board,
        depth: usize,
        alpha: Score,
        beta: Score,
        maximizing: bool,
    ) -> Result<SearchResult, GameError> {
        if board.valid_columns().is_empty() {
            return Err(GameError::SearchPrecondition);
        }

        let start_count = self.node_count;
        let result = self.minimax(board, depth, alpha, beta, maximizing)?;
        debug!(
            "{:?} searched {} nodes at depth {}: column {:?}, score {}",
            self.side,
            self.node_count - start_count,
            depth,
            result.column,
            result.score
        );
        Ok(result)
    }

    /// Scores a leaf of the game tree
    fn leaf_score(&self, board: &Board) -> Score {
        if has_four_in_a_row(board, self.side) {
            WIN_SCORE
        } else if has_four_in_a_row(board, self.side.opponent()) {
            -WIN_SCORE
        } else if board.is_full() {
            0
        } else {
            score_position(board, self.side)
        }
    }

    /// Performs game tree search
    fn minimax(
        &mut self,
        board: &Board,
        depth: usize,
        mut alpha: Score,
        mut beta: Score,
        maximizing: bool,
    ) -> Result<SearchResult, GameError> {
        self.node_count += 1;

        if depth == 0 || is_terminal(board) {
            return Ok(SearchResult {
                // the caller knows which column led here
                column: None,
                score: self.leaf_score(board),
            });
        }

        let columns = board.valid_columns();
        let mover = if maximizing {
            self.side
        } else {
            self.side.opponent()
        };

        // only a strictly better score replaces the first candidate
        let mut best = SearchResult {
            column: columns.first().copied(),
            score: if maximizing { -INFINITY } else { INFINITY },
        };

        for column in columns {
            let mut next = board.clone();
            next.drop_piece(column, mover)?;

            let score = self
                .minimax(&next, depth - 1, alpha, beta, !maximizing)?
                .score;

            if maximizing {
                if score > best.score {
                    best = SearchResult {
                        column: Some(column),
                        score,
                    };
                }
                alpha = alpha.max(best.score);
            } else {
                if score < best.score {
                    best = SearchResult {
                        column: Some(column),
                        score,
                    };
                }
                beta = beta.min(best.score);
            }

            // the other side will never allow this branch
            if alpha >= beta {
                break;
            }
        }

        Ok(best)
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new(Side::Bot)
    }
}

/// Finds the computer's best move, searching `depth` plies ahead
///
/// The usual call for the computer's turn is
/// `best_move(&board, depth, -INFINITY, INFINITY, true)`.
pub fn best_move(
    board: &Board,
    depth: usize,
    alpha: Score,
    beta: Score,
    maximizing: bool,
) -> Result<SearchResult, GameError> {
    Searcher::new(Side::Bot).best_move(board, depth, alpha, beta, maximizing)
}
