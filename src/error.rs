use crate::Side;

/// Contract violations raised by the board, the search and the game session
#[derive(Copy, Clone, Eq, PartialEq, Debug, thiserror::Error)]
pub enum GameError {
    /// The column is off the board or already full
    #[error("invalid move, column {0} is out of range or full")]
    InvalidColumn(usize),

    /// The search was asked for a move on a board without legal moves
    #[error("no legal moves left to search")]
    SearchPrecondition,

    #[error("the game is already over")]
    GameOver,

    #[error("it is not {0:?}'s turn")]
    OutOfTurn(Side),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_column_display() {
        assert_eq!(
            GameError::InvalidColumn(9).to_string(),
            "invalid move, column 9 is out of range or full"
        );
    }

    #[test]
    fn out_of_turn_display() {
        assert_eq!(
            GameError::OutOfTurn(Side::Bot).to_string(),
            "it is not Bot's turn"
        );
    }
}
