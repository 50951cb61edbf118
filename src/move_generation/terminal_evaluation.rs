//! Terminal-state detection for the side to move.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::legal_moves;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameOverReason {
    Checkmate,
    Stalemate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOverStatus {
    pub is_over: bool,
    pub reason: Option<GameOverReason>,
}

impl GameOverStatus {
    pub const ONGOING: GameOverStatus = GameOverStatus {
        is_over: false,
        reason: None,
    };

    #[inline]
    pub const fn over(reason: GameOverReason) -> Self {
        Self {
            is_over: true,
            reason: Some(reason),
        }
    }
}

/// Decide whether `color`, to move, has any legal move. With none the game
/// is over: checkmate if the king is attacked, stalemate otherwise.
pub fn evaluate_terminal(board: &Board, color: Color) -> GameOverStatus {
    let has_move = board
        .pieces_of(color)
        .any(|(from, _)| !legal_moves(board, from).is_empty());
    if has_move {
        return GameOverStatus::ONGOING;
    }

    if is_king_in_check(board, color) {
        GameOverStatus::over(GameOverReason::Checkmate)
    } else {
        GameOverStatus::over(GameOverReason::Stalemate)
    }
}
