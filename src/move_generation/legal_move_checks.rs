//! Check detection.
//!
//! Attack questions go through `PseudoLegalMoveGenerator` only. Asking for
//! self-check filtered moves here would recurse back into this module.

use tracing::warn;

use crate::game_state::chess_types::*;
use crate::move_generation::move_generator::{MoveGenerator, PseudoLegalMoveGenerator};

/// Linear scan for the king of `color`.
pub fn find_king_position(board: &Board, color: Color) -> Option<Position> {
    board
        .pieces_of(color)
        .find(|(_, piece)| piece.kind == PieceKind::King)
        .map(|(position, _)| position)
}

/// True if any piece of `attacker_color` has a pseudo-legal move onto `square`.
pub fn is_square_attacked(board: &Board, square: Position, attacker_color: Color) -> bool {
    board
        .pieces_of(attacker_color)
        .any(|(from, _)| PseudoLegalMoveGenerator.generate_moves(board, from).contains(&square))
}

pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    let Some(king) = find_king_position(board, color) else {
        warn!(?color, "no king on board; treating as not in check");
        return false;
    };
    is_square_attacked(board, king, color.opposite())
}
