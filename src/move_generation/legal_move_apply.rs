//! Move application.
//!
//! `apply_move` never mutates its input: it returns a new board with the
//! piece relocated, marked as moved, and promoted when a pawn reaches the
//! far back rank. Recording a capture is the caller's job; the captured
//! piece is whatever `board.piece_at(to)` held before the call.

use crate::game_state::chess_rules::promotion_rank;
use crate::game_state::chess_types::*;

/// Piece kind every promotion produces.
pub const AUTO_PROMOTION_KIND: PieceKind = PieceKind::Queen;

pub fn apply_move(board: &Board, from: Position, to: Position) -> Board {
    let mut next = board.clone();

    let Some(piece) = board.piece_at(from) else {
        return next;
    };

    let placed = if is_promotion(&piece, to) {
        promote(&piece)
    } else {
        piece.moved()
    };

    next.set(to, Some(placed));
    next.set(from, None);
    next
}

/// True if moving `piece` onto `to` promotes it.
#[inline]
pub fn is_promotion(piece: &Piece, to: Position) -> bool {
    piece.kind == PieceKind::Pawn && to.y() == promotion_rank(piece.color)
}

/// New piece replacing a promoting pawn. Its id is derived from the pawn's,
/// so replaying the same moves recreates the same queen.
fn promote(pawn: &Piece) -> Piece {
    Piece {
        kind: AUTO_PROMOTION_KIND,
        color: pawn.color,
        has_moved: false,
        id: pawn.id.derived(AUTO_PROMOTION_KIND),
    }
}
