//! Per-square move generation pipeline.
//!
//! Dispatches on the piece kind to the per-piece generators, then (when
//! asked) applies each candidate to a scratch board and drops destinations
//! that leave the mover's own king in check. Filtering costs one check scan
//! per candidate, which is fine at this board size.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::move_generation::move_generator::MoveGenOptions;

/// Movement-pattern destinations for the piece on `from`, ignoring whether
/// the mover's king ends up attacked.
pub fn pseudo_legal_moves(board: &Board, from: Position) -> Vec<Position> {
    generate_for_piece(board, from, false)
}

/// Legal destinations for the piece on `from` with default options.
pub fn legal_moves(board: &Board, from: Position) -> Vec<Position> {
    legal_moves_with(board, from, MoveGenOptions::default())
}

pub fn legal_moves_with(board: &Board, from: Position, options: MoveGenOptions) -> Vec<Position> {
    let moves = generate_for_piece(board, from, options.include_castling);
    if !options.filter_self_check {
        return moves;
    }

    let Some(piece) = board.piece_at(from) else {
        return moves;
    };

    moves
        .into_iter()
        .filter(|&to| {
            let next = apply_move(board, from, to);
            !is_king_in_check(&next, piece.color)
        })
        .collect()
}

/// Every legal `(from, to)` pair for `color`, in board scan order.
pub fn legal_moves_for_color(board: &Board, color: Color) -> Vec<(Position, Position)> {
    board
        .pieces_of(color)
        .flat_map(|(from, _)| legal_moves(board, from).into_iter().map(move |to| (from, to)))
        .collect()
}

fn generate_for_piece(board: &Board, from: Position, include_castling: bool) -> Vec<Position> {
    let Some(piece) = board.piece_at(from) else {
        return Vec::new();
    };

    let mut out = Vec::with_capacity(32);
    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(board, from, piece.color, &mut out),
        PieceKind::Knight => generate_knight_moves(board, from, piece.color, &mut out),
        PieceKind::Bishop => generate_bishop_moves(board, from, piece.color, &mut out),
        PieceKind::Rook => generate_rook_moves(board, from, piece.color, &mut out),
        PieceKind::Queen => generate_queen_moves(board, from, piece.color, &mut out),
        PieceKind::King => {
            generate_king_moves(board, from, piece.color, include_castling, &mut out)
        }
    }
    out
}
