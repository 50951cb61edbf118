//! King movement: the eight neighbouring squares.
//!
//! Castling is accepted as an option but never produces moves; this rule set
//! does not include it.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{generate_step_moves, ALL_DIRECTIONS};

pub fn generate_king_moves(
    board: &Board,
    from: Position,
    color: Color,
    include_castling: bool,
    out: &mut Vec<Position>,
) {
    generate_step_moves(board, from, color, &ALL_DIRECTIONS, out);

    if include_castling {
        generate_castling_moves(board, from, color, out);
    }
}

fn generate_castling_moves(_board: &Board, _from: Position, _color: Color, _out: &mut Vec<Position>) {
    // TODO: castling (king/rook unmoved, empty and unattacked transit squares).
}
