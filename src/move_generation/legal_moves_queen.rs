use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{generate_sliding_moves, ALL_DIRECTIONS};

pub fn generate_queen_moves(board: &Board, from: Position, color: Color, out: &mut Vec<Position>) {
    generate_sliding_moves(board, from, color, &ALL_DIRECTIONS, out);
}
