//! Rook movement along ranks and files.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{generate_sliding_moves, ORTHOGONAL_DIRECTIONS};

pub fn generate_rook_moves(board: &Board, from: Position, color: Color, out: &mut Vec<Position>) {
    generate_sliding_moves(board, from, color, &ORTHOGONAL_DIRECTIONS, out);
}

#[cfg(test)]
mod tests {
    use super::generate_rook_moves;
    use crate::game_state::chess_types::*;
    use crate::utils::fen_parser::parse_layout;

    #[test]
    fn rook_on_empty_board_has_fourteen_targets() {
        let board = parse_layout("8/8/8/8/8/8/8/R7").expect("layout should parse");
        let mut out = Vec::new();
        generate_rook_moves(&board, Position::new(0, 7).expect("a1"), Color::White, &mut out);
        assert_eq!(out.len(), 14);
    }

    #[test]
    fn rook_never_passes_the_first_blocker() {
        // Black rook on a8; white knight on a6, white pawn on a2 behind it.
        let board = parse_layout("r7/8/N7/8/8/8/P7/8").expect("layout should parse");
        let mut out = Vec::new();
        generate_rook_moves(&board, Position::new(0, 0).expect("a8"), Color::Black, &mut out);
        assert!(out.contains(&Position::new(0, 2).expect("a6")));
        assert!(!out.contains(&Position::new(0, 3).expect("a5")));
        assert!(!out.contains(&Position::new(0, 6).expect("a2")));
        assert_eq!(out.len(), 2 + 7);
    }
}
