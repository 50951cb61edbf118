use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{generate_sliding_moves, DIAGONAL_DIRECTIONS};

pub fn generate_bishop_moves(board: &Board, from: Position, color: Color, out: &mut Vec<Position>) {
    generate_sliding_moves(board, from, color, &DIAGONAL_DIRECTIONS, out);
}

#[cfg(test)]
mod tests {
    use super::generate_bishop_moves;
    use crate::game_state::chess_types::*;
    use crate::utils::fen_parser::parse_layout;

    #[test]
    fn bishop_on_open_board_covers_both_diagonals() {
        let board = parse_layout("8/8/8/8/3B4/8/8/8").expect("layout should parse");
        let mut out = Vec::new();
        generate_bishop_moves(&board, Position::new(3, 4).expect("d4"), Color::White, &mut out);
        assert_eq!(out.len(), 13);
    }

    #[test]
    fn bishop_is_blocked_by_pieces_in_the_start_position() {
        let board = crate::game_state::board::create_board();
        let mut out = Vec::new();
        generate_bishop_moves(&board, Position::new(2, 7).expect("c1"), Color::White, &mut out);
        assert!(out.is_empty());
    }
}
