use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{generate_step_moves, KNIGHT_OFFSETS};

pub fn generate_knight_moves(board: &Board, from: Position, color: Color, out: &mut Vec<Position>) {
    generate_step_moves(board, from, color, &KNIGHT_OFFSETS, out);
}

#[cfg(test)]
mod tests {
    use super::generate_knight_moves;
    use crate::game_state::chess_types::*;
    use crate::utils::fen_parser::parse_layout;

    #[test]
    fn knight_in_the_centre_has_eight_targets() {
        let board = parse_layout("8/8/8/8/3N4/8/8/8").expect("layout should parse");
        let d4 = Position::new(3, 4).expect("d4");
        let mut out = Vec::new();
        generate_knight_moves(&board, d4, Color::White, &mut out);
        assert_eq!(out.len(), 8);
    }

    #[test]
    fn knight_may_capture_but_not_land_on_own_piece() {
        // Knight b1 (1,7): own pawn on d2 (3,6), enemy pawn on c3 (2,5).
        let board = parse_layout("8/8/8/8/8/2p5/3P4/1N6").expect("layout should parse");
        let b1 = Position::new(1, 7).expect("b1");
        let mut out = Vec::new();
        generate_knight_moves(&board, b1, Color::White, &mut out);
        out.sort();
        assert_eq!(
            out,
            vec![
                Position::new(0, 5).expect("a3"),
                Position::new(2, 5).expect("c3"),
            ]
        );
    }
}
