//! Pawn movement: single and double pushes plus diagonal captures.
//!
//! En passant is not produced.

use crate::game_state::chess_rules::pawn_start_rank;
use crate::game_state::chess_types::*;

pub fn generate_pawn_moves(board: &Board, from: Position, color: Color, out: &mut Vec<Position>) {
    let forward = color.forward();

    if let Some(one_step) = from.offset(0, forward) {
        if board.is_empty(one_step) {
            out.push(one_step);

            if from.y() == pawn_start_rank(color) {
                if let Some(two_step) = one_step.offset(0, forward) {
                    if board.is_empty(two_step) {
                        out.push(two_step);
                    }
                }
            }
        }
    }

    for file_delta in [-1i8, 1i8] {
        let Some(to) = from.offset(file_delta, forward) else {
            continue;
        };
        if board.is_opponent(to, color) {
            out.push(to);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::generate_pawn_moves;
    use crate::game_state::chess_types::*;
    use crate::utils::fen_parser::parse_layout;

    fn at(x: u8, y: u8) -> Position {
        Position::new(x, y).expect("test square is on the board")
    }

    fn pawn_moves(layout: &str, from: Position, color: Color) -> Vec<Position> {
        let board = parse_layout(layout).expect("layout should parse");
        let mut out = Vec::new();
        generate_pawn_moves(&board, from, color, &mut out);
        out.sort();
        out
    }

    #[test]
    fn white_pawn_on_start_rank_can_double_step() {
        let moves = pawn_moves("8/8/8/8/8/8/4P3/8", at(4, 6), Color::White);
        assert_eq!(moves, vec![at(4, 4), at(4, 5)]);
    }

    #[test]
    fn black_pawn_moves_toward_higher_rows() {
        let moves = pawn_moves("8/3p4/8/8/8/8/8/8", at(3, 1), Color::Black);
        assert_eq!(moves, vec![at(3, 2), at(3, 3)]);
    }

    #[test]
    fn double_step_needs_both_squares_empty() {
        let blocked_far = pawn_moves("8/8/8/8/4n3/8/4P3/8", at(4, 6), Color::White);
        assert_eq!(blocked_far, vec![at(4, 5)]);

        let blocked_near = pawn_moves("8/8/8/8/8/4n3/4P3/8", at(4, 6), Color::White);
        assert!(blocked_near.is_empty());
    }

    #[test]
    fn pawn_off_start_rank_moves_one_square() {
        let moves = pawn_moves("8/8/8/8/4P3/8/8/8", at(4, 4), Color::White);
        assert_eq!(moves, vec![at(4, 3)]);
    }

    #[test]
    fn captures_only_onto_opponent_pieces() {
        // Enemy knight on d3 (3,5), own knight on f3 (5,5).
        let moves = pawn_moves("8/8/8/8/8/3n1N2/4P3/8", at(4, 6), Color::White);
        assert_eq!(moves, vec![at(3, 5), at(4, 4), at(4, 5)]);
    }

    #[test]
    fn edge_file_pawn_has_one_capture_diagonal() {
        let moves = pawn_moves("8/8/8/8/8/1n6/P7/8", at(0, 6), Color::White);
        assert_eq!(moves, vec![at(0, 4), at(0, 5), at(1, 5)]);
    }
}
