//! Piece-placement parser.
//!
//! Reads the board field of FEN (`rnbqkbnr/pppppppp/8/...`) into a `Board`.
//! Ranks are listed from `y == 0` (Black's back rank) to `y == 7`. Upper-case
//! letters are White, lower-case Black, digits `1..=8` skip empty squares.
//! A pawn away from its start rank is marked as having moved; every other
//! piece is fresh.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::{pawn_start_rank, BOARD_SIZE};
use crate::game_state::chess_types::*;

pub fn parse_layout(layout: &str) -> ChessResult<Board> {
    let layout = layout.split_whitespace().next().unwrap_or_default();
    let ranks: Vec<&str> = layout.split('/').collect();
    if ranks.len() != BOARD_SIZE {
        return Err(ChessError::InvalidLayoutForm(format!(
            "expected {BOARD_SIZE} ranks, found {}",
            ranks.len()
        )));
    }

    let mut board = Board::empty();
    for (y, rank_str) in ranks.iter().enumerate() {
        let y = y as u8;
        let mut x = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessError::InvalidLayoutToken(ch));
                }
                x += empty_count as usize;
                continue;
            }

            let kind = PieceKind::from_letter(ch).ok_or(ChessError::InvalidLayoutToken(ch))?;
            if x >= BOARD_SIZE {
                return Err(ChessError::InvalidLayoutForm(format!(
                    "rank {} overflows the board",
                    y + 1
                )));
            }
            let color = if ch.is_ascii_uppercase() {
                Color::White
            } else {
                Color::Black
            };

            let mut piece = Piece::new(kind, color);
            piece.has_moved = kind == PieceKind::Pawn && y != pawn_start_rank(color);
            board.set(Position::new_unchecked(x as u8, y), Some(piece));
            x += 1;
        }

        if x != BOARD_SIZE {
            return Err(ChessError::InvalidLayoutForm(format!(
                "rank {} covers {x} files",
                y + 1
            )));
        }
    }

    Ok(board)
}

#[cfg(test)]
mod tests {
    use super::parse_layout;
    use crate::chess_errors::ChessError;
    use crate::game_state::chess_rules::STARTING_LAYOUT;
    use crate::game_state::chess_types::*;

    #[test]
    fn starting_layout_matches_the_initial_board() {
        let parsed = parse_layout(STARTING_LAYOUT).expect("start layout should parse");
        let initial = Board::initial();
        for position in Position::all() {
            let a = parsed.piece_at(position).map(|p| (p.kind, p.color, p.has_moved));
            let b = initial.piece_at(position).map(|p| (p.kind, p.color, p.has_moved));
            assert_eq!(a, b, "mismatch at {position}");
        }
    }

    #[test]
    fn trailing_fen_fields_are_ignored() {
        let board = parse_layout("8/8/8/8/8/8/8/4K3 w - - 0 1").expect("layout should parse");
        assert_eq!(board.pieces().count(), 1);
    }

    #[test]
    fn advanced_pawns_are_marked_as_moved() {
        let board = parse_layout("8/8/8/8/4P3/8/8/8").expect("layout should parse");
        let pawn = board
            .piece_at(Position::new(4, 4).expect("e4"))
            .expect("pawn on e4");
        assert!(pawn.has_moved);
    }

    #[test]
    fn malformed_layouts_are_rejected() {
        assert!(matches!(
            parse_layout("8/8/8"),
            Err(ChessError::InvalidLayoutForm(_))
        ));
        assert_eq!(
            parse_layout("8/8/8/8/8/8/8/4X3"),
            Err(ChessError::InvalidLayoutToken('X'))
        );
        assert!(matches!(
            parse_layout("8/8/8/8/8/8/8/7"),
            Err(ChessError::InvalidLayoutForm(_))
        ));
        assert!(matches!(
            parse_layout("8/8/8/8/8/8/8/8K"),
            Err(ChessError::InvalidLayoutForm(_))
        ));
        assert_eq!(
            parse_layout("8/8/8/8/8/8/8/9"),
            Err(ChessError::InvalidLayoutToken('9'))
        );
    }
}
