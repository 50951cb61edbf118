//! Short algebraic notation for move-history display.
//!
//! Non-pawn moves start with the piece letter, captures insert `x` (pawn
//! captures are prefixed with the origin file), promotions end in `=Q`.
//! Check and mate suffixes are not added.

use crate::game_state::chess_move::ChessMove;
use crate::game_state::chess_types::PieceKind;
use crate::utils::algebraic::file_char;

pub fn format_move(mv: &ChessMove) -> String {
    let mut notation = String::with_capacity(6);

    if mv.piece.kind != PieceKind::Pawn {
        notation.push(mv.piece.kind.letter());
    }

    if mv.is_capture() {
        if mv.piece.kind == PieceKind::Pawn {
            notation.push(file_char(mv.from));
        }
        notation.push('x');
    }

    notation.push_str(&mv.to.to_string());

    if let Some(promotion) = mv.promotion {
        notation.push('=');
        notation.push(promotion.letter());
    }

    notation
}

/// One numbered line of the history: White's move and Black's reply, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovePair {
    pub number: usize,
    pub white: String,
    pub black: Option<String>,
}

pub fn group_move_pairs(moves: &[ChessMove]) -> Vec<MovePair> {
    moves
        .chunks(2)
        .enumerate()
        .map(|(i, pair)| MovePair {
            number: i + 1,
            white: format_move(&pair[0]),
            black: pair.get(1).map(format_move),
        })
        .collect()
}
