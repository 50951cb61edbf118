//! Canonical chess-rule constants.
//!
//! Board dimensions, the standard starting layout, and the per-color ranks
//! that pawn movement and promotion depend on. Rows are indexed top to
//! bottom: Black's back rank is `y == 0`, White's is `y == 7`.

use crate::game_state::chess_types::Color;

pub const BOARD_SIZE: usize = 8;

/// Standard starting layout as a piece-placement string, listed from `y == 0`
/// (Black's back rank) down to `y == 7` (White's back rank).
pub const STARTING_LAYOUT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

#[inline]
pub const fn back_rank(color: Color) -> u8 {
    match color {
        Color::White => 7,
        Color::Black => 0,
    }
}

/// Row from which a pawn of `color` may advance two squares.
#[inline]
pub const fn pawn_start_rank(color: Color) -> u8 {
    match color {
        Color::White => 6,
        Color::Black => 1,
    }
}

/// Row on which a pawn of `color` is promoted (the opponent's back rank).
#[inline]
pub const fn promotion_rank(color: Color) -> u8 {
    back_rank(color.opposite())
}
