//! Conversions between board positions and algebraic squares (e.g. `e4`).
//!
//! Files `a..=h` map to `x == 0..=7`. Ranks count up from White's side, so
//! rank `1` is `y == 7` and rank `8` is `y == 0`.

use std::fmt;

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::Position;

/// Convert an algebraic square (for example: "e4") to a position. The file
/// letter may be upper case.
pub fn algebraic_to_position(square: &str) -> ChessResult<Position> {
    let mut chars = square.chars();
    let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(ChessError::InvalidAlgebraicString(square.to_owned()));
    };

    let file = file.to_ascii_lowercase();
    if !('a'..='h').contains(&file) {
        return Err(ChessError::InvalidAlgebraicChar(file));
    }
    if !('1'..='8').contains(&rank) {
        return Err(ChessError::InvalidAlgebraicChar(rank));
    }

    let x = file as u8 - b'a';
    let y = b'8' - rank as u8;
    Position::new(x, y)
}

/// Convert a position to its algebraic square (for example: "e4").
pub fn position_to_algebraic(position: Position) -> String {
    position.to_string()
}

#[inline]
pub fn file_char(position: Position) -> char {
    char::from(b'a' + position.x())
}

#[inline]
pub fn rank_char(position: Position) -> char {
    char::from(b'8' - position.y())
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", file_char(*self), rank_char(*self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_and_centre_squares() {
        let a8 = algebraic_to_position("a8").expect("a8 should parse");
        assert_eq!((a8.x(), a8.y()), (0, 0));
        let h1 = algebraic_to_position("h1").expect("h1 should parse");
        assert_eq!((h1.x(), h1.y()), (7, 7));
        let e4 = algebraic_to_position("e4").expect("e4 should parse");
        assert_eq!((e4.x(), e4.y()), (4, 4));
        assert_eq!(position_to_algebraic(e4), "e4");
    }

    #[test]
    fn every_square_converts_back_to_itself() {
        for position in Position::all() {
            let name = position_to_algebraic(position);
            assert_eq!(algebraic_to_position(&name), Ok(position));
        }
    }

    #[test]
    fn upper_case_file_is_accepted() {
        assert_eq!(algebraic_to_position("E2"), algebraic_to_position("e2"));
    }

    #[test]
    fn malformed_squares_are_rejected() {
        assert_eq!(
            algebraic_to_position("e"),
            Err(ChessError::InvalidAlgebraicString("e".to_owned()))
        );
        assert_eq!(
            algebraic_to_position("e44"),
            Err(ChessError::InvalidAlgebraicString("e44".to_owned()))
        );
        assert_eq!(algebraic_to_position("i4"), Err(ChessError::InvalidAlgebraicChar('i')));
        assert_eq!(algebraic_to_position("e9"), Err(ChessError::InvalidAlgebraicChar('9')));
    }
}
