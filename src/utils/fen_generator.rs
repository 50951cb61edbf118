//! Board-to-placement-string generator; the inverse of `parse_layout` for
//! piece kinds and colors.

use crate::game_state::chess_rules::BOARD_SIZE;
use crate::game_state::chess_types::*;

pub fn generate_layout(board: &Board) -> String {
    let mut out = String::with_capacity(72);

    for y in 0..BOARD_SIZE as u8 {
        let mut empty_run = 0u8;
        for x in 0..BOARD_SIZE as u8 {
            match board.piece_at(Position::new_unchecked(x, y)) {
                Some(piece) => {
                    if empty_run > 0 {
                        out.push(char::from(b'0' + empty_run));
                        empty_run = 0;
                    }
                    out.push(piece_char(&piece));
                }
                None => empty_run += 1,
            }
        }
        if empty_run > 0 {
            out.push(char::from(b'0' + empty_run));
        }
        if usize::from(y) + 1 < BOARD_SIZE {
            out.push('/');
        }
    }

    out
}

fn piece_char(piece: &Piece) -> char {
    match piece.color {
        Color::White => piece.kind.letter(),
        Color::Black => piece.kind.letter().to_ascii_lowercase(),
    }
}
