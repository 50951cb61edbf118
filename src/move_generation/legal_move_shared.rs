//! Helpers shared by the per-piece generators: direction tables and the two
//! movement shapes (single steps and slides).

use crate::game_state::chess_types::*;

pub const ORTHOGONAL_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

pub const DIAGONAL_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];

pub const ALL_DIRECTIONS: [(i8, i8); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

/// True if a piece of `color` may end its move on `to`: empty or enemy-held.
#[inline]
pub fn is_available(board: &Board, to: Position, color: Color) -> bool {
    board.is_empty(to) || board.is_opponent(to, color)
}

/// One step along each offset; keeps destinations that are empty or hold an
/// opponent piece.
pub fn generate_step_moves(
    board: &Board,
    from: Position,
    color: Color,
    offsets: &[(i8, i8)],
    out: &mut Vec<Position>,
) {
    for &(dx, dy) in offsets {
        let Some(to) = from.offset(dx, dy) else {
            continue;
        };
        if is_available(board, to, color) {
            out.push(to);
        }
    }
}

/// Walk each direction until the first occupied square. Empty squares are
/// kept; the blocker is kept only when it belongs to the opponent.
pub fn generate_sliding_moves(
    board: &Board,
    from: Position,
    color: Color,
    directions: &[(i8, i8)],
    out: &mut Vec<Position>,
) {
    for &(dx, dy) in directions {
        let mut current = from.offset(dx, dy);
        while let Some(to) = current {
            match board.piece_at(to) {
                None => out.push(to),
                Some(blocker) => {
                    if blocker.is_opponent_of(color) {
                        out.push(to);
                    }
                    break;
                }
            }
            current = to.offset(dx, dy);
        }
    }
}
