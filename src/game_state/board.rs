//! Board model: an 8x8 grid of optional pieces indexed `[y][x]`.
//!
//! Boards are snapshots. Every public operation that changes the contents
//! returns a new `Board` and leaves the receiver untouched, so references to
//! earlier boards (history, renderers) keep observing the same position.

use crate::game_state::chess_rules::{back_rank, pawn_start_rank, BOARD_SIZE};
use crate::game_state::chess_types::*;

const BACK_RANK_ORDER: [PieceKind; BOARD_SIZE] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    squares: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Standard starting position with freshly created pieces.
    pub fn initial() -> Self {
        let mut board = Self::empty();
        for color in [Color::White, Color::Black] {
            let back = back_rank(color);
            let pawns = pawn_start_rank(color);
            for (x, kind) in BACK_RANK_ORDER.into_iter().enumerate() {
                let x = x as u8;
                board.set(Position::new_unchecked(x, back), Some(Piece::new(kind, color)));
                board.set(
                    Position::new_unchecked(x, pawns),
                    Some(Piece::new(PieceKind::Pawn, color)),
                );
            }
        }
        board
    }

    #[inline]
    pub fn piece_at(&self, position: Position) -> Option<Piece> {
        self.squares[position.y() as usize][position.x() as usize]
    }

    #[inline]
    pub fn is_empty(&self, position: Position) -> bool {
        self.piece_at(position).is_none()
    }

    /// True when `position` holds a piece not belonging to `color`.
    #[inline]
    pub fn is_opponent(&self, position: Position, color: Color) -> bool {
        self.piece_at(position)
            .is_some_and(|piece| piece.is_opponent_of(color))
    }

    /// New board identical to this one except for the content of `position`.
    pub fn with_piece(&self, position: Position, piece: Option<Piece>) -> Board {
        let mut next = self.clone();
        next.set(position, piece);
        next
    }

    /// Every occupied square in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        Position::all().filter_map(move |position| {
            self.piece_at(position).map(|piece| (position, piece))
        })
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    /// In-place write. Only used while building a board that nobody else can
    /// observe yet (construction, `with_piece`, move application).
    #[inline]
    pub(crate) fn set(&mut self, position: Position, piece: Option<Piece>) {
        self.squares[position.y() as usize][position.x() as usize] = piece;
    }
}

/// Standard starting position.
#[inline]
pub fn create_board() -> Board {
    Board::initial()
}
