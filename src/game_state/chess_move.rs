//! History records and derived status types owned by a session.

use crate::game_state::chess_types::*;

/// One committed move. `piece` is the mover as it was before the move.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChessMove {
    pub from: Position,
    pub to: Position,
    pub piece: Piece,
    pub captured_piece: Option<Piece>,
    /// Kind the pawn turned into, when the move promoted.
    pub promotion: Option<PieceKind>,
    /// Reserved; castling is not generated.
    pub is_castle: bool,
    /// Reserved; en passant is not generated.
    pub is_en_passant: bool,
}

impl ChessMove {
    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured_piece.is_some()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CheckStatus {
    pub is_check: bool,
    /// Side whose king is attacked.
    pub color: Option<Color>,
    pub king_position: Option<Position>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    Waiting,
    Active,
    Check,
    Checkmate,
    Stalemate,
    Draw,
}

impl GameStatus {
    /// Moves, resignations and draw offers are only accepted in these states.
    #[inline]
    pub const fn is_live(self) -> bool {
        matches!(self, GameStatus::Active | GameStatus::Check)
    }

    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(
            self,
            GameStatus::Checkmate | GameStatus::Stalemate | GameStatus::Draw
        )
    }
}

/// Pieces taken so far, grouped by the side that captured them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CapturedPieces {
    pub white: Vec<Piece>,
    pub black: Vec<Piece>,
}

impl CapturedPieces {
    #[inline]
    pub fn by(&self, capturer: Color) -> &[Piece] {
        match capturer {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }

    pub(crate) fn record(&mut self, capturer: Color, piece: Piece) {
        match capturer {
            Color::White => self.white.push(piece),
            Color::Black => self.black.push(piece),
        }
    }
}

/// A seat at the table.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    pub id: uuid::Uuid,
    pub name: String,
    pub color: Color,
}

impl Player {
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        Self {
            id: uuid::Uuid::new_v4(),
            name: name.into(),
            color,
        }
    }
}
