//! Plain data types shared by every subsystem: colors, piece kinds, pieces
//! with stable identity, and bounds-checked board positions.

use uuid::Uuid;

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::BOARD_SIZE;

pub use crate::game_state::board::Board;
pub use crate::game_state::game_state::GameState;

/// Side of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a forward pawn step. White advances toward `y == 0`.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }
}

/// Closed set of piece kinds. Pieces carry no behaviour; move rules are
/// selected by matching on this tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

pub const ALL_PIECE_KINDS: [PieceKind; 6] = [
    PieceKind::Pawn,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
    PieceKind::King,
];

impl PieceKind {
    /// Upper-case letter used by layout strings and move notation.
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        ALL_PIECE_KINDS
            .into_iter()
            .find(|kind| kind.letter() == letter.to_ascii_uppercase())
    }
}

/// Stable identity of a piece. Copies of a board keep the ids of the pieces
/// they copy, which lets history track a captured piece across snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PieceId(Uuid);

impl PieceId {
    #[inline]
    pub fn fresh() -> Self {
        PieceId(Uuid::new_v4())
    }

    /// Deterministic id for a piece created out of `self` (promotion), so
    /// replaying the same history yields the same ids.
    #[inline]
    pub fn derived(self, kind: PieceKind) -> Self {
        PieceId(Uuid::new_v5(&self.0, &[kind.letter() as u8]))
    }

    #[inline]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub has_moved: bool,
    pub id: PieceId,
}

impl Piece {
    pub fn new(kind: PieceKind, color: Color) -> Self {
        Self {
            kind,
            color,
            has_moved: false,
            id: PieceId::fresh(),
        }
    }

    /// Copy of this piece marked as having moved. Identity is preserved.
    #[inline]
    pub fn moved(self) -> Self {
        Self {
            has_moved: true,
            ..self
        }
    }

    #[inline]
    pub fn is_opponent_of(&self, color: Color) -> bool {
        self.color != color
    }
}

/// A square on the board, `(x, y)` with `(0, 0)` the visual top-left
/// (Black's back rank seen from White). Both coordinates are always in
/// `0..8`; the only ways to obtain one are the checked constructor and
/// `offset`, which returns `None` when leaving the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    x: u8,
    y: u8,
}

impl Position {
    pub fn new(x: u8, y: u8) -> ChessResult<Self> {
        if usize::from(x) >= BOARD_SIZE || usize::from(y) >= BOARD_SIZE {
            return Err(ChessError::PositionOutOfBounds { x, y });
        }
        Ok(Self { x, y })
    }

    /// Caller guarantees `x < 8 && y < 8`.
    #[inline]
    pub(crate) const fn new_unchecked(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn x(self) -> u8 {
        self.x
    }

    #[inline]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Position shifted by `(dx, dy)`, or `None` if that leaves the board.
    #[inline]
    pub fn offset(self, dx: i8, dy: i8) -> Option<Self> {
        let x = self.x as i8 + dx;
        let y = self.y as i8 + dy;
        if (0..BOARD_SIZE as i8).contains(&x) && (0..BOARD_SIZE as i8).contains(&y) {
            Some(Self::new_unchecked(x as u8, y as u8))
        } else {
            None
        }
    }

    /// Every square in row-major order: `y` outer, `x` inner.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE as u8)
            .flat_map(|y| (0..BOARD_SIZE as u8).map(move |x| Position::new_unchecked(x, y)))
    }
}
