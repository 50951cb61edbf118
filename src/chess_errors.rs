//! Errors used throughout the rules core.
//!
//! `ChessError` is the single error type for the fallible entry points of the
//! crate: building positions from raw coordinates, parsing algebraic squares,
//! and parsing board layout strings.
//!
//! Usage guidelines:
//! - Parsing and construction helpers return `ChessResult<...>`.
//! - Game actions (committing a move for the wrong side, moving from an empty
//!   square, acting after the game ended) are not errors. Session transitions
//!   report whether they were applied and otherwise leave state untouched.
//! - A missing king is an invariant violation. Detector functions return
//!   `None`/`false` for it instead of an error.

/// Unified error type for the rules core.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChessError {
    /// A coordinate pair fell outside `0..=7` on either axis.
    #[error("position ({x}, {y}) is outside the board")]
    PositionOutOfBounds { x: u8, y: u8 },

    /// A single character in an algebraic square was invalid.
    ///
    /// Payload: the offending character (a file outside `a..=h` or a rank
    /// outside `1..=8`).
    #[error("invalid algebraic character '{0}'")]
    InvalidAlgebraicChar(char),

    /// An algebraic square did not have the two-character `<file><rank>` form.
    #[error("invalid algebraic square \"{0}\"")]
    InvalidAlgebraicString(String),

    /// Unexpected piece letter or digit in a board layout string.
    #[error("invalid board layout token '{0}'")]
    InvalidLayoutToken(char),

    /// Board layout string had the wrong number of ranks or files.
    #[error("malformed board layout: {0}")]
    InvalidLayoutForm(String),
}

pub type ChessResult<T> = Result<T, ChessError>;
