//! Move generation seam.
//!
//! `MoveGenerator` lets callers choose between full legality and raw
//! movement patterns. Attack detection always goes through the pseudo-legal
//! generator; UI highlighting and terminal detection use the legal one.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_generator::{legal_moves_with, pseudo_legal_moves};

/// Switches for `legal_moves_with`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveGenOptions {
    /// Ask the king generator for castling moves. Castling is not part of
    /// this rule set, so the flag currently changes nothing.
    pub include_castling: bool,
    /// Drop destinations that would leave the mover's own king attacked.
    pub filter_self_check: bool,
}

impl Default for MoveGenOptions {
    fn default() -> Self {
        Self {
            include_castling: true,
            filter_self_check: true,
        }
    }
}

impl MoveGenOptions {
    /// Raw movement patterns, as used for attack detection.
    pub const PSEUDO_LEGAL: MoveGenOptions = MoveGenOptions {
        include_castling: false,
        filter_self_check: false,
    };
}

pub trait MoveGenerator: Send + Sync {
    /// Destinations for the piece on `from`; empty if the square is empty.
    fn generate_moves(&self, board: &Board, from: Position) -> Vec<Position>;
}

/// Destinations that obey movement rules and keep the mover's king safe.
pub struct LegalMoveGenerator;

/// Destinations that obey movement rules only.
pub struct PseudoLegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_moves(&self, board: &Board, from: Position) -> Vec<Position> {
        legal_moves_with(board, from, MoveGenOptions::default())
    }
}

impl MoveGenerator for PseudoLegalMoveGenerator {
    fn generate_moves(&self, board: &Board, from: Position) -> Vec<Position> {
        pseudo_legal_moves(board, from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::fen_parser::parse_layout;

    #[test]
    fn generators_differ_only_by_the_self_check_filter() {
        // White rook on e2 is pinned to its king by the black rook on e8.
        let board = parse_layout("4r2k/8/8/8/8/8/4R3/4K3").expect("layout should parse");
        let e2 = Position::new(4, 6).expect("e2");

        let pseudo = PseudoLegalMoveGenerator.generate_moves(&board, e2);
        let legal = LegalMoveGenerator.generate_moves(&board, e2);

        assert_eq!(pseudo.len(), 6 + 7);
        assert_eq!(legal.len(), 6);
        assert!(legal.iter().all(|to| to.x() == 4));
    }
}
