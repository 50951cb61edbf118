//! Crate root module declarations for the chess rules core.
//!
//! Board model and session types live under `game_state`, per-piece move
//! rules, check detection and terminal detection under `move_generation`,
//! and notation/layout/rendering helpers under `utils`. Presentation code
//! drives a game through `GameState` and the free functions re-exported
//! below.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod chess_move;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod draw_offer;
    pub mod game_state;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod move_generator;
    pub mod perft;
    pub mod terminal_evaluation;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod move_notation;
    pub mod render_game_state;
}

pub use chess_errors::{ChessError, ChessResult};
pub use game_state::board::create_board;
pub use game_state::chess_move::{CapturedPieces, CheckStatus, ChessMove, GameStatus, Player};
pub use game_state::chess_types::{Board, Color, GameState, Piece, PieceId, PieceKind, Position};
pub use game_state::draw_offer::{DrawResponder, FixedDrawResponder, RandomDrawResponder};
pub use move_generation::legal_move_apply::apply_move;
pub use move_generation::legal_move_checks::{find_king_position, is_king_in_check};
pub use move_generation::legal_move_generator::{legal_moves, legal_moves_with, pseudo_legal_moves};
pub use move_generation::move_generator::MoveGenOptions;
pub use move_generation::terminal_evaluation::{evaluate_terminal, GameOverReason, GameOverStatus};
pub use utils::algebraic::{algebraic_to_position, position_to_algebraic};
