//! Game session: the board, the move log, and everything derived from them.
//!
//! A `GameState` exclusively owns its current board and history. The only
//! way to advance it is through the transition methods below; each either
//! applies completely or leaves the session untouched and returns `false`.
//!
//! Status machine:
//! `Waiting -> Active` on `start`, then `Active <-> Check` as moves are
//! committed, ending in `Checkmate`, `Stalemate` or `Draw`. Resignation goes
//! straight to `Checkmate`. Undo rebuilds the position by replaying the
//! remaining history from the initial board and re-derives status from it;
//! games ended by resignation or an agreed draw cannot be undone.

use chrono::{DateTime, Utc};
use tracing::{debug, info};
use uuid::Uuid;

use crate::game_state::chess_move::*;
use crate::game_state::chess_types::*;
use crate::game_state::draw_offer::DrawResponder;
use crate::move_generation::legal_move_apply::{apply_move, is_promotion, AUTO_PROMOTION_KIND};
use crate::move_generation::legal_move_checks::{find_king_position, is_king_in_check};
use crate::move_generation::legal_move_generator::legal_moves;
use crate::move_generation::terminal_evaluation::{evaluate_terminal, GameOverReason};

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    id: Uuid,
    created_at: DateTime<Utc>,
    white_player: Option<Player>,
    black_player: Option<Player>,

    // Replay origin for undo; `board` is always `initial_board` + `moves`.
    initial_board: Board,
    board: Board,
    current_turn: Color,
    moves: Vec<ChessMove>,

    status: GameStatus,
    check: CheckStatus,
    captured_pieces: CapturedPieces,
    resigned: Option<Color>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Session in the `Waiting` state with the standard layout and no players.
    pub fn new() -> Self {
        Self::from_board(Board::initial())
    }

    /// Session in the `Waiting` state starting from an arbitrary layout,
    /// White to move.
    pub fn from_board(board: Board) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            white_player: None,
            black_player: None,
            initial_board: board.clone(),
            board,
            current_turn: Color::White,
            moves: Vec::new(),
            status: GameStatus::Waiting,
            check: CheckStatus::default(),
            captured_pieces: CapturedPieces::default(),
            resigned: None,
        }
    }

    /// Seat both players on a fresh starting position and go `Active`.
    pub fn start(&mut self, white: Player, black: Player) {
        info!(game_id = %self.id, white = %white.name, black = %black.name, "game started");
        self.white_player = Some(Player {
            color: Color::White,
            ..white
        });
        self.black_player = Some(Player {
            color: Color::Black,
            ..black
        });
        self.restart_from(Board::initial());
    }

    /// Back to a fresh starting position. Players stay seated; the session is
    /// `Active` when both seats are filled and `Waiting` otherwise.
    pub fn reset(&mut self) {
        info!(game_id = %self.id, "game reset");
        self.restart_from(Board::initial());
    }

    fn restart_from(&mut self, board: Board) {
        self.initial_board = board.clone();
        self.board = board;
        self.current_turn = Color::White;
        self.moves.clear();
        self.captured_pieces = CapturedPieces::default();
        self.check = CheckStatus::default();
        self.resigned = None;
        self.status = if self.white_player.is_some() && self.black_player.is_some() {
            GameStatus::Active
        } else {
            GameStatus::Waiting
        };
    }

    /// Start play from the board given to `from_board` without seating
    /// players. Status is derived from the position immediately, so a
    /// position that is already mate or stalemate starts terminal.
    pub fn activate(&mut self) {
        if self.status != GameStatus::Waiting {
            return;
        }
        self.status = GameStatus::Active;
        self.refresh_status();
    }

    /// Move the piece on `from` to `to` for the side to move.
    ///
    /// Returns `false` without touching the session when the game is not
    /// live, `from` is empty or holds an opponent piece, or `to` is not a
    /// legal destination.
    pub fn commit_move(&mut self, from: Position, to: Position) -> bool {
        if !self.status.is_live() {
            debug!(game_id = %self.id, status = ?self.status, "move rejected: game not live");
            return false;
        }
        let Some(piece) = self.board.piece_at(from) else {
            debug!(game_id = %self.id, %from, "move rejected: empty source square");
            return false;
        };
        if piece.color != self.current_turn {
            debug!(game_id = %self.id, %from, turn = ?self.current_turn, "move rejected: wrong side");
            return false;
        }
        if !legal_moves(&self.board, from).contains(&to) {
            debug!(game_id = %self.id, %from, %to, "move rejected: illegal destination");
            return false;
        }

        let Some(record) = Self::play(&mut self.board, &mut self.captured_pieces, from, to) else {
            return false;
        };
        self.moves.push(record);
        self.current_turn = self.current_turn.opposite();
        self.refresh_status();

        info!(
            game_id = %self.id,
            ply = self.moves.len(),
            %from,
            %to,
            status = ?self.status,
            "move committed"
        );
        true
    }

    /// The resigning side loses; status becomes `Checkmate`.
    pub fn resign(&mut self, color: Color) -> bool {
        if !self.status.is_live() {
            return false;
        }
        info!(game_id = %self.id, ?color, "resigned");
        self.resigned = Some(color);
        self.status = GameStatus::Checkmate;
        true
    }

    /// Offer a draw on behalf of `color`. Returns whether it was accepted;
    /// acceptance ends the game as a `Draw`.
    pub fn offer_draw(&mut self, color: Color, responder: &mut dyn DrawResponder) -> bool {
        if !self.status.is_live() {
            return false;
        }
        let accepted = responder.respond(color, self);
        info!(game_id = %self.id, ?color, accepted, "draw offered");
        if accepted {
            self.status = GameStatus::Draw;
        }
        accepted
    }

    /// Drop the last move and rebuild the position by replaying the rest of
    /// the history from the initial board. No-op on an empty history, and
    /// after a resignation or agreed draw, which are not moves on the board.
    pub fn undo_last_move(&mut self) -> bool {
        if self.resigned.is_some() || self.status == GameStatus::Draw {
            debug!(game_id = %self.id, status = ?self.status, "undo rejected: game ended by agreement");
            return false;
        }
        let Some(undone) = self.moves.pop() else {
            return false;
        };

        let mut board = self.initial_board.clone();
        let mut captured = CapturedPieces::default();
        for mv in &self.moves {
            Self::play(&mut board, &mut captured, mv.from, mv.to);
        }

        self.board = board;
        self.captured_pieces = captured;
        self.current_turn = if self.moves.len() % 2 == 0 {
            Color::White
        } else {
            Color::Black
        };
        self.refresh_status();

        info!(
            game_id = %self.id,
            from = %undone.from,
            to = %undone.to,
            remaining = self.moves.len(),
            "move undone"
        );
        true
    }

    /// Apply one move to `board`, record its capture, and describe it.
    /// `None` (board untouched) when `from` is empty.
    fn play(
        board: &mut Board,
        captured: &mut CapturedPieces,
        from: Position,
        to: Position,
    ) -> Option<ChessMove> {
        let piece = board.piece_at(from)?;
        let captured_piece = board.piece_at(to);
        *board = apply_move(board, from, to);

        if let Some(taken) = captured_piece {
            captured.record(piece.color, taken);
        }

        Some(ChessMove {
            from,
            to,
            piece,
            captured_piece,
            promotion: is_promotion(&piece, to).then_some(AUTO_PROMOTION_KIND),
            is_castle: false,
            is_en_passant: false,
        })
    }

    /// Derive check and terminal status for the side to move.
    fn refresh_status(&mut self) {
        let side = self.current_turn;
        let in_check = is_king_in_check(&self.board, side);
        self.check = CheckStatus {
            is_check: in_check,
            color: in_check.then_some(side),
            king_position: if in_check {
                find_king_position(&self.board, side)
            } else {
                None
            },
        };

        let outcome = evaluate_terminal(&self.board, side);
        self.status = match outcome.reason {
            Some(GameOverReason::Checkmate) => GameStatus::Checkmate,
            Some(GameOverReason::Stalemate) => GameStatus::Stalemate,
            None if in_check => GameStatus::Check,
            None => GameStatus::Active,
        };
    }

    #[inline]
    pub fn id(&self) -> Uuid {
        self.id
    }

    #[inline]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn player(&self, color: Color) -> Option<&Player> {
        match color {
            Color::White => self.white_player.as_ref(),
            Color::Black => self.black_player.as_ref(),
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn initial_board(&self) -> &Board {
        &self.initial_board
    }

    #[inline]
    pub fn current_turn(&self) -> Color {
        self.current_turn
    }

    #[inline]
    pub fn moves(&self) -> &[ChessMove] {
        &self.moves
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn check(&self) -> CheckStatus {
        self.check
    }

    #[inline]
    pub fn captured_pieces(&self) -> &CapturedPieces {
        &self.captured_pieces
    }

    /// Legal destinations for the piece on `from`, for highlighting.
    pub fn legal_moves_from(&self, from: Position) -> Vec<Position> {
        legal_moves(&self.board, from)
    }

    /// Winner of a finished game: the opponent of a resigning side, or the
    /// side that delivered checkmate.
    pub fn winner(&self) -> Option<Color> {
        if let Some(loser) = self.resigned {
            return Some(loser.opposite());
        }
        (self.status == GameStatus::Checkmate).then(|| self.current_turn.opposite())
    }
}
