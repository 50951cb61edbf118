//! Draw-offer policies.
//!
//! A session does not decide draw offers itself; it asks a `DrawResponder`
//! standing in for the opponent. `RandomDrawResponder` accepts with
//! probability one half and is a placeholder for a real negotiation between
//! two players.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game_state::chess_types::*;

pub trait DrawResponder {
    /// Whether the opponent of `offered_by` accepts the draw.
    fn respond(&mut self, offered_by: Color, game: &GameState) -> bool;
}

/// Coin-flip responder.
pub struct RandomDrawResponder<R: Rng = StdRng> {
    rng: R,
}

impl RandomDrawResponder<StdRng> {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> RandomDrawResponder<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> DrawResponder for RandomDrawResponder<R> {
    fn respond(&mut self, _offered_by: Color, _game: &GameState) -> bool {
        self.rng.random_bool(0.5)
    }
}

/// Always gives the same answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedDrawResponder(pub bool);

impl FixedDrawResponder {
    pub const ACCEPT: FixedDrawResponder = FixedDrawResponder(true);
    pub const DECLINE: FixedDrawResponder = FixedDrawResponder(false);
}

impl DrawResponder for FixedDrawResponder {
    fn respond(&mut self, _offered_by: Color, _game: &GameState) -> bool {
        self.0
    }
}
