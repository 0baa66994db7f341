//! Computer opponent.
//!
//! Easy difficulty picks uniformly among the legal moves. No look-ahead.

use crate::core::{GameRng, GameRngState};

use super::board::{Board, Player, Position};
use super::config::{AiConfig, AiDifficulty};
use super::rules::valid_moves;

/// Random-move computer opponent.
#[derive(Clone, Debug)]
pub struct RandomAi {
    difficulty: AiDifficulty,
    rng: GameRng,
}

impl RandomAi {
    /// Build an opponent from its configuration.
    #[must_use]
    pub fn new(config: &AiConfig) -> Self {
        Self {
            difficulty: config.difficulty,
            rng: GameRng::from_optional_seed(config.seed),
        }
    }

    /// Build an opponent with an explicit RNG (replays, tests).
    #[must_use]
    pub fn with_rng(difficulty: AiDifficulty, rng: GameRng) -> Self {
        Self { difficulty, rng }
    }

    /// Resume an opponent from a saved RNG position (replays).
    #[must_use]
    pub fn from_state(difficulty: AiDifficulty, state: &GameRngState) -> Self {
        Self::with_rng(difficulty, GameRng::from_state(state))
    }

    #[must_use]
    pub fn difficulty(&self) -> AiDifficulty {
        self.difficulty
    }

    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Pick a move for `player`.
    ///
    /// `None` means there is no legal move; the caller treats that as a
    /// forced pass.
    pub fn select_move(&mut self, board: &Board, player: Player) -> Option<Position> {
        match self.difficulty {
            AiDifficulty::Easy => {
                let moves = valid_moves(board, player);
                self.rng.choose(&moves).copied()
            }
        }
    }
}
