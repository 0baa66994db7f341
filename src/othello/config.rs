//! Reversi session configuration.
//!
//! The host picks a mode and, for single-player games, how the computer
//! opponent behaves. Everything is `serde`-derivable so settings can be
//! stored alongside other preferences.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::board::Player;

/// Seconds the presentation layer waits on the result screen before a new game.
pub const RESTART_DELAY: Duration = Duration::from_secs(3);

/// Default pause before the computer plays, so its move can be followed.
pub const DEFAULT_THINK_DELAY_MS: u64 = 1000;

/// Who controls White.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    /// Two humans share the board.
    #[default]
    TwoPlayers,
    /// White is played by the computer.
    VsAi,
}

impl GameMode {
    /// The side played by the computer in this mode.
    #[must_use]
    pub const fn ai_player(self) -> Option<Player> {
        match self {
            GameMode::TwoPlayers => None,
            GameMode::VsAi => Some(Player::White),
        }
    }

    /// Cycle to the next mode (the title screen toggles with one key).
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            GameMode::TwoPlayers => GameMode::VsAi,
            GameMode::VsAi => GameMode::TwoPlayers,
        }
    }
}

/// Computer opponent strength.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AiDifficulty {
    /// Uniformly random legal move.
    #[default]
    Easy,
}

/// Computer opponent settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiConfig {
    pub difficulty: AiDifficulty,

    /// Pacing delay before the move is shown, in milliseconds.
    /// The engine never sleeps; the host waits this long.
    pub think_delay_ms: u64,

    /// Fixed seed for reproducible games. `None` draws from entropy.
    pub seed: Option<u64>,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            difficulty: AiDifficulty::Easy,
            think_delay_ms: DEFAULT_THINK_DELAY_MS,
            seed: None,
        }
    }
}

impl AiConfig {
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_think_delay_ms(mut self, ms: u64) -> Self {
        self.think_delay_ms = ms;
        self
    }

    #[must_use]
    pub fn think_delay(&self) -> Duration {
        Duration::from_millis(self.think_delay_ms)
    }
}

/// Complete Reversi session configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OthelloConfig {
    pub mode: GameMode,
    pub ai: AiConfig,
}

impl OthelloConfig {
    /// Two humans, default AI settings kept for a later mode switch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_mode(mut self, mode: GameMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn with_ai(mut self, ai: AiConfig) -> Self {
        self.ai = ai;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = OthelloConfig::new();
        assert_eq!(config.mode, GameMode::TwoPlayers);
        assert_eq!(config.ai.difficulty, AiDifficulty::Easy);
        assert_eq!(config.ai.think_delay(), Duration::from_millis(1000));
        assert_eq!(config.ai.seed, None);
    }

    #[test]
    fn test_builder() {
        let config = OthelloConfig::new()
            .with_mode(GameMode::VsAi)
            .with_ai(AiConfig::default().with_seed(5).with_think_delay_ms(0));

        assert_eq!(config.mode.ai_player(), Some(Player::White));
        assert_eq!(config.ai.seed, Some(5));
        assert_eq!(config.ai.think_delay(), Duration::ZERO);
    }

    #[test]
    fn test_mode_cycle() {
        assert_eq!(GameMode::TwoPlayers.next(), GameMode::VsAi);
        assert_eq!(GameMode::VsAi.next(), GameMode::TwoPlayers);
        assert_eq!(GameMode::TwoPlayers.ai_player(), None);
    }

    #[test]
    fn test_config_serde() {
        let config = OthelloConfig::new().with_mode(GameMode::VsAi);
        let json = serde_json::to_string(&config).unwrap();
        let back: OthelloConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
