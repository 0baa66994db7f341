//! # grid-arcade
//!
//! Rule engines for two small grid games plus the highscore list they
//! share with the presentation layer.
//!
//! ## Design Principles
//!
//! 1. **No presentation**: The engines never render, play sound or sleep.
//!    The host owns the clock and the input devices and feeds both in.
//!
//! 2. **Validated values**: Out-of-range Reversi squares cannot be
//!    constructed, so the rule functions are total.
//!
//! 3. **Signals are not errors**: "must pass", collisions and refused
//!    direction changes are plain enums. Errors are reserved for calls
//!    that were refused outright and for file I/O.
//!
//! ## Modules
//!
//! - `core`: deterministic RNG
//! - `othello`: Reversi board, move rules, session, random opponent, cheats
//! - `snake`: Snake grid, difficulty table, session with fixed-step timing
//! - `highscore`: bounded sorted score table and its text file
//!
//! ```
//! use grid_arcade::othello::{OthelloGame, Position};
//!
//! let mut game = OthelloGame::default();
//! let pos = Position::new(2, 3).unwrap();
//! let record = game.play(pos).unwrap();
//! assert_eq!(record.flipped.len(), 1);
//! ```

pub mod core;
pub mod highscore;
pub mod othello;
pub mod snake;

// Re-export commonly used types
pub use crate::core::{GameRng, GameRngState};

pub use crate::othello::{
    Board, Cell, Cheat, CheatBuffer, GameMode, MoveError, MoveRecord, OthelloConfig, OthelloGame, Outcome, Player,
    Position, RandomAi, TurnStatus,
};

pub use crate::snake::{
    Collision, Difficulty, Direction, DirectionChange, Phase, Point, SnakeConfig, SnakeError, SnakeGame, TickOutcome,
};

pub use crate::highscore::{HighscoreEntry, HighscoreError, HighscoreTable};
