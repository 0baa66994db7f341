//! Reversi rule engine.
//!
//! - `board`: cells, players, positions, the 8x8 board
//! - `rules`: move legality, flip sets, turn resolution
//! - `game`: a session tying board, turn order and opponent together
//! - `ai`: random-move computer opponent
//! - `cheats`: debug cheat-code matcher
//! - `config`: mode and opponent settings

pub mod ai;
pub mod board;
pub mod cheats;
pub mod config;
pub mod game;
pub mod rules;

pub use ai::RandomAi;
pub use board::{Board, Cell, Player, Position, BOARD_SIZE, CELL_COUNT};
pub use cheats::{Cheat, CheatBuffer};
pub use config::{AiConfig, AiDifficulty, GameMode, OthelloConfig, RESTART_DELAY};
pub use game::OthelloGame;
pub use rules::{
    apply_move, flips_for, has_valid_move, is_valid_move, resolve_turn, valid_moves, Flips, MoveError,
    MoveRecord, Outcome, TurnStatus,
};
