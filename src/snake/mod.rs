//! Snake rule engine.
//!
//! - `direction`: grid points and headings
//! - `difficulty`: starting speed, speed-ups and score multipliers
//! - `config`: grid size, difficulty and wall passing
//! - `game`: the session with its phase machine and fixed-step movement

pub mod config;
pub mod difficulty;
pub mod direction;
pub mod game;

pub use config::{SnakeConfig, DEFAULT_GRID_SIZE, MAX_GRID_SIZE, MIN_GRID_SIZE};
pub use difficulty::{
    next_interval, Difficulty, DifficultyParams, BASE_FOOD_POINTS, FOODS_PER_SPEEDUP, MIN_INTERVAL_MS,
    SPEED_STEP_MS,
};
pub use direction::{Direction, Point};
pub use game::{Collision, DirectionChange, Phase, SnakeError, SnakeGame, TickOutcome, COLLISION_SEGMENT_MS};
