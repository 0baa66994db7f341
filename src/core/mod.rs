//! Plumbing shared by the game engines.
//!
//! Only the RNG lives here: the Reversi opponent and Snake food placement
//! both draw from a `GameRng` so seeded runs are reproducible.

pub mod rng;

pub use rng::{GameRng, GameRngState};
