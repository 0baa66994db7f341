//! Difficulty table and speed/score progression.
//!
//! Each difficulty fixes a starting move interval and a score multiplier
//! floor. Every `FOODS_PER_SPEEDUP` foods the interval shrinks by
//! `SPEED_STEP_MS` (never below `MIN_INTERVAL_MS`) and the multiplier is
//! recomputed from the interval:
//!
//! ```text
//! steps      = (base_interval - current_interval) / SPEED_STEP_MS
//! multiplier = floor + steps * 0.1
//! ```
//!
//! Multipliers are held in tenths so the score per food,
//! `floor(10 * multiplier)`, is exact integer arithmetic.

use serde::{Deserialize, Serialize};

/// Fastest allowed move interval.
pub const MIN_INTERVAL_MS: u32 = 100;

/// Interval reduction per speed-up.
pub const SPEED_STEP_MS: u32 = 20;

/// Foods eaten between speed-ups.
pub const FOODS_PER_SPEEDUP: u32 = 5;

/// Points for one food at multiplier 1.0.
pub const BASE_FOOD_POINTS: u32 = 10;

/// Starting speed and score floor for one difficulty.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyParams {
    /// Starting move interval in milliseconds.
    pub base_interval_ms: u32,
    /// Lowest score multiplier, in tenths (15 = 1.5x).
    pub multiplier_floor_tenths: u32,
}

const TABLE: [DifficultyParams; 3] = [
    DifficultyParams {
        base_interval_ms: 300,
        multiplier_floor_tenths: 10,
    },
    DifficultyParams {
        base_interval_ms: 250,
        multiplier_floor_tenths: 15,
    },
    DifficultyParams {
        base_interval_ms: 200,
        multiplier_floor_tenths: 20,
    },
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard];

    #[must_use]
    pub const fn params(self) -> DifficultyParams {
        TABLE[self as usize]
    }

    #[must_use]
    pub const fn base_interval_ms(self) -> u32 {
        self.params().base_interval_ms
    }

    /// Score multiplier floor as a float, for display.
    #[must_use]
    pub fn multiplier_floor(self) -> f64 {
        f64::from(self.params().multiplier_floor_tenths) / 10.0
    }

    /// Multiplier (in tenths) for a given current interval.
    ///
    /// Recomputed from the interval every time rather than accumulated,
    /// so it cannot drift. Never below the floor.
    #[must_use]
    pub const fn multiplier_tenths_at(self, interval_ms: u32) -> u32 {
        let params = self.params();
        let steps = params.base_interval_ms.saturating_sub(interval_ms) / SPEED_STEP_MS;
        params.multiplier_floor_tenths + steps
    }
}

/// The interval after one speed-up.
#[must_use]
pub fn next_interval(interval_ms: u32) -> u32 {
    interval_ms.saturating_sub(SPEED_STEP_MS).max(MIN_INTERVAL_MS)
}
