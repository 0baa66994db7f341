//! Snake session: body, food, phases, fixed-step movement.
//!
//! ## Phases
//!
//! ```text
//! Initializing -> Running <-> Paused
//!                 Running -> GameOverAnimating -> GameOverFinal -> Initializing
//! ```
//!
//! ## Timing
//!
//! The host calls `update(elapsed_ms)` every frame. Elapsed time is
//! accumulated and the snake advances one cell each time the accumulator
//! reaches the current move interval, so movement does not depend on the
//! frame rate. `tick` performs a single step directly.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::core::{GameRng, GameRngState};

use super::config::SnakeConfig;
use super::difficulty::{next_interval, Difficulty, FOODS_PER_SPEEDUP};
use super::direction::{Direction, Point};

/// Milliseconds per body segment in the game-over animation.
pub const COLLISION_SEGMENT_MS: u64 = 50;

/// Lifecycle of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Initializing,
    Running,
    Paused,
    /// Collision happened; the body is being erased head-first.
    GameOverAnimating,
    /// Animation finished; waiting for restart.
    GameOverFinal,
}

impl Phase {
    #[must_use]
    pub fn is_game_over(self) -> bool {
        matches!(self, Phase::GameOverAnimating | Phase::GameOverFinal)
    }
}

/// What ended the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Collision {
    /// Left the grid with wall passing off.
    Wall,
    /// Ran into its own body.
    Body,
}

/// Result of one grid step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickOutcome {
    /// Plain move; length unchanged.
    Moved,
    /// Ate the food and grew by one.
    Ate {
        points: u32,
        /// This food triggered a speed-up.
        sped_up: bool,
    },
    /// Game over.
    Collided(Collision),
}

/// Answer to a direction change request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DirectionChange {
    Accepted,
    /// Already heading that way.
    Unchanged,
    /// Exact reversal; always refused.
    Opposite,
    /// A change was already accepted since the last step.
    Locked,
    /// The game is over.
    Inactive,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SnakeError {
    #[error("cannot restart while {0:?}")]
    RestartBeforeGameOver(Phase),
    #[error("snake body must have at least one segment")]
    EmptyBody,
    #[error("segment {0} lies outside the grid")]
    OutOfGrid(Point),
    #[error("segment {0} overlaps another segment")]
    OverlappingBody(Point),
    /// Grid side outside `MIN_GRID_SIZE..=MAX_GRID_SIZE`.
    #[error("grid size {0} is outside the supported range")]
    InvalidGridSize(i32),
}

/// One Snake game in progress.
#[derive(Clone, Debug)]
pub struct SnakeGame {
    config: SnakeConfig,
    rng: GameRng,

    body: VecDeque<Point>,
    direction: Direction,
    direction_locked: bool,
    food: Option<Point>,

    phase: Phase,
    collision: Option<Collision>,

    score: u32,
    interval_ms: u32,
    multiplier_tenths: u32,
    food_eaten: u32,
    food_since_speedup: u32,

    accumulator_ms: u64,
    animation_ms: u64,
}

impl SnakeGame {
    /// Start a game: two segments in the middle heading right, food placed.
    ///
    /// Fails when the config's grid size is out of range.
    pub fn new(config: SnakeConfig) -> Result<Self, SnakeError> {
        let rng = GameRng::from_optional_seed(config.seed);
        Self::with_rng(config, rng)
    }

    /// Start a game with an explicit RNG (replays, tests).
    pub fn with_rng(config: SnakeConfig, rng: GameRng) -> Result<Self, SnakeError> {
        config.validate()?;
        let mut game = Self::blank(config, rng);
        game.setup();
        Ok(game)
    }

    /// Start from a custom body (head first) heading in `direction`.
    pub fn with_layout(
        config: SnakeConfig,
        rng: GameRng,
        body: impl IntoIterator<Item = Point>,
        direction: Direction,
    ) -> Result<Self, SnakeError> {
        config.validate()?;
        let body: VecDeque<Point> = body.into_iter().collect();
        if body.is_empty() {
            return Err(SnakeError::EmptyBody);
        }
        let mut seen = FxHashSet::default();
        for &segment in &body {
            if !segment.in_grid(config.grid_size) {
                return Err(SnakeError::OutOfGrid(segment));
            }
            if !seen.insert(segment) {
                return Err(SnakeError::OverlappingBody(segment));
            }
        }

        let mut game = Self::blank(config, rng);
        game.body = body;
        game.direction = direction;
        game.place_food();
        game.phase = Phase::Running;
        debug!(length = game.body.len(), grid = game.config.grid_size, "snake game started from layout");
        Ok(game)
    }

    fn blank(config: SnakeConfig, rng: GameRng) -> Self {
        let mut game = Self {
            config,
            rng,
            body: VecDeque::new(),
            direction: Direction::Right,
            direction_locked: false,
            food: None,
            phase: Phase::Initializing,
            collision: None,
            score: 0,
            interval_ms: 0,
            multiplier_tenths: 0,
            food_eaten: 0,
            food_since_speedup: 0,
            accumulator_ms: 0,
            animation_ms: 0,
        };
        game.reset_progress();
        game
    }

    /// Initializing -> Running.
    fn setup(&mut self) {
        self.phase = Phase::Initializing;

        let mid = self.config.grid_size / 2;
        self.body.clear();
        self.body.push_back(Point::new(mid, mid));
        self.body.push_back(Point::new(mid - 1, mid));
        self.direction = Direction::Right;
        self.reset_progress();

        self.place_food();
        self.phase = Phase::Running;
        debug!(difficulty = ?self.config.difficulty, grid = self.config.grid_size, "snake game started");
    }

    /// Score, speed and timers back to the difficulty's starting values.
    fn reset_progress(&mut self) {
        let difficulty = self.config.difficulty;
        self.direction_locked = false;
        self.collision = None;
        self.score = 0;
        self.interval_ms = difficulty.base_interval_ms();
        self.multiplier_tenths = difficulty.multiplier_tenths_at(self.interval_ms);
        self.food_eaten = 0;
        self.food_since_speedup = 0;
        self.accumulator_ms = 0;
        self.animation_ms = 0;
    }

    /// Start over after the game-over animation has finished.
    pub fn restart(&mut self) -> Result<(), SnakeError> {
        if self.phase != Phase::GameOverFinal {
            return Err(SnakeError::RestartBeforeGameOver(self.phase));
        }
        self.setup();
        Ok(())
    }

    /// Abandon the current game and start a fresh one at `difficulty`.
    pub fn new_game(&mut self, difficulty: Difficulty) {
        self.config.difficulty = difficulty;
        self.setup();
    }

    /// Turn wall passing on or off; takes effect on the next step.
    pub fn set_wall_passing(&mut self, enabled: bool) {
        self.config.wall_passing = enabled;
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &SnakeConfig {
        &self.config
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Segments from head to tail.
    #[must_use]
    pub fn body(&self) -> &VecDeque<Point> {
        &self.body
    }

    #[must_use]
    pub fn head(&self) -> Option<Point> {
        self.body.front().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Food cell; `None` only when the snake covers the whole grid.
    #[must_use]
    pub fn food(&self) -> Option<Point> {
        self.food
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Current move interval in milliseconds.
    #[must_use]
    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Current score multiplier.
    #[must_use]
    pub fn multiplier(&self) -> f64 {
        f64::from(self.multiplier_tenths) / 10.0
    }

    /// Points the next food is worth: `floor(10 * multiplier)`.
    #[must_use]
    pub fn points_per_food(&self) -> u32 {
        self.multiplier_tenths
    }

    #[must_use]
    pub fn food_eaten(&self) -> u32 {
        self.food_eaten
    }

    /// Foods eaten since the last speed-up (0..FOODS_PER_SPEEDUP).
    #[must_use]
    pub fn food_since_speedup(&self) -> u32 {
        self.food_since_speedup
    }

    #[must_use]
    pub fn collision(&self) -> Option<Collision> {
        self.collision
    }

    /// Length of the game-over animation for the current body.
    #[must_use]
    pub fn animation_duration_ms(&self) -> u64 {
        self.body.len() as u64 * COLLISION_SEGMENT_MS
    }

    /// Head-side segments already erased by the game-over animation.
    #[must_use]
    pub fn hidden_segments(&self) -> usize {
        match self.phase {
            Phase::GameOverAnimating => ((self.animation_ms / COLLISION_SEGMENT_MS) as usize).min(self.body.len()),
            Phase::GameOverFinal => self.body.len(),
            _ => 0,
        }
    }

    /// RNG position, for replaying food placement.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Continue food placement from a saved RNG position.
    pub fn restore_rng(&mut self, state: &GameRngState) {
        self.rng = GameRng::from_state(state);
    }

    // === Input ===

    /// Request a new heading.
    ///
    /// Reversals are always refused. Otherwise only the first change
    /// between two steps is accepted.
    pub fn change_direction(&mut self, direction: Direction) -> DirectionChange {
        if !matches!(self.phase, Phase::Running | Phase::Paused) {
            return DirectionChange::Inactive;
        }
        if direction == self.direction {
            return DirectionChange::Unchanged;
        }
        if direction.is_opposite(self.direction) {
            return DirectionChange::Opposite;
        }
        if self.direction_locked {
            return DirectionChange::Locked;
        }
        self.direction = direction;
        self.direction_locked = true;
        DirectionChange::Accepted
    }

    /// Toggle between Running and Paused. Returns the resulting phase.
    pub fn toggle_pause(&mut self) -> Phase {
        self.phase = match self.phase {
            Phase::Running => Phase::Paused,
            Phase::Paused => Phase::Running,
            other => other,
        };
        self.phase
    }

    // === Simulation ===

    /// Feed elapsed wall time.
    ///
    /// While running, advances one step per full move interval held in
    /// the accumulator and returns the step outcomes. While the game-over
    /// animation plays, advances it and moves to `GameOverFinal` once the
    /// duration is reached. Paused and finished games ignore time.
    pub fn update(&mut self, elapsed_ms: u64) -> Vec<TickOutcome> {
        let mut outcomes = Vec::new();

        match self.phase {
            Phase::Running => {
                self.accumulator_ms += elapsed_ms;
                while self.phase == Phase::Running && self.accumulator_ms >= u64::from(self.interval_ms) {
                    self.accumulator_ms -= u64::from(self.interval_ms);
                    if let Some(outcome) = self.tick() {
                        outcomes.push(outcome);
                    }
                }
            }
            Phase::GameOverAnimating => {
                self.animation_ms += elapsed_ms;
                if self.animation_ms >= self.animation_duration_ms() {
                    self.phase = Phase::GameOverFinal;
                }
            }
            Phase::Initializing | Phase::Paused | Phase::GameOverFinal => {}
        }

        outcomes
    }

    /// Advance the snake exactly one cell. `None` unless running.
    pub fn tick(&mut self) -> Option<TickOutcome> {
        if self.phase != Phase::Running {
            return None;
        }
        self.direction_locked = false;

        let head = self.head()?;
        let mut next = head.step(self.direction);
        if !next.in_grid(self.config.grid_size) {
            if self.config.wall_passing {
                next = next.wrapped(self.config.grid_size);
            } else {
                return Some(self.game_over(Collision::Wall, next));
            }
        }

        let eating = self.food == Some(next);
        if !eating {
            self.body.pop_back();
        }
        let hit_body = self.body.contains(&next);
        self.body.push_front(next);

        if hit_body {
            return Some(self.game_over(Collision::Body, next));
        }

        if !eating {
            return Some(TickOutcome::Moved);
        }

        let points = self.multiplier_tenths;
        self.score += points;
        self.food_eaten += 1;
        self.food_since_speedup += 1;

        let sped_up = self.food_since_speedup >= FOODS_PER_SPEEDUP;
        if sped_up {
            self.food_since_speedup = 0;
            self.interval_ms = next_interval(self.interval_ms);
            self.multiplier_tenths = self.config.difficulty.multiplier_tenths_at(self.interval_ms);
            debug!(interval_ms = self.interval_ms, multiplier = self.multiplier(), "snake sped up");
        }

        self.place_food();
        Some(TickOutcome::Ate { points, sped_up })
    }

    fn game_over(&mut self, collision: Collision, at: Point) -> TickOutcome {
        info!(?collision, %at, score = self.score, length = self.body.len(), "snake collided");
        self.collision = Some(collision);
        self.phase = Phase::GameOverAnimating;
        self.accumulator_ms = 0;
        self.animation_ms = 0;
        TickOutcome::Collided(collision)
    }

    /// Put the food on a uniformly random free cell.
    fn place_food(&mut self) {
        let occupied: FxHashSet<Point> = self.body.iter().copied().collect();
        let size = self.config.grid_size;
        let free: Vec<Point> = (0..size)
            .flat_map(|y| (0..size).map(move |x| Point::new(x, y)))
            .filter(|p| !occupied.contains(p))
            .collect();
        self.food = self.rng.choose(&free).copied();
    }

    /// Move the food to a chosen cell (scripted scenarios).
    ///
    /// Refused when the cell is off the grid or under the snake.
    pub fn place_food_at(&mut self, point: Point) -> bool {
        if !point.in_grid(self.config.grid_size) || self.body.contains(&point) {
            return false;
        }
        self.food = Some(point);
        true
    }
}
