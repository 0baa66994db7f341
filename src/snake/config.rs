//! Snake session configuration.

use serde::{Deserialize, Serialize};

use super::difficulty::Difficulty;
use super::game::SnakeError;

/// Default grid side length.
pub const DEFAULT_GRID_SIZE: i32 = 15;

/// Smallest grid that fits the starting snake plus a food cell.
pub const MIN_GRID_SIZE: i32 = 3;

/// Largest supported grid side length.
pub const MAX_GRID_SIZE: i32 = 1024;

/// Snake session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnakeConfig {
    /// Grid side length; the grid is square.
    pub grid_size: i32,

    pub difficulty: Difficulty,

    /// Leaving one edge re-enters from the opposite edge instead of
    /// ending the game.
    pub wall_passing: bool,

    /// Fixed seed for food placement. `None` draws from entropy.
    pub seed: Option<u64>,
}

impl Default for SnakeConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            difficulty: Difficulty::default(),
            wall_passing: false,
            seed: None,
        }
    }
}

impl SnakeConfig {
    #[must_use]
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            ..Self::default()
        }
    }

    /// Set the grid size.
    ///
    /// Panics outside `MIN_GRID_SIZE..=MAX_GRID_SIZE`.
    #[must_use]
    pub fn with_grid_size(mut self, size: i32) -> Self {
        assert!(size >= MIN_GRID_SIZE, "Grid must be at least {MIN_GRID_SIZE}x{MIN_GRID_SIZE}");
        assert!(size <= MAX_GRID_SIZE, "Grid must be at most {MAX_GRID_SIZE}x{MAX_GRID_SIZE}");
        self.grid_size = size;
        self
    }

    /// Check a config that did not go through the builder (deserialized
    /// or assigned field by field).
    pub fn validate(&self) -> Result<(), SnakeError> {
        if (MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&self.grid_size) {
            Ok(())
        } else {
            Err(SnakeError::InvalidGridSize(self.grid_size))
        }
    }

    #[must_use]
    pub fn with_wall_passing(mut self, enabled: bool) -> Self {
        self.wall_passing = enabled;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of cells on the grid; 0 for a negative size.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        let side = usize::try_from(self.grid_size).unwrap_or(0);
        side.saturating_mul(side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SnakeConfig::default();
        assert_eq!(config.grid_size, 15);
        assert_eq!(config.difficulty, Difficulty::Normal);
        assert!(!config.wall_passing);
        assert_eq!(config.cell_count(), 225);
    }

    #[test]
    fn test_builder() {
        let config = SnakeConfig::new(Difficulty::Hard)
            .with_grid_size(10)
            .with_wall_passing(true)
            .with_seed(8);

        assert_eq!(config.difficulty, Difficulty::Hard);
        assert_eq!(config.grid_size, 10);
        assert!(config.wall_passing);
        assert_eq!(config.seed, Some(8));
    }

    #[test]
    #[should_panic(expected = "Grid must be at least")]
    fn test_grid_too_small() {
        let _ = SnakeConfig::default().with_grid_size(2);
    }

    #[test]
    #[should_panic(expected = "Grid must be at most")]
    fn test_grid_too_large() {
        let _ = SnakeConfig::default().with_grid_size(MAX_GRID_SIZE + 1);
    }

    #[test]
    fn test_validate_bounds() {
        assert_eq!(SnakeConfig::default().validate(), Ok(()));

        let mut config = SnakeConfig::default();
        for size in [i32::MIN, -1, 0, 1, 2, MAX_GRID_SIZE + 1, i32::MAX] {
            config.grid_size = size;
            assert_eq!(config.validate(), Err(SnakeError::InvalidGridSize(size)));
        }
        config.grid_size = MIN_GRID_SIZE;
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_cell_count_never_wraps() {
        let negative = SnakeConfig {
            grid_size: -4,
            ..SnakeConfig::default()
        };
        assert_eq!(negative.cell_count(), 0);

        let huge = SnakeConfig {
            grid_size: i32::MAX,
            ..SnakeConfig::default()
        };
        assert_eq!(huge.cell_count(), (i32::MAX as usize) * (i32::MAX as usize));
    }

    #[test]
    fn test_deserialized_tiny_grid_is_rejected() {
        let json = r#"{"grid_size":0,"difficulty":"Normal","wall_passing":true,"seed":null}"#;
        let config: SnakeConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.validate(), Err(SnakeError::InvalidGridSize(0)));
    }

    #[test]
    fn test_config_serde() {
        let config = SnakeConfig::new(Difficulty::Easy).with_seed(1);
        let json = serde_json::to_string(&config).unwrap();
        let back: SnakeConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
