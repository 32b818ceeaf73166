use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::{
    BASE_MOVE_INTERVAL_MS, BOARD_HEIGHT, BOARD_WIDTH, Board, ConfigError, DEFAULT_INITIAL_FOOD,
    FOOD_POINTS, MAX_FOOD, RAT_MOVE_INTERVAL_MS, RAT_POINTS, SPEED_BONUS_CAP,
    SUPER_FOOD_ACTIVE_MS, SUPER_FOOD_POINTS, SUPER_FOOD_SPAWN_COOLDOWN_MS,
};

/// Tunables for a game session. Every field falls back to the reference value when missing
/// from a config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub board_width: u16,
    pub board_height: u16,
    /// Registry capacity shared by food, the super food and the rat
    pub max_food: usize,
    /// Ordinary food kept on the board
    pub initial_food: usize,
    pub super_food_spawn_cooldown_ms: u32,
    pub super_food_active_ms: u32,
    pub rat_move_interval_ms: u32,
    pub base_move_interval_ms: u32,
    pub speed_bonus_cap: u32,
    pub food_points: u16,
    pub super_food_points: u16,
    pub rat_points: u16,
    pub rng_seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            board_width: BOARD_WIDTH as u16,
            board_height: BOARD_HEIGHT as u16,
            max_food: MAX_FOOD,
            initial_food: DEFAULT_INITIAL_FOOD,
            super_food_spawn_cooldown_ms: SUPER_FOOD_SPAWN_COOLDOWN_MS,
            super_food_active_ms: SUPER_FOOD_ACTIVE_MS,
            rat_move_interval_ms: RAT_MOVE_INTERVAL_MS,
            base_move_interval_ms: BASE_MOVE_INTERVAL_MS,
            speed_bonus_cap: SPEED_BONUS_CAP,
            food_points: FOOD_POINTS,
            super_food_points: SUPER_FOOD_POINTS,
            rat_points: RAT_POINTS,
            rng_seed: 0x5eed,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let board_ok = |v: u16| (1..=255).contains(&v);
        if !board_ok(self.board_width) || !board_ok(self.board_height) {
            return Err(ConfigError::InvalidBoard {
                width: self.board_width,
                height: self.board_height,
            });
        }

        if self.max_food < 2 {
            return Err(ConfigError::CapacityTooSmall(self.max_food));
        }

        let cells = self.board_width as usize * self.board_height as usize;
        if self.max_food > cells {
            return Err(ConfigError::CapacityExceedsBoard {
                capacity: self.max_food,
                cells,
            });
        }

        // one slot each for the rat and the super food
        if self.initial_food + 2 > self.max_food {
            return Err(ConfigError::TooMuchInitialFood {
                initial: self.initial_food,
                capacity: self.max_food,
            });
        }

        if self.super_food_spawn_cooldown_ms == 0 {
            return Err(ConfigError::ZeroInterval("super_food_spawn_cooldown_ms"));
        }
        if self.super_food_active_ms == 0 {
            return Err(ConfigError::ZeroInterval("super_food_active_ms"));
        }
        if self.rat_move_interval_ms == 0 {
            return Err(ConfigError::ZeroInterval("rat_move_interval_ms"));
        }

        Ok(())
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: GameConfig =
            serde_json::from_str(json).context("Failed to parse game config")?;
        config.validate().context("Invalid game config")?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_json_str(&json)
    }

    /// Board for these settings. Only meaningful after [`GameConfig::validate`] succeeds.
    pub fn board(&self) -> Board {
        Board::new(self.board_width as u8, self.board_height as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = GameConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.board(), Board::new(16, 8));
    }

    #[test]
    fn test_partial_json_uses_defaults() -> Result<()> {
        let config = GameConfig::from_json_str(r#"{ "board_width": 20, "rng_seed": 9 }"#)?;
        assert_eq!(config.board_width, 20);
        assert_eq!(config.rng_seed, 9);
        assert_eq!(config.board_height, 8);
        assert_eq!(config.super_food_spawn_cooldown_ms, 15_000);
        Ok(())
    }

    #[test]
    fn test_rejects_oversized_board() {
        let config = GameConfig {
            board_width: 256,
            ..GameConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidBoard {
                width: 256,
                height: 8
            })
        );
    }

    #[test]
    fn test_rejects_capacity_problems() {
        let tiny = GameConfig {
            max_food: 1,
            initial_food: 0,
            ..GameConfig::default()
        };
        assert_eq!(tiny.validate(), Err(ConfigError::CapacityTooSmall(1)));

        let crowded = GameConfig {
            max_food: 5,
            initial_food: 4,
            ..GameConfig::default()
        };
        assert!(matches!(
            crowded.validate(),
            Err(ConfigError::TooMuchInitialFood { .. })
        ));

        let small_board = GameConfig {
            board_width: 2,
            board_height: 1,
            max_food: 3,
            initial_food: 0,
            ..GameConfig::default()
        };
        assert!(matches!(
            small_board.validate(),
            Err(ConfigError::CapacityExceedsBoard { .. })
        ));
    }

    #[test]
    fn test_rejects_zero_intervals() {
        let config = GameConfig {
            rat_move_interval_ms: 0,
            ..GameConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::ZeroInterval("rat_move_interval_ms"))
        );
    }

    #[test]
    fn test_bad_json_is_an_error() {
        assert!(GameConfig::from_json_str("{ not json").is_err());
        assert!(GameConfig::from_json_str(r#"{ "max_food": 1 }"#).is_err());
    }
}
