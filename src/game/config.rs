use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::game::player::Character;

/// Tunables loaded from `assets/config.json`. Every field has a default, so a
/// partial file only overrides what it names.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct GameConfig {
    pub grid_size: i32,
    pub cols: i32,
    pub rows: i32,
    pub scroll_threshold_row: i32,
    pub road_chance: f64,
    pub tree_lane_chance: f64,
    pub max_trees: u32,
    pub spawn_chance: f64,
    pub difficulty_step: f64,
    pub max_difficulty: f64,
    pub character: Character,
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            grid_size: 40,
            cols: 12,
            rows: 16,
            scroll_threshold_row: 8,
            road_chance: 0.6,
            tree_lane_chance: 0.7,
            max_trees: 2,
            spawn_chance: 0.02,
            difficulty_step: 0.02,
            max_difficulty: 3.5,
            character: Character::Pig,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size <= 0 {
            return Err(ConfigError::GridSize(self.grid_size));
        }
        if self.cols < 1 {
            return Err(ConfigError::TooSmall { axis: "columns", min: 1, got: self.cols });
        }
        // Two starting rows plus at least one row to walk into
        if self.rows < 3 {
            return Err(ConfigError::TooSmall { axis: "rows", min: 3, got: self.rows });
        }
        if self.cols.checked_mul(self.grid_size).is_none()
            || self.rows.checked_mul(self.grid_size).is_none()
        {
            return Err(ConfigError::TooLarge {
                cols: self.cols,
                rows: self.rows,
                grid_size: self.grid_size,
            });
        }
        if self.scroll_threshold_row < 1 || self.scroll_threshold_row >= self.rows {
            return Err(ConfigError::ScrollThreshold {
                row: self.scroll_threshold_row,
                rows: self.rows,
            });
        }
        for (name, value) in [
            ("roadChance", self.road_chance),
            ("treeLaneChance", self.tree_lane_chance),
            ("spawnChance", self.spawn_chance),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::Probability { name, value });
            }
        }
        if self.max_trees > self.cols as u32 {
            return Err(ConfigError::MaxTrees { cols: self.cols, got: self.max_trees });
        }
        if !self.difficulty_step.is_finite() || self.difficulty_step < 0.0 {
            return Err(ConfigError::DifficultyStep(self.difficulty_step));
        }
        if !(self.max_difficulty >= 1.0) {
            return Err(ConfigError::MaxDifficulty(self.max_difficulty));
        }
        Ok(())
    }

    pub fn width(&self) -> i32 {
        self.cols * self.grid_size
    }

    pub fn height(&self) -> i32 {
        self.rows * self.grid_size
    }

    /// Rows the player starts on; always generated as safe ground.
    pub fn is_start_row(&self, row: i32) -> bool {
        row == self.rows - 1 || row == self.rows - 2
    }

    pub fn start_cell(&self) -> (i32, i32) {
        (self.cols / 2, self.rows - 2)
    }

    /// Lane speed multiplier for the given score.
    pub fn difficulty(&self, score: u32) -> f64 {
        (1.0 + score as f64 * self.difficulty_step).min(self.max_difficulty)
    }
}
