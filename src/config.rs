//! Game configuration.
//!
//! Every tunable constant lives in [`GameConfig`]. Defaults reproduce the
//! classic feel; `~/.skyhop/config.json` may override any subset of keys.

use crate::constants::*;
use crate::utils::persistence;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Velocity lost per tick.
    pub gravity: f64,
    /// Velocity set by a jump (not additive).
    pub jump_strength: f64,
    pub floor_y: f64,

    /// Horizontal distance every obstacle moves per tick.
    pub obstacle_speed: f64,
    /// Real time between obstacle spawns.
    pub spawn_interval_ms: u64,
    pub obstacle_width: f64,
    pub obstacle_min_height: f64,
    pub obstacle_max_height: f64,
    /// Vertical opening between the bottom and top pipe.
    pub gap_height: f64,

    /// Fixed left edge of the player; obstacles left of it score.
    pub player_x: f64,
    pub player_width: f64,
    pub player_height: f64,

    pub container_width: f64,
    pub container_height: f64,

    /// `log` level name: off, error, warn, info, debug, trace.
    pub log_level: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_strength: JUMP_STRENGTH,
            floor_y: FLOOR_Y,
            obstacle_speed: OBSTACLE_SPEED,
            spawn_interval_ms: OBSTACLE_SPAWN_INTERVAL_MS,
            obstacle_width: OBSTACLE_WIDTH,
            obstacle_min_height: OBSTACLE_MIN_HEIGHT,
            obstacle_max_height: OBSTACLE_MAX_HEIGHT,
            gap_height: GAP_HEIGHT,
            player_x: PLAYER_X,
            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            container_width: CONTAINER_WIDTH,
            container_height: CONTAINER_HEIGHT,
            log_level: "info".to_string(),
        }
    }
}

impl GameConfig {
    /// Check that the values describe a playable game.
    pub fn validate(&self) -> Result<(), String> {
        let positive = [
            ("container_width", self.container_width),
            ("container_height", self.container_height),
            ("player_width", self.player_width),
            ("player_height", self.player_height),
            ("obstacle_width", self.obstacle_width),
        ];
        for (name, value) in positive {
            if !(value > 0.0) {
                return Err(format!("{} must be positive, got {}", name, value));
            }
        }

        let non_negative = [
            ("gravity", self.gravity),
            ("obstacle_speed", self.obstacle_speed),
            ("gap_height", self.gap_height),
            ("obstacle_min_height", self.obstacle_min_height),
        ];
        for (name, value) in non_negative {
            if !(value >= 0.0) {
                return Err(format!("{} must not be negative, got {}", name, value));
            }
        }

        if self.obstacle_min_height > self.obstacle_max_height {
            return Err(format!(
                "obstacle_min_height ({}) exceeds obstacle_max_height ({})",
                self.obstacle_min_height, self.obstacle_max_height
            ));
        }
        if self.spawn_interval_ms == 0 {
            return Err("spawn_interval_ms must be positive".to_string());
        }
        if self.log_level.parse::<log::LevelFilter>().is_err() {
            return Err(format!("unknown log_level '{}'", self.log_level));
        }
        Ok(())
    }

    /// Parsed log level; `Info` when the name is not recognised.
    pub fn log_level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }

    /// Load and validate a config file. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> io::Result<Self> {
        let config: GameConfig = persistence::load_json(path)?.unwrap_or_default();
        config
            .validate()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(config)
    }

    /// Write the defaults to `path` unless a file is already there.
    /// Returns whether a file was written.
    pub fn write_default(path: &Path) -> io::Result<bool> {
        if path.exists() {
            return Ok(false);
        }
        persistence::save_json(path, &Self::default())?;
        Ok(true)
    }

    /// Path of the user's config file.
    pub fn default_path() -> io::Result<std::path::PathBuf> {
        persistence::app_path(CONFIG_FILE)
    }

    /// Load `~/.skyhop/config.json`, falling back to defaults on any problem.
    /// The second value describes the problem for the caller to log.
    pub fn load_or_default() -> (Self, Option<String>) {
        let loaded = Self::default_path().and_then(|path| {
            Self::load_from(&path)
                .map_err(|e| io::Error::new(e.kind(), format!("{}: {}", path.display(), e)))
        });
        match loaded {
            Ok(config) => (config, None),
            Err(e) => (Self::default(), Some(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_defaults_match_classic_constants() {
        let config = GameConfig::default();
        assert_eq!(config.gravity, 0.6);
        assert_eq!(config.jump_strength, 15.0);
        assert_eq!(config.obstacle_speed, 4.0);
        assert_eq!(config.spawn_interval_ms, 1500);
        assert_eq!(config.obstacle_width, 30.0);
        assert_eq!(config.gap_height, 100.0);
        assert_eq!(config.player_x, 50.0);
        assert_eq!(config.container_height, 400.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_other_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{ "gravity": 0.4 }"#).unwrap();
        assert_eq!(config.gravity, 0.4);
        assert_eq!(config.jump_strength, JUMP_STRENGTH);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_validate_rejects_inverted_height_range() {
        let config = GameConfig {
            obstacle_min_height: 300.0,
            obstacle_max_height: 100.0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.contains("obstacle_min_height"));
    }

    #[test]
    fn test_validate_rejects_zero_container() {
        let config = GameConfig {
            container_width: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_nan() {
        let config = GameConfig {
            gravity: f64::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_unknown_log_level() {
        let config = GameConfig {
            log_level: "loud".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
        assert_eq!(config.log_level_filter(), log::LevelFilter::Info);
    }

    #[test]
    fn test_load_from_missing_file_is_default() {
        let path = std::env::temp_dir().join("skyhop_config_does_not_exist.json");
        let config = GameConfig::load_from(&path).unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_write_default_then_load() {
        let path =
            std::env::temp_dir().join(format!("skyhop_config_init_{}.json", std::process::id()));
        fs::remove_file(&path).ok();

        assert!(GameConfig::write_default(&path).unwrap());
        // Existing files are left alone
        assert!(!GameConfig::write_default(&path).unwrap());
        assert_eq!(GameConfig::load_from(&path).unwrap(), GameConfig::default());

        fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_from_invalid_values_errors() {
        let path =
            std::env::temp_dir().join(format!("skyhop_config_bad_{}.json", std::process::id()));
        fs::write(&path, r#"{ "spawn_interval_ms": 0 }"#).unwrap();

        let err = GameConfig::load_from(&path).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);

        fs::remove_file(path).ok();
    }
}
