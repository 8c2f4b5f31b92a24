//! Runtime tuning loaded from an optional `settings.json`.
//!
//! When no file exists the built-in defaults apply. When a file IS present it
//! must be complete and well formed: a parse failure, a missing key, or a
//! value that fails validation is a fatal startup error, reported before the
//! terminal is put into raw mode.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::games::cadence::types::FIELD_ROWS;

/// Top-level settings file contents.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    pub cadence: CadenceSettings,
    pub whack: WhackSettings,
}

/// Tuning for the falling-note task.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CadenceSettings {
    /// `[min, max]` milliseconds between note spawns (before difficulty scaling).
    pub spawn_time_ms: [u64; 2],
    /// Copies of each lane per shuffle-bag cycle.
    pub shuffle_repetitions: usize,
    /// Fall speed in rows per second at multiplier 1.0 (before difficulty scaling).
    pub base_speed: f64,
    /// Staircase step factor, must be greater than 1.
    pub staircase_step: f64,
    /// Lower clamp on the staircase multiplier.
    pub multiplier_floor: f64,
    /// Upper clamp on the staircase multiplier.
    pub multiplier_ceiling: f64,
    /// Row of the finish line, measured from the top of the field.
    pub finish_row: f64,
}

/// Tuning for the mole reaction task.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WhackSettings {
    /// `[min, max]` milliseconds of blank screen before each mole.
    pub blank_ms: [u64; 2],
    /// `[min, max]` milliseconds a mole stays up (before difficulty scaling).
    pub presentation_ms: [u64; 2],
    /// Milliseconds the hit flash stays on screen.
    pub feedback_ms: u64,
}

impl Default for CadenceSettings {
    fn default() -> Self {
        Self {
            spawn_time_ms: [900, 1800],
            shuffle_repetitions: 2,
            base_speed: 6.0,
            staircase_step: 1.2,
            multiplier_floor: 0.25,
            multiplier_ceiling: 4.0,
            finish_row: 20.0,
        }
    }
}

impl Default for WhackSettings {
    fn default() -> Self {
        Self {
            blank_ms: [500, 750],
            presentation_ms: [750, 1500],
            feedback_ms: 300,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            cadence: CadenceSettings::default(),
            whack: WhackSettings::default(),
        }
    }
}

impl Settings {
    /// Platform settings path, e.g. `~/.config/parlor/settings.json` on Linux.
    pub fn default_path() -> io::Result<PathBuf> {
        let project_dirs = ProjectDirs::from("", "", "parlor").ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "could not determine config directory",
            )
        })?;
        Ok(project_dirs.config_dir().join("settings.json"))
    }

    /// Parse and validate a settings file. Any failure is fatal to startup.
    pub fn load(path: &Path) -> io::Result<Settings> {
        let file = fs::File::open(path)?;
        let settings: Settings = serde_json::from_reader(file)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        settings
            .validate()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(settings)
    }

    /// Load from `path` when given, else from the default location.
    ///
    /// An explicit path must exist; a missing file at the default location
    /// just means defaults.
    pub fn load_or_default(path: Option<&Path>) -> io::Result<Settings> {
        match path {
            Some(p) => Settings::load(p),
            None => {
                let default = Settings::default_path()?;
                if default.exists() {
                    Settings::load(&default)
                } else {
                    Ok(Settings::default())
                }
            }
        }
    }

    /// Reject values the games cannot run with.
    pub fn validate(&self) -> Result<(), String> {
        let c = &self.cadence;
        if c.spawn_time_ms[0] == 0 || c.spawn_time_ms[0] > c.spawn_time_ms[1] {
            return Err(format!(
                "cadence.spawn_time_ms must be a non-empty ascending range, got {:?}",
                c.spawn_time_ms
            ));
        }
        if c.shuffle_repetitions == 0 {
            return Err("cadence.shuffle_repetitions must be at least 1".to_string());
        }
        if c.base_speed <= 0.0 {
            return Err(format!(
                "cadence.base_speed must be positive, got {}",
                c.base_speed
            ));
        }
        if c.staircase_step <= 1.0 {
            return Err(format!(
                "cadence.staircase_step must be greater than 1, got {}",
                c.staircase_step
            ));
        }
        if c.multiplier_floor <= 0.0 || c.multiplier_floor >= c.multiplier_ceiling {
            return Err(format!(
                "cadence multiplier clamp must satisfy 0 < floor < ceiling, got [{}, {}]",
                c.multiplier_floor, c.multiplier_ceiling
            ));
        }
        if c.finish_row <= 0.0 || c.finish_row >= FIELD_ROWS {
            return Err(format!(
                "cadence.finish_row must lie inside the field (0..{}), got {}",
                FIELD_ROWS, c.finish_row
            ));
        }

        let w = &self.whack;
        if w.blank_ms[0] == 0 || w.blank_ms[0] > w.blank_ms[1] {
            return Err(format!(
                "whack.blank_ms must be a non-empty ascending range, got {:?}",
                w.blank_ms
            ));
        }
        if w.presentation_ms[0] == 0 || w.presentation_ms[0] > w.presentation_ms[1] {
            return Err(format!(
                "whack.presentation_ms must be a non-empty ascending range, got {:?}",
                w.presentation_ms
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn test_default_round_trips_through_json() {
        let settings = Settings::default();
        let json = serde_json::to_string(&settings).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back.cadence.spawn_time_ms, settings.cadence.spawn_time_ms);
        assert!((back.cadence.staircase_step - settings.cadence.staircase_step).abs() < 1e-12);
        assert_eq!(back.whack.feedback_ms, settings.whack.feedback_ms);
    }

    #[test]
    fn test_missing_key_is_rejected() {
        // No `whack` section at all.
        let json = r#"{"cadence": {
            "spawn_time_ms": [900, 1800],
            "shuffle_repetitions": 2,
            "base_speed": 6.0,
            "staircase_step": 1.2,
            "multiplier_floor": 0.25,
            "multiplier_ceiling": 4.0,
            "finish_row": 20.0
        }}"#;
        assert!(serde_json::from_str::<Settings>(json).is_err());
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let mut value = serde_json::to_value(Settings::default()).unwrap();
        value["cadence"]["lanes"] = serde_json::json!(5);
        assert!(serde_json::from_value::<Settings>(value).is_err());
    }

    #[test]
    fn test_inverted_spawn_range_fails_validation() {
        let mut settings = Settings::default();
        settings.cadence.spawn_time_ms = [1800, 900];
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_step_at_or_below_one_fails_validation() {
        let mut settings = Settings::default();
        settings.cadence.staircase_step = 1.0;
        assert!(settings.validate().is_err());
        settings.cadence.staircase_step = 0.8;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_bad_clamp_fails_validation() {
        let mut settings = Settings::default();
        settings.cadence.multiplier_floor = 0.0;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.cadence.multiplier_floor = 5.0;
        settings.cadence.multiplier_ceiling = 4.0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_finish_row_outside_field_fails_validation() {
        let mut settings = Settings::default();
        settings.cadence.finish_row = FIELD_ROWS + 1.0;
        assert!(settings.validate().is_err());
        settings.cadence.finish_row = 0.0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_load_missing_explicit_file_errors() {
        let path = std::env::temp_dir().join("parlor-test-no-such-settings.json");
        let _ = fs::remove_file(&path);
        assert!(Settings::load(&path).is_err());
    }

    #[test]
    fn test_load_rejects_malformed_file() {
        let path = std::env::temp_dir().join("parlor-test-malformed-settings.json");
        fs::write(&path, "{ not json").unwrap();
        let err = Settings::load(&path).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        fs::remove_file(&path).unwrap();
    }
}
