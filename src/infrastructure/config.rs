//! Configuration management

use crate::error::{GymlogError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default config file name, looked up in the current directory
pub const CONFIG_FILE: &str = "gymlog.toml";

/// Environment variable naming an alternative config file
pub const CONFIG_ENV: &str = "GYMLOG_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Raw workout diary
    pub input: PathBuf,
    /// Per-set output table
    pub exercise_csv: PathBuf,
    /// Per-day output table
    pub session_csv: PathBuf,
    /// Muscle groups left out of the training-frequency report
    pub excluded_muscles: Vec<String>,
    /// Conditioning exercises left out of per-muscle exercise rankings
    pub excluded_exercises: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input: PathBuf::from("data/raw/workout_data.txt"),
            exercise_csv: PathBuf::from("data/processed/exercise_log.csv"),
            session_csv: PathBuf::from("data/processed/session_log.csv"),
            excluded_muscles: vec!["Mix".to_string(), "Cardio".to_string()],
            excluded_exercises: [
                "Cross fit",
                "Treadmill",
                "Russian kettlebell swing",
                "Cycle",
                "Jumping jack",
                "Cross trainer",
                "Reverse curls(forearms)",
                "Push Ups",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }
}

impl Config {
    /// Load the effective configuration.
    ///
    /// An explicit path (or `GYMLOG_CONFIG`) must exist. Otherwise
    /// `./gymlog.toml` is used when present, and defaults when not.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let explicit = explicit
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from));

        match explicit {
            Some(path) => Self::load_from_file(&path),
            None => {
                let path = Path::new(CONFIG_FILE);
                if path.exists() {
                    Self::load_from_file(path)
                } else {
                    Ok(Config::default())
                }
            }
        }
    }

    /// Load config from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                GymlogError::Config(format!("Config file not found: {}", path.display()))
            } else {
                GymlogError::Io(e)
            }
        })?;

        toml::from_str(&contents).map_err(|e| {
            GymlogError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    /// Save config as TOML, refusing to overwrite an existing file
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if path.exists() {
            return Err(GymlogError::Config(format!(
                "Config file already exists: {}",
                path.display()
            )));
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;

        Ok(())
    }
}
