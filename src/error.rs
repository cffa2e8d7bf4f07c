//! Error types for gymlog

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for gymlog
#[derive(Debug, Error)]
pub enum GymlogError {
    #[error("Workout log not found: {0}")]
    LogNotFound(PathBuf),

    #[error("Malformed set '{token}' for exercise '{exercise}': {reason}")]
    MalformedSet {
        exercise: String,
        token: String,
        reason: String,
    },

    #[error("Malformed {field} in line: {line}")]
    MalformedField { field: &'static str, line: String },

    #[error("Malformed preworkout item: {0}")]
    MalformedPreworkout(String),

    #[error("Entry '{date}': {source}")]
    Entry {
        date: String,
        #[source]
        source: Box<GymlogError>,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl GymlogError {
    /// Attach the date of the entry being parsed to an error
    pub fn in_entry(self, date: &str) -> Self {
        GymlogError::Entry {
            date: date.to_string(),
            source: Box::new(self),
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            GymlogError::LogNotFound(_) => 2,
            GymlogError::MalformedSet { .. }
            | GymlogError::MalformedField { .. }
            | GymlogError::MalformedPreworkout(_)
            | GymlogError::Entry { .. } => 3,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            GymlogError::LogNotFound(path) => {
                format!(
                    "Workout log not found: {}\n\n\
                    Suggestions:\n\
                    • Pass the log path explicitly: gymlog parse path/to/workout_data.txt\n\
                    • Set 'input' in gymlog.toml\n\
                    • Run 'gymlog init' to write a default gymlog.toml",
                    path.display()
                )
            }
            GymlogError::Entry { source, .. } => {
                let hint = match source.as_ref() {
                    GymlogError::MalformedSet { .. } => {
                        "Expected set tokens:\n\
                        • Strength: <weight>X<reps> (e.g., 60X12, 12.5X10)\n\
                        • Cardio: <minutes>min or <minutes> min (e.g., 5 min)"
                    }
                    GymlogError::MalformedField { .. } => {
                        "Expected marker lines:\n\
                        • Fueling: Preworkout - 1 Sandwich, Workout Hydration - 500mL\n\
                        • AmazeFit log: duration - 40 min, avg heart rate - 105, calories - 276kcal"
                    }
                    _ => "",
                };
                if hint.is_empty() {
                    self.to_string()
                } else {
                    format!(
                        "{}\n\n{}\n\nNo CSV files were written; fix the entry and re-run.",
                        self, hint
                    )
                }
            }
            GymlogError::MalformedPreworkout(item) => {
                format!(
                    "Malformed preworkout item: '{}'\n\n\
                    Items are separated by '&' and look like '<qty> <food>' or '<food>'.\n\
                    Example: 2 banana & 1 apple & coffee",
                    item
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using GymlogError
pub type Result<T> = std::result::Result<T, GymlogError>;
