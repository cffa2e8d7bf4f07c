//! Config inspection use case

use crate::error::{GymlogError, Result};
use crate::infrastructure::Config;

pub const CONFIG_KEYS: [&str; 5] = [
    "input",
    "exercise_csv",
    "session_csv",
    "excluded_muscles",
    "excluded_exercises",
];

/// Service for reading the effective configuration
pub struct ConfigService {
    config: Config,
}

impl ConfigService {
    pub fn new(config: Config) -> Self {
        ConfigService { config }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "input" => Ok(self.config.input.display().to_string()),
            "exercise_csv" => Ok(self.config.exercise_csv.display().to_string()),
            "session_csv" => Ok(self.config.session_csv.display().to_string()),
            "excluded_muscles" => Ok(self.config.excluded_muscles.join(", ")),
            "excluded_exercises" => Ok(self.config.excluded_exercises.join(", ")),
            _ => Err(GymlogError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: {}",
                key,
                CONFIG_KEYS.join(", ")
            ))),
        }
    }

    /// All keys with their values, in a fixed order
    pub fn list(&self) -> Result<Vec<(&'static str, String)>> {
        CONFIG_KEYS
            .iter()
            .map(|key| Ok((*key, self.get(key)?)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_known_keys() {
        let service = ConfigService::new(Config::default());
        assert_eq!(service.get("input").unwrap(), "data/raw/workout_data.txt");
        assert_eq!(service.get("excluded_muscles").unwrap(), "Mix, Cardio");
        assert!(service
            .get("excluded_exercises")
            .unwrap()
            .starts_with("Cross fit, Treadmill"));
    }

    #[test]
    fn test_get_unknown_key() {
        let service = ConfigService::new(Config::default());
        match service.get("editor").unwrap_err() {
            GymlogError::Config(msg) => assert!(msg.contains("Valid keys are")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_list() {
        let service = ConfigService::new(Config::default());
        let keys: Vec<&str> = service.list().unwrap().iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, CONFIG_KEYS.to_vec());
    }
}
