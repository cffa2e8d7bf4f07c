//! Session and exercise-set records produced by the log parser

use serde::{Deserialize, Serialize};

/// One day's session summary
///
/// Fields whose marker line was absent keep their defaults: zero for the
/// tracker metrics, empty for `preworkout`, `None` for `hydration`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SessionRecord {
    pub date: String,
    pub workout_duration: u32,
    pub workout_avg_heart_rate: u32,
    pub workout_calories_burnt: u32,
    pub preworkout: String,
    pub hydration: Option<u32>,
}

impl SessionRecord {
    /// Create a session with every metric at its default
    pub fn new(date: impl Into<String>) -> Self {
        SessionRecord {
            date: date.into(),
            ..Default::default()
        }
    }
}

/// The value recorded for a single set
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SetValue {
    /// Weight lifted for a number of repetitions
    Strength { weight: f64, reps: u32 },
    /// Timed interval, in minutes
    Cardio { duration: u32 },
}

/// One recorded set, tagged with the owning entry's date and muscle group
#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseSetRecord {
    pub exercise: String,
    pub value: SetValue,
    pub date: String,
    pub muscle_targeted: String,
}

impl ExerciseSetRecord {
    pub fn new(exercise: String, value: SetValue, date: String, muscle_targeted: String) -> Self {
        ExerciseSetRecord {
            exercise,
            value,
            date,
            muscle_targeted,
        }
    }

    pub fn weight(&self) -> Option<f64> {
        match self.value {
            SetValue::Strength { weight, .. } => Some(weight),
            SetValue::Cardio { .. } => None,
        }
    }

    pub fn reps(&self) -> Option<u32> {
        match self.value {
            SetValue::Strength { reps, .. } => Some(reps),
            SetValue::Cardio { .. } => None,
        }
    }

    pub fn cardio_duration(&self) -> Option<u32> {
        match self.value {
            SetValue::Cardio { duration } => Some(duration),
            SetValue::Strength { .. } => None,
        }
    }

    /// Weight times reps; zero for cardio sets
    pub fn volume(&self) -> f64 {
        match self.value {
            SetValue::Strength { weight, reps } => weight * f64::from(reps),
            SetValue::Cardio { .. } => 0.0,
        }
    }
}
