//! File system access: reading the diary, reading and writing the CSV tables

use crate::domain::{ExerciseSetRecord, ParsedLog, SessionRecord, SetValue};
use crate::error::{GymlogError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const EXERCISE_HEADER: [&str; 6] = [
    "exercise",
    "weight",
    "reps",
    "cardio_duration",
    "date",
    "muscle_targeted",
];

pub const SESSION_HEADER: [&str; 6] = [
    "date",
    "workout_duration",
    "workout_avg_heart_rate",
    "workout_calories_burnt",
    "preworkout",
    "hydration",
];

/// Flat CSV shape of an exercise set; absent values are empty cells
#[derive(Debug, Serialize, Deserialize)]
struct ExerciseRow {
    exercise: String,
    weight: Option<f64>,
    reps: Option<u32>,
    cardio_duration: Option<u32>,
    date: String,
    muscle_targeted: String,
}

impl ExerciseRow {
    fn from_record(record: &ExerciseSetRecord) -> Self {
        ExerciseRow {
            exercise: record.exercise.clone(),
            weight: record.weight(),
            reps: record.reps(),
            cardio_duration: record.cardio_duration(),
            date: record.date.clone(),
            muscle_targeted: record.muscle_targeted.clone(),
        }
    }

    /// A row must hold either weight and reps or a cardio duration
    fn into_record(self) -> Result<ExerciseSetRecord> {
        let value = match (self.weight, self.reps, self.cardio_duration) {
            (Some(weight), Some(reps), None) => SetValue::Strength { weight, reps },
            (None, None, Some(duration)) => SetValue::Cardio { duration },
            _ => {
                return Err(GymlogError::MalformedField {
                    field: "exercise row",
                    line: format!(
                        "{},{:?},{:?},{:?},{}",
                        self.exercise, self.weight, self.reps, self.cardio_duration, self.date
                    ),
                })
            }
        };
        Ok(ExerciseSetRecord::new(
            self.exercise,
            value,
            self.date,
            self.muscle_targeted,
        ))
    }
}

/// Read a whole workout diary into memory
pub fn read_log(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            GymlogError::LogNotFound(path.to_path_buf())
        } else {
            GymlogError::Io(e)
        }
    })
}

/// Write the exercise table, header included even when empty
pub fn write_exercise_csv<W: io::Write>(writer: W, sets: &[ExerciseSetRecord]) -> Result<()> {
    let mut csv = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    csv.write_record(EXERCISE_HEADER)?;
    for set in sets {
        csv.serialize(ExerciseRow::from_record(set))?;
    }
    csv.flush()?;
    Ok(())
}

/// Write the session table, header included even when empty
pub fn write_session_csv<W: io::Write>(writer: W, sessions: &[SessionRecord]) -> Result<()> {
    let mut csv = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    csv.write_record(SESSION_HEADER)?;
    for session in sessions {
        csv.serialize(session)?;
    }
    csv.flush()?;
    Ok(())
}

pub fn read_exercise_csv<R: io::Read>(reader: R) -> Result<Vec<ExerciseSetRecord>> {
    let mut csv = csv::Reader::from_reader(reader);
    let mut sets = Vec::new();
    for row in csv.deserialize::<ExerciseRow>() {
        sets.push(row?.into_record()?);
    }
    Ok(sets)
}

pub fn read_session_csv<R: io::Read>(reader: R) -> Result<Vec<SessionRecord>> {
    let mut csv = csv::Reader::from_reader(reader);
    let mut sessions = Vec::new();
    for row in csv.deserialize::<SessionRecord>() {
        sessions.push(row?);
    }
    Ok(sessions)
}

/// Persistence for the two parsed tables
pub trait TableRepository {
    /// Write both tables, replacing earlier output
    fn save(&self, log: &ParsedLog) -> Result<()>;

    /// Read both tables back
    fn load(&self) -> Result<ParsedLog>;
}

impl<T: TableRepository + ?Sized> TableRepository for &T {
    fn save(&self, log: &ParsedLog) -> Result<()> {
        (**self).save(log)
    }

    fn load(&self) -> Result<ParsedLog> {
        (**self).load()
    }
}

/// CSV file implementation of TableRepository
#[derive(Debug, Clone)]
pub struct CsvTableRepository {
    pub exercise_csv: PathBuf,
    pub session_csv: PathBuf,
}

impl CsvTableRepository {
    pub fn new(exercise_csv: PathBuf, session_csv: PathBuf) -> Self {
        CsvTableRepository {
            exercise_csv,
            session_csv,
        }
    }

    fn create(path: &Path) -> Result<fs::File> {
        // Create parent directories if needed
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(fs::File::create(path)?)
    }

    fn open(path: &Path) -> Result<fs::File> {
        fs::File::open(path).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                GymlogError::Config(format!(
                    "Table not found: {} (run 'gymlog parse' first)",
                    path.display()
                ))
            } else {
                GymlogError::Io(e)
            }
        })
    }
}

impl TableRepository for CsvTableRepository {
    fn save(&self, log: &ParsedLog) -> Result<()> {
        write_exercise_csv(Self::create(&self.exercise_csv)?, &log.exercise_sets)?;
        write_session_csv(Self::create(&self.session_csv)?, &log.sessions)?;
        Ok(())
    }

    fn load(&self) -> Result<ParsedLog> {
        Ok(ParsedLog {
            sessions: read_session_csv(Self::open(&self.session_csv)?)?,
            exercise_sets: read_exercise_csv(Self::open(&self.exercise_csv)?)?,
        })
    }
}
