//! Whole-file parsing: entry segmentation and accumulation

use super::entry::DailyEntryParser;
use super::records::{ExerciseSetRecord, SessionRecord};
use crate::error::Result;
use tracing::info;

/// Both tables produced from one log, in entry order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedLog {
    pub sessions: Vec<SessionRecord>,
    pub exercise_sets: Vec<ExerciseSetRecord>,
}

/// Parser for a complete workout diary
pub struct LogFileParser;

impl LogFileParser {
    /// Split a diary into its raw entries.
    ///
    /// Entries are separated by a blank line. Each entry is trimmed and empty
    /// ones are dropped.
    pub fn split_entries(text: &str) -> Vec<String> {
        let normalized = text.replace("\r\n", "\n");
        normalized
            .trim()
            .split("\n\n")
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Parse every entry in file order.
    ///
    /// The first malformed entry aborts the whole parse.
    pub fn parse(text: &str) -> Result<ParsedLog> {
        let mut log = ParsedLog::default();

        for entry in Self::split_entries(text) {
            if let Some(parsed) = DailyEntryParser::parse(&entry)? {
                log.sessions.push(parsed.session);
                log.exercise_sets.extend(parsed.exercise_sets);
            }
        }

        info!(sessions = log.sessions.len(), sets = log.exercise_sets.len(), "parsed workout log");

        Ok(log)
    }
}
