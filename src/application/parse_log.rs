//! Parse-and-export use case

use crate::domain::{LogFileParser, ParsedLog};
use crate::error::Result;
use crate::infrastructure::{read_log, TableRepository};
use std::path::Path;
use tracing::info;

/// Service turning a diary into the two CSV tables
pub struct ParseLogService<R: TableRepository> {
    repository: R,
}

impl<R: TableRepository> ParseLogService<R> {
    pub fn new(repository: R) -> Self {
        ParseLogService { repository }
    }

    /// Parse the diary at `input` and write both tables.
    ///
    /// # Errors
    ///
    /// Returns an error if the diary cannot be read, any entry is malformed,
    /// or the tables cannot be written. Nothing is written unless the whole
    /// diary parsed.
    pub fn execute(&self, input: &Path) -> Result<ParsedLog> {
        let text = read_log(input)?;
        let log = LogFileParser::parse(&text)?;

        self.repository.save(&log)?;
        info!(input = %input.display(), "exported workout tables");

        Ok(log)
    }
}
