//! Domain layer - Diary parsing and workout statistics

pub mod analysis;
pub mod entry;
pub mod log_file;
pub mod preworkout;
pub mod records;
pub mod sections;
pub mod sets;

pub use entry::{DailyEntryParser, ParsedEntry};
pub use log_file::{LogFileParser, ParsedLog};
pub use preworkout::{Food, FoodQuantities};
pub use records::{ExerciseSetRecord, SessionRecord, SetValue};
