//! Parsing of a single day's diary entry
//!
//! ```text
//! Day1
//! Muscle targeted: Chest
//! Fueling: Preworkout - 1 Sandwich, Workout Hydration - 500mL
//! Exercise:
//! Bench Press: 10X12, 8X15
//! AmazeFit log: duration - 40 min, avg heart rate - 105, calories - 276kcal
//! ```
//!
//! The first non-empty line is the date. Exercise lines are only read between
//! the `Exercise:` header and the tracker line.

use super::records::{ExerciseSetRecord, SessionRecord};
use super::sections::{parse_fueling, parse_tracker_log, FUELING_MARKER, TRACKER_MARKER};
use super::sets::parse_sets;
use crate::error::Result;
use tracing::{debug, trace};

pub const MUSCLE_MARKER: &str = "Muscle targeted:";
pub const EXERCISE_MARKER: &str = "Exercise:";

/// Whether exercise lines are currently being read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum BlockState {
    #[default]
    Outside,
    InsideExerciseBlock,
}

/// A classified entry line, in priority order of the prefixes
#[derive(Debug, Clone, PartialEq)]
enum Line<'a> {
    Muscle(&'a str),
    Fueling,
    ExerciseHeader,
    Tracker,
    Exercise { name: &'a str, sets: &'a str },
    Ignored,
}

impl<'a> Line<'a> {
    fn classify(line: &'a str, state: BlockState) -> Self {
        if let Some(muscle) = line.strip_prefix(MUSCLE_MARKER) {
            Line::Muscle(muscle.trim())
        } else if line.starts_with(FUELING_MARKER) {
            Line::Fueling
        } else if line.starts_with(EXERCISE_MARKER) {
            Line::ExerciseHeader
        } else if line.starts_with(TRACKER_MARKER) {
            Line::Tracker
        } else if state == BlockState::InsideExerciseBlock {
            match line.split_once(':') {
                Some((name, sets)) => Line::Exercise {
                    name: name.trim(),
                    sets,
                },
                None => Line::Ignored,
            }
        } else {
            Line::Ignored
        }
    }
}

/// Output of one parsed entry
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedEntry {
    pub session: SessionRecord,
    pub exercise_sets: Vec<ExerciseSetRecord>,
}

/// Line-by-line state machine over one entry
#[derive(Debug)]
pub struct DailyEntryParser {
    state: BlockState,
    muscle_targeted: String,
    session: SessionRecord,
    exercise_sets: Vec<ExerciseSetRecord>,
}

impl DailyEntryParser {
    /// Parse one raw entry.
    ///
    /// Returns `Ok(None)` when the entry has no non-empty line. Errors carry
    /// the entry's date.
    pub fn parse(entry: &str) -> Result<Option<ParsedEntry>> {
        let mut lines = entry.lines().map(str::trim).filter(|l| !l.is_empty());

        let Some(date) = lines.next() else {
            trace!("skipping empty entry");
            return Ok(None);
        };

        let mut parser = DailyEntryParser {
            state: BlockState::Outside,
            muscle_targeted: String::new(),
            session: SessionRecord::new(date),
            exercise_sets: Vec::new(),
        };

        for line in lines {
            parser.feed(line).map_err(|e| e.in_entry(date))?;
        }

        debug!(date, sets = parser.exercise_sets.len(), "parsed entry");

        Ok(Some(ParsedEntry {
            session: parser.session,
            exercise_sets: parser.exercise_sets,
        }))
    }

    fn feed(&mut self, line: &str) -> Result<()> {
        match Line::classify(line, self.state) {
            Line::Muscle(muscle) => {
                self.muscle_targeted = muscle.to_string();
            }
            Line::Fueling => {
                let fueling = parse_fueling(line)?;
                self.session.preworkout = fueling.preworkout;
                self.session.hydration = fueling.hydration;
            }
            Line::ExerciseHeader => {
                if self.state == BlockState::InsideExerciseBlock {
                    trace!("repeated exercise header");
                }
                self.state = BlockState::InsideExerciseBlock;
            }
            Line::Tracker => {
                let log = parse_tracker_log(line)?;
                self.session.workout_duration = log.duration;
                self.session.workout_avg_heart_rate = log.avg_heart_rate;
                self.session.workout_calories_burnt = log.calories;
                self.state = BlockState::Outside;
            }
            Line::Exercise { name, sets } => {
                for value in parse_sets(name, sets.split(','))? {
                    self.exercise_sets.push(ExerciseSetRecord::new(
                        name.to_string(),
                        value,
                        self.session.date.clone(),
                        self.muscle_targeted.clone(),
                    ));
                }
            }
            Line::Ignored => {
                trace!(line, "ignoring line");
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::records::SetValue;
    use crate::error::GymlogError;

    const DAY1: &str = "Day1
Muscle targeted: Chest
Fueling: Preworkout - 1 Sandwich, Workout Hydration - 500mL
Exercise:
Bench Press: 10X12, 8X15
AmazeFit log: duration - 40 min, avg heart rate - 105, calories - 276kcal";

    fn parse(entry: &str) -> ParsedEntry {
        DailyEntryParser::parse(entry).unwrap().unwrap()
    }

    #[test]
    fn test_full_entry() {
        let parsed = parse(DAY1);

        assert_eq!(
            parsed.session,
            SessionRecord {
                date: "Day1".to_string(),
                workout_duration: 40,
                workout_avg_heart_rate: 105,
                workout_calories_burnt: 276,
                preworkout: "1 Sandwich".to_string(),
                hydration: Some(500),
            }
        );

        assert_eq!(parsed.exercise_sets.len(), 2);
        assert_eq!(parsed.exercise_sets[0].exercise, "Bench Press");
        assert_eq!(
            parsed.exercise_sets[0].value,
            SetValue::Strength {
                weight: 10.0,
                reps: 12
            }
        );
        assert_eq!(
            parsed.exercise_sets[1].value,
            SetValue::Strength {
                weight: 8.0,
                reps: 15
            }
        );
        for set in &parsed.exercise_sets {
            assert_eq!(set.date, "Day1");
            assert_eq!(set.muscle_targeted, "Chest");
        }
    }

    #[test]
    fn test_cardio_line() {
        let parsed = parse("Day2\nMuscle targeted: Cardio\nExercise:\nTreadmill: 5 min");
        assert_eq!(parsed.exercise_sets.len(), 1);
        let set = &parsed.exercise_sets[0];
        assert_eq!(set.cardio_duration(), Some(5));
        assert_eq!(set.weight(), None);
        assert_eq!(set.reps(), None);
    }

    #[test]
    fn test_missing_tracker_line_keeps_zero_metrics() {
        let parsed = parse(
            "Day3\nFueling: Preworkout - 2 banana, Workout Hydration - 750mL\nExercise:\nSquat: 40X10",
        );
        assert_eq!(parsed.session.workout_duration, 0);
        assert_eq!(parsed.session.workout_avg_heart_rate, 0);
        assert_eq!(parsed.session.workout_calories_burnt, 0);
        assert_eq!(parsed.session.preworkout, "2 banana");
        assert_eq!(parsed.session.hydration, Some(750));
        assert_eq!(parsed.exercise_sets.len(), 1);
    }

    #[test]
    fn test_missing_fueling_line_leaves_hydration_absent() {
        let parsed = parse("Day4\nExercise:\nSquat: 40X10");
        assert_eq!(parsed.session.preworkout, "");
        assert_eq!(parsed.session.hydration, None);
    }

    #[test]
    fn test_exercise_lines_outside_block_are_ignored() {
        let parsed = parse(
            "Day5
Bench Press: 10X12
Exercise:
Row: 30X10
AmazeFit log: duration - 30 min
Curl: 8X12",
        );
        assert_eq!(parsed.exercise_sets.len(), 1);
        assert_eq!(parsed.exercise_sets[0].exercise, "Row");
        assert_eq!(parsed.session.workout_duration, 30);
    }

    #[test]
    fn test_unmatched_lines_inside_block_are_ignored() {
        let parsed = parse("Day6\nExercise:\nfelt strong today\nRow: 30X10, 35X8");
        assert_eq!(parsed.exercise_sets.len(), 2);
    }

    #[test]
    fn test_muscle_applies_to_following_lines_only() {
        let parsed = parse(
            "Day7
Exercise:
Row: 30X10
Muscle targeted: Back
Pullover: 12X12",
        );
        assert_eq!(parsed.exercise_sets[0].muscle_targeted, "");
        assert_eq!(parsed.exercise_sets[1].muscle_targeted, "Back");
    }

    #[test]
    fn test_date_is_first_non_empty_line_verbatim() {
        let parsed = parse("\n   \n  12 March 2024  \nMuscle targeted: Legs");
        assert_eq!(parsed.session.date, "12 March 2024");
        assert!(parsed.exercise_sets.is_empty());
    }

    #[test]
    fn test_blank_entry_yields_nothing() {
        assert_eq!(DailyEntryParser::parse("").unwrap(), None);
        assert_eq!(DailyEntryParser::parse("  \n \t\n").unwrap(), None);
    }

    #[test]
    fn test_malformed_set_reports_entry_date() {
        let err = DailyEntryParser::parse("Day8\nExercise:\nBench Press: heavyX12").unwrap_err();
        match err {
            GymlogError::Entry { date, source } => {
                assert_eq!(date, "Day8");
                assert!(matches!(*source, GymlogError::MalformedSet { .. }));
            }
            other => panic!("Expected Entry error, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_tracker_line_fails() {
        let err = DailyEntryParser::parse("Day9\nAmazeFit log: calories - lots").unwrap_err();
        assert!(matches!(err, GymlogError::Entry { .. }));
    }

    #[test]
    fn test_classify_priority() {
        let inside = BlockState::InsideExerciseBlock;
        assert_eq!(
            Line::classify("Muscle targeted: Back", inside),
            Line::Muscle("Back")
        );
        assert_eq!(Line::classify("Fueling: x", inside), Line::Fueling);
        assert_eq!(Line::classify("Exercise:", inside), Line::ExerciseHeader);
        assert_eq!(Line::classify("AmazeFit log: x", inside), Line::Tracker);
        assert_eq!(
            Line::classify("Row: 10X10", inside),
            Line::Exercise {
                name: "Row",
                sets: " 10X10"
            }
        );
        assert_eq!(Line::classify("Row 10X10", inside), Line::Ignored);
        assert_eq!(
            Line::classify("Row: 10X10", BlockState::Outside),
            Line::Ignored
        );
    }
}
