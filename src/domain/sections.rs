//! Extractors for the labeled single-line sections of an entry
//!
//! Both section lines are a marker followed by comma-separated
//! `<label> - <value>` segments. A segment is recognized when it contains the
//! label anywhere, so extra words around the label are tolerated.

use crate::error::{GymlogError, Result};

/// Marker of the pre-workout meal and hydration line
pub const FUELING_MARKER: &str = "Fueling:";

/// Marker of the fitness-tracker summary line
pub const TRACKER_MARKER: &str = "AmazeFit log:";

const PREWORKOUT_LABEL: &str = "Preworkout";
const HYDRATION_LABEL: &str = "Workout Hydration";
const DURATION_LABEL: &str = "duration";
const HEART_RATE_LABEL: &str = "avg heart rate";
const CALORIES_LABEL: &str = "calories";

/// Pre-workout meal and in-workout water intake
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Fueling {
    /// Raw meal text, e.g. `2 banana & coffee`
    pub preworkout: String,
    /// Millilitres
    pub hydration: Option<u32>,
}

/// Session metrics reported by the fitness tracker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TrackerLog {
    /// Minutes
    pub duration: u32,
    /// Beats per minute
    pub avg_heart_rate: u32,
    /// Kilocalories
    pub calories: u32,
}

/// Parse `Fueling: Preworkout - 1 Sandwich, Workout Hydration - 500mL`
pub fn parse_fueling(line: &str) -> Result<Fueling> {
    let mut fueling = Fueling::default();

    for segment in segments(line, FUELING_MARKER) {
        if segment.contains(PREWORKOUT_LABEL) {
            fueling.preworkout = segment_value(segment, "preworkout", line)?.to_string();
        } else if segment.contains(HYDRATION_LABEL) {
            fueling.hydration = Some(parse_quantity(segment, "hydration", "mL", line)?);
        }
    }

    Ok(fueling)
}

/// Parse `AmazeFit log: duration - 40 min, avg heart rate - 105, calories - 276kcal`
pub fn parse_tracker_log(line: &str) -> Result<TrackerLog> {
    let mut log = TrackerLog::default();

    for segment in segments(line, TRACKER_MARKER) {
        if segment.contains(DURATION_LABEL) {
            log.duration = parse_quantity(segment, "duration", "min", line)?;
        } else if segment.contains(HEART_RATE_LABEL) {
            log.avg_heart_rate = parse_quantity(segment, "avg heart rate", "", line)?;
        } else if segment.contains(CALORIES_LABEL) {
            log.calories = parse_quantity(segment, "calories", "kcal", line)?;
        }
    }

    Ok(log)
}

fn segments<'a>(line: &'a str, marker: &str) -> impl Iterator<Item = &'a str> {
    line.strip_prefix(marker).unwrap_or(line).trim().split(',')
}

/// Text after the first `-` of a segment, trimmed
fn segment_value<'a>(segment: &'a str, field: &'static str, line: &str) -> Result<&'a str> {
    segment
        .split_once('-')
        .map(|(_, value)| value.trim())
        .ok_or_else(|| GymlogError::MalformedField {
            field,
            line: line.to_string(),
        })
}

fn parse_quantity(segment: &str, field: &'static str, unit: &str, line: &str) -> Result<u32> {
    let value = segment_value(segment, field, line)?;
    let value = if unit.is_empty() {
        value.to_string()
    } else {
        value.replace(unit, "")
    };
    value
        .trim()
        .parse::<u32>()
        .map_err(|_| GymlogError::MalformedField {
            field,
            line: line.to_string(),
        })
}
