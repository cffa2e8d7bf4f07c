//! Set-token parsing for exercise lines
//!
//! An exercise line looks like `Bench Press: 10X12, 8X15` or `Treadmill: 5 min`.
//! Everything after the colon is split on `,` and each piece is handed to
//! [`parse_set_token`].

use super::records::SetValue;
use crate::error::{GymlogError, Result};
use tracing::trace;

/// Parse every comma-separated token of one exercise line, in order.
///
/// Tokens that match no known shape are dropped. Tokens that match a shape
/// but carry a bad number fail the whole line.
pub fn parse_sets<'a, I>(exercise: &str, tokens: I) -> Result<Vec<SetValue>>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut sets = Vec::new();
    for token in tokens {
        if let Some(set) = parse_set_token(exercise, token)? {
            sets.push(set);
        }
    }
    Ok(sets)
}

/// Parse a single set token.
///
/// Only the first whitespace-separated word is inspected, so trailing notes
/// (`10X12 slow`) are ignored. A bare number followed by a word starting with
/// `min` (`5 min`) is read as cardio minutes as well.
pub fn parse_set_token(exercise: &str, token: &str) -> Result<Option<SetValue>> {
    let mut words = token.split_whitespace();
    let Some(head) = words.next() else {
        trace!(exercise, "skipping empty set token");
        return Ok(None);
    };
    let detached_minutes = head.chars().all(|c| c.is_ascii_digit())
        && words.next().is_some_and(|w| w.starts_with("min"));

    if head.contains("min") || detached_minutes {
        let minutes = head.replace("min", "");
        let duration = minutes
            .parse::<u32>()
            .map_err(|e| malformed(exercise, token, format!("invalid minutes: {}", e)))?;
        return Ok(Some(SetValue::Cardio { duration }));
    }

    if let Some((weight, reps)) = head.split_once('X') {
        let weight = weight
            .parse::<f64>()
            .ok()
            .filter(|w| w.is_finite())
            .ok_or_else(|| malformed(exercise, token, "invalid weight".to_string()))?;
        // Reps are whole numbers; a stray '.' ("12.") is tolerated
        let reps = reps
            .replace('.', "")
            .parse::<u32>()
            .map_err(|e| malformed(exercise, token, format!("invalid reps: {}", e)))?;
        return Ok(Some(SetValue::Strength { weight, reps }));
    }

    trace!(exercise, token, "dropping unrecognized set token");
    Ok(None)
}

fn malformed(exercise: &str, token: &str, reason: String) -> GymlogError {
    GymlogError::MalformedSet {
        exercise: exercise.to_string(),
        token: token.trim().to_string(),
        reason,
    }
}
