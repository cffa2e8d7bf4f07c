//! Descriptive statistics over the parsed tables
//!
//! All functions keep file order (which is chronological order) wherever
//! they do not sort explicitly.

use super::preworkout::{Food, FoodQuantities};
use super::records::{ExerciseSetRecord, SessionRecord};
use crate::error::Result;
use chrono::NaiveDate;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;

/// Accepted spellings of an entry date, tried in order
const DATE_FORMATS: [&str; 5] = ["%Y-%m-%d", "%d-%m-%Y", "%d/%m/%Y", "%d %B %Y", "%d %b %Y"];

/// Session joined with its sets and meal breakdown
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisRow {
    pub date: String,
    pub muscle_targeted: String,
    /// Sum of weight × reps over the day's strength sets
    pub total_volume: f64,
    pub foods: FoodQuantities,
    pub workout_duration: u32,
    pub workout_avg_heart_rate: u32,
    pub workout_calories_burnt: u32,
    pub hydration: Option<u32>,
}

/// Join sessions with their sets on `date`.
pub fn analysis_rows(
    sessions: &[SessionRecord],
    sets: &[ExerciseSetRecord],
) -> Result<Vec<AnalysisRow>> {
    let mut per_date: HashMap<&str, (f64, &str)> = HashMap::new();
    for set in sets {
        let day = per_date
            .entry(set.date.as_str())
            .or_insert((0.0, set.muscle_targeted.as_str()));
        day.0 += set.volume();
    }

    sessions
        .iter()
        .map(|session| {
            let (total_volume, muscle) = per_date
                .get(session.date.as_str())
                .copied()
                .unwrap_or((0.0, ""));
            let preworkout = Some(session.preworkout.as_str()).filter(|p| !p.is_empty());
            Ok(AnalysisRow {
                date: session.date.clone(),
                muscle_targeted: muscle.to_string(),
                total_volume,
                foods: FoodQuantities::from_preworkout(preworkout)?,
                workout_duration: session.workout_duration,
                workout_avg_heart_rate: session.workout_avg_heart_rate,
                workout_calories_burnt: session.workout_calories_burnt,
                hydration: session.hydration,
            })
        })
        .collect()
}

/// Running mean of total volume, one value per row
pub fn cumulative_average_volume(rows: &[AnalysisRow]) -> Vec<(String, f64)> {
    let mut sum = 0.0;
    rows.iter()
        .enumerate()
        .map(|(i, row)| {
            sum += row.total_volume;
            (row.date.clone(), sum / (i + 1) as f64)
        })
        .collect()
}

/// Number of distinct training days for a muscle group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MuscleFrequency {
    pub muscle: String,
    pub days: usize,
}

/// Training days per muscle, least trained first.
pub fn muscle_frequency(sets: &[ExerciseSetRecord], excluded: &[String]) -> Vec<MuscleFrequency> {
    let mut order: Vec<&str> = Vec::new();
    let mut days: HashMap<&str, HashSet<&str>> = HashMap::new();

    for set in sets {
        let muscle = set.muscle_targeted.as_str();
        if excluded.iter().any(|e| e == muscle) {
            continue;
        }
        days.entry(muscle)
            .or_insert_with(|| {
                order.push(muscle);
                HashSet::new()
            })
            .insert(set.date.as_str());
    }

    let mut frequencies: Vec<MuscleFrequency> = order
        .into_iter()
        .map(|muscle| MuscleFrequency {
            muscle: muscle.to_string(),
            days: days[muscle].len(),
        })
        .collect();
    frequencies.sort_by_key(|f| f.days);
    frequencies
}

/// Training days per exercise for one muscle group, most frequent first.
///
/// Exercises named in `excluded` are not ranked.
pub fn exercise_frequency(
    sets: &[ExerciseSetRecord],
    muscle: &str,
    excluded: &[String],
) -> Vec<(String, usize)> {
    let mut order: Vec<&str> = Vec::new();
    let mut days: HashMap<&str, HashSet<&str>> = HashMap::new();

    for set in sets
        .iter()
        .filter(|s| s.muscle_targeted == muscle && !excluded.contains(&s.exercise))
    {
        let exercise = set.exercise.as_str();
        days.entry(exercise)
            .or_insert_with(|| {
                order.push(exercise);
                HashSet::new()
            })
            .insert(set.date.as_str());
    }

    let mut frequencies: Vec<(String, usize)> = order
        .into_iter()
        .map(|exercise| (exercise.to_string(), days[exercise].len()))
        .collect();
    frequencies.sort_by(|a, b| b.1.cmp(&a.1));
    frequencies
}

/// Total volume summed over days each food was eaten, highest first.
///
/// Foods never eaten are left out.
pub fn meal_effect(rows: &[AnalysisRow]) -> Vec<(Food, f64)> {
    let mut totals: Vec<(Food, f64)> = Food::ALL
        .into_iter()
        .filter_map(|food| {
            let eaten: Vec<&AnalysisRow> = rows.iter().filter(|r| r.foods.get(food) > 0).collect();
            if eaten.is_empty() {
                None
            } else {
                Some((food, eaten.iter().map(|r| r.total_volume).sum()))
            }
        })
        .collect();
    totals.sort_by(|a, b| b.1.total_cmp(&a.1));
    totals
}

/// Best single day for a muscle group: the food eaten and its quantity
pub fn best_meal_for_muscle(rows: &[AnalysisRow], muscle: &str) -> Option<(Food, u32, f64)> {
    let muscle = muscle.to_lowercase();
    rows.iter()
        .filter(|r| r.muscle_targeted.to_lowercase() == muscle)
        .flat_map(|r| {
            Food::ALL
                .into_iter()
                .filter(move |food| r.foods.get(*food) > 0)
                .map(move |food| (food, r.foods.get(food), r.total_volume))
        })
        .fold(None, |best: Option<(Food, u32, f64)>, candidate| match best {
            Some(b) if b.2 >= candidate.2 => Some(b),
            _ => Some(candidate),
        })
}

/// Mean working weight of one exercise on one date
#[derive(Debug, Clone, PartialEq)]
pub struct WeightPoint {
    pub date: String,
    pub mean_weight: f64,
    /// Same mean weight as the previous date
    pub is_stall: bool,
}

/// Weight progression of an exercise for a muscle group.
///
/// Cardio sets are ignored. Use [`stall_points`] for just the stalls.
pub fn weight_progression(
    sets: &[ExerciseSetRecord],
    exercise: &str,
    muscle: &str,
) -> Vec<WeightPoint> {
    let means = mean_by(
        sets.iter()
            .filter(|s| s.exercise == exercise && s.muscle_targeted == muscle)
            .filter_map(|s| s.weight().map(|w| (s.date.clone(), w))),
    );

    let mut previous: Option<f64> = None;
    means
        .into_iter()
        .map(|(date, mean_weight)| {
            let is_stall = previous.is_some_and(|p| (p - mean_weight).abs() < 1e-9);
            previous = Some(mean_weight);
            WeightPoint {
                date,
                mean_weight,
                is_stall,
            }
        })
        .collect()
}

/// Dates where an exercise's mean weight did not change from the previous date
pub fn stall_points(sets: &[ExerciseSetRecord], exercise: &str, muscle: &str) -> Vec<WeightPoint> {
    weight_progression(sets, exercise, muscle)
        .into_iter()
        .filter(|p| p.is_stall)
        .collect()
}

/// In-workout water intake bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HydrationLevel {
    Below500,
    From500To750,
    From750To1000,
    From1000To1250,
    From1250To1500,
    Above1500,
}

impl HydrationLevel {
    pub fn from_ml(ml: u32) -> Self {
        match ml {
            0..=499 => HydrationLevel::Below500,
            500..=749 => HydrationLevel::From500To750,
            750..=999 => HydrationLevel::From750To1000,
            1000..=1249 => HydrationLevel::From1000To1250,
            1250..=1499 => HydrationLevel::From1250To1500,
            _ => HydrationLevel::Above1500,
        }
    }
}

impl fmt::Display for HydrationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            HydrationLevel::Below500 => "<500",
            HydrationLevel::From500To750 => "500-750",
            HydrationLevel::From750To1000 => "750-1000",
            HydrationLevel::From1000To1250 => "1000-1250",
            HydrationLevel::From1250To1500 => "1250-1500",
            HydrationLevel::Above1500 => "1500+",
        };
        f.pad(label)
    }
}

/// Mean volume per workout minute for each hydration bucket, in bucket order.
///
/// Rows without hydration or without a recorded duration are skipped.
pub fn hydration_impact(rows: &[AnalysisRow]) -> Vec<(HydrationLevel, f64)> {
    let mut impact = mean_by(rows.iter().filter_map(|r| {
        let ml = r.hydration?;
        (r.workout_duration > 0).then(|| {
            (
                HydrationLevel::from_ml(ml),
                r.total_volume / f64::from(r.workout_duration),
            )
        })
    }));
    impact.sort_by_key(|(level, _)| *level);
    impact
}

/// Session focus derived from the muscle group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Focus {
    Cardio,
    Strength,
}

impl Focus {
    pub fn of(muscle: &str) -> Self {
        if muscle == "Cardio" {
            Focus::Cardio
        } else {
            Focus::Strength
        }
    }
}

impl fmt::Display for Focus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Focus::Cardio => f.pad("Cardio"),
            Focus::Strength => f.pad("Strength"),
        }
    }
}

/// Mean tracker metrics for one focus
#[derive(Debug, Clone, PartialEq)]
pub struct FocusSummary {
    pub focus: Focus,
    pub sessions: usize,
    pub avg_heart_rate: f64,
    pub avg_calories: f64,
}

/// Cardio versus strength days, in order of first appearance
pub fn focus_summary(rows: &[AnalysisRow]) -> Vec<FocusSummary> {
    let heart_rates = mean_by(rows.iter().map(|r| {
        (
            Focus::of(&r.muscle_targeted),
            f64::from(r.workout_avg_heart_rate),
        )
    }));
    let calories = mean_by(rows.iter().map(|r| {
        (
            Focus::of(&r.muscle_targeted),
            f64::from(r.workout_calories_burnt),
        )
    }));

    heart_rates
        .into_iter()
        .zip(calories)
        .map(|((focus, avg_heart_rate), (_, avg_calories))| FocusSummary {
            focus,
            sessions: rows
                .iter()
                .filter(|r| Focus::of(&r.muscle_targeted) == focus)
                .count(),
            avg_heart_rate,
            avg_calories,
        })
        .collect()
}

/// Mean tracker metrics for one focus within one calendar month
#[derive(Debug, Clone, PartialEq)]
pub struct FocusTrend {
    /// `YYYY-MM`
    pub month: String,
    pub focus: Focus,
    pub avg_heart_rate: f64,
    pub avg_calories: f64,
}

/// Monthly cardio versus strength metrics, by month then focus.
///
/// Rows whose date does not parse are skipped.
pub fn focus_trend(rows: &[AnalysisRow]) -> Vec<FocusTrend> {
    let dated: Vec<((String, Focus), &AnalysisRow)> = rows
        .iter()
        .filter_map(|r| {
            let month = parse_entry_date(&r.date)?.format("%Y-%m").to_string();
            Some(((month, Focus::of(&r.muscle_targeted)), r))
        })
        .collect();

    let heart_rates = mean_by(
        dated
            .iter()
            .map(|(key, r)| (key.clone(), f64::from(r.workout_avg_heart_rate))),
    );
    let calories = mean_by(
        dated
            .iter()
            .map(|(key, r)| (key.clone(), f64::from(r.workout_calories_burnt))),
    );

    let mut trend: Vec<FocusTrend> = heart_rates
        .into_iter()
        .zip(calories)
        .map(|(((month, focus), avg_heart_rate), (_, avg_calories))| FocusTrend {
            month,
            focus,
            avg_heart_rate,
            avg_calories,
        })
        .collect();
    trend.sort_by(|a, b| (&a.month, a.focus).cmp(&(&b.month, b.focus)));
    trend
}

/// Mean calories burnt per muscle group, highest first
pub fn calories_by_muscle(rows: &[AnalysisRow]) -> Vec<(String, f64)> {
    let mut means = mean_by(rows.iter().map(|r| {
        (
            r.muscle_targeted.clone(),
            f64::from(r.workout_calories_burnt),
        )
    }));
    means.sort_by(|a, b| b.1.total_cmp(&a.1));
    means
}

/// Training phase measured from the first dated session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Phase {
    UpTo3Months,
    UpTo6Months,
    UpTo9Months,
    UpTo12Months,
    Beyond12Months,
}

impl Phase {
    pub fn from_days(days: i64) -> Self {
        match days {
            d if d < 90 => Phase::UpTo3Months,
            d if d < 180 => Phase::UpTo6Months,
            d if d < 270 => Phase::UpTo9Months,
            d if d < 360 => Phase::UpTo12Months,
            _ => Phase::Beyond12Months,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Phase::UpTo3Months => "0-3 months",
            Phase::UpTo6Months => "3-6 months",
            Phase::UpTo9Months => "6-9 months",
            Phase::UpTo12Months => "9-12 months",
            Phase::Beyond12Months => "12+ months",
        };
        f.pad(label)
    }
}

/// Parse an entry date written in one of the accepted formats
pub fn parse_entry_date(date: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(date.trim(), format).ok())
}

/// Mean total volume per phase, in phase order.
///
/// Rows whose date does not parse are skipped.
pub fn progress_by_phase(rows: &[AnalysisRow]) -> Vec<(Phase, f64)> {
    let dated: Vec<(NaiveDate, f64)> = rows
        .iter()
        .filter_map(|r| parse_entry_date(&r.date).map(|d| (d, r.total_volume)))
        .collect();
    let Some(start) = dated.iter().map(|(d, _)| *d).min() else {
        return Vec::new();
    };

    let mut phases = mean_by(
        dated
            .into_iter()
            .map(|(date, volume)| (Phase::from_days((date - start).num_days()), volume)),
    );
    phases.sort_by_key(|(phase, _)| *phase);
    phases
}

/// Mean of values per key, keys in order of first appearance
fn mean_by<K, I>(items: I) -> Vec<(K, f64)>
where
    K: Eq + Hash + Clone,
    I: IntoIterator<Item = (K, f64)>,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<(K, f64, usize)> = Vec::new();

    for (key, value) in items {
        match index.get(&key) {
            Some(&i) => {
                groups[i].1 += value;
                groups[i].2 += 1;
            }
            None => {
                index.insert(key.clone(), groups.len());
                groups.push((key, value, 1));
            }
        }
    }

    groups
        .into_iter()
        .map(|(key, sum, count)| (key, sum / count as f64))
        .collect()
}
