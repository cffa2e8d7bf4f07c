//! Workout report use case

use crate::domain::analysis::{
    analysis_rows, best_meal_for_muscle, calories_by_muscle, cumulative_average_volume,
    exercise_frequency, focus_summary, focus_trend, hydration_impact, meal_effect,
    muscle_frequency, progress_by_phase, stall_points, weight_progression, FocusSummary,
    FocusTrend, HydrationLevel, MuscleFrequency, Phase, WeightPoint,
};
use crate::domain::{Food, LogFileParser, ParsedLog};
use crate::error::Result;
use crate::infrastructure::{read_log, TableRepository};
use std::path::Path;

/// Options for the report
#[derive(Debug, Clone, Default)]
pub struct ReportOptions {
    /// Muscle groups left out of the training-frequency section
    pub excluded_muscles: Vec<String>,

    /// Exercises left out of the per-muscle exercise ranking
    pub excluded_exercises: Vec<String>,

    /// Muscle group for the best-meal section
    pub target_muscle: Option<String>,

    /// Exercise and muscle group for the stall-point section
    pub stall_exercise: Option<(String, String)>,
}

/// Best single-day meal for a muscle group
#[derive(Debug, Clone, PartialEq)]
pub struct BestMeal {
    pub muscle: String,
    pub food: Food,
    pub qty: u32,
    pub total_volume: f64,
}

/// Weight progression of one exercise and the dates it stalled
#[derive(Debug, Clone, PartialEq)]
pub struct StallReport {
    pub exercise: String,
    pub muscle: String,
    pub progression: Vec<WeightPoint>,
    pub stalls: Vec<WeightPoint>,
}

/// Everything the report prints
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub sessions: usize,
    pub sets: usize,
    /// Running mean of total volume per session
    pub cumulative_volume: Vec<(String, f64)>,
    pub muscle_frequency: Vec<MuscleFrequency>,
    /// Exercise frequency for the least and most trained muscles
    pub exercise_frequency: Vec<(String, Vec<(String, usize)>)>,
    pub meal_effect: Vec<(Food, f64)>,
    pub best_meal: Option<BestMeal>,
    pub hydration_impact: Vec<(HydrationLevel, f64)>,
    pub focus_summary: Vec<FocusSummary>,
    pub focus_trend: Vec<FocusTrend>,
    pub calories_by_muscle: Vec<(String, f64)>,
    pub progress_by_phase: Vec<(Phase, f64)>,
    pub stalls: Option<StallReport>,
}

/// Service computing the workout report
pub struct ReportService;

impl ReportService {
    /// Build the report straight from a diary
    pub fn from_log(input: &Path, options: &ReportOptions) -> Result<Report> {
        let log = LogFileParser::parse(&read_log(input)?)?;
        Self::build(&log, options)
    }

    /// Build the report from previously exported tables
    pub fn from_tables<R: TableRepository>(
        repository: &R,
        options: &ReportOptions,
    ) -> Result<Report> {
        Self::build(&repository.load()?, options)
    }

    pub fn build(log: &ParsedLog, options: &ReportOptions) -> Result<Report> {
        let rows = analysis_rows(&log.sessions, &log.exercise_sets)?;
        let frequency = muscle_frequency(&log.exercise_sets, &options.excluded_muscles);

        let mut extremes: Vec<&str> = Vec::new();
        if let Some(least) = frequency.first() {
            extremes.push(&least.muscle);
        }
        if let Some(most) = frequency.last() {
            if !extremes.contains(&most.muscle.as_str()) {
                extremes.push(&most.muscle);
            }
        }
        let exercise_freq = extremes
            .into_iter()
            .map(|muscle| {
                (
                    muscle.to_string(),
                    exercise_frequency(&log.exercise_sets, muscle, &options.excluded_exercises),
                )
            })
            .collect();

        let best_meal = options.target_muscle.as_deref().and_then(|muscle| {
            best_meal_for_muscle(&rows, muscle).map(|(food, qty, total_volume)| BestMeal {
                muscle: muscle.to_string(),
                food,
                qty,
                total_volume,
            })
        });

        let stalls = options
            .stall_exercise
            .as_ref()
            .map(|(exercise, muscle)| StallReport {
                exercise: exercise.clone(),
                muscle: muscle.clone(),
                progression: weight_progression(&log.exercise_sets, exercise, muscle),
                stalls: stall_points(&log.exercise_sets, exercise, muscle),
            });

        Ok(Report {
            sessions: log.sessions.len(),
            sets: log.exercise_sets.len(),
            cumulative_volume: cumulative_average_volume(&rows),
            muscle_frequency: frequency,
            exercise_frequency: exercise_freq,
            meal_effect: meal_effect(&rows),
            best_meal,
            hydration_impact: hydration_impact(&rows),
            focus_summary: focus_summary(&rows),
            focus_trend: focus_trend(&rows),
            calories_by_muscle: calories_by_muscle(&rows),
            progress_by_phase: progress_by_phase(&rows),
            stalls,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOG: &str = "2024-01-01
Muscle targeted: Back
Fueling: Preworkout - 1 banana, Workout Hydration - 500mL
Exercise:
Lat pulldown: 30X10
AmazeFit log: duration - 30 min, avg heart rate - 100, calories - 200kcal

2024-01-02
Muscle targeted: Chest
Exercise:
Bench Press: 20X10
Fly: 8X12

2024-01-04
Muscle targeted: Back
Fueling: Preworkout - 2 banana
Exercise:
Lat pulldown: 30X12";

    fn options() -> ReportOptions {
        ReportOptions {
            excluded_muscles: vec!["Cardio".to_string()],
            excluded_exercises: vec!["Fly".to_string()],
            target_muscle: Some("back".to_string()),
            stall_exercise: Some(("Lat pulldown".to_string(), "Back".to_string())),
        }
    }

    #[test]
    fn test_build_report() {
        let log = LogFileParser::parse(LOG).unwrap();
        let report = ReportService::build(&log, &options()).unwrap();

        assert_eq!(report.sessions, 3);
        assert_eq!(report.sets, 4);
        assert_eq!(report.muscle_frequency[0].muscle, "Chest");
        assert_eq!(report.muscle_frequency[1].muscle, "Back");

        let muscles: Vec<&str> = report
            .exercise_frequency
            .iter()
            .map(|(m, _)| m.as_str())
            .collect();
        assert_eq!(muscles, vec!["Chest", "Back"]);
        assert_eq!(report.exercise_frequency[0].1, vec![("Bench Press".to_string(), 1)]);

        let cumulative: Vec<f64> = report.cumulative_volume.iter().map(|(_, v)| *v).collect();
        assert_eq!(cumulative, vec![300.0, 298.0, 956.0 / 3.0]);
        assert_eq!(report.focus_trend.len(), 1);
        assert_eq!(report.focus_trend[0].month, "2024-01");

        assert_eq!(report.meal_effect, vec![(Food::Banana, 660.0)]);
        assert_eq!(
            report.best_meal,
            Some(BestMeal {
                muscle: "back".to_string(),
                food: Food::Banana,
                qty: 2,
                total_volume: 360.0
            })
        );

        let stalls = report.stalls.unwrap();
        assert_eq!(stalls.progression.len(), 2);
        assert_eq!(stalls.progression[0].date, "2024-01-01");
        assert_eq!(stalls.stalls.len(), 1);
        assert_eq!(stalls.stalls[0].date, "2024-01-04");
    }

    #[test]
    fn test_build_report_without_optional_sections() {
        let log = LogFileParser::parse(LOG).unwrap();
        let report = ReportService::build(&log, &ReportOptions::default()).unwrap();

        assert!(report.best_meal.is_none());
        assert!(report.stalls.is_none());
    }

    #[test]
    fn test_build_report_on_empty_log() {
        let report = ReportService::build(&ParsedLog::default(), &options()).unwrap();
        assert_eq!(report.sessions, 0);
        assert!(report.muscle_frequency.is_empty());
        assert!(report.exercise_frequency.is_empty());
        assert!(report.cumulative_volume.is_empty());
        assert!(report.best_meal.is_none());
        assert_eq!(report.stalls.unwrap().progression, vec![]);
    }
}
