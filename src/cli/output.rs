//! Output formatting utilities

use crate::application::report::Report;
use crate::domain::{Food, FoodQuantities, ParsedLog};
use std::path::Path;

/// Summary printed after a successful parse
pub fn format_parse_summary(log: &ParsedLog, exercise_csv: &Path, session_csv: &Path) -> String {
    format!(
        "Parsed {} sessions and {} sets\n\
         Exercise log saved to: {}\n\
         Session log saved to: {}\n",
        log.sessions.len(),
        log.exercise_sets.len(),
        exercise_csv.display(),
        session_csv.display()
    )
}

/// One `<food>_qty = <n>` line per tracked food
pub fn format_food_quantities(quantities: &FoodQuantities) -> String {
    let mut output = String::new();
    for food in Food::ALL {
        output.push_str(&format!("{}_qty = {}\n", food, quantities.get(food)));
    }
    output
}

/// Plain-text workout report
pub fn format_report(report: &Report) -> String {
    if report.sessions == 0 {
        return "No sessions found".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "Sessions: {}  Sets: {}\n",
        report.sessions, report.sets
    ));

    if !report.cumulative_volume.is_empty() {
        output.push_str("\nCumulative average volume\n");
        for (date, volume) in &report.cumulative_volume {
            output.push_str(&format!("  {:<20} {:.1}\n", date, volume));
        }
    }

    if let (Some(least), Some(most)) = (
        report.muscle_frequency.first(),
        report.muscle_frequency.last(),
    ) {
        output.push_str("\nMuscle training frequency\n");
        for f in &report.muscle_frequency {
            output.push_str(&format!("  {:<20} {} days\n", f.muscle, f.days));
        }
        output.push_str(&format!("  Least trained muscle is {}\n", least.muscle));
        output.push_str(&format!("  Most trained muscle is {}\n", most.muscle));
        for (muscle, exercises) in &report.exercise_frequency {
            if let (Some(first), Some(last)) = (exercises.first(), exercises.last()) {
                output.push_str(&format!(
                    "  For {}, most frequent exercise is {}, least frequent is {}\n",
                    muscle, first.0, last.0
                ));
            }
        }
    }

    if !report.meal_effect.is_empty() {
        output.push_str("\nTotal workout volume by pre-workout meal\n");
        for (food, volume) in &report.meal_effect {
            output.push_str(&format!("  {:<20} {:.1}\n", food, volume));
        }
    }

    if let Some(best) = &report.best_meal {
        output.push_str(&format!(
            "  Best performance for {}: {} (qty {}, volume {:.1})\n",
            best.muscle, best.food, best.qty, best.total_volume
        ));
    }

    if !report.hydration_impact.is_empty() {
        output.push_str("\nHydration impact (volume per minute)\n");
        for (level, per_minute) in &report.hydration_impact {
            let label = format!("{} mL", level);
            output.push_str(&format!("  {:<20} {:.2}\n", label, per_minute));
        }
    }

    if !report.focus_summary.is_empty() {
        output.push_str("\nCardio vs strength\n");
        for s in &report.focus_summary {
            output.push_str(&format!(
                "  {:<20} {} sessions, avg heart rate {:.1}, avg calories {:.1}\n",
                s.focus, s.sessions, s.avg_heart_rate, s.avg_calories
            ));
        }
    }

    if !report.focus_trend.is_empty() {
        output.push_str("\nMonthly cardio vs strength\n");
        for t in &report.focus_trend {
            output.push_str(&format!(
                "  {}  {:<10} avg heart rate {:.1}, avg calories {:.1}\n",
                t.month, t.focus, t.avg_heart_rate, t.avg_calories
            ));
        }
    }

    if !report.calories_by_muscle.is_empty() {
        output.push_str("\nAverage calories by muscle group\n");
        for (muscle, calories) in &report.calories_by_muscle {
            output.push_str(&format!("  {:<20} {:.1} kcal\n", muscle, calories));
        }
    }

    if !report.progress_by_phase.is_empty() {
        output.push_str("\nProgress by phase (avg volume)\n");
        for (phase, volume) in &report.progress_by_phase {
            output.push_str(&format!("  {:<20} {:.1}\n", phase, volume));
        }
    }

    if let Some(stalls) = &report.stalls {
        output.push_str(&format!(
            "\nWeight progression for {} ({})\n",
            stalls.exercise, stalls.muscle
        ));
        for p in &stalls.progression {
            let marker = if p.is_stall { "  stall" } else { "" };
            output.push_str(&format!("  {:<20} {:.1}{}\n", p.date, p.mean_weight, marker));
        }
        if stalls.stalls.is_empty() {
            output.push_str("  No stall points\n");
        } else {
            output.push_str(&format!("  Stall points: {}\n", stalls.stalls.len()));
        }
    }

    output
}
