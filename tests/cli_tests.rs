//! Integration tests for preworkout, report, init and config commands

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{gymlog_cmd, write_log, SAMPLE_LOG};

#[test]
fn test_preworkout_counts() {
    gymlog_cmd()
        .arg("preworkout")
        .arg("2 banana & 1 apple & coffee")
        .assert()
        .success()
        .stdout("banana_qty = 2\napple_qty = 1\ncoffee_qty = 1\nsandwich_qty = 0\n");
}

#[test]
fn test_preworkout_bad_quantity() {
    gymlog_cmd()
        .arg("preworkout")
        .arg("black coffee")
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Malformed preworkout item"));
}

#[test]
fn test_report_from_log() {
    let temp = TempDir::new().unwrap();
    write_log(temp.path(), SAMPLE_LOG);

    gymlog_cmd()
        .current_dir(temp.path())
        .arg("report")
        .arg("workout.txt")
        .arg("--muscle")
        .arg("Chest")
        .arg("--exercise")
        .arg("Bench Press")
        .assert()
        .success()
        .stdout(predicate::str::contains("Sessions: 3  Sets: 5"))
        .stdout(predicate::str::contains("Most trained muscle is Chest"))
        .stdout(predicate::str::contains("Best performance for Chest: sandwich"))
        .stdout(predicate::str::contains("Cumulative average volume"))
        .stdout(predicate::str::contains("Weight progression for Bench Press (Chest)"))
        .stdout(predicate::str::contains("No stall points"))
        .stdout(predicate::str::contains("Cardio"));
}

#[test]
fn test_report_ranks_exercises_without_conditioning_fillers() {
    let temp = TempDir::new().unwrap();
    write_log(
        temp.path(),
        "Day1\nMuscle targeted: Legs\nExercise:\nCycle: 10 min\nSquat: 40X10\n\n\
         Day2\nMuscle targeted: Legs\nExercise:\nCycle: 10 min\nLunge: 10X12\n\n\
         Day3\nMuscle targeted: Legs\nExercise:\nCycle: 10 min\nSquat: 45X8\n",
    );

    gymlog_cmd()
        .current_dir(temp.path())
        .arg("report")
        .arg("workout.txt")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "For Legs, most frequent exercise is Squat, least frequent is Lunge",
        ));

    fs::write(temp.path().join("gymlog.toml"), "excluded_exercises = []\n").unwrap();

    gymlog_cmd()
        .current_dir(temp.path())
        .arg("report")
        .arg("workout.txt")
        .assert()
        .success()
        .stdout(predicate::str::contains("most frequent exercise is Cycle"));
}

#[test]
fn test_report_from_csv_after_parse() {
    let temp = TempDir::new().unwrap();
    write_log(temp.path(), SAMPLE_LOG);
    fs::write(temp.path().join("gymlog.toml"), "input = \"workout.txt\"\n").unwrap();

    gymlog_cmd()
        .current_dir(temp.path())
        .arg("parse")
        .assert()
        .success();

    gymlog_cmd()
        .current_dir(temp.path())
        .arg("report")
        .arg("--from-csv")
        .assert()
        .success()
        .stdout(predicate::str::contains("Sessions: 3  Sets: 5"));
}

#[test]
fn test_report_from_csv_without_tables() {
    let temp = TempDir::new().unwrap();

    gymlog_cmd()
        .current_dir(temp.path())
        .arg("report")
        .arg("--from-csv")
        .assert()
        .failure()
        .stderr(predicate::str::contains("gymlog parse"));
}

#[test]
fn test_report_exercise_requires_muscle() {
    gymlog_cmd()
        .arg("report")
        .arg("--exercise")
        .arg("Bench Press")
        .assert()
        .failure();
}

#[test]
fn test_init_writes_config() {
    let temp = TempDir::new().unwrap();

    gymlog_cmd()
        .arg("init")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote default configuration"));

    let content = fs::read_to_string(temp.path().join("gymlog.toml")).unwrap();
    assert!(content.contains("input = \"data/raw/workout_data.txt\""));
    assert!(content.contains("excluded_muscles"));

    gymlog_cmd().arg("init").arg(temp.path()).assert().failure();
}

#[test]
fn test_config_get_and_list() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("gymlog.toml"), "input = \"diary.txt\"\n").unwrap();

    gymlog_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("input")
        .assert()
        .success()
        .stdout("diary.txt\n");

    gymlog_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("input = diary.txt"))
        .stdout(predicate::str::contains("excluded_muscles = Mix, Cardio"))
        .stdout(predicate::str::contains("excluded_exercises = Cross fit, Treadmill"));
}

#[test]
fn test_config_unknown_key() {
    let temp = TempDir::new().unwrap();

    gymlog_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("editor")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn test_missing_explicit_config() {
    let temp = TempDir::new().unwrap();

    gymlog_cmd()
        .current_dir(temp.path())
        .arg("--config")
        .arg("nope.toml")
        .arg("config")
        .arg("--list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file not found"));
}
