use assert_cmd::Command;
use std::fs;
use std::path::Path;

pub fn gymlog_cmd() -> Command {
    let mut cmd = Command::cargo_bin("gymlog").unwrap();
    cmd.env_remove("GYMLOG_CONFIG");
    cmd.env_remove("GYMLOG_LOG");
    cmd
}

pub const SAMPLE_LOG: &str = "2024-01-01
Muscle targeted: Chest
Fueling: Preworkout - 1 Sandwich, Workout Hydration - 500mL
Exercise:
Bench Press: 10X12, 8X15
AmazeFit log: duration - 40 min, avg heart rate - 105, calories - 276kcal

2024-01-02
Muscle targeted: Cardio
Fueling: Preworkout - 2 banana & coffee
Exercise:
Treadmill: 5 min
AmazeFit log: duration - 25 min, avg heart rate - 135, calories - 310kcal

2024-01-04
Muscle targeted: Chest
Exercise:
Bench Press: 10X12, 10X10
";

/// Write a diary to `<dir>/workout.txt`
pub fn write_log(dir: &Path, content: &str) {
    fs::write(dir.join("workout.txt"), content).unwrap();
}
