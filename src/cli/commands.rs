//! CLI command definitions

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "gymlog")]
#[command(about = "Workout diary parser and statistics", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (default: $GYMLOG_CONFIG, then ./gymlog.toml)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse a workout diary into exercise and session CSV tables
    Parse {
        /// Workout diary (default: 'input' from config)
        input: Option<PathBuf>,

        /// Exercise table output path
        #[arg(long, value_name = "FILE")]
        exercise_csv: Option<PathBuf>,

        /// Session table output path
        #[arg(long, value_name = "FILE")]
        session_csv: Option<PathBuf>,
    },

    /// Count tracked foods in a pre-workout meal (e.g. "2 banana & coffee")
    Preworkout {
        /// Meal description
        meal: String,
    },

    /// Print workout statistics
    Report {
        /// Workout diary (default: 'input' from config)
        input: Option<PathBuf>,

        /// Read the exported CSV tables instead of the diary
        #[arg(long, conflicts_with = "input")]
        from_csv: bool,

        /// Muscle group for the best-meal section
        #[arg(short, long)]
        muscle: Option<String>,

        /// Exercise to check for stall points (needs --muscle)
        #[arg(short, long, requires = "muscle")]
        exercise: Option<String>,
    },

    /// Write a default gymlog.toml
    Init {
        /// Directory to write into (default: current directory)
        #[arg(default_value = ".")]
        dir: PathBuf,
    },

    /// Show configuration values
    Config {
        /// Config key to show
        key: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
