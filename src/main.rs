use clap::Parser;
use gymlog::application::manage_config::CONFIG_KEYS;
use gymlog::application::{
    init::init, ConfigService, ParseLogService, ReportOptions, ReportService,
};
use gymlog::cli::{format_food_quantities, format_parse_summary, format_report, Cli, Commands};
use gymlog::domain::FoodQuantities;
use gymlog::error::GymlogError;
use gymlog::infrastructure::{Config, CsvTableRepository};
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (e.g. `gymlog=debug`)
const LOG_ENV: &str = "GYMLOG_LOG";

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<(), GymlogError> {
    match cli.command {
        Commands::Parse {
            input,
            exercise_csv,
            session_csv,
        } => {
            let config = Config::load(cli.config.as_deref())?;
            let input = input.unwrap_or(config.input);
            let repo = CsvTableRepository::new(
                exercise_csv.unwrap_or(config.exercise_csv),
                session_csv.unwrap_or(config.session_csv),
            );

            let log = ParseLogService::new(&repo).execute(&input)?;
            print!(
                "{}",
                format_parse_summary(&log, &repo.exercise_csv, &repo.session_csv)
            );
            Ok(())
        }
        Commands::Preworkout { meal } => {
            let quantities = FoodQuantities::from_preworkout(Some(&meal))?;
            print!("{}", format_food_quantities(&quantities));
            Ok(())
        }
        Commands::Report {
            input,
            from_csv,
            muscle,
            exercise,
        } => {
            let config = Config::load(cli.config.as_deref())?;
            let options = ReportOptions {
                excluded_muscles: config.excluded_muscles.clone(),
                excluded_exercises: config.excluded_exercises.clone(),
                stall_exercise: exercise.zip(muscle.clone()),
                target_muscle: muscle,
            };

            let report = if from_csv {
                let repo = CsvTableRepository::new(config.exercise_csv, config.session_csv);
                ReportService::from_tables(&repo, &options)?
            } else {
                let input = input.unwrap_or(config.input);
                ReportService::from_log(&input, &options)?
            };
            println!("{}", format_report(&report));
            Ok(())
        }
        Commands::Init { dir } => {
            let path = init(&dir)?;
            println!("Wrote default configuration to {}", path.display());
            Ok(())
        }
        Commands::Config { key, list } => {
            let service = ConfigService::new(Config::load(cli.config.as_deref())?);

            if list {
                for (k, v) in service.list()? {
                    println!("{} = {}", k, v);
                }
            } else if let Some(k) = key {
                println!("{}", service.get(&k)?);
            } else {
                println!("Usage: gymlog config [--list | <key>]");
                println!("Valid keys: {}", CONFIG_KEYS.join(", "));
            }
            Ok(())
        }
    }
}
