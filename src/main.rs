use anyhow::{anyhow, bail, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;
use tabled::{settings::Style, Table, Tabled};

use fitunits::{
    config::UNIT_SYSTEM_KEY,
    error::ErrorSeverity,
    logging::{self, LogFormat, LogLevel},
    AppConfig, MeasurementFormatter, ReportFormat, UnitSystem, Workout, WorkoutReport,
    WorkoutType, WorkoutTypeClassifier,
};

/// fitunits - Workout metric display CLI
///
/// Formats recorded workout metrics in a selectable unit system and
/// classifies workouts by their average speed.
#[derive(Parser)]
#[command(name = "fitunits")]
#[command(version)]
#[command(about = "Workout metric display CLI", long_about = None)]
struct Cli {
    /// Sets a custom config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Unit system id to use instead of the configured one
    #[arg(short, long, value_name = "ID")]
    units: Option<i32>,

    /// Increase verbosity of output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Log level (error, warn, info, debug, trace); overrides -v
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<LogLevel>,

    /// Log output format (pretty, json, compact)
    #[arg(long, value_name = "FORMAT")]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the detail report of a workout record
    Show {
        /// Workout record (JSON)
        file: PathBuf,

        /// Output format (text, json)
        #[arg(short = 'f', long, default_value = "text")]
        format: ReportFormat,
    },

    /// List the available unit systems
    Units,

    /// Classify a workout by type and average speed
    Classify {
        /// Workout type (running, cycling, hiking, ...)
        #[arg(short = 't', long = "type")]
        workout_type: String,

        /// Average speed as recorded
        #[arg(short, long)]
        avg_speed: f64,
    },

    /// Read or change configuration settings
    Config {
        /// Get a configuration value
        #[arg(short, long)]
        get: Option<String>,

        /// Set a configuration value (key=value)
        #[arg(short, long)]
        set: Option<String>,
    },
}

#[derive(Tabled)]
struct UnitRow {
    #[tabled(rename = "ID")]
    id: i32,
    #[tabled(rename = "Name")]
    name: &'static str,
    #[tabled(rename = "Distance")]
    distance: String,
    #[tabled(rename = "Speed")]
    speed: &'static str,
    #[tabled(rename = "Active")]
    active: &'static str,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(AppConfig::default_config_path);
    let mut config = AppConfig::load_or_default(&config_path);

    let mut log_config = config.logging.clone();
    if let Some(level) = cli.log_level {
        log_config.level = level;
    } else if cli.verbose > 0 {
        log_config.level = LogLevel::from_verbosity(cli.verbose);
    }
    if let Some(format) = cli.log_format {
        log_config.format = format;
    }
    logging::init_logging(&log_config)?;

    let mut registry = config.unit_registry();
    if let Some(id) = cli.units {
        registry.select(id);
    }
    let formatter = MeasurementFormatter::new(registry.current());

    match cli.command {
        Commands::Show { file, format } => {
            let workout = match Workout::load_from_file(&file) {
                Ok(workout) => workout,
                Err(e) => {
                    match e.severity() {
                        ErrorSeverity::Warning => tracing::warn!(error = %e, "Failed to load workout"),
                        ErrorSeverity::Error => tracing::error!(error = %e, "Failed to load workout"),
                    }
                    bail!(e.user_message());
                }
            };
            let report = WorkoutReport::build(&workout, &formatter);
            print!("{}", report.render(format)?);
        }

        Commands::Units => {
            let rows: Vec<UnitRow> = UnitSystem::ALL
                .into_iter()
                .map(|system| UnitRow {
                    id: system.id(),
                    name: system.name(),
                    distance: format!(
                        "{} / {}",
                        system.short_distance_unit(),
                        system.long_distance_unit()
                    ),
                    speed: system.speed_unit(),
                    active: if system == registry.current() { "*" } else { "" },
                })
                .collect();

            println!("{}", "Unit systems".bold());
            println!("{}", Table::new(rows).with(Style::rounded()));
        }

        Commands::Classify {
            workout_type,
            avg_speed,
        } => {
            let workout_type: WorkoutType = workout_type.parse()?;
            let label = WorkoutTypeClassifier::classify(workout_type, avg_speed);
            println!("{}", label.to_string().green().bold());
        }

        Commands::Config { get, set } => {
            if let Some(key) = get {
                println!("{}", config.get_value(&key)?);
            } else if let Some(key_value) = set {
                let (key, value) = key_value
                    .split_once('=')
                    .ok_or_else(|| anyhow!("Expected key=value, got: {}", key_value))?;

                let selected = config.set_value(key, value)?;
                config.save_to_file(&config_path)?;
                println!("{} {}", "✓ Unit system set to".green(), selected.name());
            } else {
                println!("{}", "Configuration".bold());
                println!("  File: {}", config_path.display());
                println!("  {}: {}", UNIT_SYSTEM_KEY, config.get_value(UNIT_SYSTEM_KEY)?);
                println!("  log level: {}", config.logging.level.to_filter());
            }
        }
    }

    Ok(())
}
