//! deepcheck CLI
//!
//! Command-line interface for deep-equality assertions

use clap::{Parser, Subcommand, ValueEnum};
use deepcheck_core::logging_facility::{self, Profile};
use std::path::PathBuf;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "deepcheck")]
#[command(about = "deepcheck - Deep-equality assertions with divergence paths", long_about = None)]
struct Cli {
    /// TOML file with comparison options (max_depth, date_format)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log output on stderr
    #[arg(long, global = true, value_enum, default_value_t = LogMode::Off)]
    log: LogMode,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogMode {
    Off,
    Pretty,
    Json,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Compare two JSON value files
    Compare(commands::compare::CompareArgs),
    /// Run every case in a YAML or JSON case file
    Run(commands::run::RunArgs),
    /// Run the built-in reference suite
    Demo(commands::demo::DemoArgs),
}

fn main() {
    let cli = Cli::parse();

    match cli.log {
        LogMode::Off => {}
        LogMode::Pretty => logging_facility::init(Profile::Development),
        LogMode::Json => logging_facility::init(Profile::Production),
    }

    let result = commands::load_options(cli.config.as_deref()).and_then(|options| {
        match cli.command {
            Commands::Compare(args) => commands::compare::execute(args, &options),
            Commands::Run(args) => commands::run::execute(args, &options),
            Commands::Demo(args) => commands::demo::execute(args, &options),
        }
    });

    match result {
        Ok(commands::Outcome::Passed) => {}
        Ok(commands::Outcome::Failed) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
