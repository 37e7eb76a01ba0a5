//! gradebook CLI — prints the records and statistics of a sample university.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

mod commands;
mod config;
mod render;
mod sample;

#[derive(Parser)]
#[command(name = "gradebook", version, about = "University grade book and statistics")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print students, teachers, courses and grade statistics
    Report {
        /// Output format: text, table, json
        #[arg(long)]
        format: Option<String>,

        /// Grade threshold for the better-or-equal list (default: the average)
        #[arg(long)]
        threshold: Option<Decimal>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Print the institution-wide average grade
    Average {
        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// List students whose average is better than or equal to a threshold
    Students {
        /// Grade threshold (default: the institution average)
        #[arg(long)]
        threshold: Option<Decimal>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create a starter config file
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("gradebook=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Report {
            format,
            threshold,
            config,
        } => commands::report::execute(format, threshold, config),
        Commands::Average { config } => commands::average::execute(config),
        Commands::Students { threshold, config } => commands::students::execute(threshold, config),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
