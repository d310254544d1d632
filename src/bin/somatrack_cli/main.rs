// ABOUTME: Somatrack CLI - command-line access to the comparison engine and lab summaries
// ABOUTME: Reads keypoint or report files and prints results as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Compare two photos' pose keypoints
//! somatrack-cli compare --from before.json --to after.json --pretty
//!
//! # Summarize lab report text
//! somatrack-cli lab-summary --file report.txt
//! ```

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use somatrack::config::ServerConfig;
use somatrack::errors::{AppError, AppResult};
use somatrack::logging::{LogFormat, LoggingConfig};

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "somatrack-cli",
    about = "Somatrack body progress CLI",
    long_about = "Run the pose-based body comparison and lab report summaries from the command line."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Compare two keypoint sets and print the comparison result
    Compare {
        /// Keypoints of the baseline photo (JSON object of landmark -> {x, y, confidence})
        #[arg(long)]
        from: PathBuf,

        /// Keypoints of the follow-up photo
        #[arg(long)]
        to: PathBuf,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Summarize a plain-text lab report
    LabSummary {
        /// Report text file
        #[arg(long)]
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    logging.format = LogFormat::Compact;
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging
        .init()
        .map_err(|e| AppError::config(format!("Failed to initialize logging: {e}")))?;

    let config = ServerConfig::from_env()?;

    let output = match cli.command {
        Command::Compare { from, to, pretty } => {
            commands::compare::run(&config, &from, &to, pretty).await?
        }
        Command::LabSummary { file } => commands::lab::summary(&config, &file).await?,
    };
    println!("{output}");
    Ok(())
}
