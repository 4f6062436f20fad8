// ABOUTME: Somatrack CLI - body-composition metrics, scale-export import and record CSV exchange
// ABOUTME: Reads person and history JSON files, runs the engine and writes results back
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Somatrack Contributors
//!
//! Usage:
//! ```bash
//! # Inspect what a scale export contains
//! somatrack-cli parse-scale weight_export.csv
//!
//! # Import a scale export into a history file
//! somatrack-cli import-scale --person ana.json --history ana_history.json weight_export.csv
//!
//! # Derived metrics for every stored measurement
//! somatrack-cli metrics --person ana.json --history ana_history.json --as-of 2025-06-01
//!
//! # Export the history as record CSV and read it back
//! somatrack-cli export --person ana.json --history ana_history.json --output records.csv
//! somatrack-cli import-records --person ana.json --history ana_history.json records.csv
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use somatrack::config::SomatrackConfig;
use somatrack::logging::LoggingConfig;
use somatrack_core::constants::service_names::SOMATRACK_CLI;
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "somatrack-cli",
    about = "Somatrack body-composition CLI",
    long_about = "Compute anthropometric metrics, import bathroom-scale exports and exchange measurement records as CSV."
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
    /// Parse a scale export and print the recognised weigh-ins as JSON
    ParseScale {
        /// Scale export CSV file
        csv: PathBuf,
    },

    /// Import a scale export into a person's measurement history
    ImportScale {
        /// Person profile JSON file
        #[arg(long)]
        person: PathBuf,

        /// Measurement history JSON file (created when missing)
        #[arg(long)]
        history: PathBuf,

        /// Scale export CSV file
        csv: PathBuf,
    },

    /// Print derived metrics for every stored measurement as JSON
    Metrics {
        /// Person profile JSON file
        #[arg(long)]
        person: PathBuf,

        /// Measurement history JSON file
        #[arg(long)]
        history: PathBuf,

        /// Evaluate ages on this date instead of today (YYYY-MM-DD)
        #[arg(long)]
        as_of: Option<NaiveDate>,
    },

    /// Export the measurement history as record CSV
    Export {
        /// Person profile JSON file
        #[arg(long)]
        person: PathBuf,

        /// Measurement history JSON file
        #[arg(long)]
        history: PathBuf,

        /// Output file, stdout when omitted
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Re-import a record CSV into a person's measurement history
    ImportRecords {
        /// Person profile JSON file
        #[arg(long)]
        person: PathBuf,

        /// Measurement history JSON file (created when missing)
        #[arg(long)]
        history: PathBuf,

        /// Record CSV file
        csv: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env().with_service_name(SOMATRACK_CLI);
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging.init()?;

    let config = SomatrackConfig::from_env()?;
    debug!("{}", config.summary());

    match cli.command {
        Command::ParseScale { csv } => commands::scale::parse(&csv, &config.import)?,
        Command::ImportScale {
            person,
            history,
            csv,
        } => commands::scale::import(&person, &history, &csv, &config.import)?,
        Command::Metrics {
            person,
            history,
            as_of,
        } => commands::metrics::show(&person, &history, as_of)?,
        Command::Export {
            person,
            history,
            output,
        } => commands::records::export(&person, &history, output.as_deref())?,
        Command::ImportRecords {
            person,
            history,
            csv,
        } => commands::records::import(&person, &history, &csv)?,
    }

    Ok(())
}
