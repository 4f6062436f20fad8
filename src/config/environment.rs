// ABOUTME: Environment configuration for logging and scale-export import settings
// ABOUTME: Parses SOMATRACK_* variables with typed defaults and validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Somatrack Contributors

//! Environment-based configuration

use crate::errors::{AppError, AppResult};
use crate::import::locale::MonthLocale;
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use somatrack_core::constants::env_config::{
    CSV_DELIMITER, CSV_HEADER_ROWS, CSV_LOCALE, DEFAULT_DELIMITER, DEFAULT_HEADER_ROWS,
};
use std::env;
use tracing::debug;

/// Layout of the scale exports being imported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportConfig {
    /// Records skipped before parsing starts
    pub header_rows: usize,
    /// Language of the month names in date markers
    pub month_locale: MonthLocale,
    /// Field delimiter byte
    pub delimiter: u8,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            header_rows: DEFAULT_HEADER_ROWS,
            month_locale: MonthLocale::default(),
            delimiter: DEFAULT_DELIMITER,
        }
    }
}

impl ImportConfig {
    /// Load import settings from environment variables
    ///
    /// # Errors
    ///
    /// Returns a `ConfigInvalid` error when a variable is set to an unusable value
    pub fn from_env() -> AppResult<Self> {
        let header_rows = match env::var(CSV_HEADER_ROWS) {
            Ok(value) => value.trim().parse().map_err(|_| {
                AppError::config(format!(
                    "Invalid {CSV_HEADER_ROWS} value '{value}', expected a non-negative integer"
                ))
            })?,
            Err(_) => DEFAULT_HEADER_ROWS,
        };

        let month_locale = match env::var(CSV_LOCALE) {
            Ok(value) => value.parse()?,
            Err(_) => MonthLocale::default(),
        };

        let delimiter = match env::var(CSV_DELIMITER) {
            Ok(value) => parse_delimiter(&value)?,
            Err(_) => DEFAULT_DELIMITER,
        };

        let config = Self {
            header_rows,
            month_locale,
            delimiter,
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject delimiters the CSV reader cannot use
    ///
    /// # Errors
    ///
    /// Returns a `ConfigInvalid` error for quote, line-break or non-ASCII delimiters
    pub fn validate(&self) -> AppResult<()> {
        if !self.delimiter.is_ascii() || matches!(self.delimiter, b'"' | b'\n' | b'\r') {
            return Err(AppError::config(format!(
                "Delimiter byte {:#04x} cannot separate CSV fields",
                self.delimiter
            )));
        }
        Ok(())
    }
}

fn parse_delimiter(value: &str) -> AppResult<u8> {
    match value {
        "tab" | "\\t" | "\t" => Ok(b'\t'),
        _ => match value.as_bytes() {
            [byte] => Ok(*byte),
            _ => Err(AppError::config(format!(
                "Invalid {CSV_DELIMITER} value '{value}', expected a single character"
            ))),
        },
    }
}

/// Complete application configuration
#[derive(Debug, Clone)]
pub struct SomatrackConfig {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Scale-export import settings
    pub import: ImportConfig,
}

impl SomatrackConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns a `ConfigInvalid` error when an import variable is unusable
    pub fn from_env() -> AppResult<Self> {
        let config = Self {
            logging: LoggingConfig::from_env(),
            import: ImportConfig::from_env()?,
        };
        debug!("Configuration loaded: {}", config.summary());
        Ok(config)
    }

    /// One-line summary for logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "log_level={} log_format={:?} csv_header_rows={} csv_locale={} csv_delimiter={:?}",
            self.logging.level,
            self.logging.format,
            self.import.header_rows,
            self.import.month_locale,
            char::from(self.import.delimiter)
        )
    }
}
