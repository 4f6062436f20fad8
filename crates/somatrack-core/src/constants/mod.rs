// ABOUTME: Application-wide constants for Somatrack organized by domain
// ABOUTME: Service names, skinfold sampling policy, and timestamp formats
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Somatrack Contributors

/// Service identifiers used in structured logging
pub mod service_names {
    /// Name reported by the command-line tool
    pub const SOMATRACK_CLI: &str = "somatrack-cli";
    /// Default service name for library consumers
    pub const SOMATRACK: &str = "somatrack";
}

/// Skinfold sampling policy
pub mod skinfolds {
    /// Raw caliper readings taken per site
    pub const READINGS_PER_SITE: usize = 3;

    /// Minimum readings required before a site average is trusted.
    /// A single reading is considered too noisy.
    pub const MIN_VALID_READINGS: usize = 2;
}

/// Timestamp layouts shared by import and export
pub mod formats {
    /// Full timestamp layout used by the record CSV
    pub const RECORD_TIMESTAMP: &str = "%Y-%m-%d %H:%M:%S";

    /// Date-only layout accepted on record CSV re-import
    pub const RECORD_DATE: &str = "%Y-%m-%d";
}

/// Environment variable names and their defaults
pub mod env_config {
    /// Rows skipped before scale-export parsing starts
    pub const CSV_HEADER_ROWS: &str = "SOMATRACK_CSV_HEADER_ROWS";
    /// Month-name locale of scale-export date markers (`es` or `en`)
    pub const CSV_LOCALE: &str = "SOMATRACK_CSV_LOCALE";
    /// Single-byte field delimiter of scale exports
    pub const CSV_DELIMITER: &str = "SOMATRACK_CSV_DELIMITER";

    /// Default header rows in a scale export
    pub const DEFAULT_HEADER_ROWS: usize = 1;
    /// Default field delimiter
    pub const DEFAULT_DELIMITER: u8 = b',';
}

/// Scale-export layout
pub mod scale_export {
    /// Date marker layout after month-name normalization, e.g. `05 Jan 2025`
    pub const DATE_MARKER: &str = "%d %b %Y";
    /// Sample time layout, e.g. `7:45 am`
    pub const SAMPLE_TIME: &str = "%I:%M %p";
    /// Placeholder the device writes for a missing value
    pub const MISSING_VALUE: &str = "--";
    /// Column holding the weight text
    pub const WEIGHT_COLUMN: usize = 1;
    /// Column holding the device BMI
    pub const BMI_COLUMN: usize = 3;
    /// Minimum cells in a sample row
    pub const MIN_SAMPLE_CELLS: usize = 2;
}
