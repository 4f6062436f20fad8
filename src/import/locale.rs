// ABOUTME: Localized month abbreviations found in scale-export date markers
// ABOUTME: Maps locale-specific month tokens onto the canonical English abbreviations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Somatrack Contributors

use serde::{Deserialize, Serialize};
use somatrack_core::errors::AppError;
use std::fmt;
use std::str::FromStr;

/// Spanish abbreviation and its canonical English form, January first
const SPANISH_MONTHS: [(&str, &str); 12] = [
    ("Ene", "Jan"),
    ("Feb", "Feb"),
    ("Mar", "Mar"),
    ("Abr", "Apr"),
    ("May", "May"),
    ("Jun", "Jun"),
    ("Jul", "Jul"),
    ("Ago", "Aug"),
    ("Sep", "Sep"),
    ("Oct", "Oct"),
    ("Nov", "Nov"),
    ("Dic", "Dec"),
];

/// Language of the month names written by the scale application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MonthLocale {
    /// `Ene`, `Abr`, `Ago`, `Dic`, ...
    #[default]
    Spanish,
    /// Canonical `Jan`..`Dec`
    English,
}

impl MonthLocale {
    /// Short code used in configuration
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Spanish => "es",
            Self::English => "en",
        }
    }

    /// Canonical abbreviation for a localized month token, if it is one
    #[must_use]
    pub fn canonical_month(&self, token: &str) -> Option<&'static str> {
        match self {
            Self::Spanish => SPANISH_MONTHS
                .iter()
                .find(|(local, _)| local.eq_ignore_ascii_case(token))
                .map(|(_, canonical)| *canonical),
            Self::English => None,
        }
    }

    /// Rewrite every localized month token of a date marker.
    ///
    /// Other tokens pass through unchanged and runs of whitespace collapse to
    /// a single space.
    #[must_use]
    pub fn normalize_date_marker(&self, marker: &str) -> String {
        marker
            .split_whitespace()
            .map(|token| self.canonical_month(token).unwrap_or(token))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for MonthLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for MonthLocale {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "es" | "spanish" => Ok(Self::Spanish),
            "en" | "english" => Ok(Self::English),
            other => Err(AppError::config(format!(
                "Unsupported month locale '{other}', expected 'es' or 'en'"
            ))),
        }
    }
}
