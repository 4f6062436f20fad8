// ABOUTME: Single-pass scale-export parser driven by the row recognizer
// ABOUTME: Idle/HaveDate state machine yielding weigh-ins lazily in source order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Somatrack Contributors

use super::locale::MonthLocale;
use super::recognizer::{classify_row, parse_sample, RowKind, SampleRejection, WeighIn};
use crate::config::ImportConfig;
use crate::errors::AppResult;
use crate::logging::ImportLogger;
use chrono::NaiveDate;
use csv::ReaderBuilder;
use somatrack_core::errors::ImportError;
use tracing::debug;

/// Parser state carried from row to row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParserState {
    /// No date marker seen yet
    Idle,
    /// Samples belong to this date
    HaveDate(NaiveDate),
}

/// Lazy parser over `(line, cells)` rows of a scale export.
///
/// Malformed rows are skipped and counted; they never end the pass.
pub struct ScaleExportParser<I> {
    rows: I,
    locale: MonthLocale,
    state: ParserState,
    skipped: usize,
}

impl<I> ScaleExportParser<I>
where
    I: Iterator<Item = (usize, Vec<String>)>,
{
    /// Parser over already-split rows, each tagged with its line number
    pub fn new(rows: I, locale: MonthLocale) -> Self {
        Self {
            rows,
            locale,
            state: ParserState::Idle,
            skipped: 0,
        }
    }

    /// Rows dropped so far (noise, bad markers, malformed samples)
    #[must_use]
    pub const fn skipped(&self) -> usize {
        self.skipped
    }

    /// Date the next sample row would be attached to
    #[must_use]
    pub const fn current_date(&self) -> Option<NaiveDate> {
        match self.state {
            ParserState::Idle => None,
            ParserState::HaveDate(date) => Some(date),
        }
    }

    fn skip(&mut self, line: usize, reason: &str) {
        self.skipped += 1;
        ImportLogger::log_row_skipped(line, reason);
    }
}

impl<I> Iterator for ScaleExportParser<I>
where
    I: Iterator<Item = (usize, Vec<String>)>,
{
    type Item = WeighIn;

    fn next(&mut self) -> Option<WeighIn> {
        loop {
            let (line, cells) = self.rows.next()?;
            match (classify_row(&cells, self.locale), self.state) {
                (RowKind::Blank, _) => {}
                (RowKind::DateMarker(Some(date)), _) => self.state = ParserState::HaveDate(date),
                (RowKind::DateMarker(None), _) => self.skip(line, "unparsable date marker"),
                (RowKind::SampleCandidate, ParserState::Idle) => {
                    self.skip(line, &SampleRejection::NoDate.to_string());
                }
                (RowKind::SampleCandidate, ParserState::HaveDate(date)) => {
                    match parse_sample(date, &cells) {
                        Ok(weigh_in) => return Some(weigh_in),
                        Err(rejection) => self.skip(line, &rejection.to_string()),
                    }
                }
                (RowKind::Noise, _) => self.skip(line, "unrecognized row"),
            }
        }
    }
}

/// Parser over in-memory rows numbered from 1, with no header skipping
pub fn parse_rows<R, S>(
    rows: R,
    locale: MonthLocale,
) -> ScaleExportParser<impl Iterator<Item = (usize, Vec<String>)>>
where
    R: IntoIterator,
    R::Item: IntoIterator<Item = S>,
    S: Into<String>,
{
    let numbered = rows
        .into_iter()
        .map(|row| row.into_iter().map(Into::into).collect::<Vec<String>>())
        .enumerate()
        .map(|(index, cells)| (index + 1, cells));
    ScaleExportParser::new(numbered, locale)
}

/// Read a scale export and return its weigh-ins in source order.
///
/// The first `config.header_rows` records are skipped. Empty lines are not
/// records, so they do not count towards the header.
///
/// # Errors
///
/// Returns `ImportError::Csv` when the CSV reader fails
pub fn parse_scale_export(content: &str, config: &ImportConfig) -> AppResult<Vec<WeighIn>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(config.delimiter)
        .from_reader(content.as_bytes());

    let mut rows = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record.map_err(|e| ImportError::Csv(e.to_string()))?;
        if index < config.header_rows {
            continue;
        }
        let line = record
            .position()
            .map_or(index + 1, |pos| usize::try_from(pos.line()).unwrap_or(usize::MAX));
        rows.push((line, record.iter().map(str::to_owned).collect()));
    }

    let mut parser = ScaleExportParser::new(rows.into_iter(), config.month_locale);
    let weigh_ins: Vec<WeighIn> = parser.by_ref().collect();
    debug!(
        parsed = weigh_ins.len(),
        skipped = parser.skipped(),
        "Parsed scale export"
    );
    Ok(weigh_ins)
}
