//! CSV meal importer with per-line validation.
//!
//! Parses `date,meal_type,meal_name` rows into validated [`MealRecord`]s:
//! - Line 1 is a header and is skipped without inspection.
//! - The meal type must be one of the three slots (case-insensitive).
//! - The date must be `YYYY-MM-DD` calendar components; non-canonical but
//!   parseable forms (e.g. `2024-3-5`) normalize through the typed date.
//! - The meal name must be non-empty after trimming.
//!
//! CSV files are user-authored, so a malformed row never aborts the batch:
//! each bad line is logged, recorded in the report, and skipped. Only a
//! batch that yields zero valid rows is an error.
//!
//! There is no quoting or escaping support. Rows are split on commas and
//! any fields after the third are ignored, so a meal name containing a
//! comma is truncated at the comma.

use chrono::NaiveDate;
use thiserror::Error;
use tracing::warn;

use mealweek_store::{MealPlan, MealRecord, MealSlot};

use crate::plan::merge_batch;

/// Why a CSV line was skipped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkipReason {
    #[error("expected 3 fields: date, meal type, meal name")]
    MissingFields,

    #[error("invalid meal type {0:?} (expected breakfast, lunch, or dinner)")]
    InvalidSlot(String),

    #[error("invalid date {0:?} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("meal name is empty")]
    EmptyName,
}

/// A data line that was dropped, with its 1-based line number in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    pub line_no: usize,
    pub reason: SkipReason,
}

/// Outcome of parsing a CSV document.
#[derive(Debug, Clone, Default)]
pub struct ImportReport {
    /// Valid records, in input order.
    pub records: Vec<MealRecord>,
    /// Dropped data lines. Blank lines are not counted.
    pub skipped: Vec<SkippedLine>,
}

/// Batch-level import errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImportError {
    #[error("no valid meal rows found in the CSV input")]
    NoValidMeals,
}

/// Parse CSV text into validated meal records.
///
/// Never fails: per-line problems are absorbed into the report. Use
/// [`import_csv`] to also merge the records and surface the empty-batch
/// condition.
pub fn parse_meal_csv(text: &str) -> ImportReport {
    let mut report = ImportReport::default();

    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;

        // Line 1 is the header, skipped unconditionally.
        if line_no == 1 {
            continue;
        }
        if line.trim().is_empty() {
            continue;
        }

        match parse_line(line) {
            Ok(record) => report.records.push(record),
            Err(reason) => {
                warn!("skipping CSV line {line_no} ({line:?}): {reason}");
                report.skipped.push(SkippedLine { line_no, reason });
            }
        }
    }

    report
}

/// Parse, then merge into the plan.
///
/// Fails with [`ImportError::NoValidMeals`] when the input produced zero
/// valid records (header-only, all-blank, or all-invalid), leaving the
/// plan untouched. Otherwise applies the records in order (last write wins
/// for duplicate date/slot pairs) and returns the report.
pub fn import_csv(plan: &mut MealPlan, text: &str) -> Result<ImportReport, ImportError> {
    let report = parse_meal_csv(text);

    if report.records.is_empty() {
        return Err(ImportError::NoValidMeals);
    }

    merge_batch(plan, &report.records);
    Ok(report)
}

/// Validate a single data line.
fn parse_line(line: &str) -> Result<MealRecord, SkipReason> {
    // Split on commas; fields past the third are dropped (no quoting
    // support, documented truncation).
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() < 3 || fields[..3].iter().any(|f| f.is_empty()) {
        return Err(SkipReason::MissingFields);
    }

    let slot_raw = fields[1].trim().to_lowercase();
    let slot: MealSlot = slot_raw
        .parse()
        .map_err(|_| SkipReason::InvalidSlot(fields[1].trim().to_string()))?;

    let date = parse_date(fields[0])
        .ok_or_else(|| SkipReason::InvalidDate(fields[0].trim().to_string()))?;

    let name = fields[2].trim();
    if name.is_empty() {
        return Err(SkipReason::EmptyName);
    }

    Ok(MealRecord {
        date,
        slot,
        name: name.to_string(),
    })
}

/// Parse `YYYY-MM-DD` into a calendar date.
///
/// Splits on `-` and builds the date from local calendar components via
/// [`NaiveDate::from_ymd_opt`]; no timezone is involved, so there is no
/// off-by-one-day shift. Out-of-range components (e.g. `2024-02-31`) are
/// rejected rather than rolled over.
fn parse_date(raw: &str) -> Option<NaiveDate> {
    let parts: Vec<&str> = raw.trim().split('-').collect();
    if parts.len() != 3 {
        return None;
    }

    let year: i32 = parts[0].parse().ok()?;
    let month: u32 = parts[1].parse().ok()?;
    let day: u32 = parts[2].parse().ok()?;

    NaiveDate::from_ymd_opt(year, month, day)
}
