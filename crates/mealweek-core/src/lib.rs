//! Core meal-plan operations: single-meal assignment, CSV import, week math.

pub mod csv;
pub mod plan;
pub mod week;

pub use csv::{ImportError, ImportReport, SkipReason, SkippedLine, import_csv, parse_meal_csv};
pub use plan::{SetMealError, merge_batch, set_meal};
pub use week::{format_day_heading, week_days, week_start};
