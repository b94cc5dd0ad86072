//! Mutations on the in-memory meal plan.
//!
//! The plan is an explicit value owned by the caller and threaded through
//! each operation; there is no ambient global state. Persistence is the
//! caller's job (save after every successful mutation).

use chrono::NaiveDate;
use thiserror::Error;
use tracing::warn;

use mealweek_store::{MealPlan, MealRecord, MealSlot};

/// Errors that can occur when assigning a single meal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetMealError {
    #[error("meal name is empty")]
    EmptyMealName,
}

/// Assign `name` to the (`date`, `slot`) cell of the plan.
///
/// The name is trimmed before storage; an empty or whitespace-only name is
/// rejected and the plan is left untouched. Creates the date entry if
/// absent. Setting the same value twice is a no-op.
///
/// Invalid dates and slots cannot reach this function: the parameters are
/// typed, so textual validation happens where text enters the system (CLI
/// arguments, CSV fields).
pub fn set_meal(
    plan: &mut MealPlan,
    date: NaiveDate,
    slot: MealSlot,
    name: &str,
) -> Result<(), SetMealError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(SetMealError::EmptyMealName);
    }

    plan.entry(date).or_default().insert(slot, trimmed.to_string());
    Ok(())
}

/// Apply a batch of validated records to the plan, in input order.
///
/// Later records for the same (date, slot) overwrite earlier ones within
/// the batch. Records come pre-validated from the CSV importer; a record
/// that still fails validation is skipped with a warning rather than
/// aborting the batch. Returns the number of records applied.
pub fn merge_batch(plan: &mut MealPlan, records: &[MealRecord]) -> usize {
    let mut applied = 0;
    for record in records {
        match set_meal(plan, record.date, record.slot, &record.name) {
            Ok(()) => applied += 1,
            Err(e) => warn!(
                "skipping record {}/{}: {e}",
                record.date, record.slot
            ),
        }
    }
    applied
}
