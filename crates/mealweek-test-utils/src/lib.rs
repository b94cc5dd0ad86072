//! Shared test utilities for mealweek integration tests.
//!
//! Provides a temporary on-disk store per test. The returned `TempDir`
//! must be kept alive for the duration of the test; dropping it deletes
//! the backing directory.

use chrono::NaiveDate;
use tempfile::TempDir;

use mealweek_store::{MealPlan, MealSlot, PlanStore, StoreConfig};

/// Create a store backed by a fresh temporary directory.
///
/// Returns `(tempdir, store)`. The store's file does not exist yet, so the
/// first `load()` sees an empty plan, matching a real first run.
pub fn temp_store() -> (TempDir, PlanStore) {
    let tmp = TempDir::new().expect("failed to create temp dir");
    let store = PlanStore::open(&StoreConfig::new(tmp.path().join("meals.json")));
    (tmp, store)
}

/// A calendar date for tests, panicking on invalid components.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap_or_else(|| panic!("invalid test date {year}-{month}-{day}"))
}

/// A small pre-populated plan: two days, three meals.
pub fn sample_plan() -> MealPlan {
    let mut plan = MealPlan::new();
    plan.entry(date(2024, 1, 8))
        .or_default()
        .insert(MealSlot::Breakfast, "Oatmeal".to_string());
    plan.entry(date(2024, 1, 8))
        .or_default()
        .insert(MealSlot::Lunch, "Salad".to_string());
    plan.entry(date(2024, 1, 9))
        .or_default()
        .insert(MealSlot::Dinner, "Soup".to_string());
    plan
}
