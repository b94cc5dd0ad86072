//! `mealweek add` command: assign a single meal to a date and slot.

use anyhow::Result;
use chrono::NaiveDate;

use mealweek_core::plan::set_meal;
use mealweek_store::{MealSlot, PlanStore};

/// Run the add command.
///
/// The slot is accepted case-insensitively; the meal name must be
/// non-empty after trimming. On success the full plan is saved.
pub fn run_add(store: &PlanStore, date: NaiveDate, slot_raw: &str, name: &str) -> Result<()> {
    let slot: MealSlot = slot_raw.trim().to_lowercase().parse()?;

    let mut plan = store.load();
    set_meal(&mut plan, date, slot, name)?;
    store.save(&plan)?;

    println!("Planned {slot} on {date}: {}", name.trim());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mealweek_test_utils::{date, temp_store};

    #[test]
    fn add_persists_the_meal() {
        let (_tmp, store) = temp_store();
        run_add(&store, date(2024, 1, 8), "Breakfast", "Oatmeal").unwrap();

        let plan = store.load();
        assert_eq!(plan[&date(2024, 1, 8)][&MealSlot::Breakfast], "Oatmeal");
    }

    #[test]
    fn add_rejects_empty_name_and_writes_nothing() {
        let (_tmp, store) = temp_store();
        let result = run_add(&store, date(2024, 1, 8), "dinner", "   ");
        assert!(result.is_err());
        assert!(store.load().is_empty());
    }

    #[test]
    fn add_rejects_unknown_slot() {
        let (_tmp, store) = temp_store();
        let result = run_add(&store, date(2024, 1, 8), "brunch", "Pancakes");
        assert!(result.is_err());
        assert!(store.load().is_empty());
    }
}
