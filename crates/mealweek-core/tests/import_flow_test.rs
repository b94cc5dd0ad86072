//! End-to-end import flow: parse CSV, merge, persist, reload.

use mealweek_core::csv::{ImportError, import_csv};
use mealweek_core::plan::set_meal;
use mealweek_store::MealSlot;
use mealweek_test_utils::{date, sample_plan, temp_store};

#[test]
fn import_then_save_then_reload() {
    let (_tmp, store) = temp_store();
    let mut plan = store.load();
    assert!(plan.is_empty());

    let text = "date,type,meal\n\
                2024-01-08,breakfast,Oatmeal\n\
                2024-01-08,lunch,Salad\n\
                2024-01-09,dinner,Soup\n";
    let report = import_csv(&mut plan, text).expect("import should succeed");
    assert_eq!(report.records.len(), 3);

    store.save(&plan).expect("save should succeed");

    let reloaded = store.load();
    assert_eq!(reloaded, plan);
    assert_eq!(reloaded[&date(2024, 1, 8)][&MealSlot::Lunch], "Salad");
}

#[test]
fn second_import_overrides_first_for_same_cell() {
    let (_tmp, store) = temp_store();
    let mut plan = store.load();

    import_csv(&mut plan, "date,type,meal\n2024-01-08,breakfast,Oatmeal\n").unwrap();
    store.save(&plan).unwrap();

    // A later import re-specifies the same (date, slot) with a new name.
    let mut plan = store.load();
    import_csv(&mut plan, "date,type,meal\n2024-01-08,breakfast,Granola\n").unwrap();
    store.save(&plan).unwrap();

    let final_plan = store.load();
    assert_eq!(
        final_plan[&date(2024, 1, 8)][&MealSlot::Breakfast],
        "Granola"
    );
}

#[test]
fn failed_import_does_not_disturb_saved_plan() {
    let (_tmp, store) = temp_store();
    let plan = sample_plan();
    store.save(&plan).unwrap();

    let mut loaded = store.load();
    let err = import_csv(&mut loaded, "date,type,meal\n\n\n").unwrap_err();
    assert_eq!(err, ImportError::NoValidMeals);

    // Nothing changed in memory, so nothing to save; disk still matches.
    assert_eq!(loaded, plan);
    assert_eq!(store.load(), plan);
}

#[test]
fn import_extends_manually_added_meals() {
    let (_tmp, store) = temp_store();
    let mut plan = store.load();

    set_meal(&mut plan, date(2024, 1, 7), MealSlot::Dinner, "Roast").unwrap();
    import_csv(&mut plan, "date,type,meal\n2024-01-08,lunch,Salad\n").unwrap();
    store.save(&plan).unwrap();

    let reloaded = store.load();
    assert_eq!(reloaded[&date(2024, 1, 7)][&MealSlot::Dinner], "Roast");
    assert_eq!(reloaded[&date(2024, 1, 8)][&MealSlot::Lunch], "Salad");
}
