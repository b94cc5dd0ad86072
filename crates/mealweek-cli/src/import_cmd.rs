//! `mealweek import` command: bulk CSV import with a preview summary.

use std::path::Path;

use anyhow::{Context, Result, bail};

use mealweek_core::csv::{ImportError, ImportReport, import_csv};
use mealweek_store::PlanStore;

/// Run the import command.
///
/// Reads the whole file, merges valid rows into the plan, saves, and
/// prints what was imported and what was skipped. A file with zero valid
/// rows leaves the plan untouched and is reported as an error.
pub fn run_import(store: &PlanStore, file: &Path) -> Result<()> {
    let text = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read CSV file: {}", file.display()))?;

    let mut plan = store.load();
    let report = match import_csv(&mut plan, &text) {
        Ok(report) => report,
        Err(ImportError::NoValidMeals) => {
            bail!(
                "no valid meals found in {}\nExpected a header line followed by \
                 `YYYY-MM-DD,breakfast|lunch|dinner,meal name` rows.",
                file.display()
            );
        }
    };

    store.save(&plan)?;
    print!("{}", render_summary(&report));
    Ok(())
}

/// Import preview: every merged record, then any skipped lines.
fn render_summary(report: &ImportReport) -> String {
    let mut out = String::new();

    out.push_str(&format!("Imported {} meal(s):\n", report.records.len()));
    for record in &report.records {
        out.push_str(&format!(
            "  {}  {:<9}  {}\n",
            record.date,
            record.slot.to_string(),
            record.name
        ));
    }

    if !report.skipped.is_empty() {
        out.push_str(&format!("\nSkipped {} line(s):\n", report.skipped.len()));
        for line in &report.skipped {
            out.push_str(&format!("  line {}: {}\n", line.line_no, line.reason));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use mealweek_core::csv::parse_meal_csv;
    use mealweek_store::MealSlot;
    use mealweek_test_utils::{date, temp_store};

    #[test]
    fn import_reads_file_and_persists() {
        let (tmp, store) = temp_store();
        let csv_path = tmp.path().join("meals.csv");
        fs::write(
            &csv_path,
            "date,type,meal\n2024-01-08,breakfast,Oatmeal\n2024-01-09,dinner,Soup\n",
        )
        .unwrap();

        run_import(&store, &csv_path).unwrap();

        let plan = store.load();
        assert_eq!(plan[&date(2024, 1, 8)][&MealSlot::Breakfast], "Oatmeal");
        assert_eq!(plan[&date(2024, 1, 9)][&MealSlot::Dinner], "Soup");
    }

    #[test]
    fn import_missing_file_is_an_error() {
        let (tmp, store) = temp_store();
        let result = run_import(&store, &tmp.path().join("nope.csv"));
        assert!(result.is_err());
    }

    #[test]
    fn import_file_with_no_valid_rows_is_an_error() {
        let (tmp, store) = temp_store();
        let csv_path = tmp.path().join("meals.csv");
        fs::write(&csv_path, "date,type,meal\nnope,brunch,\n").unwrap();

        let err = run_import(&store, &csv_path).unwrap_err();
        assert!(
            err.to_string().contains("no valid meals found"),
            "unexpected error: {err}"
        );
        assert!(store.load().is_empty());
    }

    #[test]
    fn summary_lists_records_and_skips() {
        let report = parse_meal_csv(
            "date,type,meal\n2024-01-08,breakfast,Oatmeal\n2024-01-09,brunch,Pancakes\n",
        );
        let summary = render_summary(&report);

        assert!(summary.contains("Imported 1 meal(s):"));
        assert!(summary.contains("2024-01-08  breakfast  Oatmeal"));
        assert!(summary.contains("Skipped 1 line(s):"));
        assert!(summary.contains("line 3"));
        assert!(summary.contains("brunch"));
    }
}
