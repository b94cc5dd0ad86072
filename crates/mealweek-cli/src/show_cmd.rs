//! `mealweek show` command: render the 7-day week view.

use anyhow::Result;
use chrono::{Duration, Local, NaiveDate};

use mealweek_core::week::{format_day_heading, week_days, week_start};
use mealweek_store::{MealPlan, MealSlot, PlanStore};

const SLOTS: [MealSlot; 3] = [MealSlot::Breakfast, MealSlot::Lunch, MealSlot::Dinner];
const UNPLANNED: &str = "no meal planned";

/// Run the show command.
///
/// The view covers the Sunday-anchored week containing `anchor` (today
/// when omitted), shifted by `weeks` whole weeks for prev/next navigation.
pub fn run_show(store: &PlanStore, anchor: Option<NaiveDate>, weeks: i64) -> Result<()> {
    let anchor = anchor.unwrap_or_else(|| Local::now().date_naive());
    let start = week_start(anchor) + Duration::weeks(weeks);

    let plan = store.load();
    print!("{}", render_week(&plan, start));
    Ok(())
}

/// Render one week: a range heading, then each day with all three slots.
fn render_week(plan: &MealPlan, start: NaiveDate) -> String {
    let days = week_days(start);
    let mut out = format!(
        "{} - {}\n",
        format_day_heading(days[0]),
        format_day_heading(days[6])
    );

    for day in days {
        out.push('\n');
        out.push_str(&format_day_heading(day));
        out.push('\n');

        let meals = plan.get(&day);
        for slot in SLOTS {
            let name = meals
                .and_then(|m| m.get(&slot))
                .map(String::as_str)
                .unwrap_or(UNPLANNED);
            out.push_str(&format!("  {:<10} {name}\n", slot.to_string()));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use mealweek_test_utils::{date, sample_plan};

    #[test]
    fn renders_planned_and_unplanned_slots() {
        // sample_plan has meals on 2024-01-08 and 2024-01-09; their week
        // starts Sunday 2024-01-07.
        let rendered = render_week(&sample_plan(), date(2024, 1, 7));

        assert!(rendered.contains("Sunday, Jan 7 - Saturday, Jan 13"));
        assert!(rendered.contains("Monday, Jan 8"));
        assert!(rendered.contains("Oatmeal"));
        assert!(rendered.contains("Salad"));
        assert!(rendered.contains("Soup"));
        assert!(rendered.contains(UNPLANNED));
    }

    #[test]
    fn renders_all_seven_days() {
        let rendered = render_week(&MealPlan::new(), date(2024, 1, 7));
        for day in 7..=13 {
            assert!(
                rendered.contains(&format!("Jan {day}")),
                "missing day {day} in:\n{rendered}"
            );
        }
        // Empty week: every slot shows the placeholder.
        assert_eq!(rendered.matches(UNPLANNED).count(), 21);
    }

    #[test]
    fn week_offset_shifts_navigation() {
        let start = week_start(date(2024, 1, 10)) + Duration::weeks(-1);
        assert_eq!(start, date(2023, 12, 31));
        let rendered = render_week(&MealPlan::new(), start);
        assert!(rendered.contains("Sunday, Dec 31 - Saturday, Jan 6"));
    }
}
