//! Meal plan data model and JSON-file persistence.

pub mod config;
pub mod models;
pub mod store;

pub use config::StoreConfig;
pub use models::{DayMeals, MealPlan, MealRecord, MealSlot, MealSlotParseError};
pub use store::PlanStore;
