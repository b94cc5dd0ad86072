use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// One of the three meal times a day is divided into.
///
/// This is a closed set: values outside it are rejected at the parse
/// boundary, never coerced. Variant order gives the natural display order
/// within a day.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
        };
        f.write_str(s)
    }
}

impl FromStr for MealSlot {
    type Err = MealSlotParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "breakfast" => Ok(Self::Breakfast),
            "lunch" => Ok(Self::Lunch),
            "dinner" => Ok(Self::Dinner),
            other => Err(MealSlotParseError(other.to_owned())),
        }
    }
}

/// Error returned when parsing an invalid [`MealSlot`] string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealSlotParseError(pub String);

impl fmt::Display for MealSlotParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid meal slot: {:?} (expected breakfast, lunch, or dinner)",
            self.0
        )
    }
}

impl std::error::Error for MealSlotParseError {}

// ---------------------------------------------------------------------------
// Plan structure
// ---------------------------------------------------------------------------

/// Meals planned for a single day, keyed by slot.
///
/// An unplanned slot is an absent key, never an empty string.
pub type DayMeals = BTreeMap<MealSlot, String>;

/// The full meal plan: calendar date -> meals for that day.
///
/// Keys are `chrono::NaiveDate`, so every key is a valid calendar date by
/// construction and serializes to canonical `YYYY-MM-DD`. `NaiveDate`
/// carries no timezone, so persisted dates cannot drift by a day.
///
/// This structure is the single source of truth; the persisted snapshot is
/// a serialization of exactly this map, with no derived fields.
pub type MealPlan = BTreeMap<NaiveDate, DayMeals>;

/// A single validated meal assignment produced by the CSV importer.
///
/// Transient: records are merged into a [`MealPlan`] and never persisted
/// directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealRecord {
    pub date: NaiveDate,
    pub slot: MealSlot,
    pub name: String,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
