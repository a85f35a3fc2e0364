//! Food entry model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::RecordId;
use crate::sync::wire;

/// Meal slot a food entry belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Meal {
    /// Breakfast
    Breakfast,
    /// Lunch
    Lunch,
    /// Dinner
    Dinner,
    /// Anything in between
    Snack,
}

impl Meal {
    /// Stored/wire form of this meal slot
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Snack => "snack",
        }
    }
}

impl std::str::FromStr for Meal {
    type Err = super::ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "breakfast" => Ok(Self::Breakfast),
            "lunch" => Ok(Self::Lunch),
            "dinner" => Ok(Self::Dinner),
            "snack" => Ok(Self::Snack),
            other => Err(super::ParseEnumError(other.to_string())),
        }
    }
}

/// A logged food entry (mutable kind, LWW-resolved)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodEntry {
    /// Unique identifier, scoped by owner
    pub id: RecordId,
    /// Opaque owner key; assigned server-side from the authenticated caller
    #[serde(default)]
    pub user_id: String,
    /// Calendar day the food was eaten
    pub date: NaiveDate,
    /// Meal slot
    pub meal: Meal,
    /// Food name as entered by the user
    pub food_name: String,
    /// Amount eaten, in `unit`s
    pub quantity: f64,
    /// Unit of `quantity` (e.g., "g", "serving")
    pub unit: String,
    /// Energy in kcal
    pub calories: f64,
    /// Protein in grams
    pub protein_g: f64,
    /// Carbohydrates in grams
    pub carbs_g: f64,
    /// Fat in grams
    pub fat_g: f64,
    /// Creation timestamp (Unix ms; ISO-8601 on the wire)
    #[serde(with = "wire::iso_millis")]
    pub created_at: i64,
    /// Last update timestamp; null means "never updated since creation"
    #[serde(default, with = "wire::iso_millis_opt")]
    pub updated_at: Option<i64>,
}
