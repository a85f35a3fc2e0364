//! Data models for fitlog

mod id;
mod nutrition;
mod profile;
mod weight;
mod workout;

use thiserror::Error;

/// Failure to parse an enum-backed model field from its stored form
#[derive(Debug, Error)]
#[error("unrecognized value: {0:?}")]
pub struct ParseEnumError(pub String);

pub use id::RecordId;
pub use nutrition::{FoodEntry, Meal};
pub use profile::{ActivityLevel, Goal, Profile, Sex};
pub use weight::WeightEntry;
pub use workout::{WorkoutSession, WorkoutSet};
