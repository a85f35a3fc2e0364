//! User profile model

use serde::{Deserialize, Serialize};

use super::RecordId;
use crate::sync::wire;

/// Biological sex, as used by the downstream BMR calculators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
    Other,
}

/// Habitual activity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

/// Current training goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    Cut,
    Maintain,
    Bulk,
}

impl Sex {
    /// Stored/wire form
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
        }
    }
}

impl std::str::FromStr for Sex {
    type Err = super::ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            "other" => Ok(Self::Other),
            unknown => Err(super::ParseEnumError(unknown.to_string())),
        }
    }
}

impl ActivityLevel {
    /// Stored/wire form
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::Active => "active",
            Self::VeryActive => "very_active",
        }
    }
}

impl std::str::FromStr for ActivityLevel {
    type Err = super::ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sedentary" => Ok(Self::Sedentary),
            "light" => Ok(Self::Light),
            "moderate" => Ok(Self::Moderate),
            "active" => Ok(Self::Active),
            "very_active" => Ok(Self::VeryActive),
            unknown => Err(super::ParseEnumError(unknown.to_string())),
        }
    }
}

impl Goal {
    /// Stored/wire form
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cut => "cut",
            Self::Maintain => "maintain",
            Self::Bulk => "bulk",
        }
    }
}

impl std::str::FromStr for Goal {
    type Err = super::ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cut" => Ok(Self::Cut),
            "maintain" => Ok(Self::Maintain),
            "bulk" => Ok(Self::Bulk),
            unknown => Err(super::ParseEnumError(unknown.to_string())),
        }
    }
}

/// User profile (singleton kind: at most one live record per user)
///
/// Pull emits the profile only when it changed after the watermark, and
/// always as zero-or-one records rather than a list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Unique identifier; kept stable across accepted updates
    pub id: RecordId,
    /// Opaque owner key; assigned server-side from the authenticated caller
    #[serde(default)]
    pub user_id: String,
    /// Height in centimeters
    #[serde(default)]
    pub height_cm: Option<f64>,
    /// Year of birth
    #[serde(default)]
    pub birth_year: Option<i32>,
    /// Sex for calculator purposes
    #[serde(default)]
    pub sex: Option<Sex>,
    /// Activity level for TDEE estimation
    #[serde(default)]
    pub activity_level: Option<ActivityLevel>,
    /// Training goal
    #[serde(default)]
    pub goal: Option<Goal>,
    /// Creation timestamp (Unix ms; ISO-8601 on the wire)
    #[serde(with = "wire::iso_millis")]
    pub created_at: i64,
    /// Last update timestamp; null means "never updated since creation"
    #[serde(default, with = "wire::iso_millis_opt")]
    pub updated_at: Option<i64>,
}
