//! Static registry of syncable record kinds
//!
//! Adding a sixth kind is a new variant here plus a new adapter; the
//! coordinator never changes.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// How sync is allowed to touch records of a kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutability {
    /// `created_at` + nullable `updated_at`; LWW-resolved on push
    Mutable,
    /// `created_at` only; never mutated after creation
    AppendOnly,
    /// No own timestamps; visibility derived from the parent's mutation
    Dependent,
    /// Mutable, but at most one live record per user
    Singleton,
}

/// The five syncable record kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    WorkoutSessions,
    WorkoutSets,
    FoodEntries,
    WeightEntries,
    Profile,
}

impl EntityKind {
    /// Every kind, in fixed sync processing order: parents before dependents.
    pub const ALL: [Self; 5] = [
        Self::WorkoutSessions,
        Self::WorkoutSets,
        Self::FoodEntries,
        Self::WeightEntries,
        Self::Profile,
    ];

    /// Name of this kind in request/response envelopes
    #[must_use]
    pub const fn wire_name(self) -> &'static str {
        match self {
            Self::WorkoutSessions => "workout_sessions",
            Self::WorkoutSets => "workout_sets",
            Self::FoodEntries => "food_entries",
            Self::WeightEntries => "weight_entries",
            Self::Profile => "profile_updates",
        }
    }

    /// Mutability policy applied by the conflict resolver
    #[must_use]
    pub const fn mutability(self) -> Mutability {
        match self {
            Self::WorkoutSessions | Self::FoodEntries => Mutability::Mutable,
            Self::WorkoutSets => Mutability::Dependent,
            Self::WeightEntries => Mutability::AppendOnly,
            Self::Profile => Mutability::Singleton,
        }
    }

    /// Parent kind for dependent entities
    #[must_use]
    pub const fn parent(self) -> Option<Self> {
        match self {
            Self::WorkoutSets => Some(Self::WorkoutSessions),
            _ => None,
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

impl FromStr for EntityKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.wire_name() == s)
            .ok_or_else(|| Error::UnknownEntityKind(s.to_string()))
    }
}
