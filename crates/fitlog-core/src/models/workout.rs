//! Workout session and set models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::RecordId;
use crate::sync::wire;

/// A logged training session (mutable kind, LWW-resolved)
///
/// Sessions are the parent of [`WorkoutSet`]: whenever a session changes,
/// its full set list rides along with it through sync.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSession {
    /// Unique identifier, scoped by owner
    pub id: RecordId,
    /// Opaque owner key; assigned server-side from the authenticated caller
    #[serde(default)]
    pub user_id: String,
    /// Calendar day the session took place
    pub date: NaiveDate,
    /// Name of the workout (e.g., "Upper A")
    pub workout_name: String,
    /// Free-form notes
    #[serde(default)]
    pub notes: Option<String>,
    /// Creation timestamp (Unix ms; ISO-8601 on the wire)
    #[serde(with = "wire::iso_millis")]
    pub created_at: i64,
    /// Last update timestamp; null means "never updated since creation"
    #[serde(default, with = "wire::iso_millis_opt")]
    pub updated_at: Option<i64>,
}

impl WorkoutSession {
    /// Create a new session owned by `user_id`, stamped with the current time
    #[must_use]
    pub fn new(user_id: impl Into<String>, date: NaiveDate, workout_name: impl Into<String>) -> Self {
        let now = chrono::Utc::now().timestamp_millis();
        Self {
            id: RecordId::new(),
            user_id: user_id.into(),
            date,
            workout_name: workout_name.into(),
            notes: None,
            created_at: now,
            updated_at: Some(now),
        }
    }
}

/// A single set within a workout session (dependent kind)
///
/// Sets carry no timestamps of their own; their sync visibility is derived
/// entirely from the parent session's mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSet {
    /// Unique identifier, scoped by owner
    pub id: RecordId,
    /// Opaque owner key; assigned server-side from the authenticated caller
    #[serde(default)]
    pub user_id: String,
    /// Parent session
    pub session_id: RecordId,
    /// Exercise name (e.g., "Bench Press")
    pub exercise: String,
    /// 1-based position within the exercise
    pub set_number: u32,
    /// Repetitions performed
    pub reps: u32,
    /// Load in kilograms; None for bodyweight work
    #[serde(default)]
    pub weight_kg: Option<f64>,
    /// Rating of perceived exertion (1-10)
    #[serde(default)]
    pub rpe: Option<f64>,
}
