//! Weight entry model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::RecordId;
use crate::sync::wire;

/// A bodyweight measurement (append-only kind)
///
/// Once created, a weight entry is never mutated by sync: a push that
/// references an existing id is a duplicate retry, not an edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightEntry {
    /// Unique identifier, scoped by owner
    pub id: RecordId,
    /// Opaque owner key; assigned server-side from the authenticated caller
    #[serde(default)]
    pub user_id: String,
    /// Calendar day of the measurement
    pub date: NaiveDate,
    /// Bodyweight in kilograms
    pub weight_kg: f64,
    /// Creation timestamp (Unix ms; ISO-8601 on the wire)
    #[serde(with = "wire::iso_millis")]
    pub created_at: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_entry_requires_created_at() {
        let json = serde_json::json!({
            "id": RecordId::new().as_str(),
            "date": "2025-01-05",
            "weight_kg": 82.4,
        });
        assert!(serde_json::from_value::<WeightEntry>(json).is_err());
    }

    #[test]
    fn test_weight_entry_has_no_updated_at_on_wire() {
        let entry = WeightEntry {
            id: RecordId::new(),
            user_id: "user-1".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 1, 5).unwrap(),
            weight_kg: 82.4,
            created_at: 1_736_080_200_000,
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert!(json.get("updated_at").is_none());
        assert_eq!(json["created_at"], "2025-01-05T12:30:00.000Z");
    }
}
