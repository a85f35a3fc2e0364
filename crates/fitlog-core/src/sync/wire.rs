//! Wire envelopes and the timestamp codec for the sync protocol

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Serde codec: Unix milliseconds as ISO-8601 UTC strings (`...Z`)
pub mod iso_millis {
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::sync::clock;

    pub fn serialize<S: Serializer>(ms: &i64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&clock::format_timestamp(*ms))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
        let raw = String::deserialize(deserializer)?;
        clock::parse_timestamp(&raw).map_err(serde::de::Error::custom)
    }
}

/// Serde codec: optional Unix milliseconds; null round-trips as null
pub mod iso_millis_opt {
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::sync::clock;

    pub fn serialize<S: Serializer>(ms: &Option<i64>, serializer: S) -> Result<S::Ok, S::Error> {
        match ms {
            Some(ms) => serializer.serialize_str(&clock::format_timestamp(*ms)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<i64>, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        raw.map(|raw| clock::parse_timestamp(&raw).map_err(serde::de::Error::custom))
            .transpose()
    }
}

/// Response to a pull: one list per entity kind plus the new watermark.
///
/// Every kind contributes an entry even when empty, so the response shape
/// is stable for clients.
#[derive(Debug, Serialize, Deserialize)]
pub struct PullResponse {
    /// Changed records, keyed by wire kind name
    #[serde(flatten)]
    pub records_by_kind: BTreeMap<String, Vec<Value>>,
    /// Server-issued watermark; the client's next `since` value
    pub sync_timestamp: String,
}

/// Push body: records to upsert, keyed by wire kind name
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct PushRequest {
    #[serde(flatten)]
    pub records_by_kind: BTreeMap<String, Vec<Value>>,
}

/// One rejected push record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictEntry {
    /// Wire name of the entity kind
    pub entity_kind: String,
    /// Identifier of the rejected record
    pub id: String,
    /// Human-readable rejection reason
    pub reason: String,
    /// Server-side timestamp involved in the decision, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_timestamp: Option<String>,
    /// Client-declared timestamp involved in the decision, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_timestamp: Option<String>,
}

/// Response to a push
#[derive(Debug, Serialize, Deserialize)]
pub struct PushResponse {
    /// True whenever the transaction committed; conflicts are data, not failure
    pub success: bool,
    /// The conflict ledger
    pub conflicts: Vec<ConflictEntry>,
    /// Convenience count of `conflicts`
    pub conflicts_count: usize,
    /// Server clock at response construction
    pub sync_timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_pull_response_flattens_kind_lists() {
        let mut records_by_kind = BTreeMap::new();
        records_by_kind.insert("workout_sessions".to_string(), vec![]);
        records_by_kind.insert("weight_entries".to_string(), vec![]);

        let response = PullResponse {
            records_by_kind,
            sync_timestamp: "2025-01-05T12:30:00.000Z".to_string(),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["workout_sessions"], serde_json::json!([]));
        assert_eq!(json["weight_entries"], serde_json::json!([]));
        assert_eq!(json["sync_timestamp"], "2025-01-05T12:30:00.000Z");
    }

    #[test]
    fn test_push_request_from_client_json() {
        let request: PushRequest = serde_json::from_value(serde_json::json!({
            "workout_sessions": [{"id": "a"}],
            "food_entries": [],
        }))
        .unwrap();
        assert_eq!(request.records_by_kind.len(), 2);
        assert_eq!(request.records_by_kind["workout_sessions"].len(), 1);
    }

    #[test]
    fn test_conflict_entry_omits_absent_timestamps() {
        let entry = ConflictEntry {
            entity_kind: "workout_sets".to_string(),
            id: "abc".to_string(),
            reason: "Parent session rejected".to_string(),
            server_timestamp: None,
            client_timestamp: None,
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert!(json.get("server_timestamp").is_none());
    }
}
