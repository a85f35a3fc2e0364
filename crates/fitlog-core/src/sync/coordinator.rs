//! Sync coordinator: transactional pull and push across the entity catalog

use std::collections::BTreeMap;

use rusqlite::Connection;

use super::adapter::{Applied, EntityAdapter, PushContext};
use super::adapters;
use super::clock;
use super::wire::{PullResponse, PushRequest, PushResponse};
use crate::error::{Error, Result};

/// Orchestrates a full pull or push across every registered entity kind.
///
/// Adapters run in catalog order (parents before dependents) inside one
/// transaction per call; there is no cross-call shared mutable state.
pub struct SyncEngine {
    adapters: Vec<Box<dyn EntityAdapter>>,
}

impl SyncEngine {
    #[must_use]
    pub fn new() -> Self {
        Self {
            adapters: adapters::all(),
        }
    }

    /// Read-only snapshot of everything changed strictly after `since`.
    ///
    /// Every kind contributes a list, empty or not, so the response shape
    /// is stable. Fails only on a malformed `since` value.
    pub fn pull(&self, conn: &mut Connection, user_id: &str, since: &str) -> Result<PullResponse> {
        let since_ms = clock::parse_timestamp(since)?;

        let tx = conn.transaction()?;
        let mut records_by_kind = BTreeMap::new();
        for adapter in &self.adapters {
            let records = adapter.pull_changed(&tx, user_id, since_ms)?;
            records_by_kind.insert(adapter.kind().wire_name().to_string(), records);
        }
        // The watermark comes from the server clock alone, never from
        // client-declared timestamps. Push rejects timestamps ahead of this
        // clock, so the watermark bounds every stored record.
        let watermark_ms = clock::now_ms();
        tx.commit()?;

        tracing::debug!(user = user_id, since = since_ms, "sync pull complete");

        Ok(PullResponse {
            records_by_kind,
            sync_timestamp: clock::format_timestamp(watermark_ms),
        })
    }

    /// Apply a client changeset.
    ///
    /// All accepted writes across every kind commit as one transaction;
    /// per-record rejections land in the conflict ledger and never abort
    /// sibling writes. Any error unwinds the whole transaction.
    pub fn push(
        &self,
        conn: &mut Connection,
        user_id: &str,
        mut request: PushRequest,
    ) -> Result<PushResponse> {
        let tx = conn.transaction()?;
        let mut ctx = PushContext::default();
        let mut conflicts = Vec::new();

        for adapter in &self.adapters {
            let Some(records) = request.records_by_kind.remove(adapter.kind().wire_name()) else {
                continue;
            };
            for record in records {
                match adapter.apply_push(&tx, user_id, record, &mut ctx)? {
                    Applied::Written => {}
                    Applied::Rejected(entry) => conflicts.push(entry),
                }
            }
        }

        if let Some(unknown) = request.records_by_kind.keys().next() {
            return Err(Error::UnknownEntityKind(unknown.clone()));
        }

        tx.commit()?;

        let conflicts_count = conflicts.len();
        tracing::info!(
            user = user_id,
            conflicts = conflicts_count,
            "sync push committed"
        );

        Ok(PushResponse {
            success: true,
            conflicts,
            conflicts_count,
            sync_timestamp: clock::format_timestamp(clock::now_ms()),
        })
    }
}

impl Default for SyncEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;
    use crate::models::RecordId;
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};

    const EPOCH: &str = "1970-01-01T00:00:00Z";

    fn setup() -> (Database, SyncEngine) {
        (Database::open_in_memory().unwrap(), SyncEngine::new())
    }

    fn push_one(
        engine: &SyncEngine,
        db: &mut Database,
        user: &str,
        kind: &str,
        record: Value,
    ) -> PushResponse {
        let request: PushRequest =
            serde_json::from_value(json!({ kind: [record] })).unwrap();
        engine.push(db.connection_mut(), user, request).unwrap()
    }

    fn session_record(id: &RecordId, name: &str, updated_at: &str) -> Value {
        json!({
            "id": id.as_str(),
            "date": "2025-01-05",
            "workout_name": name,
            "created_at": "2025-01-05T12:00:00Z",
            "updated_at": updated_at,
        })
    }

    #[test]
    fn test_push_to_empty_server_then_pull() {
        let (mut db, engine) = setup();
        let id = RecordId::new();

        let response = push_one(
            &engine,
            &mut db,
            "user-1",
            "workout_sessions",
            json!({
                "id": id.as_str(),
                "date": "2025-01-05",
                "workout_name": "Upper A",
                "created_at": "2025-01-05T12:30:00Z",
                "updated_at": "2025-01-05T12:30:00Z",
            }),
        );
        assert!(response.success);
        assert_eq!(response.conflicts, vec![]);
        assert_eq!(response.conflicts_count, 0);

        let pull = engine
            .pull(db.connection_mut(), "user-1", "2025-01-01T00:00:00Z")
            .unwrap();
        let sessions = &pull.records_by_kind["workout_sessions"];
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0]["workout_name"], "Upper A");
        assert_eq!(sessions[0]["updated_at"], "2025-01-05T12:30:00.000Z");
    }

    #[test]
    fn test_stale_push_yields_server_newer_conflict() {
        let (mut db, engine) = setup();
        let id = RecordId::new();

        push_one(
            &engine,
            &mut db,
            "user-1",
            "workout_sessions",
            session_record(&id, "Upper A", "2025-01-05T13:00:00Z"),
        );
        let response = push_one(
            &engine,
            &mut db,
            "user-1",
            "workout_sessions",
            session_record(&id, "Upper A (edited)", "2025-01-05T12:30:00Z"),
        );

        assert!(response.success);
        assert_eq!(response.conflicts_count, 1);
        let entry = &response.conflicts[0];
        assert_eq!(entry.entity_kind, "workout_sessions");
        assert_eq!(entry.id, id.as_str());
        assert_eq!(entry.reason, "Server version is newer");
        assert_eq!(
            entry.server_timestamp.as_deref(),
            Some("2025-01-05T13:00:00.000Z")
        );
        assert_eq!(
            entry.client_timestamp.as_deref(),
            Some("2025-01-05T12:30:00.000Z")
        );

        // Server value stayed authoritative.
        let pull = engine.pull(db.connection_mut(), "user-1", EPOCH).unwrap();
        assert_eq!(
            pull.records_by_kind["workout_sessions"][0]["workout_name"],
            "Upper A"
        );
    }

    #[test]
    fn test_idempotent_push_ties_to_server() {
        let (mut db, engine) = setup();
        let id = RecordId::new();
        let record = session_record(&id, "Upper A", "2025-01-05T13:00:00Z");

        let first = push_one(&engine, &mut db, "user-1", "workout_sessions", record.clone());
        assert_eq!(first.conflicts_count, 0);

        let second = push_one(&engine, &mut db, "user-1", "workout_sessions", record);
        assert_eq!(second.conflicts_count, 1);
        assert_eq!(second.conflicts[0].reason, "Timestamp tie; server wins");

        // State after both calls is identical.
        let pull = engine.pull(db.connection_mut(), "user-1", EPOCH).unwrap();
        assert_eq!(pull.records_by_kind["workout_sessions"].len(), 1);
        assert_eq!(
            pull.records_by_kind["workout_sessions"][0]["updated_at"],
            "2025-01-05T13:00:00.000Z"
        );
    }

    #[test]
    fn test_newer_push_accepts_and_overwrites() {
        let (mut db, engine) = setup();
        let id = RecordId::new();

        push_one(
            &engine,
            &mut db,
            "user-1",
            "workout_sessions",
            session_record(&id, "Upper A", "2025-01-05T12:30:00Z"),
        );
        let response = push_one(
            &engine,
            &mut db,
            "user-1",
            "workout_sessions",
            session_record(&id, "Upper A (edited)", "2025-01-05T13:00:00Z"),
        );
        assert_eq!(response.conflicts_count, 0);

        let pull = engine.pull(db.connection_mut(), "user-1", EPOCH).unwrap();
        let session = &pull.records_by_kind["workout_sessions"][0];
        assert_eq!(session["workout_name"], "Upper A (edited)");
        // created_at is preserved; only mutable fields and updated_at move.
        assert_eq!(session["created_at"], "2025-01-05T12:00:00.000Z");
    }

    #[test]
    fn test_append_only_duplicate_rejected_regardless_of_timestamps() {
        let (mut db, engine) = setup();
        let id = RecordId::new();

        let entry = |weight: f64, created: &str| {
            json!({
                "id": id.as_str(),
                "date": "2025-01-05",
                "weight_kg": weight,
                "created_at": created,
            })
        };

        push_one(&engine, &mut db, "user-1", "weight_entries", entry(82.4, "2025-01-05T08:00:00Z"));
        // Later client timestamp still loses: append-only is never an edit.
        let response = push_one(
            &engine,
            &mut db,
            "user-1",
            "weight_entries",
            entry(90.0, "2025-01-06T08:00:00Z"),
        );

        assert_eq!(response.conflicts_count, 1);
        let conflict = &response.conflicts[0];
        assert_eq!(conflict.reason, "Append-only record already exists");
        assert_eq!(
            conflict.server_timestamp.as_deref(),
            Some("2025-01-05T08:00:00.000Z")
        );
        assert_eq!(
            conflict.client_timestamp.as_deref(),
            Some("2025-01-06T08:00:00.000Z")
        );

        let pull = engine.pull(db.connection_mut(), "user-1", EPOCH).unwrap();
        assert_eq!(pull.records_by_kind["weight_entries"][0]["weight_kg"], 82.4);
    }

    #[test]
    fn test_dependent_fanout_pull() {
        let (mut db, engine) = setup();
        let session_id = RecordId::new();
        let set_id = RecordId::new();

        let request: PushRequest = serde_json::from_value(json!({
            "workout_sessions": [session_record(&session_id, "Upper A", "2025-01-05T13:00:00Z")],
            "workout_sets": [{
                "id": set_id.as_str(),
                "session_id": session_id.as_str(),
                "exercise": "Bench Press",
                "set_number": 1,
                "reps": 5,
                "weight_kg": 100.0,
            }],
        }))
        .unwrap();
        let response = engine.push(db.connection_mut(), "user-1", request).unwrap();
        assert_eq!(response.conflicts_count, 0);

        // Sets have no timestamps of their own, yet ride along with the
        // changed parent.
        let pull = engine.pull(db.connection_mut(), "user-1", EPOCH).unwrap();
        assert_eq!(pull.records_by_kind["workout_sets"].len(), 1);
        assert_eq!(
            pull.records_by_kind["workout_sets"][0]["exercise"],
            "Bench Press"
        );

        // Past the watermark, neither parent nor sets reappear.
        let sync_timestamp = pull.sync_timestamp.clone();
        let pull = engine
            .pull(db.connection_mut(), "user-1", &sync_timestamp)
            .unwrap();
        assert_eq!(pull.records_by_kind["workout_sessions"].len(), 0);
        assert_eq!(pull.records_by_kind["workout_sets"].len(), 0);
    }

    #[test]
    fn test_accepted_session_update_replaces_its_sets() {
        let (mut db, engine) = setup();
        let session_id = RecordId::new();
        let old_set = RecordId::new();
        let new_set = RecordId::new();

        let set = |id: &RecordId, exercise: &str| {
            json!({
                "id": id.as_str(),
                "session_id": session_id.as_str(),
                "exercise": exercise,
                "set_number": 1,
                "reps": 5,
            })
        };

        let request: PushRequest = serde_json::from_value(json!({
            "workout_sessions": [session_record(&session_id, "Upper A", "2025-01-05T13:00:00Z")],
            "workout_sets": [set(&old_set, "Bench Press")],
        }))
        .unwrap();
        engine.push(db.connection_mut(), "user-1", request).unwrap();

        let request: PushRequest = serde_json::from_value(json!({
            "workout_sessions": [session_record(&session_id, "Upper A", "2025-01-05T14:00:00Z")],
            "workout_sets": [set(&new_set, "Incline Press")],
        }))
        .unwrap();
        let response = engine.push(db.connection_mut(), "user-1", request).unwrap();
        assert_eq!(response.conflicts_count, 0);

        let pull = engine.pull(db.connection_mut(), "user-1", EPOCH).unwrap();
        let sets = &pull.records_by_kind["workout_sets"];
        assert_eq!(sets.len(), 1);
        assert_eq!(sets[0]["exercise"], "Incline Press");
    }

    #[test]
    fn test_session_only_edit_preserves_existing_sets() {
        let (mut db, engine) = setup();
        let session_id = RecordId::new();
        let set_id = RecordId::new();

        let request: PushRequest = serde_json::from_value(json!({
            "workout_sessions": [session_record(&session_id, "Upper A", "2025-01-05T13:00:00Z")],
            "workout_sets": [{
                "id": set_id.as_str(),
                "session_id": session_id.as_str(),
                "exercise": "Bench Press",
                "set_number": 1,
                "reps": 5,
            }],
        }))
        .unwrap();
        engine.push(db.connection_mut(), "user-1", request).unwrap();

        // A later edit touching only the session, say a rename, must not
        // discard the sets recorded earlier.
        let response = push_one(
            &engine,
            &mut db,
            "user-1",
            "workout_sessions",
            session_record(&session_id, "Upper A (renamed)", "2025-01-05T14:00:00Z"),
        );
        assert_eq!(response.conflicts_count, 0);

        let pull = engine.pull(db.connection_mut(), "user-1", EPOCH).unwrap();
        assert_eq!(
            pull.records_by_kind["workout_sessions"][0]["workout_name"],
            "Upper A (renamed)"
        );
        let sets = &pull.records_by_kind["workout_sets"];
        assert_eq!(sets.len(), 1);
        assert_eq!(sets[0]["exercise"], "Bench Press");
    }

    #[test]
    fn test_sets_of_rejected_session_are_skipped() {
        let (mut db, engine) = setup();
        let session_id = RecordId::new();
        let set_id = RecordId::new();

        push_one(
            &engine,
            &mut db,
            "user-1",
            "workout_sessions",
            session_record(&session_id, "Upper A", "2025-01-05T13:00:00Z"),
        );

        // Stale session plus its set: both land in the ledger, nothing is written.
        let request: PushRequest = serde_json::from_value(json!({
            "workout_sessions": [session_record(&session_id, "Upper A (stale)", "2025-01-05T12:00:00Z")],
            "workout_sets": [{
                "id": set_id.as_str(),
                "session_id": session_id.as_str(),
                "exercise": "Bench Press",
                "set_number": 1,
                "reps": 5,
            }],
        }))
        .unwrap();
        let response = engine.push(db.connection_mut(), "user-1", request).unwrap();

        assert_eq!(response.conflicts_count, 2);
        assert_eq!(response.conflicts[1].entity_kind, "workout_sets");
        assert_eq!(response.conflicts[1].reason, "Parent session rejected");

        let pull = engine.pull(db.connection_mut(), "user-1", EPOCH).unwrap();
        assert_eq!(pull.records_by_kind["workout_sets"].len(), 0);
    }

    #[test]
    fn test_set_without_parent_is_malformed() {
        let (mut db, engine) = setup();
        let request: PushRequest = serde_json::from_value(json!({
            "workout_sets": [{
                "id": RecordId::new().as_str(),
                "session_id": RecordId::new().as_str(),
                "exercise": "Bench Press",
                "set_number": 1,
                "reps": 5,
            }],
        }))
        .unwrap();

        let err = engine
            .push(db.connection_mut(), "user-1", request)
            .unwrap_err();
        assert!(err.is_client_error());
    }

    #[test]
    fn test_mutable_push_without_updated_at_is_malformed() {
        let (mut db, engine) = setup();
        let request: PushRequest = serde_json::from_value(json!({
            "workout_sessions": [{
                "id": RecordId::new().as_str(),
                "date": "2025-01-05",
                "workout_name": "Upper A",
                "created_at": "2025-01-05T12:30:00Z",
            }],
        }))
        .unwrap();

        let err = engine
            .push(db.connection_mut(), "user-1", request)
            .unwrap_err();
        assert!(err.is_client_error());
        assert!(err.to_string().contains("updated_at"));
    }

    #[test]
    fn test_unknown_entity_kind_fails_whole_push() {
        let (mut db, engine) = setup();
        let request: PushRequest = serde_json::from_value(json!({
            "sleep_entries": [{"id": "x"}],
        }))
        .unwrap();

        let err = engine
            .push(db.connection_mut(), "user-1", request)
            .unwrap_err();
        assert!(matches!(err, Error::UnknownEntityKind(ref kind) if kind == "sleep_entries"));

        // Rolled back: nothing of the batch survives.
        let pull = engine.pull(db.connection_mut(), "user-1", EPOCH).unwrap();
        assert!(pull.records_by_kind.values().all(Vec::is_empty));
    }

    #[test]
    fn test_malformed_since_fails_pull() {
        let (mut db, engine) = setup();
        let err = engine
            .pull(db.connection_mut(), "user-1", "yesterday-ish")
            .unwrap_err();
        assert!(matches!(err, Error::MalformedTimestamp(ref v) if v == "yesterday-ish"));
    }

    #[test]
    fn test_pull_response_shape_is_stable_when_empty() {
        let (mut db, engine) = setup();
        let pull = engine.pull(db.connection_mut(), "user-1", EPOCH).unwrap();

        let mut kinds: Vec<_> = pull.records_by_kind.keys().cloned().collect();
        kinds.sort();
        assert_eq!(
            kinds,
            vec![
                "food_entries",
                "profile_updates",
                "weight_entries",
                "workout_sessions",
                "workout_sets",
            ]
        );
        assert!(pull.records_by_kind.values().all(Vec::is_empty));
    }

    #[test]
    fn test_monotonic_watermark() {
        let (mut db, engine) = setup();
        push_one(
            &engine,
            &mut db,
            "user-1",
            "workout_sessions",
            session_record(&RecordId::new(), "Upper A", "2025-01-05T13:00:00Z"),
        );

        let first = engine.pull(db.connection_mut(), "user-1", EPOCH).unwrap();
        assert_eq!(first.records_by_kind["workout_sessions"].len(), 1);

        // The watermark bounds everything returned; replaying it is empty.
        let second = engine
            .pull(db.connection_mut(), "user-1", &first.sync_timestamp)
            .unwrap();
        assert!(second.records_by_kind.values().all(Vec::is_empty));
        assert!(second.sync_timestamp >= first.sync_timestamp);
    }

    #[test]
    fn test_future_client_timestamp_rejected_and_watermark_stays_on_server_clock() {
        let (mut db, engine) = setup();

        // A client clock running far ahead may not plant its timestamp in
        // the store, where it would outrun every cursor issued before it.
        let request: PushRequest = serde_json::from_value(json!({
            "workout_sessions": [
                session_record(&RecordId::new(), "Upper A", "2099-01-05T13:00:00Z"),
            ],
        }))
        .unwrap();
        let err = engine
            .push(db.connection_mut(), "user-1", request)
            .unwrap_err();
        assert!(err.is_client_error());
        assert!(err.to_string().contains("ahead of the server clock"));

        // Nothing was stored, and the issued cursor is the server clock.
        let pull = engine.pull(db.connection_mut(), "user-1", EPOCH).unwrap();
        assert!(pull.records_by_kind["workout_sessions"].is_empty());
        let watermark_ms = clock::parse_timestamp(&pull.sync_timestamp).unwrap();
        assert!(watermark_ms < clock::parse_timestamp("2099-01-01T00:00:00Z").unwrap());

        // A record committed after that cursor is still visible from it.
        std::thread::sleep(std::time::Duration::from_millis(2));
        let now = clock::format_timestamp(clock::now_ms());
        push_one(
            &engine,
            &mut db,
            "user-1",
            "workout_sessions",
            json!({
                "id": RecordId::new().as_str(),
                "date": "2025-01-05",
                "workout_name": "Upper B",
                "created_at": now,
                "updated_at": now,
            }),
        );
        let delta = engine
            .pull(db.connection_mut(), "user-1", &pull.sync_timestamp)
            .unwrap();
        assert_eq!(delta.records_by_kind["workout_sessions"].len(), 1);
    }

    #[test]
    fn test_cross_user_isolation() {
        let (mut db, engine) = setup();
        let id = RecordId::new();

        push_one(
            &engine,
            &mut db,
            "user-1",
            "workout_sessions",
            session_record(&id, "Upper A", "2025-01-05T13:00:00Z"),
        );

        // Another user sees nothing.
        let pull = engine.pull(db.connection_mut(), "user-2", EPOCH).unwrap();
        assert!(pull.records_by_kind["workout_sessions"].is_empty());

        // The same id under another owner is a distinct record, not a conflict.
        let response = push_one(
            &engine,
            &mut db,
            "user-2",
            "workout_sessions",
            session_record(&id, "Other's session", "2025-01-05T12:00:00Z"),
        );
        assert_eq!(response.conflicts_count, 0);

        let pull = engine.pull(db.connection_mut(), "user-2", EPOCH).unwrap();
        assert_eq!(
            pull.records_by_kind["workout_sessions"][0]["workout_name"],
            "Other's session"
        );
        let pull = engine.pull(db.connection_mut(), "user-1", EPOCH).unwrap();
        assert_eq!(
            pull.records_by_kind["workout_sessions"][0]["workout_name"],
            "Upper A"
        );
    }

    #[test]
    fn test_profile_singleton_pull_and_lww() {
        let (mut db, engine) = setup();
        let first_id = RecordId::new();

        let profile = |id: &RecordId, height: f64, updated: &str| {
            json!({
                "id": id.as_str(),
                "height_cm": height,
                "created_at": "2025-01-04T12:00:00Z",
                "updated_at": updated,
            })
        };

        push_one(
            &engine,
            &mut db,
            "user-1",
            "profile_updates",
            profile(&first_id, 181.0, "2025-01-05T12:00:00Z"),
        );
        // A later update, even under a different client-minted id, lands on
        // the one live row and keeps the original identity.
        let response = push_one(
            &engine,
            &mut db,
            "user-1",
            "profile_updates",
            profile(&RecordId::new(), 182.0, "2025-01-06T12:00:00Z"),
        );
        assert_eq!(response.conflicts_count, 0);

        let pull = engine.pull(db.connection_mut(), "user-1", EPOCH).unwrap();
        let profiles = &pull.records_by_kind["profile_updates"];
        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles[0]["height_cm"], 182.0);
        assert_eq!(profiles[0]["id"], first_id.as_str());

        // Stale profile update is rejected.
        let response = push_one(
            &engine,
            &mut db,
            "user-1",
            "profile_updates",
            profile(&first_id, 170.0, "2025-01-04T12:00:00Z"),
        );
        assert_eq!(response.conflicts_count, 1);
        assert_eq!(response.conflicts[0].reason, "Server version is newer");
    }

    #[test]
    fn test_food_entry_roundtrip_through_push_and_pull() {
        let (mut db, engine) = setup();
        let id = RecordId::new();

        let response = push_one(
            &engine,
            &mut db,
            "user-1",
            "food_entries",
            json!({
                "id": id.as_str(),
                "date": "2025-01-05",
                "meal": "lunch",
                "food_name": "Chicken breast",
                "quantity": 200.0,
                "unit": "g",
                "calories": 330.0,
                "protein_g": 62.0,
                "carbs_g": 0.0,
                "fat_g": 7.2,
                "created_at": "2025-01-05T12:30:00Z",
                "updated_at": "2025-01-05T12:30:00Z",
            }),
        );
        assert_eq!(response.conflicts_count, 0);

        let pull = engine.pull(db.connection_mut(), "user-1", EPOCH).unwrap();
        let entry = &pull.records_by_kind["food_entries"][0];
        assert_eq!(entry["meal"], "lunch");
        assert_eq!(entry["protein_g"], 62.0);
        assert_eq!(entry["user_id"], "user-1");
    }

    #[test]
    fn test_conflict_does_not_abort_sibling_writes() {
        let (mut db, engine) = setup();
        let stale_id = RecordId::new();
        let fresh_id = RecordId::new();

        push_one(
            &engine,
            &mut db,
            "user-1",
            "workout_sessions",
            session_record(&stale_id, "Upper A", "2025-01-05T13:00:00Z"),
        );

        let request: PushRequest = serde_json::from_value(json!({
            "workout_sessions": [
                session_record(&stale_id, "Upper A (stale)", "2025-01-05T12:00:00Z"),
                session_record(&fresh_id, "Lower B", "2025-01-05T13:30:00Z"),
            ],
        }))
        .unwrap();
        let response = engine.push(db.connection_mut(), "user-1", request).unwrap();

        assert!(response.success);
        assert_eq!(response.conflicts_count, 1);

        let pull = engine.pull(db.connection_mut(), "user-1", EPOCH).unwrap();
        assert_eq!(pull.records_by_kind["workout_sessions"].len(), 2);
    }
}
