//! Workout set adapter (dependent on sessions)
//!
//! Sets carry no timestamps. They are pulled exactly when their parent
//! session changed, and written verbatim on push as long as the parent
//! exists and was not rejected earlier in the same push.

use rusqlite::{params, Transaction};
use serde_json::Value;

use super::{conflict, decode};
use crate::error::{Error, Result};
use crate::models::WorkoutSet;
use crate::sync::adapter::{Applied, EntityAdapter, PushContext};
use crate::sync::catalog::EntityKind;
use crate::sync::resolver::RejectReason;

pub struct WorkoutSetsAdapter;

impl WorkoutSetsAdapter {
    fn parse_row(user_id: &str, row: &rusqlite::Row<'_>) -> rusqlite::Result<WorkoutSet> {
        let id: String = row.get(0)?;
        let session_id: String = row.get(1)?;
        Ok(WorkoutSet {
            id: id.parse().unwrap_or_default(),
            user_id: user_id.to_string(),
            session_id: session_id.parse().unwrap_or_default(),
            exercise: row.get(2)?,
            set_number: row.get(3)?,
            reps: row.get(4)?,
            weight_kg: row.get(5)?,
            rpe: row.get(6)?,
        })
    }
}

impl EntityAdapter for WorkoutSetsAdapter {
    fn kind(&self) -> EntityKind {
        EntityKind::WorkoutSets
    }

    /// Fan-out pull: scoped to sessions whose effective `updated_at`
    /// exceeds `since_ms`, never pulled independently.
    fn pull_changed(
        &self,
        tx: &Transaction<'_>,
        user_id: &str,
        since_ms: i64,
    ) -> Result<Vec<Value>> {
        let mut stmt = tx.prepare(
            "SELECT s.id, s.session_id, s.exercise, s.set_number, s.reps, s.weight_kg, s.rpe
             FROM workout_sets s
             JOIN workout_sessions w ON w.id = s.session_id AND w.user_id = s.user_id
             WHERE s.user_id = ?1 AND COALESCE(w.updated_at, w.created_at) > ?2
             ORDER BY s.session_id, s.set_number",
        )?;

        let sets = stmt
            .query_map(params![user_id, since_ms], |row| {
                Self::parse_row(user_id, row)
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        sets.iter()
            .map(|set| serde_json::to_value(set).map_err(Into::into))
            .collect()
    }

    fn apply_push(
        &self,
        tx: &Transaction<'_>,
        user_id: &str,
        incoming: Value,
        ctx: &mut PushContext,
    ) -> Result<Applied> {
        let mut set: WorkoutSet = decode(self.kind(), incoming)?;
        set.user_id = user_id.to_string();
        let session_id = set.session_id.as_str();

        if ctx.session_rejected(&session_id) {
            return Ok(Applied::Rejected(conflict(
                self.kind(),
                set.id,
                RejectReason::ParentRejected,
                None,
                None,
            )));
        }

        let parent_exists: bool = tx.query_row(
            "SELECT EXISTS(SELECT 1 FROM workout_sessions WHERE id = ?1 AND user_id = ?2)",
            params![session_id, user_id],
            |row| row.get::<_, i32>(0).map(|v| v != 0),
        )?;
        if !parent_exists {
            return Err(Error::MalformedRecord {
                kind: self.kind().wire_name(),
                reason: format!("parent session {session_id} not found"),
            });
        }

        // First set of a session whose update was accepted earlier in this
        // push: the incoming list replaces the stored one wholesale.
        if ctx.begin_set_replacement(&session_id) {
            tx.execute(
                "DELETE FROM workout_sets WHERE session_id = ?1 AND user_id = ?2",
                params![session_id, user_id],
            )?;
        }

        tx.execute(
            "INSERT OR REPLACE INTO workout_sets
                 (id, user_id, session_id, exercise, set_number, reps, weight_kg, rpe)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                set.id.as_str(),
                user_id,
                session_id,
                set.exercise,
                set.set_number,
                set.reps,
                set.weight_kg,
                set.rpe,
            ],
        )?;
        Ok(Applied::Written)
    }
}
