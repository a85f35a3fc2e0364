//! Workout session adapter (mutable; parent of workout sets)

use rusqlite::{params, Transaction};
use serde_json::Value;

use super::{conflict, decode, existing_meta, require_updated_at};
use crate::error::Result;
use crate::models::WorkoutSession;
use crate::sync::adapter::{Applied, EntityAdapter, PushContext};
use crate::sync::catalog::{EntityKind, Mutability};
use crate::sync::resolver::{resolve, Decision, RecordMeta};

pub struct WorkoutSessionsAdapter;

impl WorkoutSessionsAdapter {
    fn parse_row(user_id: &str, row: &rusqlite::Row<'_>) -> rusqlite::Result<WorkoutSession> {
        let id: String = row.get(0)?;
        let date: String = row.get(1)?;
        Ok(WorkoutSession {
            id: id.parse().unwrap_or_default(),
            user_id: user_id.to_string(),
            date: date.parse().unwrap_or_default(),
            workout_name: row.get(2)?,
            notes: row.get(3)?,
            created_at: row.get(4)?,
            updated_at: row.get(5)?,
        })
    }
}

impl EntityAdapter for WorkoutSessionsAdapter {
    fn kind(&self) -> EntityKind {
        EntityKind::WorkoutSessions
    }

    fn pull_changed(
        &self,
        tx: &Transaction<'_>,
        user_id: &str,
        since_ms: i64,
    ) -> Result<Vec<Value>> {
        let mut stmt = tx.prepare(
            "SELECT id, date, workout_name, notes, created_at, updated_at
             FROM workout_sessions
             WHERE user_id = ?1 AND COALESCE(updated_at, created_at) > ?2
             ORDER BY created_at",
        )?;

        let sessions = stmt
            .query_map(params![user_id, since_ms], |row| {
                Self::parse_row(user_id, row)
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        sessions
            .iter()
            .map(|session| serde_json::to_value(session).map_err(Into::into))
            .collect()
    }

    fn apply_push(
        &self,
        tx: &Transaction<'_>,
        user_id: &str,
        incoming: Value,
        ctx: &mut PushContext,
    ) -> Result<Applied> {
        let mut session: WorkoutSession = decode(self.kind(), incoming)?;
        session.user_id = user_id.to_string();
        let incoming_time = require_updated_at(self.kind(), session.updated_at, session.created_at)?;

        let existing = existing_meta(
            tx,
            "SELECT created_at, updated_at FROM workout_sessions WHERE id = ?1 AND user_id = ?2",
            params![session.id.as_str(), user_id],
        )?;

        let meta = RecordMeta {
            created_at: session.created_at,
            updated_at: Some(incoming_time),
        };
        match resolve(Mutability::Mutable, existing, meta) {
            Decision::Create => {
                tx.execute(
                    "INSERT INTO workout_sessions
                         (id, user_id, date, workout_name, notes, created_at, updated_at)
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                    params![
                        session.id.as_str(),
                        user_id,
                        session.date.to_string(),
                        session.workout_name,
                        session.notes,
                        session.created_at,
                        incoming_time,
                    ],
                )?;
                Ok(Applied::Written)
            }
            Decision::Accept => {
                // Stored sets stay untouched here. If the changeset also
                // carries sets for this session, the sets adapter replaces
                // the list wholesale; a session-only edit must not.
                ctx.mark_session_accepted(&session.id.as_str());
                tx.execute(
                    "UPDATE workout_sessions
                     SET date = ?1, workout_name = ?2, notes = ?3, updated_at = ?4
                     WHERE id = ?5 AND user_id = ?6",
                    params![
                        session.date.to_string(),
                        session.workout_name,
                        session.notes,
                        incoming_time,
                        session.id.as_str(),
                        user_id,
                    ],
                )?;
                Ok(Applied::Written)
            }
            Decision::Reject(reason) => {
                ctx.mark_session_rejected(&session.id.as_str());
                Ok(Applied::Rejected(conflict(
                    self.kind(),
                    session.id,
                    reason,
                    existing.map(RecordMeta::effective_time),
                    Some(incoming_time),
                )))
            }
        }
    }
}
