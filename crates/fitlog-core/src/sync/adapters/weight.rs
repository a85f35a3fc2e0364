//! Weight entry adapter (append-only)
//!
//! A push referencing an existing id is necessarily a duplicate retry, not
//! an edit; the stored row is never modified.

use rusqlite::{params, Transaction};
use serde_json::Value;

use super::{conflict, decode, existing_meta, reject_future_timestamp};
use crate::error::Result;
use crate::models::WeightEntry;
use crate::sync::adapter::{Applied, EntityAdapter, PushContext};
use crate::sync::catalog::{EntityKind, Mutability};
use crate::sync::resolver::{resolve, Decision, RecordMeta, RejectReason};

pub struct WeightEntriesAdapter;

impl WeightEntriesAdapter {
    fn parse_row(user_id: &str, row: &rusqlite::Row<'_>) -> rusqlite::Result<WeightEntry> {
        let id: String = row.get(0)?;
        let date: String = row.get(1)?;
        Ok(WeightEntry {
            id: id.parse().unwrap_or_default(),
            user_id: user_id.to_string(),
            date: date.parse().unwrap_or_default(),
            weight_kg: row.get(2)?,
            created_at: row.get(3)?,
        })
    }
}

impl EntityAdapter for WeightEntriesAdapter {
    fn kind(&self) -> EntityKind {
        EntityKind::WeightEntries
    }

    fn pull_changed(
        &self,
        tx: &Transaction<'_>,
        user_id: &str,
        since_ms: i64,
    ) -> Result<Vec<Value>> {
        let mut stmt = tx.prepare(
            "SELECT id, date, weight_kg, created_at
             FROM weight_entries
             WHERE user_id = ?1 AND created_at > ?2
             ORDER BY created_at",
        )?;

        let entries = stmt
            .query_map(params![user_id, since_ms], |row| {
                Self::parse_row(user_id, row)
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        entries
            .iter()
            .map(|entry| serde_json::to_value(entry).map_err(Into::into))
            .collect()
    }

    fn apply_push(
        &self,
        tx: &Transaction<'_>,
        user_id: &str,
        incoming: Value,
        _ctx: &mut PushContext,
    ) -> Result<Applied> {
        let mut entry: WeightEntry = decode(self.kind(), incoming)?;
        entry.user_id = user_id.to_string();
        reject_future_timestamp(self.kind(), entry.created_at)?;

        let existing = existing_meta(
            tx,
            "SELECT created_at, NULL FROM weight_entries WHERE id = ?1 AND user_id = ?2",
            params![entry.id.as_str(), user_id],
        )?;

        let meta = RecordMeta {
            created_at: entry.created_at,
            updated_at: None,
        };
        match resolve(Mutability::AppendOnly, existing, meta) {
            Decision::Create => {
                tx.execute(
                    "INSERT INTO weight_entries (id, user_id, date, weight_kg, created_at)
                     VALUES (?1, ?2, ?3, ?4, ?5)",
                    params![
                        entry.id.as_str(),
                        user_id,
                        entry.date.to_string(),
                        entry.weight_kg,
                        entry.created_at,
                    ],
                )?;
                Ok(Applied::Written)
            }
            // The resolver never accepts an existing append-only row. Both
            // created_at values go into the ledger for client-side debugging.
            Decision::Accept | Decision::Reject(_) => Ok(Applied::Rejected(conflict(
                self.kind(),
                entry.id,
                RejectReason::Duplicate,
                existing.map(|m| m.created_at),
                Some(entry.created_at),
            ))),
        }
    }
}
