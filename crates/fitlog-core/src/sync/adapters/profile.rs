//! Profile adapter (singleton: at most one live record per user)

use rusqlite::{params, OptionalExtension, Transaction};
use serde_json::Value;

use super::{conflict, decode, existing_meta, require_updated_at};
use crate::error::Result;
use crate::models::Profile;
use crate::sync::adapter::{Applied, EntityAdapter, PushContext};
use crate::sync::catalog::{EntityKind, Mutability};
use crate::sync::resolver::{resolve, Decision, RecordMeta};

pub struct ProfileAdapter;

impl ProfileAdapter {
    fn parse_row(user_id: &str, row: &rusqlite::Row<'_>) -> rusqlite::Result<Profile> {
        let id: String = row.get(0)?;
        let sex: Option<String> = row.get(3)?;
        let activity_level: Option<String> = row.get(4)?;
        let goal: Option<String> = row.get(5)?;
        Ok(Profile {
            id: id.parse().unwrap_or_default(),
            user_id: user_id.to_string(),
            height_cm: row.get(1)?,
            birth_year: row.get(2)?,
            sex: sex.and_then(|s| s.parse().ok()),
            activity_level: activity_level.and_then(|s| s.parse().ok()),
            goal: goal.and_then(|s| s.parse().ok()),
            created_at: row.get(6)?,
            updated_at: row.get(7)?,
        })
    }

}

impl EntityAdapter for ProfileAdapter {
    fn kind(&self) -> EntityKind {
        EntityKind::Profile
    }

    /// Zero-or-one records, never more
    fn pull_changed(
        &self,
        tx: &Transaction<'_>,
        user_id: &str,
        since_ms: i64,
    ) -> Result<Vec<Value>> {
        let profile = tx
            .query_row(
                "SELECT id, height_cm, birth_year, sex, activity_level, goal,
                        created_at, updated_at
                 FROM profiles
                 WHERE user_id = ?1 AND COALESCE(updated_at, created_at) > ?2",
                params![user_id, since_ms],
                |row| Self::parse_row(user_id, row),
            )
            .optional()?;

        match profile {
            Some(profile) => Ok(vec![serde_json::to_value(&profile)?]),
            None => Ok(Vec::new()),
        }
    }

    fn apply_push(
        &self,
        tx: &Transaction<'_>,
        user_id: &str,
        incoming: Value,
        _ctx: &mut PushContext,
    ) -> Result<Applied> {
        let mut profile: Profile = decode(self.kind(), incoming)?;
        profile.user_id = user_id.to_string();
        let incoming_time = require_updated_at(self.kind(), profile.updated_at, profile.created_at)?;

        // Singleton: conflict lookup is by owner, not by id.
        let existing = existing_meta(
            tx,
            "SELECT created_at, updated_at FROM profiles WHERE user_id = ?1",
            params![user_id],
        )?;

        let meta = RecordMeta {
            created_at: profile.created_at,
            updated_at: Some(incoming_time),
        };
        match resolve(Mutability::Singleton, existing, meta) {
            Decision::Create => {
                tx.execute(
                    "INSERT INTO profiles
                         (user_id, id, height_cm, birth_year, sex, activity_level, goal,
                          created_at, updated_at)
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
                    params![
                        user_id,
                        profile.id.as_str(),
                        profile.height_cm,
                        profile.birth_year,
                        profile.sex.map(|s| s.as_str()),
                        profile.activity_level.map(|a| a.as_str()),
                        profile.goal.map(|g| g.as_str()),
                        profile.created_at,
                        incoming_time,
                    ],
                )?;
                Ok(Applied::Written)
            }
            Decision::Accept => {
                // Ids are never reassigned; the stored row keeps its id.
                tx.execute(
                    "UPDATE profiles
                     SET height_cm = ?1, birth_year = ?2, sex = ?3, activity_level = ?4,
                         goal = ?5, updated_at = ?6
                     WHERE user_id = ?7",
                    params![
                        profile.height_cm,
                        profile.birth_year,
                        profile.sex.map(|s| s.as_str()),
                        profile.activity_level.map(|a| a.as_str()),
                        profile.goal.map(|g| g.as_str()),
                        incoming_time,
                        user_id,
                    ],
                )?;
                Ok(Applied::Written)
            }
            Decision::Reject(reason) => Ok(Applied::Rejected(conflict(
                self.kind(),
                profile.id,
                reason,
                existing.map(RecordMeta::effective_time),
                Some(incoming_time),
            ))),
        }
    }
}
