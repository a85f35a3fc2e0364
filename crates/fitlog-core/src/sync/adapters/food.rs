//! Food entry adapter (mutable)

use rusqlite::{params, Transaction};
use serde_json::Value;

use super::{conflict, decode, existing_meta, require_updated_at};
use crate::error::Result;
use crate::models::FoodEntry;
use crate::sync::adapter::{Applied, EntityAdapter, PushContext};
use crate::sync::catalog::{EntityKind, Mutability};
use crate::sync::resolver::{resolve, Decision, RecordMeta};

pub struct FoodEntriesAdapter;

impl FoodEntriesAdapter {
    fn parse_row(user_id: &str, row: &rusqlite::Row<'_>) -> rusqlite::Result<FoodEntry> {
        let id: String = row.get(0)?;
        let date: String = row.get(1)?;
        let meal: String = row.get(2)?;
        Ok(FoodEntry {
            id: id.parse().unwrap_or_default(),
            user_id: user_id.to_string(),
            date: date.parse().unwrap_or_default(),
            meal: meal.parse().map_err(|err| {
                rusqlite::Error::FromSqlConversionFailure(
                    2,
                    rusqlite::types::Type::Text,
                    Box::new(err),
                )
            })?,
            food_name: row.get(3)?,
            quantity: row.get(4)?,
            unit: row.get(5)?,
            calories: row.get(6)?,
            protein_g: row.get(7)?,
            carbs_g: row.get(8)?,
            fat_g: row.get(9)?,
            created_at: row.get(10)?,
            updated_at: row.get(11)?,
        })
    }
}

impl EntityAdapter for FoodEntriesAdapter {
    fn kind(&self) -> EntityKind {
        EntityKind::FoodEntries
    }

    fn pull_changed(
        &self,
        tx: &Transaction<'_>,
        user_id: &str,
        since_ms: i64,
    ) -> Result<Vec<Value>> {
        let mut stmt = tx.prepare(
            "SELECT id, date, meal, food_name, quantity, unit, calories,
                    protein_g, carbs_g, fat_g, created_at, updated_at
             FROM food_entries
             WHERE user_id = ?1 AND COALESCE(updated_at, created_at) > ?2
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
        let mut entry: FoodEntry = decode(self.kind(), incoming)?;
        entry.user_id = user_id.to_string();
        let incoming_time = require_updated_at(self.kind(), entry.updated_at, entry.created_at)?;

        let existing = existing_meta(
            tx,
            "SELECT created_at, updated_at FROM food_entries WHERE id = ?1 AND user_id = ?2",
            params![entry.id.as_str(), user_id],
        )?;

        let meta = RecordMeta {
            created_at: entry.created_at,
            updated_at: Some(incoming_time),
        };
        match resolve(Mutability::Mutable, existing, meta) {
            Decision::Create => {
                tx.execute(
                    "INSERT INTO food_entries
                         (id, user_id, date, meal, food_name, quantity, unit,
                          calories, protein_g, carbs_g, fat_g, created_at, updated_at)
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)",
                    params![
                        entry.id.as_str(),
                        user_id,
                        entry.date.to_string(),
                        entry.meal.as_str(),
                        entry.food_name,
                        entry.quantity,
                        entry.unit,
                        entry.calories,
                        entry.protein_g,
                        entry.carbs_g,
                        entry.fat_g,
                        entry.created_at,
                        incoming_time,
                    ],
                )?;
                Ok(Applied::Written)
            }
            Decision::Accept => {
                tx.execute(
                    "UPDATE food_entries
                     SET date = ?1, meal = ?2, food_name = ?3, quantity = ?4, unit = ?5,
                         calories = ?6, protein_g = ?7, carbs_g = ?8, fat_g = ?9, updated_at = ?10
                     WHERE id = ?11 AND user_id = ?12",
                    params![
                        entry.date.to_string(),
                        entry.meal.as_str(),
                        entry.food_name,
                        entry.quantity,
                        entry.unit,
                        entry.calories,
                        entry.protein_g,
                        entry.carbs_g,
                        entry.fat_g,
                        incoming_time,
                        entry.id.as_str(),
                        user_id,
                    ],
                )?;
                Ok(Applied::Written)
            }
            Decision::Reject(reason) => Ok(Applied::Rejected(conflict(
                self.kind(),
                entry.id,
                reason,
                existing.map(RecordMeta::effective_time),
                Some(incoming_time),
            ))),
        }
    }
}
