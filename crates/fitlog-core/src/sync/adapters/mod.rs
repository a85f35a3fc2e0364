//! Per-kind sync adapters
//!
//! Each adapter translates resolver decisions into SQL for one entity kind.
//! They share the decode/conflict plumbing below and run entirely inside
//! the coordinator's transaction.

mod food;
mod profile;
mod sessions;
mod sets;
mod weight;

pub use food::FoodEntriesAdapter;
pub use profile::ProfileAdapter;
pub use sessions::WorkoutSessionsAdapter;
pub use sets::WorkoutSetsAdapter;
pub use weight::WeightEntriesAdapter;

use rusqlite::Transaction;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::adapter::EntityAdapter;
use super::catalog::EntityKind;
use super::clock;
use super::resolver::{RecordMeta, RejectReason};
use super::wire::ConflictEntry;
use crate::error::{Error, Result};
use crate::models::RecordId;

/// Every adapter, in catalog order
#[must_use]
pub fn all() -> Vec<Box<dyn EntityAdapter>> {
    vec![
        Box::new(WorkoutSessionsAdapter),
        Box::new(WorkoutSetsAdapter),
        Box::new(FoodEntriesAdapter),
        Box::new(WeightEntriesAdapter),
        Box::new(ProfileAdapter),
    ]
}

/// Decode an incoming wire record into its typed model
pub(crate) fn decode<T: DeserializeOwned>(kind: EntityKind, value: Value) -> Result<T> {
    serde_json::from_value(value).map_err(|err| Error::MalformedRecord {
        kind: kind.wire_name(),
        reason: err.to_string(),
    })
}

/// A mutable-kind push record must declare `updated_at`, and it may not
/// precede the declared `created_at`.
pub(crate) fn require_updated_at(
    kind: EntityKind,
    updated_at: Option<i64>,
    created_at: i64,
) -> Result<i64> {
    let updated = updated_at.ok_or_else(|| Error::MalformedRecord {
        kind: kind.wire_name(),
        reason: "missing updated_at".to_string(),
    })?;
    if updated < created_at {
        return Err(Error::MalformedRecord {
            kind: kind.wire_name(),
            reason: "updated_at precedes created_at".to_string(),
        });
    }
    reject_future_timestamp(kind, updated)?;
    Ok(updated)
}

/// A pushed record may not declare a timestamp ahead of the server clock.
///
/// The pull watermark is issued from that clock alone, so a stored future
/// timestamp would let the record outrun every cursor issued before it.
pub(crate) fn reject_future_timestamp(kind: EntityKind, declared_ms: i64) -> Result<()> {
    if declared_ms > clock::now_ms() {
        return Err(Error::MalformedRecord {
            kind: kind.wire_name(),
            reason: "timestamp is ahead of the server clock".to_string(),
        });
    }
    Ok(())
}

/// Load the temporal identity of an existing row, if one exists.
///
/// `sql` must select `created_at, updated_at` (pass `NULL` for kinds
/// without an `updated_at` column).
pub(crate) fn existing_meta(
    tx: &Transaction<'_>,
    sql: &str,
    params: impl rusqlite::Params,
) -> Result<Option<RecordMeta>> {
    let result = tx.query_row(sql, params, |row| {
        Ok(RecordMeta {
            created_at: row.get(0)?,
            updated_at: row.get(1)?,
        })
    });

    match result {
        Ok(meta) => Ok(Some(meta)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Build a conflict ledger entry for a rejected record
pub(crate) fn conflict(
    kind: EntityKind,
    id: RecordId,
    reason: RejectReason,
    server_ms: Option<i64>,
    client_ms: Option<i64>,
) -> ConflictEntry {
    ConflictEntry {
        entity_kind: kind.wire_name().to_string(),
        id: id.as_str(),
        reason: reason.message().to_string(),
        server_timestamp: server_ms.map(clock::format_timestamp),
        client_timestamp: client_ms.map(clock::format_timestamp),
    }
}
