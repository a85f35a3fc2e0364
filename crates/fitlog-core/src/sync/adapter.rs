//! Adapter seam between the coordinator and per-kind storage

use std::collections::HashSet;

use rusqlite::Transaction;
use serde_json::Value;

use super::catalog::EntityKind;
use super::wire::ConflictEntry;
use crate::error::Result;

/// Outcome of applying a single pushed record
#[derive(Debug)]
pub enum Applied {
    /// Record was created or overwritten inside the push transaction
    Written,
    /// Record lost conflict resolution; nothing was written
    Rejected(ConflictEntry),
}

/// Per-push bookkeeping shared across adapters.
///
/// The sets adapter consults this to skip children of sessions that lost
/// conflict resolution earlier in the same push, and to replace the stored
/// set list of sessions whose update was accepted.
#[derive(Debug, Default)]
pub struct PushContext {
    rejected_sessions: HashSet<String>,
    accepted_sessions: HashSet<String>,
    cleared_sessions: HashSet<String>,
}

impl PushContext {
    /// Mark a session id as rejected for the remainder of this push
    pub fn mark_session_rejected(&mut self, session_id: &str) {
        self.rejected_sessions.insert(session_id.to_string());
    }

    /// Whether a session id was rejected earlier in this push
    #[must_use]
    pub fn session_rejected(&self, session_id: &str) -> bool {
        self.rejected_sessions.contains(session_id)
    }

    /// Mark an existing session whose update won conflict resolution
    pub fn mark_session_accepted(&mut self, session_id: &str) {
        self.accepted_sessions.insert(session_id.to_string());
    }

    /// Whether the stored sets of an accepted session still need clearing.
    ///
    /// Returns true exactly once per session, on its first incoming set,
    /// so the push replaces the set list wholesale without touching sets
    /// of sessions the changeset never mentions.
    pub fn begin_set_replacement(&mut self, session_id: &str) -> bool {
        self.accepted_sessions.contains(session_id)
            && self.cleared_sessions.insert(session_id.to_string())
    }
}

/// One syncable record kind's storage operations.
///
/// Implementations run inside the coordinator's transaction and never
/// commit themselves.
pub trait EntityAdapter: Send + Sync {
    /// The kind this adapter serves
    fn kind(&self) -> EntityKind;

    /// Read every record of this kind changed strictly after `since_ms`
    fn pull_changed(&self, tx: &Transaction<'_>, user_id: &str, since_ms: i64)
        -> Result<Vec<Value>>;

    /// Resolve and stage one incoming record inside the push transaction
    fn apply_push(
        &self,
        tx: &Transaction<'_>,
        user_id: &str,
        incoming: Value,
        ctx: &mut PushContext,
    ) -> Result<Applied>;
}
