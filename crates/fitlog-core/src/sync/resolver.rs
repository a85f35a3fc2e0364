//! Last-writer-wins conflict resolution
//!
//! A pure decision function: given the server's stored temporal identity of
//! a record (if any) and the incoming client record's, decide whether to
//! create, accept, or reject. Adapters translate the decision into SQL; the
//! resolver itself never touches storage.

use std::cmp::Ordering;

use super::catalog::Mutability;

/// Temporal identity of a record, as seen by the resolver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordMeta {
    /// Creation timestamp (Unix ms)
    pub created_at: i64,
    /// Last update timestamp; None means "equal to `created_at`"
    pub updated_at: Option<i64>,
}

impl RecordMeta {
    /// The timestamp that participates in LWW comparison
    #[must_use]
    pub const fn effective_time(self) -> i64 {
        match self.updated_at {
            Some(t) => t,
            None => self.created_at,
        }
    }
}

/// Why a pushed record was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// Append-only record with this id already exists
    Duplicate,
    /// Server's stored timestamp is strictly newer
    ServerNewer,
    /// Timestamps are equal; ties resolve to the server to avoid oscillation
    TieServerWins,
    /// Dependent record whose parent was rejected in the same push
    ParentRejected,
}

impl RejectReason {
    /// Human-readable ledger message
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Duplicate => "Append-only record already exists",
            Self::ServerNewer => "Server version is newer",
            Self::TieServerWins => "Timestamp tie; server wins",
            Self::ParentRejected => "Parent session rejected",
        }
    }
}

/// Outcome of resolving one incoming record against server state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// No server record exists; apply incoming as a new record
    Create,
    /// Incoming is newer; overwrite the mutable fields
    Accept,
    /// Incoming loses; record a conflict ledger entry instead
    Reject(RejectReason),
}

/// Decide what to do with an incoming record.
///
/// Dependent kinds are gated on their parent upstream of this function and
/// written verbatim, so an existing row resolves to `Accept` here.
#[must_use]
pub fn resolve(policy: Mutability, existing: Option<RecordMeta>, incoming: RecordMeta) -> Decision {
    let Some(existing) = existing else {
        return Decision::Create;
    };

    match policy {
        Mutability::AppendOnly => Decision::Reject(RejectReason::Duplicate),
        Mutability::Dependent => Decision::Accept,
        Mutability::Mutable | Mutability::Singleton => {
            match incoming.effective_time().cmp(&existing.effective_time()) {
                Ordering::Greater => Decision::Accept,
                Ordering::Less => Decision::Reject(RejectReason::ServerNewer),
                Ordering::Equal => Decision::Reject(RejectReason::TieServerWins),
            }
        }
    }
}
