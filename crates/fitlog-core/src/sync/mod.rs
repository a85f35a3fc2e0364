//! Multi-entity offline-first sync engine
//!
//! A mobile client caches data locally and periodically exchanges deltas
//! with this server across five record kinds, each with its own mutability
//! and conflict policy. Pull is a read-only snapshot of everything newer
//! than the client's watermark; push is the only mutating path and commits
//! all accepted writes in one transaction, returning a conflict ledger for
//! everything it rejected.

mod adapter;
pub mod adapters;
mod catalog;
pub mod clock;
mod coordinator;
mod resolver;
pub mod wire;

pub use adapter::{Applied, EntityAdapter, PushContext};
pub use catalog::{EntityKind, Mutability};
pub use coordinator::SyncEngine;
pub use resolver::{resolve, Decision, RecordMeta, RejectReason};
pub use wire::{ConflictEntry, PullResponse, PushRequest, PushResponse};
