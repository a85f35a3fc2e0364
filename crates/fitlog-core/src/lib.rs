//! fitlog-core - Core library for fitlog
//!
//! This crate contains the shared models, database layer, and the
//! offline-first sync engine used by the fitlog API server.

pub mod db;
pub mod error;
pub mod models;
pub mod sync;

pub use error::{Error, Result};
pub use sync::SyncEngine;
