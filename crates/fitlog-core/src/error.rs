//! Error types for fitlog-core

use thiserror::Error;

/// Result type alias using fitlog-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in fitlog-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Timestamp string that could not be parsed as ISO-8601
    #[error("Malformed timestamp: {0:?}")]
    MalformedTimestamp(String),

    /// Pushed record missing or violating a required field
    #[error("Malformed {kind} record: {reason}")]
    MalformedRecord {
        /// Wire name of the entity kind
        kind: &'static str,
        /// What was wrong with the record
        reason: String,
    },

    /// Push body referenced an entity kind the catalog does not know
    #[error("Unknown entity kind: {0:?}")]
    UnknownEntityKind(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether the caller (not storage) is at fault; maps to a 4xx upstream.
    pub const fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::MalformedTimestamp(_) | Self::MalformedRecord { .. } | Self::UnknownEntityKind(_)
        )
    }
}
