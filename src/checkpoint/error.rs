//! Snapshot error types.

use thiserror::Error;

/// Errors that can occur while encoding or decoding snapshots
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Serialization to JSON or binary format failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Deserialization from JSON or binary format failed
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    /// Snapshot was written by a different format version
    #[error("Unsupported snapshot version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// Snapshot contents contradict each other
    #[error("Snapshot validation failed: {0}")]
    ValidationFailed(String),
}
