//! Error types for slotify operations.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors that can occur while constructing intervals.
#[derive(Error, Debug)]
pub enum SlotifyError {
    /// A validating constructor received `start >= end`.
    #[error("Invalid range: start {start} is not before end {end}")]
    InvalidRange {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    /// A caller-supplied mapper failed during batch construction.
    /// `index` is the 0-based position of the offending input.
    #[error("Mapper failed on input {index}: {source}")]
    MapperFailure {
        index: usize,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Convenience alias used throughout slotify.
pub type Result<T> = std::result::Result<T, SlotifyError>;
