//! Free-time results produced by the finder.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::block::Block;
use crate::error::{Result, SlotifyError};
use crate::period::Period;

/// A free interval `[start, end)`. Always non-empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Slot {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl Slot {
    /// Create a slot, rejecting empty and inverted ranges.
    ///
    /// The finder is the usual source of slots; this exists for callers that
    /// need to build expected values or re-wrap stored results.
    ///
    /// # Errors
    /// Returns `SlotifyError::InvalidRange` if `start >= end`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self> {
        if start >= end {
            return Err(SlotifyError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub(crate) fn new_unchecked(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// The gap between the front of `window` and the start of `block`.
    pub(crate) fn before_block<P: Period + ?Sized>(window: &P, block: &Block) -> Self {
        Self::new_unchecked(window.start(), block.start())
    }
}

impl Period for Slot {
    fn start(&self) -> DateTime<Utc> {
        self.start
    }

    fn end(&self) -> DateTime<Utc> {
        self.end
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.start, self.end)
    }
}
