//! The search window.
//!
//! A `Span` is what the caller asks about. The finder copies it into a working
//! window and consumes that copy from the front as it sweeps past blocks; the
//! caller's value is never touched.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::block::Block;
use crate::period::Period;
use crate::slot::Slot;

/// A search window `[start, end)`.
///
/// Construction never fails. A span with `start >= end` is empty and yields no
/// slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl Span {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Whether any of the window is left.
    pub fn remain(&self) -> bool {
        self.start < self.end
    }

    /// Consume the front of the window up to the end of `block`.
    pub fn shorten(&mut self, block: &Block) {
        self.start = block.end();
    }

    /// Consume the rest of the window. `remain()` is false afterwards.
    pub fn exhaust(&mut self) {
        self.start = self.end;
    }

    /// The remaining window as a slot, or `None` if nothing is left.
    pub fn to_slot(&self) -> Option<Slot> {
        self.remain()
            .then(|| Slot::new_unchecked(self.start, self.end))
    }
}

impl Period for Span {
    fn start(&self) -> DateTime<Utc> {
        self.start
    }

    fn end(&self) -> DateTime<Utc> {
        self.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.start, self.end)
    }
}

