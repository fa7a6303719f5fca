//! Busy intervals and the overlap predicates the finder sweeps with.
//!
//! All predicates are half-open: a block ending exactly where another period
//! starts does not overlap it.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotifyError};
use crate::period::Period;

/// An occupied interval `[start, end)` with `start < end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBlock")]
pub struct Block {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

/// Unvalidated wire shape; deserialization goes through [`Block::new`].
#[derive(Deserialize)]
struct RawBlock {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TryFrom<RawBlock> for Block {
    type Error = SlotifyError;

    fn try_from(raw: RawBlock) -> Result<Self> {
        Block::new(raw.start, raw.end)
    }
}

impl Block {
    /// Create a block, rejecting empty and inverted ranges.
    ///
    /// # Errors
    /// Returns `SlotifyError::InvalidRange` if `start >= end`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self> {
        if start >= end {
            return Err(SlotifyError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Create a block without checking `start < end`.
    ///
    /// For data that was already validated upstream. The finder's results are
    /// unspecified for blocks that break the invariant.
    pub fn new_unchecked(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// The block covers all of `p`.
    pub fn contains<P: Period + ?Sized>(&self, p: &P) -> bool {
        p.start() >= self.start && p.end() <= self.end
    }

    /// The block lies entirely inside `p`.
    pub fn is_contained_in<P: Period + ?Sized>(&self, p: &P) -> bool {
        p.start() <= self.start && self.end <= p.end()
    }

    /// The block covers the front of `p`, and `p` continues past it.
    pub fn overlap_at_start<P: Period + ?Sized>(&self, p: &P) -> bool {
        let p_start = p.start();
        self.start <= p_start && p_start < self.end && self.end <= p.end()
    }

    /// The block covers the tail of `p`, and `p` starts before it.
    pub fn overlap_at_end<P: Period + ?Sized>(&self, p: &P) -> bool {
        let p_end = p.end();
        p.start() <= self.start && self.start < p_end && p_end <= self.end
    }
}

impl Period for Block {
    fn start(&self) -> DateTime<Utc> {
        self.start
    }

    fn end(&self) -> DateTime<Utc> {
        self.end
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.start, self.end)
    }
}

/// Build blocks from arbitrary caller inputs through a fallible mapper.
///
/// Fails fast: the first mapper error aborts the batch and no partial list is
/// returned, so an input is never silently dropped.
///
/// # Errors
/// Returns `SlotifyError::MapperFailure` wrapping the first mapper error,
/// together with the index of the input that caused it.
///
/// # Examples
///
/// ```
/// use chrono::{Duration, TimeZone, Utc};
/// use slotify::{new_blocks, Block};
///
/// let origin = Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap();
/// let hours = [(1, 3), (2, 4)];
/// let blocks = new_blocks(hours, |(s, e)| {
///     Block::new(origin + Duration::hours(s), origin + Duration::hours(e))
/// })
/// .unwrap();
/// assert_eq!(blocks.len(), 2);
/// ```
pub fn new_blocks<T, E, F>(
    inputs: impl IntoIterator<Item = T>,
    mut mapper: F,
) -> Result<Vec<Block>>
where
    F: FnMut(T) -> std::result::Result<Block, E>,
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    let inputs = inputs.into_iter();
    let mut blocks = Vec::with_capacity(inputs.size_hint().0);

    for (index, input) in inputs.enumerate() {
        match mapper(input) {
            Ok(block) => blocks.push(block),
            Err(err) => {
                let source = err.into();
                tracing::debug!(index, error = %source, "block mapper failed, aborting batch");
                return Err(SlotifyError::MapperFailure { index, source });
            }
        }
    }

    Ok(blocks)
}
