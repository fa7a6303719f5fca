//! The `Period` capability shared by every interval type.
//!
//! Blocks, spans and slots are all a pair of ordered time points. The overlap
//! predicates in [`crate::block`] are written once against this trait, so a
//! block can be compared with any of them.

use chrono::{DateTime, Duration, Utc};

/// Anything with a start and an end on the UTC timeline.
///
/// Intervals are half-open: a period covers `[start, end)`.
pub trait Period {
    fn start(&self) -> DateTime<Utc>;

    fn end(&self) -> DateTime<Utc>;

    /// Length of the period. Negative for inverted periods.
    fn duration(&self) -> Duration {
        self.end() - self.start()
    }

    /// Length of the period in whole minutes.
    fn duration_minutes(&self) -> i64 {
        self.duration().num_minutes()
    }
}
