//! # slotify
//!
//! Find the free time slots inside a search window, given the blocks of time
//! that are already taken.
//!
//! The finder sorts the busy [`Block`]s by start time and sweeps them once
//! against a working copy of the search [`Span`], emitting every gap as a
//! [`Slot`]. Overlapping and out-of-window blocks need no preprocessing.
//!
//! ## Quick start
//!
//! ```rust
//! use chrono::{Duration, TimeZone, Utc};
//! use slotify::{find, Block, FindOptions, Span};
//!
//! let origin = Utc.with_ymd_and_hms(2026, 3, 1, 8, 0, 0).unwrap();
//! let at = |h: i64| origin + Duration::hours(h);
//!
//! let mut blocks = vec![Block::new(at(1), at(5)).unwrap()];
//! let span = Span::new(at(0), at(8));
//!
//! let slots = find(&mut blocks, &span, &FindOptions::new());
//! assert_eq!(slots.len(), 2);
//! assert_eq!(slots[0].to_string(), format!("{}, {}", at(0), at(1)));
//! assert_eq!(slots[1].to_string(), format!("{}, {}", at(5), at(8)));
//! ```
//!
//! ## Modules
//!
//! - [`period`] — `Period` trait shared by blocks, spans and slots
//! - [`block`] — busy intervals, validating and batch constructors, overlap predicates
//! - [`span`] — the search window and its working-copy operations
//! - [`slot`] — free-time results
//! - [`options`] — per-call options (exclusion filter)
//! - [`finder`] — the sweep (`find`, `find_with_adapter`)
//! - [`error`] — Error types

pub mod block;
pub mod error;
pub mod finder;
pub mod options;
pub mod period;
pub mod slot;
pub mod span;

pub use block::{new_blocks, Block};
pub use error::SlotifyError;
pub use finder::{find, find_with_adapter};
pub use options::{FilterFn, FindOptions};
pub use period::Period;
pub use slot::Slot;
pub use span::Span;
