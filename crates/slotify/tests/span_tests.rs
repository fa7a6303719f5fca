//! Tests for the working-window operations on `Span`.

use chrono::{DateTime, Duration, TimeZone, Utc};
use slotify::{Block, Period, Span};

fn at(hours: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 8, 0, 0).unwrap() + Duration::hours(hours)
}

#[test]
fn shorten_moves_start_to_block_end() {
    let mut span = Span::new(at(0), at(8));
    span.shorten(&Block::new_unchecked(at(-1), at(3)));
    assert_eq!(span.start(), at(3));
    assert_eq!(span.end(), at(8));
    assert!(span.remain());
}

#[test]
fn shorten_to_the_end_leaves_nothing() {
    let mut span = Span::new(at(0), at(8));
    span.shorten(&Block::new_unchecked(at(2), at(8)));
    assert!(!span.remain());
    assert_eq!(span.to_slot(), None);
}

#[test]
fn exhaust_clears_remaining_window() {
    let mut span = Span::new(at(0), at(8));
    span.exhaust();
    assert!(!span.remain());
    assert_eq!(span.to_slot(), None);
}

#[test]
fn to_slot_covers_remaining_window() {
    let span = Span::new(at(2), at(6));
    let slot = span.to_slot().unwrap();
    assert_eq!(slot.start(), at(2));
    assert_eq!(slot.end(), at(6));
}

#[test]
fn degenerate_span_has_nothing_left() {
    assert!(!Span::new(at(1), at(1)).remain());
    assert!(!Span::new(at(2), at(1)).remain());
    assert_eq!(Span::new(at(2), at(1)).to_slot(), None);
}

#[test]
fn working_copy_leaves_original_untouched() {
    let span = Span::new(at(0), at(8));
    let mut target = span;
    target.exhaust();
    assert!(span.remain());
    assert_eq!(span.start(), at(0));
}
