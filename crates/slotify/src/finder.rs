//! Compute free slots by sweeping start-sorted blocks across a search window.
//!
//! The blocks are sorted by start time, then walked once against a working copy
//! of the span. Each block either eats the front of the remaining window, splits
//! it (emitting the gap before the block), eats its tail, or covers it entirely.
//! Blocks outside the remaining window are skipped. Whatever is left after the
//! last block is the final slot.
//!
//! Both entry points sort the caller's slice **in place**. Pass a copy if the
//! original order matters.

use std::cmp::Ordering;

use crate::block::Block;
use crate::options::FindOptions;
use crate::period::Period;
use crate::slot::Slot;
use crate::span::Span;

/// Find the free slots in `span` around `blocks`.
///
/// Returns slots in ascending order, pairwise disjoint and non-empty. A `None`
/// or empty span yields no slots; no blocks yields the whole span. Candidates
/// for which the options' filter returns `true` are left out.
///
/// `blocks` is reordered by start time as a side effect.
///
/// # Examples
///
/// ```
/// use chrono::{Duration, TimeZone, Utc};
/// use slotify::{find, Block, FindOptions, Period, Slot, Span};
///
/// let origin = Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap();
/// let at = |h: i64| origin + Duration::hours(h);
///
/// let mut blocks = vec![Block::new(at(1), at(5)).unwrap()];
/// let span = Span::new(at(0), at(8));
/// let opts = FindOptions::new().with_filter(|s: &Slot| s.duration() < Duration::hours(2));
///
/// let slots = find(&mut blocks, &span, &opts);
/// assert_eq!(slots, vec![Slot::new(at(5), at(8)).unwrap()]);
/// ```
pub fn find<'a>(
    blocks: &mut [Block],
    span: impl Into<Option<&'a Span>>,
    options: &FindOptions<Slot>,
) -> Vec<Slot> {
    find_with_adapter(
        blocks,
        span,
        |a, b| a.start().cmp(&b.start()),
        |block| *block,
        |slot| slot,
        options,
    )
}

/// Find free slots using the caller's own input and output types.
///
/// - `compare` orders `items` by start time; the slice is sorted in place with it.
/// - `map_in` turns one item into a [`Block`]. It runs once per item visited
///   during the sweep, so items past a covering block are never mapped.
/// - `map_out` turns each candidate [`Slot`] into the caller's result type
///   before the filter sees it.
///
/// Slot boundaries are identical to [`find`] for equivalent inputs.
pub fn find_with_adapter<'a, In, Out, C, I, O>(
    items: &mut [In],
    span: impl Into<Option<&'a Span>>,
    compare: C,
    mut map_in: I,
    mut map_out: O,
    options: &FindOptions<Out>,
) -> Vec<Out>
where
    C: FnMut(&In, &In) -> Ordering,
    I: FnMut(&In) -> Block,
    O: FnMut(Slot) -> Out,
{
    let Some(span) = span.into() else {
        tracing::trace!("no span given, nothing to search");
        return Vec::new();
    };
    if !span.remain() {
        tracing::trace!(%span, "empty span, nothing to search");
        return Vec::new();
    }

    items.sort_unstable_by(compare);

    let mut target = *span;
    let mut slots = Vec::with_capacity(items.len() + 1);

    for item in items.iter() {
        let block = map_in(item);

        if block.contains(&target) {
            tracing::trace!(%block, "block covers the remaining window");
            target.exhaust();
            break;
        }

        if block.overlap_at_start(&target) {
            tracing::trace!(%block, "block overlaps the front of the window");
            target.shorten(&block);
            continue;
        }

        if block.is_contained_in(&target) {
            let slot = map_out(Slot::before_block(&target, &block));
            target.shorten(&block);
            if options.excludes(&slot) {
                tracing::trace!(%block, "gap before block excluded by filter");
                continue;
            }
            slots.push(slot);
            continue;
        }

        if block.overlap_at_end(&target) {
            let slot = map_out(Slot::before_block(&target, &block));
            target.exhaust();
            if options.excludes(&slot) {
                tracing::trace!(%block, "gap before tail block excluded by filter");
                break;
            }
            slots.push(slot);
            break;
        }
    }

    if let Some(rest) = target.to_slot() {
        let slot = map_out(rest);
        if options.excludes(&slot) {
            tracing::trace!(remaining = %rest, "trailing window excluded by filter");
        } else {
            slots.push(slot);
        }
    }

    tracing::debug!(
        %span,
        blocks = items.len(),
        slots = slots.len(),
        filtered = options.has_filter(),
        "free slots computed"
    );

    slots
}
