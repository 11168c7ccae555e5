//! Booking consolidation.
//!
//! Collapses an unordered set of closed intervals into the minimal
//! sorted set of non-overlapping, non-touching intervals covering the
//! same time slots. Two bookings merge when they overlap or when one
//! ends exactly where the next starts: `[9, 10]` and `[10, 11]` become
//! `[9, 11]`.

use tracing::debug;

use crate::error::Result;
use crate::model::Booking;

/// Merges `bookings` into the minimal equivalent schedule.
///
/// The input may be unsorted and may contain duplicates and overlaps;
/// it is not mutated. The output is sorted ascending by start, and
/// every adjacent pair is separated by a gap (`prior.end < next.start`).
/// Empty input yields empty output.
pub fn merge_bookings(bookings: &[Booking]) -> Result<Vec<Booking>> {
    let mut sorted = bookings.to_vec();
    sorted.sort_unstable_by_key(Booking::start);

    let mut iter = sorted.into_iter();
    let Some(mut current) = iter.next() else {
        return Ok(Vec::new());
    };

    let mut merged = Vec::new();
    for next in iter {
        if current.touches_or_overlaps(&next) {
            current.absorb(&next);
        } else {
            merged.push(current);
            current = next;
        }
    }
    merged.push(current);

    debug!(
        input_len = bookings.len(),
        merged_len = merged.len(),
        "merged bookings"
    );
    Ok(merged)
}

/// [`merge_bookings`] over raw `[start, end]` pairs.
///
/// Every pair is validated up front; a pair with `start > end` fails
/// the whole call with [`crate::CoreError::InvalidBooking`] and no
/// partial result.
pub fn merge_pairs(pairs: &[[i64; 2]]) -> Result<Vec<[i64; 2]>> {
    let bookings = pairs
        .iter()
        .map(|&[start, end]| Booking::new(start, end))
        .collect::<Result<Vec<_>>>()?;

    Ok(merge_bookings(&bookings)?
        .into_iter()
        .map(Into::into)
        .collect())
}
