//! Plain-text rendering of free ranges.
//!
//! The finder returns structured [`FreeRange`] records; turning them into a
//! report is the caller's business. This module provides the stock rendering:
//! a `YYYY-MM-DD` header per distinct date, then an indented
//! `HH:MM AM/PM to HH:MM AM/PM` line per range.

use chrono::NaiveDate;

use crate::schedule::FreeRange;

/// Render free ranges as report lines.
///
/// Ranges are expected in start order, as returned by
/// [`find_open_slots`](crate::schedule::find_open_slots). A header line is
/// emitted whenever the date changes.
pub fn render_free_ranges(ranges: &[FreeRange]) -> Vec<String> {
    let mut lines = Vec::with_capacity(ranges.len());
    let mut current_date: Option<NaiveDate> = None;

    for range in ranges {
        if current_date != Some(range.date()) {
            lines.push(range.date().format("%Y-%m-%d").to_string());
            current_date = Some(range.date());
        }
        lines.push(format!(
            "  {} to {}",
            range.start.format("%I:%M %p"),
            range.end.format("%I:%M %p")
        ));
    }

    lines
}
