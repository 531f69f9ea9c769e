//! Free-slot computation over a day's appointments.
//!
//! Derives a working-day window from the appointment span, subdivides the
//! gaps between busy periods into fixed-length bookable slots, then merges
//! adjacent surviving slots back into maximal free ranges.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{OfficeError, Result};

/// A busy period on the calendar, with `start <= end`.
///
/// The input list handed to [`find_open_slots`] need not be sorted and may
/// contain overlapping appointments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Appointment {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// A maximal run of contiguous free slots, with `start < end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreeRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl FreeRange {
    /// Calendar date of the range start, used to group ranges in reports.
    pub fn date(&self) -> NaiveDate {
        self.start.date_naive()
    }
}

/// How candidate slots are checked against the working window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundaryPolicy {
    /// Compare hour-of-day only, ignoring the date. This is the historical
    /// behavior: in a gap that runs past the end of the working day, a slot
    /// whose hours still fall inside the window is kept even though its date
    /// no longer matches the window's.
    #[default]
    HourOfDay,
    /// Compare full instants: a slot must lie inside `[day_start, day_end]`.
    Instant,
}

/// Per-call configuration for [`find_open_slots`].
///
/// Passed by value on every call; there is no shared default state to mutate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotConfig {
    /// Length of one bookable slot, in minutes.
    pub slot_minutes: u32,
    /// Hour-of-day at which the working day opens.
    pub day_start_hour: u32,
    /// Hour-of-day at which the working day closes.
    pub day_end_hour: u32,
    /// Boundary check applied to candidate slots.
    pub boundary: BoundaryPolicy,
}

impl Default for SlotConfig {
    /// 30-minute slots inside a 09:00-18:00 working day.
    fn default() -> Self {
        Self {
            slot_minutes: 30,
            day_start_hour: 9,
            day_end_hour: 18,
            boundary: BoundaryPolicy::default(),
        }
    }
}

/// Put `instant` at `hour:00:00` on its own calendar date. Hours past 23 are
/// clamped so the construction cannot fail.
fn at_hour(instant: DateTime<Utc>, hour: u32) -> DateTime<Utc> {
    let time = NaiveTime::from_hms_opt(hour.min(23), 0, 0).unwrap_or(NaiveTime::MIN);
    instant.date_naive().and_time(time).and_utc()
}

/// Compute the merged free ranges for a day's appointments.
///
/// The working window opens at `day_start_hour` on the date of the first
/// appointment's start and closes at `day_end_hour` on the date of the last
/// appointment's end ("first" and "last" in the order given, matching how the
/// calendar hands the list over). Gaps between busy periods are cut into
/// `slot_minutes` slots; a trailing remainder shorter than one slot is not
/// offered. Adjacent slots that pass the boundary check are merged into
/// maximal ranges, returned sorted by start time.
///
/// # Errors
/// Returns [`OfficeError::EmptySchedule`] when `appointments` is empty, and
/// [`OfficeError::NoFreeTime`] when no slot survives (for example a single
/// appointment covering the whole window, or a zero `slot_minutes`).
pub fn find_open_slots(appointments: &[Appointment], config: SlotConfig) -> Result<Vec<FreeRange>> {
    let (first, last) = match (appointments.first(), appointments.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(OfficeError::EmptySchedule),
    };

    // Zero-length slots would never advance the subdivision cursor, so there
    // is nothing bookable to offer.
    if config.slot_minutes == 0 {
        return Err(OfficeError::NoFreeTime);
    }

    let day_start = at_hour(first.start, config.day_start_hour);
    let day_end = at_hour(last.end, config.day_end_hour);

    // Occupied markers: zero-length sentinels at the window edges plus the
    // appointments themselves, sorted by (start, end).
    let mut markers: Vec<(DateTime<Utc>, DateTime<Utc>)> =
        Vec::with_capacity(appointments.len() + 2);
    markers.push((day_start, day_start));
    markers.extend(appointments.iter().map(|a| (a.start, a.end)));
    markers.push((day_end, day_end));
    markers.sort();

    // The gap between one marker's end and the next marker's start is a
    // candidate free interval; cut it into fixed-length slots. Non-positive
    // gaps emit nothing.
    let duration = Duration::minutes(i64::from(config.slot_minutes));
    let mut slots: Vec<(DateTime<Utc>, DateTime<Utc>)> = Vec::new();
    for pair in markers.windows(2) {
        let mut cursor = pair[0].1;
        let gap_end = pair[1].0;
        while cursor + duration <= gap_end {
            slots.push((cursor, cursor + duration));
            cursor = cursor + duration;
        }
    }

    let in_window = |start: DateTime<Utc>, end: DateTime<Utc>| match config.boundary {
        BoundaryPolicy::HourOfDay => {
            let hours = config.day_start_hour.min(23)..=config.day_end_hour.min(23);
            hours.contains(&start.hour()) && hours.contains(&end.hour())
        }
        BoundaryPolicy::Instant => start >= day_start && end <= day_end,
    };

    // Merge pass: slots that fail the boundary check are dropped; a surviving
    // slot extends the open range when it starts at or before that range's
    // end, otherwise it opens a new range.
    let mut ranges: Vec<FreeRange> = Vec::new();
    for (start, end) in slots {
        if !in_window(start, end) {
            continue;
        }
        if let Some(last) = ranges.last_mut() {
            if start <= last.end {
                last.end = last.end.max(end);
                continue;
            }
        }
        ranges.push(FreeRange { start, end });
    }

    if ranges.is_empty() {
        return Err(OfficeError::NoFreeTime);
    }
    Ok(ranges)
}
