//! Tests for the plain-text free-range report.

use chrono::{TimeZone, Utc};
use officekit_core::{render_free_ranges, FreeRange};

fn range(day: u32, sh: u32, sm: u32, eh: u32, em: u32) -> FreeRange {
    FreeRange {
        start: Utc.with_ymd_and_hms(2026, 3, day, sh, sm, 0).unwrap(),
        end: Utc.with_ymd_and_hms(2026, 3, day, eh, em, 0).unwrap(),
    }
}

#[test]
fn single_day_report_has_one_header() {
    let ranges = vec![
        range(2, 9, 0, 10, 0),
        range(2, 10, 30, 14, 0),
        range(2, 15, 0, 18, 0),
    ];

    let lines = render_free_ranges(&ranges);

    assert_eq!(
        lines,
        vec![
            "2026-03-02",
            "  09:00 AM to 10:00 AM",
            "  10:30 AM to 02:00 PM",
            "  03:00 PM to 06:00 PM",
        ]
    );
}

#[test]
fn header_repeats_when_the_date_changes() {
    let ranges = vec![range(2, 15, 0, 18, 0), range(3, 9, 0, 10, 0)];

    let lines = render_free_ranges(&ranges);

    assert_eq!(
        lines,
        vec![
            "2026-03-02",
            "  03:00 PM to 06:00 PM",
            "2026-03-03",
            "  09:00 AM to 10:00 AM",
        ]
    );
}

#[test]
fn noon_renders_as_pm() {
    let lines = render_free_ranges(&[range(2, 11, 30, 12, 30)]);
    assert_eq!(lines, vec!["2026-03-02", "  11:30 AM to 12:30 PM"]);
}

#[test]
fn no_ranges_renders_nothing() {
    assert!(render_free_ranges(&[]).is_empty());
}
