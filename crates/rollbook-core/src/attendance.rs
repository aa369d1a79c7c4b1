//! Attendance marking window policy.
//!
//! Attendance is taken on Sundays only. Marking for the current Sunday is
//! open from 07:30:00 to 13:00:00, both boundary instants included. Past
//! Sundays are immutable and future Sundays are not yet open.
//!
//! Every function here is pure over the naive timestamps it is given. The
//! binaries pass `chrono::Local::now().naive_local()`, so "local" means the
//! operator's clock; no timezone conversion happens anywhere in the policy.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Weekday};

const REASON_NOT_SUNDAY: &str = "Attendance can only be marked for Sundays.";
const REASON_BEFORE_OPEN: &str = "Marking opens at 7:30 AM today.";
const REASON_AFTER_CLOSE: &str = "Marking closed at 1:00 PM today.";
const REASON_PAST: &str = "Cannot modify past attendance.";
const REASON_FUTURE: &str = "Marking will open on Sunday at 7:30 AM.";

fn window_open() -> NaiveTime {
    NaiveTime::from_hms_opt(7, 30, 0).expect("07:30:00 is a valid time")
}

fn window_close() -> NaiveTime {
    NaiveTime::from_hms_opt(13, 0, 0).expect("13:00:00 is a valid time")
}

/// Outcome of an eligibility check for a candidate marking date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkingDecision {
    pub can_mark: bool,
    pub reason: Option<String>,
}

impl MarkingDecision {
    fn allowed() -> Self {
        Self {
            can_mark: true,
            reason: None,
        }
    }

    fn blocked(reason: &str) -> Self {
        Self {
            can_mark: false,
            reason: Some(reason.to_string()),
        }
    }
}

/// The next Sunday strictly after `date` when `date` is itself a Sunday,
/// otherwise the nearest upcoming Sunday (1-7 days ahead).
pub fn next_sunday(date: NaiveDate) -> NaiveDate {
    let ahead = 7 - i64::from(date.weekday().num_days_from_sunday());
    date + Duration::days(ahead)
}

/// Date to preselect on the marking screen.
///
/// On a Sunday before the 13:00 close this is today; after the close it
/// rolls over to the following Sunday. On any other day it is the next
/// upcoming Sunday.
pub fn default_marking_date(now: NaiveDateTime) -> NaiveDate {
    let today = now.date();
    if today.weekday() == Weekday::Sun {
        if now.time() > window_close() {
            today + Duration::days(7)
        } else {
            today
        }
    } else {
        next_sunday(today)
    }
}

/// Whether attendance may be submitted for `date` at instant `now`.
///
/// "Before open" and "after close" are strict comparisons, so exactly
/// 07:30:00 and exactly 13:00:00 both fall inside the window.
pub fn check_marking(date: NaiveDate, now: NaiveDateTime) -> MarkingDecision {
    if date.weekday() != Weekday::Sun {
        return MarkingDecision::blocked(REASON_NOT_SUNDAY);
    }

    let today = now.date();
    if date == today {
        if now.time() < window_open() {
            MarkingDecision::blocked(REASON_BEFORE_OPEN)
        } else if now.time() > window_close() {
            MarkingDecision::blocked(REASON_AFTER_CLOSE)
        } else {
            MarkingDecision::allowed()
        }
    } else if date < today {
        MarkingDecision::blocked(REASON_PAST)
    } else {
        MarkingDecision::blocked(REASON_FUTURE)
    }
}
