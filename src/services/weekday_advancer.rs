use chrono::{Datelike, NaiveDate};

use crate::models::PreferredWeekdays;

/// Next date strictly after `date` that falls on one of the `allowed` weekdays.
///
/// Returns `None` when `allowed` is empty or the calendar runs out before a match.
pub fn next_preferred_day(date: NaiveDate, allowed: PreferredWeekdays) -> Option<NaiveDate> {
    if allowed.is_empty() {
        return None;
    }

    std::iter::successors(date.succ_opt(), |d| d.succ_opt())
        .take(7)
        .find(|d| allowed.contains(d.weekday()))
}
