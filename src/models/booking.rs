use std::fmt::Write;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::weekday::{PreferredWeekdays, weekday_index, weekday_label};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    /// Wall-clock time, carried through to every occurrence as given.
    pub time: String,
    pub total_sessions: u32,
    pub duration_minutes: u32,
    pub interval_days: u32,
    #[serde(default)]
    pub preferred_weekdays: PreferredWeekdays,
}

pub const DEFAULT_DATE_FORMAT: &str = "%d/%m/%Y";

/// A strftime pattern known to render a bare calendar date.
///
/// Patterns with time or offset fields (`%H`, `%z`) parse fine but cannot format a
/// `NaiveDate`, so they are rejected here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFormat(String);

impl DateFormat {
    pub fn parse(pattern: &str) -> Option<Self> {
        let renders = |date: NaiveDate| {
            let mut out = String::new();
            write!(out, "{}", date.format(pattern)).is_ok()
        };

        if pattern.is_empty() || !renders(NaiveDate::MIN) || !renders(NaiveDate::MAX) {
            return None;
        }
        Some(Self(pattern.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn render(&self, date: NaiveDate) -> String {
        let mut out = String::new();
        match write!(out, "{}", date.format(&self.0)) {
            Ok(()) => out,
            Err(_) => date.to_string(),
        }
    }
}

impl Default for DateFormat {
    /// Day-first, like the booking date picker.
    fn default() -> Self {
        Self(DEFAULT_DATE_FORMAT.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionOccurrence {
    pub date: NaiveDate,
    pub time: String,
    pub duration_minutes: u32,
    pub weekday: u8,
    pub weekday_label: String,
}

impl SessionOccurrence {
    pub fn new(date: NaiveDate, time: &str, duration_minutes: u32) -> Self {
        Self {
            date,
            time: time.to_string(),
            duration_minutes,
            weekday: weekday_index(date.weekday()),
            weekday_label: weekday_label(date.weekday()).to_string(),
        }
    }

    /// Renders `"<date> at <time> for <duration> minutes on <weekday>"`.
    pub fn describe(&self, date_format: &DateFormat) -> String {
        format!(
            "{} at {} for {} minutes on {}",
            date_format.render(self.date),
            self.time,
            self.duration_minutes,
            self.weekday_label
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SessionReport {
    pub sessions: Vec<SessionOccurrence>,
}

impl SessionReport {
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SessionOccurrence> {
        self.sessions.iter()
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        self.sessions.iter().map(|s| s.date).collect()
    }

    pub fn lines(&self, date_format: &DateFormat) -> Vec<String> {
        self.sessions.iter().map(|s| s.describe(date_format)).collect()
    }
}
