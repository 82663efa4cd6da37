use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::models::booking::BookingRequest;
use crate::models::weekday::PreferredWeekdays;

/// Session lengths offered by the booking form, in minutes.
pub const DURATION_CHOICES: [u32; 3] = [15, 30, 60];

/// Snapshot of the booking form. Every edit produces a new snapshot through [`BookingForm::apply`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingForm {
    pub session_date: Option<NaiveDate>,
    pub session_time: String,
    /// `None` while the field is blank or holds no leading number.
    pub total_sessions: Option<u32>,
    pub session_duration: u32,
    pub session_interval: Option<u32>,
    pub preferred_days: PreferredWeekdays,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    SetDate(Option<NaiveDate>),
    SetTime(String),
    /// Raw text from the number input.
    SetTotalSessions(String),
    SetDuration(u32),
    /// Raw text from the number input.
    SetInterval(String),
    ToggleDay(Weekday),
}

impl Default for BookingForm {
    fn default() -> Self {
        Self {
            session_date: None,
            session_time: String::new(),
            total_sessions: Some(1),
            session_duration: DURATION_CHOICES[0],
            session_interval: Some(2),
            preferred_days: PreferredWeekdays::empty(),
        }
    }
}

impl BookingForm {
    pub fn apply(self, action: FormAction) -> Self {
        match action {
            FormAction::SetDate(session_date) => Self { session_date, ..self },
            FormAction::SetTime(session_time) => Self { session_time, ..self },
            FormAction::SetTotalSessions(text) => Self {
                total_sessions: parse_leading_int(&text),
                ..self
            },
            FormAction::SetDuration(session_duration) if self.is_submittable() => {
                Self { session_duration, ..self }
            }
            FormAction::SetInterval(text) if self.interval_enabled() => Self {
                session_interval: parse_leading_int(&text),
                ..self
            },
            FormAction::ToggleDay(day) if self.preferred_days_enabled() => Self {
                preferred_days: self.preferred_days.toggle(day),
                ..self
            },
            // disabled inputs never change
            FormAction::SetDuration(_) | FormAction::SetInterval(_) | FormAction::ToggleDay(_) => {
                self
            }
        }
    }

    pub fn is_submittable(&self) -> bool {
        self.session_date.is_some()
            && !self.session_time.is_empty()
            && self.total_sessions.is_some_and(|n| n > 0)
    }

    pub fn interval_enabled(&self) -> bool {
        self.is_submittable() && self.preferred_days_enabled()
    }

    pub fn preferred_days_enabled(&self) -> bool {
        self.total_sessions.is_some_and(|n| n > 1)
    }

    pub fn to_request(&self) -> BookingRequest {
        BookingRequest {
            start_date: self.session_date,
            time: self.session_time.clone(),
            total_sessions: self.total_sessions.unwrap_or(0),
            duration_minutes: self.session_duration,
            interval_days: self.session_interval.unwrap_or(0),
            preferred_weekdays: self.preferred_days,
        }
    }
}

/// Reads the leading integer of a number input: `"3abc"` is 3, while `""`, `"abc"` and
/// negative input are unset. Overlong digit runs saturate.
fn parse_leading_int(text: &str) -> Option<u32> {
    let text = text.trim_start();
    let text = text.strip_prefix('+').unwrap_or(text);
    let end = text
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len());
    let digits = &text[..end];

    if digits.is_empty() {
        return None;
    }
    Some(digits.parse().unwrap_or(u32::MAX))
}
