use chrono::{Datelike, Days, NaiveDate};
use tracing::debug;

use crate::error::ScheduleError;
use crate::models::{BookingRequest, PreferredWeekdays, SessionOccurrence, SessionReport};
use crate::services::weekday_advancer::next_preferred_day;

/// Booking session scheduler
/// Lays out the dates of a recurring booking from its request
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionScheduler;

impl SessionScheduler {
    pub fn new() -> Self {
        Self
    }

    /// Produce one occurrence per requested session.
    ///
    /// The first session is always on `start_date`. Each following one lands `interval_days`
    /// later, pushed forward to the next preferred weekday when it misses the set.
    pub fn generate_report(&self, request: &BookingRequest) -> Result<SessionReport, ScheduleError> {
        let start_date = self.validate(request)?;

        debug!(
            "Generating {} sessions from {} every {} days (preferred weekdays: {:?})",
            request.total_sessions,
            start_date,
            request.interval_days,
            Vec::<u8>::from(request.preferred_weekdays)
        );

        let dates = (1..request.total_sessions).try_fold(vec![start_date], |mut dates, _| {
            let cursor = dates[dates.len() - 1];
            let next = advance(cursor, request.interval_days, request.preferred_weekdays)
                .ok_or_else(|| {
                    ScheduleError::InvalidRequest(format!(
                        "schedule runs past the last supported date after {}",
                        cursor
                    ))
                })?;
            dates.push(next);
            Ok::<_, ScheduleError>(dates)
        })?;

        let sessions = dates
            .into_iter()
            .map(|date| SessionOccurrence::new(date, &request.time, request.duration_minutes))
            .collect();

        Ok(SessionReport { sessions })
    }

    fn validate(&self, request: &BookingRequest) -> Result<NaiveDate, ScheduleError> {
        let start_date = request
            .start_date
            .ok_or_else(|| ScheduleError::InvalidRequest("start_date is required".to_string()))?;

        if request.total_sessions < 1 {
            return Err(ScheduleError::InvalidRequest(
                "total_sessions must be at least 1".to_string(),
            ));
        }
        if request.duration_minutes == 0 {
            return Err(ScheduleError::InvalidRequest(
                "duration_minutes must be positive".to_string(),
            ));
        }
        if request.interval_days < 1 {
            return Err(ScheduleError::InvalidRequest(
                "interval_days must be at least 1".to_string(),
            ));
        }

        Ok(start_date)
    }
}

/// Move the cursor by the interval, then forward onto a preferred weekday if it missed.
fn advance(cursor: NaiveDate, interval_days: u32, preferred: PreferredWeekdays) -> Option<NaiveDate> {
    let next = cursor.checked_add_days(Days::new(u64::from(interval_days)))?;

    if preferred.is_empty() || preferred.contains(next.weekday()) {
        Some(next)
    } else {
        next_preferred_day(next, preferred)
    }
}
