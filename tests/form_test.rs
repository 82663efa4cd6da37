use booking::error::ScheduleError;
use booking::models::{BookingForm, DURATION_CHOICES, DateFormat, FormAction, PreferredWeekdays};
use booking::services::SessionScheduler;
use chrono::{NaiveDate, Weekday};

fn filled_form(total_sessions: &str) -> BookingForm {
    [
        FormAction::SetDate(NaiveDate::from_ymd_opt(2024, 1, 2)),
        FormAction::SetTime("14:00".to_string()),
        FormAction::SetTotalSessions(total_sessions.to_string()),
    ]
    .into_iter()
    .fold(BookingForm::default(), BookingForm::apply)
}

#[test]
fn test_defaults_match_booking_form() {
    let form = BookingForm::default();

    assert_eq!(form.session_date, None);
    assert_eq!(form.session_time, "");
    assert_eq!(form.total_sessions, Some(1));
    assert_eq!(form.session_duration, 15);
    assert_eq!(form.session_interval, Some(2));
    assert!(form.preferred_days.is_empty());
    assert_eq!(DURATION_CHOICES, [15, 30, 60]);
}

#[test]
fn test_submit_requires_date_time_and_sessions() {
    assert!(!BookingForm::default().is_submittable());
    assert!(filled_form("1").is_submittable());
    assert!(!filled_form("0").is_submittable());

    let no_time = filled_form("3").apply(FormAction::SetTime(String::new()));
    assert!(!no_time.is_submittable());
}

#[test]
fn test_interval_and_days_need_more_than_one_session() {
    let single = filled_form("1");
    assert!(!single.interval_enabled());
    assert!(!single.preferred_days_enabled());

    let unchanged = single
        .clone()
        .apply(FormAction::SetInterval("5".to_string()))
        .apply(FormAction::ToggleDay(Weekday::Mon));
    assert_eq!(unchanged, single);

    let multi = filled_form("3")
        .apply(FormAction::SetInterval("5".to_string()))
        .apply(FormAction::ToggleDay(Weekday::Mon));
    assert_eq!(multi.session_interval, Some(5));
    assert!(multi.preferred_days.contains(Weekday::Mon));
}

#[test]
fn test_duration_is_locked_until_form_is_submittable() {
    let form = BookingForm::default().apply(FormAction::SetDuration(60));
    assert_eq!(form.session_duration, 15);

    let form = filled_form("2").apply(FormAction::SetDuration(60));
    assert_eq!(form.session_duration, 60);
}

#[test]
fn test_cleared_total_disables_submit() {
    let form = filled_form("3").apply(FormAction::SetTotalSessions(String::new()));

    assert_eq!(form.total_sessions, None);
    assert!(!form.is_submittable());
    assert!(!form.interval_enabled());
    assert!(!form.preferred_days_enabled());

    let form = form.apply(FormAction::SetTotalSessions("abc".to_string()));
    assert_eq!(form.total_sessions, None);
    assert!(!form.is_submittable());
}

#[test]
fn test_numbers_are_read_from_leading_digits() {
    let form = filled_form("3abc");
    assert_eq!(form.total_sessions, Some(3));
    assert!(form.is_submittable());

    let form = form.apply(FormAction::SetInterval("4 days".to_string()));
    assert_eq!(form.session_interval, Some(4));
}

#[test]
fn test_cleared_interval_is_rejected_by_scheduler() {
    let form = filled_form("3").apply(FormAction::SetInterval(String::new()));
    assert_eq!(form.session_interval, None);

    let result = SessionScheduler::new().generate_report(&form.to_request());
    assert!(matches!(result, Err(ScheduleError::InvalidRequest(_))));
}

#[test]
fn test_toggle_day_twice_clears_it() {
    let form = filled_form("3")
        .apply(FormAction::ToggleDay(Weekday::Fri))
        .apply(FormAction::ToggleDay(Weekday::Wed))
        .apply(FormAction::ToggleDay(Weekday::Fri));

    assert_eq!(
        form.preferred_days,
        PreferredWeekdays::empty().with(Weekday::Wed)
    );
}

#[test]
fn test_form_snapshot_feeds_scheduler() {
    let form = filled_form("3")
        .apply(FormAction::SetInterval("1".to_string()))
        .apply(FormAction::ToggleDay(Weekday::Mon));

    let report = SessionScheduler::new()
        .generate_report(&form.to_request())
        .expect("valid request");

    assert_eq!(
        report.lines(&DateFormat::default()),
        vec![
            "02/01/2024 at 14:00 for 15 minutes on Tuesday",
            "08/01/2024 at 14:00 for 15 minutes on Monday",
            "15/01/2024 at 14:00 for 15 minutes on Monday",
        ]
    );
}
