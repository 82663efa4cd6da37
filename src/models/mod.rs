pub mod booking;
pub mod form;
pub mod weekday;

pub use booking::{BookingRequest, DateFormat, SessionOccurrence, SessionReport};
pub use form::{BookingForm, FormAction, DURATION_CHOICES};
pub use weekday::PreferredWeekdays;
