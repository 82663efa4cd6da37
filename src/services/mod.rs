pub mod scheduler;
pub mod weekday_advancer;

pub use scheduler::SessionScheduler;
pub use weekday_advancer::next_preferred_day;
