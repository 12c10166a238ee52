//! Time port: the wall clock shown by the clock widget.

use chrono::NaiveDateTime;

/// Source of the current local date and time.
pub trait TimeSource {
    fn now(&self) -> NaiveDateTime;
}

/// The host's local clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalTime;

impl TimeSource for LocalTime {
    fn now(&self) -> NaiveDateTime {
        chrono::Local::now().naive_local()
    }
}
