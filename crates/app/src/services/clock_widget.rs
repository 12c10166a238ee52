//! Clock widget: the header time/date, refreshed every second.

use std::time::Duration;

use chrono::{Datelike, NaiveDate};

use corpdash_domain::clock::{ClockFace, DateLocale};

use crate::ports::{Scheduler, TimeSource, TimerId};

pub const TICK: Duration = Duration::from_secs(1);

/// Periodic clock display. Owns at most one running interval.
pub struct ClockWidget<S, T> {
    scheduler: S,
    time: T,
    locale: DateLocale,
    face: ClockFace,
    interval: Option<TimerId>,
}

impl<S: Scheduler, T: TimeSource> ClockWidget<S, T> {
    pub fn new(scheduler: S, time: T, locale: DateLocale) -> Self {
        let face = ClockFace::at(time.now(), locale);
        Self {
            scheduler,
            time,
            locale,
            face,
            interval: None,
        }
    }

    /// Render now and arm the periodic tick. Starting twice is a no-op.
    pub fn start(&mut self) {
        self.refresh();
        if self.interval.is_none() {
            self.interval = Some(self.scheduler.every(TICK));
        }
    }

    /// Cancel the tick. The face keeps its last value.
    pub fn stop(&mut self) {
        if let Some(id) = self.interval.take() {
            self.scheduler.cancel(id);
        }
    }

    /// Handle an elapsed timer. Returns `false` for ids this widget does not own.
    pub fn fire(&mut self, id: TimerId) -> bool {
        if self.interval == Some(id) {
            self.refresh();
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn face(&self) -> &ClockFace {
        &self.face
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.interval.is_some()
    }

    #[must_use]
    pub fn locale(&self) -> DateLocale {
        self.locale
    }

    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.time.now().date()
    }

    #[must_use]
    pub fn year(&self) -> i32 {
        self.today().year()
    }

    fn refresh(&mut self) {
        self.face = ClockFace::at(self.time.now(), self.locale);
    }
}
