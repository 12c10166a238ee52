//! Deterministic in-memory port implementations shared by unit tests.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::rc::Rc;
use std::time::Duration;

use chrono::{NaiveDate, NaiveDateTime};

use corpdash_domain::error::StorageError;
use corpdash_domain::theme::Theme;

use crate::ports::{
    KeyListeners, KeyValueStore, ListenerId, Navigator, Scheduler, ThemeSurface, TimeSource,
    TimerId,
};

#[derive(Clone, Default)]
pub struct MemoryStore {
    values: Rc<RefCell<HashMap<String, String>>>,
    unavailable: Rc<Cell<bool>>,
}

impl MemoryStore {
    pub fn raw(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    pub fn put_raw(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.set(unavailable);
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.unavailable.get() {
            return Err(StorageError::Unavailable);
        }
        Ok(self.raw(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.unavailable.get() {
            return Err(StorageError::Unavailable);
        }
        self.put_raw(key, value);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        if self.unavailable.get() {
            return Err(StorageError::Unavailable);
        }
        self.values.borrow_mut().remove(key);
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct RecordingSurface {
    dark: Rc<Cell<bool>>,
    toggles: Rc<RefCell<Vec<Theme>>>,
}

impl RecordingSurface {
    pub fn with_marker(dark: bool) -> Self {
        let surface = Self::default();
        surface.dark.set(dark);
        surface
    }

    pub fn is_dark(&self) -> bool {
        self.dark.get()
    }

    pub fn last_toggle(&self) -> Option<Theme> {
        self.toggles.borrow().last().copied()
    }
}

impl ThemeSurface for RecordingSurface {
    fn has_dark_marker(&self) -> bool {
        self.dark.get()
    }

    fn set_dark_marker(&self, dark: bool) {
        self.dark.set(dark);
    }

    fn refresh_toggles(&self, theme: Theme) {
        self.toggles.borrow_mut().push(theme);
    }
}

#[derive(Clone, Default)]
pub struct RecordingNavigator {
    opened: Rc<RefCell<Vec<String>>>,
}

impl RecordingNavigator {
    pub fn opened(&self) -> Vec<String> {
        self.opened.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn open_external(&self, url: &str) {
        self.opened.borrow_mut().push(url.to_string());
    }
}

struct Armed {
    due: Duration,
    period: Option<Duration>,
}

#[derive(Default)]
struct SchedulerState {
    now: Duration,
    next: u64,
    armed: BTreeMap<TimerId, Armed>,
}

/// Virtual-time scheduler: nothing fires until the test advances time.
#[derive(Clone, Default)]
pub struct VirtualScheduler {
    state: Rc<RefCell<SchedulerState>>,
}

impl VirtualScheduler {
    fn arm(&self, delay: Duration, period: Option<Duration>) -> TimerId {
        let mut state = self.state.borrow_mut();
        state.next += 1;
        let id = TimerId::new(state.next);
        let due = state.now + delay;
        state.armed.insert(id, Armed { due, period });
        id
    }

    pub fn armed_count(&self) -> usize {
        self.state.borrow().armed.len()
    }

    pub fn now(&self) -> Duration {
        self.state.borrow().now
    }

    /// Pop the earliest timer due at or before `deadline`, moving virtual
    /// time to its due instant. Periodic timers are re-armed.
    fn pop_due(&self, deadline: Duration) -> Option<TimerId> {
        let mut state = self.state.borrow_mut();
        let (id, due) = state
            .armed
            .iter()
            .filter(|(_, armed)| armed.due <= deadline)
            .min_by_key(|(id, armed)| (armed.due, **id))
            .map(|(id, armed)| (*id, armed.due))?;
        state.now = due;
        let period = state.armed.get(&id).and_then(|armed| armed.period);
        match period {
            Some(period) => {
                if let Some(armed) = state.armed.get_mut(&id) {
                    armed.due = due + period;
                }
            }
            None => {
                state.armed.remove(&id);
            }
        }
        Some(id)
    }

    /// Advance virtual time by `by`, handing every elapsed timer to `fire`
    /// in due order. `fire` may arm or cancel timers.
    pub fn advance(&self, by: Duration, mut fire: impl FnMut(TimerId)) {
        let deadline = self.now() + by;
        while let Some(id) = self.pop_due(deadline) {
            fire(id);
        }
        self.state.borrow_mut().now = deadline;
    }
}

impl Scheduler for VirtualScheduler {
    fn once(&self, delay: Duration) -> TimerId {
        self.arm(delay, None)
    }

    fn every(&self, period: Duration) -> TimerId {
        self.arm(period, Some(period))
    }

    fn cancel(&self, id: TimerId) {
        self.state.borrow_mut().armed.remove(&id);
    }
}

#[derive(Default)]
struct KeyboardState {
    next: u64,
    attached: BTreeSet<ListenerId>,
}

#[derive(Clone, Default)]
pub struct VirtualKeyboard {
    state: Rc<RefCell<KeyboardState>>,
}

impl VirtualKeyboard {
    pub fn attached(&self) -> Vec<ListenerId> {
        self.state.borrow().attached.iter().copied().collect()
    }
}

impl KeyListeners for VirtualKeyboard {
    fn attach_escape(&self) -> ListenerId {
        let mut state = self.state.borrow_mut();
        state.next += 1;
        let id = ListenerId::new(state.next);
        state.attached.insert(id);
        id
    }

    fn detach(&self, id: ListenerId) {
        self.state.borrow_mut().attached.remove(&id);
    }
}

#[derive(Clone)]
pub struct FixedTime {
    now: Rc<Cell<NaiveDateTime>>,
}

impl FixedTime {
    pub fn at(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> Self {
        let now = NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|d| d.and_hms_opt(hour, min, sec))
            .unwrap();
        Self {
            now: Rc::new(Cell::new(now)),
        }
    }

    pub fn advance(&self, by: Duration) {
        let next = self.now.get() + chrono::Duration::from_std(by).unwrap();
        self.now.set(next);
    }
}

impl TimeSource for FixedTime {
    fn now(&self) -> NaiveDateTime {
        self.now.get()
    }
}
