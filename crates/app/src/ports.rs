//! Port definitions: traits that adapters implement.
//!
//! Ports are the boundaries between the dashboard components and the host
//! (a browser, an HTTP request, a test harness). All of them are synchronous:
//! the browser APIs they model are.

pub mod keyboard;
pub mod navigator;
pub mod scheduler;
pub mod storage;
pub mod surface;
pub mod time;

pub use keyboard::{KeyListeners, KeyPress, ListenerId};
pub use navigator::Navigator;
pub use scheduler::{Scheduler, TimerId};
pub use storage::KeyValueStore;
pub use surface::ThemeSurface;
pub use time::{LocalTime, TimeSource};
