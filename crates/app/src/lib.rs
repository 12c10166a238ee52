//! # corpdash-app
//!
//! Application layer: dashboard components and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement:
//!   - `KeyValueStore`: synchronous persisted key-value storage
//!   - `ThemeSurface`: the document marker and the visible toggle buttons
//!   - `Navigator`: opening external URLs in a new tab
//!   - `Scheduler`: cancelable one-shot and periodic timers
//!   - `KeyListeners`: escape-key listener lifecycle
//!   - `TimeSource`: current local time
//! - Implement the components as deterministic state machines:
//!   `ThemeStore`, `SessionStore`, `ModalController`, `ClockWidget`,
//!   `ConsoleLogin`
//! - Compose them in [`dashboard::Dashboard`], which maps its state to a
//!   declarative [`view::DashboardView`]
//!
//! ## Execution model
//! Single-threaded and event-driven. Components never sleep: they ask the
//! `Scheduler` for a [`ports::TimerId`] and the runtime hands that id back
//! through [`dashboard::Dashboard::fire`] when it elapses. A component only
//! reacts to ids it still owns, so cancelled or superseded timers are inert.
//!
//! ## Dependency rule
//! Depends on `corpdash-domain` only. Never imports adapter crates.

pub mod dashboard;
pub mod ports;
pub mod services;
pub mod view;

#[cfg(test)]
pub(crate) mod testing;
