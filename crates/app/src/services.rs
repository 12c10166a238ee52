//! Dashboard components.
//!
//! Each component accepts port implementations via generic parameters
//! (constructor injection), keeping this layer decoupled from concrete hosts.

pub mod clock_widget;
pub mod console;
pub mod modal;
pub mod session_store;
pub mod theme_store;
