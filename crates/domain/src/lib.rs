//! # corpdash-domain
//!
//! Pure domain model for the corporate dashboard.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, clock formatting
//! - Define the **Theme** flag (light/dark) and how it is persisted
//! - Define **Credentials** and the allow-list **policy** that turns a
//!   username/password pair into a **Session**
//! - Define the static **catalog**: link groups, addons, informational
//!   documents and fixed external URLs
//! - Define the declarative **document** model used for modal bodies
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;

pub mod addon;
pub mod catalog;
pub mod clock;
pub mod credential;
pub mod document;
pub mod link;
pub mod session;
pub mod theme;
