//! # corpdash-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a **server-side-rendered HTML dashboard** that works with
//!   **zero JavaScript**
//! - Map form posts onto the application components (theme, session)
//! - Serve the stylesheet and icons from a configurable assets directory
//!
//! ## No-JS dashboard approach
//! - Every page is rendered server-side as complete HTML.
//! - `localStorage` is replaced by cookies: [`cookies::CookieStore`]
//!   implements the same storage port the browser build uses.
//! - Controls are `<form>` elements that POST back to the server and
//!   redirect (PRG pattern).
//! - Each modal document has its own URL; closing it links back to `/`.
//! - A successful console login answers with
//!   `<meta http-equiv="refresh">` pointing at the portal.
//!
//! ## Dependency rule
//! Depends on `corpdash-app` (ports and components) and `corpdash-domain`
//! (content). Never leaks axum types into either.

pub mod cookies;
pub mod dashboard;
pub mod error;
pub mod router;
pub mod state;
