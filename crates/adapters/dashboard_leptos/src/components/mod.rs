mod clock;
mod console;
mod footer;
mod header;
mod links;
mod modal;
mod theme_toggle;

pub use clock::Clock;
pub use console::Console;
pub use footer::Footer;
pub use header::Header;
pub use links::LinkSections;
pub use modal::Modal;
pub use theme_toggle::ThemeToggle;
