//! Shared UI components for the Dioxus fullstack web UI.

pub mod calculator;
pub mod counter;
pub mod footer;
pub mod header;
pub mod layout;
pub mod nav;

pub use calculator::Calculator;
pub use counter::StatelessCounter;
pub use footer::{Footer, SiteFooter};
pub use header::Header;
pub use layout::AppShell;
pub use nav::Nav;
