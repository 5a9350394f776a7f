//! # caralerts-tui - Terminal UI for CarAlerts
//!
//! The ratatui-based front-end: terminal event polling into app
//! [`Message`](caralerts_app::Message)s, the render tree for the landing,
//! form, and results screens, and the main run loop.

pub mod event;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

// Re-export main entry point
pub use runner::run;
