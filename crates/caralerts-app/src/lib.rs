//! # caralerts-app - Application State and Orchestration
//!
//! The TEA core of CarAlerts: [`AppState`] (Model), [`Message`] (Msg),
//! [`update`] (the pure reducer), and [`UpdateAction`] (side effects the
//! event loop performs via [`actions::handle_action`]).
//!
//! The reducer owns the alert criteria and its validation; network work
//! never happens here — handlers return actions, background tasks report
//! back as messages.

pub mod actions;
pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod state;

// Re-export handler types for event loop integration
pub use handler::{update, UpdateAction, UpdateResult};

// Re-export core state types
pub use input_key::InputKey;
pub use message::Message;
pub use process::process_message;
pub use state::{
    AppState, CatalogState, FormField, FormState, Notice, NoticeLevel, Screen, SubmitPhase,
};
