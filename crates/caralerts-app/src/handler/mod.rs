//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers per screen
//! - `form`: Field editing, selection, and validation handlers
//! - `submit`: Submit → search → results sequence handlers

pub(crate) mod form;
pub(crate) mod keys;
pub(crate) mod submit;
pub(crate) mod update;

#[cfg(test)]
mod tests;

use crate::message::Message;
use caralerts_api::AlertPayload;

// Re-export main entry point
pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone)]
pub enum UpdateAction {
    /// POST the alert to the backend
    SubmitAlert { payload: Box<AlertPayload> },

    /// Invoke the run endpoint. `models_used` is attached to the
    /// interpreted summary since the server does not echo it back.
    RunSearch { models_used: Vec<String> },

    /// Fetch and resolve the brand logo dataset
    FetchBrandCatalog,
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
