//! Message processing loop (TEA)
//!
//! Drives a message (and any follow-up messages it produces) through the
//! update function, dispatching side-effect actions to background tasks.

use std::sync::Arc;

use tokio::sync::mpsc;

use caralerts_api::{BackendClient, LogoClient};

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    backend: &Arc<BackendClient>,
    logos: &Arc<LogoClient>,
) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(
                action,
                msg_tx.clone(),
                Arc::clone(backend),
                Arc::clone(logos),
            );
        }

        // Continue with follow-up message
        msg = result.message;
    }
}
