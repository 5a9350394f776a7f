//! Action handlers: UpdateAction dispatch and background task spawning
//!
//! Each action spawns a tokio task that performs the network call and
//! reports back with a message. A closed channel (app shutting down)
//! just drops the result.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, warn};

use caralerts_api::{parse_run_response, BackendClient, LogoClient};

use crate::handler::UpdateAction;
use crate::message::Message;

/// Execute an action by spawning a background task
pub fn handle_action(
    action: UpdateAction,
    msg_tx: mpsc::Sender<Message>,
    backend: Arc<BackendClient>,
    logos: Arc<LogoClient>,
) {
    match action {
        UpdateAction::SubmitAlert { payload } => {
            tokio::spawn(async move {
                let message = match backend.create_alert(&payload).await {
                    Ok(response) => Message::AlertCreated(response),
                    Err(e) => {
                        warn!("alert creation request failed: {e}");
                        Message::SubmitFailed {
                            error: e.to_string(),
                        }
                    }
                };
                send(&msg_tx, message).await;
            });
        }

        UpdateAction::RunSearch { models_used } => {
            tokio::spawn(async move {
                let message = match backend.run_search().await {
                    Ok(value) => {
                        Message::SearchCompleted(parse_run_response(&value, &models_used))
                    }
                    Err(e) => {
                        warn!("search run request failed: {e}");
                        Message::SearchFailed {
                            error: e.to_string(),
                        }
                    }
                };
                send(&msg_tx, message).await;
            });
        }

        UpdateAction::FetchBrandCatalog => {
            tokio::spawn(async move {
                let message = match logos.fetch_brand_logos().await {
                    Ok(entries) => Message::BrandCatalogLoaded {
                        entries,
                        from_fallback: false,
                    },
                    Err(e) => Message::BrandCatalogFailed {
                        error: e.to_string(),
                    },
                };
                send(&msg_tx, message).await;
            });
        }
    }
}

async fn send(msg_tx: &mpsc::Sender<Message>, message: Message) {
    if msg_tx.send(message).await.is_err() {
        debug!("message channel closed; dropping task result");
    }
}
