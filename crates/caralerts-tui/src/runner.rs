//! Main TUI run loop
//!
//! Owns the terminal, the message channel, and the shared HTTP clients.
//! Background tasks report back over the channel; the loop drains those
//! results before polling for the next key press.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;

use caralerts_api::{BackendClient, LogoClient};
use caralerts_app::actions::handle_action;
use caralerts_app::config::Settings;
use caralerts_app::{process_message, AppState, Message, UpdateAction};
use caralerts_core::prelude::*;

use crate::{event, render, terminal};

const MESSAGE_BUFFER: usize = 100;

/// Run the TUI until the user quits.
pub async fn run(settings: Settings) -> Result<()> {
    terminal::install_panic_hook();
    let mut term = ratatui::init();
    let result = run_loop(&mut term, settings).await;
    ratatui::restore();
    result
}

async fn run_loop(terminal: &mut ratatui::DefaultTerminal, settings: Settings) -> Result<()> {
    // One connection pool shared by both remote collaborators.
    let http = reqwest::Client::new();
    let backend = Arc::new(BackendClient::with_client(
        http.clone(),
        settings.backend.base_url.clone(),
    ));
    let logos = Arc::new(LogoClient::new(http, settings.logos.dataset_url.clone()));

    let (msg_tx, mut msg_rx) = mpsc::channel::<Message>(MESSAGE_BUFFER);
    let mut state = AppState::new();

    // The catalog fetch is independent of the submit flow; start it
    // before the first frame so the brand picker fills in early.
    handle_action(
        UpdateAction::FetchBrandCatalog,
        msg_tx.clone(),
        Arc::clone(&backend),
        Arc::clone(&logos),
    );

    let tick = Duration::from_millis(settings.ui.tick_ms.max(10));

    while !state.should_quit() {
        terminal.draw(|frame| render::view(frame, &state))?;

        // Results from background tasks first...
        while let Ok(message) = msg_rx.try_recv() {
            process_message(&mut state, message, &msg_tx, &backend, &logos);
        }
        if state.should_quit() {
            break;
        }

        // ...then terminal input (or a tick on timeout).
        if let Some(message) = event::poll(tick)? {
            process_message(&mut state, message, &msg_tx, &backend, &logos);
        }
    }

    info!("quit requested; leaving the TUI loop");
    Ok(())
}
