//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::{AppState, Screen};

use super::{form, keys, submit, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.should_quit = true;
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = keys::handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            state.tick();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Navigation
        // ─────────────────────────────────────────────────────────
        Message::ShowForm => {
            state.screen = Screen::Form;
            UpdateResult::none()
        }

        Message::ShowLanding => {
            // Leaving mid-flight would orphan the in-flight request's
            // result; keep the form on screen until it settles.
            if !state.form.is_busy() {
                state.screen = Screen::Landing;
            }
            UpdateResult::none()
        }

        Message::NewAlert => {
            // Criteria were already reset when the results arrived.
            state.screen = Screen::Form;
            state.summary = None;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Form Editing
        // ─────────────────────────────────────────────────────────
        Message::FocusNext => form::handle_focus_next(state),
        Message::FocusPrev => form::handle_focus_prev(state),
        Message::InputChar(c) => form::handle_input_char(state, c),
        Message::InputBackspace => form::handle_input_backspace(state),
        Message::ListUp => form::handle_list_up(state),
        Message::ListDown => form::handle_list_down(state),
        Message::ToggleSelected => form::handle_toggle_selected(state),
        Message::NextFrequency => form::handle_next_frequency(state),
        Message::PreviousFrequency => form::handle_previous_frequency(state),

        // ─────────────────────────────────────────────────────────
        // Submit Flow
        // ─────────────────────────────────────────────────────────
        Message::Submit => submit::handle_submit(state),
        Message::AlertCreated(response) => submit::handle_alert_created(state, response),
        Message::SubmitFailed { error } => submit::handle_submit_failed(state, error),
        Message::SearchCompleted(summary) => submit::handle_search_completed(state, summary),
        Message::SearchFailed { error } => submit::handle_search_failed(state, error),
        Message::RunAgain => submit::handle_run_again(state),

        // ─────────────────────────────────────────────────────────
        // Brand Catalog
        // ─────────────────────────────────────────────────────────
        Message::BrandCatalogLoaded {
            entries,
            from_fallback,
        } => form::handle_catalog_loaded(state, entries, from_fallback),
        Message::BrandCatalogFailed { error } => form::handle_catalog_failed(state, error),
    }
}
