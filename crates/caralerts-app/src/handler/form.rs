//! Field editing, selection, and validation handlers
//!
//! Every mutation goes through a named handler that revalidates the
//! criteria before returning, so the error display is never stale.

use tracing::{debug, warn};

use caralerts_core::{fallback_entries, valid_model_set, validate, BrandLogoEntry};

use crate::message::Message;
use crate::state::{AppState, CatalogState, FormField, NoticeLevel};

use super::UpdateResult;

/// Partially typed years may have up to four digits.
const YEAR_INPUT_MAX: u16 = 9999;
/// Price/mileage input ceiling (display formatting caps out beyond this).
const AMOUNT_INPUT_MAX: u32 = 99_999_999;

fn revalidate(state: &mut AppState) {
    state.form.errors = validate(&state.form.criteria);
}

/// Clamp years when a year field loses focus, so out-of-range values
/// never linger past the edit.
fn leave_field(state: &mut AppState) {
    if matches!(state.form.focus, FormField::YearMin | FormField::YearMax) {
        state.form.criteria.normalize_years();
        revalidate(state);
    }
}

pub(crate) fn handle_focus_next(state: &mut AppState) -> UpdateResult {
    leave_field(state);
    state.form.focus = state.form.focus.next();
    UpdateResult::none()
}

pub(crate) fn handle_focus_prev(state: &mut AppState) -> UpdateResult {
    leave_field(state);
    state.form.focus = state.form.focus.prev();
    UpdateResult::none()
}

pub(crate) fn handle_input_char(state: &mut AppState, c: char) -> UpdateResult {
    match state.form.focus {
        FormField::SearchName => {
            if !c.is_control() {
                state.form.criteria.search_name.push(c);
            }
        }
        FormField::TelegramChatId => {
            // Non-digits are accepted here and flagged by validation,
            // so the user sees why the field is wrong.
            if !c.is_control() && !c.is_whitespace() {
                state.form.criteria.telegram_chat_id.push(c);
            }
        }
        FormField::YearMin => {
            if let Some(d) = c.to_digit(10) {
                state.form.criteria.year_min =
                    push_digit_u16(state.form.criteria.year_min, d as u16);
            }
        }
        FormField::YearMax => {
            if let Some(d) = c.to_digit(10) {
                state.form.criteria.year_max =
                    push_digit_u16(state.form.criteria.year_max, d as u16);
            }
        }
        FormField::PriceMax => {
            if let Some(d) = c.to_digit(10) {
                state.form.criteria.price_max = push_digit_u32(state.form.criteria.price_max, d);
            }
        }
        FormField::MileageMax => {
            if let Some(d) = c.to_digit(10) {
                state.form.criteria.mileage_max =
                    push_digit_u32(state.form.criteria.mileage_max, d);
            }
        }
        FormField::Brands | FormField::Models | FormField::Frequency | FormField::Submit => {}
    }
    revalidate(state);
    UpdateResult::none()
}

pub(crate) fn handle_input_backspace(state: &mut AppState) -> UpdateResult {
    match state.form.focus {
        FormField::SearchName => {
            state.form.criteria.search_name.pop();
        }
        FormField::TelegramChatId => {
            state.form.criteria.telegram_chat_id.pop();
        }
        FormField::YearMin => state.form.criteria.year_min /= 10,
        FormField::YearMax => state.form.criteria.year_max /= 10,
        FormField::PriceMax => state.form.criteria.price_max /= 10,
        FormField::MileageMax => state.form.criteria.mileage_max /= 10,
        FormField::Brands | FormField::Models | FormField::Frequency | FormField::Submit => {}
    }
    revalidate(state);
    UpdateResult::none()
}

pub(crate) fn handle_list_up(state: &mut AppState) -> UpdateResult {
    match state.form.focus {
        FormField::Brands => {
            state.form.brand_cursor = state.form.brand_cursor.saturating_sub(1);
        }
        FormField::Models => {
            state.form.model_cursor = state.form.model_cursor.saturating_sub(1);
        }
        _ => {}
    }
    UpdateResult::none()
}

pub(crate) fn handle_list_down(state: &mut AppState) -> UpdateResult {
    match state.form.focus {
        FormField::Brands => {
            let len = state.catalog.entries().len();
            if state.form.brand_cursor + 1 < len {
                state.form.brand_cursor += 1;
            }
        }
        FormField::Models => {
            let len = state.form.available_models().len();
            if state.form.model_cursor + 1 < len {
                state.form.model_cursor += 1;
            }
        }
        _ => {}
    }
    UpdateResult::none()
}

/// Toggle the picker entry under the cursor. A brand toggle prunes the
/// model selection in the same update, so `models` never references a
/// deselected brand.
pub(crate) fn handle_toggle_selected(state: &mut AppState) -> UpdateResult {
    match state.form.focus {
        FormField::Brands => {
            let Some(entry) = state.catalog.entries().get(state.form.brand_cursor) else {
                return UpdateResult::none();
            };
            let name = entry.name.clone();
            if state.form.criteria.toggle_brand(&name) {
                let valid = valid_model_set(&state.form.criteria.brands);
                let removed = state.form.criteria.prune_models(&valid);
                if removed > 0 {
                    debug!("pruned {removed} model(s) after brand change");
                }
                clamp_model_cursor(state);
            }
        }
        FormField::Models => {
            if state.form.models_disabled() {
                return UpdateResult::none();
            }
            let available = state.form.available_models();
            let Some(entry) = available.get(state.form.model_cursor) else {
                return UpdateResult::none();
            };
            let model = entry.model.clone();
            state.form.criteria.toggle_model(&model);
        }
        _ => {}
    }
    revalidate(state);
    UpdateResult::none()
}

pub(crate) fn handle_next_frequency(state: &mut AppState) -> UpdateResult {
    if state.form.focus == FormField::Frequency {
        state.form.criteria.frequency = state.form.criteria.frequency.next();
    }
    UpdateResult::none()
}

pub(crate) fn handle_previous_frequency(state: &mut AppState) -> UpdateResult {
    if state.form.focus == FormField::Frequency {
        state.form.criteria.frequency = state.form.criteria.frequency.prev();
    }
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────
// Brand Catalog
// ─────────────────────────────────────────────────────────

pub(crate) fn handle_catalog_loaded(
    state: &mut AppState,
    entries: Vec<BrandLogoEntry>,
    from_fallback: bool,
) -> UpdateResult {
    if from_fallback {
        state.push_notice(
            NoticeLevel::Warning,
            "No se pudieron cargar los logos de marcas",
        );
    }
    state.catalog = CatalogState::Ready {
        entries,
        from_fallback,
    };
    clamp_brand_cursor(state);
    UpdateResult::none()
}

/// The fetch failed: record the error state, then substitute the
/// fallback entry set via a follow-up message (the `error → ready`
/// transition). Logo absence never blocks brand selection.
pub(crate) fn handle_catalog_failed(state: &mut AppState, error: String) -> UpdateResult {
    warn!("brand logo fetch failed: {error}");
    state.catalog = CatalogState::Error { message: error };
    UpdateResult::message(Message::BrandCatalogLoaded {
        entries: fallback_entries(),
        from_fallback: true,
    })
}

fn clamp_brand_cursor(state: &mut AppState) {
    let len = state.catalog.entries().len();
    state.form.brand_cursor = state.form.brand_cursor.min(len.saturating_sub(1));
}

fn clamp_model_cursor(state: &mut AppState) {
    let len = state.form.available_models().len();
    state.form.model_cursor = state.form.model_cursor.min(len.saturating_sub(1));
}

fn push_digit_u16(value: u16, digit: u16) -> u16 {
    let next = value as u32 * 10 + digit as u32;
    if next <= YEAR_INPUT_MAX as u32 {
        next as u16
    } else {
        value
    }
}

fn push_digit_u32(value: u32, digit: u32) -> u32 {
    let next = value as u64 * 10 + digit as u64;
    if next <= AMOUNT_INPUT_MAX as u64 {
        next as u32
    } else {
        value
    }
}
