//! Tests for handler module

use super::*;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, CatalogState, FormField, NoticeLevel, Screen, SubmitPhase};
use caralerts_api::{CreateAlertResponse, ExecutionReport, SourceReport};
use caralerts_core::{fallback_entries, SearchResultSummary};

/// State with the brand catalog ready (fallback entries, alphabetical).
fn ready_state() -> AppState {
    let mut state = AppState::with_catalog_entries(fallback_entries());
    state.screen = Screen::Form;
    state
}

/// Drive one message plus any follow-up messages through update,
/// collecting every action produced (mirrors the process loop).
fn drive(state: &mut AppState, message: Message) -> Vec<UpdateAction> {
    let mut actions = Vec::new();
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = update(state, m);
        if let Some(action) = result.action {
            actions.push(action);
        }
        msg = result.message;
    }
    actions
}

/// Select a brand by display name through the picker.
fn select_brand(state: &mut AppState, name: &str) {
    state.form.focus = FormField::Brands;
    state.form.brand_cursor = state
        .catalog
        .entries()
        .iter()
        .position(|e| e.name == name)
        .unwrap_or_else(|| panic!("brand {name} not in catalog"));
    drive(state, Message::ToggleSelected);
}

/// Select a model by name through the picker.
fn select_model(state: &mut AppState, name: &str) {
    state.form.focus = FormField::Models;
    state.form.model_cursor = state
        .form
        .available_models()
        .iter()
        .position(|e| e.model == name)
        .unwrap_or_else(|| panic!("model {name} not available"));
    drive(state, Message::ToggleSelected);
}

/// A state with every required field filled in.
fn filled_state() -> AppState {
    let mut state = ready_state();
    state.form.criteria.search_name = "BMW Serie 3 2020+".to_string();
    select_brand(&mut state, "BMW");
    state.form.criteria.telegram_chat_id = "123456789".to_string();
    state
}

fn successful_response(ejecucion: Option<ExecutionReport>) -> CreateAlertResponse {
    CreateAlertResponse {
        success: true,
        message: None,
        ejecucion,
    }
}

fn has_notice(state: &AppState, level: NoticeLevel) -> bool {
    state.notices.iter().any(|n| n.level == level)
}

// ─────────────────────────────────────────────────────────
// Basics
// ─────────────────────────────────────────────────────────

#[test]
fn test_quit_message_sets_flag() {
    let mut state = AppState::new();
    assert!(!state.should_quit());
    update(&mut state, Message::Quit);
    assert!(state.should_quit());
}

#[test]
fn test_key_message_routes_through_handle_key() {
    let mut state = AppState::new();
    let actions = drive(&mut state, Message::Key(InputKey::Enter));
    assert!(actions.is_empty());
    assert_eq!(state.screen, Screen::Form);
}

#[test]
fn test_show_landing_blocked_while_in_flight() {
    let mut state = filled_state();
    state.form.phase = SubmitPhase::Submitting;
    update(&mut state, Message::ShowLanding);
    assert_eq!(state.screen, Screen::Form);

    state.form.phase = SubmitPhase::Idle;
    update(&mut state, Message::ShowLanding);
    assert_eq!(state.screen, Screen::Landing);
}

// ─────────────────────────────────────────────────────────
// Selection
// ─────────────────────────────────────────────────────────

#[test]
fn test_brand_toggle_selects_and_deselects() {
    let mut state = ready_state();
    select_brand(&mut state, "Toyota");
    assert_eq!(state.form.criteria.brands, vec!["Toyota"]);

    select_brand(&mut state, "Toyota");
    assert!(state.form.criteria.brands.is_empty());
}

#[test]
fn test_brand_selection_preserves_order() {
    let mut state = ready_state();
    select_brand(&mut state, "Volvo");
    select_brand(&mut state, "Audi");
    select_brand(&mut state, "Mazda");
    assert_eq!(state.form.criteria.brands, vec!["Volvo", "Audi", "Mazda"]);
}

#[test]
fn test_deselecting_brand_prunes_exactly_its_models() {
    let mut state = ready_state();
    select_brand(&mut state, "Toyota");
    select_brand(&mut state, "Mazda");
    select_model(&mut state, "Corolla");
    select_model(&mut state, "CX-5");
    select_model(&mut state, "RAV4");
    assert_eq!(
        state.form.criteria.models,
        vec!["Corolla", "CX-5", "RAV4"]
    );

    select_brand(&mut state, "Mazda"); // deselect

    assert_eq!(state.form.criteria.models, vec!["Corolla", "RAV4"]);
}

#[test]
fn test_toggle_noop_while_catalog_loading() {
    let mut state = AppState::new();
    state.screen = Screen::Form;
    state.form.focus = FormField::Brands;
    assert_eq!(state.catalog, CatalogState::Loading);

    drive(&mut state, Message::ToggleSelected);

    assert!(state.form.criteria.brands.is_empty());
}

#[test]
fn test_model_toggle_disabled_without_brands() {
    let mut state = ready_state();
    state.form.focus = FormField::Models;
    drive(&mut state, Message::ToggleSelected);
    assert!(state.form.criteria.models.is_empty());
}

// ─────────────────────────────────────────────────────────
// Field Editing
// ─────────────────────────────────────────────────────────

#[test]
fn test_typing_digits_into_year_field() {
    let mut state = ready_state();
    state.form.focus = FormField::YearMin;
    for _ in 0..4 {
        drive(&mut state, Message::InputBackspace);
    }
    assert_eq!(state.form.criteria.year_min, 0);

    for c in "2018".chars() {
        drive(&mut state, Message::InputChar(c));
    }
    assert_eq!(state.form.criteria.year_min, 2018);
}

#[test]
fn test_leaving_year_field_clamps_partial_input() {
    let mut state = ready_state();
    state.form.focus = FormField::YearMin;
    for _ in 0..4 {
        drive(&mut state, Message::InputBackspace);
    }
    drive(&mut state, Message::InputChar('2'));
    assert_eq!(state.form.criteria.year_min, 2);

    drive(&mut state, Message::FocusNext);
    assert_eq!(state.form.criteria.year_min, caralerts_core::YEAR_FLOOR);
}

#[test]
fn test_year_min_above_max_flags_error_without_blocking_edit() {
    let mut state = ready_state();
    state.form.criteria.year_min = 2023;
    state.form.criteria.year_max = 2020;
    state.form.focus = FormField::SearchName;
    drive(&mut state, Message::InputChar('x'));

    assert!(state.form.errors.year_min.is_some());
    // The values themselves are untouched; only the error surfaces.
    assert_eq!(state.form.criteria.year_min, 2023);
}

#[test]
fn test_non_digit_chars_ignored_in_numeric_fields() {
    let mut state = ready_state();
    state.form.focus = FormField::PriceMax;
    let before = state.form.criteria.price_max;
    drive(&mut state, Message::InputChar('x'));
    assert_eq!(state.form.criteria.price_max, before);
}

// ─────────────────────────────────────────────────────────
// Submit Sequence
// ─────────────────────────────────────────────────────────

#[test]
fn test_submit_with_invalid_chat_id_blocks_network() {
    let mut state = filled_state();
    state.form.criteria.telegram_chat_id = "abc123".to_string();

    let actions = drive(&mut state, Message::Submit);

    assert!(actions.is_empty());
    assert_eq!(state.form.phase, SubmitPhase::Idle);
    assert!(state.form.errors.telegram_chat_id.is_some());
    assert!(has_notice(&state, NoticeLevel::Warning));
}

#[test]
fn test_submit_valid_form_posts_payload() {
    let mut state = filled_state();

    let actions = drive(&mut state, Message::Submit);

    assert_eq!(state.form.phase, SubmitPhase::Submitting);
    match actions.as_slice() {
        [UpdateAction::SubmitAlert { payload }] => {
            assert_eq!(payload.nombre_busqueda, "BMW Serie 3 2020+");
            assert_eq!(payload.marcas, vec!["BMW"]);
            assert_eq!(payload.telegram_chat_id, "123456789");
            assert!(payload.ejecutar_inmediatamente);
        }
        other => panic!("expected a single SubmitAlert action, got {other:?}"),
    }
}

#[test]
fn test_second_submit_ignored_while_in_flight() {
    let mut state = filled_state();
    drive(&mut state, Message::Submit);
    assert_eq!(state.form.phase, SubmitPhase::Submitting);

    let actions = drive(&mut state, Message::Submit);
    assert!(actions.is_empty());
}

#[test]
fn test_business_rejection_preserves_form() {
    let mut state = filled_state();
    drive(&mut state, Message::Submit);

    let response = CreateAlertResponse {
        success: false,
        message: Some("Ya existe una alerta con ese nombre".to_string()),
        ejecucion: None,
    };
    drive(&mut state, Message::AlertCreated(response));

    assert_eq!(state.form.phase, SubmitPhase::Idle);
    assert_eq!(state.form.criteria.search_name, "BMW Serie 3 2020+");
    assert!(state
        .notices
        .iter()
        .any(|n| n.text.contains("Ya existe una alerta")));
}

#[test]
fn test_transport_failure_preserves_form_and_reenables_submit() {
    let mut state = filled_state();
    let before = state.form.criteria.clone();
    drive(&mut state, Message::Submit);

    drive(
        &mut state,
        Message::SubmitFailed {
            error: "connection refused".to_string(),
        },
    );

    assert_eq!(state.form.criteria, before);
    assert_eq!(state.form.phase, SubmitPhase::Idle);
    assert!(state.form.can_submit());
    assert!(has_notice(&state, NoticeLevel::Error));
}

#[test]
fn test_embedded_execution_results_display_and_reset() {
    let mut state = filled_state();
    select_model(&mut state, "Serie 3");
    drive(&mut state, Message::Submit);

    let response = successful_response(Some(ExecutionReport {
        realizada: true,
        kavak: Some(SourceReport {
            count: 3,
            url: Some("https://k".to_string()),
        }),
        mercado_libre: Some(SourceReport {
            count: 0,
            url: Some("https://m".to_string()),
        }),
        telegram_sent: true,
        error: None,
    }));
    let actions = drive(&mut state, Message::AlertCreated(response));

    assert!(actions.is_empty());
    assert_eq!(state.screen, Screen::Results);
    assert_eq!(state.form.phase, SubmitPhase::Idle);

    let summary = state.summary.as_ref().expect("summary present");
    assert_eq!(summary.kavak_count, 3);
    assert_eq!(summary.marketplace_count, 0);
    assert!(summary.notification_sent);
    assert!(!summary.no_results_to_process);
    assert_eq!(summary.models_used, vec!["Serie 3"]);

    // Form reset to defaults.
    assert_eq!(state.form.criteria, caralerts_core::AlertCriteria::default());
}

#[test]
fn test_success_without_execution_falls_back_to_run() {
    let mut state = filled_state();
    select_model(&mut state, "Serie 3");
    drive(&mut state, Message::Submit);

    let actions = drive(&mut state, Message::AlertCreated(successful_response(None)));

    assert_eq!(state.form.phase, SubmitPhase::Searching);
    assert!(state.form.reset_on_results);
    match actions.as_slice() {
        [UpdateAction::RunSearch { models_used }] => {
            assert_eq!(models_used, &vec!["Serie 3".to_string()]);
        }
        other => panic!("expected a RunSearch action, got {other:?}"),
    }
}

#[test]
fn test_fallback_search_result_resets_and_displays() {
    let mut state = filled_state();
    drive(&mut state, Message::Submit);
    drive(&mut state, Message::AlertCreated(successful_response(None)));

    let summary = SearchResultSummary {
        kavak_count: 2,
        ..Default::default()
    };
    drive(&mut state, Message::SearchCompleted(summary));

    assert_eq!(state.screen, Screen::Results);
    assert_eq!(state.form.phase, SubmitPhase::Idle);
    assert!(!state.form.reset_on_results);
    assert_eq!(state.form.criteria, caralerts_core::AlertCriteria::default());
    assert!(has_notice(&state, NoticeLevel::Success));
}

#[test]
fn test_no_results_to_process_is_informational() {
    let mut state = filled_state();
    drive(&mut state, Message::Submit);
    drive(&mut state, Message::AlertCreated(successful_response(None)));

    let summary = SearchResultSummary {
        no_results_to_process: true,
        ..Default::default()
    };
    drive(&mut state, Message::SearchCompleted(summary));

    assert!(state
        .notices
        .iter()
        .any(|n| n.level == NoticeLevel::Info && n.text.contains("No hay alertas")));
}

#[test]
fn test_fallback_search_failure_is_partial_success() {
    let mut state = filled_state();
    drive(&mut state, Message::Submit);
    drive(&mut state, Message::AlertCreated(successful_response(None)));

    drive(
        &mut state,
        Message::SearchFailed {
            error: "timeout".to_string(),
        },
    );

    // Alert creation still counts: form reset, warning, back to idle.
    assert_eq!(state.form.phase, SubmitPhase::Idle);
    assert_eq!(state.form.criteria, caralerts_core::AlertCriteria::default());
    assert!(has_notice(&state, NoticeLevel::Warning));
}

#[test]
fn test_run_again_from_results() {
    let mut state = filled_state();
    drive(&mut state, Message::Submit);
    drive(&mut state, Message::AlertCreated(successful_response(None)));
    let summary = SearchResultSummary {
        models_used: vec!["Serie 3".to_string()],
        ..Default::default()
    };
    drive(&mut state, Message::SearchCompleted(summary));
    assert_eq!(state.screen, Screen::Results);

    let actions = drive(&mut state, Message::RunAgain);

    assert_eq!(state.form.phase, SubmitPhase::Searching);
    match actions.as_slice() {
        [UpdateAction::RunSearch { models_used }] => {
            assert_eq!(models_used, &vec!["Serie 3".to_string()]);
        }
        other => panic!("expected a RunSearch action, got {other:?}"),
    }

    // A second trigger while searching is ignored.
    let actions = drive(&mut state, Message::RunAgain);
    assert!(actions.is_empty());

    // Its completion displays without resetting anything further.
    drive(&mut state, Message::SearchCompleted(SearchResultSummary::default()));
    assert_eq!(state.form.phase, SubmitPhase::Idle);
    assert_eq!(state.screen, Screen::Results);
}

#[test]
fn test_stray_results_are_ignored_when_idle() {
    let mut state = filled_state();
    let before = state.form.criteria.clone();

    drive(&mut state, Message::SearchCompleted(SearchResultSummary::default()));
    drive(
        &mut state,
        Message::SearchFailed {
            error: "late".to_string(),
        },
    );

    assert_eq!(state.form.criteria, before);
    assert!(state.summary.is_none());
}

// ─────────────────────────────────────────────────────────
// Brand Catalog
// ─────────────────────────────────────────────────────────

#[test]
fn test_catalog_failure_substitutes_sorted_fallback() {
    let mut state = AppState::new();

    drive(
        &mut state,
        Message::BrandCatalogFailed {
            error: "dns failure".to_string(),
        },
    );

    // error → ready with the fallback set, plus a warning notice.
    let entries = state.catalog.entries();
    assert_eq!(entries.len(), caralerts_core::BRAND_ALIASES.len());
    assert!(entries.windows(2).all(|w| w[0].name <= w[1].name));
    assert!(has_notice(&state, NoticeLevel::Warning));
}

#[test]
fn test_catalog_loaded_clamps_cursor() {
    let mut state = AppState::new();
    state.form.brand_cursor = 1000;

    drive(
        &mut state,
        Message::BrandCatalogLoaded {
            entries: fallback_entries(),
            from_fallback: false,
        },
    );

    assert!(state.form.brand_cursor < state.catalog.entries().len());
    assert!(!has_notice(&state, NoticeLevel::Warning));
}
