//! End-to-end reducer flow: fill the form, submit, interpret results
//!
//! Drives the whole sequence through update() the way the event loop
//! does, with backend responses injected as messages instead of network
//! calls.

use caralerts_app::{
    update, AppState, FormField, InputKey, Message, Screen, SubmitPhase, UpdateAction,
};
use caralerts_core::fallback_entries;

/// Process a message and its follow-ups, collecting produced actions.
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

fn type_text(state: &mut AppState, text: &str) {
    for c in text.chars() {
        drive(state, Message::Key(InputKey::Char(c)));
    }
}

#[test]
fn test_full_submit_flow_through_fallback_search() {
    let mut state = AppState::new();

    // Logo dataset is down: the fallback substitutes, selection works
    // regardless.
    drive(
        &mut state,
        Message::BrandCatalogFailed {
            error: "network unreachable".to_string(),
        },
    );
    assert_eq!(
        state.catalog.entries().len(),
        caralerts_core::BRAND_ALIASES.len()
    );

    // Landing → form.
    drive(&mut state, Message::Key(InputKey::Enter));
    assert_eq!(state.screen, Screen::Form);

    // Name the search.
    type_text(&mut state, "SUV Toyota 2018+");

    // Pick Toyota in the brand list.
    drive(&mut state, Message::Key(InputKey::Tab));
    assert_eq!(state.form.focus, FormField::Brands);
    let toyota = state
        .catalog
        .entries()
        .iter()
        .position(|e| e.name == "Toyota")
        .unwrap();
    for _ in 0..toyota {
        drive(&mut state, Message::Key(InputKey::Down));
    }
    drive(&mut state, Message::Key(InputKey::Space));
    assert_eq!(state.form.criteria.brands, vec!["Toyota"]);

    // Pick the second model (RAV4).
    drive(&mut state, Message::Key(InputKey::Tab));
    assert_eq!(state.form.focus, FormField::Models);
    drive(&mut state, Message::Key(InputKey::Down));
    drive(&mut state, Message::Key(InputKey::Space));
    assert_eq!(state.form.criteria.models, vec!["RAV4"]);

    // Chat ID.
    state.form.focus = FormField::TelegramChatId;
    type_text(&mut state, "987654321");

    // Submit from anywhere with Ctrl+S.
    let actions = drive(&mut state, Message::Key(InputKey::CharCtrl('s')));
    assert_eq!(state.form.phase, SubmitPhase::Submitting);
    let payload = match actions.as_slice() {
        [UpdateAction::SubmitAlert { payload }] => payload.clone(),
        other => panic!("expected SubmitAlert, got {other:?}"),
    };
    assert_eq!(payload.nombre_busqueda, "SUV Toyota 2018+");
    assert_eq!(payload.marcas, vec!["Toyota"]);
    assert_eq!(payload.modelos, vec!["RAV4"]);
    assert!(payload.ejecutar_inmediatamente);

    // Backend created the alert but embedded no results → fallback run.
    let response: caralerts_api::CreateAlertResponse =
        serde_json::from_str(r#"{"success": true, "message": "Alerta creada"}"#).unwrap();
    let actions = drive(&mut state, Message::AlertCreated(response));
    assert_eq!(state.form.phase, SubmitPhase::Searching);
    assert!(matches!(
        actions.as_slice(),
        [UpdateAction::RunSearch { .. }]
    ));

    // The run endpoint answers with the structured shape.
    let value: serde_json::Value =
        serde_json::from_str(include_str!("fixtures/run_responses/structured.json")).unwrap();
    let summary = caralerts_api::parse_run_response(&value, &payload.modelos);
    drive(&mut state, Message::SearchCompleted(summary));

    // Results displayed, form reset for the next alert.
    assert_eq!(state.screen, Screen::Results);
    assert_eq!(state.form.phase, SubmitPhase::Idle);
    let shown = state.summary.as_ref().unwrap();
    assert_eq!(shown.kavak_count, 3);
    assert_eq!(shown.models_used, vec!["RAV4"]);
    assert_eq!(
        state.form.criteria,
        caralerts_core::AlertCriteria::default()
    );

    // Manual re-run keeps the (already default) criteria untouched.
    let actions = drive(&mut state, Message::Key(InputKey::Char('r')));
    assert_eq!(state.form.phase, SubmitPhase::Searching);
    assert!(matches!(
        actions.as_slice(),
        [UpdateAction::RunSearch { .. }]
    ));
}

#[test]
fn test_rejected_submit_keeps_editing_session() {
    let mut state = AppState::with_catalog_entries(fallback_entries());
    state.screen = Screen::Form;
    state.form.criteria.search_name = "Compactos".to_string();
    state.form.criteria.add_brand("Mazda");
    state.form.criteria.telegram_chat_id = "123".to_string();

    drive(&mut state, Message::Submit);
    let response: caralerts_api::CreateAlertResponse =
        serde_json::from_str(r#"{"success": false, "message": "límite de alertas alcanzado"}"#)
            .unwrap();
    drive(&mut state, Message::AlertCreated(response));

    // Everything still there for a corrected resubmit.
    assert_eq!(state.screen, Screen::Form);
    assert_eq!(state.form.criteria.search_name, "Compactos");
    assert_eq!(state.form.criteria.brands, vec!["Mazda"]);
    assert!(state.form.can_submit());
}
