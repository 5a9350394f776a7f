//! Submit → search → results sequence handlers
//!
//! The interesting state machine: one alert submission and one search
//! run at most may be in flight, gated by `SubmitPhase`. Transport and
//! business failures keep the form intact; only a delivered result (or a
//! result-absence signal) resets it.

use tracing::{info, warn};

use caralerts_api::{interpret_execution, AlertPayload, CreateAlertResponse};
use caralerts_core::SearchResultSummary;

use crate::state::{AppState, NoticeLevel, Screen, SubmitPhase};

use super::{UpdateAction, UpdateResult};

pub(crate) fn handle_submit(state: &mut AppState) -> UpdateResult {
    if state.form.phase != SubmitPhase::Idle {
        return UpdateResult::none();
    }

    // Re-validate every field unconditionally, not just touched ones.
    state.form.criteria.normalize_years();
    state.form.errors = caralerts_core::validate(&state.form.criteria);
    if !state.form.errors.is_valid() {
        state.push_notice(
            NoticeLevel::Warning,
            "Revisa el formulario: hay campos con errores",
        );
        return UpdateResult::none();
    }

    state.form.phase = SubmitPhase::Submitting;
    let payload = AlertPayload::from(&state.form.criteria);
    info!("submitting alert '{}'", payload.nombre_busqueda);
    UpdateResult::action(UpdateAction::SubmitAlert {
        payload: Box::new(payload),
    })
}

pub(crate) fn handle_alert_created(
    state: &mut AppState,
    response: CreateAlertResponse,
) -> UpdateResult {
    if state.form.phase != SubmitPhase::Submitting {
        warn!("alert-created response arrived outside the submitting phase; ignoring");
        return UpdateResult::none();
    }

    if !response.success {
        state.form.phase = SubmitPhase::Idle;
        let message = response
            .message
            .unwrap_or_else(|| "Error al crear la alerta. Intenta nuevamente.".to_string());
        state.push_notice(NoticeLevel::Error, message);
        return UpdateResult::none();
    }

    state.push_notice(NoticeLevel::Success, "¡Alerta creada con éxito!");

    match response.ejecucion {
        // The backend ran the search as part of creation; its report is
        // the result.
        Some(report) if report.realizada => {
            if let Some(err) = &report.error {
                state.push_notice(
                    NoticeLevel::Warning,
                    format!("La búsqueda inmediata reportó un problema: {err}"),
                );
            }
            let models_used = state.form.criteria.models.clone();
            let summary = interpret_execution(&report, &models_used);
            finish_with_summary(state, summary)
        }

        // No embedded results: fall back to the run endpoint.
        other => {
            if let Some(report) = other {
                if let Some(err) = &report.error {
                    state.push_notice(
                        NoticeLevel::Warning,
                        format!("La búsqueda inmediata falló: {err}"),
                    );
                }
            }
            state.form.phase = SubmitPhase::Searching;
            state.form.reset_on_results = true;
            UpdateResult::action(UpdateAction::RunSearch {
                models_used: state.form.criteria.models.clone(),
            })
        }
    }
}

pub(crate) fn handle_submit_failed(state: &mut AppState, error: String) -> UpdateResult {
    if state.form.phase != SubmitPhase::Submitting {
        return UpdateResult::none();
    }
    warn!("alert submission failed: {error}");
    state.form.phase = SubmitPhase::Idle;
    state.push_notice(
        NoticeLevel::Error,
        "Error de conexión. Verifica tu conexión e intenta nuevamente.",
    );
    UpdateResult::none()
}

pub(crate) fn handle_search_completed(
    state: &mut AppState,
    summary: SearchResultSummary,
) -> UpdateResult {
    if state.form.phase != SubmitPhase::Searching {
        warn!("search result arrived outside the searching phase; ignoring");
        return UpdateResult::none();
    }
    finish_with_summary(state, summary)
}

pub(crate) fn handle_search_failed(state: &mut AppState, error: String) -> UpdateResult {
    if state.form.phase != SubmitPhase::Searching {
        return UpdateResult::none();
    }
    warn!("search run failed: {error}");
    state.form.phase = SubmitPhase::Idle;

    if state.form.reset_on_results {
        // The alert itself was created; only the immediate results are
        // missing. Partial success: reset the form, warn, stay put.
        reset_form(state);
        state.push_notice(
            NoticeLevel::Warning,
            "La alerta fue creada, pero no se pudieron obtener resultados ahora",
        );
    } else {
        state.push_notice(NoticeLevel::Error, "No se pudo ejecutar la búsqueda");
    }
    UpdateResult::none()
}

/// Manual re-run from the results screen: re-invokes the run endpoint
/// without re-validating or resubmitting the alert.
pub(crate) fn handle_run_again(state: &mut AppState) -> UpdateResult {
    if state.screen != Screen::Results || state.form.phase != SubmitPhase::Idle {
        return UpdateResult::none();
    }
    state.form.phase = SubmitPhase::Searching;
    let models_used = state
        .summary
        .as_ref()
        .map(|s| s.models_used.clone())
        .unwrap_or_default();
    UpdateResult::action(UpdateAction::RunSearch { models_used })
}

fn finish_with_summary(state: &mut AppState, summary: SearchResultSummary) -> UpdateResult {
    state.form.phase = SubmitPhase::Idle;

    if summary.no_results_to_process {
        state.push_notice(NoticeLevel::Info, "No hay alertas para procesar");
    } else if summary.has_results() {
        state.push_notice(
            NoticeLevel::Success,
            format!("{} vehículos encontrados", summary.total_count()),
        );
    } else {
        state.push_notice(
            NoticeLevel::Info,
            "Sin resultados por ahora; recibirás notificaciones en Telegram",
        );
    }

    if state.form.reset_on_results || state.screen != Screen::Results {
        reset_form(state);
    }
    state.summary = Some(summary);
    state.screen = Screen::Results;
    UpdateResult::none()
}

fn reset_form(state: &mut AppState) {
    state.form.criteria.reset();
    state.form.errors.clear();
    state.form.reset_on_results = false;
    state.form.brand_cursor = 0;
    state.form.model_cursor = 0;
}
