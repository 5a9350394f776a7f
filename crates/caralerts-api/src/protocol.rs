//! Wire types and response interpretation for the alert backend
//!
//! Field names on the wire are the backend's Spanish identifiers and must
//! not be renamed. The run endpoint has produced several response shapes
//! over time; [`parse_run_response`] normalizes all of them into a
//! [`SearchResultSummary`] and is total — missing optional sub-fields
//! default instead of failing.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use caralerts_core::{AlertCriteria, NotificationFrequency, SearchResultSummary, PLACEHOLDER_URL};

/// POST body for alert creation, mirroring [`AlertCriteria`]
/// field-for-field plus the immediate-execution flag.
#[derive(Debug, Clone, Serialize)]
pub struct AlertPayload {
    pub nombre_busqueda: String,
    pub marcas: Vec<String>,
    pub modelos: Vec<String>,
    pub anio_minimo: u16,
    pub anio_maximo: u16,
    pub precio_maximo: u32,
    pub kilometraje_maximo: u32,
    pub telegram_chat_id: String,
    pub frecuencia: NotificationFrequency,
    pub ejecutar_inmediatamente: bool,
}

impl From<&AlertCriteria> for AlertPayload {
    fn from(criteria: &AlertCriteria) -> Self {
        Self {
            nombre_busqueda: criteria.search_name.trim().to_string(),
            marcas: criteria.brands.clone(),
            modelos: criteria.models.clone(),
            anio_minimo: criteria.year_min,
            anio_maximo: criteria.year_max,
            precio_maximo: criteria.price_max,
            kilometraje_maximo: criteria.mileage_max,
            telegram_chat_id: criteria.telegram_chat_id.clone(),
            frecuencia: criteria.frequency,
            ejecutar_inmediatamente: true,
        }
    }
}

/// Response to `POST /api/alerts`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAlertResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    /// Present when the backend ran the search as part of creation.
    #[serde(default)]
    pub ejecucion: Option<ExecutionReport>,
}

/// Immediate-execution report embedded in a creation response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionReport {
    #[serde(default)]
    pub realizada: bool,
    #[serde(default)]
    pub kavak: Option<SourceReport>,
    #[serde(default)]
    pub mercado_libre: Option<SourceReport>,
    #[serde(default)]
    pub telegram_sent: bool,
    #[serde(default)]
    pub error: Option<String>,
}

/// Per-source result block.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceReport {
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub url: Option<String>,
}

/// Build a summary from an embedded execution report.
pub fn interpret_execution(report: &ExecutionReport, models_used: &[String]) -> SearchResultSummary {
    let mut summary = SearchResultSummary {
        notification_sent: report.telegram_sent,
        models_used: models_used.to_vec(),
        ..Default::default()
    };
    if let Some(kavak) = &report.kavak {
        summary.kavak_count = kavak.count;
        summary.kavak_url = kavak
            .url
            .clone()
            .unwrap_or_else(|| PLACEHOLDER_URL.to_string());
    }
    if let Some(meli) = &report.mercado_libre {
        summary.marketplace_count = meli.count;
        summary.marketplace_url = meli
            .url
            .clone()
            .unwrap_or_else(|| PLACEHOLDER_URL.to_string());
    }
    summary
}

// ─────────────────────────────────────────────────────────
// Run-Response Normalization
// ─────────────────────────────────────────────────────────

static RESULT_COUNT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\+?\s+results").expect("result count regex is valid"));

/// Normalize a `GET /run` response into a summary.
///
/// The known shapes are tried in order: human-readable count strings,
/// then the nothing-to-process message, then structured per-source
/// objects. An unrecognized body yields the empty summary rather than an
/// error.
pub fn parse_run_response(value: &Value, models_used: &[String]) -> SearchResultSummary {
    let mut summary = parse_text_counts(value)
        .or_else(|| parse_nothing_to_process(value))
        .or_else(|| parse_structured(value))
        .unwrap_or_else(|| {
            tracing::warn!("unrecognized run response shape: {value}");
            SearchResultSummary::default()
        });
    summary.models_used = models_used.to_vec();
    summary
}

/// Shape with per-source strings like `"12 results"` / `"50+ results"`.
fn parse_text_counts(value: &Value) -> Option<SearchResultSummary> {
    let kavak_text = string_field(value, &["kavak", "kavakResults"]);
    let marketplace_text = string_field(value, &["mercadoLibre", "mercadoLibreResults"]);
    if kavak_text.is_none() && marketplace_text.is_none() {
        return None;
    }

    Some(SearchResultSummary {
        kavak_count: kavak_text.map(extract_count).unwrap_or(0),
        kavak_url: url_field(value, "kavak", "kavakUrl"),
        marketplace_count: marketplace_text.map(extract_count).unwrap_or(0),
        marketplace_url: url_field(value, "mercadoLibre", "mercadoLibreUrl"),
        notification_sent: bool_field(value, "telegramSent"),
        no_results_to_process: false,
        models_used: Vec::new(),
    })
}

/// Shape with a success flag and a message but no per-source data at all.
fn parse_nothing_to_process(value: &Value) -> Option<SearchResultSummary> {
    let success = bool_field(value, "success");
    let has_source_data = value.get("kavak").is_some()
        || value.get("mercadoLibre").is_some()
        || value.get("urls").is_some();
    let message = value.get("message").and_then(Value::as_str)?;

    if success && !has_source_data {
        tracing::debug!("run response with no results to process: {message}");
        Some(SearchResultSummary {
            no_results_to_process: true,
            ..Default::default()
        })
    } else {
        None
    }
}

/// Shape with structured per-source objects carrying count/url directly.
fn parse_structured(value: &Value) -> Option<SearchResultSummary> {
    let kavak = value.get("kavak").filter(|v| v.is_object());
    let marketplace = value.get("mercadoLibre").filter(|v| v.is_object());
    if kavak.is_none() && marketplace.is_none() {
        return None;
    }

    let notification_sent = value
        .get("telegramSent")
        .and_then(Value::as_bool)
        .or_else(|| {
            kavak
                .and_then(|v| v.get("telegramSent"))
                .and_then(Value::as_bool)
        })
        .unwrap_or(false);

    Some(SearchResultSummary {
        kavak_count: source_count(kavak),
        kavak_url: source_url(kavak),
        marketplace_count: source_count(marketplace),
        marketplace_url: source_url(marketplace),
        notification_sent,
        no_results_to_process: false,
        models_used: Vec::new(),
    })
}

// ─────────────────────────────────────────────────────────
// Field Probing Helpers
// ─────────────────────────────────────────────────────────

fn string_field<'a>(value: &'a Value, names: &[&str]) -> Option<&'a str> {
    names
        .iter()
        .find_map(|name| value.get(name).and_then(Value::as_str))
}

fn bool_field(value: &Value, name: &str) -> bool {
    value.get(name).and_then(Value::as_bool).unwrap_or(false)
}

/// Leading integer from a `"12 results"` / `"50+ results"` string.
fn extract_count(text: &str) -> u32 {
    RESULT_COUNT_PATTERN
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}

/// A source URL from the nested `urls` object, a flat alternate field, or
/// the placeholder.
fn url_field(value: &Value, urls_key: &str, flat_key: &str) -> String {
    value
        .get("urls")
        .and_then(|urls| urls.get(urls_key))
        .and_then(Value::as_str)
        .or_else(|| value.get(flat_key).and_then(Value::as_str))
        .unwrap_or(PLACEHOLDER_URL)
        .to_string()
}

fn source_count(source: Option<&Value>) -> u32 {
    source
        .and_then(|v| v.get("count"))
        .and_then(Value::as_u64)
        .unwrap_or(0) as u32
}

fn source_url(source: Option<&Value>) -> String {
    source
        .and_then(|v| v.get("url"))
        .and_then(Value::as_str)
        .unwrap_or(PLACEHOLDER_URL)
        .to_string()
}
