//! Tests to verify backend response fixtures parse correctly

use caralerts_api::{parse_run_response, CreateAlertResponse};

#[test]
fn test_text_counts_fixture_parses() {
    let json = include_str!("fixtures/run_responses/text_counts.json");
    let value: serde_json::Value = serde_json::from_str(json).unwrap();

    let summary = parse_run_response(&value, &[]);

    assert_eq!(summary.kavak_count, 12);
    assert_eq!(summary.marketplace_count, 50);
    assert_eq!(summary.kavak_url, "https://www.kavak.com/mx/seminuevos");
    assert!(summary.notification_sent);
    assert!(!summary.no_results_to_process);
}

#[test]
fn test_nothing_to_process_fixture_parses() {
    let json = include_str!("fixtures/run_responses/nothing_to_process.json");
    let value: serde_json::Value = serde_json::from_str(json).unwrap();

    let summary = parse_run_response(&value, &[]);

    assert!(summary.no_results_to_process);
    assert_eq!(summary.kavak_count, 0);
    assert_eq!(summary.marketplace_count, 0);
    assert!(!summary.notification_sent);
}

#[test]
fn test_structured_fixture_parses() {
    let json = include_str!("fixtures/run_responses/structured.json");
    let value: serde_json::Value = serde_json::from_str(json).unwrap();

    let summary = parse_run_response(&value, &[]);

    assert_eq!(summary.kavak_count, 3);
    assert_eq!(summary.marketplace_count, 0);
    assert_eq!(
        summary.marketplace_url,
        "https://autos.mercadolibre.com.mx/"
    );
    assert!(!summary.notification_sent);
}

#[test]
fn test_created_with_execution_fixture_parses() {
    let json = include_str!("fixtures/alert_responses/created_with_execution.json");
    let response: CreateAlertResponse = serde_json::from_str(json).unwrap();

    assert!(response.success);
    let report = response.ejecucion.expect("execution report present");
    assert!(report.realizada);
    assert_eq!(report.kavak.unwrap().count, 3);
    assert_eq!(report.mercado_libre.unwrap().count, 0);
    assert!(report.telegram_sent);
}
