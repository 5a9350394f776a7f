//! # caralerts-api - Remote Collaborators
//!
//! HTTP clients and wire-format handling for CarAlerts:
//!
//! - [`BackendClient`] - `POST /api/alerts` and `GET /run` against the
//!   alert backend
//! - [`AlertPayload`] / [`CreateAlertResponse`] - the wire types (Spanish
//!   field names preserved)
//! - [`parse_run_response`] - total normalization of the run endpoint's
//!   heterogeneous response shapes into a `SearchResultSummary`
//! - [`LogoClient`] / [`resolve_entries`] - brand logo resolution against
//!   the third-party dataset with the exact → normalized → fallback chain

pub mod client;
pub mod logos;
pub mod protocol;

pub use client::BackendClient;
pub use logos::{resolve_entries, LogoClient, DEFAULT_LOGO_DATASET_URL};
pub use protocol::{
    interpret_execution, parse_run_response, AlertPayload, CreateAlertResponse, ExecutionReport,
    SourceReport,
};
