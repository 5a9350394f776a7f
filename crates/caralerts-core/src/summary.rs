//! Search-result summary shown after an alert run

use serde::Serialize;

/// URL shown when the backend did not provide one for a source.
pub const PLACEHOLDER_URL: &str = "#";

/// Normalized outcome of one search run across both listing sources.
///
/// Built by the interpreter in `caralerts-api` from whichever raw response
/// shape the backend produced; `models_used` is attached client-side since
/// the server does not echo the submitted model selection back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResultSummary {
    pub kavak_count: u32,
    pub kavak_url: String,
    pub marketplace_count: u32,
    pub marketplace_url: String,
    pub notification_sent: bool,
    pub no_results_to_process: bool,
    pub models_used: Vec<String>,
}

impl Default for SearchResultSummary {
    fn default() -> Self {
        Self {
            kavak_count: 0,
            kavak_url: PLACEHOLDER_URL.to_string(),
            marketplace_count: 0,
            marketplace_url: PLACEHOLDER_URL.to_string(),
            notification_sent: false,
            no_results_to_process: false,
            models_used: Vec::new(),
        }
    }
}

impl SearchResultSummary {
    /// Combined match count across both sources.
    pub fn total_count(&self) -> u32 {
        self.kavak_count + self.marketplace_count
    }

    pub fn has_results(&self) -> bool {
        self.total_count() > 0
    }
}
