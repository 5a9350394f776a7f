//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;
use caralerts_api::CreateAlertResponse;
use caralerts_core::{BrandLogoEntry, SearchResultSummary};

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Quit the application
    Quit,

    // ─────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────
    /// Switch from the landing screen to the form
    ShowForm,
    /// Return to the landing screen
    ShowLanding,
    /// Leave the results screen and start a fresh form
    NewAlert,

    // ─────────────────────────────────────────────────────────
    // Form Editing
    // ─────────────────────────────────────────────────────────
    /// Move focus to the next field
    FocusNext,
    /// Move focus to the previous field
    FocusPrev,
    /// Character typed into the focused field
    InputChar(char),
    /// Backspace in the focused field
    InputBackspace,
    /// Move the picker cursor up (brand/model lists)
    ListUp,
    /// Move the picker cursor down (brand/model lists)
    ListDown,
    /// Toggle the picker entry under the cursor
    ToggleSelected,
    /// Cycle the notification frequency forward
    NextFrequency,
    /// Cycle the notification frequency backward
    PreviousFrequency,

    // ─────────────────────────────────────────────────────────
    // Submit Flow
    // ─────────────────────────────────────────────────────────
    /// Submit the form (re-validates everything first)
    Submit,
    /// Alert creation POST returned a parsed response
    AlertCreated(CreateAlertResponse),
    /// Alert creation POST failed at the transport level
    SubmitFailed { error: String },
    /// The run endpoint returned an interpreted summary
    SearchCompleted(SearchResultSummary),
    /// The run endpoint failed
    SearchFailed { error: String },
    /// Re-run the search from the results screen
    RunAgain,

    // ─────────────────────────────────────────────────────────
    // Brand Catalog
    // ─────────────────────────────────────────────────────────
    /// Logo dataset resolved (or fallback substituted)
    BrandCatalogLoaded {
        entries: Vec<BrandLogoEntry>,
        from_fallback: bool,
    },
    /// Logo dataset fetch failed; the reducer substitutes the fallback
    BrandCatalogFailed { error: String },
}
