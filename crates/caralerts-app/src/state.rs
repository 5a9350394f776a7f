//! Application state (Model in TEA pattern)

use std::collections::VecDeque;

use caralerts_core::{
    models_for, validate, AlertCriteria, BrandLogoEntry, FieldErrors, ModelEntry,
    SearchResultSummary,
};

/// Maximum notices kept for display; older ones are dropped.
pub const MAX_NOTICES: usize = 4;

/// Current screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Landing page with the call-to-action
    #[default]
    Landing,

    /// The alert form
    Form,

    /// Search-result summary after a submit or manual run
    Results,
}

/// Submit-flow phase. Acts as the in-flight gate: while not `Idle`,
/// submit and run-again triggers are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,

    /// Alert creation POST in flight
    Submitting,

    /// Fallback `GET /run` in flight
    Searching,
}

/// Focusable form fields, in traversal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    SearchName,
    Brands,
    Models,
    YearMin,
    YearMax,
    PriceMax,
    MileageMax,
    TelegramChatId,
    Frequency,
    Submit,
}

/// Field traversal order for Tab/BackTab.
pub const FIELD_ORDER: &[FormField] = &[
    FormField::SearchName,
    FormField::Brands,
    FormField::Models,
    FormField::YearMin,
    FormField::YearMax,
    FormField::PriceMax,
    FormField::MileageMax,
    FormField::TelegramChatId,
    FormField::Frequency,
    FormField::Submit,
];

impl FormField {
    fn position(&self) -> usize {
        FIELD_ORDER
            .iter()
            .position(|f| f == self)
            .unwrap_or_default()
    }

    pub fn next(&self) -> Self {
        FIELD_ORDER[(self.position() + 1) % FIELD_ORDER.len()]
    }

    pub fn prev(&self) -> Self {
        let pos = self.position();
        FIELD_ORDER[(pos + FIELD_ORDER.len() - 1) % FIELD_ORDER.len()]
    }

    /// Brand and model pickers navigate an internal list with Up/Down.
    pub fn is_list(&self) -> bool {
        matches!(self, FormField::Brands | FormField::Models)
    }

    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            FormField::YearMin | FormField::YearMax | FormField::PriceMax | FormField::MileageMax
        )
    }
}

/// Brand catalog resolution state for the brand picker.
///
/// `Error` is transient: the reducer substitutes the fallback entry set
/// immediately, so the picker always ends up `Ready`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CatalogState {
    #[default]
    Loading,

    Error {
        message: String,
    },

    Ready {
        entries: Vec<BrandLogoEntry>,
        from_fallback: bool,
    },
}

impl CatalogState {
    pub fn entries(&self) -> &[BrandLogoEntry] {
        match self {
            CatalogState::Ready { entries, .. } => entries,
            _ => &[],
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, CatalogState::Loading)
    }
}

/// Severity of a transient notice (toast equivalent).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Info,
    Warning,
    Error,
}

/// A transient user-facing notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

/// Form-local state: the criteria, its errors, and the edit/submit
/// machinery around them.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub criteria: AlertCriteria,
    pub errors: FieldErrors,
    pub focus: FormField,
    pub phase: SubmitPhase,
    /// Cursor into the brand picker list.
    pub brand_cursor: usize,
    /// Cursor into the model picker list.
    pub model_cursor: usize,
    /// Reset the criteria once results from the fallback run arrive
    /// (set on the submit path, never by manual re-runs).
    pub reset_on_results: bool,
}

impl FormState {
    /// Models reachable from the current brand selection, flattened in
    /// brand-then-table order.
    pub fn available_models(&self) -> Vec<ModelEntry> {
        models_for(&self.criteria.brands)
    }

    /// The model picker is disabled while no brand is selected.
    pub fn models_disabled(&self) -> bool {
        self.criteria.brands.is_empty()
    }

    /// Submit-enablement: whole-form validity and nothing in flight.
    ///
    /// Validates the live criteria rather than the stored errors so an
    /// untouched form (clean error display) still reports unsubmittable.
    pub fn can_submit(&self) -> bool {
        self.phase == SubmitPhase::Idle && validate(&self.criteria).is_valid()
    }

    pub fn is_busy(&self) -> bool {
        self.phase != SubmitPhase::Idle
    }
}

/// Top-level application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub screen: Screen,
    pub should_quit: bool,
    pub form: FormState,
    pub catalog: CatalogState,
    pub notices: VecDeque<Notice>,
    pub summary: Option<SearchResultSummary>,
    /// Animation frame for the in-flight spinner.
    pub spinner_frame: usize,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a preloaded brand catalog, skipping the dataset fetch.
    pub fn with_catalog_entries(entries: Vec<BrandLogoEntry>) -> Self {
        Self {
            catalog: CatalogState::Ready {
                entries,
                from_fallback: false,
            },
            ..Self::default()
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn push_notice(&mut self, level: NoticeLevel, text: impl Into<String>) {
        self.notices.push_back(Notice {
            level,
            text: text.into(),
        });
        while self.notices.len() > MAX_NOTICES {
            self.notices.pop_front();
        }
    }

    /// Advance animations; called on every tick.
    pub fn tick(&mut self) {
        self.spinner_frame = self.spinner_frame.wrapping_add(1);
    }
}
