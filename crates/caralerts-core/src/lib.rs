//! # caralerts-core - Core Domain Types
//!
//! Foundation crate for CarAlerts. Provides the alert criteria value
//! object, field validation, the static brand/model catalogs, the
//! search-result summary model, error handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on
//! external crates (serde, chrono, thiserror, regex, tracing).
//!
//! ## Public API
//!
//! ### Criteria (`criteria`)
//! - [`AlertCriteria`] - The form's value object with named mutation ops
//! - [`NotificationFrequency`] - Hourly / TwiceDaily / Daily
//!
//! ### Validation (`validation`)
//! - [`FieldErrors`] - Per-field error messages
//! - [`validate()`] - Pure, total validation of all fields
//!
//! ### Catalogs (`catalog`)
//! - [`BRAND_ALIASES`] - Supported brands with dataset name aliases
//! - [`models_for()`] - Brand-scoped model lookup
//! - [`BrandLogoEntry`] - A brand resolved against the logo dataset
//!
//! ### Results (`summary`)
//! - [`SearchResultSummary`] - Normalized outcome of one search run
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use caralerts_core::prelude::*;
//! ```

pub mod catalog;
pub mod criteria;
pub mod error;
pub mod format;
pub mod logging;
pub mod summary;
pub mod validation;

/// Prelude for common imports used throughout all CarAlerts crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use catalog::{
    brand_key, fallback_entries, group_by_brand, initials, models_for, normalize_name,
    valid_model_set, BrandAliases, BrandLogoEntry, ModelEntry, BRAND_ALIASES,
};
pub use criteria::{current_year, AlertCriteria, NotificationFrequency, YEAR_FLOOR};
pub use error::{Error, Result, ResultExt};
pub use format::{format_currency, format_mileage};
pub use summary::{SearchResultSummary, PLACEHOLDER_URL};
pub use validation::{validate, FieldErrors};
