//! Field-level validation for alert criteria
//!
//! Validation is pure and total: every call produces a fresh
//! [`FieldErrors`] from the current criteria, with no partial updates.

use std::sync::LazyLock;

use regex::Regex;

use crate::criteria::AlertCriteria;

static CHAT_ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+$").expect("chat id regex is valid"));

/// Per-field error messages. `None` means the field is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub search_name: Option<String>,
    pub brands: Option<String>,
    pub year_min: Option<String>,
    pub telegram_chat_id: Option<String>,
}

impl FieldErrors {
    /// Whole-form validity: no field carries an error.
    pub fn is_valid(&self) -> bool {
        self.search_name.is_none()
            && self.brands.is_none()
            && self.year_min.is_none()
            && self.telegram_chat_id.is_none()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Validate every field of `criteria`.
pub fn validate(criteria: &AlertCriteria) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if criteria.search_name.trim().is_empty() {
        errors.search_name = Some("Ingresa un nombre para la búsqueda".to_string());
    }

    if criteria.brands.is_empty() {
        errors.brands = Some("Selecciona al menos una marca".to_string());
    }

    if criteria.year_min > criteria.year_max {
        errors.year_min = Some("El año mínimo no puede ser mayor que el máximo".to_string());
    }

    if !CHAT_ID_PATTERN.is_match(&criteria.telegram_chat_id) {
        errors.telegram_chat_id = Some("El Chat ID debe contener solo números".to_string());
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_criteria() -> AlertCriteria {
        let mut c = AlertCriteria::new();
        c.search_name = "BMW Serie 3 2020+".to_string();
        c.add_brand("BMW");
        c.telegram_chat_id = "123456789".to_string();
        c
    }

    #[test]
    fn test_valid_criteria_pass() {
        let errors = validate(&valid_criteria());
        assert!(errors.is_valid(), "unexpected errors: {errors:?}");
    }

    #[test]
    fn test_empty_search_name_fails() {
        let mut c = valid_criteria();
        c.search_name = "   ".to_string();
        let errors = validate(&c);
        assert!(errors.search_name.is_some());
        assert!(!errors.is_valid());
    }

    #[test]
    fn test_no_brands_fails() {
        let mut c = valid_criteria();
        c.brands.clear();
        assert!(validate(&c).brands.is_some());
    }

    #[test]
    fn test_year_min_above_max_fails() {
        let mut c = valid_criteria();
        c.year_min = 2023;
        c.year_max = 2020;
        assert!(validate(&c).year_min.is_some());
    }

    #[test]
    fn test_chat_id_must_be_all_digits() {
        let mut c = valid_criteria();
        c.telegram_chat_id = "abc123".to_string();
        assert!(validate(&c).telegram_chat_id.is_some());

        c.telegram_chat_id = "".to_string();
        assert!(validate(&c).telegram_chat_id.is_some());

        c.telegram_chat_id = "42".to_string();
        assert!(validate(&c).telegram_chat_id.is_none());
    }

    #[test]
    fn test_validation_is_pure() {
        let c = valid_criteria();
        assert_eq!(validate(&c), validate(&c));
    }
}
