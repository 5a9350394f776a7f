//! Alert criteria — the value object behind the form
//!
//! All mutation goes through named operations so that callers can
//! revalidate after every change; there is no untyped merge path.

use std::collections::HashSet;

use chrono::Datelike;
use serde::{Deserialize, Serialize};

/// Oldest model year the form accepts.
pub const YEAR_FLOOR: u16 = 1990;

/// The current calendar year (upper bound for both year fields).
pub fn current_year() -> u16 {
    chrono::Local::now().year() as u16
}

/// How often the backend should notify about new matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NotificationFrequency {
    Hourly,
    TwiceDaily,
    #[default]
    Daily,
}

impl NotificationFrequency {
    /// Human-readable label shown in the form.
    pub fn label(&self) -> &'static str {
        match self {
            NotificationFrequency::Hourly => "Cada hora",
            NotificationFrequency::TwiceDaily => "Dos veces al día",
            NotificationFrequency::Daily => "Una vez al día",
        }
    }

    /// Cycle to the next frequency (wraps around).
    pub fn next(&self) -> Self {
        match self {
            NotificationFrequency::Hourly => NotificationFrequency::TwiceDaily,
            NotificationFrequency::TwiceDaily => NotificationFrequency::Daily,
            NotificationFrequency::Daily => NotificationFrequency::Hourly,
        }
    }

    /// Cycle to the previous frequency (wraps around).
    pub fn prev(&self) -> Self {
        match self {
            NotificationFrequency::Hourly => NotificationFrequency::Daily,
            NotificationFrequency::TwiceDaily => NotificationFrequency::Hourly,
            NotificationFrequency::Daily => NotificationFrequency::TwiceDaily,
        }
    }
}

/// The full set of search criteria for one alert.
///
/// `brands` and `models` are insertion-ordered and unique; selection
/// operations are idempotent and never reorder existing entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertCriteria {
    pub search_name: String,
    pub brands: Vec<String>,
    pub models: Vec<String>,
    pub year_min: u16,
    pub year_max: u16,
    pub price_max: u32,
    pub mileage_max: u32,
    pub telegram_chat_id: String,
    pub frequency: NotificationFrequency,
}

impl Default for AlertCriteria {
    fn default() -> Self {
        Self {
            search_name: String::new(),
            brands: Vec::new(),
            models: Vec::new(),
            year_min: 2015,
            year_max: current_year(),
            price_max: 500_000,
            mileage_max: 100_000,
            telegram_chat_id: String::new(),
            frequency: NotificationFrequency::default(),
        }
    }
}

impl AlertCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset every field to its default (used after a successful submit).
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Add a brand to the selection. Appends at the end; a brand that is
    /// already selected is silently ignored and existing entries keep
    /// their order. Returns `true` if the selection changed.
    pub fn add_brand(&mut self, name: &str) -> bool {
        if self.brands.iter().any(|b| b == name) {
            return false;
        }
        self.brands.push(name.to_string());
        true
    }

    /// Remove a brand from the selection. No-op if absent.
    /// Returns `true` if the selection changed.
    pub fn remove_brand(&mut self, name: &str) -> bool {
        let before = self.brands.len();
        self.brands.retain(|b| b != name);
        self.brands.len() != before
    }

    /// Toggle a brand in or out of the selection.
    pub fn toggle_brand(&mut self, name: &str) -> bool {
        if self.brands.iter().any(|b| b == name) {
            self.remove_brand(name)
        } else {
            self.add_brand(name)
        }
    }

    /// Add a model to the selection (idempotent, order-preserving).
    pub fn add_model(&mut self, name: &str) -> bool {
        if self.models.iter().any(|m| m == name) {
            return false;
        }
        self.models.push(name.to_string());
        true
    }

    /// Remove a model from the selection. No-op if absent.
    pub fn remove_model(&mut self, name: &str) -> bool {
        let before = self.models.len();
        self.models.retain(|m| m != name);
        self.models.len() != before
    }

    /// Toggle a model in or out of the selection.
    pub fn toggle_model(&mut self, name: &str) -> bool {
        if self.models.iter().any(|m| m == name) {
            self.remove_model(name)
        } else {
            self.add_model(name)
        }
    }

    /// Drop every selected model that is not in `valid` — called once per
    /// brand-set change so the models list never references a deselected
    /// brand. Returns the number of models removed.
    pub fn prune_models(&mut self, valid: &HashSet<String>) -> usize {
        let before = self.models.len();
        self.models.retain(|m| valid.contains(m));
        before - self.models.len()
    }

    /// Clamp both year fields into `[YEAR_FLOOR, current_year()]`.
    ///
    /// Called when a year field loses focus and before serialization, so
    /// partially typed values (e.g. "20") never reach the wire.
    pub fn normalize_years(&mut self) {
        let ceiling = current_year();
        self.year_min = self.year_min.clamp(YEAR_FLOOR, ceiling);
        self.year_max = self.year_max.clamp(YEAR_FLOOR, ceiling);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = AlertCriteria::new();
        assert_eq!(c.search_name, "");
        assert!(c.brands.is_empty());
        assert!(c.models.is_empty());
        assert_eq!(c.year_min, 2015);
        assert_eq!(c.year_max, current_year());
        assert_eq!(c.price_max, 500_000);
        assert_eq!(c.mileage_max, 100_000);
        assert_eq!(c.telegram_chat_id, "");
        assert_eq!(c.frequency, NotificationFrequency::Daily);
    }

    #[test]
    fn test_add_brand_is_idempotent() {
        let mut c = AlertCriteria::new();
        assert!(c.add_brand("Toyota"));
        assert!(c.add_brand("Mazda"));
        assert!(!c.add_brand("Toyota"));
        assert_eq!(c.brands, vec!["Toyota", "Mazda"]);
    }

    #[test]
    fn test_remove_brand_noop_when_absent() {
        let mut c = AlertCriteria::new();
        c.add_brand("Toyota");
        assert!(!c.remove_brand("Mazda"));
        assert!(c.remove_brand("Toyota"));
        assert!(c.brands.is_empty());
    }

    #[test]
    fn test_selection_order_preserved() {
        let mut c = AlertCriteria::new();
        c.add_brand("Volvo");
        c.add_brand("Audi");
        c.add_brand("BMW");
        c.remove_brand("Audi");
        assert_eq!(c.brands, vec!["Volvo", "BMW"]);
    }

    #[test]
    fn test_prune_models() {
        let mut c = AlertCriteria::new();
        c.add_model("Corolla");
        c.add_model("CX-5");
        c.add_model("RAV4");

        let valid: HashSet<String> = ["Corolla", "RAV4"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let removed = c.prune_models(&valid);

        assert_eq!(removed, 1);
        assert_eq!(c.models, vec!["Corolla", "RAV4"]);
    }

    #[test]
    fn test_normalize_years_clamps_to_bounds() {
        let mut c = AlertCriteria::new();
        c.year_min = 20; // partially typed
        c.year_max = 9999;
        c.normalize_years();
        assert_eq!(c.year_min, YEAR_FLOOR);
        assert_eq!(c.year_max, current_year());
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut c = AlertCriteria::new();
        c.search_name = "BMW 2020+".to_string();
        c.add_brand("BMW");
        c.telegram_chat_id = "123456789".to_string();
        c.frequency = NotificationFrequency::Hourly;

        c.reset();

        assert_eq!(c, AlertCriteria::default());
    }

    #[test]
    fn test_frequency_cycle_wraps() {
        let f = NotificationFrequency::Daily;
        assert_eq!(f.next(), NotificationFrequency::Hourly);
        assert_eq!(f.next().prev(), NotificationFrequency::Daily);
    }

    #[test]
    fn test_frequency_wire_names() {
        assert_eq!(
            serde_json::to_string(&NotificationFrequency::TwiceDaily).unwrap(),
            "\"twice-daily\""
        );
        assert_eq!(
            serde_json::to_string(&NotificationFrequency::Daily).unwrap(),
            "\"daily\""
        );
        assert_eq!(
            serde_json::to_string(&NotificationFrequency::Hourly).unwrap(),
            "\"hourly\""
        );
    }
}
