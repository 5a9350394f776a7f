//! Supported brand catalog and logo-dataset name aliases
//!
//! The external logo dataset spells some brands differently
//! ("Alfaromeo", "Mercedes Benz", ...), so each catalog brand carries the
//! list of dataset names to try, in priority order.

use serde::{Deserialize, Serialize};

/// A catalog brand with its dataset name aliases.
#[derive(Debug, Clone, Copy)]
pub struct BrandAliases {
    /// Display name used everywhere in the UI and on the wire.
    pub display: &'static str,
    /// Dataset spellings to try, first match wins.
    pub aliases: &'static [&'static str],
}

/// Every brand the form recognizes, with dataset aliases.
pub const BRAND_ALIASES: &[BrandAliases] = &[
    BrandAliases { display: "Acura", aliases: &["Acura"] },
    BrandAliases { display: "Alfa Romeo", aliases: &["Alfa Romeo", "Alfaromeo", "Alfa"] },
    BrandAliases { display: "Audi", aliases: &["Audi"] },
    BrandAliases { display: "BAIC", aliases: &["BAIC", "Baic"] },
    BrandAliases { display: "BMW", aliases: &["BMW"] },
    BrandAliases { display: "Buick", aliases: &["Buick"] },
    BrandAliases { display: "BYD", aliases: &["BYD", "Byd"] },
    BrandAliases { display: "Cadillac", aliases: &["Cadillac"] },
    BrandAliases { display: "Changan", aliases: &["Changan"] },
    BrandAliases { display: "Chevrolet", aliases: &["Chevrolet", "Chevy"] },
    BrandAliases { display: "Chirey", aliases: &["Chirey", "Chery"] },
    BrandAliases { display: "Chrysler", aliases: &["Chrysler"] },
    BrandAliases { display: "Citroën", aliases: &["Citroen", "Citroën"] },
    BrandAliases { display: "Cupra", aliases: &["Cupra"] },
    BrandAliases { display: "Dodge", aliases: &["Dodge"] },
    BrandAliases { display: "Fiat", aliases: &["Fiat"] },
    BrandAliases { display: "Ford", aliases: &["Ford"] },
    BrandAliases { display: "GMC", aliases: &["GMC", "Gmc"] },
    BrandAliases { display: "Great Wall", aliases: &["Great Wall", "Greatwall"] },
    BrandAliases { display: "Honda", aliases: &["Honda"] },
    BrandAliases { display: "Hyundai", aliases: &["Hyundai"] },
    BrandAliases { display: "Infiniti", aliases: &["Infiniti"] },
    BrandAliases { display: "JAC", aliases: &["JAC", "Jac"] },
    BrandAliases { display: "Jaguar", aliases: &["Jaguar"] },
    BrandAliases { display: "Jeep", aliases: &["Jeep"] },
    BrandAliases { display: "Jetour", aliases: &["Jetour"] },
    BrandAliases { display: "Kia", aliases: &["Kia"] },
    BrandAliases { display: "Land Rover", aliases: &["Land Rover", "Landrover"] },
    BrandAliases { display: "Lexus", aliases: &["Lexus"] },
    BrandAliases { display: "Lincoln", aliases: &["Lincoln"] },
    BrandAliases { display: "Mazda", aliases: &["Mazda"] },
    BrandAliases {
        display: "Mercedes-Benz",
        aliases: &["Mercedes-Benz", "Mercedes Benz", "Mercedes", "Mercedesbenz"],
    },
    BrandAliases { display: "MG", aliases: &["MG", "Mg"] },
    BrandAliases { display: "Mini", aliases: &["Mini", "MINI"] },
    BrandAliases { display: "Mitsubishi", aliases: &["Mitsubishi"] },
    BrandAliases { display: "Nissan", aliases: &["Nissan"] },
    BrandAliases { display: "Omoda", aliases: &["Omoda"] },
    BrandAliases { display: "Peugeot", aliases: &["Peugeot"] },
    BrandAliases { display: "Porsche", aliases: &["Porsche"] },
    BrandAliases { display: "RAM", aliases: &["RAM", "Ram"] },
    BrandAliases { display: "Renault", aliases: &["Renault"] },
    BrandAliases { display: "Seat", aliases: &["Seat", "SEAT"] },
    BrandAliases { display: "SEV", aliases: &["SEV", "Sev"] },
    BrandAliases { display: "Smart", aliases: &["Smart"] },
    BrandAliases { display: "Subaru", aliases: &["Subaru"] },
    BrandAliases { display: "Suzuki", aliases: &["Suzuki"] },
    BrandAliases { display: "Tesla", aliases: &["Tesla"] },
    BrandAliases { display: "Toyota", aliases: &["Toyota"] },
    BrandAliases { display: "Volkswagen", aliases: &["Volkswagen", "VW"] },
    BrandAliases { display: "Volvo", aliases: &["Volvo"] },
];

/// A catalog brand resolved against the logo dataset.
///
/// An empty `logo_url` means no logo was found; consumers render the
/// initials fallback instead.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BrandLogoEntry {
    pub name: String,
    pub logo_url: String,
    #[serde(default)]
    pub id: Option<String>,
}

impl BrandLogoEntry {
    pub fn without_logo(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            logo_url: String::new(),
            id: None,
        }
    }

    pub fn has_logo(&self) -> bool {
        !self.logo_url.is_empty()
    }
}

/// Case-fold, strip diacritics, and drop non-alphanumerics:
/// `"Citroën"` → `"citroen"`, `"Mercedes-Benz"` → `"mercedesbenz"`.
pub fn normalize_name(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(fold_diacritic)
        .filter(|c| c.is_ascii_alphanumeric())
        .collect()
}

/// Map accented Latin letters onto their ASCII base.
fn fold_diacritic(c: char) -> char {
    match c {
        'á' | 'à' | 'ä' | 'â' | 'ã' | 'å' => 'a',
        'é' | 'è' | 'ë' | 'ê' => 'e',
        'í' | 'ì' | 'ï' | 'î' => 'i',
        'ó' | 'ò' | 'ö' | 'ô' | 'õ' => 'o',
        'ú' | 'ù' | 'ü' | 'û' => 'u',
        'ñ' => 'n',
        'ç' => 'c',
        other => other,
    }
}

/// Initials used as the logo fallback: `"Alfa Romeo"` → `"AR"`,
/// `"Kia"` → `"KI"`.
pub fn initials(name: &str) -> String {
    let mut words = name.split_whitespace();
    match (words.next(), words.next()) {
        (Some(first), Some(second)) => first
            .chars()
            .take(1)
            .chain(second.chars().take(1))
            .collect::<String>()
            .to_uppercase(),
        (Some(only), None) => only.chars().take(2).collect::<String>().to_uppercase(),
        _ => String::new(),
    }
}

/// The logo-less entry set used when the dataset fetch fails, sorted
/// alphabetically like the resolved list. Logo absence must never block
/// brand selection.
pub fn fallback_entries() -> Vec<BrandLogoEntry> {
    let mut entries: Vec<BrandLogoEntry> = BRAND_ALIASES
        .iter()
        .map(|b| BrandLogoEntry::without_logo(b.display))
        .collect();
    entries.sort_by(|a, b| a.name.cmp(&b.name));
    entries
}
