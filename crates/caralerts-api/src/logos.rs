//! Brand logo resolution against the third-party logo dataset
//!
//! The dataset is a flat JSON array of `{name, image, id}` items. Each
//! catalog brand is resolved through two indexes — exact name
//! (case-insensitive) first, then normalized name — trying every alias
//! in order. Misses get an empty logo URL so the UI falls back to
//! initials; a failed fetch yields the full fallback entry set instead
//! of an error surface, since logo absence must never block selection.

use std::collections::HashMap;

use serde_json::Value;

use caralerts_core::catalog::{normalize_name, BrandLogoEntry, BRAND_ALIASES};
use caralerts_core::prelude::*;

/// Default dataset location (GitHub raw content).
pub const DEFAULT_LOGO_DATASET_URL: &str =
    "https://raw.githubusercontent.com/filippofilip95/car-logos-dataset/master/logos/data.json";

/// Client for the logo dataset.
#[derive(Debug, Clone)]
pub struct LogoClient {
    client: reqwest::Client,
    dataset_url: String,
}

impl LogoClient {
    pub fn new(client: reqwest::Client, dataset_url: impl Into<String>) -> Self {
        Self {
            client,
            dataset_url: dataset_url.into(),
        }
    }

    /// Fetch the dataset and resolve every catalog brand.
    ///
    /// Errors bubble up so the caller can decide between surfacing them
    /// and substituting [`caralerts_core::fallback_entries`].
    pub async fn fetch_brand_logos(&self) -> Result<Vec<BrandLogoEntry>> {
        let response = self
            .client
            .get(&self.dataset_url)
            .send()
            .await
            .map_err(|e| Error::http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::http(format!("logo dataset fetch failed: {status}")));
        }

        let dataset: Vec<Value> = response
            .json()
            .await
            .map_err(|e| Error::protocol(e.to_string()))?;

        Ok(resolve_entries(&dataset))
    }
}

/// Resolve the catalog against a pre-fetched dataset.
///
/// Pure and synchronous so that embedders and tests can skip the network
/// fetch entirely.
pub fn resolve_entries(dataset: &[Value]) -> Vec<BrandLogoEntry> {
    // Two lookup indexes over the dataset: exact lowercase name, and
    // normalized name (diacritics stripped, non-alphanumerics removed).
    let mut exact: HashMap<String, (String, Option<String>)> = HashMap::new();
    let mut normalized: HashMap<String, (String, Option<String>)> = HashMap::new();

    for item in dataset {
        let Some(name) = item.get("name").and_then(Value::as_str) else {
            continue;
        };
        let logo = item
            .get("image")
            .and_then(|image| {
                image
                    .get("optimized")
                    .and_then(Value::as_str)
                    .or_else(|| image.get("originalSrc").and_then(Value::as_str))
            })
            .unwrap_or("")
            .to_string();
        let id = item.get("id").map(|v| match v {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        });

        exact.insert(name.to_lowercase(), (logo.clone(), id.clone()));
        normalized.insert(normalize_name(name), (logo, id));
    }

    let mut entries = Vec::with_capacity(BRAND_ALIASES.len());
    for brand in BRAND_ALIASES {
        let hit = brand.aliases.iter().find_map(|alias| {
            exact
                .get(&alias.to_lowercase())
                .or_else(|| normalized.get(&normalize_name(alias)))
        });

        match hit {
            Some((logo, id)) => entries.push(BrandLogoEntry {
                name: brand.display.to_string(),
                logo_url: logo.clone(),
                id: id.clone(),
            }),
            None => {
                debug!("no logo found for brand {}", brand.display);
                entries.push(BrandLogoEntry::without_logo(brand.display));
            }
        }
    }

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    entries
}
