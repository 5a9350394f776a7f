//! Static catalogs: supported brands, dataset aliases, and models

pub mod brands;
pub mod models;

pub use brands::{
    fallback_entries, initials, normalize_name, BrandAliases, BrandLogoEntry, BRAND_ALIASES,
};
pub use models::{brand_key, group_by_brand, models_for, valid_model_set, ModelEntry};
