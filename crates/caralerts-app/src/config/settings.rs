//! Settings loader for ~/.config/caralerts/config.toml
//!
//! Resolution order: file (if present) → environment overrides → URL
//! validation. A missing default file is fine; a missing file passed
//! explicitly is an error.

use std::path::{Path, PathBuf};

use url::Url;

use caralerts_core::prelude::*;

use super::types::Settings;

const CONFIG_FILENAME: &str = "config.toml";
const CONFIG_DIR: &str = "caralerts";

/// Environment override for the backend base URL.
pub const ENV_BACKEND_URL: &str = "CARALERTS_BACKEND_URL";
/// Environment override for the logo dataset URL.
pub const ENV_LOGO_URL: &str = "CARALERTS_LOGO_URL";

/// Default config file location (`~/.config/caralerts/config.toml`).
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILENAME))
}

/// Load settings, applying environment overrides and validating URLs.
///
/// With `path_override` the file must exist; without it, a missing
/// default file just yields the built-in defaults.
pub fn load_settings(path_override: Option<&Path>) -> Result<Settings> {
    let mut settings = match path_override {
        Some(path) => {
            if !path.exists() {
                return Err(Error::ConfigNotFound {
                    path: path.to_path_buf(),
                });
            }
            parse_file(path)?
        }
        None => match default_config_path() {
            Some(path) if path.exists() => parse_file(&path)?,
            _ => Settings::default(),
        },
    };

    apply_env_overrides(&mut settings);
    validate_settings(&settings)?;
    Ok(settings)
}

fn parse_file(path: &Path) -> Result<Settings> {
    let content = std::fs::read_to_string(path)?;
    let settings = toml::from_str(&content)
        .map_err(|e| Error::config_invalid(format!("{}: {e}", path.display())))?;
    debug!("loaded settings from {}", path.display());
    Ok(settings)
}

fn apply_env_overrides(settings: &mut Settings) {
    if let Ok(value) = std::env::var(ENV_BACKEND_URL) {
        if !value.is_empty() {
            settings.backend.base_url = value;
        }
    }
    if let Ok(value) = std::env::var(ENV_LOGO_URL) {
        if !value.is_empty() {
            settings.logos.dataset_url = value;
        }
    }
}

/// Validate the configured URLs. Called by [`load_settings`] and again by
/// the binary after CLI overrides are applied.
pub fn validate_settings(settings: &Settings) -> Result<()> {
    Url::parse(&settings.backend.base_url)
        .map_err(|e| Error::config_invalid(format!("backend.base_url: {e}")))?;
    Url::parse(&settings.logos.dataset_url)
        .map_err(|e| Error::config_invalid(format!("logos.dataset_url: {e}")))?;
    Ok(())
}
