//! Configuration types for CarAlerts
//!
//! The backend base URL and logo dataset URL are configuration rather
//! than constants; both can be overridden per-field so a partial config
//! file keeps the defaults for everything it omits.

use serde::{Deserialize, Serialize};

use caralerts_api::DEFAULT_LOGO_DATASET_URL;

/// Default backend instance.
pub const DEFAULT_BACKEND_URL: &str = "https://kavak-meli-bot.francolonghi29.workers.dev";

/// Application settings (`~/.config/caralerts/config.toml`)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub backend: BackendSettings,

    #[serde(default)]
    pub logos: LogoSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Alert backend settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BackendSettings {
    /// Base URL of the alert service
    #[serde(default = "default_backend_url")]
    pub base_url: String,
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            base_url: default_backend_url(),
        }
    }
}

/// Logo dataset settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LogoSettings {
    /// Location of the third-party logo dataset JSON
    #[serde(default = "default_dataset_url")]
    pub dataset_url: String,
}

impl Default for LogoSettings {
    fn default() -> Self {
        Self {
            dataset_url: default_dataset_url(),
        }
    }
}

/// UI settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiSettings {
    /// Event poll timeout in milliseconds (tick rate)
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
        }
    }
}

fn default_backend_url() -> String {
    DEFAULT_BACKEND_URL.to_string()
}

fn default_dataset_url() -> String {
    DEFAULT_LOGO_DATASET_URL.to_string()
}

fn default_tick_ms() -> u64 {
    50
}
