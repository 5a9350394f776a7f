//! Configuration loading and types

pub mod settings;
pub mod types;

pub use settings::{
    default_config_path, load_settings, validate_settings, ENV_BACKEND_URL, ENV_LOGO_URL,
};
pub use types::{BackendSettings, LogoSettings, Settings, UiSettings, DEFAULT_BACKEND_URL};
