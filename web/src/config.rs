use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::state::ViewHistoryItem;

const CONFIG_KEY: &str = "tavola.config";
const RECENT_VIEWS_KEY: &str = "tavola.recent_views";

/// Client settings persisted in browser local storage.
///
/// `api_base` is empty for same-origin deployments and may point at a
/// separate backend host during development.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api_base: String,
    pub page_size: usize,
    pub theme: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            page_size: crate::state::DEFAULT_PAGE_SIZE,
            theme: "dark".to_string(),
        }
    }
}

impl AppConfig {
    /// Load settings from storage, falling back to defaults on any problem.
    pub fn load() -> Self {
        let Some(raw) = storage_get(CONFIG_KEY) else {
            return Self::default();
        };
        match serde_json::from_str(&raw) {
            Ok(config) => {
                debug!("Loaded configuration from storage");
                config
            }
            Err(e) => {
                warn!("Failed to parse stored configuration: {}", e);
                Self::default()
            }
        }
    }

    /// Save settings to storage.
    pub fn save(&self) {
        match serde_json::to_string(self) {
            Ok(raw) => storage_set(CONFIG_KEY, &raw),
            Err(e) => warn!("Failed to serialize configuration: {}", e),
        }
    }
}

/// Load the recently viewed tables, empty on any error.
pub fn load_recent_views() -> Vec<ViewHistoryItem> {
    let Some(raw) = storage_get(RECENT_VIEWS_KEY) else {
        return Vec::new();
    };
    serde_json::from_str(&raw).unwrap_or_default()
}

/// Save the recently viewed tables.
pub fn save_recent_views(views: &[ViewHistoryItem]) {
    match serde_json::to_string(views) {
        Ok(raw) => storage_set(RECENT_VIEWS_KEY, &raw),
        Err(e) => warn!("Failed to serialize view history: {}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

#[cfg(target_arch = "wasm32")]
fn storage_get(key: &str) -> Option<String> {
    storage()?.get_item(key).ok().flatten()
}

#[cfg(target_arch = "wasm32")]
fn storage_set(key: &str, value: &str) {
    if let Some(storage) = storage() {
        if storage.set_item(key, value).is_err() {
            warn!("Failed to write '{}' to local storage", key);
        }
    }
}

// Storage is browser-only; native builds (tests) see an empty store.
#[cfg(not(target_arch = "wasm32"))]
fn storage_get(_key: &str) -> Option<String> {
    None
}

#[cfg(not(target_arch = "wasm32"))]
fn storage_set(_key: &str, _value: &str) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_round_trips_as_json() {
        let config = AppConfig {
            api_base: "http://localhost:5000".to_string(),
            page_size: 50,
            theme: "light".to_string(),
        };
        let raw = serde_json::to_string(&config).unwrap();
        let restored: AppConfig = serde_json::from_str(&raw).unwrap();
        assert_eq!(config, restored);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: AppConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.page_size, crate::state::DEFAULT_PAGE_SIZE);
        assert!(config.api_base.is_empty());
    }

    #[test]
    fn load_defaults_without_storage() {
        // Native targets have no local storage backing.
        assert_eq!(AppConfig::load(), AppConfig::default());
        assert!(load_recent_views().is_empty());
    }
}
