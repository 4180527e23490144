use dioxus::prelude::*;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::api::ApiClient;
use crate::config::{self, AppConfig};

/// Default number of rows per page in the data grid
pub const DEFAULT_PAGE_SIZE: usize = 100;

/// Maximum number of view history entries to retain
pub const MAX_VIEW_HISTORY: usize = 20;

/// A table the user has opened, most recent first.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewHistoryItem {
    pub id: Uuid,
    pub database: String,
    pub table: String,
    pub viewed_at: chrono::DateTime<chrono::Utc>,
}

/// Global application state
#[derive(Clone)]
pub struct AppState {
    pub api: Arc<ApiClient>,
    pub config: AppConfig,
    pub selected_database: Signal<Option<String>>,
    pub selected_table: Signal<Option<String>>,
    pub recent_views: Signal<Vec<ViewHistoryItem>>,
    pub theme: Signal<Theme>,
}

impl AppState {
    /// Create a new application state from persisted settings
    pub fn new() -> Self {
        let config = AppConfig::load();
        let theme = Theme::from_name(&config.theme);
        Self {
            api: Arc::new(ApiClient::new(config.api_base.clone())),
            config,
            selected_database: Signal::new(None),
            selected_table: Signal::new(None),
            recent_views: Signal::new(config::load_recent_views()),
            theme: Signal::new(theme),
        }
    }

    /// Record a viewed table (used with Signal's clone pattern)
    pub fn record_view(mut recent_views: Signal<Vec<ViewHistoryItem>>, database: &str, table: &str) {
        let mut views = recent_views.write();
        push_view(&mut views, database, table);
        config::save_recent_views(&views);
    }

    /// Forget all recorded views
    pub fn clear_views(mut recent_views: Signal<Vec<ViewHistoryItem>>) {
        recent_views.write().clear();
        config::save_recent_views(&[]);
    }

    /// Switch theme
    pub fn toggle_theme(mut theme: Signal<Theme>) {
        let current = *theme.read();
        *theme.write() = current.toggled();
    }
}

/// Move-to-front insert with dedup and cap.
pub fn push_view(views: &mut Vec<ViewHistoryItem>, database: &str, table: &str) {
    views.retain(|v| !(v.database == database && v.table == table));
    views.insert(
        0,
        ViewHistoryItem {
            id: Uuid::new_v4(),
            database: database.to_string(),
            table: table.to_string(),
            viewed_at: chrono::Utc::now(),
        },
    );
    views.truncate(MAX_VIEW_HISTORY);
}

/// Application theme
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn from_name(name: &str) -> Self {
        if name.eq_ignore_ascii_case("light") {
            Theme::Light
        } else {
            Theme::Dark
        }
    }

    /// Name used in persisted settings
    pub fn name(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Get CSS class name for the theme
    pub fn class_name(&self) -> &'static str {
        match self {
            Theme::Light => "theme-light",
            Theme::Dark => "theme-dark",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_view_moves_repeats_to_front() {
        let mut views = Vec::new();
        push_view(&mut views, "sales", "orders");
        push_view(&mut views, "sales", "customers");
        push_view(&mut views, "sales", "orders");

        assert_eq!(views.len(), 2);
        assert_eq!(views[0].table, "orders");
        assert_eq!(views[1].table, "customers");
    }

    #[test]
    fn push_view_caps_history() {
        let mut views = Vec::new();
        for i in 0..(MAX_VIEW_HISTORY + 5) {
            push_view(&mut views, "sales", &format!("t{}", i));
        }
        assert_eq!(views.len(), MAX_VIEW_HISTORY);
        assert_eq!(views[0].table, format!("t{}", MAX_VIEW_HISTORY + 4));
    }

    #[test]
    fn same_table_in_different_databases_is_distinct() {
        let mut views = Vec::new();
        push_view(&mut views, "sales", "orders");
        push_view(&mut views, "archive", "orders");
        assert_eq!(views.len(), 2);
    }

    #[test]
    fn theme_names_round_trip() {
        assert_eq!(Theme::from_name("light"), Theme::Light);
        assert_eq!(Theme::from_name("Dark"), Theme::Dark);
        assert_eq!(Theme::from_name("anything"), Theme::Dark);
        assert_eq!(Theme::from_name(Theme::Light.name()), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
    }
}
