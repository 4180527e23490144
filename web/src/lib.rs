use dioxus::prelude::*;

pub mod api;
pub mod config;
pub mod error;
pub mod state;
pub mod validate;
pub mod components {
    pub mod data_grid;
    pub mod data_view;
    pub mod export_panel;
    pub mod home;
    pub mod recent_views;
    pub mod selector;
    pub mod shell;
    pub mod statusbar;
}

use components::data_view::ViewData;
use components::home::Home;
use components::shell::Shell;

/// Page table. `/view_data/{database}/{table}` is the navigation target the
/// selector produces.
#[derive(Clone, Debug, PartialEq, Routable)]
pub enum Route {
    #[layout(Shell)]
    #[route("/")]
    Home {},
    #[route("/view_data/:database/:table")]
    ViewData { database: String, table: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_render_navigation_paths() {
        let route = Route::ViewData {
            database: "db1".to_string(),
            table: "tbl1".to_string(),
        };
        assert_eq!(route.to_string(), "/view_data/db1/tbl1");
    }

    #[test]
    fn view_data_paths_parse_back() {
        let route: Route = "/view_data/sales/orders".parse().unwrap();
        assert_eq!(
            route,
            Route::ViewData {
                database: "sales".to_string(),
                table: "orders".to_string(),
            }
        );
    }
}
