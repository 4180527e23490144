use dioxus::prelude::*;

use crate::state::AppState;
use crate::Route;

use super::statusbar::StatusBar;

/// Themed page frame: routed content above, status bar below.
#[component]
pub fn Shell() -> Element {
    let app_state = use_context::<Signal<AppState>>();
    let theme = app_state.read().theme.clone();

    rsx! {
        div {
            class: "app-container {theme.read().class_name()}",

            div {
                class: "main-layout",

                div {
                    class: "content-area",
                    Outlet::<Route> {}
                }
            }

            StatusBar {}
        }
    }
}
