use dioxus::prelude::*;

use crate::state::AppState;

#[component]
pub fn StatusBar() -> Element {
    let app_state = use_context::<Signal<AppState>>();
    let selected_database = app_state.read().selected_database.clone();
    let selected_table = app_state.read().selected_table.clone();
    let theme = app_state.read().theme.clone();

    let selection = match (&*selected_database.read(), &*selected_table.read()) {
        (Some(database), Some(table)) => format!("{} / {}", database, table),
        (Some(database), None) => database.clone(),
        _ => "No database selected".to_string(),
    };

    rsx! {
        div {
            class: "status-bar",

            div {
                class: "status-left",
                span {
                    class: "status-item",
                    "Ready"
                }
            }

            div {
                class: "status-center",
                span {
                    class: "status-item",
                    "{selection}"
                }
            }

            div {
                class: "status-right",
                button {
                    class: "status-button",
                    onclick: move |_| {
                        AppState::toggle_theme(theme);
                        let mut config = app_state.read().config.clone();
                        config.theme = theme.read().name().to_string();
                        config.save();
                    },
                    "🌙"
                }
            }
        }
    }
}
