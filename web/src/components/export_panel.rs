use dioxus::prelude::*;

use crate::api::{DataFilter, ExportFormat};
use crate::state::AppState;

/// Download links for the current table, honoring the active date filter.
#[component]
pub fn ExportPanel(database: String, table: String, filter: DataFilter) -> Element {
    let app_state = use_context::<Signal<AppState>>();
    let api = app_state.read().api.clone();

    rsx! {
        div {
            class: "export-panel",

            span {
                class: "export-label",
                "Export:"
            }

            for format in ExportFormat::ALL.iter() {
                a {
                    key: "{format.as_str()}",
                    class: "btn btn-small",
                    href: "{api.download_url(&database, &table, *format, &filter)}",
                    "{format.label()}"
                }
            }
        }
    }
}
