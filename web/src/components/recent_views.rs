use dioxus::prelude::*;

use crate::state::AppState;
use crate::Route;

/// List of recently opened tables, newest first, each linking back to its
/// data view.
#[component]
pub fn RecentViews() -> Element {
    let app_state = use_context::<Signal<AppState>>();
    let recent_views = app_state.read().recent_views.clone();

    if recent_views.read().is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "recent-views",

            div {
                class: "recent-header",
                h3 {
                    class: "recent-title",
                    "Recently viewed"
                }
                button {
                    class: "btn-small",
                    onclick: move |_| AppState::clear_views(recent_views),
                    "Clear"
                }
            }

            div {
                class: "recent-list",

                for view in recent_views.read().iter() {
                    {
                        let when = view.viewed_at.format("%Y-%m-%d %H:%M").to_string();
                        let database = view.database.clone();
                        let table = view.table.clone();
                        rsx! {
                            Link {
                                key: "{view.id}",
                                class: "recent-item",
                                to: Route::ViewData { database, table },

                                span {
                                    class: "recent-name",
                                    "{view.database}.{view.table}"
                                }
                                span {
                                    class: "recent-time",
                                    "{when}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
