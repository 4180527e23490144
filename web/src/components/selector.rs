use dioxus::prelude::*;

use crate::state::AppState;
use crate::validate;
use crate::Route;

/// Database/table picker: choose a database, pick one of its tables, then
/// jump to the table's data view.
#[component]
pub fn Selector() -> Element {
    let app_state = use_context::<Signal<AppState>>();
    let mut selected_database = app_state.read().selected_database.clone();
    let mut selected_table = app_state.read().selected_table.clone();
    // Last non-empty database choice; only this drives the table fetch, so
    // re-selecting the placeholder leaves already-loaded tables alone.
    let mut active_database = use_signal(|| None::<String>);

    let databases = use_resource(move || {
        let api = app_state.read().api.clone();
        async move { api.list_databases().await }
    });

    // Keyed on the active database: a new choice restarts the resource and
    // drops any fetch still in flight for the previous one.
    let tables = use_resource(move || {
        let api = app_state.read().api.clone();
        let database = active_database.read().clone();
        async move {
            match database {
                Some(name) => {
                    let result = api.list_tables(&name).await;
                    Some((name, result))
                }
                None => None,
            }
        }
    });

    rsx! {
        div {
            class: "selector-panel",

            h2 {
                class: "selector-title",
                "Browse a table"
            }

            match &*databases.read() {
                Some(Ok(names)) => rsx! {
                    select {
                        class: "select-control",
                        value: "{selected_database.read().as_deref().unwrap_or(\"\")}",
                        onchange: move |e| {
                            let value = e.value();
                            if value.is_empty() {
                                // Placeholder re-selected: no fetch, the view
                                // control falls back to click-time validation.
                                selected_database.set(None);
                            } else {
                                tracing::info!("Database selected: {}", value);
                                selected_database.set(Some(value.clone()));
                                selected_table.set(None);
                                active_database.set(Some(value));
                            }
                        },
                        option { value: "", "-- Choose Database --" }
                        for name in names.iter() {
                            option { value: "{name}", "{name}" }
                        }
                    }
                },
                Some(Err(e)) => rsx! {
                    div { class: "error-banner", "{e.user_message()}" }
                },
                None => rsx! {
                    div { class: "loading-indicator", "Loading databases..." }
                },
            }

            {
                let current = active_database.read().clone();
                match &*tables.read() {
                    Some(Some((for_db, Ok(names)))) if Some(for_db) == current.as_ref() => rsx! {
                        select {
                            class: "select-control",
                            value: "{selected_table.read().as_deref().unwrap_or(\"\")}",
                            onchange: move |e| {
                                let v = if e.value().is_empty() { None } else { Some(e.value()) };
                                selected_table.set(v);
                            },
                            option { value: "", "-- Choose Table --" }
                            for name in names.iter() {
                                option { value: "{name}", "{name}" }
                            }
                        }

                        if names.is_empty() {
                            div { class: "empty-state", "No tables found" }
                        }

                        button {
                            class: "btn btn-primary",
                            onclick: move |_| {
                                let database = selected_database.read().clone().unwrap_or_default();
                                let table = selected_table.read().clone().unwrap_or_default();
                                match validate::view_selection(&database, &table) {
                                    Ok(()) => {
                                        tracing::info!("Viewing {}.{}", database, table);
                                        navigator().push(Route::ViewData { database, table });
                                    }
                                    Err(e) => alert(&e.user_message()),
                                }
                            },
                            "View Data"
                        }
                    },
                    Some(Some((for_db, Err(e)))) if Some(for_db) == current.as_ref() => rsx! {
                        div { class: "error-banner", "{e.user_message()}" }
                    },
                    _ => {
                        if current.is_some() {
                            rsx! {
                                div { class: "loading-indicator", "Loading tables..." }
                            }
                        } else {
                            rsx! {}
                        }
                    }
                }
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn alert(message: &str) {
    tracing::warn!("Validation alert: {}", message);
}
