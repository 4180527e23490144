use chrono::NaiveDate;
use dioxus::prelude::*;

use crate::api::DataFilter;
use crate::state::AppState;
use crate::validate;
use crate::Route;

use super::data_grid::DataGrid;
use super::export_panel::ExportPanel;

/// Data page for one table: date filter, paged grid, export links.
#[component]
pub fn ViewData(database: String, table: String) -> Element {
    let app_state = use_context::<Signal<AppState>>();

    // Route parameters come from the URL bar, so they are user input too.
    let invalid_selection = validate::view_selection(&database, &table)
        .err()
        .map(|e| e.user_message());

    let mut start_input = use_signal(String::new);
    let mut end_input = use_signal(String::new);
    let mut filter = use_signal(DataFilter::default);
    let mut filter_error = use_signal(|| None::<String>);

    // Remember this view for the home page list.
    use_effect(use_reactive!(|database, table| {
        if validate::view_selection(&database, &table).is_ok() {
            let recent_views = app_state.read().recent_views.clone();
            AppState::record_view(recent_views, &database, &table);
        }
    }));

    let data = use_resource(use_reactive!(|database, table| {
        let api = app_state.read().api.clone();
        let filter = filter.read().clone();
        async move {
            validate::view_selection(&database, &table)?;
            api.fetch_table_data(&database, &table, &filter).await
        }
    }));

    let apply_filter = move |_| match parse_filter(&start_input.read(), &end_input.read()) {
        Ok(parsed) => {
            filter_error.set(None);
            filter.set(parsed);
        }
        Err(message) => filter_error.set(Some(message)),
    };

    if let Some(message) = invalid_selection {
        return rsx! {
            div {
                class: "data-view",
                div { class: "error-banner", "{message}" }
                Link { class: "btn btn-secondary", to: Route::Home {}, "Back" }
            }
        };
    }

    rsx! {
        div {
            class: "data-view",

            div {
                class: "data-view-header",
                Link { class: "btn btn-secondary", to: Route::Home {}, "Back" }
                h2 {
                    class: "data-view-title",
                    "{database}.{table}"
                }
            }

            div {
                class: "filter-bar",
                label { class: "filter-label", "From" }
                input {
                    class: "filter-input",
                    r#type: "date",
                    value: "{start_input.read()}",
                    oninput: move |e| start_input.set(e.value())
                }
                label { class: "filter-label", "To" }
                input {
                    class: "filter-input",
                    r#type: "date",
                    value: "{end_input.read()}",
                    oninput: move |e| end_input.set(e.value())
                }
                button {
                    class: "btn btn-primary",
                    onclick: apply_filter,
                    "Apply"
                }
            }

            if let Some(message) = filter_error.read().as_ref() {
                div { class: "error-banner", "{message}" }
            }

            match &*data.read() {
                Some(Ok(table_data)) => rsx! {
                    DataGrid {
                        data: table_data.clone(),
                        page_size: app_state.read().config.page_size,
                    }
                    ExportPanel {
                        database: database.clone(),
                        table: table.clone(),
                        filter: filter.read().clone(),
                    }
                },
                Some(Err(e)) => rsx! {
                    div { class: "error-banner", "{e.user_message()}" }
                },
                None => rsx! {
                    div { class: "loading-indicator", "Loading data..." }
                },
            }
        }
    }
}

/// Build a filter from the two date inputs; empty inputs mean no bound.
fn parse_filter(start: &str, end: &str) -> std::result::Result<DataFilter, String> {
    let start_date = parse_date(start, "start date")?;
    let end_date = parse_date(end, "end date")?;
    if let (Some(s), Some(e)) = (start_date, end_date) {
        if s > e {
            return Err("Start date must not be after end date".to_string());
        }
    }
    Ok(DataFilter {
        start_date,
        end_date,
    })
}

fn parse_date(value: &str, what: &str) -> std::result::Result<Option<NaiveDate>, String> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| format!("Invalid {}: '{}' (expected YYYY-MM-DD)", what, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_inputs_mean_no_bounds() {
        let filter = parse_filter("", "  ").unwrap();
        assert_eq!(filter, DataFilter::default());
    }

    #[test]
    fn parses_iso_dates() {
        let filter = parse_filter("2024-01-01", "2024-02-29").unwrap();
        assert_eq!(filter.start_date, NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_eq!(filter.end_date, NaiveDate::from_ymd_opt(2024, 2, 29));
    }

    #[test]
    fn rejects_malformed_dates() {
        assert!(parse_filter("01/02/2024", "").is_err());
        assert!(parse_filter("", "2024-13-01").is_err());
    }

    #[test]
    fn rejects_reversed_range() {
        let err = parse_filter("2024-02-01", "2024-01-01").unwrap_err();
        assert!(err.contains("Start date"));
    }
}
