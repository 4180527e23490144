use dioxus::prelude::*;
use serde_json::Value;

use crate::api::TableData;

/// Paged, read-only grid over one table's rows.
#[component]
pub fn DataGrid(data: TableData, page_size: usize) -> Element {
    let mut selected_row = use_signal(|| None::<usize>);
    let mut current_page = use_signal(|| 0usize);

    let page_size = page_size.max(1);
    let page_count = data.rows.len().div_ceil(page_size).max(1);
    // The page signal outlives filter changes; clamp it to the new data.
    let page = (*current_page.read()).min(page_count - 1);
    let (start, end) = page_bounds(data.rows.len(), page, page_size);
    let page_rows = &data.rows[start..end];

    rsx! {
        div {
            class: "data-grid",

            div {
                class: "results-header",
                div {
                    class: "results-info",
                    if data.rows.is_empty() {
                        span { "No results to display" }
                    } else {
                        span { "{data.rows.len()} rows" }
                    }
                }
            }

            div {
                class: "table-container",

                table {
                    class: "data-table",

                    thead {
                        tr {
                            for column in data.columns.iter() {
                                th {
                                    div {
                                        class: "column-header",

                                        span {
                                            class: "column-name",
                                            "{column.name}"
                                        }

                                        if !column.data_type.is_empty() {
                                            span {
                                                class: "column-type",
                                                "{column.data_type}"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }

                    tbody {
                        if data.rows.is_empty() {
                            tr {
                                td {
                                    colspan: "{data.columns.len().max(1)}",
                                    class: "empty-state",
                                    "No data available"
                                }
                            }
                        } else {
                            for (idx, row) in page_rows.iter().enumerate() {
                                {
                                    let row_index = start + idx;
                                    rsx! {
                                        tr {
                                            key: "{row_index}",
                                            class: if *selected_row.read() == Some(row_index) { "selected" } else { "" },
                                            onclick: move |_| selected_row.set(Some(row_index)),

                                            for (col_idx, value) in row.iter().enumerate() {
                                                td {
                                                    key: "{col_idx}",
                                                    "{format_value(value)}"
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            div {
                class: "pagination",

                button {
                    class: "btn-icon",
                    disabled: page == 0,
                    onclick: move |_| current_page.set(page.saturating_sub(1)),
                    "◀"
                }

                span {
                    class: "page-info",
                    "Page {page + 1} of {page_count}"
                }

                button {
                    class: "btn-icon",
                    disabled: page + 1 >= page_count,
                    onclick: move |_| current_page.set(page + 1),
                    "▶"
                }
            }
        }
    }
}

fn page_bounds(total: usize, page: usize, page_size: usize) -> (usize, usize) {
    let start = (page * page_size).min(total);
    let end = (start + page_size).min(total);
    (start, end)
}

fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "NULL".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Array(arr) => format!("[{} items]", arr.len()),
        Value::Object(obj) => format!("{{{}}} fields", obj.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_bounds_slice_the_row_range() {
        assert_eq!(page_bounds(250, 0, 100), (0, 100));
        assert_eq!(page_bounds(250, 2, 100), (200, 250));
        assert_eq!(page_bounds(0, 0, 100), (0, 0));
        // A page past the end collapses to an empty slice instead of panicking.
        assert_eq!(page_bounds(50, 3, 100), (50, 50));
    }

    #[test]
    fn values_format_for_display() {
        assert_eq!(format_value(&Value::Null), "NULL");
        assert_eq!(format_value(&serde_json::json!(true)), "true");
        assert_eq!(format_value(&serde_json::json!(42)), "42");
        assert_eq!(format_value(&serde_json::json!("hi")), "hi");
        assert_eq!(format_value(&serde_json::json!([1, 2, 3])), "[3 items]");
    }
}
