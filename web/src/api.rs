use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;

/// Request body for the table-listing endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TablesRequest {
    pub database_name: String,
}

/// Column description as delivered by the data endpoint.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ColumnInfo {
    pub name: String,
    #[serde(default)]
    pub data_type: String,
}

/// One page worth of table contents.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct TableData {
    pub columns: Vec<ColumnInfo>,
    pub rows: Vec<Vec<Value>>,
}

/// File formats offered by the download endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Xlsx,
    Pdf,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [ExportFormat::Csv, ExportFormat::Xlsx, ExportFormat::Pdf];

    /// Path segment used by the backend
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Pdf => "pdf",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "CSV",
            ExportFormat::Xlsx => "Excel",
            ExportFormat::Pdf => "PDF",
        }
    }
}

/// Optional date window forwarded to the backend. The backend widens the
/// bounds to whole days; the client only ships `YYYY-MM-DD` values.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DataFilter {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl DataFilter {
    /// Render the filter as a URL query string, empty when no bounds are set.
    pub fn query_string(&self) -> String {
        let mut params = Vec::new();
        if let Some(start) = self.start_date {
            params.push(format!("start_date={}", start));
        }
        if let Some(end) = self.end_date {
            params.push(format!("end_date={}", end));
        }
        if params.is_empty() {
            String::new()
        } else {
            format!("?{}", params.join("&"))
        }
    }
}

/// Percent-encode a value destined for a URL path segment.
pub fn encode_segment(segment: &str) -> String {
    urlencoding::encode(segment).into_owned()
}

/// HTTP client for the data-viewer backend.
///
/// An empty base URL means same-origin relative requests, which is the
/// common deployment (the backend serves the page and the API).
pub struct ApiClient {
    http: reqwest::Client,
    base: String,
}

impl ApiClient {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base: base.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base.trim_end_matches('/'), path)
    }

    /// List user databases.
    pub async fn list_databases(&self) -> Result<Vec<String>> {
        let url = self.url("/get_databases");
        tracing::debug!("Fetching database list from {}", url);

        let body = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        let databases = parse_name_list(&body)?;

        tracing::info!("Loaded {} databases", databases.len());
        Ok(databases)
    }

    /// List the tables of one database, in backend order.
    pub async fn list_tables(&self, database: &str) -> Result<Vec<String>> {
        let url = self.url("/get_tables");
        let request = TablesRequest {
            database_name: database.to_string(),
        };
        tracing::debug!("Fetching tables for '{}' from {}", database, url);

        let body = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        let tables = parse_name_list(&body)?;

        tracing::info!("Loaded {} tables for database '{}'", tables.len(), database);
        Ok(tables)
    }

    /// Fetch the contents of a table, optionally windowed by date.
    pub async fn fetch_table_data(
        &self,
        database: &str,
        table: &str,
        filter: &DataFilter,
    ) -> Result<TableData> {
        let url = format!(
            "{}{}",
            self.url(&format!(
                "/table_data/{}/{}",
                encode_segment(database),
                encode_segment(table)
            )),
            filter.query_string()
        );
        tracing::debug!("Fetching table data from {}", url);

        let body = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        let data: TableData = serde_json::from_str(&body)?;

        tracing::info!(
            "Loaded {} rows from {}.{}",
            data.rows.len(),
            database,
            table
        );
        Ok(data)
    }

    /// URL of the file-export endpoint; the browser follows it directly.
    pub fn download_url(
        &self,
        database: &str,
        table: &str,
        format: ExportFormat,
        filter: &DataFilter,
    ) -> String {
        format!(
            "{}{}",
            self.url(&format!(
                "/download/{}/{}/{}",
                encode_segment(database),
                encode_segment(table),
                format.as_str()
            )),
            filter.query_string()
        )
    }
}

/// Parse a bare JSON array of names, preserving backend order.
fn parse_name_list(body: &str) -> Result<Vec<String>> {
    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_request_serializes_to_wire_shape() {
        let request = TablesRequest {
            database_name: "sales".to_string(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value, serde_json::json!({ "database_name": "sales" }));
    }

    #[test]
    fn name_list_preserves_order() {
        let names = parse_name_list(r#"["t1","t2"]"#).unwrap();
        assert_eq!(names, vec!["t1", "t2"]);

        assert!(parse_name_list(r#"{"oops": 1}"#).is_err());
    }

    #[test]
    fn table_data_parses_columns_and_rows() {
        let body = r#"{
            "columns": [
                { "name": "id", "data_type": "int" },
                { "name": "note" }
            ],
            "rows": [[1, "first"], [2, null]]
        }"#;
        let data: TableData = serde_json::from_str(body).unwrap();
        assert_eq!(data.columns.len(), 2);
        assert_eq!(data.columns[0].data_type, "int");
        assert_eq!(data.columns[1].data_type, "");
        assert_eq!(data.rows[1][1], Value::Null);
    }

    #[test]
    fn base_url_joining_tolerates_trailing_slash() {
        let bare = ApiClient::new("");
        assert_eq!(bare.url("/get_tables"), "/get_tables");

        let host = ApiClient::new("http://localhost:5000");
        assert_eq!(host.url("/get_tables"), "http://localhost:5000/get_tables");

        let slashed = ApiClient::new("http://localhost:5000/");
        assert_eq!(slashed.url("/get_tables"), "http://localhost:5000/get_tables");
    }

    #[test]
    fn segments_are_percent_encoded() {
        assert_eq!(encode_segment("orders"), "orders");
        assert_eq!(encode_segment("a b"), "a%20b");
        assert_eq!(encode_segment("c/d"), "c%2Fd");
    }

    #[test]
    fn filter_query_string_orders_bounds() {
        let none = DataFilter::default();
        assert_eq!(none.query_string(), "");

        let start_only = DataFilter {
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1),
            end_date: None,
        };
        assert_eq!(start_only.query_string(), "?start_date=2024-01-01");

        let both = DataFilter {
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1),
            end_date: NaiveDate::from_ymd_opt(2024, 2, 29),
        };
        assert_eq!(
            both.query_string(),
            "?start_date=2024-01-01&end_date=2024-02-29"
        );
    }

    #[test]
    fn download_url_embeds_format_and_filter() {
        let api = ApiClient::new("http://localhost:5000");
        let filter = DataFilter {
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1),
            end_date: None,
        };
        assert_eq!(
            api.download_url("sales", "orders", ExportFormat::Xlsx, &filter),
            "http://localhost:5000/download/sales/orders/xlsx?start_date=2024-01-01"
        );
    }
}
