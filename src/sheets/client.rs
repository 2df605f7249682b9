use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;
use serde::Deserialize;
use serde_json::json;

use super::auth::{ServiceAccountKey, TokenSource};
use super::{AppendSummary, RecordStore, Row, StoreError};
use crate::config::SheetsConfig;

/// Google Sheets v4 `values` API bound to one spreadsheet.
pub struct GoogleSheets {
    http: reqwest::Client,
    auth: TokenSource,
    api_base: String,
    spreadsheet_id: String,
    append_range: String,
    read_range: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct UpdateStats {
    updated_rows: u64,
    updated_cells: u64,
}

#[derive(Debug, Deserialize)]
struct AppendResponse {
    #[serde(default)]
    updates: UpdateStats,
}

#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Row>,
}

impl GoogleSheets {
    /// Load the service-account key and bind to the configured spreadsheet.
    pub fn connect(config: &SheetsConfig) -> Result<Self, String> {
        let credentials = config
            .credentials_file
            .as_deref()
            .ok_or("GOOGLE_APPLICATION_CREDENTIALS is not set")?;
        let spreadsheet_id = config
            .spreadsheet_id
            .clone()
            .ok_or("SPREADSHEET_ID is not set")?;

        let key = ServiceAccountKey::from_file(credentials)?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| format!("Failed to build HTTP client: {e}"))?;

        let auth = TokenSource::new(http.clone(), key)?;

        tracing::info!(
            "Sheets client ready for spreadsheet {spreadsheet_id} as {}",
            auth.client_email()
        );

        Ok(Self {
            http,
            auth,
            api_base: config.api_base.clone(),
            spreadsheet_id,
            append_range: config.append_range.clone(),
            read_range: config.read_range.clone(),
        })
    }

    /// `{base}/v4/spreadsheets/{id}/values/{range}{suffix}`, with the range
    /// percent-encoded as a single path segment.
    fn values_url(&self, range: &str, suffix: &str) -> Result<Url, String> {
        let mut url =
            Url::parse(&self.api_base).map_err(|e| format!("Invalid Sheets API base: {e}"))?;

        url.path_segments_mut()
            .map_err(|_| "Sheets API base cannot carry a path".to_string())?
            .pop_if_empty()
            .extend(["v4", "spreadsheets", self.spreadsheet_id.as_str(), "values"])
            .push(&format!("{range}{suffix}"));

        Ok(url)
    }
}

async fn ensure_success(resp: reqwest::Response) -> Result<reqwest::Response, String> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let body = resp
        .text()
        .await
        .unwrap_or_default()
        .chars()
        .take(512)
        .collect::<String>();
    Err(format!("Sheets API returned {status}: {body}"))
}

#[async_trait]
impl RecordStore for GoogleSheets {
    async fn append(&self, row: &[String]) -> Result<AppendSummary, StoreError> {
        let mut url = self
            .values_url(&self.append_range, ":append")
            .map_err(StoreError::Write)?;
        url.query_pairs_mut()
            .append_pair("valueInputOption", "USER_ENTERED")
            .append_pair("insertDataOption", "INSERT_ROWS");

        let token = self.auth.access_token().await.map_err(StoreError::Write)?;

        let resp = self
            .http
            .post(url)
            .bearer_auth(token)
            .json(&json!({ "values": [row] }))
            .send()
            .await
            .map_err(|e| StoreError::Write(format!("Sheets request failed: {e}")))?;

        let resp = ensure_success(resp).await.map_err(StoreError::Write)?;

        let body: AppendResponse = resp
            .json()
            .await
            .map_err(|e| StoreError::Write(format!("Invalid append response: {e}")))?;

        Ok(AppendSummary {
            updated_rows: body.updates.updated_rows,
            updated_cells: body.updates.updated_cells,
        })
    }

    async fn fetch_all(&self) -> Result<Vec<Row>, StoreError> {
        let mut url = self
            .values_url(&self.read_range, "")
            .map_err(StoreError::Read)?;
        url.query_pairs_mut().append_pair("majorDimension", "ROWS");

        let token = self.auth.access_token().await.map_err(StoreError::Read)?;

        let resp = self
            .http
            .get(url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| StoreError::Read(format!("Sheets request failed: {e}")))?;

        let resp = ensure_success(resp).await.map_err(StoreError::Read)?;

        let range: ValueRange = resp
            .json()
            .await
            .map_err(|e| StoreError::Read(format!("Invalid values response: {e}")))?;

        Ok(range.values)
    }
}
