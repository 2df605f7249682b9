pub mod auth;
pub mod client;

use async_trait::async_trait;
use serde_json::Value;

use crate::submission::Submission;

pub use client::GoogleSheets;

/// One spreadsheet row as returned by the store.
pub type Row = Vec<Value>;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppendSummary {
    pub updated_rows: u64,
    pub updated_cells: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StoreError {
    /// No store handle was established at startup.
    Unavailable,
    Write(String),
    Read(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Unavailable => write!(f, "Record store is not connected"),
            StoreError::Write(msg) => write!(f, "Record store write failed: {msg}"),
            StoreError::Read(msg) => write!(f, "Record store read failed: {msg}"),
        }
    }
}

#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Insert one row after the last row of the configured range, with values
    /// interpreted as if typed by a user.
    async fn append(&self, row: &[String]) -> Result<AppendSummary, StoreError>;

    /// Every row of the configured read range, header included.
    async fn fetch_all(&self) -> Result<Vec<Row>, StoreError>;
}

/// The tail of the sheet plus the size of the whole range.
#[derive(Debug, Clone, PartialEq)]
pub struct RecentRows {
    pub total_rows: usize,
    pub rows: Vec<Row>,
}

impl RecentRows {
    /// Row count without the header line.
    pub fn records(&self) -> usize {
        self.total_rows.saturating_sub(1)
    }
}

pub async fn append_submission(
    store: Option<&dyn RecordStore>,
    submission: &Submission,
) -> Result<AppendSummary, StoreError> {
    let store = store.ok_or(StoreError::Unavailable)?;
    store.append(&submission.row()).await
}

pub async fn fetch_recent(store: Option<&dyn RecordStore>, n: usize) -> Result<RecentRows, StoreError> {
    let store = store.ok_or(StoreError::Unavailable)?;
    let mut rows = store.fetch_all().await?;
    let total_rows = rows.len();
    let rows = rows.split_off(total_rows.saturating_sub(n));
    Ok(RecentRows { total_rows, rows })
}
