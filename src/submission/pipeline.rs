use crate::notify;
use crate::sheets::{self, AppendSummary, StoreError};
use crate::state::AppState;

use super::Submission;

/// What happened downstream for one accepted submission.
#[derive(Debug, Clone, PartialEq)]
pub struct DispatchOutcome {
    pub stored: Result<AppendSummary, StoreError>,
    pub email_sent: bool,
}

/// Append the submission to the record store, then send the notification.
///
/// Neither step aborts the other: a failed or missing store is logged and the
/// email is still attempted.
pub async fn run(state: &AppState, submission: &Submission) -> DispatchOutcome {
    let stored = sheets::append_submission(state.store.as_deref(), submission).await;

    match &stored {
        Ok(summary) => tracing::info!(
            "Saved submission to sheet: {} cells updated",
            summary.updated_cells
        ),
        Err(StoreError::Unavailable) => {
            tracing::warn!("Record store not available, skipping sheet write")
        }
        Err(e) => tracing::error!("{e}"),
    }

    let email_sent = notify::deliver(state.notifier.as_ref(), submission).await;

    DispatchOutcome { stored, email_sent }
}
