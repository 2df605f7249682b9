use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::sheets;
use crate::state::SharedState;

pub const RECENT_LIMIT: usize = 5;

/// Diagnostic listing of the last rows written to the sheet.
pub async fn latest(State(state): State<SharedState>) -> Response {
    match sheets::fetch_recent(state.store.as_deref(), RECENT_LIMIT).await {
        Ok(recent) => Json(json!({
            "total_registros": recent.records(),
            "ultimos_registros": recent.rows,
        }))
        .into_response(),
        Err(e) => {
            tracing::error!("{e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "erro": e.to_string() })),
            )
                .into_response()
        }
    }
}
