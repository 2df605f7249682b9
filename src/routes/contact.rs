use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::error::AppError;
use crate::state::SharedState;
use crate::submission::{fields, parser, pipeline, timestamp_now};

pub const SUCCESS_MESSAGE: &str = "Mensagem enviada com sucesso!";

pub async fn save(
    State(state): State<SharedState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, AppError> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok());

    let raw = parser::parse_body(content_type, &body).map_err(AppError::InvalidRequest)?;

    let submission = fields::extract(&raw, timestamp_now())?;
    let timestamp = submission.submitted_at.clone();

    // Dispatch runs on its own task so a panicking collaborator becomes a 500
    // instead of a dropped connection.
    let debug = state.config.debug;
    let outcome = tokio::spawn(async move { pipeline::run(&state, &submission).await })
        .await
        .map_err(|e| AppError::internal(format!("Dispatch task failed: {e}"), debug))?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "mensagem": SUCCESS_MESSAGE,
            "email_enviado": outcome.email_sent,
            "timestamp": timestamp,
        })),
    )
        .into_response())
}
