use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

#[derive(Debug)]
pub enum AppError {
    /// Body was empty, not an object, or could not be parsed.
    InvalidRequest(String),
    /// Required form keys that were absent or empty, in declaration order.
    MissingFields(Vec<String>),
    /// Unexpected failure. `detail` is only exposed in debug mode.
    Internal { detail: String, expose: bool },
}

impl AppError {
    pub fn internal(detail: impl Into<String>, expose: bool) -> Self {
        AppError::Internal {
            detail: detail.into(),
            expose,
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::InvalidRequest(msg) => write!(f, "Invalid request: {msg}"),
            AppError::MissingFields(fields) => {
                write!(f, "Missing fields: {}", fields.join(", "))
            }
            AppError::Internal { detail, .. } => write!(f, "Internal Error: {detail}"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::InvalidRequest(msg) => {
                tracing::debug!("Rejected submission: {msg}");
                (
                    StatusCode::BAD_REQUEST,
                    json!({ "erro": "JSON vazio ou inválido" }),
                )
            }
            AppError::MissingFields(fields) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "erro": "Campos obrigatórios ausentes",
                    "campos_faltantes": fields,
                }),
            ),
            AppError::Internal { detail, expose } => {
                tracing::error!("Internal error: {detail}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "erro": "Erro interno no servidor",
                        "detalhes": expose.then(|| detail.clone()),
                    }),
                )
            }
        };

        (status, axum::Json(body)).into_response()
    }
}
