pub mod contact;
pub mod records;
pub mod status;

use axum::routing::{get, post};
use axum::Router;

use crate::state::SharedState;

pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/", get(status::home))
        .route("/teste", get(status::teste))
        .route("/health", get(status::health))
        .route("/api/excel/salvar", post(contact::save))
        .route("/api/dados/ultimos", get(records::latest))
}
