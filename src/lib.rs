pub mod config;
pub mod error;
pub mod state;
pub mod routes;
pub mod sheets;
pub mod notify;
pub mod submission;

use std::sync::Arc;

use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, HeaderValue, Method};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::config::SheetsConfig;
use crate::sheets::{GoogleSheets, RecordStore};
use crate::state::SharedState;

/// Connect to the spreadsheet, or log why not and carry on without it.
pub fn connect_store(config: &SheetsConfig) -> Option<Arc<dyn RecordStore>> {
    match GoogleSheets::connect(config) {
        Ok(sheets) => {
            tracing::info!("Connected to Google Sheets");
            let store: Arc<dyn RecordStore> = Arc::new(sheets);
            Some(store)
        }
        Err(e) => {
            tracing::warn!("Google Sheets not available: {e}");
            None
        }
    }
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| match o.parse::<HeaderValue>() {
            Ok(v) => Some(v),
            Err(e) => {
                tracing::warn!("Ignoring invalid CORS origin '{o}': {e}");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
}

pub fn build_app(state: SharedState) -> Router {
    let middleware = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-content-type-options"),
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-frame-options"),
            HeaderValue::from_static("DENY"),
        ))
        .layer(RequestBodyLimitLayer::new(state.config.max_body_size))
        .layer(cors_layer(&state.config.cors_origins));

    Router::new()
        .merge(routes::routes())
        .layer(middleware)
        .with_state(state)
}
