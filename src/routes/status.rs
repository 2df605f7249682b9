use axum::extract::State;
use axum::Json;
use chrono::Local;
use serde_json::{json, Value};

use crate::state::SharedState;

/// Local time without offset, microsecond precision.
fn iso_now() -> String {
    Local::now()
        .naive_local()
        .format("%Y-%m-%dT%H:%M:%S%.6f")
        .to_string()
}

pub async fn home() -> Json<Value> {
    Json(json!({
        "mensagem": "API de contato está funcionando!",
        "status": "online",
        "endpoints": {
            "/api/excel/salvar": "POST - Envia dados para o Google Sheets",
            "/api/dados/ultimos": "GET - Últimos registros salvos",
            "/teste": "GET - Testa a conexão",
            "/health": "GET - Saúde da API",
        },
    }))
}

pub async fn teste() -> Json<Value> {
    Json(json!({
        "status": "conectado",
        "mensagem": "API está funcionando!",
        "timestamp": iso_now(),
    }))
}

pub async fn health(State(state): State<SharedState>) -> Json<Value> {
    let mail = &state.config.mail;

    Json(json!({
        "status": "healthy",
        "timestamp": iso_now(),
        "sheets_connected": state.store.is_some(),
        "email_config": {
            "remetente": mail.sender_configured(),
            "destinatario": mail.recipient_configured(),
        },
    }))
}
