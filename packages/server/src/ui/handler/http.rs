//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{Json, extract::State};

use crate::{
    infrastructure::dto::{conversion::presence_update_message, websocket::ServerMessage},
    ui::state::AppState,
};

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Debug endpoint returning the payload the next broadcast would carry
pub async fn debug_presence(State(state): State<Arc<AppState>>) -> Json<ServerMessage> {
    let presences = state
        .broadcast_presence_usecase
        .build_presence_list()
        .await;
    Json(presence_update_message(presences))
}
