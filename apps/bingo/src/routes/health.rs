use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns service status plus how many squares the card currently holds
/// (0 until the phrase load has completed).
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let squares = state.card.lock().await.squares().len();
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "bingo-card",
        "squares": squares
    }))
}
