pub mod card;
pub mod health;
pub mod phrases;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/card", get(card::handle_get_card))
        .route("/api/v1/card/svg", get(card::handle_get_card_svg))
        .route("/api/v1/card/click", post(card::handle_click))
        .route("/api/v1/card/resize", post(card::handle_resize))
        .route("/api/v1/card/shuffle", post(card::handle_shuffle))
        .route("/api/v1/phrases", get(phrases::handle_get_phrases))
        .route("/api/v1/phrases/reload", post(phrases::handle_reload_phrases))
        .with_state(state)
}
