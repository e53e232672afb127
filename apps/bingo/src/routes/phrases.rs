use axum::{extract::State, Json};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::phrases::source_from_setting;
use crate::render::SvgSurface;
use crate::state::AppState;

#[derive(Serialize)]
pub struct ReloadResponse {
    pub phrases: usize,
    pub svg: String,
}

/// GET /api/v1/phrases
pub async fn handle_get_phrases(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.card.lock().await.phrases().to_vec())
}

/// POST /api/v1/phrases/reload
///
/// Fetches the configured phrase source again and repopulates the card from it.
/// The card lock is only taken once the fetch has succeeded, and a rejected pool
/// leaves the current squares in place.
pub async fn handle_reload_phrases(
    State(state): State<AppState>,
) -> Result<Json<ReloadResponse>, AppError> {
    let source = source_from_setting(
        &state.config.phrases_source,
        state.config.phrases_fetch_timeout,
    )?;
    let phrases = source.load().await?;

    let mut card = state.card.lock().await;
    let mut surface = SvgSurface::new(card.canvas());
    let mut rng = StdRng::from_entropy();
    card.on_phrases_loaded(phrases, &mut rng, &mut surface)?;
    info!(source = %source.describe(), pool = card.phrases().len(), "Phrases reloaded");

    Ok(Json(ReloadResponse {
        phrases: card.phrases().len(),
        svg: surface.to_svg(),
    }))
}
