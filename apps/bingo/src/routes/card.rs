use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
    Json,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use crate::card::{CardSnapshot, Point, Square};
use crate::errors::AppError;
use crate::layout::HostContainer;
use crate::render::SvgSurface;
use crate::state::AppState;

#[derive(Serialize)]
pub struct ClickResponse {
    pub hit: Option<Square>,
    pub svg: String,
}

#[derive(Serialize)]
pub struct ResizeResponse {
    pub canvas_size: f32,
    pub svg: String,
}

#[derive(Serialize)]
pub struct SvgResponse {
    pub svg: String,
}

/// GET /api/v1/card
pub async fn handle_get_card(State(state): State<AppState>) -> Json<CardSnapshot> {
    Json(state.card.lock().await.snapshot())
}

/// GET /api/v1/card/svg
pub async fn handle_get_card_svg(State(state): State<AppState>) -> impl IntoResponse {
    let card = state.card.lock().await;
    let mut surface = SvgSurface::new(card.canvas());
    card.redraw(&mut surface);
    ([(header::CONTENT_TYPE, "image/svg+xml")], surface.to_svg())
}

/// POST /api/v1/card/click
///
/// A click that misses every square is not an error: `hit` is null and the SVG is
/// the unchanged card.
pub async fn handle_click(
    State(state): State<AppState>,
    Json(point): Json<Point>,
) -> Json<ClickResponse> {
    let mut card = state.card.lock().await;
    let mut surface = SvgSurface::new(card.canvas());
    let hit = card.on_click(point, &mut surface);
    if hit.is_none() {
        card.redraw(&mut surface);
    }
    Json(ClickResponse {
        hit,
        svg: surface.to_svg(),
    })
}

/// POST /api/v1/card/resize
pub async fn handle_resize(
    State(state): State<AppState>,
    Json(container): Json<HostContainer>,
) -> Json<ResizeResponse> {
    let mut card = state.card.lock().await;
    let mut surface = SvgSurface::new(card.canvas());
    let canvas_size = card.on_resize(&container, &mut surface);
    Json(ResizeResponse {
        canvas_size,
        svg: surface.to_svg(),
    })
}

/// POST /api/v1/card/shuffle
pub async fn handle_shuffle(State(state): State<AppState>) -> Result<Json<SvgResponse>, AppError> {
    let mut card = state.card.lock().await;
    let mut surface = SvgSurface::new(card.canvas());
    let mut rng = StdRng::from_entropy();
    card.reshuffle(&mut rng, &mut surface)?;
    Ok(Json(SvgResponse {
        svg: surface.to_svg(),
    }))
}
