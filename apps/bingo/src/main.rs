mod card;
mod config;
mod errors;
mod layout;
mod phrases;
mod render;
mod routes;
mod state;

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::card::BingoCard;
use crate::config::Config;
use crate::phrases::{source_from_setting, PhraseSource};
use crate::render::SvgSurface;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting bingo card service v{}", env!("CARGO_PKG_VERSION"));

    // Build the card and size it to the configured container. No phrases yet, so the
    // first draw is an empty canvas.
    let mut rng = StdRng::from_entropy();
    let mut card = BingoCard::new(config.card.clone(), &mut rng)?;
    let mut surface = SvgSurface::new(card.canvas());
    let side = card.on_resize(&config.container, &mut surface);
    info!(
        side,
        squares = config.card.total_squares,
        per_row = config.card.squares_per_row,
        "Card canvas sized"
    );

    let state = AppState::new(card, config.clone());

    // One-shot phrase load. Requests served before it completes see an empty card.
    let source = source_from_setting(&config.phrases_source, config.phrases_fetch_timeout)?;
    tokio::spawn(load_phrases(source, state.clone()));

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Fetches the phrase pool once and hands it to the card. Failures are logged and
/// leave the card empty; there is no retry.
async fn load_phrases(source: Box<dyn PhraseSource>, state: AppState) {
    let phrases = match source.load().await {
        Ok(phrases) => phrases,
        Err(e) => {
            error!(source = %source.describe(), "Failed to load phrases: {e}");
            return;
        }
    };

    let mut card = state.card.lock().await;
    let mut surface = SvgSurface::new(card.canvas());
    let mut rng = StdRng::from_entropy();
    if let Err(e) = card.on_phrases_loaded(phrases, &mut rng, &mut surface) {
        error!("Phrase pool rejected: {e}");
        return;
    }
    info!(
        elements = surface.element_count(),
        "Initial card rendered"
    );
}
