use std::sync::Arc;

use tokio::sync::Mutex;

use crate::card::BingoCard;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The single card. Handlers lock it for the whole event so a click, resize or
    /// load is applied and redrawn before the next one starts.
    pub card: Arc<Mutex<BingoCard>>,
    pub config: Config,
}

impl AppState {
    pub fn new(card: BingoCard, config: Config) -> Self {
        Self {
            card: Arc::new(Mutex::new(card)),
            config,
        }
    }
}
