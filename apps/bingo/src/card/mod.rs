//! The bingo card: one model, one canvas, one style, driven by host events.
//!
//! `BingoCard` is what a host holds. It receives three kinds of event (the phrase
//! pool arriving, the container resizing, a pointer click) and redraws onto the
//! surface it is handed. It never owns a surface itself.

pub mod config;
pub mod interaction;
pub mod model;

use rand::Rng;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::layout::{self, compute_square_size, Canvas, HostContainer, SquareSize};
use crate::render::{self, random_color, DrawingSurface, RenderStyle};

pub use config::{CardConfig, InvalidCardConfig};
pub use interaction::Point;
pub use model::{CardModel, Square};

#[derive(Debug, Error)]
pub enum CardError {
    #[error("Insufficient phrases: need at least {required}, got {available}")]
    InsufficientPhrases { required: usize, available: usize },
}

/// Serializable view of the card state.
#[derive(Debug, Clone, Serialize)]
pub struct CardSnapshot {
    pub canvas_size: f32,
    pub active_color: String,
    pub squares: Vec<Square>,
}

#[derive(Debug, Clone)]
pub struct BingoCard {
    model: CardModel,
    canvas: Canvas,
    style: RenderStyle,
}

impl BingoCard {
    /// Builds an empty card. The active color is picked from `rng` once, here.
    pub fn new<R: Rng + ?Sized>(
        config: CardConfig,
        rng: &mut R,
    ) -> Result<Self, InvalidCardConfig> {
        let style = RenderStyle::for_config(&config, random_color(rng));
        let model = CardModel::new(config)?;
        info!(active_color = %style.highlight_fill, "Bingo card created");
        Ok(Self {
            model,
            canvas: Canvas::default(),
            style,
        })
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    pub fn squares(&self) -> &[Square] {
        self.model.squares()
    }

    pub fn phrases(&self) -> &[String] {
        self.model.phrases()
    }

    pub fn snapshot(&self) -> CardSnapshot {
        CardSnapshot {
            canvas_size: self.canvas.width,
            active_color: self.style.highlight_fill.clone(),
            squares: self.model.squares().to_vec(),
        }
    }

    fn square_size(&self) -> SquareSize {
        let config = self.model.config();
        compute_square_size(
            self.canvas.width,
            self.canvas.height,
            config.squares_per_row,
            config.gutter_size,
        )
    }

    /// Continuation of the one-shot phrase load: populate, then draw.
    pub fn on_phrases_loaded<R, S>(
        &mut self,
        phrases: Vec<String>,
        rng: &mut R,
        surface: &mut S,
    ) -> Result<(), CardError>
    where
        R: Rng + ?Sized,
        S: DrawingSurface + ?Sized,
    {
        let size = self.square_size();
        self.model.populate(phrases, size, rng)?;
        info!(
            squares = self.model.squares().len(),
            pool = self.model.phrases().len(),
            "Phrases loaded, card populated"
        );
        self.redraw(surface);
        Ok(())
    }

    /// New shuffle of the loaded pool, then draw.
    pub fn reshuffle<R, S>(&mut self, rng: &mut R, surface: &mut S) -> Result<(), CardError>
    where
        R: Rng + ?Sized,
        S: DrawingSurface + ?Sized,
    {
        let size = self.square_size();
        self.model.reshuffle(size, rng)?;
        info!("Card reshuffled");
        self.redraw(surface);
        Ok(())
    }

    /// Fits the canvas to `container`, re-lays-out squares and redraws without
    /// repopulating. Returns the new canvas side length.
    pub fn on_resize<S: DrawingSurface + ?Sized>(
        &mut self,
        container: &HostContainer,
        surface: &mut S,
    ) -> f32 {
        let config = self.model.config();
        let (per_row, gutter) = (config.squares_per_row, config.gutter_size);
        let side = layout::resize(
            &mut self.canvas,
            self.model.squares_mut(),
            container,
            per_row,
            gutter,
        );
        surface.set_size(self.canvas.width, self.canvas.height);
        self.redraw(surface);
        side
    }

    /// Toggles the clicked square (if any) and redraws without repopulating.
    pub fn on_click<S: DrawingSurface + ?Sized>(
        &mut self,
        point: Point,
        surface: &mut S,
    ) -> Option<Square> {
        let hit = interaction::handle_click(point, self.model.squares_mut()).cloned();
        if hit.is_some() {
            self.redraw(surface);
        }
        hit
    }

    /// Draws the current squares as they are.
    pub fn redraw<S: DrawingSurface + ?Sized>(&self, surface: &mut S) -> usize {
        let drawn = render::draw(surface, self.model.squares(), &self.style);
        debug!(drawn, "Card redrawn");
        drawn
    }
}
