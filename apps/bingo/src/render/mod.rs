//! Card renderer.
//!
//! Draws squares onto any [`DrawingSurface`], the minimal 2D-canvas contract: clear,
//! filled and stroked rectangles, text with a settable font, and text measurement
//! for the current font. The renderer only reads squares; the surface is the only
//! thing it mutates.

pub mod svg;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::card::model::Square;
use crate::card::CardConfig;
use crate::layout::{wrap_for_width, FontSpec};

pub use svg::SvgSurface;

pub const DEFAULT_FILL: &str = "white";
pub const FREE_SPACE_TEXT_COLOR: &str = "red";
pub const NORMAL_TEXT_COLOR: &str = "black";

/// The drawing contract the renderer depends on.
pub trait DrawingSurface {
    /// Called when the canvas is resized. Surfaces with a fixed size can ignore it.
    fn set_size(&mut self, _width: f32, _height: f32) {}
    /// Wipes the whole surface.
    fn clear(&mut self);
    fn set_fill_style(&mut self, color: &str);
    fn set_font(&mut self, font: FontSpec);
    /// Fills a rectangle with the current fill style and strokes its outline.
    fn fill_and_stroke_rect(&mut self, x: f32, y: f32, width: f32, height: f32);
    /// Draws `text` with its left baseline at (x, y), in the current fill style and font.
    fn fill_text(&mut self, text: &str, x: f32, y: f32);
    /// Width of `text` in pixels for the current font.
    fn measure_text(&self, text: &str) -> f32;
}

/// Colors and typography used for one draw pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderStyle {
    pub default_fill: String,
    /// The active color: clicked squares and the free space.
    pub highlight_fill: String,
    pub free_space_text_color: String,
    pub normal_text_color: String,
    pub font: FontSpec,
    pub line_spacing: f32,
}

impl RenderStyle {
    pub fn for_config(config: &CardConfig, highlight_fill: String) -> Self {
        Self {
            default_fill: DEFAULT_FILL.to_string(),
            highlight_fill,
            free_space_text_color: FREE_SPACE_TEXT_COLOR.to_string(),
            normal_text_color: NORMAL_TEXT_COLOR.to_string(),
            font: config.font_spec(),
            line_spacing: config.line_spacing,
        }
    }

    pub fn fill_for(&self, square: &Square) -> &str {
        if square.shows_active_fill() {
            &self.highlight_fill
        } else {
            &self.default_fill
        }
    }

    pub fn text_color_for(&self, square: &Square) -> &str {
        if square.is_free_space {
            &self.free_space_text_color
        } else {
            &self.normal_text_color
        }
    }
}

/// A random `#rrggbb` color.
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("#{:06x}", rng.gen_range(0..0xFF_FFFFu32))
}

/// Clears the surface once, then draws every square in order.
///
/// Returns how many squares were drawn. Squares without a positive area (after a
/// degenerate resize) are skipped.
pub fn draw<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    squares: &[Square],
    style: &RenderStyle,
) -> usize {
    surface.clear();

    let mut drawn = 0;
    for square in squares {
        if !square.has_drawable_area() {
            debug!(id = %square.id, "Skipping square with no drawable area");
            continue;
        }
        draw_square(surface, square, style);
        drawn += 1;
    }
    drawn
}

fn draw_square<S: DrawingSurface + ?Sized>(surface: &mut S, square: &Square, style: &RenderStyle) {
    surface.set_fill_style(style.fill_for(square));
    surface.fill_and_stroke_rect(square.x, square.y, square.width, square.height);

    surface.set_fill_style(style.text_color_for(square));
    surface.set_font(style.font);

    let lines = wrap_for_width(&square.text, square.width, |s| surface.measure_text(s));
    let font_size = style.font.size_px;
    let line_count = lines.len() as f32;
    let total_text_height = line_count * font_size + style.line_spacing;
    let baseline_start =
        (square.height - total_text_height) / 2.0 + square.y + style.line_spacing * line_count;

    for (i, line) in lines.iter().enumerate() {
        let lx = square.x + square.width / 2.0 - surface.measure_text(line) / 2.0;
        let ly = baseline_start + font_size * (i + 1) as f32;
        surface.fill_text(line, lx, ly);
    }
}
