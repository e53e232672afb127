// Card geometry: square sizing, canvas resizing, text measurement and wrapping.
// Everything here is pure and synchronous; the host serializes calls.

pub mod font_metrics;
pub mod wrap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::card::model::Square;

pub use font_metrics::{FontFamily, FontSpec};
pub use wrap::wrap_for_width;

/// Pixel dimensions of the drawing surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
    pub width: f32,
    pub height: f32,
}

/// Pixel size of a single grid square.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SquareSize {
    pub height: f32,
    pub width: f32,
}

/// Edge padding of the container hosting the canvas. Only `left` and `right`
/// take part in sizing; the canvas is always square.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Padding {
    #[serde(default)]
    pub left: f32,
    #[serde(default)]
    pub right: f32,
    #[serde(default)]
    pub top: f32,
    #[serde(default)]
    pub bottom: f32,
}

impl Padding {
    pub fn uniform(px: f32) -> Self {
        Self {
            left: px,
            right: px,
            top: px,
            bottom: px,
        }
    }
}

/// The element the canvas lives in: its inner width plus padding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct HostContainer {
    pub inner_width: f32,
    #[serde(default)]
    pub padding: Padding,
}

/// Size of one square given the canvas dimensions and grid shape.
///
/// The grid is square, so `squares_per_row` divides both axes.
pub fn compute_square_size(
    canvas_width: f32,
    canvas_height: f32,
    squares_per_row: usize,
    gutter_size: f32,
) -> SquareSize {
    let per_row = squares_per_row.max(1) as f32;
    SquareSize {
        height: canvas_height / per_row - gutter_size,
        width: canvas_width / per_row - gutter_size,
    }
}

/// Top-left corner of the square at the given 1-based row and column.
pub fn square_origin(row: usize, column_in_row: usize, size: SquareSize) -> (f32, f32) {
    let x = size.width * column_in_row.saturating_sub(1) as f32;
    let y = size.height * row.saturating_sub(1) as f32;
    (x, y)
}

/// Applies `size` to every square, recomputing x/y from row and column.
pub fn apply_square_size(squares: &mut [Square], size: SquareSize) {
    for square in squares.iter_mut() {
        let (x, y) = square_origin(square.row, square.column_in_row, size);
        square.x = x;
        square.y = y;
        square.width = size.width;
        square.height = size.height;
    }
}

/// Resizes the canvas to fit `container` and re-lays-out the existing squares.
///
/// The side length is `inner_width - (padding.left + padding.right)` and is used for
/// both canvas axes. Texts, ids and highlight state are untouched. Returns the new
/// side length, which may be zero or negative when padding exceeds the container.
/// A non-finite side (overflowing or NaN input) collapses to zero so no square
/// geometry ends up NaN or infinite.
pub fn resize(
    canvas: &mut Canvas,
    squares: &mut [Square],
    container: &HostContainer,
    squares_per_row: usize,
    gutter_size: f32,
) -> f32 {
    let mut side = container.inner_width - (container.padding.left + container.padding.right);
    if !side.is_finite() {
        warn!(
            inner_width = container.inner_width,
            "Container width is not finite, collapsing canvas to zero"
        );
        side = 0.0;
    }
    if side <= 0.0 {
        warn!(side, "Canvas resized to a non-positive side length");
    }
    canvas.width = side;
    canvas.height = side;

    let size = compute_square_size(canvas.width, canvas.height, squares_per_row, gutter_size);
    apply_square_size(squares, size);
    debug!(
        side,
        square_width = size.width,
        square_height = size.height,
        squares = squares.len(),
        "Canvas resized"
    );
    side
}
