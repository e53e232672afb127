use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::card::model::Square;

/// Pointer position relative to the drawing surface's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

/// Index of the first square whose box contains `point`, bounds inclusive.
pub fn hit_test(point: Point, squares: &[Square]) -> Option<usize> {
    squares.iter().position(|s| s.contains(point.x, point.y))
}

/// Toggles the highlight of the clicked square and returns it.
///
/// The free space is not special-cased: its flag flips like any other square even
/// though it always renders in the active color. A click outside every square
/// changes nothing and returns `None`.
pub fn handle_click(point: Point, squares: &mut [Square]) -> Option<&Square> {
    let Some(idx) = hit_test(point, squares) else {
        debug!(x = point.x, y = point.y, "Click missed every square");
        return None;
    };

    let square = &mut squares[idx];
    square.toggle_highlight();
    debug!(
        id = %square.id,
        highlighted = square.is_highlighted,
        free_space = square.is_free_space,
        "Square toggled"
    );
    Some(&*square)
}
