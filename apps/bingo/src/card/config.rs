use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::layout::{FontFamily, FontSpec};

/// A card configuration that breaks a grid invariant. Only raised when a card is built.
#[derive(Debug, Error)]
#[error("Invalid card config: {0}")]
pub struct InvalidCardConfig(pub String);

/// Grid shape, free-space placement and typography for one bingo card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardConfig {
    pub total_squares: usize,
    pub squares_per_row: usize,
    /// Subtracted from each square's width and height. Positions are not offset by it.
    pub gutter_size: f32,
    /// 0-based index of the free space in row-major order.
    pub free_space_index: usize,
    pub free_space_text: String,
    pub font: FontFamily,
    pub font_size_px: f32,
    pub line_height: f32,
    /// Extra vertical space folded into the text block centering.
    pub line_spacing: f32,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            total_squares: 25,
            squares_per_row: 5,
            gutter_size: 0.0,
            free_space_index: 12,
            free_space_text: "Moore".to_string(),
            font: FontFamily::Serif,
            font_size_px: 20.0,
            line_height: 1.0,
            line_spacing: 2.0,
        }
    }
}

impl CardConfig {
    /// Checks the grid invariants. Called once when a card is built.
    pub fn validate(&self) -> Result<(), InvalidCardConfig> {
        if self.squares_per_row == 0 {
            return Err(InvalidCardConfig(
                "squares_per_row must be at least 1".to_string(),
            ));
        }
        if self.total_squares == 0 {
            return Err(InvalidCardConfig(
                "total_squares must be at least 1".to_string(),
            ));
        }
        if self.total_squares % self.squares_per_row != 0 {
            return Err(InvalidCardConfig(format!(
                "total_squares ({}) must be a multiple of squares_per_row ({})",
                self.total_squares, self.squares_per_row
            )));
        }
        if self.free_space_index >= self.total_squares {
            return Err(InvalidCardConfig(format!(
                "free_space_index ({}) must be below total_squares ({})",
                self.free_space_index, self.total_squares
            )));
        }
        if !(self.gutter_size >= 0.0) {
            return Err(InvalidCardConfig(format!(
                "gutter_size must be non-negative, got {}",
                self.gutter_size
            )));
        }
        if !(self.font_size_px > 0.0) {
            return Err(InvalidCardConfig(format!(
                "font_size_px must be positive, got {}",
                self.font_size_px
            )));
        }
        Ok(())
    }

    /// Number of phrases a pool must hold to fill every non-free square.
    pub fn phrases_required(&self) -> usize {
        self.total_squares.saturating_sub(1)
    }

    pub fn font_spec(&self) -> FontSpec {
        FontSpec::new(self.font, self.font_size_px)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = CardConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.phrases_required(), 24);
        assert_eq!(config.font_spec().to_string(), "20px serif");
    }

    #[test]
    fn test_rejects_ragged_grid() {
        let config = CardConfig { total_squares: 24, ..CardConfig::default() };
        assert!(matches!(config.validate(), Err(InvalidCardConfig(_))));
    }

    #[test]
    fn test_rejects_zero_squares_per_row() {
        let config = CardConfig { squares_per_row: 0, ..CardConfig::default() };
        assert!(matches!(config.validate(), Err(InvalidCardConfig(_))));
    }

    #[test]
    fn test_rejects_free_space_out_of_range() {
        let config = CardConfig { free_space_index: 25, ..CardConfig::default() };
        assert!(matches!(config.validate(), Err(InvalidCardConfig(_))));

        let last = CardConfig { free_space_index: 24, ..CardConfig::default() };
        assert!(last.validate().is_ok());
    }

    #[test]
    fn test_rejects_negative_gutter_and_nan_font_size() {
        let gutter = CardConfig { gutter_size: -1.0, ..CardConfig::default() };
        assert!(gutter.validate().is_err());

        let font = CardConfig { font_size_px: f32::NAN, ..CardConfig::default() };
        assert!(font.validate().is_err());
    }
}
