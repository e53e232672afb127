//! Card model: the square entity, phrase shuffling and grid population.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::card::config::{CardConfig, InvalidCardConfig};
use crate::card::CardError;
use crate::layout::{square_origin, SquareSize};

// ────────────────────────────────────────────────────────────────────────────
// Square
// ────────────────────────────────────────────────────────────────────────────

/// One cell of the card.
///
/// Created in a batch by [`CardModel::populate`]. Geometry is rewritten in place on
/// resize and `is_highlighted` on click; nothing else changes until the next populate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Square {
    /// `"Square-<n>"`, n being the 1-based row-major index.
    pub id: String,
    /// 1-based.
    pub row: usize,
    /// 1-based position within the row.
    pub column_in_row: usize,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub text: String,
    pub is_free_space: bool,
    pub is_highlighted: bool,
}

impl Square {
    /// Inclusive bounding-box test on all four edges.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }

    /// Flips the highlight. Applying it twice restores the original state.
    pub fn toggle_highlight(&mut self) {
        self.is_highlighted = !self.is_highlighted;
    }

    /// Whether the square is painted in the active color. The free space always is.
    pub fn shows_active_fill(&self) -> bool {
        self.is_free_space || self.is_highlighted
    }

    pub fn has_drawable_area(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Shuffle
// ────────────────────────────────────────────────────────────────────────────

/// In-place Fisher–Yates: for i from len-1 down to 1, swap i with a uniform pick in [0, i].
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Card model
// ────────────────────────────────────────────────────────────────────────────

/// Owns the card configuration, the accepted phrase pool and the live squares.
#[derive(Debug, Clone)]
pub struct CardModel {
    config: CardConfig,
    phrases: Vec<String>,
    squares: Vec<Square>,
}

impl CardModel {
    pub fn new(config: CardConfig) -> Result<Self, InvalidCardConfig> {
        config.validate()?;
        Ok(Self {
            config,
            phrases: Vec::new(),
            squares: Vec::new(),
        })
    }

    pub fn config(&self) -> &CardConfig {
        &self.config
    }

    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    pub fn squares_mut(&mut self) -> &mut [Square] {
        &mut self.squares
    }

    /// The most recently accepted phrase pool, in its original order.
    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    /// Replaces every square with a freshly shuffled assignment of `phrases`.
    ///
    /// Phrases fill squares in row-major order; the free-space index is skipped in the
    /// phrase sequence and receives the configured free-space text instead. Fails with
    /// [`CardError::InsufficientPhrases`] before touching any state when the pool has
    /// fewer than `total_squares - 1` entries.
    pub fn populate<R: Rng + ?Sized>(
        &mut self,
        phrases: Vec<String>,
        size: SquareSize,
        rng: &mut R,
    ) -> Result<&[Square], CardError> {
        let required = self.config.phrases_required();
        if phrases.len() < required {
            return Err(CardError::InsufficientPhrases {
                required,
                available: phrases.len(),
            });
        }

        let mut shuffled = phrases.clone();
        shuffle(&mut shuffled, rng);
        self.squares = self.build_squares(shuffled, size);
        self.phrases = phrases;

        debug!(
            squares = self.squares.len(),
            pool = self.phrases.len(),
            "Card populated"
        );
        Ok(&self.squares)
    }

    /// Repopulates from the stored pool with a new shuffle. Highlights are cleared.
    pub fn reshuffle<R: Rng + ?Sized>(
        &mut self,
        size: SquareSize,
        rng: &mut R,
    ) -> Result<&[Square], CardError> {
        let pool = self.phrases.clone();
        self.populate(pool, size, rng)
    }

    fn build_squares(&self, shuffled: Vec<String>, size: SquareSize) -> Vec<Square> {
        let per_row = self.config.squares_per_row;
        let mut pool = shuffled.into_iter();

        (0..self.config.total_squares)
            .map(|idx| {
                let row = idx / per_row + 1;
                let column_in_row = idx % per_row + 1;
                let (x, y) = square_origin(row, column_in_row, size);
                let is_free_space = idx == self.config.free_space_index;
                let text = if is_free_space {
                    self.config.free_space_text.clone()
                } else {
                    // Length was checked against total_squares - 1 above.
                    pool.next().unwrap_or_default()
                };

                Square {
                    id: format!("Square-{}", idx + 1),
                    row,
                    column_in_row,
                    x,
                    y,
                    width: size.width,
                    height: size.height,
                    text,
                    is_free_space,
                    is_highlighted: false,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn phrases(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("phrase {i}")).collect()
    }

    fn size() -> SquareSize {
        SquareSize { height: 100.0, width: 100.0 }
    }

    fn sorted(mut v: Vec<String>) -> Vec<String> {
        v.sort();
        v
    }

    #[test]
    fn test_shuffle_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut items: Vec<u32> = (0..50).collect();
        shuffle(&mut items, &mut rng);
        let mut sorted_items = items.clone();
        sorted_items.sort();
        assert_eq!(sorted_items, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn test_shuffle_handles_empty_and_single() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut empty: Vec<u8> = vec![];
        shuffle(&mut empty, &mut rng);
        let mut one = vec![9];
        shuffle(&mut one, &mut rng);
        assert_eq!(one, vec![9]);
    }

    #[test]
    fn test_shuffle_reaches_every_position() {
        // Each of 4 elements should land in slot 0 at least once over many seeds.
        let mut seen = HashSet::new();
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut items = [0, 1, 2, 3];
            shuffle(&mut items, &mut rng);
            seen.insert(items[0]);
        }
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn test_populate_grid_coverage() {
        let mut model = CardModel::new(CardConfig::default()).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let squares = model.populate(phrases(24), size(), &mut rng).unwrap();

        assert_eq!(squares.len(), 25);
        let cells: HashSet<(usize, usize)> =
            squares.iter().map(|s| (s.row, s.column_in_row)).collect();
        assert_eq!(cells.len(), 25);
        for (idx, square) in squares.iter().enumerate() {
            assert_eq!(square.id, format!("Square-{}", idx + 1));
            assert!((1..=5).contains(&square.row));
            assert!((1..=5).contains(&square.column_in_row));
            assert_eq!(square.row, idx / 5 + 1);
            assert_eq!(square.column_in_row, idx % 5 + 1);
        }
    }

    #[test]
    fn test_populate_free_space_and_permutation() {
        let input = phrases(24);
        let mut model = CardModel::new(CardConfig::default()).unwrap();

        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let squares = model.populate(input.clone(), size(), &mut rng).unwrap();

            let free = &squares[12];
            assert!(free.is_free_space);
            assert_eq!(free.text, "Moore");
            assert_eq!(squares.iter().filter(|s| s.is_free_space).count(), 1);

            let placed: Vec<String> = squares
                .iter()
                .filter(|s| !s.is_free_space)
                .map(|s| s.text.clone())
                .collect();
            assert_eq!(sorted(placed), sorted(input.clone()));
        }
    }

    #[test]
    fn test_populate_with_surplus_uses_a_subset() {
        let input = phrases(40);
        let mut model = CardModel::new(CardConfig::default()).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let squares = model.populate(input.clone(), size(), &mut rng).unwrap();

        let placed: HashSet<&str> = squares
            .iter()
            .filter(|s| !s.is_free_space)
            .map(|s| s.text.as_str())
            .collect();
        assert_eq!(placed.len(), 24);
        assert!(placed.iter().all(|p| input.iter().any(|i| i == p)));
    }

    #[test]
    fn test_populate_geometry_from_size() {
        let mut model = CardModel::new(CardConfig::default()).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        let squares = model
            .populate(phrases(24), SquareSize { height: 40.0, width: 60.0 }, &mut rng)
            .unwrap();
        let s = &squares[7]; // row 2, column 3
        assert_eq!((s.x, s.y, s.width, s.height), (120.0, 40.0, 60.0, 40.0));
    }

    #[test]
    fn test_populate_insufficient_phrases_keeps_previous_squares() {
        let mut model = CardModel::new(CardConfig::default()).unwrap();
        let mut rng = StdRng::seed_from_u64(5);
        model.populate(phrases(24), size(), &mut rng).unwrap();
        let before = model.squares().to_vec();

        let err = model.populate(phrases(23), size(), &mut rng).unwrap_err();
        assert!(matches!(
            err,
            CardError::InsufficientPhrases { required: 24, available: 23 }
        ));
        assert_eq!(model.squares(), before.as_slice());
        assert_eq!(model.phrases().len(), 24);
    }

    #[test]
    fn test_reshuffle_clears_highlights_and_keeps_pool() {
        let input = phrases(24);
        let mut model = CardModel::new(CardConfig::default()).unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        model.populate(input.clone(), size(), &mut rng).unwrap();
        model.squares_mut()[0].is_highlighted = true;

        let squares = model.reshuffle(size(), &mut rng).unwrap();
        assert!(squares.iter().all(|s| !s.is_highlighted));
        assert_eq!(model.phrases(), input.as_slice());
    }

    #[test]
    fn test_reshuffle_before_any_pool_is_insufficient() {
        let mut model = CardModel::new(CardConfig::default()).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            model.reshuffle(size(), &mut rng),
            Err(CardError::InsufficientPhrases { available: 0, .. })
        ));
    }

    #[test]
    fn test_single_square_card_needs_no_phrases() {
        let config = CardConfig {
            total_squares: 1,
            squares_per_row: 1,
            free_space_index: 0,
            ..CardConfig::default()
        };
        let mut model = CardModel::new(config).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        let squares = model.populate(vec![], size(), &mut rng).unwrap();
        assert_eq!(squares.len(), 1);
        assert!(squares[0].is_free_space);
    }

    #[test]
    fn test_square_contains_is_inclusive() {
        let square = Square {
            id: "Square-1".to_string(),
            row: 1,
            column_in_row: 1,
            x: 0.0,
            y: 0.0,
            width: 100.0,
            height: 100.0,
            text: String::new(),
            is_free_space: false,
            is_highlighted: false,
        };
        assert!(square.contains(0.0, 0.0));
        assert!(square.contains(100.0, 100.0));
        assert!(square.contains(50.0, 50.0));
        assert!(!square.contains(100.1, 50.0));
        assert!(!square.contains(-0.1, 50.0));
    }
}
