//! The face-down draw pile.

use crate::core::{GameError, GameRng};
use crate::tiles::{catalog, Tile};

/// Remaining tiles, top of the pile = end of the vec.
#[derive(Clone, Debug, Default)]
pub struct Deck {
    tiles: Vec<Tile>,
}

impl Deck {
    /// Full tile set, shuffled.
    #[must_use]
    pub fn new(rng: &mut GameRng) -> Self {
        let mut deck = Self {
            tiles: catalog::tiles().collect(),
        };
        deck.shuffle(rng);
        deck
    }

    /// Deck holding exactly the given tiles, top last. Not shuffled.
    #[must_use]
    pub fn from_tiles(tiles: Vec<Tile>) -> Self {
        Self { tiles }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Take the top tile.
    pub fn draw(&mut self) -> Result<Tile, GameError> {
        self.tiles.pop().ok_or(GameError::EmptyDeck)
    }

    /// Return tiles to the pile and reshuffle it.
    pub fn add(&mut self, tiles: impl IntoIterator<Item = Tile>, rng: &mut GameRng) {
        self.tiles.extend(tiles);
        self.shuffle(rng);
    }

    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.tiles);
    }

    /// Tiles in pile order, bottom first.
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiles::TILE_COUNT;

    #[test]
    fn test_new_deck_holds_full_set() {
        let deck = Deck::new(&mut GameRng::new(42));
        assert_eq!(deck.len(), TILE_COUNT);
    }

    #[test]
    fn test_same_seed_same_order() {
        let a = Deck::new(&mut GameRng::new(5));
        let b = Deck::new(&mut GameRng::new(5));
        let c = Deck::new(&mut GameRng::new(6));

        assert_eq!(a.tiles(), b.tiles());
        assert_ne!(a.tiles(), c.tiles());
    }

    #[test]
    fn test_draw_from_top() {
        let mut deck = Deck::from_tiles(vec![
            "ABCDEFGH".parse().unwrap(),
            "AHBGCDEF".parse().unwrap(),
        ]);

        assert_eq!(deck.draw().map(|t| t.edge_string()), Ok("AHBGCDEF".to_string()));
        assert_eq!(deck.draw().map(|t| t.edge_string()), Ok("ABCDEFGH".to_string()));
        assert_eq!(deck.draw(), Err(GameError::EmptyDeck));
        assert!(deck.is_empty());
    }

    #[test]
    fn test_add_keeps_total() {
        let mut rng = GameRng::new(42);
        let mut deck = Deck::new(&mut rng);

        let drawn: Vec<_> = (0..3).filter_map(|_| deck.draw().ok()).collect();
        assert_eq!(deck.len(), TILE_COUNT - 3);

        deck.add(drawn, &mut rng);
        assert_eq!(deck.len(), TILE_COUNT);
    }
}
