//! Tiles held by a team.

use smallvec::SmallVec;

use crate::tiles::Tile;

/// Tiles a team holds between turns.
pub const HAND_SIZE: usize = 3;

/// A team's hand. Order only matters for display.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Hand {
    tiles: SmallVec<[Tile; HAND_SIZE]>,
}

impl Hand {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, tile: Tile) {
        self.tiles.push(tile);
    }

    /// Remove the tile with exactly this orientation.
    ///
    /// Returns `None` when no held tile matches.
    pub fn remove(&mut self, tile: &Tile) -> Option<Tile> {
        let pos = self.tiles.iter().position(|t| t == tile)?;
        Some(self.tiles.remove(pos))
    }

    /// Empty the hand, handing the tiles back.
    pub fn clear(&mut self) -> SmallVec<[Tile; HAND_SIZE]> {
        std::mem::take(&mut self.tiles)
    }

    #[must_use]
    pub fn contains(&self, tile: &Tile) -> bool {
        self.tiles.contains(tile)
    }

    pub fn get_mut(&mut self, tile: &Tile) -> Option<&mut Tile> {
        self.tiles.iter_mut().find(|t| *t == tile)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Fewer than `HAND_SIZE` tiles.
    #[must_use]
    pub fn is_short(&self) -> bool {
        self.tiles.len() < HAND_SIZE
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }
}
