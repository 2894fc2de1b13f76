//! The tile grid.

use super::{COLUMNS, ROWS};
use crate::core::GameError;
use crate::tiles::{Direction, Tile, TILE_COUNT};

/// Fixed grid of tile slots. Occupied cells are never cleared.
#[derive(Clone, Debug)]
pub struct Board {
    cells: Vec<Vec<Option<Tile>>>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    #[must_use]
    pub fn new() -> Self {
        Self {
            cells: vec![vec![None; COLUMNS]; ROWS],
        }
    }

    /// Put a tile on an empty cell. Path legality is the engine's concern.
    pub fn place(&mut self, tile: Tile, row: usize, col: usize) -> Result<(), GameError> {
        let cell = self
            .cells
            .get_mut(row)
            .and_then(|r| r.get_mut(col))
            .ok_or(GameError::OffBoard)?;
        if cell.is_some() {
            return Err(GameError::CellOccupied { row, col });
        }
        *cell = Some(tile);
        Ok(())
    }

    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&Tile> {
        self.cells.get(row)?.get(col)?.as_ref()
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut Tile> {
        self.cells.get_mut(row)?.get_mut(col)?.as_mut()
    }

    /// On the board and holding no tile.
    #[must_use]
    pub fn is_empty_at(&self, row: usize, col: usize) -> bool {
        matches!(self.cells.get(row).and_then(|r| r.get(col)), Some(None))
    }

    /// Cell next to `(row, col)` in `direction`, if it is on the board.
    #[must_use]
    pub fn neighbor(row: usize, col: usize, direction: Direction) -> Option<(usize, usize)> {
        let (dr, dc) = direction.offset();
        let row = row.checked_add_signed(dr).filter(|&r| r < ROWS)?;
        let col = col.checked_add_signed(dc).filter(|&c| c < COLUMNS)?;
        Some((row, col))
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.tiles().count()
    }

    /// Every tile of the set has been placed.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.tile_count() == TILE_COUNT
    }

    /// Occupied cells as `(row, col, tile)`, row-major.
    pub fn tiles(&self) -> impl Iterator<Item = (usize, usize, &Tile)> {
        self.cells.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .filter_map(move |(c, cell)| cell.as_ref().map(|t| (r, c, t)))
        })
    }

    /// Rows of cells, for rendering.
    #[must_use]
    pub fn rows(&self) -> &[Vec<Option<Tile>>] {
        &self.cells
    }
}
