//! Token geometry: adjacency, board-edge detection and collisions.

use serde::{Deserialize, Serialize};

use super::grid::Board;
use super::{COLUMNS, ROWS};
use crate::core::{GameError, GameRng};
use crate::tiles::{Direction, Notch, Path};

/// A team's marker: the cell it is on and the notch it will leave through.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    pub row: usize,
    pub col: usize,
    pub notch: Notch,
}

impl Token {
    #[must_use]
    pub const fn new(row: usize, col: usize, notch: Notch) -> Self {
        Self { row, col, notch }
    }

    #[must_use]
    pub const fn cell(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// Cell the token moves into next.
    pub fn adjacent_cell(&self) -> Result<(usize, usize), GameError> {
        Board::neighbor(self.row, self.col, self.notch.direction()).ok_or(GameError::OffBoard)
    }

    /// On a border cell with the notch pointing off the board.
    #[must_use]
    pub fn faces_edge(&self) -> bool {
        match self.notch.direction() {
            Direction::North => self.row == 0,
            Direction::East => self.col == COLUMNS - 1,
            Direction::South => self.row == ROWS - 1,
            Direction::West => self.col == 0,
        }
    }

    /// Segment of the tile under the token that brought it to its notch.
    #[must_use]
    pub fn current_path(&self, board: &Board) -> Option<Path> {
        let tile = board.get(self.row, self.col)?;
        Some(Path::new(tile.destination(self.notch), self.notch))
    }

    /// Whether the two tokens have run into each other.
    ///
    /// They collide when they sit on the same notch, on touching notches of
    /// neighbouring cells, or on one tile with paths that cross or are the
    /// same segment travelled from opposite ends.
    #[must_use]
    pub fn collides_with(&self, other: &Token, board: &Board) -> bool {
        if self == other {
            return true;
        }

        let facing = Board::neighbor(self.row, self.col, self.notch.direction());
        if facing == Some(other.cell()) && other.notch == self.notch.across() {
            return true;
        }

        if self.cell() != other.cell() {
            return false;
        }
        match (self.current_path(board), other.current_path(board)) {
            (Some(mine), Some(theirs)) => mine.same_segment(theirs) || mine.crosses(theirs),
            _ => false,
        }
    }

    /// Every (border cell, outward notch) starting position, row-major.
    #[must_use]
    pub fn start_positions() -> Vec<Token> {
        let mut starts = Vec::new();
        for row in 0..ROWS {
            for col in 0..COLUMNS {
                for notch in Notch::ALL {
                    let token = Token::new(row, col, notch);
                    if token.faces_edge() {
                        starts.push(token);
                    }
                }
            }
        }
        starts
    }

    /// Uniformly random starting position on a cell no token in `taken` uses.
    ///
    /// Returns `None` only when every border cell is already taken.
    pub fn random_start(rng: &mut GameRng, taken: &[Token]) -> Option<Token> {
        let free: Vec<Token> = Self::start_positions()
            .into_iter()
            .filter(|start| taken.iter().all(|t| t.cell() != start.cell()))
            .collect();
        rng.choose(&free).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BORDER_CELLS;
    use crate::tiles::Tile;

    fn tile(edges: &str) -> Tile {
        edges.parse().unwrap()
    }

    #[test]
    fn test_adjacent_cell() {
        assert_eq!(Token::new(2, 2, Notch::A).adjacent_cell(), Ok((1, 2)));
        assert_eq!(Token::new(2, 2, Notch::D).adjacent_cell(), Ok((2, 3)));
        assert_eq!(Token::new(2, 2, Notch::E).adjacent_cell(), Ok((3, 2)));
        assert_eq!(Token::new(2, 2, Notch::H).adjacent_cell(), Ok((2, 1)));
        assert_eq!(Token::new(0, 4, Notch::B).adjacent_cell(), Err(GameError::OffBoard));
    }

    #[test]
    fn test_faces_edge() {
        assert!(Token::new(0, 3, Notch::A).faces_edge());
        assert!(Token::new(ROWS - 1, 3, Notch::F).faces_edge());
        assert!(Token::new(2, 0, Notch::G).faces_edge());
        assert!(Token::new(2, COLUMNS - 1, Notch::C).faces_edge());
        assert!(!Token::new(0, 3, Notch::E).faces_edge());
        assert!(!Token::new(2, 2, Notch::A).faces_edge());
    }

    #[test]
    fn test_start_positions_cover_border() {
        let starts = Token::start_positions();
        assert_eq!(starts.len(), 48);
        assert!(starts.iter().all(Token::faces_edge));

        let mut cells: Vec<_> = starts.iter().map(Token::cell).collect();
        cells.dedup();
        assert_eq!(cells.len(), BORDER_CELLS);
    }

    #[test]
    fn test_random_start_avoids_taken_cells() {
        let mut rng = GameRng::new(9);
        let mut taken = Vec::new();
        for _ in 0..BORDER_CELLS {
            let token = Token::random_start(&mut rng, &taken).unwrap();
            assert!(taken.iter().all(|t: &Token| t.cell() != token.cell()));
            taken.push(token);
        }
        assert_eq!(Token::random_start(&mut rng, &taken), None);
    }

    #[test]
    fn test_same_notch_collides() {
        let board = Board::new();
        let a = Token::new(1, 1, Notch::C);
        assert!(a.collides_with(&a.clone(), &board));
        assert!(!a.collides_with(&Token::new(1, 1, Notch::D), &board));
    }

    #[test]
    fn test_touching_notches_collide() {
        let board = Board::new();
        let west = Token::new(1, 1, Notch::D);
        let east = Token::new(1, 2, Notch::G);

        assert!(west.collides_with(&east, &board));
        assert!(east.collides_with(&west, &board));
        assert!(!west.collides_with(&Token::new(1, 2, Notch::H), &board));
    }

    #[test]
    fn test_crossing_paths_collide() {
        let mut board = Board::new();
        // A-F runs north to south, C-H west to east.
        board.place(tile("AFBECHDG"), 2, 2).unwrap();

        let vertical = Token::new(2, 2, Notch::F);
        let horizontal = Token::new(2, 2, Notch::C);
        let parallel = Token::new(2, 2, Notch::E);

        assert!(vertical.collides_with(&horizontal, &board));
        assert!(!vertical.collides_with(&parallel, &board));
    }

    #[test]
    fn test_head_on_collides() {
        let mut board = Board::new();
        board.place(tile("AFBECHDG"), 2, 2).unwrap();

        let down = Token::new(2, 2, Notch::F);
        let up = Token::new(2, 2, Notch::A);
        assert!(down.collides_with(&up, &board));
    }
}
