//! Edge labels and path segments.
//!
//! ```text
//!          A  B
//!         ——  ——
//!     H |        | C
//!     G |        | D
//!         ——  ——
//!          F  E
//! ```
//!
//! Labels run clockwise from the north-west notch, which is what makes a
//! quarter turn a shift by two labels.

use serde::{Deserialize, Serialize};

/// One of the eight notches on a tile edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Notch {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
}

/// Side of a tile (and direction of travel when leaving through it).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Row and column offset of the neighbouring cell.
    #[must_use]
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::East => (0, 1),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
        }
    }
}

impl Notch {
    /// All labels in clockwise order.
    pub const ALL: [Notch; 8] = [
        Notch::A,
        Notch::B,
        Notch::C,
        Notch::D,
        Notch::E,
        Notch::F,
        Notch::G,
        Notch::H,
    ];

    /// Clockwise position (A = 0).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn from_index(index: usize) -> Notch {
        Notch::ALL[index % 8]
    }

    #[must_use]
    pub fn from_char(c: char) -> Option<Notch> {
        match c {
            'A'..='H' => Some(Notch::from_index(c as usize - 'A' as usize)),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_char(self) -> char {
        (b'A' + self as u8) as char
    }

    /// Label after a clockwise quarter turn (A→C, ..., G→A, H→B).
    #[must_use]
    pub const fn rotated_right(self) -> Notch {
        Notch::from_index(self.index() + 2)
    }

    /// Label after a counter-clockwise quarter turn (A→G, ..., H→F).
    #[must_use]
    pub const fn rotated_left(self) -> Notch {
        Notch::from_index(self.index() + 6)
    }

    /// Side of the tile this notch sits on.
    #[must_use]
    pub const fn direction(self) -> Direction {
        match self {
            Notch::A | Notch::B => Direction::North,
            Notch::C | Notch::D => Direction::East,
            Notch::E | Notch::F => Direction::South,
            Notch::G | Notch::H => Direction::West,
        }
    }

    /// The notch touching this one on the neighbouring tile.
    #[must_use]
    pub const fn across(self) -> Notch {
        match self {
            Notch::A => Notch::F,
            Notch::B => Notch::E,
            Notch::C => Notch::H,
            Notch::D => Notch::G,
            Notch::E => Notch::B,
            Notch::F => Notch::A,
            Notch::G => Notch::D,
            Notch::H => Notch::C,
        }
    }
}

impl std::fmt::Display for Notch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A traversed segment on one tile: entry notch then exit notch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Path {
    pub from: Notch,
    pub to: Notch,
}

impl Path {
    #[must_use]
    pub const fn new(from: Notch, to: Notch) -> Self {
        Self { from, to }
    }

    /// The same segment travelled the other way.
    #[must_use]
    pub const fn reversed(self) -> Path {
        Path::new(self.to, self.from)
    }

    /// Whether both segments join the same two notches.
    #[must_use]
    pub fn same_segment(self, other: Path) -> bool {
        self == other || self == other.reversed()
    }

    /// Whether the two segments cross when drawn on one tile.
    #[must_use]
    pub fn crosses(self, other: Path) -> bool {
        super::catalog::crosses(self, other)
    }
}

impl std::fmt::Display for Path {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}
