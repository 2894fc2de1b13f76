//! The fixed tile set and the path-crossing table.
//!
//! Both are process-wide constants. `TILE_SET` order is stable and is the tile
//! index used by notation encoders.

use once_cell::sync::Lazy;

use super::notch::{Notch, Path};
use super::tile::Tile;

/// Every tile in the game, one entry per physical tile.
pub const TILE_SET: [&str; 35] = [
    "ABCDEFGH", "AHBGCDEF", "AHBCDGEF", "AHBCDEFG", "AGBHCDEF",
    "ABCHDGEF", "ABCGDHEF", "AGBCDHEF", "ABCGDEFH", "AGBCDEFH",
    "ACBGDEFH", "ACBGDHEF", "ACBHDGEF", "ADBHCGEF", "ADBGCHEF",
    "ADBCEHFG", "ADBCEGFH", "AEBCDGFH", "AEBCDHFG", "AFBHCDEG",
    "AFBGCHDE", "AFBCDHEG", "AFBDCHEG", "AFBDCGEH", "AEBDCGFH",
    "ACBDEGFH", "AFBECHDG", "AFBECGDH", "AEBFCGDH", "ADBFCGEH",
    "ADBFCHEG", "ACBFDHEG", "ADBGCEFH", "AGBDCEFH", "ADBGCFEH",
];

/// Number of tiles in the game.
pub const TILE_COUNT: usize = TILE_SET.len();

/// Fresh, unowned tiles in catalog order.
pub fn tiles() -> impl Iterator<Item = Tile> {
    TILE_SET.iter().filter_map(|edges| edges.parse().ok())
}

/// Catalog position of a tile's shape, whatever its orientation.
#[must_use]
pub fn canonical_index(tile: &Tile) -> Option<usize> {
    let mut rotated = tile.clone();
    for _ in 0..4 {
        let key = rotated.shape_key();
        if let Some(index) = SHAPE_KEYS.iter().position(|k| *k == key) {
            return Some(index);
        }
        rotated.rotate_right();
    }
    None
}

static SHAPE_KEYS: Lazy<Vec<[u8; 4]>> = Lazy::new(|| tiles().map(|t| t.shape_key()).collect());

/// `CROSSINGS[a][b]` is set when path slot `a` crosses path slot `b`.
///
/// Two chords on a tile cross when exactly one endpoint of the second lies
/// strictly between the endpoints of the first, going clockwise.
static CROSSINGS: Lazy<[[bool; 64]; 64]> = Lazy::new(|| {
    let mut table = [[false; 64]; 64];
    for a in Notch::ALL {
        for b in Notch::ALL {
            for c in Notch::ALL {
                for d in Notch::ALL {
                    let distinct = a != b && c != d && a != c && a != d && b != c && b != d;
                    if !distinct {
                        continue;
                    }
                    let (lo, hi) = if a < b { (a, b) } else { (b, a) };
                    let inside = |n: Notch| lo < n && n < hi;
                    if inside(c) != inside(d) {
                        table[slot(Path::new(a, b))][slot(Path::new(c, d))] = true;
                    }
                }
            }
        }
    }
    table
});

const fn slot(path: Path) -> usize {
    path.from.index() * 8 + path.to.index()
}

/// Whether two segments on the same tile cross each other.
#[must_use]
pub fn crosses(a: Path, b: Path) -> bool {
    CROSSINGS[slot(a)][slot(b)]
}
