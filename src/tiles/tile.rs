//! Tile shape, orientation and path ownership.

use rustc_hash::FxHashMap;
use std::str::FromStr;

use super::notch::{Notch, Path};
use crate::core::{GameError, TeamId};

/// A physical tile.
///
/// `edges` lists the eight notches so that positions `2k` and `2k + 1` are the
/// two ends of one path. Rotating relabels the notches, so two orientations of
/// the same shape have different edge strings.
///
/// Equality compares edges only; path ownership is per-game bookkeeping.
#[derive(Clone, Debug)]
pub struct Tile {
    edges: [Notch; 8],
    paths: FxHashMap<Path, TeamId>,
}

impl Tile {
    #[must_use]
    pub fn edges(&self) -> &[Notch; 8] {
        &self.edges
    }

    /// The edge string, e.g. `"AHBGCDEF"`.
    #[must_use]
    pub fn edge_string(&self) -> String {
        self.edges.iter().map(|n| n.as_char()).collect()
    }

    pub fn rotate_right(&mut self) {
        for notch in &mut self.edges {
            *notch = notch.rotated_right();
        }
    }

    pub fn rotate_left(&mut self) {
        for notch in &mut self.edges {
            *notch = notch.rotated_left();
        }
    }

    /// The notch joined to `entry` by this tile's paths.
    #[must_use]
    pub fn destination(&self, entry: Notch) -> Notch {
        let pos = self
            .edges
            .iter()
            .position(|&n| n == entry)
            .unwrap_or_default();
        self.edges[pos ^ 1]
    }

    /// Team owning the given segment, in either direction of travel.
    #[must_use]
    pub fn owner(&self, path: Path) -> Option<TeamId> {
        self.paths
            .get(&path)
            .or_else(|| self.paths.get(&path.reversed()))
            .copied()
    }

    /// Record that `team` traversed `path`. Returns false if already recorded.
    pub fn claim(&mut self, path: Path, team: TeamId) -> bool {
        if self.paths.get(&path) == Some(&team) {
            return false;
        }
        self.paths.insert(path, team);
        true
    }

    /// Whether `team` owns any segment on this tile.
    #[must_use]
    pub fn owns_any(&self, team: TeamId) -> bool {
        self.paths.values().any(|&t| t == team)
    }

    /// Owned segments, sorted for stable output.
    #[must_use]
    pub fn paths(&self) -> Vec<(Path, TeamId)> {
        let mut paths: Vec<_> = self.paths.iter().map(|(&p, &t)| (p, t)).collect();
        paths.sort_unstable();
        paths
    }

    /// Segments owned by `team`.
    pub fn segments_of(&self, team: TeamId) -> impl Iterator<Item = Path> + '_ {
        self.paths
            .iter()
            .filter(move |(_, &t)| t == team)
            .map(|(&p, _)| p)
    }

    /// Orientation-independent key of the pairing within this orientation.
    pub(crate) fn shape_key(&self) -> [u8; 4] {
        let mut key = [0u8; 4];
        for (k, pair) in self.edges.chunks_exact(2).enumerate() {
            let (a, b) = (pair[0].index() as u8, pair[1].index() as u8);
            key[k] = a.min(b) * 8 + a.max(b);
        }
        key.sort_unstable();
        key
    }

    /// Catalog index of this tile's shape.
    #[must_use]
    pub fn canonical_index(&self) -> Option<usize> {
        super::catalog::canonical_index(self)
    }
}

impl PartialEq for Tile {
    fn eq(&self, other: &Self) -> bool {
        self.edges == other.edges
    }
}

impl Eq for Tile {}

impl FromStr for Tile {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || GameError::InvalidTileShape(s.to_string());

        let mut edges = [Notch::A; 8];
        let mut seen = [false; 8];
        let mut count = 0;
        for c in s.chars() {
            let notch = Notch::from_char(c).ok_or_else(invalid)?;
            if count == 8 || seen[notch.index()] {
                return Err(invalid());
            }
            seen[notch.index()] = true;
            edges[count] = notch;
            count += 1;
        }
        if count != 8 {
            return Err(invalid());
        }

        Ok(Self {
            edges,
            paths: FxHashMap::default(),
        })
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.edge_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn tile(edges: &str) -> Tile {
        edges.parse().unwrap()
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in ["", "ABCDEFG", "ABCDEFGHA", "AACDEFGH", "ABCDEFGI", "abcdefgh"] {
            assert_eq!(
                bad.parse::<Tile>(),
                Err(GameError::InvalidTileShape(bad.to_string())),
                "{bad:?}"
            );
        }
    }

    #[test]
    fn test_rotate_right() {
        let mut t = tile("ABCDEFGH");
        t.rotate_right();
        assert_eq!(t.edge_string(), "CDEFGHAB");
        assert_eq!(t.edges()[0], Notch::C);
        assert_eq!(t.edges()[7], Notch::B);

        let mut t = tile("AHBGCDEF");
        t.rotate_right();
        assert_eq!(t.edge_string(), "CBDAEFGH");
    }

    #[test]
    fn test_destination() {
        let t = tile("ADBGCHEF");
        assert_eq!(t.destination(Notch::A), Notch::D);
        assert_eq!(t.destination(Notch::D), Notch::A);
        assert_eq!(t.destination(Notch::G), Notch::B);
        assert_eq!(t.destination(Notch::F), Notch::E);
    }

    #[test]
    fn test_equality_ignores_paths() {
        let mut a = tile("AHBGCDEF");
        let b = tile("AHBGCDEF");
        a.claim(Path::new(Notch::A, Notch::H), TeamId::new(0));

        assert_eq!(a, b);
        assert_ne!(a, tile("ABCDEFGH"));
    }

    #[test]
    fn test_claim_and_owner() {
        let mut t = tile("AFBECHDG");
        let path = Path::new(Notch::F, Notch::A);

        assert!(t.claim(path, TeamId::new(1)));
        assert!(!t.claim(path, TeamId::new(1)));

        assert_eq!(t.owner(path), Some(TeamId::new(1)));
        assert_eq!(t.owner(path.reversed()), Some(TeamId::new(1)));
        assert!(t.owns_any(TeamId::new(1)));
        assert!(!t.owns_any(TeamId::new(0)));
        assert_eq!(t.segments_of(TeamId::new(1)).count(), 1);
    }

    fn any_tile() -> impl Strategy<Value = Tile> {
        Just(Notch::ALL.to_vec())
            .prop_shuffle()
            .prop_map(|notches| notches.iter().map(|n| n.as_char()).collect::<String>())
            .prop_map(|edges| tile(&edges))
    }

    proptest! {
        #[test]
        fn prop_rotations_are_inverse(mut t in any_tile()) {
            let original = t.clone();
            t.rotate_right();
            t.rotate_left();
            prop_assert_eq!(&t, &original);
            t.rotate_left();
            t.rotate_right();
            prop_assert_eq!(&t, &original);
        }

        #[test]
        fn prop_eight_right_rotations_are_identity(mut t in any_tile()) {
            let original = t.clone();
            for _ in 0..8 {
                t.rotate_right();
            }
            prop_assert_eq!(t, original);
        }

        #[test]
        fn prop_destination_is_involution(t in any_tile()) {
            for notch in Notch::ALL {
                prop_assert_eq!(t.destination(t.destination(notch)), notch);
                prop_assert_ne!(t.destination(notch), notch);
            }
        }

        #[test]
        fn prop_display_round_trips(t in any_tile()) {
            prop_assert_eq!(t.to_string().parse::<Tile>().unwrap(), t);
        }
    }
}
