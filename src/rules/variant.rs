//! Variant-specific scoring and win triggers.
//!
//! Every rule difference between variants lives here, dispatched on the
//! closed [`Variant`] enum:
//!
//! - `score`: per-team points, recomputed from the board after each placement
//! - `resolve`: who (if anyone) has won once eliminations are applied
//!
//! Hand sharing is the third difference and is answered by
//! [`Variant::shares_hand`].

use crate::board::Board;
use crate::core::{TeamId, TeamMap, Variant};
use crate::tiles::Path;

/// Alive sets around one elimination step, plus what the win rules need.
#[derive(Clone, Debug)]
pub struct Resolution<'a> {
    /// Teams alive before this step's eliminations.
    pub before: &'a [TeamId],
    /// Teams still alive afterwards.
    pub after: &'a [TeamId],
    /// Every tile has been placed.
    pub board_full: bool,
    pub points: &'a TeamMap<u32>,
}

impl Variant {
    /// Points per team for the current board, or `None` for unscored variants.
    #[must_use]
    pub fn score(self, board: &Board, team_count: usize) -> Option<TeamMap<u32>> {
        let per_tile: fn(&[Path]) -> u32 = match self {
            Variant::LongestPath => segment_count,
            Variant::MostCrossings => most_crossings,
            Variant::Classic | Variant::OpenTiles | Variant::Solo => return None,
        };

        let mut points = TeamMap::with_value(team_count, 0u32);
        for (_, _, tile) in board.tiles() {
            for (team, total) in points.iter_mut() {
                let segments: Vec<Path> = tile.segments_of(team).collect();
                if !segments.is_empty() {
                    *total += per_tile(&segments);
                }
            }
        }
        Some(points)
    }

    /// Winners for this step, or `None` while the game goes on.
    #[must_use]
    pub fn resolve(self, res: &Resolution<'_>) -> Option<Vec<TeamId>> {
        match self {
            Variant::Classic | Variant::OpenTiles => {
                if res.after.is_empty() {
                    Some(res.before.to_vec())
                } else if res.after.len() == 1 || res.board_full {
                    Some(res.after.to_vec())
                } else {
                    None
                }
            }
            Variant::LongestPath | Variant::MostCrossings => {
                let leaders = leaders(res.points);
                let sole_leader = res.after.len() == 1 && leaders == res.after;
                if res.after.is_empty() || res.board_full || sole_leader {
                    Some(leaders)
                } else {
                    None
                }
            }
            Variant::Solo => {
                if res.after.len() < res.before.len() {
                    if res.after.is_empty() {
                        Some(res.before.to_vec())
                    } else {
                        Some(res.after.to_vec())
                    }
                } else if res.board_full {
                    Some(res.after.to_vec())
                } else {
                    None
                }
            }
        }
    }
}

fn segment_count(segments: &[Path]) -> u32 {
    segments.len() as u32
}

/// Highest number of the team's own segments crossing any single one of its
/// segments on this tile.
///
/// This is deliberately the maximum, not the number of crossing pairs.
fn most_crossings(segments: &[Path]) -> u32 {
    segments
        .iter()
        .map(|&s| segments.iter().filter(|&&o| s.crosses(o)).count() as u32)
        .max()
        .unwrap_or(0)
}

/// Teams sharing the top score, in turn order.
#[must_use]
pub fn leaders(points: &TeamMap<u32>) -> Vec<TeamId> {
    let best = points.iter().map(|(_, &p)| p).max().unwrap_or(0);
    points
        .iter()
        .filter(|&(_, &p)| p == best)
        .map(|(team, _)| team)
        .collect()
}
