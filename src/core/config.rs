//! Game configuration types.
//!
//! Hosts describe a game with a `GameConfig`: the ordered team list (turn
//! order), the seed every random decision is drawn from, the variant name and
//! the accepted team-count bounds. Validation happens once, at creation.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::ConfigError;
use crate::board::BORDER_CELLS;

/// Rule variant, fixed for the lifetime of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Variant {
    /// Last team standing wins.
    Classic,
    /// Team with the most owned path segments wins.
    LongestPath,
    /// Team whose path crosses itself the most wins.
    MostCrossings,
    /// Classic rules with one hand shared by every team.
    OpenTiles,
    /// Fill the board while keeping every token alive.
    Solo,
}

impl Variant {
    /// All variants in declaration order.
    pub const ALL: [Variant; 5] = [
        Variant::Classic,
        Variant::LongestPath,
        Variant::MostCrossings,
        Variant::OpenTiles,
        Variant::Solo,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Variant::Classic => "Classic",
            Variant::LongestPath => "LongestPath",
            Variant::MostCrossings => "MostCrossings",
            Variant::OpenTiles => "OpenTiles",
            Variant::Solo => "Solo",
        }
    }

    /// Whether the variant keeps a score per team.
    #[must_use]
    pub const fn is_scored(self) -> bool {
        matches!(self, Variant::LongestPath | Variant::MostCrossings)
    }

    /// Whether all teams draw from and play out of one shared hand.
    #[must_use]
    pub const fn shares_hand(self) -> bool {
        matches!(self, Variant::OpenTiles)
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Classic" => Ok(Variant::Classic),
            "LongestPath" => Ok(Variant::LongestPath),
            "MostCrossings" | "MostLoops" => Ok(Variant::MostCrossings),
            "OpenTiles" => Ok(Variant::OpenTiles),
            "Solo" => Ok(Variant::Solo),
            other => Err(ConfigError::InvalidVariant(other.to_string())),
        }
    }
}

/// Accepted range for the number of teams.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamBounds {
    pub min: usize,
    pub max: usize,
}

impl TeamBounds {
    #[must_use]
    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }
}

impl Default for TeamBounds {
    fn default() -> Self {
        Self { min: 2, max: 8 }
    }
}

/// Everything needed to create (or deterministically recreate) a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Team names in turn order.
    pub teams: Vec<String>,

    /// Seed for every random decision. Required.
    pub seed: Option<u64>,

    /// Variant name, parsed with `Variant::from_str`.
    pub variant: String,

    /// Accepted team count.
    pub bounds: TeamBounds,
}

impl GameConfig {
    /// Classic game for the given teams, without a seed.
    pub fn new<I, S>(teams: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            teams: teams.into_iter().map(Into::into).collect(),
            seed: None,
            variant: Variant::Classic.name().to_string(),
            bounds: TeamBounds::default(),
        }
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_variant(mut self, variant: impl Into<String>) -> Self {
        self.variant = variant.into();
        self
    }

    #[must_use]
    pub fn with_team_bounds(mut self, min: usize, max: usize) -> Self {
        self.bounds = TeamBounds::new(min, max);
        self
    }

    /// Validate the config, returning the parsed variant and the seed.
    ///
    /// The upper bound is capped by the number of border cells, since every
    /// team needs its own start cell.
    pub fn validate(&self) -> Result<(Variant, u64), ConfigError> {
        let TeamBounds { min, max } = self.bounds;
        if min == 0 || min > max {
            return Err(ConfigError::InvalidBounds { min, max });
        }
        let max = max.min(BORDER_CELLS);

        let got = self.teams.len();
        if got < min {
            return Err(ConfigError::TooFewTeams { min, got });
        }
        if got > max {
            return Err(ConfigError::TooManyTeams { max, got });
        }
        for (i, team) in self.teams.iter().enumerate() {
            if self.teams[..i].contains(team) {
                return Err(ConfigError::DuplicateTeam(team.clone()));
            }
        }

        let variant = self.variant.parse::<Variant>()?;
        let seed = self.seed.ok_or(ConfigError::NilSeed)?;
        Ok((variant, seed))
    }
}
