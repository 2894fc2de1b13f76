//! Action representation.
//!
//! An action is what a host submits on behalf of a team. Tiles travel as
//! their 8-letter edge strings and are parsed by the engine, so a malformed
//! payload is reported as a typed error rather than rejected at decode time.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Kind of an action, without its payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    RotateLeft,
    RotateRight,
    PlaceTile,
    SetWinners,
}

/// A complete action.
///
/// ```
/// use tsuro_engine::core::{Action, ActionKind};
///
/// let place = Action::place("ABCDEFGH", 0, 3);
/// assert_eq!(place.kind(), ActionKind::PlaceTile);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Action {
    /// Rotate a held tile counter-clockwise.
    RotateLeft { tile: String },
    /// Rotate a held tile clockwise.
    RotateRight { tile: String },
    /// Place a held tile, in its current orientation, on the board.
    PlaceTile { row: usize, col: usize, tile: String },
    /// Host-declared end of game.
    SetWinners { winners: SmallVec<[String; 2]> },
}

impl Action {
    #[must_use]
    pub fn rotate_left(tile: impl Into<String>) -> Self {
        Action::RotateLeft { tile: tile.into() }
    }

    #[must_use]
    pub fn rotate_right(tile: impl Into<String>) -> Self {
        Action::RotateRight { tile: tile.into() }
    }

    #[must_use]
    pub fn place(tile: impl Into<String>, row: usize, col: usize) -> Self {
        Action::PlaceTile {
            row,
            col,
            tile: tile.into(),
        }
    }

    pub fn set_winners<I, S>(winners: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Action::SetWinners {
            winners: winners.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::RotateLeft { .. } => ActionKind::RotateLeft,
            Action::RotateRight { .. } => ActionKind::RotateRight,
            Action::PlaceTile { .. } => ActionKind::PlaceTile,
            Action::SetWinners { .. } => ActionKind::SetWinners,
        }
    }
}

/// A successfully applied action, as kept in the game's log.
///
/// The log is the replay source for undo and the input of external notation
/// encoders.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The team that took this action.
    pub team: String,

    /// The action taken.
    pub action: Action,

    /// Position in the log (0-based).
    pub sequence: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(team: impl Into<String>, action: Action, sequence: u32) -> Self {
        Self {
            team: team.into(),
            action,
            sequence,
        }
    }
}
