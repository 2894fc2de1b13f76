//! Typed failures.
//!
//! Every failure is non-fatal: a rejected action leaves the game untouched and
//! the host surfaces the error to its caller.

use thiserror::Error;

/// Game creation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("at least {min} teams required, got {got}")]
    TooFewTeams { min: usize, got: usize },
    #[error("at most {max} teams allowed, got {got}")]
    TooManyTeams { max: usize, got: usize },
    #[error("team {0} listed more than once")]
    DuplicateTeam(String),
    #[error("unknown variant {0:?}")]
    InvalidVariant(String),
    #[error("a seed is required to create a game")]
    NilSeed,
    #[error("invalid team bounds {min}..={max}")]
    InvalidBounds { min: usize, max: usize },
}

/// Action failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("{0} is not a team in this game")]
    UnknownTeam(String),
    #[error("currently {0}'s turn")]
    WrongTurn(String),
    #[error("{0} has been eliminated")]
    Eliminated(String),
    #[error("{team} cannot place at row {row} column {col}")]
    InvalidAction { team: String, row: usize, col: usize },
    #[error("{team}'s hand does not contain {tile}")]
    TileNotInHand { team: String, tile: String },
    #[error("deck is empty so cannot draw")]
    EmptyDeck,
    #[error("row {row} column {col} already holds a tile")]
    CellOccupied { row: usize, col: usize },
    #[error("position leaves the board")]
    OffBoard,
    #[error("invalid tile shape {0:?}")]
    InvalidTileShape(String),
    #[error("invalid action payload: {0}")]
    InvalidActionPayload(String),
    #[error("game already completed")]
    GameOver,
    #[error("no actions to undo")]
    NothingToUndo,
    #[error("replaying action {index} failed: {source}")]
    ReplayFailed {
        index: usize,
        #[source]
        source: Box<GameError>,
    },
}
