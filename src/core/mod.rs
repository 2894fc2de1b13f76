//! Core engine types: teams, RNG, actions, configuration, errors.
//!
//! These are the building blocks shared by the board, deck and rules modules.
//! Nothing in here knows how a turn is resolved.

pub mod action;
pub mod config;
pub mod error;
pub mod rng;
pub mod team;

pub use action::{Action, ActionKind, ActionRecord};
pub use config::{GameConfig, TeamBounds, Variant};
pub use error::{ConfigError, GameError};
pub use rng::GameRng;
pub use team::{TeamId, TeamMap};
