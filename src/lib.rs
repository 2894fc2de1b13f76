//! # tsuro-engine
//!
//! A deterministic rules engine for Tsuro, the tile-path board game.
//!
//! Teams take turns placing tiles on a 6x6 board. Each tile carries four
//! paths; every token on the board slides along the paths until it reaches an
//! empty cell. A token that runs off the board or into another token is
//! eliminated.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: all randomness comes from one seeded ChaCha8 RNG, so
//!    a config plus the action log reproduces any game.
//!
//! 2. **Validate, then mutate**: a rejected action leaves the state untouched
//!    and reports a typed error.
//!
//! 3. **Closed variants**: rule differences are a small enum dispatched in a
//!    few places, not a trait hierarchy.
//!
//! ## Modules
//!
//! - `core`: team ids, actions, configuration, errors, RNG
//! - `tiles`: notches, tiles and the fixed tile set
//! - `deck`: draw pile and hands
//! - `board`: the grid and token geometry
//! - `rules`: turn resolution and variant rules
//! - `game`: the host-facing facade with log, undo and snapshots
//!
//! ## Example
//!
//! ```
//! use tsuro_engine::{Game, GameConfig};
//!
//! let mut game = Game::new(GameConfig::new(["red", "blue"]).with_seed(7)).unwrap();
//! let turn = game.snapshot(None).unwrap().turn.unwrap();
//! let actions = game.legal_actions(Some(&turn)).unwrap();
//! let place = actions
//!     .into_iter()
//!     .find(|a| a.action.kind() == tsuro_engine::ActionKind::PlaceTile)
//!     .unwrap();
//! game.apply(&place.team, place.action).unwrap();
//! assert_eq!(game.actions().len(), 1);
//! ```

pub mod board;
pub mod core;
pub mod deck;
pub mod game;
pub mod rules;
pub mod tiles;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionKind, ActionRecord, ConfigError, GameConfig, GameError, GameRng, TeamBounds,
    TeamId, TeamMap, Variant,
};

pub use crate::tiles::{Direction, Notch, Path, Tile, TILE_COUNT, TILE_SET};

pub use crate::deck::{Deck, Hand, HAND_SIZE};

pub use crate::board::{Board, Token, BORDER_CELLS, COLUMNS, ROWS};

pub use crate::rules::{GameResult, LegalAction, State};

pub use crate::game::{Game, Snapshot};
