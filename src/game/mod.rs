//! Host-facing game facade.
//!
//! A `Game` wraps the engine state with what a host needs around it:
//!
//! - creation from a validated [`GameConfig`]
//! - an action log of every successful action, in order
//! - undo by replaying all but the last logged action from the initial deal
//! - reset with a new seed
//! - snapshots and legal-action queries, optionally scoped to one team
//!
//! ## Determinism
//!
//! All randomness comes from the seeded RNG inside the state, so the initial
//! deal plus the log reproduce any position exactly.

mod snapshot;

pub use snapshot::{CellView, HandView, PathView, ScoreView, Snapshot, TokenView};

use im::Vector;
use tracing::{info, instrument};

use crate::core::{Action, ActionRecord, ConfigError, GameConfig, GameError, Variant};
use crate::rules::{GameResult, LegalAction, Rotation, State};

/// One game of tiles and paths.
#[derive(Clone, Debug)]
pub struct Game {
    config: GameConfig,
    seed: u64,
    /// State as dealt, the starting point for replays.
    initial: State,
    state: State,
    log: Vector<ActionRecord>,
}

impl Game {
    /// Validate the config and deal a new game.
    #[instrument(skip_all, fields(teams = config.teams.len(), variant = %config.variant))]
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        let (variant, seed) = config.validate()?;
        let state = State::new(config.teams.clone(), variant, seed)?;
        info!(seed, "game created");

        Ok(Self {
            config,
            seed,
            initial: state.clone(),
            state,
            log: Vector::new(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[must_use]
    pub fn variant(&self) -> Variant {
        self.state.variant()
    }

    #[must_use]
    pub fn state(&self) -> &State {
        &self.state
    }

    /// Every successful action so far.
    #[must_use]
    pub fn actions(&self) -> &Vector<ActionRecord> {
        &self.log
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    #[must_use]
    pub fn outcome(&self) -> Option<GameResult> {
        self.state.result()
    }

    /// Apply one action for `team` and log it on success.
    #[instrument(skip(self), fields(seed = self.seed))]
    pub fn apply(&mut self, team: &str, action: Action) -> Result<(), GameError> {
        apply_to(&mut self.state, team, &action)?;
        let sequence = self.log.len() as u32;
        self.log.push_back(ActionRecord::new(team, action, sequence));
        Ok(())
    }

    /// Take back the last action.
    #[instrument(skip(self), fields(seed = self.seed, logged = self.log.len()))]
    pub fn undo(&mut self) -> Result<(), GameError> {
        let Some(keep) = self.log.len().checked_sub(1) else {
            return Err(GameError::NothingToUndo);
        };

        let mut state = self.initial.clone();
        for (index, record) in self.log.iter().take(keep).enumerate() {
            apply_to(&mut state, &record.team, &record.action).map_err(|source| {
                GameError::ReplayFailed {
                    index,
                    source: Box::new(source),
                }
            })?;
        }

        self.state = state;
        self.log.pop_back();
        Ok(())
    }

    /// Start over with the same teams and variant and a new seed.
    pub fn reset(&mut self, seed: u64) -> Result<(), ConfigError> {
        *self = Self::new(self.config.clone().with_seed(seed))?;
        Ok(())
    }

    /// Current view, with hands and legal actions limited to `team` if given.
    pub fn snapshot(&self, team: Option<&str>) -> Result<Snapshot, GameError> {
        let scope = team.map(|t| self.state.team_id(t)).transpose()?;
        Ok(Snapshot::capture(&self.state, scope, &self.log))
    }

    /// Actions available to `team`, or to every team.
    pub fn legal_actions(&self, team: Option<&str>) -> Result<Vec<LegalAction>, GameError> {
        let scope = team.map(|t| self.state.team_id(t)).transpose()?;
        Ok(self.state.legal_actions(scope))
    }
}

fn apply_to(state: &mut State, team: &str, action: &Action) -> Result<(), GameError> {
    match action {
        Action::RotateLeft { tile } => state.rotate(team, tile, Rotation::Left),
        Action::RotateRight { tile } => state.rotate(team, tile, Rotation::Right),
        Action::PlaceTile { row, col, tile } => state.place_tile(team, tile, *row, *col),
        Action::SetWinners { winners } => state.set_winners(winners.as_slice()),
    }
}
