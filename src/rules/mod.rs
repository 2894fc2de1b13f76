//! Game rules.
//!
//! `engine` holds the turn-resolution state machine; `variant` holds the
//! scoring and win rules that differ between variants.

pub mod engine;
pub mod variant;

pub use engine::{GameResult, Hands, LegalAction, Rotation, State};
pub use variant::{leaders, Resolution};
