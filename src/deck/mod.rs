//! Draw pile and hands.
//!
//! Tiles are never created or destroyed after setup: they move between the
//! deck, the hands and the board, and back to the deck when a team is
//! eliminated.

#[allow(clippy::module_inception)]
pub mod deck;
pub mod hand;

pub use deck::Deck;
pub use hand::{Hand, HAND_SIZE};
