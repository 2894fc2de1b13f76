//! The playing surface and the tokens that travel over it.
//!
//! ## Coordinates
//!
//! Rows grow southwards from 0 and columns eastwards from 0. A token is
//! addressed by its cell plus the notch it is sitting on; see
//! [`crate::tiles::Notch`] for the notch layout.

pub mod grid;
pub mod token;

pub use grid::Board;
pub use token::Token;

pub const ROWS: usize = 6;
pub const COLUMNS: usize = 6;

/// Cells on the outer ring; each team needs one to start from.
pub const BORDER_CELLS: usize = 2 * (ROWS + COLUMNS) - 4;
