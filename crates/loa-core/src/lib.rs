//! Core types for Lines of Action.
//!
//! This crate provides the fundamental types used across the engine:
//! - [`Piece`] for the two sides and empty squares
//! - [`Square`], [`File`], and [`Rank`] for board coordinates
//! - [`Direction`] for the eight compass directions a line of action runs in
//! - [`Move`] for move description

mod direction;
mod mov;
mod piece;
mod square;

pub use direction::Direction;
pub use mov::Move;
pub use piece::Piece;
pub use square::{File, Rank, Square, SquareParseError};
