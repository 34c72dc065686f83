//! Lines of Action rules engine and automated player.
//!
//! This crate provides:
//! - [`Bitboard`] - 64-bit square sets with the operations the rules need
//! - [`Board`] - game state: legality checking, reversible move
//!   application, lazy move generation, and connectivity win detection
//! - [`SearchEngine`] - fixed-depth negamax move selection with seeded
//!   random tie-breaking
//! - [`Player`] - the human-input / automated player pair behind a single
//!   `make_move` capability
//!
//! # Architecture
//!
//! Each side's pieces live in one bitboard. Line-of-action piece counts
//! are popcounts against precomputed per-square line masks, and the win
//! condition (all of a side's pieces in one 8-connected group) is a
//! flood fill by king-neighbor dilation.
//!
//! # Example
//!
//! ```
//! use loa_engine::{Board, SearchEngine};
//!
//! let mut board = Board::new();
//! let m = board.parse_move("b1-b3").unwrap();
//! assert!(board.is_legal(m));
//! board.make_move(m);
//!
//! let engine = SearchEngine::new(42);
//! let reply = engine.find_move(&board).unwrap();
//! board.make_move(reply);
//! assert!(!board.game_over());
//! ```

mod bitboard;
mod board;
mod movegen;
mod player;
mod rng;
mod search;

pub use bitboard::Bitboard;
pub use board::{Board, MoveParseError};
pub use movegen::LegalMoves;
pub use player::{MachinePlayer, MoveSource, Player};
pub use rng::GameRng;
pub use search::{SearchEngine, SEARCH_DEPTH};
