//! Player abstraction: where the next move comes from.

use crate::{Board, SearchEngine};
use loa_core::{Move, Piece};

/// Source of moves for a manually operated player.
///
/// This is the boundary to the input subsystem: implementations block
/// until they can hand back a move that has already been parsed and
/// checked legal against `board`, or return `None` to signal that the
/// controlling session state changed (game stopped, seat reassigned)
/// instead of producing a move.
pub trait MoveSource {
    fn next_move(&mut self, board: &Board) -> Option<Move>;
}

/// The automated player: a side plus its search configuration.
#[derive(Clone, Debug)]
pub struct MachinePlayer {
    side: Piece,
    engine: SearchEngine,
}

impl MachinePlayer {
    /// Creates an automated player for `side` with the given tie-break
    /// seed.
    pub fn new(side: Piece, seed: u64) -> Self {
        assert!(side.is_side(), "a player must be black or white");
        MachinePlayer {
            side,
            engine: SearchEngine::new(seed),
        }
    }

    /// Returns the side this player plays.
    pub fn side(&self) -> Piece {
        self.side
    }

    /// Reseeds the tie-breaking source.
    pub fn reseed(&mut self, seed: u64) {
        self.engine.reseed(seed);
    }

    /// Selects this player's next move on `board`.
    pub fn make_move(&mut self, board: &Board) -> Option<Move> {
        debug_assert_eq!(board.turn(), self.side);
        self.engine.find_move(board)
    }
}

/// A participant in the game: either a manual seat fed by a
/// [`MoveSource`], or the search engine.
///
/// Both variants expose the single capability `make_move`; `None` means
/// the input source signaled a session change (manual) or that no legal
/// move exists (automated).
pub enum Player {
    Human(Box<dyn MoveSource>),
    Machine(MachinePlayer),
}

impl Player {
    /// Creates a manual player fed by `source`.
    pub fn human(source: Box<dyn MoveSource>) -> Self {
        Player::Human(source)
    }

    /// Creates an automated player for `side`.
    pub fn machine(side: Piece, seed: u64) -> Self {
        Player::Machine(MachinePlayer::new(side, seed))
    }

    /// Returns true for the automated variant.
    pub fn is_machine(&self) -> bool {
        matches!(self, Player::Machine(_))
    }

    /// Produces the player's next move for the given board.
    pub fn make_move(&mut self, board: &Board) -> Option<Move> {
        match self {
            Player::Human(source) => source.next_move(board),
            Player::Machine(machine) => machine.make_move(board),
        }
    }

    /// Reseeds an automated player's randomness source; manual seats have
    /// none and ignore this.
    pub fn reseed(&mut self, seed: u64) {
        if let Player::Machine(machine) = self {
            machine.reseed(seed);
        }
    }
}
