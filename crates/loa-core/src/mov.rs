//! Move representation.

use crate::{Direction, Piece, Square};
use std::fmt;

/// A single Lines of Action move.
///
/// A `Move` describes a transition without owning any board state: where
/// the piece starts and lands, the direction and distance traveled, which
/// side is moving, and what the destination held before the move (the
/// captured piece, possibly `Empty`). Moves are built against a concrete
/// board, which fills in the piece context.
///
/// The `value` field is a scratch annotation written by the search engine;
/// it is excluded from equality.
#[derive(Debug, Clone, Copy)]
pub struct Move {
    from: Square,
    to: Square,
    direction: Direction,
    length: u8,
    moved: Piece,
    captured: Piece,
    value: i32,
}

impl Move {
    /// Creates a move. `length` is the number of squares traveled, which
    /// for a legal move equals the number of pieces on the line of action.
    pub const fn new(
        from: Square,
        to: Square,
        direction: Direction,
        length: u8,
        moved: Piece,
        captured: Piece,
    ) -> Self {
        Move {
            from,
            to,
            direction,
            length,
            moved,
            captured,
            value: 0,
        }
    }

    /// Returns the origin square.
    #[inline]
    pub const fn from(self) -> Square {
        self.from
    }

    /// Returns the destination square.
    #[inline]
    pub const fn to(self) -> Square {
        self.to
    }

    /// Returns the direction of travel.
    #[inline]
    pub const fn direction(self) -> Direction {
        self.direction
    }

    /// Returns the number of squares traveled.
    #[inline]
    pub const fn length(self) -> u8 {
        self.length
    }

    /// Returns the side making the move.
    #[inline]
    pub const fn moved(self) -> Piece {
        self.moved
    }

    /// Returns the piece that occupied the destination before the move.
    #[inline]
    pub const fn captured(self) -> Piece {
        self.captured
    }

    /// Returns true if the move lands on an opposing piece.
    #[inline]
    pub const fn is_capture(self) -> bool {
        self.captured.is_side()
    }

    /// Returns the search annotation.
    #[inline]
    pub const fn value(self) -> i32 {
        self.value
    }

    /// Sets the search annotation.
    #[inline]
    pub fn set_value(&mut self, value: i32) {
        self.value = value;
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from
            && self.to == other.to
            && self.direction == other.direction
            && self.length == other.length
            && self.moved == other.moved
            && self.captured == other.captured
    }
}

impl Eq for Move {}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.from, self.to)
    }
}
