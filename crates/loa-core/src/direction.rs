//! Compass directions.

use crate::Square;

/// One of the eight directions a piece can move in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// All directions, in scan order.
    ///
    /// Move generation walks this table in order for every square, and the
    /// search breaks score ties by position in the resulting move sequence,
    /// so the order is part of the observable contract and must not change.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// Returns the column delta (-1, 0, or 1).
    #[inline]
    pub const fn dc(self) -> i8 {
        match self {
            Direction::North | Direction::South => 0,
            Direction::NorthEast | Direction::East | Direction::SouthEast => 1,
            Direction::SouthWest | Direction::West | Direction::NorthWest => -1,
        }
    }

    /// Returns the row delta (-1, 0, or 1).
    #[inline]
    pub const fn dr(self) -> i8 {
        match self {
            Direction::East | Direction::West => 0,
            Direction::North | Direction::NorthEast | Direction::NorthWest => 1,
            Direction::SouthEast | Direction::South | Direction::SouthWest => -1,
        }
    }

    /// Returns the direction pointing the opposite way.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::NorthEast => Direction::SouthWest,
            Direction::East => Direction::West,
            Direction::SouthEast => Direction::NorthWest,
            Direction::South => Direction::North,
            Direction::SouthWest => Direction::NorthEast,
            Direction::West => Direction::East,
            Direction::NorthWest => Direction::SouthEast,
        }
    }

    /// Returns the orientation index of the line this direction runs along
    /// (0 = file, 1 = rank, 2 = diagonal, 3 = anti-diagonal). Opposite
    /// directions share an orientation.
    #[inline]
    pub const fn axis(self) -> usize {
        match self {
            Direction::North | Direction::South => 0,
            Direction::East | Direction::West => 1,
            Direction::NorthEast | Direction::SouthWest => 2,
            Direction::NorthWest | Direction::SouthEast => 3,
        }
    }

    /// The direction from one square toward another, provided they share a
    /// row, column, or diagonal. Returns None for unaligned pairs and for
    /// `from == to`.
    pub fn between(from: Square, to: Square) -> Option<Direction> {
        let dcol = to.col() as i8 - from.col() as i8;
        let drow = to.row() as i8 - from.row() as i8;
        if dcol == 0 && drow == 0 {
            return None;
        }
        if dcol != 0 && drow != 0 && dcol.abs() != drow.abs() {
            return None;
        }
        Direction::ALL
            .into_iter()
            .find(|d| d.dc() == dcol.signum() && d.dr() == drow.signum())
    }
}
