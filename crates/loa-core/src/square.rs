//! Board square representation.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error for a malformed square designator.
///
/// A designator is exactly two characters: a lowercase letter `a`-`h`
/// followed by a digit `1`-`8`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("bad square designator: {0:?}")]
pub struct SquareParseError(pub String);

/// A file (column) on the board, from a to h.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum File {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
    E = 4,
    F = 5,
    G = 6,
    H = 7,
}

impl File {
    /// All files in order.
    pub const ALL: [File; 8] = [
        File::A,
        File::B,
        File::C,
        File::D,
        File::E,
        File::F,
        File::G,
        File::H,
    ];

    /// Creates a file from index (0-7).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(File::A),
            1 => Some(File::B),
            2 => Some(File::C),
            3 => Some(File::D),
            4 => Some(File::E),
            5 => Some(File::F),
            6 => Some(File::G),
            7 => Some(File::H),
            _ => None,
        }
    }

    /// Creates a file from a character. Only lowercase `a`-`h` is accepted;
    /// designators are case-sensitive.
    #[inline]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'a' => Some(File::A),
            'b' => Some(File::B),
            'c' => Some(File::C),
            'd' => Some(File::D),
            'e' => Some(File::E),
            'f' => Some(File::F),
            'g' => Some(File::G),
            'h' => Some(File::H),
            _ => None,
        }
    }

    /// Returns the index (0-7).
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns the character representation.
    #[inline]
    pub const fn to_char(self) -> char {
        (b'a' + self as u8) as char
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A rank (row) on the board, from 1 to 8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Rank {
    R1 = 0,
    R2 = 1,
    R3 = 2,
    R4 = 3,
    R5 = 4,
    R6 = 5,
    R7 = 6,
    R8 = 7,
}

impl Rank {
    /// All ranks in order.
    pub const ALL: [Rank; 8] = [
        Rank::R1,
        Rank::R2,
        Rank::R3,
        Rank::R4,
        Rank::R5,
        Rank::R6,
        Rank::R7,
        Rank::R8,
    ];

    /// Creates a rank from index (0-7).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Rank::R1),
            1 => Some(Rank::R2),
            2 => Some(Rank::R3),
            3 => Some(Rank::R4),
            4 => Some(Rank::R5),
            5 => Some(Rank::R6),
            6 => Some(Rank::R7),
            7 => Some(Rank::R8),
            _ => None,
        }
    }

    /// Creates a rank from a character ('1'-'8').
    #[inline]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '1' => Some(Rank::R1),
            '2' => Some(Rank::R2),
            '3' => Some(Rank::R3),
            '4' => Some(Rank::R4),
            '5' => Some(Rank::R5),
            '6' => Some(Rank::R6),
            '7' => Some(Rank::R7),
            '8' => Some(Rank::R8),
            _ => None,
        }
    }

    /// Returns the index (0-7).
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns the character representation.
    #[inline]
    pub const fn to_char(self) -> char {
        (b'1' + self as u8) as char
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A square on the board, indexed 0-63.
///
/// Squares are indexed in little-endian rank-file mapping:
/// - a1 = 0, b1 = 1, ..., h1 = 7
/// - a2 = 8, ..., h8 = 63
///
/// This puts ascending indices in the scan order move generation is
/// specified in: (a1, b1, ..., h1, a2, ...).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square(u8);

impl Square {
    /// Creates a square from file and rank.
    #[inline]
    pub const fn new(file: File, rank: Rank) -> Self {
        Square(rank.index() * 8 + file.index())
    }

    /// Creates a square from index (0-63).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 64 {
            Some(Square(index))
        } else {
            None
        }
    }

    /// Creates a square from index without bounds checking.
    ///
    /// # Safety
    /// The index must be in the range 0-63.
    #[inline]
    pub const unsafe fn from_index_unchecked(index: u8) -> Self {
        debug_assert!(index < 64);
        Square(index)
    }

    /// Parses a square designator (e.g., "b4").
    pub const fn from_designator(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let file = match File::from_char(bytes[0] as char) {
            Some(f) => f,
            None => return None,
        };
        let rank = match Rank::from_char(bytes[1] as char) {
            Some(r) => r,
            None => return None,
        };
        Some(Square::new(file, rank))
    }

    /// Returns the index (0-63).
    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Returns the file of this square.
    #[inline]
    pub const fn file(self) -> File {
        match File::from_index(self.0 % 8) {
            Some(f) => f,
            None => unreachable!(),
        }
    }

    /// Returns the rank of this square.
    #[inline]
    pub const fn rank(self) -> Rank {
        match Rank::from_index(self.0 / 8) {
            Some(r) => r,
            None => unreachable!(),
        }
    }

    /// Returns the 1-based column number (1-8, a = 1).
    #[inline]
    pub const fn col(self) -> u8 {
        self.0 % 8 + 1
    }

    /// Returns the 1-based row number (1-8).
    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / 8 + 1
    }

    /// Steps by the given column and row deltas, or None if the result
    /// leaves the board.
    #[inline]
    pub const fn offset(self, dc: i8, dr: i8) -> Option<Square> {
        let file = (self.0 % 8) as i8 + dc;
        let rank = (self.0 / 8) as i8 + dr;
        if file < 0 || file > 7 || rank < 0 || rank > 7 {
            None
        } else {
            Some(Square((rank * 8 + file) as u8))
        }
    }

    /// Returns the designator for this square.
    pub fn designator(self) -> String {
        format!("{}{}", self.file(), self.rank())
    }
}

impl FromStr for Square {
    type Err = SquareParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Square::from_designator(s).ok_or_else(|| SquareParseError(s.to_string()))
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self.designator())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn square_new() {
        let b4 = Square::new(File::B, Rank::R4);
        assert_eq!(b4.file(), File::B);
        assert_eq!(b4.rank(), Rank::R4);
        assert_eq!(b4.index(), 25);
        assert_eq!(b4.col(), 2);
        assert_eq!(b4.row(), 4);
    }

    #[test]
    fn square_from_designator() {
        assert_eq!(
            Square::from_designator("a1"),
            Some(Square::new(File::A, Rank::R1))
        );
        assert_eq!(
            Square::from_designator("h8"),
            Some(Square::new(File::H, Rank::R8))
        );
        assert_eq!(Square::from_designator("i1"), None);
        assert_eq!(Square::from_designator("a9"), None);
        assert_eq!(Square::from_designator("a0"), None);
        assert_eq!(Square::from_designator("A1"), None);
        assert_eq!(Square::from_designator("a"), None);
        assert_eq!(Square::from_designator("a12"), None);
        assert_eq!(Square::from_designator(""), None);
    }

    #[test]
    fn square_parse_error() {
        let err = "e9".parse::<Square>().unwrap_err();
        assert_eq!(err, SquareParseError("e9".to_string()));
        assert!(err.to_string().contains("e9"));
        assert_eq!("e4".parse::<Square>().unwrap().designator(), "e4");
    }

    #[test]
    fn square_offset() {
        let b4 = Square::new(File::B, Rank::R4);
        assert_eq!(b4.offset(1, 1), Some(Square::new(File::C, Rank::R5)));
        assert_eq!(b4.offset(-1, 0), Some(Square::new(File::A, Rank::R4)));
        assert_eq!(b4.offset(-2, 0), None);
        assert_eq!(b4.offset(0, 5), None);
        let h8 = Square::new(File::H, Rank::R8);
        assert_eq!(h8.offset(1, 0), None);
        assert_eq!(h8.offset(0, 1), None);
    }

    proptest! {
        #[test]
        fn designator_round_trip(index in 0u8..64) {
            let sq = Square::from_index(index).unwrap();
            prop_assert_eq!(sq.designator().parse::<Square>().unwrap(), sq);
        }
    }
}
