//! Legal move generation.

use crate::{Bitboard, Board};
use loa_core::{Direction, Move, Square};

/// Lazy iterator over the legal moves of the side to move.
///
/// Enumeration order is fixed and observable: origin squares in index
/// order (a1, b1, ..., h1, a2, ..., h8), and for each origin the
/// directions in [`Direction::ALL`] order. The search engine's tie-breaks
/// and tests depend on this order.
///
/// The iterator borrows the board; to restart, call
/// [`Board::legal_moves`] again.
pub struct LegalMoves<'a> {
    board: &'a Board,
    /// Mover's pieces not yet scanned.
    remaining: Bitboard,
    current: Option<Square>,
    next_dir: usize,
}

impl<'a> LegalMoves<'a> {
    pub(crate) fn new(board: &'a Board) -> Self {
        LegalMoves {
            board,
            remaining: board.pieces(board.turn()),
            current: None,
            next_dir: 0,
        }
    }
}

impl Iterator for LegalMoves<'_> {
    type Item = Move;

    fn next(&mut self) -> Option<Move> {
        loop {
            let from = match self.current {
                Some(from) => from,
                None => {
                    let from = self.remaining.pop_first()?;
                    self.current = Some(from);
                    self.next_dir = 0;
                    from
                }
            };
            while self.next_dir < Direction::ALL.len() {
                let dir = Direction::ALL[self.next_dir];
                self.next_dir += 1;
                if let Some(m) = self.board.move_from(from, dir) {
                    if self.board.is_legal(m) {
                        return Some(m);
                    }
                }
            }
            self.current = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loa_core::Piece;

    #[test]
    fn initial_position_has_36_moves() {
        let board = Board::new();
        assert_eq!(board.legal_moves().count(), 36);
        assert!(board.has_legal_move());
    }

    #[test]
    fn generation_order_is_stable() {
        let board = Board::new();
        let moves: Vec<String> = board.legal_moves().map(|m| m.to_string()).collect();
        // b1 is the first scanned black piece; North, NorthEast, and East
        // are its legal directions, in table order. The NorthEast line
        // holds two pieces (b1 and white h7), so that move lands on d3.
        assert_eq!(&moves[..3], &["b1-b3", "b1-d3", "b1-h1"]);
        // Restarting reproduces the same sequence.
        let again: Vec<String> = board.legal_moves().map(|m| m.to_string()).collect();
        assert_eq!(moves, again);
    }

    #[test]
    fn every_generated_move_is_legal_for_the_mover() {
        let board = Board::new();
        for m in board.legal_moves() {
            assert!(board.is_legal(m));
            assert_eq!(m.moved(), Piece::Black);
            assert_eq!(m.length(), board.pieces_on_line(m.from(), m.direction()));
        }
    }

    #[test]
    fn moves_for_the_side_to_move_only() {
        let mut board = Board::new();
        let first = board.legal_moves().next().unwrap();
        board.make_move(first);
        for m in board.legal_moves() {
            assert_eq!(m.moved(), Piece::White);
        }
    }
}
