//! Interactive game session.
//!
//! Owns the board and the two player seats, reads the command protocol
//! from standard input, and drives automated seats while a game runs.

use anyhow::Result;
use loa_core::{Move, Piece, Square};
use loa_engine::{Board, MoveSource, Player};
use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::rc::Rc;
use tracing::debug;

const HELP: &str = "\
Commands (moves have the form c0r0-c1r1, e.g. b4-d4):
  start             begin playing from the current position
  clear             stop play and reset to the initial position
  manual <side>     play <side> (black or white) from the keyboard
  auto <side>       let the machine play <side>
  seed <n>          reseed the machine players' random source
  set <cr> <piece>  stop play and put <piece> (black, white, empty) on <cr>
  dump              print the board
  help              print this message
  quit              exit
  # ...             comment, ignored";

/// Hand-off cell for a manual seat: the session validates a typed move,
/// parks it here, and the seat's [`MoveSource`] picks it up.
struct PendingMove(Rc<RefCell<Option<Move>>>);

impl MoveSource for PendingMove {
    fn next_move(&mut self, _board: &Board) -> Option<Move> {
        self.0.borrow_mut().take()
    }
}

/// One interactive series of games.
pub struct Session {
    board: Board,
    players: [Player; 2],
    pending: [Rc<RefCell<Option<Move>>>; 2],
    /// True while a game is running (started and not stopped or finished).
    playing: bool,
    seed: u64,
    quit: bool,
}

impl Session {
    /// Creates a session: black played from the keyboard, white by the
    /// machine, nothing running yet.
    pub fn new(seed: u64) -> Self {
        let pending = [
            Rc::new(RefCell::new(None)),
            Rc::new(RefCell::new(None)),
        ];
        let players = [
            Player::human(Box::new(PendingMove(Rc::clone(&pending[0])))),
            Player::machine(Piece::White, seed),
        ];
        Session {
            board: Board::new(),
            players,
            pending,
            playing: false,
            seed,
            quit: false,
        }
    }

    /// Runs the command loop until `quit` or end of input.
    pub fn run(&mut self) -> Result<()> {
        let stdin = io::stdin();
        self.prompt()?;
        for line in stdin.lock().lines() {
            let line = line?;
            self.handle_line(line.trim());
            if self.quit {
                break;
            }
            self.step_machines();
            self.prompt()?;
        }
        Ok(())
    }

    fn prompt(&self) -> Result<()> {
        print!("> ");
        io::stdout().flush()?;
        Ok(())
    }

    /// Processes one input line: a command, a comment, or move text.
    pub fn handle_line(&mut self, line: &str) {
        if line.is_empty() || line.starts_with('#') {
            return;
        }
        let mut words = line.split_whitespace();
        let command = words.next().unwrap_or_default().to_lowercase();
        let arg1 = words.next().unwrap_or_default().to_lowercase();
        let arg2 = words.next().unwrap_or_default().to_lowercase();
        match command.as_str() {
            "start" => self.playing = true,
            "clear" => {
                self.board.clear();
                self.playing = false;
            }
            "manual" => self.assign_seat(&arg1, true),
            "auto" => self.assign_seat(&arg1, false),
            "seed" => self.reseed(&arg1),
            "set" => self.set_square(&arg1, &arg2),
            "dump" => println!("{}", self.board),
            "help" => println!("{HELP}"),
            "quit" => self.quit = true,
            _ => self.try_move(line),
        }
    }

    /// Lets automated seats move while a game is running, announcing the
    /// winner when the game ends.
    pub fn step_machines(&mut self) {
        while self.playing {
            if self.board.game_over() {
                self.announce_winner();
                self.playing = false;
                break;
            }
            let seat = self.board.turn().index();
            if !self.players[seat].is_machine() {
                break;
            }
            match self.players[seat].make_move(&self.board) {
                Some(m) => {
                    debug!(side = %self.board.turn(), mov = %m, "machine moves");
                    self.apply(m);
                }
                None => break,
            }
        }
    }

    fn try_move(&mut self, line: &str) {
        let m = match self.board.parse_move(line) {
            Ok(m) => m,
            Err(err) => {
                eprintln!("invalid move: {err}");
                return;
            }
        };
        if !self.playing {
            eprintln!("game not started");
            return;
        }
        if !self.board.is_legal(m) {
            eprintln!("illegal move: {line}");
            return;
        }
        let seat = self.board.turn().index();
        *self.pending[seat].borrow_mut() = Some(m);
        if let Some(validated) = self.players[seat].make_move(&self.board) {
            self.apply(validated);
        }
    }

    fn apply(&mut self, m: Move) {
        self.board.make_move(m);
        if self.board.game_over() {
            self.announce_winner();
            self.playing = false;
        }
    }

    fn assign_seat(&mut self, side: &str, manual: bool) {
        let Some(side) = Piece::from_name(side).filter(|p| p.is_side()) else {
            eprintln!("unknown player: {side}");
            return;
        };
        self.playing = false;
        let seat = side.index();
        self.players[seat] = if manual {
            Player::human(Box::new(PendingMove(Rc::clone(&self.pending[seat]))))
        } else {
            Player::machine(side, self.seed)
        };
    }

    fn reseed(&mut self, arg: &str) {
        match arg.parse::<i64>() {
            Ok(seed) => {
                self.seed = seed as u64;
                for player in &mut self.players {
                    player.reseed(self.seed);
                }
            }
            Err(_) => eprintln!("invalid number: {arg}"),
        }
    }

    fn set_square(&mut self, designator: &str, piece: &str) {
        let sq = match designator.parse::<Square>() {
            Ok(sq) => sq,
            Err(err) => {
                eprintln!("{err}");
                return;
            }
        };
        let Some(piece) = Piece::from_name(piece) else {
            eprintln!("unknown piece: {piece}");
            return;
        };
        // Placing a side's piece hands the move to the opponent; placing
        // empty leaves the turn alone.
        let next = piece.is_side().then(|| piece.opposite());
        self.board.set(sq, piece, next);
        self.playing = false;
    }

    fn announce_winner(&self) {
        match self.board.winner() {
            Some(Piece::Black) => println!("Black wins."),
            _ => println!("White wins."),
        }
    }

    /// The current board (for tests).
    #[cfg(test)]
    fn board(&self) -> &Board {
        &self.board
    }
}
