use std::ops::{Deref, DerefMut};

use cozy_chess::{Board, Color, Move, Piece, Square};

use crate::board::san::{self, MoveLabel};
use crate::error::{AnalysisError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawReason {
    FiftyMoveRule,
    InsufficientMaterial,
    ThreefoldRepetition,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    /// Side to move is mated.
    Checkmate,
    Stalemate,
    Draw(DrawReason),
}

/// Mutable board handle with an explicit undo stack.
///
/// Every analysis request owns one of these; it is never shared across calls.
#[derive(Clone, Debug)]
pub struct Position {
    board: Board,
    stack: Vec<Board>,
    // Keys of every position reached since construction, current one last.
    keys: Vec<u64>,
}

impl Position {
    pub fn startpos() -> Self { Self::from_board(Board::default()) }

    pub fn from_board(board: Board) -> Self {
        let key = board.hash();
        Self { board, stack: Vec::with_capacity(16), keys: vec![key] }
    }

    pub fn from_fen(fen: &str) -> Result<Self> {
        let fen = fen.trim();
        if fen.is_empty() {
            return Err(AnalysisError::invalid_position(fen, "empty FEN"));
        }
        Board::from_fen(fen, false)
            .map(Self::from_board)
            .map_err(|e| AnalysisError::invalid_position(fen, format!("{e:?}")))
    }

    /// Parse `fen` then play `moves` (UCI) on top of it.
    pub fn from_fen_and_moves(fen: &str, moves: &[&str]) -> Result<Self> {
        let mut pos = Self::from_fen(fen)?;
        for m in moves { pos.play_uci(m)?; }
        Ok(pos)
    }

    pub fn board(&self) -> &Board { &self.board }

    pub fn fen(&self) -> String { format!("{}", self.board) }

    pub fn side_to_move(&self) -> Color { self.board.side_to_move() }

    pub fn white_to_move(&self) -> bool { self.board.side_to_move() == Color::White }

    /// Number of moves currently applied on top of the root.
    pub fn depth_from_root(&self) -> usize { self.stack.len() }

    /// Legal moves in cozy-chess enumeration order.
    pub fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::with_capacity(64);
        self.board.generate_moves(|ml| { moves.extend(ml); false });
        moves
    }

    pub fn has_legal_moves(&self) -> bool {
        let mut any = false;
        self.board.generate_moves(|ml| { any = !ml.is_empty(); any });
        any
    }

    pub fn label(&self, mv: Move) -> MoveLabel { san::label(&self.board, mv) }

    pub fn find_uci(&self, uci: &str) -> Option<Move> {
        let mut found = None;
        self.board.generate_moves(|ml| {
            for m in ml {
                if format!("{}", m) == uci || san::label(&self.board, m).uci() == uci { found = Some(m); break; }
            }
            found.is_some()
        });
        found
    }

    pub fn play_uci(&mut self, uci: &str) -> Result<()> {
        match self.find_uci(uci) {
            Some(m) => { self.apply(m); Ok(()) }
            None => Err(AnalysisError::invalid_position(&self.fen(), format!("illegal move {uci}"))),
        }
    }

    /// Play a legal move. Pair with [`Position::undo`], or use
    /// [`Position::play_scoped`] to have the undo happen automatically.
    pub fn apply(&mut self, mv: Move) {
        let prev = self.board.clone();
        self.board.play(mv);
        self.stack.push(prev);
        self.keys.push(self.board.hash());
    }

    /// Restore the board from before the last `apply`. Returns false at the root.
    pub fn undo(&mut self) -> bool {
        match self.stack.pop() {
            Some(prev) => {
                self.board = prev;
                self.keys.pop();
                true
            }
            None => false,
        }
    }

    pub fn play_scoped(&mut self, mv: Move) -> MoveGuard<'_> {
        self.apply(mv);
        MoveGuard { pos: self }
    }

    fn repetitions(&self) -> usize {
        match self.keys.last() {
            Some(&cur) => self.keys.iter().filter(|&&k| k == cur).count(),
            None => 0,
        }
    }

    pub fn status(&self) -> GameStatus {
        if !self.has_legal_moves() {
            return if self.board.checkers().is_empty() { GameStatus::Stalemate } else { GameStatus::Checkmate };
        }
        if self.board.halfmove_clock() >= 100 {
            return GameStatus::Draw(DrawReason::FiftyMoveRule);
        }
        if insufficient_material(&self.board) {
            return GameStatus::Draw(DrawReason::InsufficientMaterial);
        }
        if self.repetitions() >= 3 {
            return GameStatus::Draw(DrawReason::ThreefoldRepetition);
        }
        GameStatus::Ongoing
    }

    pub fn is_terminal(&self) -> bool { self.status() != GameStatus::Ongoing }

    pub fn is_checkmate(&self) -> bool { self.status() == GameStatus::Checkmate }

    /// Stalemate or any drawn-by-rule position.
    pub fn is_draw(&self) -> bool {
        matches!(self.status(), GameStatus::Stalemate | GameStatus::Draw(_))
    }
}

/// Undoes its move when dropped.
pub struct MoveGuard<'a> {
    pos: &'a mut Position,
}

impl Deref for MoveGuard<'_> {
    type Target = Position;
    fn deref(&self) -> &Position { self.pos }
}

impl DerefMut for MoveGuard<'_> {
    fn deref_mut(&mut self) -> &mut Position { self.pos }
}

impl Drop for MoveGuard<'_> {
    fn drop(&mut self) { self.pos.undo(); }
}

fn is_light(sq: Square) -> bool { (sq.file() as usize + sq.rank() as usize) % 2 == 1 }

/// K v K, K+minor v K, or only kings and bishops with every bishop on one square colour.
pub fn insufficient_material(board: &Board) -> bool {
    let others = board.occupied() & !board.pieces(Piece::King);
    match others.len() {
        0 => true,
        1 => !(others & (board.pieces(Piece::Knight) | board.pieces(Piece::Bishop))).is_empty(),
        _ => {
            let bishops = board.pieces(Piece::Bishop);
            if others != bishops { return false; }
            let light = bishops.into_iter().filter(|&sq| is_light(sq)).count();
            light == 0 || light == bishops.len() as usize
        }
    }
}
