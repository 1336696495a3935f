use cozy_chess::{Board, Color, Piece};

use crate::board::{GameStatus, Position};
use crate::error::Result;

const PAWN: i32 = 100;
const KNIGHT: i32 = 300;
const BISHOP: i32 = 300;
const ROOK: i32 = 500;
const QUEEN: i32 = 900;
const KING: i32 = 0;

pub const PIECE_VALUES: [(Piece, i32); 6] = [
    (Piece::Pawn, PAWN),
    (Piece::Knight, KNIGHT),
    (Piece::Bishop, BISHOP),
    (Piece::Rook, ROOK),
    (Piece::Queen, QUEEN),
    (Piece::King, KING),
];

// Terminal sentinels; must dwarf any reachable material sum.
pub const MATE_SCORE: i32 = 100_000;
pub const DRAW_SCORE: i32 = 0;
/// Search window bound, strictly outside every evaluation.
pub const SCORE_INF: i32 = 1_000_000;

pub fn piece_value(piece: Piece) -> i32 {
    match piece {
        Piece::Pawn => PAWN,
        Piece::Knight => KNIGHT,
        Piece::Bishop => BISHOP,
        Piece::Rook => ROOK,
        Piece::Queen => QUEEN,
        Piece::King => KING,
    }
}

pub fn signed_piece_value(color: Color, piece: Piece) -> i32 {
    if color == Color::White { piece_value(piece) } else { -piece_value(piece) }
}

fn count_piece(board: &Board, color: Color, piece: Piece) -> i32 {
    let bb = board.colors(color) & board.pieces(piece);
    bb.len() as i32
}

// Side-agnostic material in centipawns: positive means White has more material.
pub fn material(board: &Board) -> i32 {
    PIECE_VALUES.iter().map(|&(piece, _)| {
        count_piece(board, Color::White, piece) * signed_piece_value(Color::White, piece)
            + count_piece(board, Color::Black, piece) * signed_piece_value(Color::Black, piece)
    }).sum()
}

/// Static score, White-positive. Mate scores `±MATE_SCORE` for the side that
/// delivered it; stalemate and rule draws score `DRAW_SCORE`.
pub fn evaluate(pos: &Position) -> i32 {
    match pos.status() {
        GameStatus::Checkmate => {
            // The side to move has been mated.
            if pos.white_to_move() { -MATE_SCORE } else { MATE_SCORE }
        }
        GameStatus::Stalemate | GameStatus::Draw(_) => DRAW_SCORE,
        GameStatus::Ongoing => material(pos.board()),
    }
}

pub fn evaluate_fen(fen: &str) -> Result<i32> {
    Ok(evaluate(&Position::from_fen(fen)?))
}
