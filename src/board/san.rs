use cozy_chess::{Board, File, Move, Piece, Square};
use serde::Serialize;

/// Presentation form of a move: SAN plus conventional from/to squares.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveLabel {
    pub san: String,
    pub from: String,
    pub to: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promotion: Option<char>,
}

impl MoveLabel {
    /// Conventional UCI text (castling as king two-step, e.g. `e1g1`).
    pub fn uci(&self) -> String {
        match self.promotion {
            Some(p) => format!("{}{}{}", self.from, self.to, p),
            None => format!("{}{}", self.from, self.to),
        }
    }
}

fn piece_letter(piece: Piece) -> char {
    match piece {
        Piece::Pawn => 'P',
        Piece::Knight => 'N',
        Piece::Bishop => 'B',
        Piece::Rook => 'R',
        Piece::Queen => 'Q',
        Piece::King => 'K',
    }
}

fn file_char(sq: Square) -> char { (b'a' + sq.file() as u8) as char }
fn rank_char(sq: Square) -> char { (b'1' + sq.rank() as u8) as char }

/// cozy-chess encodes castling as the king capturing its own rook.
pub fn is_castle(board: &Board, mv: Move) -> bool {
    board.piece_on(mv.from) == Some(Piece::King) && board.color_on(mv.to) == Some(board.side_to_move())
}

fn is_kingside(mv: Move) -> bool { (mv.to.file() as u8) > (mv.from.file() as u8) }

/// Destination square as a player would write it.
pub fn display_destination(board: &Board, mv: Move) -> Square {
    if is_castle(board, mv) {
        let file = if is_kingside(mv) { File::G } else { File::C };
        Square::new(file, mv.from.rank())
    } else {
        mv.to
    }
}

fn disambiguation(board: &Board, piece: Piece, mv: Move) -> String {
    let mut rivals: Vec<Square> = Vec::new();
    board.generate_moves(|ml| {
        if ml.piece == piece {
            for m in ml {
                if m.to == mv.to && m.from != mv.from { rivals.push(m.from); }
            }
        }
        false
    });
    if rivals.is_empty() { return String::new(); }
    let shares_file = rivals.iter().any(|s| s.file() == mv.from.file());
    let shares_rank = rivals.iter().any(|s| s.rank() == mv.from.rank());
    if !shares_file {
        file_char(mv.from).to_string()
    } else if !shares_rank {
        rank_char(mv.from).to_string()
    } else {
        format!("{}{}", file_char(mv.from), rank_char(mv.from))
    }
}

/// Standard Algebraic Notation for a legal `mv` on `board`.
pub fn render(board: &Board, mv: Move) -> String {
    let mut san = String::with_capacity(8);
    if is_castle(board, mv) {
        san.push_str(if is_kingside(mv) { "O-O" } else { "O-O-O" });
    } else {
        let piece = board.piece_on(mv.from).unwrap_or(Piece::Pawn);
        let capture = board.color_on(mv.to).is_some()
            || (piece == Piece::Pawn && mv.from.file() != mv.to.file());
        if piece == Piece::Pawn {
            if capture { san.push(file_char(mv.from)); }
        } else {
            san.push(piece_letter(piece));
            san.push_str(&disambiguation(board, piece, mv));
        }
        if capture { san.push('x'); }
        san.push_str(&mv.to.to_string());
        if let Some(p) = mv.promotion {
            san.push('=');
            san.push(piece_letter(p));
        }
    }
    let mut after = board.clone();
    after.play(mv);
    if !after.checkers().is_empty() {
        let mut escapes = false;
        after.generate_moves(|_| { escapes = true; true });
        san.push(if escapes { '+' } else { '#' });
    }
    san
}

pub fn label(board: &Board, mv: Move) -> MoveLabel {
    MoveLabel {
        san: render(board, mv),
        from: mv.from.to_string(),
        to: display_destination(board, mv).to_string(),
        promotion: mv.promotion.map(|p| piece_letter(p).to_ascii_lowercase()),
    }
}
