use cozy_chess::Move;
use log::debug;
use serde::Serialize;

use crate::board::{MoveLabel, Position};
use crate::error::Result;
use crate::search::eval::SCORE_INF;
use crate::search::minimax::Searcher;

/// A root move with its search score (White-positive).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredMove {
    #[serde(skip)]
    pub mv: Move,
    #[serde(flatten)]
    pub label: MoveLabel,
    pub score: i32,
}

impl ScoredMove {
    pub fn san(&self) -> &str { &self.label.san }
}

fn score_root_moves(pos: &mut Position, depth: u32) -> Vec<ScoredMove> {
    let maximizing = pos.white_to_move();
    let mut searcher = Searcher::default();
    let moves = pos.legal_moves();
    let mut scored = Vec::with_capacity(moves.len());
    for mv in moves {
        let label = pos.label(mv);
        let score = {
            let mut child = pos.play_scoped(mv);
            searcher.search(&mut child, depth.saturating_sub(1), -SCORE_INF, SCORE_INF, !maximizing)
        };
        debug!("root {} score {}", label.san, score);
        scored.push(ScoredMove { mv, label, score });
    }
    debug!("scored {} root moves at depth {} ({} nodes)", scored.len(), depth, searcher.nodes());
    scored
}

fn better(maximizing: bool, score: i32, best: i32) -> bool {
    if maximizing { score > best } else { score < best }
}

/// Best move for the side to move; `None` on terminal positions. Ties go to
/// the first move in enumeration order.
pub fn best_move(pos: &mut Position, depth: u32) -> Option<ScoredMove> {
    if pos.is_terminal() { return None; }
    let maximizing = pos.white_to_move();
    let mut best: Option<ScoredMove> = None;
    for cand in score_root_moves(pos, depth) {
        let improves = match &best {
            None => true,
            Some(b) => better(maximizing, cand.score, b.score),
        };
        if improves { best = Some(cand); }
    }
    best
}

/// Up to `top_n` root moves, best for the mover first. Equal scores keep
/// enumeration order. Empty on terminal positions.
pub fn top_moves(pos: &mut Position, depth: u32, top_n: usize) -> Vec<ScoredMove> {
    if pos.is_terminal() { return Vec::new(); }
    let mut scored = score_root_moves(pos, depth);
    if pos.white_to_move() {
        scored.sort_by(|a, b| b.score.cmp(&a.score));
    } else {
        scored.sort_by(|a, b| a.score.cmp(&b.score));
    }
    scored.truncate(top_n);
    scored
}

pub fn best_move_fen(fen: &str, depth: u32) -> Result<Option<ScoredMove>> {
    let mut pos = Position::from_fen(fen)?;
    Ok(best_move(&mut pos, depth))
}

pub fn top_moves_fen(fen: &str, depth: u32, top_n: usize) -> Result<Vec<ScoredMove>> {
    let mut pos = Position::from_fen(fen)?;
    Ok(top_moves(&mut pos, depth, top_n))
}
