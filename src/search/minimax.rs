use crate::board::Position;
use crate::search::eval::evaluate;

/// Depth-limited minimax over a mutable [`Position`], White-positive scores.
///
/// With `prune` set (the default) alpha-beta cutoffs are taken; the returned
/// value is identical to plain minimax, only `nodes` differs.
#[derive(Debug, Clone)]
pub struct Searcher {
    nodes: u64,
    prune: bool,
}

impl Default for Searcher {
    fn default() -> Self { Self { nodes: 0, prune: true } }
}

impl Searcher {
    /// Unpruned reference search.
    pub fn plain() -> Self { Self { nodes: 0, prune: false } }

    pub fn nodes(&self) -> u64 { self.nodes }

    pub fn search(&mut self, pos: &mut Position, depth: u32, mut alpha: i32, mut beta: i32, maximizing: bool) -> i32 {
        self.nodes += 1;
        if depth == 0 || pos.is_terminal() {
            return evaluate(pos);
        }
        let moves = pos.legal_moves();
        if moves.is_empty() {
            return evaluate(pos);
        }

        let mut best = if maximizing { -i32::MAX } else { i32::MAX };
        for mv in moves {
            let score = {
                let mut child = pos.play_scoped(mv);
                self.search(&mut child, depth - 1, alpha, beta, !maximizing)
            };
            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }
            if self.prune && beta <= alpha { break; }
        }
        best
    }
}
