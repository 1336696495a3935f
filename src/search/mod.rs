pub mod eval;
pub mod minimax;
pub mod rank;

pub use eval::{evaluate, MATE_SCORE, DRAW_SCORE, SCORE_INF};
pub use minimax::Searcher;
pub use rank::{best_move, top_moves, ScoredMove};
