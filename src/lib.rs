// Chess decision support: material evaluation, bounded minimax,
// payoff matrices and dominance analysis on top of cozy-chess.
pub mod analysis;
pub mod board;
pub mod error;
pub mod perft;
pub mod search;

pub use analysis::{analyze, build_matrix, dominated_rows, AnalysisParams, AnalysisReport, PayoffMatrix};
pub use board::Position;
pub use error::AnalysisError;
pub use search::{best_move, evaluate, top_moves, ScoredMove, Searcher};
