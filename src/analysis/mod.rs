pub mod dominance;
pub mod matrix;
pub mod report;

pub use dominance::{analyze_dominance, dominated_labels, dominated_rows, DominanceResult};
pub use matrix::{build_matrix, AnalysisParams, PayoffMatrix};
pub use report::{analyze, analyze_batch, AnalysisReport};
