use thiserror::Error;

/// Errors surfaced by the analysis core.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The position identifier could not be turned into a board.
    #[error("invalid position '{fen}': {reason}")]
    InvalidPosition { fen: String, reason: String },

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl AnalysisError {
    pub fn invalid_position(fen: &str, reason: impl Into<String>) -> Self {
        AnalysisError::InvalidPosition { fen: fen.to_string(), reason: reason.into() }
    }
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
