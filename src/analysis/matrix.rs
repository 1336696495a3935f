use log::{debug, trace};
use serde::Serialize;

use crate::board::Position;
use crate::error::Result;
use crate::search::eval::evaluate;
use crate::search::rank::top_moves;

pub const DEPTH: u32 = 3;
pub const TOP_MOVES: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisParams {
    pub depth: u32,
    pub top_n: usize,
}

impl Default for AnalysisParams {
    fn default() -> Self { Self { depth: DEPTH, top_n: TOP_MOVES } }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowDetail {
    pub san: String,
    pub from: String,
    pub to: String,
    /// Search score of the row move.
    pub score: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColDetail {
    pub san: String,
    /// Static evaluation after the row move and this reply.
    pub evaluation: i32,
}

/// Mover's top moves (rows) against the opponent's top replies (columns).
///
/// Column headers and details come from the replies to the first row that
/// has any; every row's cells are computed against its own reply set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PayoffMatrix {
    pub row_labels: Vec<String>,
    pub col_labels: Vec<String>,
    #[serde(rename = "matrix")]
    pub cells: Vec<Vec<i32>>,
    #[serde(rename = "rowMoveDetails")]
    pub row_details: Vec<RowDetail>,
    #[serde(rename = "colMoveDetails")]
    pub col_details: Vec<ColDetail>,
}

impl PayoffMatrix {
    pub fn is_empty(&self) -> bool { self.cells.is_empty() }
    pub fn rows(&self) -> usize { self.cells.len() }
    pub fn cols(&self) -> usize { self.col_labels.len() }
}

/// Build the payoff matrix for the side to move. Rows and replies are chosen
/// by search score; cells hold the static evaluation two plies on.
pub fn build_matrix(pos: &mut Position, params: AnalysisParams) -> PayoffMatrix {
    if pos.is_terminal() { return PayoffMatrix::default(); }

    let rows = top_moves(pos, params.depth, params.top_n);
    let mut matrix = PayoffMatrix {
        row_labels: rows.iter().map(|r| r.label.san.clone()).collect(),
        row_details: rows.iter().map(|r| RowDetail {
            san: r.label.san.clone(),
            from: r.label.from.clone(),
            to: r.label.to.clone(),
            score: r.score,
        }).collect(),
        ..PayoffMatrix::default()
    };

    let mut details_by_row: Vec<Vec<ColDetail>> = Vec::with_capacity(rows.len());
    for row in &rows {
        let mut after_row = pos.play_scoped(row.mv);
        let replies = top_moves(&mut after_row, params.depth, params.top_n);
        if matrix.col_labels.is_empty() {
            matrix.col_labels = replies.iter().map(|r| r.label.san.clone()).collect();
        }

        let mut cells = Vec::with_capacity(replies.len());
        let mut details = Vec::with_capacity(replies.len());
        for reply in &replies {
            let value = {
                let after_reply = after_row.play_scoped(reply.mv);
                evaluate(&after_reply)
            };
            trace!("cell {} / {} = {}", row.label.san, reply.label.san, value);
            cells.push(value);
            details.push(ColDetail { san: reply.label.san.clone(), evaluation: value });
        }
        matrix.cells.push(cells);
        details_by_row.push(details);
    }
    matrix.col_details = details_by_row.into_iter().next().unwrap_or_default();
    debug!("payoff matrix {}x{}", matrix.rows(), matrix.cols());
    matrix
}

pub fn build_matrix_fen(fen: &str, params: AnalysisParams) -> Result<PayoffMatrix> {
    let mut pos = Position::from_fen(fen)?;
    Ok(build_matrix(&mut pos, params))
}
