use serde::Serialize;

use crate::analysis::matrix::PayoffMatrix;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DominanceResult {
    pub rows: Vec<usize>,
    pub moves: Vec<String>,
}

// `row` loses to `other` in each of `row`'s columns. A column `other` lacks
// cannot clear `row`, so a row with no cells is beaten by any other row.
fn strictly_worse(row: &[i32], other: &[i32], maximizing: bool) -> bool {
    row.iter().enumerate().all(|(j, &p)| match other.get(j) {
        Some(&q) => if maximizing { p < q } else { p > q },
        None => true,
    })
}

/// Indices (ascending) of rows strictly dominated by some other row, from the
/// perspective of the player choosing rows.
pub fn dominated_rows(cells: &[Vec<i32>], maximizing: bool) -> Vec<usize> {
    let mut dominated = Vec::new();
    for (i, row) in cells.iter().enumerate() {
        let beaten = cells.iter().enumerate()
            .any(|(k, other)| k != i && strictly_worse(row, other, maximizing));
        if beaten { dominated.push(i); }
    }
    dominated
}

/// Resolve indices to row labels, skipping any without one.
pub fn dominated_labels(indices: &[usize], row_labels: &[String]) -> Vec<String> {
    indices.iter().filter_map(|&i| row_labels.get(i).cloned()).collect()
}

pub fn analyze_dominance(matrix: &PayoffMatrix, maximizing: bool) -> DominanceResult {
    let rows = dominated_rows(&matrix.cells, maximizing);
    let moves = dominated_labels(&rows, &matrix.row_labels);
    DominanceResult { rows, moves }
}
