use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, info};
use rayon::prelude::*;
use serde::Serialize;

use crate::analysis::dominance::analyze_dominance;
use crate::analysis::matrix::{build_matrix, AnalysisParams, PayoffMatrix};
use crate::board::{GameStatus, Position};
use crate::error::Result;
use crate::search::eval::{DRAW_SCORE, MATE_SCORE};
use crate::search::rank::{best_move, ScoredMove};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    White,
    Black,
}

impl Side {
    fn to_move(pos: &Position) -> Self {
        if pos.white_to_move() { Side::White } else { Side::Black }
    }

    fn turn_char(self) -> char {
        match self { Side::White => 'w', Side::Black => 'b' }
    }
}

/// Full decision-support output for one position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub fen: String,
    pub turn: char,
    pub game_over: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub checkmate: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub draw: bool,
    pub winner: Option<Side>,
    /// Terminal score; present only when the game is over.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_player_perspective: Option<Side>,
    pub best_move: Option<ScoredMove>,
    pub payoff_matrix: PayoffMatrix,
    pub dominated_rows: Vec<usize>,
    pub dominated_moves: Vec<String>,
    pub score_interpretation: String,
}

impl AnalysisReport {
    fn terminal(fen: &str, side: Side, winner: Option<Side>) -> Self {
        let (score, interpretation) = match winner {
            Some(Side::White) => (MATE_SCORE, format!("White wins. Score +{MATE_SCORE}.")),
            Some(Side::Black) => (-MATE_SCORE, format!("Black wins. Score -{MATE_SCORE}.")),
            None => (DRAW_SCORE, "Draw.".to_string()),
        };
        Self {
            fen: fen.to_string(),
            turn: side.turn_char(),
            game_over: true,
            checkmate: winner.is_some(),
            draw: winner.is_none(),
            winner,
            score: Some(score),
            current_player_perspective: None,
            best_move: None,
            payoff_matrix: PayoffMatrix::default(),
            dominated_rows: Vec::new(),
            dominated_moves: Vec::new(),
            score_interpretation: interpretation,
        }
    }
}

/// Analyse `fen` with default parameters.
pub fn analyze(fen: &str) -> Result<AnalysisReport> {
    analyze_with(fen, AnalysisParams::default())
}

pub fn analyze_with(fen: &str, params: AnalysisParams) -> Result<AnalysisReport> {
    let mut pos = Position::from_fen(fen)?;
    let fen = fen.trim();
    let side = Side::to_move(&pos);

    match pos.status() {
        GameStatus::Checkmate => {
            let winner = if side == Side::White { Side::Black } else { Side::White };
            debug!("{fen}: checkmate, {winner:?} wins");
            return Ok(AnalysisReport::terminal(fen, side, Some(winner)));
        }
        GameStatus::Stalemate | GameStatus::Draw(_) => {
            debug!("{fen}: drawn ({:?})", pos.status());
            return Ok(AnalysisReport::terminal(fen, side, None));
        }
        GameStatus::Ongoing => {}
    }

    let best = best_move(&mut pos, params.depth);
    let matrix = build_matrix(&mut pos, params);
    let maximizing = side == Side::White;
    let dominance = analyze_dominance(&matrix, maximizing);
    info!(
        "{fen}: best {} / {} dominated of {} rows",
        best.as_ref().map(|b| b.san()).unwrap_or("-"),
        dominance.rows.len(),
        matrix.rows(),
    );

    let score_interpretation = if maximizing {
        "Positive = White advantage (current player maximizes).".to_string()
    } else {
        "Positive = White advantage (current player Black minimizes; prefers lower values).".to_string()
    };

    Ok(AnalysisReport {
        fen: fen.to_string(),
        turn: side.turn_char(),
        game_over: false,
        checkmate: false,
        draw: false,
        winner: None,
        score: None,
        current_player_perspective: Some(side),
        best_move: best,
        payoff_matrix: matrix,
        dominated_rows: dominance.rows,
        dominated_moves: dominance.moves,
        score_interpretation,
    })
}

/// Analyse many positions in parallel; each task owns its own board.
/// Results are in input order.
pub fn analyze_batch(fens: &[String], params: AnalysisParams) -> Vec<Result<AnalysisReport>> {
    analyze_batch_with_progress(fens, params, || {})
}

/// As [`analyze_batch`], calling `on_done` once per finished position.
pub fn analyze_batch_with_progress<F>(fens: &[String], params: AnalysisParams, on_done: F) -> Vec<Result<AnalysisReport>>
where
    F: Fn() + Sync,
{
    fens.par_iter().map(|fen| {
        let r = analyze_with(fen, params);
        on_done();
        r
    }).collect()
}

/// One FEN per line; blank lines and `#` comments are skipped.
pub fn read_fen_list<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let rdr = BufReader::new(File::open(path)?);
    let mut out = Vec::new();
    for line in rdr.lines() {
        let line = line?;
        let l = line.trim();
        if l.is_empty() || l.starts_with('#') { continue; }
        out.push(l.to_string());
    }
    Ok(out)
}
