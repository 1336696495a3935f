use chessdss::analysis::report::{analyze_batch, analyze_batch_with_progress, read_fen_list, Side};
use std::sync::atomic::{AtomicUsize, Ordering};
use chessdss::{analyze, dominated_rows, AnalysisError, AnalysisParams};
use std::io::Write;

#[test]
fn checkmate_short_circuits() {
    let r = analyze("R5k1/5ppp/8/8/8/8/8/6K1 b - - 1 1").unwrap();
    assert!(r.game_over && r.checkmate && !r.draw);
    assert_eq!(r.winner, Some(Side::White));
    assert_eq!(r.score, Some(100_000));
    assert!(r.best_move.is_none());
    assert!(r.payoff_matrix.is_empty());
    assert!(r.dominated_rows.is_empty());
    assert_eq!(r.turn, 'b');
}

#[test]
fn black_win_is_negative() {
    let r = analyze("6k1/8/8/8/8/8/5PPP/r5K1 w - - 1 1").unwrap();
    assert_eq!(r.winner, Some(Side::Black));
    assert_eq!(r.score, Some(-100_000));
}

#[test]
fn draw_short_circuits() {
    let r = analyze("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
    assert!(r.game_over && r.draw && !r.checkmate);
    assert_eq!(r.winner, None);
    assert_eq!(r.score, Some(0));
    assert!(r.payoff_matrix.row_labels.is_empty());
}

#[test]
fn ongoing_report_is_consistent() {
    let fen = "r1bqkbnr/pppp1ppp/2n5/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R b KQkq - 3 3";
    let r = analyze(fen).unwrap();
    assert!(!r.game_over);
    assert_eq!(r.current_player_perspective, Some(Side::Black));
    let best = r.best_move.as_ref().expect("best move");
    assert_eq!(r.payoff_matrix.rows(), 3);
    // Best move and first matrix row come from the same depth-3 ranking.
    assert_eq!(best.san(), r.payoff_matrix.row_labels[0]);
    assert_eq!(r.dominated_rows, dominated_rows(&r.payoff_matrix.cells, false));
    for (i, label) in r.dominated_rows.iter().zip(&r.dominated_moves) {
        assert_eq!(&r.payoff_matrix.row_labels[*i], label);
    }
}

#[test]
fn invalid_position_surfaces_immediately() {
    assert!(matches!(analyze("8/8/8/8 w - - 0 1"), Err(AnalysisError::InvalidPosition { .. })));
    assert!(matches!(analyze(""), Err(AnalysisError::InvalidPosition { .. })));
}

#[test]
fn json_shape() {
    let r = analyze("k7/8/8/8/8/8/3qQ3/7K w - - 0 1").unwrap();
    let v = serde_json::to_value(&r).unwrap();
    assert_eq!(v["bestMove"]["san"], "Qxd2");
    assert_eq!(v["bestMove"]["from"], "e2");
    assert_eq!(v["bestMove"]["score"], 900);
    assert_eq!(v["currentPlayerPerspective"], "white");
    assert!(v["payoffMatrix"]["rowLabels"].is_array());
    assert!(v.get("checkmate").is_none());
}

#[test]
fn batch_keeps_input_order() {
    let fens = vec![
        "k7/8/8/8/8/8/3qQ3/7K w - - 0 1".to_string(),
        "garbage".to_string(),
        "R5k1/5ppp/8/8/8/8/8/6K1 b - - 1 1".to_string(),
    ];
    let out = analyze_batch(&fens, AnalysisParams { depth: 2, top_n: 2 });
    assert_eq!(out.len(), 3);
    assert_eq!(out[0].as_ref().unwrap().fen, fens[0]);
    assert!(out[1].is_err());
    assert!(out[2].as_ref().unwrap().checkmate);
}

#[test]
fn batch_reports_progress_once_per_position() {
    let fens = vec![
        "4k3/8/8/8/8/8/8/4K3 w - - 0 1".to_string(),
        "bad fen".to_string(),
        "7k/5Q2/6K1/8/8/8/8/8 b - - 0 1".to_string(),
    ];
    let done = AtomicUsize::new(0);
    let out = analyze_batch_with_progress(&fens, AnalysisParams::default(), || { done.fetch_add(1, Ordering::Relaxed); });
    assert_eq!(out.len(), 3);
    assert_eq!(done.load(Ordering::Relaxed), 3);
    assert!(out[0].as_ref().unwrap().draw);
    assert!(out[1].is_err());
}

#[test]
fn fen_list_skips_blank_and_comment_lines() {
    let dir = std::path::Path::new("target/report_test");
    std::fs::create_dir_all(dir).unwrap();
    let path = dir.join("fens.txt");
    let mut f = std::fs::File::create(&path).unwrap();
    writeln!(f, "# suite").unwrap();
    writeln!(f, "k7/8/8/8/8/8/3qQ3/7K w - - 0 1").unwrap();
    writeln!(f).unwrap();
    writeln!(f, "  4k3/8/8/8/8/8/8/4K3 w - - 0 1  ").unwrap();
    drop(f);
    let fens = read_fen_list(&path).unwrap();
    assert_eq!(fens, vec!["k7/8/8/8/8/8/3qQ3/7K w - - 0 1", "4k3/8/8/8/8/8/8/4K3 w - - 0 1"]);
    assert!(matches!(read_fen_list(dir.join("missing.txt")), Err(AnalysisError::Io(_))));
}
