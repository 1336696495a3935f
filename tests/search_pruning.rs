use chessdss::search::eval::SCORE_INF;
use chessdss::{Position, Searcher};

const POSITIONS: &[&str] = &[
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    "r1bqkbnr/pppp1ppp/2n5/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R b KQkq - 3 3",
    "k7/8/8/8/8/8/3qQ3/7K w - - 0 1",
    "6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1",
    "4k3/8/8/8/5Q2/8/8/2b4K b - - 0 1",
];

fn both(fen: &str, depth: u32) -> (i32, i32, u64, u64) {
    let mut pos = Position::from_fen(fen).unwrap();
    let maximizing = pos.white_to_move();
    let mut pruned = Searcher::default();
    let mut plain = Searcher::plain();
    let a = pruned.search(&mut pos, depth, -SCORE_INF, SCORE_INF, maximizing);
    let b = plain.search(&mut pos, depth, -SCORE_INF, SCORE_INF, maximizing);
    (a, b, pruned.nodes(), plain.nodes())
}

#[test]
fn pruning_matches_plain_minimax_shallow() {
    for fen in POSITIONS {
        for depth in 0..=3 {
            let (a, b, na, nb) = both(fen, depth);
            assert_eq!(a, b, "depth {depth} FEN {fen}");
            assert!(na <= nb, "pruning visited more nodes ({na} > {nb}) at depth {depth} FEN {fen}");
        }
    }
}

#[test]
fn pruning_matches_plain_minimax_depth_four_endgames() {
    for fen in &POSITIONS[2..] {
        let (a, b, na, nb) = both(fen, 4);
        assert_eq!(a, b, "depth 4 FEN {fen}");
        assert!(na < nb, "expected cutoffs at depth 4: {na} vs {nb}");
    }
}

#[test]
fn search_restores_the_board() {
    for fen in POSITIONS {
        let mut pos = Position::from_fen(fen).unwrap();
        let before = pos.fen();
        let maximizing = pos.white_to_move();
        Searcher::default().search(&mut pos, 3, -SCORE_INF, SCORE_INF, maximizing);
        assert_eq!(pos.fen(), before);
        assert_eq!(pos.depth_from_root(), 0);
    }
}

#[test]
fn terminal_root_returns_static_eval() {
    let mut pos = Position::from_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 1 1").unwrap();
    let mut s = Searcher::default();
    assert_eq!(s.search(&mut pos, 3, -SCORE_INF, SCORE_INF, false), 100_000);
    assert_eq!(s.nodes(), 1);
}
