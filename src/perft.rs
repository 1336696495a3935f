use crate::board::Position;

/// Leaf count at `depth` using the position's apply/undo pair (no cloning).
pub fn perft(pos: &mut Position, depth: u32) -> u64 {
    if depth == 0 { return 1; }
    let mut nodes = 0u64;
    for mv in pos.legal_moves() {
        let mut child = pos.play_scoped(mv);
        nodes += perft(&mut child, depth - 1);
    }
    nodes
}
