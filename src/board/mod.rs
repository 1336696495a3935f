pub mod cozy;
pub mod san;

pub use cozy::{DrawReason, GameStatus, MoveGuard, Position};
pub use san::MoveLabel;
