pub mod board;
pub mod error;
pub mod notation;
pub mod perft;
pub mod time_control;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use error::*;
pub use notation::*;
pub use perft::perft;
pub use time_control::*;
pub use types::*;

use std::time::Duration;

// =============================================================================
// Engine trait: implemented by every move-choosing engine (classical, random)
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// First move of the principal variation (None if the search had no move)
    pub best_move: Option<Move>,
    /// Evaluation from the perspective of the side to move
    pub value: f64,
    /// Principal variation, starting with `best_move`
    pub pv: Vec<Move>,
    /// Deepest fully completed iteration (0 = static evaluation)
    pub depth: u8,
    /// Nodes visited across all iterations
    pub nodes: u64,
    pub elapsed: Duration,
    /// Whether the time budget cut the search short
    pub stopped: bool,
}

/// Trait that all engines implement.
///
/// Engines are called synchronously with an explicit side to move; the
/// board itself does not track turns.
pub trait Engine {
    /// Search `board` for `side` within `limits`.
    fn search(&mut self, board: &Board, side: Side, limits: SearchLimits) -> SearchResult;

    /// Returns the engine's name
    fn name(&self) -> &str;

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
