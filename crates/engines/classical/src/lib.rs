//! Classical Othello Engine
//!
//! Negamax with alpha-beta pruning and iterative deepening over a
//! material, positional-table and mobility evaluation.

mod eval;
mod search;

use std::time::Duration;

use othello_core::{Board, Engine, Move, SearchLimits, SearchResult, Side};

/// Classical Othello engine using negamax with alpha-beta pruning.
///
/// This engine uses:
/// - Iterative deepening, keeping the deepest completed iteration
/// - Weighted evaluation of discs, square values and mobility
/// - Time control support for move time limits
#[derive(Debug, Clone, Default)]
pub struct ClassicalEngine {
    evaluator: Evaluator,
    /// Node counter for statistics
    nodes: u64,
}

impl ClassicalEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_weights(weights: EvalWeights) -> Self {
        Self {
            evaluator: Evaluator::new(weights),
            nodes: 0,
        }
    }

    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    /// Nodes searched by the last call to `search`.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Fixed-depth search without a clock.
    pub fn find_best_move(
        &self,
        board: &Board,
        side: Side,
        max_depth: u8,
    ) -> (Option<Move>, Vec<Move>, f64) {
        search::find_best_move(board, side, max_depth, &self.evaluator)
    }
}

impl Engine for ClassicalEngine {
    fn search(&mut self, board: &Board, side: Side, limits: SearchLimits) -> SearchResult {
        self.nodes = 0;
        limits.start();

        let result = search::iterative_deepening(board, side, &limits, &self.evaluator);
        self.nodes = result.nodes;
        result
    }

    fn name(&self) -> &str {
        "Classical v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

/// Fixed-depth search with the default weights.
pub fn find_best_move(
    board: &Board,
    side: Side,
    max_depth: u8,
) -> (Option<Move>, Vec<Move>, f64) {
    search::find_best_move(board, side, max_depth, &Evaluator::default())
}

/// Iterative deepening with the default weights, bounded by `max_depth`
/// and optionally by `time_limit`.
pub fn search(
    board: &Board,
    side: Side,
    max_depth: u8,
    time_limit: Option<Duration>,
) -> SearchResult {
    let limits = SearchLimits::new(max_depth, time_limit);
    ClassicalEngine::new().search(board, side, limits)
}

// Re-export for direct use if needed
pub use eval::{EvalTerms, EvalWeights, Evaluator, POSITION_WEIGHTS, evaluate};
pub use search::{Line, MAX_SEARCH_DEPTH, format_pv, iterative_deepening, negamax};
