//! Random Move Othello Engine
//!
//! A simple engine that selects moves uniformly at random from all legal moves.
//! Useful for:
//! - Generating whole games to feed the analyzer
//! - Baseline comparisons (any real engine should easily beat this)
//! - Stress testing move generation and pass handling

use std::time::Instant;

use othello_core::{Board, Engine, Move, SearchLimits, SearchResult, Side};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;


/// An Othello engine that plays random legal moves.
///
/// This engine provides no evaluation - it simply picks a random move
/// from all available legal moves, or passes when there are none.
#[derive(Debug, Clone)]
pub struct RandomEngine {
    rng: StdRng,
    nodes: u64,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            nodes: 0,
        }
    }

    /// Reproducible engine for tests and scripted games.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            nodes: 0,
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn search(&mut self, board: &Board, side: Side, _limits: SearchLimits) -> SearchResult {
        let start = Instant::now();
        self.nodes = 1;

        let best_move = if board.is_terminal() {
            None
        } else {
            Some(pick_move(board, side, &mut self.rng))
        };

        SearchResult {
            best_move,
            value: 0.0,
            pv: best_move.into_iter().collect(),
            depth: 1,
            nodes: self.nodes,
            elapsed: start.elapsed(),
            stopped: false,
        }
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

/// Uniform choice among the legal moves, `Pass` if there are none.
fn pick_move<R: Rng + ?Sized>(board: &Board, side: Side, rng: &mut R) -> Move {
    let moves = board.legal_moves(side);
    moves.choose(rng).copied().unwrap_or(Move::Pass)
}

/// Plays random moves from the opening until neither side can move.
///
/// A stuck side contributes an explicit `Pass`, so the returned list
/// replays move-for-move with alternating sides.
pub fn random_game<R: Rng + ?Sized>(rng: &mut R) -> Vec<Move> {
    let mut board = Board::startpos();
    let mut side = Side::Dark;
    let mut moves = Vec::with_capacity(64);

    while !board.is_terminal() {
        let mv = pick_move(&board, side, rng);
        board.apply_move(mv, side);
        moves.push(mv);
        side = side.other();
    }

    let counts = board.counts();
    debug!(plies = moves.len(), dark = counts.dark, light = counts.light, "random game finished");
    moves
}
