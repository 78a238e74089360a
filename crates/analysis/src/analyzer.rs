//! Game analyzer: replays a recorded game and compares every move with
//! the engine's choice.

use std::fmt;
use std::time::Duration;

use classical_engine::{ClassicalEngine, Evaluator};
use othello_core::{
    Board, CORNERS, DiscCounts, Engine, Move, NotationError, ReplayError, SearchLimits, Side,
    parse_move,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::AnalysisConfig;

/// Why a flagged move was bad. Only the first matching reason is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Explanation {
    /// The move hands the opponent a corner the engine's move would not
    OpponentTakesCorner,
    /// Swing at or above the severe threshold
    SevereLoss,
    Suboptimal,
}

impl fmt::Display for Explanation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Explanation::OpponentTakesCorner => "opponent can take a corner next move",
            Explanation::SevereLoss => "large evaluation loss",
            Explanation::Suboptimal => "suboptimal move",
        };
        f.write_str(text)
    }
}

/// A recorded move that could not be played.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveFault {
    #[error(transparent)]
    Malformed(NotationError),
    #[error("not a legal move in this position")]
    Illegal,
}

/// Analysis of a single ply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    /// 0-based index into the move list
    pub ply: usize,
    pub side: Side,
    /// The recorded move text, as given
    pub played: String,
    /// Parsed recorded move, None if the text was malformed
    pub played_move: Option<Move>,
    pub fault: Option<MoveFault>,
    pub engine_best: Option<Move>,
    pub pv: Vec<Move>,
    pub eval_before: f64,
    pub eval_after_actual: f64,
    pub eval_after_best: f64,
    pub swing: f64,
    pub matches_best: bool,
    pub is_error: bool,
    pub explanation: Option<Explanation>,
    pub depth_used: u8,
    pub nodes: u64,
    pub elapsed_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub moves_count: usize,
    pub errors_count: usize,
    pub faults_count: usize,
    pub first_error_index: Option<usize>,
    /// Disc counts after the last recorded move
    pub discs: DiscCounts,
    /// Final evaluation from Dark's point of view
    pub final_eval: f64,
}

/// Complete result of analyzing one game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameAnalysis {
    pub records: Vec<AnalysisRecord>,
    pub first_error: Option<AnalysisRecord>,
    pub summary: AnalysisSummary,
}

/// Engine recommendation for the position after a move prefix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub side: Side,
    pub best_move: Option<Move>,
    pub value: f64,
    pub pv: Vec<Move>,
    pub depth: u8,
    pub nodes: u64,
    pub elapsed_ms: u64,
}

/// Replays games against a classical engine.
#[derive(Debug, Clone)]
pub struct GameAnalyzer {
    config: AnalysisConfig,
    /// Exact per-position budget, taking precedence over `config.time_limit_ms`
    time_limit: Option<Duration>,
    engine: ClassicalEngine,
}

impl Default for GameAnalyzer {
    fn default() -> Self {
        Self::new(AnalysisConfig::default())
    }
}

impl GameAnalyzer {
    pub fn new(config: AnalysisConfig) -> Self {
        let engine = ClassicalEngine::with_weights(config.weights);
        Self {
            config,
            time_limit: None,
            engine,
        }
    }

    /// Overrides the config's millisecond budget with an exact duration.
    pub fn with_time_limit(mut self, time_limit: Option<Duration>) -> Self {
        self.time_limit = time_limit;
        self
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    fn evaluator(&self) -> &Evaluator {
        self.engine.evaluator()
    }

    fn limits(&self) -> SearchLimits {
        let time_limit = self.time_limit.or_else(|| self.config.time_limit());
        SearchLimits::new(self.config.max_depth, time_limit)
    }

    /// Analyzes a recorded game, Dark moving first from the opening.
    ///
    /// Never fails: malformed or illegal entries are recorded as faults on
    /// their ply and the replay carries on with the other side to move.
    pub fn analyze<S: AsRef<str>>(&mut self, moves: &[S]) -> GameAnalysis {
        self.engine.new_game();

        let mut board = Board::startpos();
        let mut side = Side::Dark;
        let mut records = Vec::with_capacity(moves.len());

        for (ply, text) in moves.iter().enumerate() {
            let record = self.analyze_ply(&board, side, ply, text.as_ref());

            if let Some(mv) = record.played_move {
                // An illegal move leaves the board as it was
                board.apply_move(mv, side);
            }
            records.push(record);
            side = side.other();
        }

        let first_error = records.iter().find(|r| r.is_error).cloned();
        let summary = AnalysisSummary {
            moves_count: records.len(),
            errors_count: records.iter().filter(|r| r.is_error).count(),
            faults_count: records.iter().filter(|r| r.fault.is_some()).count(),
            first_error_index: first_error.as_ref().map(|r| r.ply),
            discs: board.counts(),
            final_eval: self.evaluator().evaluate(&board, Side::Dark),
        };

        info!(
            moves = summary.moves_count,
            errors = summary.errors_count,
            faults = summary.faults_count,
            first_error = ?summary.first_error_index,
            "game analyzed"
        );

        GameAnalysis {
            records,
            first_error,
            summary,
        }
    }

    /// Same as [`analyze`](Self::analyze) for already-parsed moves.
    pub fn analyze_moves(&mut self, moves: &[Move]) -> GameAnalysis {
        let text: Vec<String> = moves.iter().map(|m| m.to_string()).collect();
        self.analyze(&text)
    }

    fn analyze_ply(
        &mut self,
        board: &Board,
        side: Side,
        ply: usize,
        played: &str,
    ) -> AnalysisRecord {
        let limits = self.limits();
        let result = self.engine.search(board, side, limits);
        let eval = *self.evaluator();
        let eval_before = eval.evaluate(board, side);

        let (played_move, fault, after_actual) = match parse_move(played) {
            Ok(mv) => {
                let mut next = board.clone();
                if next.apply_move(mv, side) {
                    (Some(mv), None, next)
                } else {
                    (Some(mv), Some(MoveFault::Illegal), board.clone())
                }
            }
            Err(e) => (None, Some(MoveFault::Malformed(e)), board.clone()),
        };
        let eval_after_actual = if fault.is_some() {
            eval_before
        } else {
            eval.evaluate(&after_actual, side)
        };

        let mut after_best = board.clone();
        let eval_after_best = match result.best_move {
            Some(mv) => {
                after_best.apply_move(mv, side);
                eval.evaluate(&after_best, side)
            }
            None => eval_before,
        };

        let swing = (eval_after_best - eval_after_actual).abs();
        let matches_best = result.best_move.is_some() && result.best_move == played_move;
        let is_error = !matches_best && swing > self.config.swing_threshold;

        let explanation = is_error.then(|| {
            let opp = side.other();
            if gives_corner(&after_actual, opp) && !gives_corner(&after_best, opp) {
                Explanation::OpponentTakesCorner
            } else if swing >= self.config.severe_swing {
                Explanation::SevereLoss
            } else {
                Explanation::Suboptimal
            }
        });

        if let Some(fault) = &fault {
            warn!(ply, %side, played, %fault, "recorded move could not be played");
        }
        debug!(
            ply,
            %side,
            played,
            best = ?result.best_move,
            swing,
            is_error,
            depth = result.depth,
            nodes = result.nodes,
            "ply analyzed"
        );

        AnalysisRecord {
            ply,
            side,
            played: played.to_string(),
            played_move,
            fault,
            engine_best: result.best_move,
            pv: result.pv,
            eval_before,
            eval_after_actual,
            eval_after_best,
            swing,
            matches_best,
            is_error,
            explanation,
            depth_used: result.depth,
            nodes: result.nodes,
            elapsed_ms: whole_millis(result.elapsed),
        }
    }

    /// Engine move for the side to play after `moves`.
    pub fn suggest<S: AsRef<str>>(&mut self, moves: &[S]) -> Result<Suggestion, ReplayError> {
        let (board, side) = Board::replay(moves)?;
        let limits = self.limits();
        let result = self.engine.search(&board, side, limits);
        Ok(Suggestion {
            side,
            best_move: result.best_move,
            value: result.value,
            pv: result.pv,
            depth: result.depth,
            nodes: result.nodes,
            elapsed_ms: whole_millis(result.elapsed),
        })
    }
}

/// Milliseconds in `d`, saturating at `u64::MAX`.
fn whole_millis(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}

/// True if `side` could play into a corner.
fn gives_corner(board: &Board, side: Side) -> bool {
    CORNERS.iter().any(|&c| board.is_legal(c, side))
}

/// Analyzes `moves` with default evaluation weights.
pub fn analyze_game<S: AsRef<str>>(
    moves: &[S],
    max_depth: u8,
    swing_threshold: f64,
    time_limit: Option<Duration>,
) -> GameAnalysis {
    let config = AnalysisConfig {
        max_depth,
        swing_threshold,
        ..Default::default()
    };
    GameAnalyzer::new(config)
        .with_time_limit(time_limit)
        .analyze(moves)
}

/// Best move for the side to play after `moves`.
pub fn suggest_move<S: AsRef<str>>(
    moves: &[S],
    max_depth: u8,
    time_limit: Option<Duration>,
) -> Result<Suggestion, ReplayError> {
    let config = AnalysisConfig {
        max_depth,
        ..Default::default()
    };
    GameAnalyzer::new(config)
        .with_time_limit(time_limit)
        .suggest(moves)
}

/// Board matrix after replaying `moves`: 1 Dark, -1 Light, 0 empty.
pub fn board_after<S: AsRef<str>>(moves: &[S]) -> Result<[[i8; 8]; 8], ReplayError> {
    Board::replay(moves).map(|(board, _)| board.to_matrix())
}

#[cfg(test)]
#[path = "analyzer_tests.rs"]
mod analyzer_tests;
