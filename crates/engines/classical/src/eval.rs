//! Static evaluation: material, positional table and mobility.

use othello_core::{Board, Side};
use serde::{Deserialize, Serialize};

/// Square weights, row-major. Corners are worth the most; the squares
/// touching a corner are the worst to hold while the corner is open.
#[rustfmt::skip]
pub const POSITION_WEIGHTS: [i32; 64] = [
    100, -20,  10,   5,   5,  10, -20, 100,
    -20, -50,  -2,  -2,  -2,  -2, -50, -20,
     10,  -2,  -1,  -1,  -1,  -1,  -2,  10,
      5,  -2,  -1,  -1,  -1,  -1,  -2,   5,
      5,  -2,  -1,  -1,  -1,  -1,  -2,   5,
     10,  -2,  -1,  -1,  -1,  -1,  -2,  10,
    -20, -50,  -2,  -2,  -2,  -2, -50, -20,
    100, -20,  10,   5,   5,  10, -20, 100,
];

/// Multipliers for the three evaluation terms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalWeights {
    /// Per disc of difference
    pub material: f64,
    /// Per point of positional-table difference
    pub positional: f64,
    /// Per legal move of difference
    pub mobility: f64,
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self {
            material: 0.1,
            positional: 0.001,
            mobility: 0.01,
        }
    }
}

/// Breakdown of one evaluation, before weighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalTerms {
    pub material: i32,
    pub positional: i32,
    pub mobility: i32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Evaluator {
    pub weights: EvalWeights,
}

impl Evaluator {
    pub fn new(weights: EvalWeights) -> Self {
        Self { weights }
    }

    /// Unweighted terms from `side`'s point of view.
    pub fn terms(&self, board: &Board, side: Side) -> EvalTerms {
        let opp = side.other();
        let counts = board.counts();
        let material = counts.of(side) as i32 - counts.of(opp) as i32;

        let mut positional = 0i32;
        for (i, cell) in board.cells.iter().enumerate() {
            match cell {
                Some(s) if *s == side => positional += POSITION_WEIGHTS[i],
                Some(_) => positional -= POSITION_WEIGHTS[i],
                None => {}
            }
        }

        let mobility = board.mobility(side) as i32 - board.mobility(opp) as i32;

        EvalTerms {
            material,
            positional,
            mobility,
        }
    }

    /// Score of `board` for `side`; higher is better for `side`.
    ///
    /// Never mutates the board and never looks further than one ply of
    /// move counting.
    pub fn evaluate(&self, board: &Board, side: Side) -> f64 {
        let t = self.terms(board, side);
        self.weights.material * t.material as f64
            + self.weights.mobility * t.mobility as f64
            + self.weights.positional * t.positional as f64
    }
}

/// Evaluates with the default weights.
pub fn evaluate(board: &Board, side: Side) -> f64 {
    Evaluator::default().evaluate(board, side)
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
