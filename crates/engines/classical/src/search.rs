//! Negamax search with alpha-beta pruning and iterative deepening

use othello_core::{Board, Move, SearchLimits, SearchResult, Side, TimeControl};
use tracing::{debug, trace};

use crate::eval::Evaluator;

/// Hard cap on search depth: no Othello game has more plies left than this.
pub const MAX_SEARCH_DEPTH: u8 = 60;

/// The clock ran out while an iteration was in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Stopped;

/// Value of a node with the line that achieves it.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    /// Score from the perspective of the side to move at the node
    pub value: f64,
    /// Principal variation; empty at leaves
    pub pv: Vec<Move>,
}

impl Line {
    fn leaf(value: f64) -> Self {
        Self {
            value,
            pv: Vec::new(),
        }
    }

    fn extend(mv: Move, child: Line) -> Self {
        let mut pv = Vec::with_capacity(child.pv.len() + 1);
        pv.push(mv);
        pv.extend(child.pv);
        Self {
            value: -child.value,
            pv,
        }
    }
}

/// State shared by every node of one search run.
pub(crate) struct SearchContext<'a> {
    pub eval: &'a Evaluator,
    pub tc: &'a TimeControl,
    /// Nodes visited, summed across iterations
    pub nodes: u64,
}

impl<'a> SearchContext<'a> {
    pub fn new(eval: &'a Evaluator, tc: &'a TimeControl) -> Self {
        Self { eval, tc, nodes: 0 }
    }
}

/// Plain depth-limited negamax with alpha-beta, no clock.
pub fn negamax(
    board: &Board,
    side: Side,
    depth: u8,
    alpha: f64,
    beta: f64,
    eval: &Evaluator,
) -> Line {
    let tc = TimeControl::new(None);
    let mut ctx = SearchContext::new(eval, &tc);
    let depth = depth.min(MAX_SEARCH_DEPTH);
    match alpha_beta(board, side, depth, alpha, beta, &mut ctx) {
        Ok(line) => line,
        Err(Stopped) => Line::leaf(eval.evaluate(board, side)),
    }
}

/// Single fixed-depth search from the full window.
///
/// Returns the best move (None if the position is terminal or `max_depth`
/// is zero), the principal variation and its value.
pub fn find_best_move(
    board: &Board,
    side: Side,
    max_depth: u8,
    eval: &Evaluator,
) -> (Option<Move>, Vec<Move>, f64) {
    let line = negamax(
        board,
        side,
        max_depth,
        f64::NEG_INFINITY,
        f64::INFINITY,
        eval,
    );
    (line.pv.first().copied(), line.pv, line.value)
}

/// Iterative deepening from depth 1 up to `limits.depth`.
///
/// The clock in `limits` must already be started. Each depth is searched
/// from scratch; the deepest iteration that finished in time wins and an
/// interrupted one is thrown away. If not even depth 1 finishes, the result
/// is the static evaluation at depth 0.
pub fn iterative_deepening(
    board: &Board,
    side: Side,
    limits: &SearchLimits,
    eval: &Evaluator,
) -> SearchResult {
    let tc = &limits.time_control;
    let mut ctx = SearchContext::new(eval, tc);
    let max_depth = limits.depth.min(MAX_SEARCH_DEPTH);

    let mut completed: Option<(u8, Line)> = None;
    let mut stopped = false;

    for depth in 1..=max_depth {
        match alpha_beta(
            board,
            side,
            depth,
            f64::NEG_INFINITY,
            f64::INFINITY,
            &mut ctx,
        ) {
            Ok(line) => {
                debug!(
                    depth,
                    value = line.value,
                    nodes = ctx.nodes,
                    pv = %format_pv(&line.pv),
                    "iteration complete"
                );
                completed = Some((depth, line));
            }
            Err(Stopped) => {
                debug!(depth, nodes = ctx.nodes, "iteration aborted by time limit");
                stopped = true;
                break;
            }
        }
    }

    let (depth, line) = completed.unwrap_or_else(|| (0, Line::leaf(eval.evaluate(board, side))));

    SearchResult {
        best_move: line.pv.first().copied(),
        value: line.value,
        pv: line.pv,
        depth,
        nodes: ctx.nodes,
        elapsed: tc.elapsed(),
        stopped,
    }
}

/// Recursive negamax with alpha-beta pruning.
///
/// Every child works on its own clone of the board. Moves are tried in
/// scan order and the first one reaching the maximum is kept.
pub(crate) fn alpha_beta(
    board: &Board,
    side: Side,
    depth: u8,
    mut alpha: f64,
    beta: f64,
    ctx: &mut SearchContext<'_>,
) -> Result<Line, Stopped> {
    ctx.nodes += 1;
    if ctx.tc.check_time() {
        return Err(Stopped);
    }

    if depth == 0 || board.is_terminal() {
        return Ok(Line::leaf(ctx.eval.evaluate(board, side)));
    }

    let mut moves = Vec::with_capacity(32);
    board.legal_moves_into(side, &mut moves);

    if moves.is_empty() {
        // Forced pass; it does not use up depth.
        trace!(%side, depth, "forced pass");
        let child = alpha_beta(board, side.other(), depth, -beta, -alpha, ctx)?;
        return Ok(Line::extend(Move::Pass, child));
    }

    let mut best = Line::leaf(f64::NEG_INFINITY);

    for mv in moves {
        let mut next = board.clone();
        next.apply_move(mv, side);

        let child = alpha_beta(&next, side.other(), depth - 1, -beta, -alpha, ctx)?;
        let line = Line::extend(mv, child);

        if line.value > best.value {
            best = line;
        }
        if best.value > alpha {
            alpha = best.value;
        }
        if alpha >= beta {
            break; // Beta cutoff
        }
    }

    Ok(best)
}

pub fn format_pv(pv: &[Move]) -> String {
    pv.iter()
        .map(|m| m.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
