//! Error types for move text, board diagrams and move-list replay.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::Side;

/// Failure to read a move written as `d3` or `pass`.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NotationError {
    #[error("empty move text")]
    Empty,
    #[error("`{text}` is not a move: expected a column a-h followed by a row 1-8, or `pass`")]
    Malformed { text: String },
    #[error("`{text}` is off the board")]
    OutOfRange { text: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("diagram has {0} rows, expected 8")]
    RowCount(usize),
    #[error("diagram row {row} has {len} cells, expected 8")]
    RowLength { row: usize, len: usize },
    #[error("invalid cell `{ch}` in diagram row {row}")]
    Cell { row: usize, ch: char },
}

/// Failure while replaying a move list from the opening position.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReplayError {
    #[error("move {index}: {source}")]
    Notation {
        index: usize,
        #[source]
        source: NotationError,
    },
    #[error("move {index} (`{text}`) is illegal for {side}")]
    Illegal {
        index: usize,
        text: String,
        side: Side,
    },
}
