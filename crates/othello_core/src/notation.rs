//! Move text: a column letter and a row digit (`d3`), or `pass`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::NotationError;
use crate::types::*;

pub const PASS_TOKEN: &str = "pass";

pub fn move_to_text(mv: Move) -> String {
    match mv {
        Move::Place(s) => sq_to_coord(s),
        Move::Pass => PASS_TOKEN.to_string(),
    }
}

/// Parses one move. Surrounding whitespace and letter case are ignored.
pub fn parse_move(txt: &str) -> Result<Move, NotationError> {
    let t = txt.trim();
    if t.is_empty() {
        return Err(NotationError::Empty);
    }
    if t.eq_ignore_ascii_case(PASS_TOKEN) {
        return Ok(Move::Pass);
    }

    let b = t.as_bytes();
    if b.len() != 2 || !b[0].is_ascii_alphabetic() || !b[1].is_ascii_digit() {
        return Err(NotationError::Malformed {
            text: t.to_string(),
        });
    }
    coord_to_sq(t)
        .map(Move::Place)
        .ok_or_else(|| NotationError::OutOfRange {
            text: t.to_string(),
        })
}

/// Parses a whole move list, stopping at the first bad entry.
pub fn parse_moves<S: AsRef<str>>(moves: &[S]) -> Result<Vec<Move>, (usize, NotationError)> {
    moves
        .iter()
        .enumerate()
        .map(|(i, m)| parse_move(m.as_ref()).map_err(|e| (i, e)))
        .collect()
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Place(s) => f.write_str(&sq_to_coord(*s)),
            Move::Pass => f.write_str(PASS_TOKEN),
        }
    }
}

impl FromStr for Move {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_move(s)
    }
}

impl Serialize for Move {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Move {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        parse_move(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "notation_tests.rs"]
mod notation_tests;
