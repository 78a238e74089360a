use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{BoardError, ReplayError};
use crate::notation::parse_move;
use crate::types::*;

/// Disc tally for both sides.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscCounts {
    pub dark: u32,
    pub light: u32,
}

impl DiscCounts {
    pub fn of(&self, side: Side) -> u32 {
        match side {
            Side::Dark => self.dark,
            Side::Light => self.light,
        }
    }
}

/// 8x8 Othello grid, row-major, row 0 at the top.
///
/// The grid is a plain array so `clone()` is a full independent copy; the
/// search relies on that to branch without sharing state.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    pub cells: [Option<Side>; 64],
}

impl Default for Board {
    fn default() -> Self {
        Self::startpos()
    }
}

impl Board {
    pub fn startpos() -> Self {
        let mut b = Board { cells: [None; 64] };
        b.cells[3 * 8 + 3] = Some(Side::Light);
        b.cells[3 * 8 + 4] = Some(Side::Dark);
        b.cells[4 * 8 + 3] = Some(Side::Dark);
        b.cells[4 * 8 + 4] = Some(Side::Light);
        b
    }

    /// Board with no discs at all. Only useful for building test positions.
    pub fn empty() -> Self {
        Board { cells: [None; 64] }
    }

    /// Reads a diagram of 8 rows (`X` dark, `O` light, `.` or `-` empty),
    /// rows separated by whitespace or `/`.
    pub fn from_diagram(diagram: &str) -> Result<Self, BoardError> {
        let rows: Vec<&str> = diagram
            .split(|c: char| c.is_whitespace() || c == '/')
            .filter(|r| !r.is_empty())
            .collect();
        if rows.len() != 8 {
            return Err(BoardError::RowCount(rows.len()));
        }

        let mut board = Board::empty();
        for (r, row) in rows.iter().enumerate() {
            let len = row.chars().count();
            if len != 8 {
                return Err(BoardError::RowLength { row: r, len });
            }
            for (c, ch) in row.chars().enumerate() {
                board.cells[r * 8 + c] = match ch {
                    'X' | 'x' | 'B' | 'b' => Some(Side::Dark),
                    'O' | 'o' | 'W' | 'w' => Some(Side::Light),
                    '.' | '-' => None,
                    _ => return Err(BoardError::Cell { row: r, ch }),
                };
            }
        }
        Ok(board)
    }

    /// Plays `moves` from the opening position, Dark first.
    ///
    /// Returns the resulting board and the side to move next.
    pub fn replay<S: AsRef<str>>(moves: &[S]) -> Result<(Board, Side), ReplayError> {
        let mut board = Board::startpos();
        let mut side = Side::Dark;
        for (index, text) in moves.iter().enumerate() {
            let text = text.as_ref();
            let mv = parse_move(text).map_err(|source| ReplayError::Notation { index, source })?;
            if !board.apply_move(mv, side) {
                return Err(ReplayError::Illegal {
                    index,
                    text: text.to_string(),
                    side,
                });
            }
            side = side.other();
        }
        Ok((board, side))
    }

    /// Disc on `sq`; None when empty or off the board.
    pub fn piece_at(&self, sq: u8) -> Option<Side> {
        self.cells.get(sq as usize).copied().flatten()
    }

    /// Writes `sq`. Off-board squares are ignored.
    pub fn set_piece(&mut self, sq: u8, side: Option<Side>) {
        if let Some(cell) = self.cells.get_mut(sq as usize) {
            *cell = side;
        }
    }

    /// Number of opponent discs that placing `side` on `sq` would flip
    /// in direction `(dr, dc)`; zero when the run is not closed by `side`.
    fn run_length(&self, sq: u8, side: Side, dr: i8, dc: i8) -> u8 {
        let opp = side.other();
        let mut r = row_of(sq) + dr;
        let mut c = col_of(sq) + dc;
        let mut n = 0u8;
        while let Some(s) = crate::types::sq(r, c) {
            match self.piece_at(s) {
                Some(p) if p == opp => n += 1,
                Some(_) => return n,
                None => return 0,
            }
            r += dr;
            c += dc;
        }
        0
    }

    /// True if `side` may place a disc on `sq`.
    pub fn is_legal(&self, sq: u8, side: Side) -> bool {
        if sq >= 64 || self.piece_at(sq).is_some() {
            return false;
        }
        DIRECTIONS
            .iter()
            .any(|&(dr, dc)| self.run_length(sq, side, dr, dc) > 0)
    }

    /// Appends every legal placement for `side`, in row-major scan order.
    pub fn legal_moves_into(&self, side: Side, moves: &mut Vec<Move>) {
        for s in 0..64u8 {
            if self.is_legal(s, side) {
                moves.push(Move::Place(s));
            }
        }
    }

    pub fn legal_moves(&self, side: Side) -> Vec<Move> {
        let mut moves = Vec::with_capacity(32);
        self.legal_moves_into(side, &mut moves);
        moves
    }

    pub fn has_legal_move(&self, side: Side) -> bool {
        (0..64u8).any(|s| self.is_legal(s, side))
    }

    pub fn mobility(&self, side: Side) -> usize {
        (0..64u8).filter(|&s| self.is_legal(s, side)).count()
    }

    /// Places a disc for `side` and flips every closed run.
    ///
    /// Returns false and leaves the board untouched when the move is
    /// illegal. A pass always succeeds and changes nothing; whether the
    /// pass was allowed is the caller's business.
    pub fn apply_move(&mut self, mv: Move, side: Side) -> bool {
        let target = match mv {
            Move::Pass => return true,
            Move::Place(s) => s,
        };
        if target >= 64 || self.piece_at(target).is_some() {
            return false;
        }

        let mut runs = [0u8; 8];
        for (i, &(dr, dc)) in DIRECTIONS.iter().enumerate() {
            runs[i] = self.run_length(target, side, dr, dc);
        }
        if runs.iter().all(|&n| n == 0) {
            return false;
        }

        self.set_piece(target, Some(side));
        let (tr, tc) = (row_of(target), col_of(target));
        for (&(dr, dc), &n) in DIRECTIONS.iter().zip(runs.iter()) {
            for step in 1..=n as i8 {
                if let Some(s) = sq(tr + dr * step, tc + dc * step) {
                    self.set_piece(s, Some(side));
                }
            }
        }
        true
    }

    /// Neither side can move.
    pub fn is_terminal(&self) -> bool {
        !self.has_legal_move(Side::Dark) && !self.has_legal_move(Side::Light)
    }

    pub fn counts(&self) -> DiscCounts {
        let mut counts = DiscCounts::default();
        for cell in self.cells.iter().flatten() {
            match cell {
                Side::Dark => counts.dark += 1,
                Side::Light => counts.light += 1,
            }
        }
        counts
    }

    /// Export form: +1 Dark, -1 Light, 0 empty; `m[row][col]`, row 0 on top.
    pub fn to_matrix(&self) -> [[i8; 8]; 8] {
        let mut m = [[0i8; 8]; 8];
        for (i, cell) in self.cells.iter().enumerate() {
            m[i / 8][i % 8] = cell.map(Side::sign).unwrap_or(0);
        }
        m
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  a b c d e f g h")?;
        for r in 0..8 {
            write!(f, "{}", r + 1)?;
            for c in 0..8 {
                let ch = match self.cells[r * 8 + c] {
                    Some(Side::Dark) => 'X',
                    Some(Side::Light) => 'O',
                    None => '.',
                };
                write!(f, " {ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
