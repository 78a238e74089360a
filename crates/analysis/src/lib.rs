//! Othello game analysis
//!
//! This crate provides:
//! - Replaying a recorded game against the classical engine, ply by ply
//! - Flagging moves whose evaluation falls too far behind the engine's choice
//! - JSON and text reports, and batch analysis of a directory of games
//!
//! # Usage
//!
//! ```bash
//! # Analyze one game file
//! cargo run -p analysis -- analyze games/sample.json --depth 4 --threshold 1.0
//!
//! # Ask for a move after a prefix
//! cargo run -p analysis -- suggest d3 c5 f6
//! ```

mod analyzer;
mod batch;
mod config;
mod report;

pub use analyzer::*;
pub use batch::*;
pub use config::*;
pub use report::*;
