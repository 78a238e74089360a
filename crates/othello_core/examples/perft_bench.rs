//! Perft benchmark for profiling with cargo-flamegraph.
//!
//! Usage:
//!   cargo flamegraph --example perft_bench -p othello_core -- [depth] [moves...]
//!
//! Examples:
//!   # Default: depth 8 from every test position
//!   cargo flamegraph --example perft_bench -p othello_core
//!
//!   # Custom depth and position given as a move list
//!   cargo flamegraph --example perft_bench -p othello_core -- 7 f5 d6 c3 d3 c4

use othello_core::{Board, perft};
use std::env;
use std::time::Instant;

/// Standard test positions, as move lists from the opening
const TEST_POSITIONS: &[(&str, &[&str])] = &[
    ("Opening", &[]),
    ("Tiger", &["f5", "d6", "c3", "d3", "c4"]),
    ("Parallel", &["d3", "c5", "e6", "f5", "f6", "e3"]),
];

fn main() {
    let args: Vec<String> = env::args().collect();

    let depth: u8 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(8);

    if args.len() > 2 {
        run_single_position(&args[2..], depth);
    } else {
        run_all_positions(depth);
    }
}

fn run_single_position<S: AsRef<str>>(moves: &[S], depth: u8) {
    let (board, side) = match Board::replay(moves) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Invalid move list: {e}");
            return;
        }
    };

    println!("{board}");
    println!("Side to move: {side}");
    println!("Depth: {depth}");
    println!();

    let start = Instant::now();
    let nodes = perft(&board, side, depth);
    let elapsed = start.elapsed();

    let nps = if elapsed.as_secs_f64() > 0.0 {
        nodes as f64 / elapsed.as_secs_f64()
    } else {
        0.0
    };

    println!("Nodes: {nodes}");
    println!("Time: {elapsed:.3?}");
    println!("NPS: {nps:.0}");
}

fn run_all_positions(depth: u8) {
    println!("=== Perft Benchmark Suite ===");
    println!("Depth: {depth}");
    println!();

    let mut total_nodes = 0u64;
    let mut total_time = std::time::Duration::ZERO;

    for (name, moves) in TEST_POSITIONS {
        let Ok((board, side)) = Board::replay(*moves) else {
            eprintln!("{name}: move list does not replay");
            continue;
        };

        print!("{name:.<30}");

        let start = Instant::now();
        let nodes = perft(&board, side, depth);
        let elapsed = start.elapsed();

        total_nodes += nodes;
        total_time += elapsed;

        let nps = if elapsed.as_secs_f64() > 0.0 {
            nodes as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };

        println!(" {nodes:>12} nodes in {elapsed:>8.3?} ({nps:>10.0} nps)");
    }

    println!();
    println!("{:=<70}", "");
    let total_nps = if total_time.as_secs_f64() > 0.0 {
        total_nodes as f64 / total_time.as_secs_f64()
    } else {
        0.0
    };
    println!("TOTAL: {total_nodes} nodes in {total_time:.3?} ({total_nps:.0} nps)");
}
