//! Othello analysis CLI
//!
//! Analyze recorded games, suggest moves and generate random games.

use std::path::{Path, PathBuf};

use analysis::{
    AnalysisConfig, GameAnalyzer, GameRecord, analyze_dir, board_after, rows_to_csv,
};
use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use classical_engine::format_pv;
use rand::SeedableRng;
use rand::rngs::StdRng;
use random_engine::random_game;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "othello-analyze", about = "Find the moves that lost an Othello game")]
struct Cli {
    #[command(flatten)]
    opts: SearchOpts,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct SearchOpts {
    /// TOML file with analysis settings; flags override it
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Maximum search depth per position
    #[arg(long, global = true)]
    depth: Option<u8>,

    /// Swing above which a move counts as an error
    #[arg(long, global = true)]
    threshold: Option<f64>,

    /// Time budget per position in milliseconds
    #[arg(long, global = true)]
    time_ms: Option<u64>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze a game file ({"moves": [...]})
    Analyze {
        game: PathBuf,
        /// Write the full analysis as JSON here
        #[arg(long)]
        json_out: Option<PathBuf>,
    },
    /// Suggest a move for the side to play after the given moves
    Suggest { moves: Vec<String> },
    /// Print the board after the given moves
    Board { moves: Vec<String> },
    /// Analyze every *.json game in a directory
    Batch {
        dir: PathBuf,
        /// Write the summary as CSV here
        #[arg(long)]
        csv_out: Option<PathBuf>,
    },
    /// Generate a random game file
    Random {
        #[arg(long, default_value_t = 1u64)]
        seed: u64,
        /// Output path (stdout if omitted)
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

impl SearchOpts {
    fn resolve(&self) -> Result<AnalysisConfig> {
        let mut config = match &self.config {
            Some(path) => AnalysisConfig::load(path)?,
            None => AnalysisConfig::default(),
        };
        if let Some(depth) = self.depth {
            config.max_depth = depth;
        }
        if let Some(threshold) = self.threshold {
            config.swing_threshold = threshold;
        }
        if let Some(ms) = self.time_ms {
            config.time_limit_ms = Some(ms);
        }
        if config.max_depth == 0 {
            bail!("search depth must be at least 1");
        }
        Ok(config)
    }
}

fn run_analyze(config: AnalysisConfig, game: &Path, json_out: Option<&Path>) -> Result<()> {
    let record = GameRecord::load(game)?;
    if let (Some(dark), Some(light)) = (&record.dark, &record.light) {
        println!("{dark} (dark) vs {light} (light)");
    }

    let analysis = GameAnalyzer::new(config).analyze(&record.moves);
    analysis.print_report();

    if let Some(path) = json_out {
        analysis.save(path)?;
        println!("Analysis saved: {}", path.display());
    }
    Ok(())
}

fn run_suggest(config: AnalysisConfig, moves: &[String]) -> Result<()> {
    let suggestion = GameAnalyzer::new(config)
        .suggest(moves)
        .context("cannot replay move list")?;

    match suggestion.best_move {
        Some(mv) => println!("{} plays {mv}", suggestion.side),
        None => println!("Game over"),
    }
    println!(
        "Eval: {:+.3}  depth {}  nodes {}  {} ms",
        suggestion.value, suggestion.depth, suggestion.nodes, suggestion.elapsed_ms
    );
    println!("Line: {}", format_pv(&suggestion.pv));
    Ok(())
}

fn run_board(moves: &[String]) -> Result<()> {
    let matrix = board_after(moves).context("cannot replay move list")?;
    for row in matrix {
        let cells: Vec<String> = row.iter().map(|c| format!("{c:>2}")).collect();
        println!("{}", cells.join(" "));
    }
    Ok(())
}

fn run_batch(config: AnalysisConfig, dir: &Path, csv_out: Option<&Path>) -> Result<()> {
    let mut analyzer = GameAnalyzer::new(config);
    let rows = analyze_dir(&mut analyzer, dir)?;

    println!("{:<30} {:>6} {:>7} {:>12}", "File", "Moves", "Errors", "First error");
    println!("{:-<58}", "");
    for row in &rows {
        let first = row
            .first_error_index
            .map(|i| i.to_string())
            .unwrap_or_else(|| "-".into());
        println!(
            "{:<30} {:>6} {:>7} {:>12}",
            row.file, row.moves, row.errors_count, first
        );
    }

    if let Some(path) = csv_out {
        std::fs::write(path, rows_to_csv(&rows))
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("Batch summary saved: {}", path.display());
    }
    Ok(())
}

fn run_random(seed: u64, out: Option<&Path>) -> Result<()> {
    let moves = random_game(&mut StdRng::seed_from_u64(seed));
    let record = GameRecord {
        moves: moves.iter().map(|m| m.to_string()).collect(),
        dark: Some("random".into()),
        light: Some("random".into()),
    };

    match out {
        Some(path) => {
            record.save(path)?;
            println!("Game with {} moves saved: {}", record.moves.len(), path.display());
        }
        None => println!("{}", serde_json::to_string_pretty(&record)?),
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Analyze { game, json_out } => {
            run_analyze(cli.opts.resolve()?, &game, json_out.as_deref())
        }
        Command::Suggest { moves } => run_suggest(cli.opts.resolve()?, &moves),
        Command::Board { moves } => run_board(&moves),
        Command::Batch { dir, csv_out } => run_batch(cli.opts.resolve()?, &dir, csv_out.as_deref()),
        Command::Random { seed, out } => run_random(seed, out.as_deref()),
    }
}
