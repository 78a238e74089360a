//! Batch analysis over a directory of recorded games

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::analyzer::GameAnalyzer;
use crate::report::ReportError;

/// A recorded game as stored on disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Moves in order, Dark first; `pass` for a pass
    pub moves: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dark: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub light: Option<String>,
}

impl GameRecord {
    pub fn new(moves: Vec<String>) -> Self {
        Self {
            moves,
            dark: None,
            light: None,
        }
    }

    pub fn load(path: &Path) -> Result<Self, ReportError> {
        let shown = path.display().to_string();
        let contents = std::fs::read_to_string(path).map_err(|source| ReportError::Io {
            path: shown.clone(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| ReportError::Json {
            path: shown,
            source,
        })
    }

    pub fn save(&self, path: &Path) -> Result<(), ReportError> {
        let shown = path.display().to_string();
        let json = serde_json::to_string_pretty(self).map_err(|source| ReportError::Json {
            path: shown.clone(),
            source,
        })?;
        std::fs::write(path, json).map_err(|source| ReportError::Io {
            path: shown,
            source,
        })
    }
}

/// One line of the batch summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchRow {
    pub file: String,
    pub moves: usize,
    pub errors_count: usize,
    pub first_error_index: Option<usize>,
}

/// Analyzes every `*.json` game in `dir`, in file name order.
///
/// Files that cannot be read or parsed are logged and skipped; only a
/// failure to list the directory is an error.
pub fn analyze_dir(analyzer: &mut GameAnalyzer, dir: &Path) -> Result<Vec<BatchRow>, ReportError> {
    let io_err = |source| ReportError::Io {
        path: dir.display().to_string(),
        source,
    };

    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        if path.extension().is_some_and(|ext| ext == "json") {
            paths.push(path);
        }
    }
    paths.sort();

    let mut rows = Vec::with_capacity(paths.len());
    for path in paths {
        let game = match GameRecord::load(&path) {
            Ok(game) => game,
            Err(e) => {
                warn!(error = %e, "skipping game file");
                continue;
            }
        };

        let file = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let analysis = analyzer.analyze(&game.moves);
        info!(
            file = %file,
            errors = analysis.summary.errors_count,
            "batch game analyzed"
        );

        rows.push(BatchRow {
            file,
            moves: game.moves.len(),
            errors_count: analysis.summary.errors_count,
            first_error_index: analysis.summary.first_error_index,
        });
    }

    Ok(rows)
}

/// Renders rows as CSV with a header line
pub fn rows_to_csv(rows: &[BatchRow]) -> String {
    let mut buf = String::from("file,moves,errors_count,first_error_index\n");
    for row in rows {
        let first = row
            .first_error_index
            .map(|i| i.to_string())
            .unwrap_or_default();
        buf.push_str(&format!(
            "{},{},{},{}\n",
            row.file, row.moves, row.errors_count, first
        ));
    }
    buf
}

#[cfg(test)]
#[path = "batch_tests.rs"]
mod batch_tests;
