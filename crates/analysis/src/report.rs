//! Analysis report storage and text rendering

use std::path::Path;

use classical_engine::format_pv;
use thiserror::Error;

use crate::analyzer::GameAnalysis;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode or decode {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl GameAnalysis {
    /// Save analysis to a pretty-printed JSON file
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

    /// Load analysis from a JSON file
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

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let s = &self.summary;
        let mut report = String::new();
        report.push_str("=== Game Analysis ===\n\n");
        report.push_str(&format!(
            "Moves: {}, errors: {}, unplayable: {}\n",
            s.moves_count, s.errors_count, s.faults_count
        ));
        report.push_str(&format!(
            "Final discs: dark {} - light {} (eval {:+.3} for dark)\n\n",
            s.discs.dark, s.discs.light, s.final_eval
        ));

        report.push_str(&format!(
            "{:>4} {:<6} {:<6} {:<6} {:>8} {:>8} {:>7}  {}\n",
            "Ply", "Side", "Played", "Best", "After", "Best@", "Swing", "Note"
        ));
        report.push_str(&"-".repeat(70));
        report.push('\n');

        for r in &self.records {
            let best = r.engine_best.map(|m| m.to_string()).unwrap_or_else(|| "-".into());
            let note = match (&r.fault, r.explanation) {
                (Some(fault), _) => format!("unplayable: {fault}"),
                (None, Some(why)) => format!("ERROR: {why}"),
                (None, None) if r.matches_best => "best".to_string(),
                (None, None) => String::new(),
            };
            report.push_str(&format!(
                "{:>4} {:<6} {:<6} {:<6} {:>+8.3} {:>+8.3} {:>7.3}  {}\n",
                r.ply + 1,
                r.side.to_string(),
                r.played,
                best,
                r.eval_after_actual,
                r.eval_after_best,
                r.swing,
                note
            ));
        }

        if let Some(first) = &self.first_error {
            report.push_str(&format!(
                "\nFirst error at ply {} ({} played {}); engine line: {}\n",
                first.ply + 1,
                first.side,
                first.played,
                format_pv(&first.pv)
            ));
        } else {
            report.push_str("\nNo errors found.\n");
        }

        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod report_tests;
