//! # Run Report Module
//!
//! Questo modulo raccoglie l'esito di ogni file processato in una run.
//!
//! ## Responsabilità:
//! - `MinifiedFile`: Info su un file minificato (path, dimensioni, riduzione)
//! - `FileOutcome`: Successo o fallimento di un singolo file
//! - `RunReport`: Fold esplicito di tutti gli esiti, nessun flag globale nascosto
//!
//! L'exit status del processo dipende solo da `RunReport::any_error_occurred()`.

use crate::error::MinifyError;
use crate::file_manager::FileManager;
use crate::progress::MinifyStats;
use serde::Serialize;
use std::path::PathBuf;

/// Information about a minified file
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct MinifiedFile {
    pub source_path: PathBuf,
    pub output_path: PathBuf,
    pub original_size: u64,
    pub minified_size: u64,
    pub reduction_percent: f64,
    /// False in dry-run mode
    pub written: bool,
}

impl MinifiedFile {
    pub fn new(
        source_path: PathBuf,
        output_path: PathBuf,
        original_size: u64,
        minified_size: u64,
        written: bool,
    ) -> Self {
        Self {
            source_path,
            output_path,
            original_size,
            minified_size,
            reduction_percent: FileManager::calculate_reduction(original_size, minified_size),
            written,
        }
    }
}

/// Result of processing one candidate file
#[derive(Debug)]
pub enum FileOutcome {
    Minified(MinifiedFile),
    Failed(MinifyError),
}

impl FileOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

impl From<Result<MinifiedFile, MinifyError>> for FileOutcome {
    fn from(result: Result<MinifiedFile, MinifyError>) -> Self {
        match result {
            Ok(file) => Self::Minified(file),
            Err(error) => Self::Failed(error),
        }
    }
}

/// All per-file outcomes of one invocation
#[derive(Debug, Default)]
pub struct RunReport {
    outcomes: Vec<FileOutcome>,
}

impl RunReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: FileOutcome) {
        self.outcomes.push(outcome);
    }

    /// The aggregate failure flag
    pub fn any_error_occurred(&self) -> bool {
        self.outcomes.iter().any(FileOutcome::is_failure)
    }

    pub fn failures(&self) -> impl Iterator<Item = &MinifyError> {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            FileOutcome::Failed(error) => Some(error),
            FileOutcome::Minified(_) => None,
        })
    }

    pub fn minified(&self) -> impl Iterator<Item = &MinifiedFile> {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            FileOutcome::Minified(file) => Some(file),
            FileOutcome::Failed(_) => None,
        })
    }

    pub fn stats(&self) -> MinifyStats {
        self.outcomes
            .iter()
            .fold(MinifyStats::new(), |mut stats, outcome| {
                match outcome {
                    FileOutcome::Minified(file) => {
                        stats.add_minified(file.original_size, file.minified_size)
                    }
                    FileOutcome::Failed(_) => stats.add_error(),
                }
                stats
            })
    }
}

impl FromIterator<FileOutcome> for RunReport {
    fn from_iter<I: IntoIterator<Item = FileOutcome>>(iter: I) -> Self {
        Self {
            outcomes: iter.into_iter().collect(),
        }
    }
}
