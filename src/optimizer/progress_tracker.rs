//! # Progress Tracking Module
//!
//! Unico punto di uscita per tutto ciò che l'utente vede durante una run.
//! Gestisce sia output JSON che righe testuali + progress bar tradizionale.

use crate::{
    config::Config,
    error::MinifyError,
    file_manager::FileManager,
    json_output::JsonMessage,
    optimizer::path_resolver::FileTask,
    progress::ProgressManager,
    report::{FileOutcome, MinifiedFile, RunReport},
};
use std::path::Path;
use tracing::{error, info};

/// Routes run events to text or JSON output
#[derive(Clone)]
pub struct ProgressTracker {
    json_output: bool,
    progress_manager: ProgressManager,
}

impl ProgressTracker {
    pub fn new(config: &Config) -> Self {
        Self {
            json_output: config.json_output,
            progress_manager: ProgressManager::new(config.show_progress && !config.json_output),
        }
    }

    /// Inizio della run
    pub fn start(&self, config: &Config) {
        if self.json_output {
            JsonMessage::Start {
                root_dir: config.root_dir.clone(),
                top_level: config.top_level,
                dry_run: config.dry_run,
            }
            .emit();
        } else {
            info!("Starting JavaScript minification in: {}", config.root_dir.display());
            if config.dry_run {
                info!("Dry run mode: No files will be written");
            }
        }
    }

    /// Emesso prima di invocare il minifier
    pub fn file_start(&self, task: &FileTask, index: usize) {
        if self.json_output {
            JsonMessage::FileStart {
                path: task.source_path.clone(),
                index,
            }
            .emit();
        } else {
            self.progress_manager
                .println(&format!("Minifying: {}", task.source_path.display()));
        }
    }

    /// Emesso dopo una scrittura riuscita (o simulata in dry run)
    pub fn file_written(&self, file: &MinifiedFile) {
        if self.json_output {
            return;
        }
        let line = if file.written {
            format!("Minified file created: {}", file.output_path.display())
        } else {
            format!("Dry run: would create {}", file.output_path.display())
        };
        self.progress_manager.println(&line);
    }

    /// Fine elaborazione di un file, successo o errore
    pub fn file_complete(&self, outcome: &FileOutcome) {
        match outcome {
            FileOutcome::Minified(file) => {
                if self.json_output {
                    JsonMessage::file_complete(file).emit();
                }
                self.progress_manager.update(&format!(
                    "[OK] {}: {:.1}% saved",
                    file_name(&file.source_path),
                    file.reduction_percent
                ));
            }
            FileOutcome::Failed(e) => {
                if self.json_output {
                    JsonMessage::file_failed(e.path().clone(), e.to_string()).emit();
                } else {
                    error!("{}", e);
                }
                self.progress_manager
                    .update(&format!("[ERROR] {}: error", file_name(e.path())));
            }
        }
    }

    /// Errore fatale durante il walk
    pub fn fatal(&self, e: &MinifyError) {
        if self.json_output {
            JsonMessage::error("error walking the directory".to_string(), Some(e.to_string()))
                .emit();
        } else {
            error!("{}", e);
        }
        self.progress_manager.finish("[ERROR] walk aborted");
    }

    /// Statistiche finali
    pub fn finish(&self, report: &RunReport, duration: f64) {
        let stats = report.stats();
        self.progress_manager.finish(&stats.format_summary());

        if self.json_output {
            JsonMessage::complete(&stats, duration).emit();
            return;
        }

        info!("=== Minification Complete ===");
        info!("Files processed: {}", stats.files_processed);
        info!("Files minified: {}", stats.files_minified);
        info!("Errors: {}", stats.errors);
        info!("Bytes saved: {}", FileManager::format_size(stats.total_bytes_saved));
        info!("Average reduction: {:.2}%", stats.overall_reduction_percent());
        info!("Elapsed: {:.2}s", duration);
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .into_owned()
}
