//! # Progress Tracking and Statistics Module
//!
//! Questo modulo gestisce il progress tracking e le statistiche di minificazione.
//!
//! ## Responsabilità:
//! - Progress bar visual con `indicatif` per feedback real-time (opzionale)
//! - Tracking statistiche (file processati, minificati, errori, byte risparmiati)
//! - Report finale con statistiche aggregate
//!
//! ## Output testuale e progress bar:
//! Le righe testuali (`Minifying: ...`) passano da `ProgressManager::println`,
//! che sospende la barra mentre stampa. Con la barra disabilitata la stampa è diretta.
//!
//! ## Visual feedback:
//! ```text
//! ⠋ [00:00:02] [========================================] 42/42 app.js
//! ```

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

/// Manages progress reporting for a minification run
#[derive(Clone)]
pub struct ProgressManager {
    bar: ProgressBar,
}

impl ProgressManager {
    /// Create a spinner-style bar; the total is unknown while walking lazily
    pub fn new(enabled: bool) -> Self {
        if !enabled {
            return Self {
                bar: ProgressBar::hidden(),
            };
        }

        let bar = ProgressBar::with_draw_target(None, ProgressDrawTarget::stderr());
        if let Ok(style) =
            ProgressStyle::default_spinner().template("{spinner:.green} [{elapsed_precise}] {pos} files {msg}")
        {
            bar.set_style(style);
        }
        bar.enable_steady_tick(Duration::from_millis(100));

        Self { bar }
    }

    /// Update progress with a message
    pub fn update(&self, message: &str) {
        self.bar.inc(1);
        self.bar.set_message(message.to_string());
    }

    /// Print a line to stdout without tearing the bar
    pub fn println(&self, line: &str) {
        self.bar.suspend(|| println!("{}", line));
    }

    /// Finish with a final message
    pub fn finish(&self, message: &str) {
        self.bar.finish_with_message(message.to_string());
    }
}

/// Statistics for a minification run
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MinifyStats {
    pub files_processed: usize,
    pub files_minified: usize,
    pub errors: usize,
    pub total_original_size: u64,
    pub total_bytes_saved: u64,
}

impl MinifyStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_minified(&mut self, original_size: u64, new_size: u64) {
        self.files_processed += 1;
        self.files_minified += 1;
        self.total_original_size += original_size;
        self.total_bytes_saved += original_size.saturating_sub(new_size);
    }

    pub fn add_error(&mut self) {
        self.files_processed += 1;
        self.errors += 1;
    }

    pub fn overall_reduction_percent(&self) -> f64 {
        if self.total_original_size > 0 {
            (self.total_bytes_saved as f64 / self.total_original_size as f64) * 100.0
        } else {
            0.0
        }
    }

    pub fn format_summary(&self) -> String {
        format!(
            "Processed: {} files | Minified: {} | Errors: {} | Total saved: {} ({:.2}%)",
            self.files_processed,
            self.files_minified,
            self.errors,
            crate::file_manager::FileManager::format_size(self.total_bytes_saved),
            self.overall_reduction_percent()
        )
    }
}
