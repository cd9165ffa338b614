//! # JSON Output Module
//!
//! Questo modulo gestisce l'output strutturato in JSON per l'uso da altri programmi.
//!
//! ## Responsabilità:
//! - Emette messaggi JSON strutturati per eventi di progresso, uno per riga
//! - Riutilizza `MinifiedFile` e `MinifyStats` come payload
//!
//! ## Tipi di messaggi:
//! - `start`: Inizio della run
//! - `file_start`: Inizio elaborazione di un file
//! - `file_complete`: Fine elaborazione di un file (con eventuale errore)
//! - `complete`: Fine run con statistiche finali
//! - `error`: Errore fatale (walk della directory)

use crate::config::TopLevel;
use crate::progress::MinifyStats;
use crate::report::MinifiedFile;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Tipo di messaggio JSON
#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum JsonMessage {
    #[serde(rename = "start")]
    Start {
        root_dir: PathBuf,
        top_level: TopLevel,
        dry_run: bool,
    },

    #[serde(rename = "file_start")]
    FileStart { path: PathBuf, index: usize },

    #[serde(rename = "file_complete")]
    FileComplete {
        path: PathBuf,
        output_path: Option<PathBuf>,
        original_size: u64,
        minified_size: u64,
        reduction_percent: f64,
        written: bool,
        error: Option<String>,
    },

    #[serde(rename = "complete")]
    Complete {
        files_processed: usize,
        files_minified: usize,
        errors: usize,
        total_bytes_saved: u64,
        average_reduction: f64,
        duration_seconds: f64,
        success: bool,
    },

    #[serde(rename = "error")]
    Error {
        message: String,
        details: Option<String>,
    },
}

impl JsonMessage {
    /// Emette il messaggio JSON su stdout
    pub fn emit(&self) {
        if let Ok(json) = serde_json::to_string(self) {
            println!("{}", json);
        }
    }

    pub fn file_complete(file: &MinifiedFile) -> Self {
        Self::FileComplete {
            path: file.source_path.clone(),
            output_path: Some(file.output_path.clone()),
            original_size: file.original_size,
            minified_size: file.minified_size,
            reduction_percent: file.reduction_percent,
            written: file.written,
            error: None,
        }
    }

    pub fn file_failed(path: PathBuf, error: String) -> Self {
        Self::FileComplete {
            path,
            output_path: None,
            original_size: 0,
            minified_size: 0,
            reduction_percent: 0.0,
            written: false,
            error: Some(error),
        }
    }

    pub fn complete(stats: &MinifyStats, duration_seconds: f64) -> Self {
        Self::Complete {
            files_processed: stats.files_processed,
            files_minified: stats.files_minified,
            errors: stats.errors,
            total_bytes_saved: stats.total_bytes_saved,
            average_reduction: stats.overall_reduction_percent(),
            duration_seconds,
            success: stats.errors == 0,
        }
    }

    pub fn error(message: String, details: Option<String>) -> Self {
        Self::Error { message, details }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_tagged() {
        let msg = JsonMessage::FileStart {
            path: PathBuf::from("public/app.js"),
            index: 0,
        };
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["type"], "file_start");
        assert_eq!(json["path"], "public/app.js");
    }

    #[test]
    fn test_file_failed_carries_error() {
        let msg = JsonMessage::file_failed(PathBuf::from("bad.js"), "boom".to_string());
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["type"], "file_complete");
        assert_eq!(json["error"], "boom");
        assert!(json["output_path"].is_null());
    }

    #[test]
    fn test_complete_reports_success_flag() {
        let mut stats = MinifyStats::new();
        stats.add_minified(10, 5);
        match JsonMessage::complete(&stats, 0.5) {
            JsonMessage::Complete { success, files_minified, .. } => {
                assert!(success);
                assert_eq!(files_minified, 1);
            }
            other => panic!("unexpected message: {:?}", other),
        }

        stats.add_error();
        let json = serde_json::to_value(JsonMessage::complete(&stats, 0.5)).unwrap();
        assert_eq!(json["success"], false);
    }
}
