//! # Error Types Module
//!
//! Questo modulo definisce tutti i tipi di errore custom dell'applicazione.
//!
//! ## Responsabilità:
//! - Definisce `MinifyError` enum per categorizzare tutti gli errori possibili
//! - Conserva il path coinvolto e la causa originale di ogni errore
//! - Distingue errori fatali (walk della directory) da errori per-file
//!
//! ## Categorie di errori:
//! - `Access`: Directory o path non attraversabile (fatale, interrompe il walk)
//! - `Read`: File sorgente non leggibile (registrato, si continua)
//! - `Minify`: Il minifier rifiuta l'input (registrato, si continua)
//! - `Write`: Output `.min.js` non scrivibile (registrato, si continua)
//!
//! ## Esempio:
//! ```rust,ignore
//! match optimizer.run().await {
//!     Err(e) if e.is_fatal() => return Err(e.into()),
//!     _ => {}
//! }
//! ```

use std::path::PathBuf;

/// Custom error types for JavaScript minification
#[derive(thiserror::Error, Debug)]
pub enum MinifyError {
    #[error("error accessing path {}: {source}", .path.display())]
    Access {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("failed to read file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to minify file {}: {reason}", .path.display())]
    Minify { path: PathBuf, reason: String },

    #[error("failed to write file {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl MinifyError {
    /// Path the error refers to
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::Access { path, .. }
            | Self::Read { path, .. }
            | Self::Minify { path, .. }
            | Self::Write { path, .. } => path,
        }
    }

    /// Only a traversal failure stops the whole run
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Access { .. })
    }
}
