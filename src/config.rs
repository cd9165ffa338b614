//! # Configuration Management Module
//!
//! Questo modulo gestisce tutta la configurazione dell'applicazione.
//!
//! ## Responsabilità:
//! - Definisce la struct `Config` con tutti i parametri di una run
//! - Fornisce validazione dei parametri di input
//! - Fornisce valori di default sensati per tutti i parametri
//!
//! ## Parametri di configurazione:
//! - `root_dir`: Directory da scansionare ricorsivamente (default: `public`)
//! - `top_level`: Script globale o modulo ES (default: `Global`)
//! - `dry_run`: Minifica senza scrivere i file `.min.js` (default: false)
//! - `json_output`: Eventi JSON su stdout invece di testo (default: false)
//! - `show_progress`: Progress bar su stderr (default: false)
//!
//! La configurazione arriva solo dalla command line: non esistono file di config.
//!
//! ## Esempio:
//! ```rust,ignore
//! let config = Config {
//!     root_dir: PathBuf::from("public/js"),
//!     dry_run: true,
//!     ..Default::default()
//! };
//! config.validate()?;
//! ```

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Directory scanned when none is given on the command line
pub const DEFAULT_ROOT_DIR: &str = "public";

/// How the minifier treats the top level scope of each file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TopLevel {
    /// Classic script: top level names are globals and must be kept
    #[default]
    Global,
    /// ES module: top level names are private and may be renamed
    Module,
}

/// Configuration for a minification run
#[derive(Debug, Clone)]
pub struct Config {
    /// Root directory scanned recursively for `.js` files
    pub root_dir: PathBuf,
    /// Top level mode passed to the minifier
    pub top_level: TopLevel,
    /// Dry run - minify but don't write `.min.js` files
    pub dry_run: bool,
    /// Output progress and status as JSON for programmatic use
    pub json_output: bool,
    /// Show a progress bar on stderr
    pub show_progress: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root_dir: PathBuf::from(DEFAULT_ROOT_DIR),
            top_level: TopLevel::Global,
            dry_run: false,
            json_output: false,
            show_progress: false,
        }
    }
}

impl Config {
    /// Validate configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.root_dir.as_os_str().is_empty() {
            return Err(anyhow::anyhow!("Root directory must not be empty"));
        }

        if self.json_output && self.show_progress {
            return Err(anyhow::anyhow!(
                "Progress bar cannot be combined with JSON output"
            ));
        }

        Ok(())
    }
}
