//! # JS Minifier - Main Entry Point
//!
//! Questo è il punto di ingresso principale dell'applicazione.
//!
//! ## Responsabilità:
//! - Parsing degli argomenti della command line con `clap`
//! - Inizializzazione del sistema di logging con `tracing`
//! - Creazione della configurazione e avvio dell'optimizer
//! - Traduzione del report finale in exit status
//!
//! ## Flusso di esecuzione:
//! 1. Parsa gli argomenti CLI (directory, module, dry-run, json, progress)
//! 2. Configura il logging (INFO o DEBUG a seconda del flag verbose, `RUST_LOG` vince)
//! 3. Crea un oggetto Config e il minifier JavaScript
//! 4. Esegue la run: exit 0 solo se nessun file è fallito
//!
//! ## Esempio di utilizzo:
//! ```bash
//! js-minifier public/js --module --verbose
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use js_minifier::config::DEFAULT_ROOT_DIR;
use js_minifier::{Config, JsOptimizer, TopLevel};

#[derive(Parser)]
#[command(name = "js-minifier")]
#[command(about = "Minify every .js file under a directory into a .min.js sibling")]
struct Args {
    /// Directory scanned recursively for JavaScript files
    #[arg(default_value = DEFAULT_ROOT_DIR)]
    directory: PathBuf,

    /// Treat files as ES modules (top level names may be renamed)
    #[arg(long)]
    module: bool,

    /// Dry run - minify but don't write .min.js files
    #[arg(long)]
    dry_run: bool,

    /// Emit newline-delimited JSON events instead of text
    #[arg(long)]
    json: bool,

    /// Show a progress bar on stderr
    #[arg(long)]
    progress: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let default_level = if args.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let config = Config {
        root_dir: args.directory,
        top_level: if args.module {
            TopLevel::Module
        } else {
            TopLevel::Global
        },
        dry_run: args.dry_run,
        json_output: args.json,
        show_progress: args.progress,
    };

    let optimizer = JsOptimizer::with_default_minifier(config)?;
    let report = optimizer
        .run()
        .await
        .context("error walking the directory")?;

    if report.any_error_occurred() {
        return Err(anyhow::anyhow!("minification process failed"));
    }

    if !args.json {
        if args.dry_run {
            println!("Dry run complete: no files were written.");
        } else {
            println!("All JavaScript files minified successfully.");
        }
    }

    Ok(())
}
