//! # JS Minifier Library
//!
//! Questo è il modulo principale della libreria che espone tutte le API pubbliche.
//!
//! ## Responsabilità:
//! - Definisce la struttura modulare dell'applicazione
//! - Espone i tipi e le funzioni principali tramite re-exports
//! - Fornisce un'interfaccia pulita per il main.rs e per i test
//!
//! ## Architettura dei moduli:
//! - `config`: Gestione configurazione e validazione parametri
//! - `error`: Tipi di errore custom (accesso, lettura, minificazione, scrittura)
//! - `file_manager`: Walk della directory e filtro dei file `.js`
//! - `js_processor`: Registro MIME -> minifier esterno
//! - `optimizer`: Orchestratore principale del processo
//! - `report`: Esiti per-file e report della run
//! - `progress`: Progress bar e statistiche
//! - `json_output`: Eventi JSON per uso programmatico
//!
//! ## Utilizzo:
//! ```rust,ignore
//! use js_minifier::{Config, JsOptimizer};
//!
//! let optimizer = JsOptimizer::with_default_minifier(Config::default())?;
//! let report = optimizer.run().await?;
//! ```

pub mod config;
pub mod error;
pub mod file_manager;
pub mod js_processor;
pub mod json_output;
pub mod optimizer;
pub mod progress;
pub mod report;

pub use config::{Config, TopLevel};
pub use error::MinifyError;
pub use js_processor::{MinifierRegistry, JAVASCRIPT_MIME};
pub use optimizer::{FileTask, JsOptimizer};
pub use report::{FileOutcome, MinifiedFile, RunReport};
