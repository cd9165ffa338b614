//! # JavaScript Processing Module
//!
//! Questo modulo incapsula il minifier esterno, trattato come una black box.
//!
//! ## Responsabilità:
//! - Registro MIME type -> funzione di minificazione, configurato una volta per run
//! - Registrazione di `application/javascript` tramite lo stack `oxc` (parser, minifier, codegen)
//! - Permette ai test di iniettare minifier deterministici o che falliscono
//!
//! ## Contratto:
//! Il registro accetta un MIME type e un buffer di byte e restituisce il buffer
//! minificato oppure un messaggio d'errore. Nessuna conoscenza della sintassi
//! JavaScript vive in questo crate.
//!
//! ## Modalità top level:
//! - `Global`: parse come script, i nomi top level non vengono rinominati
//! - `Module`: parse come modulo ES, anche i nomi top level vengono rinominati
//!
//! ## Esempio:
//! ```rust,ignore
//! let registry = MinifierRegistry::javascript(TopLevel::Global);
//! let out = registry.bytes(JAVASCRIPT_MIME, b"var a = 1;")?;
//! ```

use crate::config::TopLevel;
use oxc_allocator::Allocator;
use oxc_codegen::{Codegen, CodegenOptions};
use oxc_minifier::{CompressOptions, MangleOptions, Minifier, MinifierOptions};
use oxc_parser::Parser;
use oxc_span::SourceType;
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

/// MIME type used for every candidate file
pub const JAVASCRIPT_MIME: &str = "application/javascript";

/// A single minify function: source bytes in, minified bytes or a reason out
pub type MinifyFn = Box<dyn Fn(&[u8]) -> Result<Vec<u8>, String> + Send + Sync>;

/// Maps MIME types to minify functions
#[derive(Default)]
pub struct MinifierRegistry {
    handlers: HashMap<String, MinifyFn>,
}

impl fmt::Debug for MinifierRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut mimes: Vec<&String> = self.handlers.keys().collect();
        mimes.sort();
        f.debug_struct("MinifierRegistry").field("mimes", &mimes).finish()
    }
}

impl MinifierRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the JavaScript minifier installed
    pub fn javascript(top_level: TopLevel) -> Self {
        let mut registry = Self::new();
        registry.add_func(JAVASCRIPT_MIME, move |input| minify_javascript(top_level, input));
        registry
    }

    /// Register (or replace) the function for a MIME type
    pub fn add_func<F>(&mut self, mime: &str, func: F)
    where
        F: Fn(&[u8]) -> Result<Vec<u8>, String> + Send + Sync + 'static,
    {
        self.handlers.insert(mime.to_string(), Box::new(func));
    }

    /// Whether a MIME type has a registered minifier
    pub fn supports(&self, mime: &str) -> bool {
        self.handlers.contains_key(mime)
    }

    /// Minify `input` with the function registered for `mime`
    pub fn bytes(&self, mime: &str, input: &[u8]) -> Result<Vec<u8>, String> {
        let handler = self
            .handlers
            .get(mime)
            .ok_or_else(|| format!("minifier not found for mime type {}", mime))?;
        let output = handler(input)?;
        debug!("Minified {} bytes -> {} bytes ({})", input.len(), output.len(), mime);
        Ok(output)
    }
}

fn minify_javascript(top_level: TopLevel, input: &[u8]) -> Result<Vec<u8>, String> {
    let source = std::str::from_utf8(input).map_err(|e| format!("invalid UTF-8: {}", e))?;
    let source_type = match top_level {
        TopLevel::Global => SourceType::cjs(),
        TopLevel::Module => SourceType::mjs(),
    };

    let allocator = Allocator::default();
    let parsed = Parser::new(&allocator, source, source_type).parse();
    if parsed.panicked || !parsed.errors.is_empty() {
        let reasons: Vec<String> = parsed.errors.iter().map(|e| e.to_string()).collect();
        return Err(if reasons.is_empty() {
            "parser aborted".to_string()
        } else {
            reasons.join("; ")
        });
    }

    let mut program = parsed.program;
    let options = MinifierOptions {
        mangle: Some(MangleOptions {
            top_level: top_level == TopLevel::Module,
            ..MangleOptions::default()
        }),
        compress: Some(CompressOptions::smallest()),
    };
    let minified = Minifier::new(options).minify(&allocator, &mut program);

    let code = Codegen::new()
        .with_options(CodegenOptions::minify())
        .with_scoping(minified.scoping)
        .build(&program)
        .code;
    Ok(code.into_bytes())
}
