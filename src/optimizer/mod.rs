//! # Optimizer Module
//!
//! Modulo che separa le responsabilità in sottomoduli:
//! - `js_optimizer`: Orchestratore principale
//! - `task_optimizer`: Worker per singoli file
//! - `progress_tracker`: Gestione output unificata (testo o JSON)
//! - `path_resolver`: Logica di calcolo path centralizzata

pub mod js_optimizer;
pub mod task_optimizer;
pub mod progress_tracker;
pub mod path_resolver;

pub use js_optimizer::JsOptimizer;
pub use task_optimizer::TaskOptimizer;
pub use progress_tracker::ProgressTracker;
pub use path_resolver::{FileTask, PathResolver};
