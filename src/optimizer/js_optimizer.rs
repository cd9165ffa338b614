//! # JavaScript Optimizer Main Orchestrator
//!
//! Orchestratore principale: guida il walk della directory ed esegue il
//! TaskOptimizer una volta per ogni file candidato, in sequenza.
//!
//! Gli esiti per-file vengono accumulati in un `RunReport` esplicito.
//! Un errore di accesso durante il walk interrompe subito la run.

use crate::{
    config::Config,
    error::MinifyError,
    file_manager::FileManager,
    js_processor::MinifierRegistry,
    optimizer::{progress_tracker::ProgressTracker, task_optimizer::TaskOptimizer},
    report::{FileOutcome, RunReport},
};
use anyhow::Result;
use std::time::Instant;
use tracing::debug;

/// Orchestratore principale
pub struct JsOptimizer {
    config: Config,
    task_optimizer: TaskOptimizer,
    tracker: ProgressTracker,
}

impl JsOptimizer {
    /// Crea nuova istanza con un minifier già configurato
    pub fn new(config: Config, registry: MinifierRegistry) -> Result<Self> {
        config.validate()?;
        debug!("Minifier registry: {:?}", registry);

        let task_optimizer = TaskOptimizer::new(registry, config.dry_run);
        let tracker = ProgressTracker::new(&config);

        Ok(Self {
            config,
            task_optimizer,
            tracker,
        })
    }

    /// Crea nuova istanza con il minifier JavaScript di default
    pub fn with_default_minifier(config: Config) -> Result<Self> {
        let registry = MinifierRegistry::javascript(config.top_level);
        Self::new(config, registry)
    }

    /// Esegue la run: walk + minify di ogni candidato
    pub async fn run(&self) -> Result<RunReport, MinifyError> {
        let start_time = Instant::now();
        self.tracker.start(&self.config);

        let mut report = RunReport::new();

        for (index, task) in FileManager::walk_js_files(&self.config.root_dir).enumerate() {
            let task = match task {
                Ok(task) => task,
                Err(e) => {
                    self.tracker.fatal(&e);
                    return Err(e);
                }
            };

            self.tracker.file_start(&task, index);
            let outcome = FileOutcome::from(self.task_optimizer.process(&task, &self.tracker).await);
            self.tracker.file_complete(&outcome);
            report.record(outcome);
        }

        self.tracker
            .finish(&report, start_time.elapsed().as_secs_f64());

        Ok(report)
    }
}
