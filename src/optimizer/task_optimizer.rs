//! # Task Optimizer Module
//!
//! Worker per la minificazione di singoli file: lettura, trasformazione, scrittura.
//! Ogni errore viene restituito con il path coinvolto e non interrompe la run.

use crate::{
    error::MinifyError,
    file_manager::FileManager,
    js_processor::{MinifierRegistry, JAVASCRIPT_MIME},
    optimizer::{path_resolver::FileTask, progress_tracker::ProgressTracker},
    report::MinifiedFile,
};
use tokio::fs;
use tracing::debug;

/// Worker per elaborazione singoli file
#[derive(Debug)]
pub struct TaskOptimizer {
    registry: MinifierRegistry,
    dry_run: bool,
}

impl TaskOptimizer {
    pub fn new(registry: MinifierRegistry, dry_run: bool) -> Self {
        Self { registry, dry_run }
    }

    /// Read, minify and write a single file
    pub async fn process(
        &self,
        task: &FileTask,
        tracker: &ProgressTracker,
    ) -> Result<MinifiedFile, MinifyError> {
        let input = fs::read(&task.source_path)
            .await
            .map_err(|source| MinifyError::Read {
                path: task.source_path.clone(),
                source,
            })?;

        let minified = self
            .registry
            .bytes(JAVASCRIPT_MIME, &input)
            .map_err(|reason| MinifyError::Minify {
                path: task.source_path.clone(),
                reason,
            })?;

        if self.dry_run {
            debug!("Dry run: skipping write of {}", task.output_path.display());
        } else {
            FileManager::write_output(&task.output_path, &minified)
                .await
                .map_err(|source| MinifyError::Write {
                    path: task.output_path.clone(),
                    source,
                })?;
        }

        let file = MinifiedFile::new(
            task.source_path.clone(),
            task.output_path.clone(),
            input.len() as u64,
            minified.len() as u64,
            !self.dry_run,
        );
        tracker.file_written(&file);

        Ok(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, TopLevel};
    use tempfile::TempDir;

    fn tracker() -> ProgressTracker {
        ProgressTracker::new(&Config::default())
    }

    fn strip_whitespace() -> MinifierRegistry {
        let mut registry = MinifierRegistry::new();
        registry.add_func(JAVASCRIPT_MIME, |input| {
            Ok(input.iter().copied().filter(|b| !b.is_ascii_whitespace()).collect())
        });
        registry
    }

    #[tokio::test]
    async fn test_process_writes_sibling() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("app.js");
        std::fs::write(&source, "function add(a, b) { return a + b; }").unwrap();

        let optimizer = TaskOptimizer::new(MinifierRegistry::javascript(TopLevel::Global), false);
        let task = FileTask::new(source.clone());
        let file = optimizer.process(&task, &tracker()).await.unwrap();

        let output = temp_dir.path().join("app.min.js");
        assert_eq!(file.output_path, output);
        assert!(file.written);
        let written = std::fs::read(&output).unwrap();
        assert_eq!(written.len() as u64, file.minified_size);
        assert!(file.minified_size <= file.original_size);
        assert!(String::from_utf8_lossy(&written).contains("add"));
    }

    #[tokio::test]
    async fn test_dry_run_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("app.js");
        std::fs::write(&source, "var a = 1;").unwrap();

        let optimizer = TaskOptimizer::new(strip_whitespace(), true);
        let file = optimizer.process(&FileTask::new(source), &tracker()).await.unwrap();

        assert!(!file.written);
        assert_eq!(file.minified_size, 7);
        assert!(!temp_dir.path().join("app.min.js").exists());
    }

    #[tokio::test]
    async fn test_missing_source_is_read_error() {
        let temp_dir = TempDir::new().unwrap();
        let task = FileTask::new(temp_dir.path().join("gone.js"));

        let optimizer = TaskOptimizer::new(strip_whitespace(), false);
        let err = optimizer.process(&task, &tracker()).await.unwrap_err();
        assert!(matches!(err, MinifyError::Read { .. }));
        assert!(!temp_dir.path().join("gone.min.js").exists());
    }

    #[tokio::test]
    async fn test_rejected_input_is_minify_error() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("broken.js");
        std::fs::write(&source, "var ) = ;").unwrap();

        let mut registry = MinifierRegistry::new();
        registry.add_func(JAVASCRIPT_MIME, |_| Err("unexpected token".to_string()));
        let optimizer = TaskOptimizer::new(registry, false);

        let err = optimizer
            .process(&FileTask::new(source.clone()), &tracker())
            .await
            .unwrap_err();
        match err {
            MinifyError::Minify { path, reason } => {
                assert_eq!(path, source);
                assert_eq!(reason, "unexpected token");
            }
            other => panic!("unexpected error: {}", other),
        }
        assert!(!temp_dir.path().join("broken.min.js").exists());
    }

    #[tokio::test]
    async fn test_unwritable_destination_is_write_error() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("app.js");
        std::fs::write(&source, "var a = 1;").unwrap();
        std::fs::create_dir(temp_dir.path().join("app.min.js")).unwrap();

        let optimizer = TaskOptimizer::new(strip_whitespace(), false);
        let err = optimizer
            .process(&FileTask::new(source), &tracker())
            .await
            .unwrap_err();
        match err {
            MinifyError::Write { path, .. } => {
                assert_eq!(path, temp_dir.path().join("app.min.js"))
            }
            other => panic!("unexpected error: {}", other),
        }
    }
}
