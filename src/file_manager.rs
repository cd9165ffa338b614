//! # File Management Module
//!
//! Questo modulo gestisce tutte le operazioni sui file e la discovery dei sorgenti JavaScript.
//!
//! ## Responsabilità:
//! - Discovery ricorsiva e lazy di file `.js` in una directory
//! - Filtro dei file già minificati (`*.min.js`)
//! - Scrittura dei file `.min.js` con permessi standard
//! - Utilità per calcoli dimensioni e percentuali
//!
//! ## Regole di selezione:
//! Un entry è candidato se:
//! - non è una directory
//! - la sua estensione è esattamente `js` (case-sensitive), oppure il nome è `.js`
//! - il nome del file non termina già con `.min.js`
//!
//! ## Fail-fast:
//! Il primo errore durante il walk (es. root inesistente) viene restituito come
//! `MinifyError::Access` e il walker si ferma: nessun altro file viene prodotto.
//!
//! ## Esempio:
//! ```rust,ignore
//! for task in FileManager::walk_js_files(Path::new("public")) {
//!     let task = task?;
//!     println!("{} -> {}", task.source_path.display(), task.output_path.display());
//! }
//! ```

use crate::error::MinifyError;
use crate::optimizer::path_resolver::{FileTask, BARE_JS_NAME, JS_EXTENSION, MINIFIED_SUFFIX};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::debug;
use walkdir::WalkDir;

/// Permission bits for written files (rw-r--r--)
#[cfg(unix)]
const OUTPUT_MODE: u32 = 0o644;

/// Lazy, fail-fast iterator over candidate files below a root
pub struct JsFileWalker {
    root: PathBuf,
    inner: walkdir::IntoIter,
    failed: bool,
}

impl Iterator for JsFileWalker {
    type Item = Result<FileTask, MinifyError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        loop {
            match self.inner.next()? {
                Ok(entry) => {
                    let is_dir = entry.file_type().is_dir();
                    if FileManager::is_candidate(entry.path(), is_dir) {
                        return Some(Ok(FileTask::new(entry.into_path())));
                    }
                    if !is_dir {
                        debug!("Skipping non-candidate: {}", entry.path().display());
                    }
                }
                Err(e) => {
                    self.failed = true;
                    let path = e
                        .path()
                        .map(Path::to_path_buf)
                        .unwrap_or_else(|| self.root.clone());
                    return Some(Err(MinifyError::Access { path, source: e }));
                }
            }
        }
    }
}

/// Manages file operations and discovery
pub struct FileManager;

impl FileManager {
    /// Walk `root` recursively, yielding every candidate `.js` file
    pub fn walk_js_files(root: &Path) -> JsFileWalker {
        JsFileWalker {
            root: root.to_path_buf(),
            inner: WalkDir::new(root).follow_links(false).into_iter(),
            failed: false,
        }
    }

    /// Check if a visited entry should be minified
    pub fn is_candidate(path: &Path, is_dir: bool) -> bool {
        !is_dir && Self::has_js_extension(path) && !Self::is_already_minified(path)
    }

    /// `Path::extension` is `None` for a bare `.js`, which still counts
    fn has_js_extension(path: &Path) -> bool {
        path.extension() == Some(OsStr::new(JS_EXTENSION))
            || path.file_name() == Some(OsStr::new(BARE_JS_NAME))
    }

    /// Check if a file name already carries the `.min.js` suffix
    pub fn is_already_minified(path: &Path) -> bool {
        path.file_name()
            .map(|name| name.as_encoded_bytes().ends_with(MINIFIED_SUFFIX.as_bytes()))
            .unwrap_or(false)
    }

    /// Create or overwrite `path` with `contents`
    pub async fn write_output(path: &Path, contents: &[u8]) -> std::io::Result<()> {
        let mut options = fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        options.mode(OUTPUT_MODE);

        let mut file = options.open(path).await?;
        file.write_all(contents).await?;
        file.flush().await?;
        Ok(())
    }

    /// Get human-readable file size
    pub fn format_size(size: u64) -> String {
        const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
        let mut size = size as f64;
        let mut unit_index = 0;

        while size >= 1024.0 && unit_index < UNITS.len() - 1 {
            size /= 1024.0;
            unit_index += 1;
        }

        if unit_index == 0 {
            format!("{} {}", size as u64, UNITS[unit_index])
        } else {
            format!("{:.2} {}", size, UNITS[unit_index])
        }
    }

    /// Calculate percentage reduction
    pub fn calculate_reduction(original_size: u64, new_size: u64) -> f64 {
        if original_size == 0 {
            0.0
        } else {
            ((original_size as f64 - new_size as f64) / original_size as f64) * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use tempfile::TempDir;

    fn touch(dir: &Path, rel: &str) {
        let path = dir.join(rel);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, "var a = 1;").unwrap();
    }

    #[test]
    fn test_candidate_predicate() {
        assert!(FileManager::is_candidate(Path::new("public/app.js"), false));
        assert!(FileManager::is_candidate(Path::new("public/a.mind.js"), false));
        assert!(FileManager::is_candidate(Path::new("public/min/app.js"), false));
        assert!(!FileManager::is_candidate(Path::new("public/app.min.js"), false));
        assert!(!FileManager::is_candidate(Path::new("public/app.JS"), false));
        assert!(!FileManager::is_candidate(Path::new("public/app.jsx"), false));
        assert!(!FileManager::is_candidate(Path::new("public/app.json"), false));
        assert!(!FileManager::is_candidate(Path::new("public/lib.js"), true));
        assert!(FileManager::is_candidate(Path::new("public/.js"), false));
        assert!(!FileManager::is_candidate(Path::new("public/.min.js"), false));
        assert!(!FileManager::is_candidate(Path::new("public/.js"), true));
    }

    #[test]
    fn test_walk_selects_only_candidates() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        touch(root, "app.js");
        touch(root, "app.min.js");
        touch(root, "style.css");
        touch(root, "nested/deep/util.js");
        touch(root, "nested/vendor.min.js");
        touch(root, "nested/.js");
        std::fs::create_dir_all(root.join("folder.js")).unwrap();

        let found: BTreeSet<PathBuf> = FileManager::walk_js_files(root)
            .map(|task| task.unwrap().source_path)
            .collect();

        let expected: BTreeSet<PathBuf> = [
            root.join("app.js"),
            root.join("nested/deep/util.js"),
            root.join("nested/.js"),
        ]
        .into_iter()
        .collect();
        assert_eq!(found, expected);
    }

    #[test]
    fn test_missing_root_fails_once() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("does-not-exist");

        let mut walker = FileManager::walk_js_files(&missing);
        match walker.next() {
            Some(Err(MinifyError::Access { path, .. })) => assert_eq!(path, missing),
            other => panic!("expected access error, got {:?}", other.map(|r| r.is_ok())),
        }
        assert!(walker.next().is_none());
    }

    #[tokio::test]
    async fn test_write_output_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("app.min.js");
        std::fs::write(&path, "stale content that is longer").unwrap();

        FileManager::write_output(&path, b"var a=1").await.unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "var a=1");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_write_output_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("fresh.min.js");
        FileManager::write_output(&path, b"x").await.unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode & 0o111, 0);
        assert_eq!(mode & 0o600, 0o600);
    }

    #[test]
    fn test_format_size() {
        assert_eq!(FileManager::format_size(512), "512 B");
        assert_eq!(FileManager::format_size(2048), "2.00 KB");
    }

    #[test]
    fn test_calculate_reduction() {
        assert_eq!(FileManager::calculate_reduction(0, 0), 0.0);
        assert_eq!(FileManager::calculate_reduction(200, 50), 75.0);
    }
}
