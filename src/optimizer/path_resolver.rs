//! # Path Resolution Module
//!
//! Centralizza il calcolo del path di output `.min.js`.
//! Il path di output è sempre derivato dal sorgente: nessun registro di nomi.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Suffix of every file this tool writes
pub const MINIFIED_SUFFIX: &str = ".min.js";

/// Extension of every source file
pub const JS_EXTENSION: &str = "js";

/// A file named only `.js`: no stem, no extension according to `Path`
pub const BARE_JS_NAME: &str = ".js";

/// One candidate file and the sibling it will produce
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTask {
    pub source_path: PathBuf,
    pub output_path: PathBuf,
}

impl FileTask {
    pub fn new(source_path: PathBuf) -> Self {
        let output_path = PathResolver::minified_path(&source_path);
        Self {
            source_path,
            output_path,
        }
    }
}

/// Utility per calcolare i path di output in modo centralizzato
pub struct PathResolver;

impl PathResolver {
    /// `dir/app.js` -> `dir/app.min.js`, `dir/.js` -> `dir/.min.js`
    ///
    /// Callers pass candidate paths, so the file stem is the file name with
    /// the trailing `.js` trimmed. A bare `.js` has an empty stem.
    pub fn minified_path(source: &Path) -> PathBuf {
        let mut name = match source.file_name() {
            Some(name) if name == BARE_JS_NAME => OsString::new(),
            _ => source
                .file_stem()
                .map(|stem| stem.to_os_string())
                .unwrap_or_default(),
        };
        name.push(MINIFIED_SUFFIX);
        source.with_file_name(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::file_manager::FileManager;

    #[test]
    fn test_minified_path_replaces_js_suffix() {
        assert_eq!(
            PathResolver::minified_path(Path::new("public/app.js")),
            PathBuf::from("public/app.min.js")
        );
        assert_eq!(
            PathResolver::minified_path(Path::new("public/js/vendor/jquery.ui.js")),
            PathBuf::from("public/js/vendor/jquery.ui.min.js")
        );
    }

    #[test]
    fn test_bare_js_name_maps_to_bare_min_js() {
        assert_eq!(
            PathResolver::minified_path(Path::new("public/.js")),
            PathBuf::from("public/.min.js")
        );
        assert!(FileManager::is_already_minified(&PathResolver::minified_path(
            Path::new("public/.js")
        )));
    }

    #[test]
    fn test_file_task_derives_output() {
        let task = FileTask::new(PathBuf::from("app.js"));
        assert_eq!(task.source_path, PathBuf::from("app.js"));
        assert_eq!(task.output_path, PathBuf::from("app.min.js"));
    }
}
