//! File-system capability used by the parser

use presets_core::file_scanner::FileScanner;
use std::io;
use std::path::{Path, PathBuf};

/// Directories never scanned for input files
pub const DEFAULT_SKIP_DIRS: &[&str] = &["node_modules", "bower_components", "jspm_packages"];

/// What the parser may do to the file system
pub trait ConfigHost {
    /// Read a file as UTF-8 text
    fn read_file(&self, path: &Path) -> io::Result<String>;

    /// Whether a regular file exists at `path`
    fn file_exists(&self, path: &Path) -> bool;

    /// All files below `root` ending in one of `suffixes`, sorted.
    ///
    /// Hidden entries are listed too; include patterns decide whether a
    /// wildcard may reach them. `exclude` holds absolute glob patterns whose
    /// matches are skipped.
    fn read_directory(&self, root: &Path, suffixes: &[&str], exclude: &[String]) -> io::Result<Vec<PathBuf>>;
}

/// The real file system
#[derive(Debug, Clone, Copy, Default)]
pub struct RealHost;

impl ConfigHost for RealHost {
    fn read_file(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn file_exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read_directory(&self, root: &Path, suffixes: &[&str], exclude: &[String]) -> io::Result<Vec<PathBuf>> {
        if !root.is_dir() {
            return Ok(Vec::new());
        }
        FileScanner::new(root)
            .with_suffixes(suffixes)
            .skip_dirs(DEFAULT_SKIP_DIRS)
            .include_hidden(true)
            .exclude(exclude)
            .scan()
            .map_err(|e| io::Error::other(e.message))
    }
}
