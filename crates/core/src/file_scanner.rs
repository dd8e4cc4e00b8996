//! File scanning utilities
//!
//! Walks a directory tree and returns files with one of the wanted suffixes,
//! skipping named directories, glob exclusions and (unless asked otherwise)
//! hidden entries.

use crate::error::Result;
use std::path::{Component, Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// File scanner with configurable filters
pub struct FileScanner {
    root: PathBuf,
    suffixes: Vec<String>,
    skip_dirs: Vec<String>,
    exclude_patterns: Vec<glob::Pattern>,
    include_hidden: bool,
}

/// `*` and `?` in exclusions never cross a path separator
const EXCLUDE_MATCH: glob::MatchOptions = glob::MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

impl FileScanner {
    /// Create a new file scanner rooted at the given path
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            suffixes: Vec::new(),
            skip_dirs: Vec::new(),
            exclude_patterns: Vec::new(),
            include_hidden: false,
        }
    }

    /// Keep only files whose name ends with one of these (e.g. ".ts", ".d.ts")
    pub fn with_suffixes(mut self, suffixes: &[&str]) -> Self {
        self.suffixes = suffixes.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Never descend into directories with these names
    pub fn skip_dirs(mut self, names: &[&str]) -> Self {
        self.skip_dirs = names.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Drop files (and prune directories) matching these glob patterns.
    ///
    /// Patterns are matched against full paths. Invalid patterns are ignored.
    pub fn exclude(mut self, patterns: &[String]) -> Self {
        self.exclude_patterns = patterns
            .iter()
            .filter_map(|p| glob::Pattern::new(p).ok())
            .collect();
        self
    }

    /// Also walk dot-prefixed files and directories
    pub fn include_hidden(mut self, include: bool) -> Self {
        self.include_hidden = include;
        self
    }

    /// Scan and return matching files, sorted
    pub fn scan(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        let walker = WalkDir::new(&self.root)
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !self.is_pruned(e));

        for entry in walker {
            let entry = entry.map_err(|e| crate::error::Error::io(e.to_string()))?;
            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            let name = entry.file_name().to_string_lossy();
            if !self.suffixes.is_empty() && !self.suffixes.iter().any(|s| name.ends_with(s.as_str())) {
                continue;
            }

            files.push(path.to_path_buf());
        }

        files.sort();
        Ok(files)
    }

    fn is_pruned(&self, entry: &DirEntry) -> bool {
        let name = entry.file_name().to_string_lossy();
        if !self.include_hidden && name.starts_with('.') {
            return true;
        }
        if entry.file_type().is_dir() && self.skip_dirs.iter().any(|d| d == name.as_ref()) {
            return true;
        }
        self.is_excluded(entry.path())
    }

    fn is_excluded(&self, path: &Path) -> bool {
        self.exclude_patterns
            .iter()
            .any(|p| p.matches_path_with(path, EXCLUDE_MATCH))
    }
}

/// Lexically remove `.` and resolve `..` components
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let last = out.components().next_back();
                if matches!(last, Some(Component::Normal(_))) {
                    out.pop();
                } else if !matches!(last, Some(Component::RootDir | Component::Prefix(_))) {
                    // empty, or already climbing out with `..`
                    out.push(component);
                }
            }
            other => out.push(other),
        }
    }
    out
}
