//! `include` / `exclude` file specifications

use presets_core::diagnostic::Diagnostic;
use std::path::Path;

/// Check a single spec, returning the diagnostic for a malformed one
pub fn validate_spec(spec: &str) -> Option<Diagnostic> {
    if spec.ends_with("**") {
        return Some(Diagnostic::error(
            5010,
            format!("File specification cannot end in a recursive directory wildcard ('**'): '{spec}'."),
        ));
    }

    let mut seen_recursive = false;
    for component in spec.split(['/', '\\']) {
        if component == "**" {
            seen_recursive = true;
        } else if component == ".." && seen_recursive {
            return Some(Diagnostic::error(
                5065,
                format!(
                    "File specification cannot contain a parent directory ('..') that appears after a recursive directory wildcard ('**'): '{spec}'."
                ),
            ));
        }
    }
    None
}

fn has_wildcard(s: &str) -> bool {
    s.contains(['*', '?'])
}

/// Absolute glob pattern text for a spec relative to `base_dir`.
///
/// A final component with neither a wildcard nor an extension names a
/// directory and matches everything beneath it.
pub fn pattern_text(base_dir: &Path, spec: &str) -> String {
    let base = glob::Pattern::escape(&base_dir.to_string_lossy());
    let spec = spec.trim_start_matches("./").trim_end_matches('/');
    let mut text = if spec.is_empty() || spec == "." {
        base
    } else if Path::new(spec).is_absolute() {
        spec.to_string()
    } else {
        format!("{}/{}", base.trim_end_matches('/'), spec)
    };

    let last = text.rsplit('/').next().unwrap_or_default();
    if !has_wildcard(last) && !last.contains('.') {
        text.push_str("/**/*");
    }
    text
}

/// Compiled include patterns
pub struct IncludeMatcher {
    patterns: Vec<glob::Pattern>,
}

impl IncludeMatcher {
    /// Compile `specs`; specs that are not valid globs match nothing
    pub fn new(base_dir: &Path, specs: &[String]) -> Self {
        Self {
            patterns: specs
                .iter()
                .filter_map(|s| glob::Pattern::new(&pattern_text(base_dir, s)).ok())
                .collect(),
        }
    }

    /// Whether any include pattern matches `path`.
    ///
    /// Wildcards never match a dot-prefixed name; only a literal component
    /// such as `.next` reaches hidden files.
    pub fn matches(&self, path: &Path) -> bool {
        let options = glob::MatchOptions {
            case_sensitive: true,
            require_literal_separator: true,
            require_literal_leading_dot: true,
        };
        self.patterns.iter().any(|p| p.matches_path_with(path, options))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recursive_wildcard_at_end_rejected() {
        let d = validate_spec("src/**").unwrap();
        assert_eq!(d.code, 5010);
        assert!(validate_spec("src/**/*").is_none());
    }

    #[test]
    fn test_parent_after_recursive_wildcard_rejected() {
        assert_eq!(validate_spec("src/**/../*.ts").unwrap().code, 5065);
        assert!(validate_spec("../shared/**/*").is_none());
    }

    #[test]
    fn test_directory_spec_expands() {
        assert_eq!(pattern_text(Path::new("/p"), "src"), "/p/src/**/*");
        assert_eq!(pattern_text(Path::new("/p"), "./src/"), "/p/src/**/*");
        assert_eq!(pattern_text(Path::new("/p"), "src/*.ts"), "/p/src/*.ts");
        assert_eq!(pattern_text(Path::new("/p"), "main.ts"), "/p/main.ts");
    }

    #[test]
    fn test_include_matcher() {
        let matcher = IncludeMatcher::new(Path::new("/p"), &["src".into(), "*.d.ts".into()]);
        assert!(matcher.matches(Path::new("/p/src/deep/a.ts")));
        assert!(matcher.matches(Path::new("/p/env.d.ts")));
        assert!(!matcher.matches(Path::new("/p/test/a.ts")));
        assert!(!matcher.matches(Path::new("/p/types/nested.d.ts")));
    }

    #[test]
    fn test_hidden_paths_need_a_literal_component() {
        let wildcard = IncludeMatcher::new(Path::new("/p"), &["**/*.ts".into()]);
        assert!(wildcard.matches(Path::new("/p/src/a.ts")));
        assert!(!wildcard.matches(Path::new("/p/.next/types/a.ts")));

        let literal = IncludeMatcher::new(Path::new("/p"), &[".next/types/**/*.ts".into()]);
        assert!(literal.matches(Path::new("/p/.next/types/a.ts")));
        assert!(literal.matches(Path::new("/p/.next/types/app/page.ts")));
    }
}
