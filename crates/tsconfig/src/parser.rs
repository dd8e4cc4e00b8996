//! tsconfig reader and content parser
//!
//! [`TsConfigParser`] implements [`ConfigParser`] in two stages:
//!
//! 1. `read_raw` reads a file through the host, accepts comments and
//!    trailing commas, and requires an object at the root.
//! 2. `parse_semantics` checks `compilerOptions`, `watchOptions`,
//!    `typeAcquisition`, `files`, `include`, `exclude`, `extends` and
//!    `references`, then expands the matched input files.
//!
//! Every problem becomes a [`Diagnostic`]; only host failures while listing
//! directories are returned as `Err`.

use crate::host::{ConfigHost, RealHost};
use crate::jsonc::blank_jsonc;
use crate::options::{
    ElementType, OptionDecl, OptionTable, OptionType, COMPILER_OPTIONS, TYPE_ACQUISITION_OPTIONS,
    WATCH_OPTIONS,
};
use crate::specs::{pattern_text, validate_spec, IncludeMatcher};
use presets_core::diagnostic::{Diagnostic, MessageChain};
use presets_core::error::{Error, ErrorCode, Result};
use presets_core::file_scanner::normalize_path;
use presets_core::parser::{ConfigParser, ParsedConfig};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tracing::debug;

const TS_EXTENSIONS: &[&str] = &[".ts", ".tsx", ".mts", ".cts"];
const JS_EXTENSIONS: &[&str] = &[".js", ".jsx", ".mjs", ".cjs"];
const DEFAULT_INCLUDE: &str = "**/*";
const SUPPORTED_IGNORE_DEPRECATIONS: &str = "5.0";

/// Parser behaviour switches
#[derive(Debug, Clone, Copy, Default)]
pub struct ParseOptions {
    /// Emit TS18003 when nothing matches `include`.
    ///
    /// The implicit `**/*` include is only expanded when this is on.
    pub report_no_inputs: bool,
}

/// tsconfig parser over a [`ConfigHost`]
#[derive(Debug, Clone, Default)]
pub struct TsConfigParser<H = RealHost> {
    host: H,
    options: ParseOptions,
}

impl TsConfigParser<RealHost> {
    /// Parser over the real file system
    pub fn real() -> Self {
        Self::new(RealHost)
    }
}

impl<H: ConfigHost> TsConfigParser<H> {
    pub fn new(host: H) -> Self {
        Self::with_options(host, ParseOptions::default())
    }

    pub fn with_options(host: H, options: ParseOptions) -> Self {
        Self { host, options }
    }

    pub fn host(&self) -> &H {
        &self.host
    }
}

/// Which table an object of options is checked against
#[derive(Clone, Copy)]
enum Section {
    Compiler,
    Watch,
    TypeAcquisition,
}

impl Section {
    fn table(self) -> &'static OptionTable {
        match self {
            Self::Compiler => &COMPILER_OPTIONS,
            Self::Watch => &WATCH_OPTIONS,
            Self::TypeAcquisition => &TYPE_ACQUISITION_OPTIONS,
        }
    }

    fn unknown(self, name: &str, suggestion: Option<&str>) -> Diagnostic {
        let (code, kind) = match self {
            Self::Compiler => (5023, "compiler"),
            Self::Watch => (5078, "watch"),
            Self::TypeAcquisition => (17010, "type acquisition"),
        };
        match suggestion {
            Some(s) => {
                let code = match self {
                    Self::Compiler => 5025,
                    Self::Watch => 5079,
                    Self::TypeAcquisition => 17018,
                };
                Diagnostic::error(code, format!("Unknown {kind} option '{name}'. Did you mean '{s}'?"))
            }
            None => Diagnostic::error(code, format!("Unknown {kind} option '{name}'.")),
        }
    }
}

fn type_error(name: &str, type_name: &str) -> Diagnostic {
    Diagnostic::error(
        5024,
        format!("Compiler option '{name}' requires a value of type {type_name}."),
    )
}

fn enum_error(name: &str, allowed: &[&str], received: &str) -> Diagnostic {
    let list = allowed
        .iter()
        .map(|v| format!("'{v}'"))
        .collect::<Vec<_>>()
        .join(", ");
    Diagnostic::error(
        6046,
        format!("Argument for '--{name}' option must be: {list}; received '{received}'."),
    )
}

fn resolve_path(base_dir: &Path, value: &str) -> Value {
    Value::String(normalize_path(&base_dir.join(value)).display().to_string())
}

/// Diagnostics accumulator tied to one config file
struct Checker<'a> {
    base_dir: &'a Path,
    config_path: &'a Path,
    diagnostics: Vec<Diagnostic>,
}

impl Checker<'_> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics
            .push(diagnostic.with_file(self.config_path.to_path_buf()));
    }

    /// Check every entry of an options object, returning the converted values
    fn convert_options(&mut self, section: Section, source: &Map<String, Value>) -> Map<String, Value> {
        let table = section.table();
        let ignore_deprecations = source
            .get("ignoreDeprecations")
            .and_then(Value::as_str)
            .is_some_and(|v| v == SUPPORTED_IGNORE_DEPRECATIONS);

        let mut converted = Map::new();
        for (name, value) in source {
            let Some(decl) = table.get(name) else {
                let diagnostic = section.unknown(name, table.suggest(name));
                self.report(diagnostic);
                continue;
            };

            if let Some(value) = self.convert_value(decl, value) {
                if decl.deprecated && !value.is_null() && !ignore_deprecations {
                    self.report(Diagnostic::warning(
                        5101,
                        format!(
                            "Option '{name}' is deprecated and will stop functioning in a future release. Specify compilerOption '\"ignoreDeprecations\": \"{SUPPORTED_IGNORE_DEPRECATIONS}\"' to silence this error."
                        ),
                    ));
                }
                converted.insert(name.clone(), value);
            }
        }
        converted
    }

    fn convert_value(&mut self, decl: &OptionDecl, value: &Value) -> Option<Value> {
        if value.is_null() {
            return Some(Value::Null);
        }

        let name = decl.name;
        match decl.kind {
            OptionType::Boolean if value.is_boolean() => Some(value.clone()),
            OptionType::Number if value.is_number() => Some(value.clone()),
            OptionType::Object if value.is_object() => Some(value.clone()),
            OptionType::String => match value.as_str() {
                Some(s) if name == "ignoreDeprecations" && s != SUPPORTED_IGNORE_DEPRECATIONS => {
                    self.report(Diagnostic::error(5103, "Invalid value for '--ignoreDeprecations'."));
                    None
                }
                Some(s) if decl.is_path => Some(resolve_path(self.base_dir, s)),
                Some(_) => Some(value.clone()),
                None => {
                    self.report(type_error(name, "string"));
                    None
                }
            },
            OptionType::Enum(allowed) => match value.as_str() {
                Some(s) => {
                    let lower = s.to_lowercase();
                    if allowed.contains(&lower.as_str()) {
                        Some(Value::String(lower))
                    } else {
                        self.report(enum_error(name, allowed, s));
                        None
                    }
                }
                None => {
                    self.report(type_error(name, "string"));
                    None
                }
            },
            OptionType::List(element) => {
                let Some(items) = value.as_array() else {
                    self.report(type_error(name, "Array"));
                    return None;
                };
                let mut out = Vec::with_capacity(items.len());
                for item in items {
                    match (element, item) {
                        (ElementType::String, Value::String(s)) if decl.is_path => {
                            out.push(resolve_path(self.base_dir, s));
                        }
                        (ElementType::String, Value::String(_)) | (ElementType::Object, Value::Object(_)) => {
                            out.push(item.clone());
                        }
                        (ElementType::Enum(allowed), Value::String(s)) => {
                            let lower = s.to_lowercase();
                            if allowed.contains(&lower.as_str()) {
                                out.push(Value::String(lower));
                            } else {
                                self.report(enum_error(name, allowed, s));
                            }
                        }
                        (ElementType::Object, _) => self.report(type_error(name, "object")),
                        _ => self.report(type_error(name, "string")),
                    }
                }
                Some(Value::Array(out))
            }
            _ => {
                self.report(type_error(name, decl.kind.type_name()));
                None
            }
        }
    }

    /// `files` / `include` / `exclude` as a string list
    fn spec_list(&mut self, root: &Map<String, Value>, key: &str) -> Option<Vec<String>> {
        let value = root.get(key)?;
        if value.is_null() {
            return None;
        }
        let Some(items) = value.as_array() else {
            self.report(type_error(key, "Array"));
            return None;
        };
        let mut specs = Vec::with_capacity(items.len());
        for item in items {
            match item.as_str() {
                Some(s) => specs.push(s.to_string()),
                None => self.report(type_error(key, "string")),
            }
        }
        Some(specs)
    }

    fn check_specs(&mut self, specs: &[String]) {
        for spec in specs {
            if let Some(diagnostic) = validate_spec(spec) {
                self.report(diagnostic);
            }
        }
    }

    fn check_extends<H: ConfigHost>(&mut self, host: &H, value: &Value) {
        let targets: Vec<&str> = match value {
            Value::String(s) => vec![s.as_str()],
            Value::Array(items) => {
                let mut targets = Vec::with_capacity(items.len());
                for item in items {
                    match item.as_str() {
                        Some(s) => targets.push(s),
                        None => self.report(type_error("extends", "string")),
                    }
                }
                targets
            }
            _ => {
                self.report(type_error("extends", "string or Array"));
                return;
            }
        };

        for target in targets {
            let is_relative = target.starts_with("./") || target.starts_with("../");
            if !is_relative && !Path::new(target).is_absolute() {
                // package specifier, resolved by consumers
                continue;
            }
            let resolved = normalize_path(&self.base_dir.join(target));
            let with_json = PathBuf::from(format!("{}.json", resolved.display()));
            if !host.file_exists(&resolved) && !host.file_exists(&with_json) {
                self.report(Diagnostic::error(
                    6053,
                    format!("File '{}' not found.", resolved.display()),
                ));
            }
        }
    }

    fn check_references(&mut self, value: &Value) {
        let Some(items) = value.as_array() else {
            self.report(type_error("references", "Array"));
            return;
        };
        for item in items {
            match item.get("path") {
                Some(Value::String(_)) => {}
                _ if !item.is_object() => self.report(type_error("references", "object")),
                _ => self.report(type_error("path", "string")),
            }
        }
    }
}

impl<H: ConfigHost> TsConfigParser<H> {
    fn expand_file_names(
        &self,
        base_dir: &Path,
        options: &Map<String, Value>,
        files: Option<&[String]>,
        include: Option<&[String]>,
        exclude: &[String],
    ) -> Result<Vec<PathBuf>> {
        let mut names: Vec<PathBuf> = files
            .unwrap_or_default()
            .iter()
            .map(|f| normalize_path(&base_dir.join(f)))
            .collect();

        let Some(include) = include else {
            return Ok(names);
        };

        let mut suffixes: Vec<&str> = TS_EXTENSIONS.to_vec();
        if options.get("allowJs").and_then(Value::as_bool) == Some(true) {
            suffixes.extend_from_slice(JS_EXTENSIONS);
        }

        let mut exclude_globs: Vec<String> = exclude.iter().map(|s| pattern_text(base_dir, s)).collect();
        for key in ["outDir", "declarationDir"] {
            if let Some(dir) = options.get(key).and_then(Value::as_str) {
                exclude_globs.push(glob::Pattern::escape(dir));
            }
        }

        let candidates = self
            .host
            .read_directory(base_dir, &suffixes, &exclude_globs)
            .map_err(|e| {
                Error::new(
                    ErrorCode::UnexpectedFault,
                    format!("Cannot list '{}': {}", base_dir.display(), e),
                )
                .with_source(e)
            })?;

        let matcher = IncludeMatcher::new(base_dir, include);
        for candidate in candidates {
            if matcher.matches(&candidate) && !names.contains(&candidate) {
                names.push(candidate);
            }
        }
        Ok(names)
    }
}

impl<H: ConfigHost> ConfigParser for TsConfigParser<H> {
    fn read_raw(&self, path: &Path) -> std::result::Result<Value, Diagnostic> {
        let text = self.host.read_file(path).map_err(|e| {
            Diagnostic::error(
                5083,
                MessageChain::new(format!("Cannot read file '{}'.", path.display()))
                    .chain(MessageChain::new(e.to_string())),
            )
            .with_file(path)
        })?;

        let text = text.strip_prefix('\u{FEFF}').unwrap_or(&text);
        let blanked = blank_jsonc(text);
        if blanked.trim().is_empty() {
            return Ok(Value::Object(Map::new()));
        }

        let value: Value = serde_json::from_str(&blanked).map_err(|e| {
            Diagnostic::error(1005, format!("Invalid JSON in '{}': {}", path.display(), e))
                .with_file(path)
        })?;

        if !value.is_object() {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            return Err(Diagnostic::error(
                5092,
                format!("The root value of a '{name}' file must be an object."),
            )
            .with_file(path));
        }

        Ok(value)
    }

    fn parse_semantics(
        &self,
        raw: &Value,
        base_dir: &Path,
        existing_options: Option<&Map<String, Value>>,
        config_path: &Path,
    ) -> Result<ParsedConfig> {
        let mut checker = Checker {
            base_dir,
            config_path,
            diagnostics: Vec::new(),
        };

        let Some(root) = raw.as_object() else {
            let name = config_path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            checker.report(Diagnostic::error(
                5092,
                format!("The root value of a '{name}' file must be an object."),
            ));
            return Ok(ParsedConfig {
                diagnostics: checker.diagnostics,
                ..ParsedConfig::default()
            });
        };

        let mut options = existing_options.cloned().unwrap_or_default();
        match root.get("compilerOptions") {
            Some(Value::Object(map)) => {
                let converted = checker.convert_options(Section::Compiler, map);
                options.extend(converted);
            }
            Some(Value::Null) | None => {}
            Some(_) => checker.report(type_error("compilerOptions", "object")),
        }

        for (key, section) in [
            ("watchOptions", Section::Watch),
            ("typeAcquisition", Section::TypeAcquisition),
        ] {
            match root.get(key) {
                Some(Value::Object(map)) => {
                    checker.convert_options(section, map);
                }
                Some(Value::Null) | None => {}
                Some(_) => checker.report(type_error(key, "object")),
            }
        }

        if let Some(value) = root.get("extends") {
            checker.check_extends(&self.host, value);
        }

        let has_references = match root.get("references") {
            Some(Value::Null) | None => false,
            Some(value) => {
                checker.check_references(value);
                value.as_array().is_some_and(|r| !r.is_empty())
            }
        };

        let files = checker.spec_list(root, "files");
        let include = checker.spec_list(root, "include");
        let exclude = checker.spec_list(root, "exclude").unwrap_or_default();
        if let Some(include) = &include {
            checker.check_specs(include);
        }
        checker.check_specs(&exclude);

        if files.as_ref().is_some_and(Vec::is_empty) && include.is_none() && !has_references {
            checker.report(Diagnostic::error(
                18002,
                format!("The 'files' list in config file '{}' is empty.", config_path.display()),
            ));
        }

        let implicit_include = files.is_none() && include.is_none();
        let effective_include = match (&include, implicit_include) {
            (Some(include), _) => Some(include.clone()),
            (None, true) if self.options.report_no_inputs => Some(vec![DEFAULT_INCLUDE.to_string()]),
            _ => None,
        };

        let file_names = self.expand_file_names(
            base_dir,
            &options,
            files.as_deref(),
            effective_include.as_deref(),
            &exclude,
        )?;

        if self.options.report_no_inputs && file_names.is_empty() && files.is_none() && !has_references {
            let include_json = serde_json::to_string(effective_include.as_deref().unwrap_or_default())
                .unwrap_or_default();
            let exclude_json = serde_json::to_string(&exclude).unwrap_or_default();
            checker.report(Diagnostic::error(
                18003,
                format!(
                    "No inputs were found in config file '{}'. Specified 'include' paths were '{include_json}' and 'exclude' paths were '{exclude_json}'.",
                    config_path.display()
                ),
            ));
        }

        debug!(
            config = %config_path.display(),
            options = options.len(),
            files = file_names.len(),
            diagnostics = checker.diagnostics.len(),
            "parsed config"
        );

        Ok(ParsedConfig {
            options,
            file_names,
            diagnostics: checker.diagnostics,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use presets_core::diagnostic::DiagnosticCategory;
    use presets_core::validator::ConfigValidator;
    use serde_json::json;
    use tempfile::TempDir;

    fn parse(raw: Value) -> ParsedConfig {
        TsConfigParser::real()
            .parse_semantics(&raw, Path::new("/pkg/bases"), None, Path::new("/pkg/bases/tsconfig.json"))
            .unwrap()
    }

    fn error_messages(parsed: &ParsedConfig) -> Vec<String> {
        parsed.errors().map(Diagnostic::flatten).collect()
    }

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_minimal_config_is_clean() {
        let parsed = parse(json!({"compilerOptions": {"strict": true}}));
        assert!(parsed.diagnostics.is_empty());
        assert_eq!(parsed.options["strict"], true);
    }

    #[test]
    fn test_invalid_target_names_value() {
        let parsed = parse(json!({"compilerOptions": {"target": "NOT_A_REAL_TARGET"}}));
        let errors = error_messages(&parsed);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("'--target'"));
        assert!(errors[0].contains("received 'NOT_A_REAL_TARGET'"));
        assert_eq!(parsed.diagnostics[0].code, 6046);
    }

    #[test]
    fn test_enum_values_are_case_insensitive() {
        let parsed = parse(json!({"compilerOptions": {
            "target": "ES2022",
            "module": "NodeNext",
            "moduleResolution": "Bundler",
            "lib": ["ES2023", "DOM", "dom.Iterable"]
        }}));
        assert!(parsed.diagnostics.is_empty(), "{:?}", parsed.diagnostics);
        assert_eq!(parsed.options["target"], "es2022");
        assert_eq!(parsed.options["lib"], json!(["es2023", "dom", "dom.iterable"]));
    }

    #[test]
    fn test_unknown_lib_is_an_error() {
        let parsed = parse(json!({"compilerOptions": {"lib": ["ES2022", "Deno.NS"]}}));
        let errors = error_messages(&parsed);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].starts_with("Argument for '--lib' option must be:"));
        assert!(errors[0].contains("received 'Deno.NS'"));
    }

    #[test]
    fn test_unknown_option_with_suggestion() {
        let parsed = parse(json!({"compilerOptions": {"Strict": true, "strictest": true}}));
        assert_eq!(
            error_messages(&parsed),
            [
                "Unknown compiler option 'Strict'. Did you mean 'strict'?",
                "Unknown compiler option 'strictest'."
            ]
        );
        assert_eq!(parsed.diagnostics[0].code, 5025);
        assert_eq!(parsed.diagnostics[1].code, 5023);
    }

    #[test]
    fn test_wrong_value_types() {
        let parsed = parse(json!({"compilerOptions": {
            "strict": "yes",
            "types": "node",
            "maxNodeModuleJsDepth": "1",
            "module": 5
        }}));
        assert_eq!(
            error_messages(&parsed),
            [
                "Compiler option 'strict' requires a value of type boolean.",
                "Compiler option 'types' requires a value of type Array.",
                "Compiler option 'maxNodeModuleJsDepth' requires a value of type number.",
                "Compiler option 'module' requires a value of type string.",
            ]
        );
    }

    #[test]
    fn test_null_clears_option() {
        let parsed = parse(json!({"compilerOptions": {"lib": null, "outDir": null}}));
        assert!(parsed.diagnostics.is_empty());
        assert!(parsed.options["lib"].is_null());
    }

    #[test]
    fn test_deprecated_option_is_only_a_warning() {
        let parsed = parse(json!({"compilerOptions": {"importsNotUsedAsValues": "remove"}}));
        assert_eq!(parsed.diagnostics.len(), 1);
        assert_eq!(parsed.diagnostics[0].category, DiagnosticCategory::Warning);
        assert_eq!(parsed.errors().count(), 0);

        let silenced = parse(json!({"compilerOptions": {
            "importsNotUsedAsValues": "remove",
            "ignoreDeprecations": "5.0"
        }}));
        assert!(silenced.diagnostics.is_empty());
    }

    #[test]
    fn test_invalid_ignore_deprecations() {
        let parsed = parse(json!({"compilerOptions": {"ignoreDeprecations": "4.0"}}));
        assert_eq!(parsed.diagnostics[0].code, 5103);
    }

    #[test]
    fn test_path_options_resolve_against_base_dir() {
        let parsed = parse(json!({"compilerOptions": {
            "outDir": "../dist",
            "typeRoots": ["./types"]
        }}));
        assert_eq!(parsed.options["outDir"], "/pkg/dist");
        assert_eq!(parsed.options["typeRoots"], json!(["/pkg/bases/types"]));
    }

    #[test]
    fn test_existing_options_are_overridden() {
        let existing: Map<String, Value> =
            serde_json::from_value(json!({"strict": false, "noEmit": true})).unwrap();
        let parsed = TsConfigParser::real()
            .parse_semantics(
                &json!({"compilerOptions": {"strict": true}}),
                Path::new("/pkg"),
                Some(&existing),
                Path::new("/pkg/tsconfig.json"),
            )
            .unwrap();
        assert_eq!(parsed.options["strict"], true);
        assert_eq!(parsed.options["noEmit"], true);
    }

    #[test]
    fn test_compiler_options_must_be_object() {
        let parsed = parse(json!({"compilerOptions": ["strict"]}));
        assert_eq!(
            error_messages(&parsed),
            ["Compiler option 'compilerOptions' requires a value of type object."]
        );
    }

    #[test]
    fn test_watch_and_type_acquisition_sections() {
        let parsed = parse(json!({
            "watchOptions": {"watchFile": "useFsEvents", "watchfile": "x", "pollEverything": true},
            "typeAcquisition": {"enable": true, "enabled": true}
        }));
        let codes: Vec<u32> = parsed.diagnostics.iter().map(|d| d.code).collect();
        assert_eq!(codes, [5079, 5078, 17010]);
    }

    #[test]
    fn test_unknown_top_level_keys_ignored() {
        let parsed = parse(json!({"$schema": "https://json.schemastore.org/tsconfig", "display": "Node 20"}));
        assert!(parsed.diagnostics.is_empty());
    }

    #[test]
    fn test_include_spec_errors() {
        let parsed = parse(json!({"include": ["src/**", 3], "exclude": ["a/**/../b"]}));
        let codes: Vec<u32> = parsed.diagnostics.iter().map(|d| d.code).collect();
        assert_eq!(codes, [5024, 5010, 5065]);
    }

    #[test]
    fn test_empty_files_list() {
        let parsed = parse(json!({"files": []}));
        assert_eq!(parsed.diagnostics[0].code, 18002);

        let with_refs = parse(json!({"files": [], "references": [{"path": "../core"}]}));
        assert!(with_refs.diagnostics.is_empty());
    }

    #[test]
    fn test_references_shape() {
        let parsed = parse(json!({"references": [{"path": "./a"}, {"prepend": true}, "b"]}));
        assert_eq!(
            error_messages(&parsed),
            [
                "Compiler option 'path' requires a value of type string.",
                "Compiler option 'references' requires a value of type object.",
            ]
        );
    }

    #[test]
    fn test_extends_relative_must_exist() {
        let dir = TempDir::new().unwrap();
        write(&dir, "base.json", "{}");
        let parser = TsConfigParser::real();
        let check = |extends: Value| {
            parser
                .parse_semantics(
                    &json!({"extends": extends}),
                    dir.path(),
                    None,
                    &dir.path().join("tsconfig.json"),
                )
                .unwrap()
        };

        assert!(check(json!("./base.json")).diagnostics.is_empty());
        assert!(check(json!("./base")).diagnostics.is_empty());
        assert!(check(json!("@tsconfig/node20/tsconfig.json")).diagnostics.is_empty());

        let missing = check(json!(["./base.json", "./missing.json"]));
        assert_eq!(missing.diagnostics.len(), 1);
        assert_eq!(missing.diagnostics[0].code, 6053);

        assert_eq!(check(json!(4)).diagnostics[0].code, 5024);
    }

    #[test]
    fn test_include_expansion() {
        let dir = TempDir::new().unwrap();
        write(&dir, "src/index.ts", "");
        write(&dir, "src/util.js", "");
        write(&dir, "src/node_modules/dep/index.ts", "");
        write(&dir, "dist/index.d.ts", "");
        write(&dir, "test/a.test.ts", "");

        let parsed = TsConfigParser::real()
            .parse_semantics(
                &json!({
                    "compilerOptions": {"allowJs": true, "outDir": "dist"},
                    "include": ["src", "dist"],
                    "files": ["main.ts"]
                }),
                dir.path(),
                None,
                &dir.path().join("tsconfig.json"),
            )
            .unwrap();

        assert_eq!(
            parsed.file_names,
            vec![
                dir.path().join("main.ts"),
                dir.path().join("src/index.ts"),
                dir.path().join("src/util.js"),
            ]
        );
    }

    #[test]
    fn test_no_inputs_reported_only_when_enabled() {
        let dir = TempDir::new().unwrap();
        let raw = json!({"compilerOptions": {"strict": true}});
        let config = dir.path().join("node.json");

        let quiet = TsConfigParser::real()
            .parse_semantics(&raw, dir.path(), None, &config)
            .unwrap();
        assert!(quiet.diagnostics.is_empty());

        let strict = TsConfigParser::with_options(RealHost, ParseOptions { report_no_inputs: true })
            .parse_semantics(&raw, dir.path(), None, &config)
            .unwrap();
        assert_eq!(strict.diagnostics.len(), 1);
        assert_eq!(strict.diagnostics[0].code, 18003);
        assert!(strict.diagnostics[0].flatten().contains(r#"'["**/*"]'"#));

        write(&dir, "index.ts", "");
        let found = TsConfigParser::with_options(RealHost, ParseOptions { report_no_inputs: true })
            .parse_semantics(&raw, dir.path(), None, &config)
            .unwrap();
        assert!(found.diagnostics.is_empty());
        assert_eq!(found.file_names, vec![dir.path().join("index.ts")]);
    }

    #[test]
    fn test_explicit_hidden_include_is_expanded() {
        let dir = TempDir::new().unwrap();
        write(&dir, ".next/types/app.ts", "");
        write(&dir, ".cache/stale.ts", "");
        write(&dir, "next-env.d.ts", "");
        let raw = json!({"include": ["next-env.d.ts", "**/*.ts", ".next/types/**/*.ts"]});

        let parsed = TsConfigParser::with_options(RealHost, ParseOptions { report_no_inputs: true })
            .parse_semantics(&raw, dir.path(), None, &dir.path().join("next.json"))
            .unwrap();

        assert!(parsed.diagnostics.is_empty());
        assert_eq!(
            parsed.file_names,
            vec![dir.path().join(".next/types/app.ts"), dir.path().join("next-env.d.ts")]
        );
    }

    #[test]
    fn test_read_raw_accepts_jsonc() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "node.json",
            "{\n  // Node 20\n  \"compilerOptions\": {\n    \"lib\": [\"es2023\",], /* latest */\n  },\n}\n",
        );
        let raw = TsConfigParser::real().read_raw(&path).unwrap();
        assert_eq!(raw["compilerOptions"]["lib"], json!(["es2023"]));
    }

    #[test]
    fn test_read_raw_strips_bom() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "node.json",
            "\u{FEFF}{\"compilerOptions\": {\"strict\": true}}",
        );

        let raw = TsConfigParser::real().read_raw(&path).unwrap();
        assert_eq!(raw["compilerOptions"]["strict"], json!(true));

        let validator = ConfigValidator::new(TsConfigParser::real());
        assert!(validator.validate(&path).is_valid());
    }

    #[test]
    fn test_read_raw_failures() {
        let dir = TempDir::new().unwrap();
        let parser = TsConfigParser::real();

        let missing = parser.read_raw(&dir.path().join("missing.json")).unwrap_err();
        assert_eq!(missing.code, 5083);
        assert!(missing.flatten().starts_with("Cannot read file"));
        assert!(missing.flatten().contains('\n'));

        let broken = write(&dir, "broken.json", "{\"compilerOptions\": {");
        let syntax = parser.read_raw(&broken).unwrap_err();
        assert_eq!(syntax.code, 1005);
        assert!(syntax.flatten().contains("line 1"));

        let array = write(&dir, "array.json", "[]");
        assert_eq!(parser.read_raw(&array).unwrap_err().code, 5092);

        let empty = write(&dir, "empty.json", "  \n");
        assert_eq!(parser.read_raw(&empty).unwrap(), json!({}));
    }

    #[test]
    fn test_alternate_runtime_libs_only_pass_for_deno_json() {
        let dir = TempDir::new().unwrap();
        let content = r#"{"compilerOptions": {"lib": ["ES2022", "Deno.NS"]}}"#;
        let deno = write(&dir, "deno.json", content);
        let node = write(&dir, "node.json", content);

        let validator = ConfigValidator::new(TsConfigParser::real());
        assert!(validator.validate(&deno).is_valid());

        let result = validator.validate(&node);
        assert!(!result.is_valid());
        assert_eq!(result.errors().len(), 1);
        assert!(result.errors()[0].contains("Deno.NS"));
    }

    #[test]
    fn test_validation_is_deterministic() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "bad.json",
            r#"{"compilerOptions": {"target": "es1", "foo": 1, "lib": ["nope"]}, "include": ["x/**"]}"#,
        );
        let validator = ConfigValidator::new(TsConfigParser::real());
        assert_eq!(validator.validate(&path), validator.validate(&path));
        assert_eq!(validator.validate(&path).errors().len(), 4);
    }
}
