//! Option declarations
//!
//! Tables of every option the parser understands, keyed by the exact
//! spelling used in a config file.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Accepted JSON shape of an option value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionType {
    Boolean,
    String,
    Number,
    Object,
    /// A string from a fixed set, compared case-insensitively
    Enum(&'static [&'static str]),
    /// An array whose elements have the given type
    List(ElementType),
}

impl OptionType {
    /// Type name used in "requires a value of type" messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::String | Self::Enum(_) => "string",
            Self::Number => "number",
            Self::Object => "object",
            Self::List(_) => "Array",
        }
    }
}

/// Element type of a list option
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementType {
    String,
    Object,
    Enum(&'static [&'static str]),
}

/// One declared option
#[derive(Debug, Clone, Copy)]
pub struct OptionDecl {
    pub name: &'static str,
    pub kind: OptionType,
    /// Value is a path (or list of paths) relative to the config file
    pub is_path: bool,
    /// Accepted but reported with a deprecation warning
    pub deprecated: bool,
}

const fn opt(name: &'static str, kind: OptionType) -> OptionDecl {
    OptionDecl {
        name,
        kind,
        is_path: false,
        deprecated: false,
    }
}

const fn path(name: &'static str, kind: OptionType) -> OptionDecl {
    OptionDecl {
        name,
        kind,
        is_path: true,
        deprecated: false,
    }
}

const fn deprecated(name: &'static str, kind: OptionType) -> OptionDecl {
    OptionDecl {
        name,
        kind,
        is_path: false,
        deprecated: true,
    }
}

use OptionType::{Boolean, Number, Object, String as Str};

pub const TARGETS: &[&str] = &[
    "es3", "es5", "es6", "es2015", "es2016", "es2017", "es2018", "es2019", "es2020", "es2021",
    "es2022", "es2023", "es2024", "esnext",
];

pub const MODULES: &[&str] = &[
    "none", "commonjs", "amd", "system", "umd", "es6", "es2015", "es2020", "es2022", "esnext",
    "node16", "node18", "nodenext", "preserve",
];

pub const MODULE_RESOLUTIONS: &[&str] = &["classic", "node", "node10", "node16", "nodenext", "bundler"];

pub const MODULE_DETECTIONS: &[&str] = &["auto", "legacy", "force"];

pub const JSX: &[&str] = &["preserve", "react-native", "react", "react-jsx", "react-jsxdev"];

pub const NEW_LINES: &[&str] = &["crlf", "lf"];

pub const IMPORTS_NOT_USED_AS_VALUES: &[&str] = &["remove", "preserve", "error"];

/// Every `lib` identifier, lowercase
pub const LIBS: &[&str] = &[
    "es5", "es6", "es2015", "es7", "es2016", "es2017", "es2018", "es2019", "es2020", "es2021",
    "es2022", "es2023", "es2024", "esnext", "dom", "dom.iterable", "dom.asynciterable",
    "webworker", "webworker.importscripts", "webworker.iterable", "webworker.asynciterable",
    "scripthost", "es2015.core", "es2015.collection", "es2015.generator", "es2015.iterable",
    "es2015.promise", "es2015.proxy", "es2015.reflect", "es2015.symbol",
    "es2015.symbol.wellknown", "es2016.array.include", "es2016.intl", "es2017.arraybuffer",
    "es2017.date", "es2017.object", "es2017.sharedmemory", "es2017.string", "es2017.intl",
    "es2017.typedarrays", "es2018.asyncgenerator", "es2018.asynciterable", "es2018.intl",
    "es2018.promise", "es2018.regexp", "es2019.array", "es2019.object", "es2019.string",
    "es2019.symbol", "es2019.intl", "es2020.bigint", "es2020.date", "es2020.promise",
    "es2020.sharedmemory", "es2020.string", "es2020.symbol.wellknown", "es2020.intl",
    "es2020.number", "es2021.promise", "es2021.string", "es2021.weakref", "es2021.intl",
    "es2022.array", "es2022.error", "es2022.intl", "es2022.object", "es2022.sharedmemory",
    "es2022.string", "es2022.regexp", "es2023.array", "es2023.collection", "es2023.intl",
    "es2024.arraybuffer", "es2024.collection", "es2024.object", "es2024.promise",
    "es2024.regexp", "es2024.sharedmemory", "es2024.string", "esnext.array",
    "esnext.collection", "esnext.symbol", "esnext.asynciterable", "esnext.intl",
    "esnext.disposable", "esnext.bigint", "esnext.string", "esnext.promise", "esnext.weakref",
    "esnext.decorators", "esnext.object", "esnext.regexp", "esnext.iterator", "decorators",
    "decorators.legacy",
];

const WATCH_FILE: &[&str] = &[
    "fixedpollinginterval", "prioritypollinginterval", "dynamicprioritypolling",
    "fixedchunksizepolling", "usefsevents", "usefseventsonparentdirectory",
];

const WATCH_DIRECTORY: &[&str] = &[
    "usefsevents", "fixedpollinginterval", "dynamicprioritypolling", "fixedchunksizepolling",
];

const FALLBACK_POLLING: &[&str] = &["fixedinterval", "priorityinterval", "dynamicpriority", "fixedchunksize"];

const COMPILER_OPTION_DECLS: &[OptionDecl] = &[
    // Type checking
    opt("strict", Boolean),
    opt("noImplicitAny", Boolean),
    opt("strictNullChecks", Boolean),
    opt("strictFunctionTypes", Boolean),
    opt("strictBindCallApply", Boolean),
    opt("strictPropertyInitialization", Boolean),
    opt("strictBuiltinIteratorReturn", Boolean),
    opt("noImplicitThis", Boolean),
    opt("useUnknownInCatchVariables", Boolean),
    opt("alwaysStrict", Boolean),
    opt("noUnusedLocals", Boolean),
    opt("noUnusedParameters", Boolean),
    opt("exactOptionalPropertyTypes", Boolean),
    opt("noImplicitReturns", Boolean),
    opt("noFallthroughCasesInSwitch", Boolean),
    opt("noUncheckedIndexedAccess", Boolean),
    opt("noImplicitOverride", Boolean),
    opt("noPropertyAccessFromIndexSignature", Boolean),
    opt("allowUnusedLabels", Boolean),
    opt("allowUnreachableCode", Boolean),
    // Modules
    opt("module", OptionType::Enum(MODULES)),
    opt("moduleResolution", OptionType::Enum(MODULE_RESOLUTIONS)),
    opt("moduleDetection", OptionType::Enum(MODULE_DETECTIONS)),
    path("baseUrl", Str),
    opt("paths", Object),
    path("rootDirs", OptionType::List(ElementType::String)),
    path("typeRoots", OptionType::List(ElementType::String)),
    opt("types", OptionType::List(ElementType::String)),
    opt("allowUmdGlobalAccess", Boolean),
    opt("moduleSuffixes", OptionType::List(ElementType::String)),
    opt("allowImportingTsExtensions", Boolean),
    opt("rewriteRelativeImportExtensions", Boolean),
    opt("resolvePackageJsonExports", Boolean),
    opt("resolvePackageJsonImports", Boolean),
    opt("customConditions", OptionType::List(ElementType::String)),
    opt("resolveJsonModule", Boolean),
    opt("allowArbitraryExtensions", Boolean),
    opt("noResolve", Boolean),
    opt("noUncheckedSideEffectImports", Boolean),
    // Emit
    opt("declaration", Boolean),
    opt("declarationMap", Boolean),
    opt("emitDeclarationOnly", Boolean),
    opt("sourceMap", Boolean),
    opt("inlineSourceMap", Boolean),
    path("outFile", Str),
    path("outDir", Str),
    opt("removeComments", Boolean),
    opt("noEmit", Boolean),
    opt("importHelpers", Boolean),
    opt("downlevelIteration", Boolean),
    opt("sourceRoot", Str),
    path("mapRoot", Str),
    opt("inlineSources", Boolean),
    opt("emitBOM", Boolean),
    opt("newLine", OptionType::Enum(NEW_LINES)),
    opt("stripInternal", Boolean),
    opt("noEmitHelpers", Boolean),
    opt("noEmitOnError", Boolean),
    opt("preserveConstEnums", Boolean),
    path("declarationDir", Str),
    // JavaScript support
    opt("allowJs", Boolean),
    opt("checkJs", Boolean),
    opt("maxNodeModuleJsDepth", Number),
    // Interop
    opt("isolatedModules", Boolean),
    opt("isolatedDeclarations", Boolean),
    opt("verbatimModuleSyntax", Boolean),
    opt("erasableSyntaxOnly", Boolean),
    opt("allowSyntheticDefaultImports", Boolean),
    opt("esModuleInterop", Boolean),
    opt("preserveSymlinks", Boolean),
    opt("forceConsistentCasingInFileNames", Boolean),
    // Language and environment
    opt("target", OptionType::Enum(TARGETS)),
    opt("lib", OptionType::List(ElementType::Enum(LIBS))),
    opt("jsx", OptionType::Enum(JSX)),
    opt("experimentalDecorators", Boolean),
    opt("emitDecoratorMetadata", Boolean),
    opt("jsxFactory", Str),
    opt("jsxFragmentFactory", Str),
    opt("jsxImportSource", Str),
    opt("reactNamespace", Str),
    opt("noLib", Boolean),
    opt("libReplacement", Boolean),
    opt("useDefineForClassFields", Boolean),
    // Projects
    opt("incremental", Boolean),
    opt("composite", Boolean),
    path("tsBuildInfoFile", Str),
    opt("disableSourceOfProjectReferenceRedirect", Boolean),
    opt("disableSolutionSearching", Boolean),
    opt("disableReferencedProjectLoad", Boolean),
    path("rootDir", Str),
    // Completeness
    opt("skipDefaultLibCheck", Boolean),
    opt("skipLibCheck", Boolean),
    opt("noCheck", Boolean),
    // Output formatting and diagnostics
    opt("noErrorTruncation", Boolean),
    opt("preserveWatchOutput", Boolean),
    opt("pretty", Boolean),
    opt("diagnostics", Boolean),
    opt("extendedDiagnostics", Boolean),
    opt("explainFiles", Boolean),
    opt("listFiles", Boolean),
    opt("listEmittedFiles", Boolean),
    opt("traceResolution", Boolean),
    opt("generateCpuProfile", Str),
    opt("generateTrace", Str),
    opt("disableSizeLimit", Boolean),
    opt("assumeChangesOnlyAffectDirectDependencies", Boolean),
    opt("plugins", OptionType::List(ElementType::Object)),
    opt("ignoreDeprecations", Str),
    // Deprecated
    deprecated("charset", Str),
    deprecated("out", Str),
    deprecated("keyofStringsOnly", Boolean),
    deprecated("noImplicitUseStrict", Boolean),
    deprecated("noStrictGenericChecks", Boolean),
    deprecated("suppressExcessPropertyErrors", Boolean),
    deprecated("suppressImplicitAnyIndexErrors", Boolean),
    deprecated("preserveValueImports", Boolean),
    deprecated("importsNotUsedAsValues", OptionType::Enum(IMPORTS_NOT_USED_AS_VALUES)),
];

const WATCH_OPTION_DECLS: &[OptionDecl] = &[
    opt("watchFile", OptionType::Enum(WATCH_FILE)),
    opt("watchDirectory", OptionType::Enum(WATCH_DIRECTORY)),
    opt("fallbackPolling", OptionType::Enum(FALLBACK_POLLING)),
    opt("synchronousWatchDirectory", Boolean),
    path("excludeDirectories", OptionType::List(ElementType::String)),
    path("excludeFiles", OptionType::List(ElementType::String)),
];

const TYPE_ACQUISITION_DECLS: &[OptionDecl] = &[
    opt("enable", Boolean),
    opt("include", OptionType::List(ElementType::String)),
    opt("exclude", OptionType::List(ElementType::String)),
    opt("disableFilenameBasedTypeAcquisition", Boolean),
];

/// A named option table with a case-insensitive index
pub struct OptionTable {
    by_name: HashMap<&'static str, OptionDecl>,
    by_lower: HashMap<String, &'static str>,
}

impl OptionTable {
    fn new(decls: &[OptionDecl]) -> Self {
        Self {
            by_name: decls.iter().map(|d| (d.name, *d)).collect(),
            by_lower: decls.iter().map(|d| (d.name.to_lowercase(), d.name)).collect(),
        }
    }

    /// Exact lookup
    pub fn get(&self, name: &str) -> Option<&OptionDecl> {
        self.by_name.get(name)
    }

    /// Correctly-cased spelling of a misspelled-by-case option
    pub fn suggest(&self, name: &str) -> Option<&'static str> {
        self.by_lower.get(&name.to_lowercase()).copied()
    }
}

pub static COMPILER_OPTIONS: Lazy<OptionTable> = Lazy::new(|| OptionTable::new(COMPILER_OPTION_DECLS));

pub static WATCH_OPTIONS: Lazy<OptionTable> = Lazy::new(|| OptionTable::new(WATCH_OPTION_DECLS));

pub static TYPE_ACQUISITION_OPTIONS: Lazy<OptionTable> =
    Lazy::new(|| OptionTable::new(TYPE_ACQUISITION_DECLS));
