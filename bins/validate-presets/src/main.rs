//! validate-presets - check every published tsconfig preset
//!
//! Reads the package manifest, validates each exported preset with the
//! tsconfig parser and exits 0 only when all of them are valid.

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};
use presets_cli::output::{ColorMode, Status};
use presets_cli::report::{OutputFormat, ReportDriver};
use presets_core::config::Settings;
use presets_core::error::exit_codes;
use presets_core::manifest::discover_config_files;
use presets_core::validator::ConfigValidator;
use presets_tsconfig::{ParseOptions, RealHost, TsConfigParser};
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

const VERBOSE_FILTER: &str = "validate_presets=debug,presets_core=debug,presets_tsconfig=debug";

#[derive(Parser)]
#[command(name = "validate-presets")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Package manifest whose exports list the presets
    #[arg(short, long)]
    manifest: Option<PathBuf>,

    /// Settings file (defaults to .preset-validator.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Enable verbose logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => OutputFormat::Text,
            Format::Json => OutputFormat::Json,
        }
    }
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            std::process::exit(parse_failure_code(e.kind()));
        }
    };
    init_tracing(cli.verbose);

    let code = match run(cli) {
        Ok(code) => code,
        Err(e) => {
            let _ = Status::new(std::io::stderr(), ColorMode::Never).error(&format!("{e:#}"));
            exit_codes::FAILURE
        }
    };
    std::process::exit(code);
}

/// Help and version requests succeed; every other argument error fails
fn parse_failure_code(kind: ErrorKind) -> i32 {
    match kind {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => exit_codes::SUCCESS,
        _ => exit_codes::FAILURE,
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<i32> {
    let settings = Settings::load(cli.config.as_deref()).context("cannot load settings")?;
    if let Some(path) = &settings.path {
        debug!(settings = %path.display(), "loaded settings");
    }

    let schema = settings.schema;
    let manifest = cli
        .manifest
        .or(schema.discovery.manifest)
        .unwrap_or_else(default_manifest);
    let extension = schema.discovery.extension;

    let parser = TsConfigParser::with_options(
        RealHost,
        ParseOptions {
            report_no_inputs: schema.parser.report_no_inputs,
        },
    );
    let driver = ReportDriver::new(ConfigValidator::with_runtime(parser, schema.runtime))
        .format(cli.format.into())
        .color(ColorMode::Auto);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    Ok(driver.run(|| discover_config_files(&manifest, &extension), &mut out))
}

/// The presets package this binary ships in
fn default_manifest() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("package.json")
}
