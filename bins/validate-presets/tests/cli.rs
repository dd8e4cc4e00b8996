//! End-to-end runs of the validate-presets binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write(dir: &Path, rel: &str, content: &str) -> PathBuf {
    let path = dir.join(rel);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, content).unwrap();
    path
}

fn validate_presets(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("validate-presets").unwrap();
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_shipped_presets_are_valid() {
    Command::cargo_bin("validate-presets")
        .unwrap()
        .assert()
        .success()
        .stdout(predicate::str::contains("deno.json ... ✓"))
        .stdout(predicate::str::contains("presets are valid"));
}

#[test]
fn test_all_valid_with_deno_libs() {
    let dir = TempDir::new().unwrap();
    let manifest = write(
        dir.path(),
        "package.json",
        r#"{"exports": {"./node": "./node.json", "./deno": "./deno.json"}}"#,
    );
    write(dir.path(), "node.json", r#"{"compilerOptions": {"target": "es2022", "strict": true}}"#);
    write(
        dir.path(),
        "deno.json",
        r#"{"compilerOptions": {"lib": ["esnext", "deno.window", "Deno.NS"]}}"#,
    );

    validate_presets(&dir)
        .arg("--manifest")
        .arg(&manifest)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Found 2 presets"))
        .stdout(predicate::str::contains("  node.json ... ✓"))
        .stdout(predicate::str::contains("  deno.json ... ✓"))
        .stdout(predicate::str::contains("✓ All 2 presets are valid"));
}

#[test]
fn test_invalid_target_fails() {
    let dir = TempDir::new().unwrap();
    let manifest = write(
        dir.path(),
        "package.json",
        r#"{"exports": {"./broken": "./broken.json", "./ok": "./ok.json"}}"#,
    );
    write(dir.path(), "broken.json", r#"{"compilerOptions": {"target": "es1999"}}"#);
    write(dir.path(), "ok.json", r#"{"compilerOptions": {"strict": true}}"#);

    validate_presets(&dir)
        .arg("--manifest")
        .arg(&manifest)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("  broken.json ... ✗"))
        .stdout(predicate::str::contains("  ok.json ... ✓"))
        .stdout(predicate::str::contains("Argument for '--target' option must be"))
        .stdout(predicate::str::contains("received 'es1999'"));
}

#[test]
fn test_missing_manifest_exits_one() {
    let dir = TempDir::new().unwrap();

    validate_presets(&dir)
        .arg("--manifest")
        .arg(dir.path().join("package.json"))
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Package manifest not found"))
        .stdout(predicate::str::contains("...").not());
}

#[test]
fn test_zero_presets_exits_zero() {
    let dir = TempDir::new().unwrap();
    let manifest = write(
        dir.path(),
        "package.json",
        r#"{"exports": {"./readme": "./README.md"}}"#,
    );

    validate_presets(&dir)
        .arg("--manifest")
        .arg(&manifest)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Found 0 presets"));
}

#[test]
fn test_json_format() {
    let dir = TempDir::new().unwrap();
    let manifest = write(
        dir.path(),
        "package.json",
        r#"{"exports": {"./bad": "./bad.json"}}"#,
    );
    write(dir.path(), "bad.json", r#"{"compilerOptions": {"notAnOption": true}}"#);

    validate_presets(&dir)
        .args(["--format", "json", "--manifest"])
        .arg(&manifest)
        .assert()
        .code(1)
        .stdout(predicate::str::contains(r#""valid": false"#))
        .stdout(predicate::str::contains("Unknown compiler option 'notAnOption'."));
}

#[test]
fn test_settings_file_supplies_manifest() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "presets/package.json",
        r#"{"exports": {"./a": "./a.json"}}"#,
    );
    write(dir.path(), "presets/a.json", "{}");
    write(
        dir.path(),
        ".preset-validator.toml",
        "[discovery]\nmanifest = \"presets/package.json\"\n",
    );

    validate_presets(&dir)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("  a.json ... ✓"));
}

#[test]
fn test_missing_settings_file_exits_one() {
    let dir = TempDir::new().unwrap();

    validate_presets(&dir)
        .args(["--config", "nope.toml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("cannot load settings"))
        .stderr(predicate::str::contains("E4000"))
        .stderr(predicate::str::contains("\u{1b}[").not());
}

#[test]
fn test_unknown_flag_exits_one() {
    let dir = TempDir::new().unwrap();

    validate_presets(&dir)
        .arg("--bogus")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--bogus"));
}

#[test]
fn test_unknown_format_exits_one() {
    let dir = TempDir::new().unwrap();

    validate_presets(&dir)
        .args(["--format", "yaml"])
        .assert()
        .code(1);
}

#[test]
fn test_help_exits_zero() {
    let dir = TempDir::new().unwrap();

    validate_presets(&dir)
        .arg("--help")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("--manifest"));
}
