//! Tests for layered loading: defaults < file (+ profile) < env < overrides.

use pagewire_config::{ConfigError, ConfigLoader, NamingScheme};
use serde_json::json;
use serial_test::serial;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_toml(dir: &TempDir, body: &str) {
    fs::write(dir.path().join("pagewire.toml"), body).expect("write config");
}

#[test]
#[serial]
fn defaults_apply_without_config_file() {
    let dir = TempDir::new().expect("tempdir");
    let config = ConfigLoader::new(dir.path())
        .without_env()
        .load()
        .expect("load defaults");

    assert_eq!(config.entries.pattern, "src/views/**/*.js");
    assert_eq!(config.output.output_root, PathBuf::from("dist"));
    assert_eq!(config.output.vendor_chunk_name, "vendor");
}

#[test]
#[serial]
fn file_values_override_defaults() {
    let dir = TempDir::new().expect("tempdir");
    write_toml(
        &dir,
        r#"
[entries]
naming = "basename"

[output]
outputRoot = "public"
"#,
    );

    let config = ConfigLoader::new(dir.path())
        .without_env()
        .load()
        .expect("load");

    assert_eq!(config.entries.naming, NamingScheme::Basename);
    assert_eq!(config.output.output_root, PathBuf::from("public"));
    // untouched sibling keys keep their defaults
    assert_eq!(config.output.js_pattern, "js/[name].[chunkhash:8].js");
}

#[test]
#[serial]
fn profile_overrides_file_values() {
    let dir = TempDir::new().expect("tempdir");
    write_toml(
        &dir,
        r#"
devtool = "source-map"

[optimize]
minify = true

[profiles.development]
devtool = "cheap-module-eval-source-map"

[profiles.development.optimize]
minify = false
"#,
    );

    let config = ConfigLoader::new(dir.path())
        .without_env()
        .profile(Some("development"))
        .load()
        .expect("load with profile");

    assert!(!config.optimize.minify);
    assert_eq!(
        config.devtool.as_deref(),
        Some("cheap-module-eval-source-map")
    );
}

#[test]
#[serial]
fn missing_profile_is_reported() {
    let dir = TempDir::new().expect("tempdir");
    write_toml(&dir, "[entries]\npattern = \"src/views/**/*.js\"\n");

    let err = ConfigLoader::new(dir.path())
        .without_env()
        .profile(Some("production"))
        .load()
        .unwrap_err();

    assert!(matches!(err, ConfigError::ProfileNotFound(name) if name == "production"));
}

#[test]
#[serial]
fn env_overrides_file() {
    let dir = TempDir::new().expect("tempdir");
    write_toml(&dir, "[output]\noutput_root = \"public\"\n");

    unsafe {
        std::env::set_var("PAGEWIRE_OUTPUT__OUTPUT_ROOT", "build");
    }
    let result = ConfigLoader::new(dir.path()).load();
    unsafe {
        std::env::remove_var("PAGEWIRE_OUTPUT__OUTPUT_ROOT");
    }

    let config = result.expect("load with env");
    assert_eq!(config.output.output_root, PathBuf::from("build"));
}

#[test]
#[serial]
fn overrides_win_over_env_and_file() {
    let dir = TempDir::new().expect("tempdir");
    write_toml(&dir, "[entries]\nroot_marker = \"app\"\n");

    unsafe {
        std::env::set_var("PAGEWIRE_ENTRIES__ROOT_MARKER", "web");
    }
    let result = ConfigLoader::new(dir.path())
        .overrides(json!({ "entries": { "rootMarker": "client" } }))
        .load();
    unsafe {
        std::env::remove_var("PAGEWIRE_ENTRIES__ROOT_MARKER");
    }

    assert_eq!(result.expect("load").entries.root_marker, "client");
}

#[test]
#[serial]
fn explicit_file_is_used_instead_of_discovery() {
    let dir = TempDir::new().expect("tempdir");
    write_toml(&dir, "[output]\noutput_root = \"ignored\"\n");
    fs::write(
        dir.path().join("site.json"),
        r#"{ "output": { "output_root": "chosen" } }"#,
    )
    .expect("write json");

    let config = ConfigLoader::new(dir.path())
        .without_env()
        .file(Some("site.json"))
        .load()
        .expect("load explicit file");

    assert_eq!(config.output.output_root, PathBuf::from("chosen"));
}

#[test]
#[serial]
fn explicit_missing_file_is_not_found() {
    let dir = TempDir::new().expect("tempdir");
    let err = ConfigLoader::new(dir.path())
        .without_env()
        .file(Some("nope.toml"))
        .load()
        .unwrap_err();

    assert!(matches!(err, ConfigError::NotFound(_)));
}

#[test]
#[serial]
fn bad_value_surfaces_extract_error() {
    let dir = TempDir::new().expect("tempdir");
    write_toml(&dir, "[entries]\nnaming = 42\n");

    let err = ConfigLoader::new(dir.path())
        .without_env()
        .load()
        .unwrap_err();

    assert!(matches!(err, ConfigError::Extract(_)));
}
