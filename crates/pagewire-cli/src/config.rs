//! Configuration loading for CLI commands.
//!
//! Priority: CLI flags > `PAGEWIRE_*` environment > config file (with the
//! selected profile merged in) > defaults.

use pagewire_config::{ConfigLoader, PagewireConfig, validate_fs};
use serde_json::{Map, Value, json};
use std::path::{Path, PathBuf};

use crate::cli::{ConfigArgs, PlanArgs};
use crate::commands::utils;
use crate::error::Result;

/// A loaded configuration together with where it came from.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: PagewireConfig,
    pub project_root: PathBuf,
    /// Config file read, if any
    pub source: Option<PathBuf>,
    pub profile: Option<String>,
}

/// Load and validate configuration for `args`, applying `overrides` last.
pub fn load(args: &ConfigArgs, overrides: Value) -> Result<LoadedConfig> {
    let cwd = utils::get_cwd()?;
    let project_root = utils::resolve_project_root(args.cwd.as_deref(), &cwd)?;
    let file = args
        .config
        .as_deref()
        .map(|path| utils::resolve_path(path, &cwd));

    let loader = ConfigLoader::new(&project_root)
        .file(file)
        .profile(args.profile.clone())
        .overrides(overrides);
    let source = loader.config_file();

    let config = loader.load()?;
    validate_fs(&config, &project_root)?;

    tracing::debug!(
        root = %project_root.display(),
        source = ?source,
        profile = ?args.profile,
        "configuration loaded"
    );

    Ok(LoadedConfig {
        config,
        project_root,
        source,
        profile: args.profile.clone(),
    })
}

/// Convert `plan` flags into an override layer. Only flags that were given
/// appear in the result.
pub fn plan_overrides(args: &PlanArgs) -> Value {
    let mut entries = Map::new();
    if let Some(pattern) = &args.pattern {
        entries.insert("pattern".to_string(), json!(pattern));
    }
    if let Some(naming) = args.naming {
        entries.insert(
            "naming".to_string(),
            json!(pagewire_config::NamingScheme::from(naming).to_string()),
        );
    }
    if let Some(marker) = &args.root_marker {
        entries.insert("root_marker".to_string(), json!(marker));
    }

    let mut output = Map::new();
    if let Some(out_dir) = &args.out_dir {
        output.insert("output_root".to_string(), json!(out_dir));
    }
    if let Some(public_path) = &args.public_path {
        output.insert("public_path".to_string(), json!(public_path));
    }

    let mut overrides = Map::new();
    if !entries.is_empty() {
        overrides.insert("entries".to_string(), Value::Object(entries));
    }
    if !output.is_empty() {
        overrides.insert("output".to_string(), Value::Object(output));
    }
    Value::Object(overrides)
}

/// Display a path relative to the project root when it lives inside it.
pub fn display_path(path: &Path, project_root: &Path) -> String {
    path.strip_prefix(project_root)
        .unwrap_or(path)
        .display()
        .to_string()
}
