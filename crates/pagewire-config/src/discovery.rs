//! File-based config discovery and layered loading for CLI use
//!
//! Handles finding pagewire configuration files and merging them with
//! defaults, `PAGEWIRE_*` environment variables and caller overrides.

use std::fs;
use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde_json::Value;

use crate::config::{PagewireConfig, apply_profile, normalize_keys};
use crate::error::{ConfigError, Result};

/// Prefix for environment overrides. Nested keys use `__`:
/// `PAGEWIRE_OUTPUT__OUTPUT_ROOT=public`.
pub const ENV_PREFIX: &str = "PAGEWIRE_";

/// File-based configuration discovery
///
/// Searches for pagewire configuration files in conventional locations and
/// loads them.
///
/// # Example
///
/// ```no_run
/// use pagewire_config::ConfigDiscovery;
///
/// let discovery = ConfigDiscovery::new(".");
/// let config = discovery.load().unwrap();
/// ```
pub struct ConfigDiscovery {
    root: PathBuf,
}

impl ConfigDiscovery {
    /// Create a new config discovery with a root directory
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Find a config file in the root directory
    ///
    /// Searches in this order:
    /// 1. pagewire.toml
    /// 2. pagewire.json
    /// 3. package.json (pagewire field)
    pub fn find(&self) -> Option<PathBuf> {
        for name in ["pagewire.toml", "pagewire.json"] {
            let path = self.root.join(name);
            if path.is_file() {
                return Some(path);
            }
        }

        let pkg_path = self.root.join("package.json");
        if pkg_path.is_file() {
            if let Ok(content) = fs::read_to_string(&pkg_path) {
                if let Ok(parsed) = serde_json::from_str::<Value>(&content) {
                    if parsed.get("pagewire").is_some_and(|v| !v.is_null()) {
                        return Some(pkg_path);
                    }
                }
            }
        }

        None
    }

    /// Load config from the discovered file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if no config file is found.
    pub fn load(&self) -> Result<PagewireConfig> {
        let path = self
            .find()
            .ok_or_else(|| ConfigError::NotFound(self.root.clone()))?;
        PagewireConfig::from_value(read_config_value(&path)?)
    }

    /// Load config with profile merging
    pub fn load_with_profile(&self, profile: &str) -> Result<PagewireConfig> {
        self.load()?.materialize_profile(Some(profile))
    }
}

/// Read a config file into a raw JSON value.
///
/// The format is chosen by file name: `package.json` (its `pagewire` field),
/// `*.json` or `*.toml`.
pub fn read_config_value(path: &Path) -> Result<Value> {
    if !path.is_file() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }

    if path.file_name() == Some(std::ffi::OsStr::new("package.json")) {
        return read_package_json(path);
    }

    let content = fs::read_to_string(path)?;
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => {
            let toml_val: toml::Value =
                toml::from_str(&content).map_err(|e| ConfigError::InvalidValue {
                    field: "toml".to_string(),
                    hint: Some(format!("Invalid TOML syntax: {}", e)),
                })?;
            serde_json::to_value(toml_val).map_err(|e| ConfigError::InvalidValue {
                field: "toml".to_string(),
                hint: Some(format!("TOML to JSON conversion failed: {}", e)),
            })
        }
        Some("json") => serde_json::from_str(&content).map_err(|e| ConfigError::InvalidValue {
            field: "json".to_string(),
            hint: Some(format!("Invalid JSON: {}", e)),
        }),
        other => Err(ConfigError::UnsupportedFormat(
            other.unwrap_or("<none>").to_string(),
        )),
    }
}

fn read_package_json(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path)?;

    let parsed: Value = serde_json::from_str(&content).map_err(|e| ConfigError::InvalidValue {
        field: "package.json".to_string(),
        hint: Some(format!("Invalid JSON: {}", e)),
    })?;

    match parsed.get("pagewire") {
        Some(Value::Null) | None => Err(ConfigError::InvalidValue {
            field: "pagewire".to_string(),
            hint: Some("Add a 'pagewire' field to your package.json".to_string()),
        }),
        Some(value) => Ok(value.clone()),
    }
}

/// Layered configuration loader.
///
/// Priority (highest last): defaults, config file (with the selected profile
/// merged in), `PAGEWIRE_*` environment, explicit overrides.
///
/// # Example
///
/// ```no_run
/// use pagewire_config::ConfigLoader;
/// use serde_json::json;
///
/// let config = ConfigLoader::new(".")
///     .profile(Some("production"))
///     .overrides(json!({ "output": { "output_root": "public" } }))
///     .load()
///     .unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    root: PathBuf,
    file: Option<PathBuf>,
    profile: Option<String>,
    overrides: Option<Value>,
    use_env: bool,
}

impl ConfigLoader {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            file: None,
            profile: None,
            overrides: None,
            use_env: true,
        }
    }

    /// Use an explicit config file instead of discovery.
    pub fn file(mut self, path: Option<impl Into<PathBuf>>) -> Self {
        self.file = path.map(Into::into);
        self
    }

    pub fn profile(mut self, profile: Option<impl Into<String>>) -> Self {
        self.profile = profile.map(Into::into);
        self
    }

    /// Values merged last (typically CLI flags).
    pub fn overrides(mut self, overrides: Value) -> Self {
        self.overrides = Some(overrides);
        self
    }

    /// Skip the `PAGEWIRE_*` environment layer.
    pub fn without_env(mut self) -> Self {
        self.use_env = false;
        self
    }

    /// The config file that `load` would read, if any.
    pub fn config_file(&self) -> Option<PathBuf> {
        match &self.file {
            Some(path) if path.is_absolute() => Some(path.clone()),
            Some(path) => Some(self.root.join(path)),
            None => ConfigDiscovery::new(&self.root).find(),
        }
    }

    pub fn load(&self) -> Result<PagewireConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(PagewireConfig::default()));

        let mut file_value = match self.config_file() {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading config file");
                normalize_keys(read_config_value(&path)?)
            }
            None => Value::Object(Default::default()),
        };

        if let Some(profile) = &self.profile {
            tracing::debug!(profile = %profile, "applying config profile");
            apply_profile(&mut file_value, profile)?;
        }
        figment = figment.merge(Serialized::defaults(file_value));

        if self.use_env {
            figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));
        }

        if let Some(overrides) = &self.overrides {
            figment = figment.merge(Serialized::defaults(normalize_keys(overrides.clone())));
        }

        Ok(figment.extract()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn find_returns_none_when_no_config() {
        let dir = TempDir::new().unwrap();
        let discovery = ConfigDiscovery::new(dir.path());
        assert!(discovery.find().is_none());
    }

    #[test]
    fn find_prefers_toml_over_json() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("pagewire.json"), "{}").unwrap();
        fs::write(dir.path().join("pagewire.toml"), "").unwrap();

        let found = ConfigDiscovery::new(dir.path()).find().unwrap();
        assert_eq!(found, dir.path().join("pagewire.toml"));
    }

    #[test]
    fn find_ignores_package_json_without_field() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("package.json"), r#"{ "name": "site" }"#).unwrap();
        assert!(ConfigDiscovery::new(dir.path()).find().is_none());
    }

    #[test]
    fn load_returns_not_found_when_no_config() {
        let dir = TempDir::new().unwrap();
        let result = ConfigDiscovery::new(dir.path()).load();
        assert!(matches!(result.unwrap_err(), ConfigError::NotFound(_)));
    }

    #[test]
    fn load_parses_toml_config() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("pagewire.toml"),
            r#"
[entries]
pattern = "src/pages/*/main.js"
naming = "directory"
"#,
        )
        .unwrap();

        let config = ConfigDiscovery::new(dir.path()).load().unwrap();
        assert_eq!(config.entries.pattern, "src/pages/*/main.js");
        assert_eq!(config.entries.naming, crate::NamingScheme::Directory);
    }

    #[test]
    fn load_from_package_json() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("package.json"),
            r#"{
                "name": "site",
                "pagewire": {
                    "output": { "publicPath": "http://localhost:8888/" }
                }
            }"#,
        )
        .unwrap();

        let config = ConfigDiscovery::new(dir.path()).load().unwrap();
        assert_eq!(
            config.output.public_path.as_deref(),
            Some("http://localhost:8888/")
        );
    }

    #[test]
    fn unsupported_extension_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pagewire.yaml");
        fs::write(&path, "entries: {}").unwrap();

        let err = read_config_value(&path).unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat(ext) if ext == "yaml"));
    }

    #[test]
    fn load_with_profile_accepts_camel_case_bodies() {
        let dir = TempDir::new().unwrap();
        let raw = json!({
            "output": { "outputRoot": "public" },
            "profiles": {
                "prod": { "output": { "manifestChunkName": "runtime" } }
            }
        });
        fs::write(dir.path().join("pagewire.json"), raw.to_string()).unwrap();

        let config = ConfigDiscovery::new(dir.path())
            .load_with_profile("prod")
            .unwrap();
        assert_eq!(config.output.output_root, PathBuf::from("public"));
        assert_eq!(config.output.manifest_chunk_name, "runtime");
    }
}
