//! High-level configuration structure for pagewire.
//!
//! This module provides the main `PagewireConfig` struct and profile merging
//! logic. For file discovery and layered loading, see the `discovery` module.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::build::{
    EntryOptions, LoaderOptions, OptimizeOptions, OutputConventions, VendorOptions,
    default_devtool,
};
use crate::error::{ConfigError, Result as ConfigResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PagewireConfig {
    #[serde(default)]
    pub entries: EntryOptions,

    #[serde(default)]
    pub output: OutputConventions,

    #[serde(default)]
    pub vendor: VendorOptions,

    #[serde(default)]
    pub loaders: LoaderOptions,

    #[serde(default)]
    pub optimize: OptimizeOptions,

    /// Source map style handed to the bundler (`source-map`, `cheap-module-eval-source-map`, ...)
    #[serde(default = "default_devtool", skip_serializing_if = "Option::is_none")]
    pub devtool: Option<String>,

    /// Named override blocks merged onto the base config
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub profiles: BTreeMap<String, Value>,
}

impl Default for PagewireConfig {
    fn default() -> Self {
        Self {
            entries: EntryOptions::default(),
            output: OutputConventions::default(),
            vendor: VendorOptions::default(),
            loaders: LoaderOptions::default(),
            optimize: OptimizeOptions::default(),
            devtool: default_devtool(),
            profiles: BTreeMap::new(),
        }
    }
}

impl PagewireConfig {
    /// Create from serde_json::Value (for programmatic config)
    ///
    /// # Example
    ///
    /// ```
    /// use pagewire_config::PagewireConfig;
    /// use serde_json::json;
    ///
    /// let value = json!({
    ///     "entries": { "pattern": "src/pages/**/*.js" },
    ///     "output": { "vendorChunkName": "common" }
    /// });
    ///
    /// let config = PagewireConfig::from_value(value).unwrap();
    /// assert_eq!(config.entries.pattern, "src/pages/**/*.js");
    /// assert_eq!(config.output.vendor_chunk_name, "common");
    /// assert_eq!(config.output.manifest_chunk_name, "manifest");
    /// ```
    pub fn from_value(value: Value) -> ConfigResult<Self> {
        serde_json::from_value(value).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// Convert to serde_json::Value
    pub fn to_value(&self) -> ConfigResult<Value> {
        serde_json::to_value(self).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// Merge the named profile onto the base configuration.
    ///
    /// `None` returns the config unchanged. Naming a profile that is not
    /// defined is an error.
    pub fn materialize_profile(self, profile: Option<&str>) -> ConfigResult<Self> {
        let Some(name) = profile else {
            return Ok(self);
        };

        let mut value = self.to_value()?;
        apply_profile(&mut value, name)?;
        serde_json::from_value(value).map_err(|err| ConfigError::InvalidProfileOverride {
            message: err.to_string(),
        })
    }

    /// Generate JSON Schema for pagewire config files.
    pub fn json_schema() -> Value {
        let schema = schemars::schema_for!(PagewireConfig);
        serde_json::to_value(schema).unwrap_or(Value::Null)
    }

    /// Starter `pagewire.toml` content.
    pub fn example_toml() -> String {
        r#"# pagewire configuration

[entries]
pattern = "src/views/**/*.js"
root_marker = "src"
naming = "relative"

[output]
output_root = "dist"
js_pattern = "js/[name].[chunkhash:8].js"
chunk_pattern = "js/[name].[id].js"
css_pattern = "css/[name].[hash:8].css"
vendor_chunk_name = "vendor"
manifest_chunk_name = "manifest"

[vendor]
dir = "node_modules"
extensions = ["js"]

[loaders]
component_extension = "vue"
component_loader = "vue-loader"
style_fallback = "vue-style-loader"

[loaders.styles]
css = ["css-loader"]
scss = ["css-loader", "sass-loader"]

[optimize]
minify = true
source_maps = true
extract_css = true

[profiles.development]
devtool = "cheap-module-eval-source-map"
optimize = { minify = false, clean = { enabled = false } }
"#
        .to_string()
    }

    /// Starter `pagewire.json` content.
    pub fn example_json() -> String {
        let mut config = PagewireConfig::default();
        config.profiles.insert(
            "development".to_string(),
            serde_json::json!({
                "devtool": "cheap-module-eval-source-map",
                "optimize": { "minify": false, "clean": { "enabled": false } }
            }),
        );
        serde_json::to_string_pretty(&config).unwrap_or_default()
    }
}

/// Merge `profiles.<name>` of a raw config value onto the value itself.
///
/// The profile body may use camelCase keys; it is normalized to the
/// snake_case field names before merging. The `profiles` table is left in
/// place so later loads can pick another profile.
pub fn apply_profile(value: &mut Value, name: &str) -> ConfigResult<()> {
    let overrides = value
        .get("profiles")
        .and_then(|profiles| profiles.get(name))
        .cloned()
        .map(normalize_keys)
        .ok_or_else(|| ConfigError::ProfileNotFound(name.to_string()))?;

    if overrides.is_null() {
        return Ok(());
    }
    if !overrides.is_object() {
        return Err(ConfigError::InvalidProfileOverride {
            message: format!("profile '{name}' must be a table"),
        });
    }
    if overrides.get("profiles").is_some() {
        return Err(ConfigError::InvalidProfileOverride {
            message: format!("profile '{name}' cannot define nested profiles"),
        });
    }

    merge_values(value, &overrides);
    Ok(())
}

/// Rewrite camelCase keys to snake_case so merged layers agree on key names.
pub(crate) fn normalize_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| match (key.as_str(), value) {
                    // profile names are user data, their bodies are config
                    ("profiles", Value::Object(profiles)) => (
                        key,
                        Value::Object(
                            profiles
                                .into_iter()
                                .map(|(name, body)| (name, normalize_keys(body)))
                                .collect(),
                        ),
                    ),
                    (_, value) => (to_snake_case(&key), normalize_keys(value)),
                })
                .collect(),
        ),
        other => other,
    }
}

fn to_snake_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for ch in key.chars() {
        if ch.is_ascii_uppercase() {
            out.push('_');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

pub(crate) fn merge_values(target: &mut Value, update: &Value) {
    match (target, update) {
        (Value::Object(target_map), Value::Object(update_map)) => {
            for (key, value) in update_map {
                merge_values(target_map.entry(key.clone()).or_insert(Value::Null), value);
            }
        }
        (target_slot, _) => {
            *target_slot = update.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::NamingScheme;
    use serde_json::json;

    #[test]
    fn defaults_describe_production_build() {
        let config = PagewireConfig::default();
        assert_eq!(config.entries.pattern, "src/views/**/*.js");
        assert_eq!(config.entries.root_marker, "src");
        assert_eq!(config.entries.naming, NamingScheme::Relative);
        assert_eq!(config.output.js_pattern, "js/[name].[chunkhash:8].js");
        assert_eq!(config.output.css_pattern, "css/[name].[hash:8].css");
        assert_eq!(config.output.vendor_chunk_name, "vendor");
        assert_eq!(config.output.manifest_chunk_name, "manifest");
        assert_eq!(config.devtool.as_deref(), Some("source-map"));
        assert!(config.optimize.minify);
        assert!(config.optimize.compression.is_none());
    }

    #[test]
    fn from_value_accepts_snake_and_camel_keys() {
        let snake = PagewireConfig::from_value(json!({
            "output": { "output_root": "public", "manifest_chunk_name": "runtime" }
        }))
        .unwrap();
        let camel = PagewireConfig::from_value(json!({
            "output": { "outputRoot": "public", "manifestChunkName": "runtime" }
        }))
        .unwrap();

        assert_eq!(snake, camel);
        assert_eq!(snake.output.manifest_chunk_name, "runtime");
    }

    #[test]
    fn from_value_rejects_bad_types() {
        let err = PagewireConfig::from_value(json!({ "entries": { "naming": "flat" } }))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn profile_merging_works() {
        let config = PagewireConfig::from_value(json!({
            "optimize": { "minify": true },
            "profiles": {
                "development": {
                    "devtool": "cheap-module-eval-source-map",
                    "optimize": { "minify": false }
                }
            }
        }))
        .unwrap()
        .materialize_profile(Some("development"))
        .unwrap();

        assert!(!config.optimize.minify);
        assert!(config.optimize.extract_css);
        assert_eq!(
            config.devtool.as_deref(),
            Some("cheap-module-eval-source-map")
        );
        assert!(config.profiles.contains_key("development"));
    }

    #[test]
    fn unknown_profile_is_an_error() {
        let err = PagewireConfig::default()
            .materialize_profile(Some("staging"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::ProfileNotFound(name) if name == "staging"));
    }

    #[test]
    fn merge_replaces_arrays() {
        let mut base = json!({ "vendor": { "extensions": ["js", "mjs"] } });
        merge_values(&mut base, &json!({ "vendor": { "extensions": ["ts"] } }));
        assert_eq!(base["vendor"]["extensions"], json!(["ts"]));
    }

    #[test]
    fn example_json_round_trips() {
        let parsed: PagewireConfig = serde_json::from_str(&PagewireConfig::example_json()).unwrap();
        assert!(parsed.profiles.contains_key("development"));
    }

    #[test]
    fn example_toml_parses() {
        let parsed: PagewireConfig = toml::from_str(&PagewireConfig::example_toml()).unwrap();
        assert_eq!(parsed.output.output_root, std::path::PathBuf::from("dist"));
        assert_eq!(parsed.loaders, LoaderOptions::default());
        let dev = parsed.materialize_profile(Some("development")).unwrap();
        assert!(!dev.optimize.clean.enabled);
    }

    #[test]
    fn normalize_keys_converts_camel_case() {
        let value = normalize_keys(json!({
            "output": { "outputRoot": "public", "js_pattern": "[name].js" },
            "profiles": { "ciBuild": { "output": { "publicPath": "/" } } }
        }));
        assert_eq!(value["output"]["output_root"], json!("public"));
        assert_eq!(value["output"]["js_pattern"], json!("[name].js"));
        assert_eq!(
            value["profiles"]["ciBuild"]["output"]["public_path"],
            json!("/")
        );
    }

    #[test]
    fn to_snake_case_handles_plain_keys() {
        assert_eq!(to_snake_case("manifestChunkName"), "manifest_chunk_name");
        assert_eq!(to_snake_case("pattern"), "pattern");
    }

    #[test]
    fn camel_case_profile_merges_onto_base() {
        let config = PagewireConfig::from_value(json!({
            "output": { "vendorChunkName": "common" },
            "profiles": {
                "prod": {
                    "output": { "manifestChunkName": "runtime", "publicPath": "/static/" },
                    "optimize": { "extractCss": false }
                }
            }
        }))
        .unwrap()
        .materialize_profile(Some("prod"))
        .unwrap();

        assert_eq!(config.output.manifest_chunk_name, "runtime");
        assert_eq!(config.output.vendor_chunk_name, "common");
        assert_eq!(config.output.public_path.as_deref(), Some("/static/"));
        assert!(!config.optimize.extract_css);
    }

    #[test]
    fn json_schema_describes_config_sections() {
        let schema = PagewireConfig::json_schema();
        assert!(schema.is_object());
        let properties = &schema["properties"];
        for section in ["entries", "output", "vendor", "loaders", "optimize", "profiles"] {
            assert!(properties.get(section).is_some(), "missing {section}");
        }
    }
}
