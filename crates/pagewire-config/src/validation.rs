//! Pluggable config validation strategies
//!
//! Separates filesystem validation (for CLI use) from schema validation (for
//! library use).

use std::path::{Component, Path};

use crate::config::PagewireConfig;
use crate::error::{ConfigError, Result};

/// Trait for pluggable config validation strategies
pub trait ConfigValidator {
    fn validate(&self, config: &PagewireConfig) -> Result<()>;
}

/// Schema-only validation (no filesystem checks)
///
/// # Example
///
/// ```
/// use pagewire_config::{ConfigValidator, PagewireConfig, SchemaValidator};
///
/// let config = PagewireConfig::default();
/// SchemaValidator.validate(&config).unwrap();
/// ```
pub struct SchemaValidator;

impl ConfigValidator for SchemaValidator {
    fn validate(&self, config: &PagewireConfig) -> Result<()> {
        let entries = &config.entries;
        if entries.pattern.trim().is_empty() {
            return Err(schema_error(
                "entry pattern cannot be empty",
                "Set entries.pattern, e.g. \"src/views/**/*.js\"",
            ));
        }

        if entries.root_marker.is_empty()
            || entries.root_marker.contains(['/', '\\'])
            || entries.root_marker == "."
            || entries.root_marker == ".."
        {
            return Err(schema_error(
                format!("root marker '{}' must be a single path segment", entries.root_marker),
                "Use a directory name such as \"src\"",
            ));
        }

        for (field, ext) in [
            ("entries.template_extension", &entries.template_extension),
            ("entries.output_extension", &entries.output_extension),
        ] {
            validate_extension(field, ext)?;
        }

        let output = &config.output;
        if output.output_root.as_os_str().is_empty() {
            return Err(schema_error(
                "output root cannot be empty",
                "Set output.output_root, e.g. \"dist\"",
            ));
        }
        if output
            .output_root
            .components()
            .any(|c| matches!(c, Component::ParentDir))
        {
            return Err(schema_error(
                format!(
                    "output root '{}' cannot contain '..'",
                    output.output_root.display()
                ),
                "Keep build output inside the project",
            ));
        }

        for (field, pattern) in [
            ("output.js_pattern", &output.js_pattern),
            ("output.css_pattern", &output.css_pattern),
        ] {
            if !pattern.contains("[name]") {
                return Err(schema_error(
                    format!("{field} '{pattern}' does not contain [name]"),
                    "Every page emits its own files, so the pattern needs [name]",
                ));
            }
        }
        if output.chunk_pattern.trim().is_empty() {
            return Err(schema_error(
                "output.chunk_pattern cannot be empty",
                "Use e.g. \"js/[name].[id].js\"",
            ));
        }

        for (field, name) in [
            ("output.vendor_chunk_name", &output.vendor_chunk_name),
            ("output.manifest_chunk_name", &output.manifest_chunk_name),
        ] {
            if name.trim().is_empty() {
                return Err(schema_error(
                    format!("{field} cannot be empty"),
                    "Shared chunks need a name",
                ));
            }
        }
        if output.vendor_chunk_name == output.manifest_chunk_name {
            return Err(schema_error(
                format!(
                    "vendor and manifest chunks share the name '{}'",
                    output.vendor_chunk_name
                ),
                "Give the shared chunks distinct names",
            ));
        }

        if config.vendor.extensions.is_empty() {
            return Err(schema_error(
                "vendor.extensions cannot be empty",
                "List at least one module extension, e.g. [\"js\"]",
            ));
        }
        for ext in &config.vendor.extensions {
            validate_extension("vendor.extensions", ext)?;
        }

        let loaders = &config.loaders;
        validate_extension("loaders.component_extension", &loaders.component_extension)?;
        for (field, loader) in [
            ("loaders.component_loader", &loaders.component_loader),
            ("loaders.style_fallback", &loaders.style_fallback),
        ] {
            if loader.trim().is_empty() {
                return Err(schema_error(
                    format!("{field} cannot be empty"),
                    "Name an installed loader package, e.g. \"vue-loader\"",
                ));
            }
        }
        for (lang, chain) in &loaders.styles {
            if chain.is_empty() || chain.iter().any(|loader| loader.trim().is_empty()) {
                return Err(schema_error(
                    format!("loaders.styles.{lang} needs at least one named loader"),
                    "List loaders in application order, e.g. [\"css-loader\", \"sass-loader\"]",
                ));
            }
        }

        if let Some(compression) = &config.optimize.compression {
            if !(0.0..=1.0).contains(&compression.min_ratio) {
                return Err(schema_error(
                    format!(
                        "compression min_ratio {} is outside 0.0..=1.0",
                        compression.min_ratio
                    ),
                    "Use a ratio such as 0.8",
                ));
            }
        }

        Ok(())
    }
}

fn validate_extension(field: &str, ext: &str) -> Result<()> {
    if ext.is_empty() || ext.starts_with('.') || ext.contains(['/', '\\']) {
        return Err(schema_error(
            format!("{field} has invalid extension '{ext}'"),
            "Write extensions without a leading dot, e.g. \"html\"",
        ));
    }
    Ok(())
}

fn schema_error(message: impl Into<String>, hint: impl Into<String>) -> ConfigError {
    ConfigError::SchemaValidation {
        message: message.into(),
        hint: Some(hint.into()),
    }
}

/// Filesystem validator (for CLI use)
///
/// Runs schema validation, then checks the project root and output root
/// against the filesystem.
pub struct FsValidator {
    root: std::path::PathBuf,
}

impl FsValidator {
    /// Create a new filesystem validator with a root directory
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

impl ConfigValidator for FsValidator {
    fn validate(&self, config: &PagewireConfig) -> Result<()> {
        SchemaValidator.validate(config)?;

        if !self.root.is_dir() {
            return Err(ConfigError::NotFound(self.root.clone()));
        }

        let output_root = self.root.join(&config.output.output_root);
        if output_root.exists() && !output_root.is_dir() {
            return Err(ConfigError::InvalidValue {
                field: "output.output_root".to_string(),
                hint: Some(format!("{} exists and is not a directory", output_root.display())),
            });
        }

        let vendor_dir = self.root.join(&config.vendor.dir);
        if !vendor_dir.is_dir() {
            tracing::warn!(path = %vendor_dir.display(), "vendor directory does not exist");
        }

        Ok(())
    }
}

/// Convenience function for schema-only validation
pub fn validate_schema(config: &PagewireConfig) -> Result<()> {
    SchemaValidator.validate(config)
}

/// Convenience function for filesystem validation
pub fn validate_fs(config: &PagewireConfig, root: impl AsRef<Path>) -> Result<()> {
    FsValidator::new(root).validate(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn schema_validator_accepts_defaults() {
        assert!(SchemaValidator.validate(&PagewireConfig::default()).is_ok());
    }

    #[test]
    fn schema_validator_rejects_empty_pattern() {
        let mut config = PagewireConfig::default();
        config.entries.pattern = "  ".to_string();
        assert!(matches!(
            SchemaValidator.validate(&config).unwrap_err(),
            ConfigError::SchemaValidation { .. }
        ));
    }

    #[test]
    fn schema_validator_rejects_nested_root_marker() {
        let mut config = PagewireConfig::default();
        config.entries.root_marker = "src/views".to_string();
        assert!(SchemaValidator.validate(&config).is_err());
    }

    #[test]
    fn schema_validator_rejects_dotted_extension() {
        let mut config = PagewireConfig::default();
        config.entries.template_extension = ".html".to_string();
        assert!(SchemaValidator.validate(&config).is_err());
    }

    #[test]
    fn schema_validator_rejects_escaping_output_root() {
        let mut config = PagewireConfig::default();
        config.output.output_root = PathBuf::from("../public");
        assert!(SchemaValidator.validate(&config).is_err());
    }

    #[test]
    fn schema_validator_requires_name_placeholder() {
        let mut config = PagewireConfig::default();
        config.output.js_pattern = "js/app.[chunkhash:8].js".to_string();
        let err = SchemaValidator.validate(&config).unwrap_err();
        assert!(err.to_string().contains("[name]"));
    }

    #[test]
    fn schema_validator_rejects_identical_shared_chunks() {
        let mut config = PagewireConfig::default();
        config.output.manifest_chunk_name = "vendor".to_string();
        assert!(SchemaValidator.validate(&config).is_err());
    }

    #[test]
    fn schema_validator_checks_loader_rules() {
        let mut config = PagewireConfig::default();
        config.loaders.styles.insert("less".to_string(), Vec::new());
        let err = SchemaValidator.validate(&config).unwrap_err();
        assert!(err.to_string().contains("loaders.styles.less"));

        let mut config = PagewireConfig::default();
        config.loaders.component_extension = ".vue".to_string();
        assert!(SchemaValidator.validate(&config).is_err());
    }

    #[test]
    fn schema_validator_rejects_bad_compression_ratio() {
        let mut config = PagewireConfig::default();
        config.optimize.compression = Some(crate::CompressionOptions {
            min_ratio: 1.5,
            ..Default::default()
        });
        assert!(SchemaValidator.validate(&config).is_err());
    }

    #[test]
    fn fs_validator_rejects_missing_root() {
        let err = validate_fs(&PagewireConfig::default(), "/definitely/not/here").unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn fs_validator_rejects_file_as_output_root() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(dir.path().join("dist"), "not a dir").unwrap();
        let err = validate_fs(&PagewireConfig::default(), dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }
}
