use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::build::helpers::{
    default_compression_algorithm, default_compression_asset, default_compression_min_ratio,
    default_compression_test, default_compression_threshold, default_true,
};

/// Toggles for the external optimization plugins listed in the plan.
///
/// Defaults describe a production build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct OptimizeOptions {
    #[serde(default)]
    pub clean: CleanOptions,

    /// Minify scripts
    #[serde(default = "default_true")]
    pub minify: bool,

    /// Keep source maps when minifying
    #[serde(default = "default_true", alias = "sourceMaps")]
    pub source_maps: bool,

    /// Optimize extracted CSS (safe mode, external map)
    #[serde(default = "default_true", alias = "optimizeCss")]
    pub optimize_css: bool,

    /// Extract component styles into standalone stylesheets
    #[serde(default = "default_true", alias = "extractCss")]
    pub extract_css: bool,

    /// Stable module ids derived from module paths
    #[serde(default = "default_true", alias = "hashedModuleIds")]
    pub hashed_module_ids: bool,

    /// Scope hoisting
    #[serde(default = "default_true", alias = "moduleConcatenation")]
    pub module_concatenation: bool,

    /// Skip the emit phase when compilation reports errors
    #[serde(default = "default_true", alias = "noEmitOnErrors")]
    pub no_emit_on_errors: bool,

    /// Friendlier compiler warnings and errors
    #[serde(default = "default_true", alias = "friendlyErrors")]
    pub friendly_errors: bool,

    /// Pre-compressed copies of large assets (off unless configured)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compression: Option<CompressionOptions>,
}

impl Default for OptimizeOptions {
    fn default() -> Self {
        Self {
            clean: CleanOptions::default(),
            minify: true,
            source_maps: true,
            optimize_css: true,
            extract_css: true,
            hashed_module_ids: true,
            module_concatenation: true,
            no_emit_on_errors: true,
            friendly_errors: true,
            compression: None,
        }
    }
}

/// Clean-before-build options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CleanOptions {
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Globs to remove; empty means everything under the output root
    #[serde(default)]
    pub targets: Vec<String>,

    #[serde(default = "default_true")]
    pub verbose: bool,

    /// Report what would be removed without removing it
    #[serde(default)]
    pub dry: bool,
}

impl Default for CleanOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            targets: Vec::new(),
            verbose: true,
            dry: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CompressionOptions {
    #[serde(default = "default_compression_asset")]
    pub asset: String,

    #[serde(default = "default_compression_algorithm")]
    pub algorithm: String,

    /// Regex selecting assets to compress
    #[serde(default = "default_compression_test")]
    pub test: String,

    /// Minimum asset size in bytes
    #[serde(default = "default_compression_threshold")]
    pub threshold: u64,

    #[serde(default = "default_compression_min_ratio", alias = "minRatio")]
    pub min_ratio: f64,
}

impl Default for CompressionOptions {
    fn default() -> Self {
        Self {
            asset: default_compression_asset(),
            algorithm: default_compression_algorithm(),
            test: default_compression_test(),
            threshold: default_compression_threshold(),
            min_ratio: default_compression_min_ratio(),
        }
    }
}
