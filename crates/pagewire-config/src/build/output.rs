use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::build::helpers::{
    default_chunk_pattern, default_css_pattern, default_js_pattern, default_manifest_chunk_name,
    default_output_root, default_vendor_chunk_name, default_vendor_dir, default_vendor_extensions,
};

/// Output layout and the shared chunk names every page loads.
///
/// Filename patterns use bundler placeholders: `[name]`, `[id]`, `[hash]`,
/// `[chunkhash]` and `[contenthash]`, hashes optionally truncated
/// (`[chunkhash:8]`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct OutputConventions {
    /// Directory receiving all build output (relative to the project root)
    #[serde(default = "default_output_root", alias = "outputRoot")]
    pub output_root: PathBuf,

    /// Filename pattern for entry scripts
    #[serde(default = "default_js_pattern", alias = "jsPattern")]
    pub js_pattern: String,

    /// Filename pattern for non-entry (async) chunks
    #[serde(default = "default_chunk_pattern", alias = "chunkPattern")]
    pub chunk_pattern: String,

    /// Filename pattern for extracted stylesheets
    #[serde(default = "default_css_pattern", alias = "cssPattern")]
    pub css_pattern: String,

    /// URL prefix for emitted assets
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "publicPath")]
    pub public_path: Option<String>,

    /// Shared chunk holding third-party code
    #[serde(default = "default_vendor_chunk_name", alias = "vendorChunkName")]
    pub vendor_chunk_name: String,

    /// Shared chunk holding only module-loading bookkeeping
    #[serde(default = "default_manifest_chunk_name", alias = "manifestChunkName")]
    pub manifest_chunk_name: String,
}

impl Default for OutputConventions {
    fn default() -> Self {
        Self {
            output_root: default_output_root(),
            js_pattern: default_js_pattern(),
            chunk_pattern: default_chunk_pattern(),
            css_pattern: default_css_pattern(),
            public_path: None,
            vendor_chunk_name: default_vendor_chunk_name(),
            manifest_chunk_name: default_manifest_chunk_name(),
        }
    }
}

/// Which modules move into the vendor chunk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct VendorOptions {
    /// Directory (relative to the project root) holding third-party packages
    #[serde(default = "default_vendor_dir", alias = "vendorDir")]
    pub dir: PathBuf,

    /// Module extensions eligible for the vendor chunk
    #[serde(default = "default_vendor_extensions")]
    pub extensions: Vec<String>,
}

impl Default for VendorOptions {
    fn default() -> Self {
        Self {
            dir: default_vendor_dir(),
            extensions: default_vendor_extensions(),
        }
    }
}
