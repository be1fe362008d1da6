use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::build::helpers::{default_entry_pattern, default_html_extension, default_root_marker};

/// How an entry name is derived from the path of its file.
///
/// Given the pattern `src/views/**/*.js` and the file
/// `src/views/home/index.js`:
///
/// | scheme      | name         |
/// |-------------|--------------|
/// | `relative`  | `home/index` |
/// | `basename`  | `index`      |
/// | `directory` | `home`       |
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum NamingScheme {
    /// Path below the pattern's literal base directory, without extension
    #[default]
    Relative,
    /// File stem only
    Basename,
    /// Name of the directory holding the file
    Directory,
}

impl std::fmt::Display for NamingScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            NamingScheme::Relative => "relative",
            NamingScheme::Basename => "basename",
            NamingScheme::Directory => "directory",
        })
    }
}

/// Entry discovery options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct EntryOptions {
    /// Glob pattern (relative to the project root) selecting entry scripts
    #[serde(default = "default_entry_pattern")]
    pub pattern: String,

    /// Path segment after which HTML output paths begin
    #[serde(default = "default_root_marker", alias = "rootMarker")]
    pub root_marker: String,

    /// Entry naming scheme
    #[serde(default)]
    pub naming: NamingScheme,

    /// Extension of the companion HTML template next to each entry
    #[serde(default = "default_html_extension", alias = "templateExtension")]
    pub template_extension: String,

    /// Extension of the generated HTML page
    #[serde(default = "default_html_extension", alias = "outputExtension")]
    pub output_extension: String,
}

impl Default for EntryOptions {
    fn default() -> Self {
        Self {
            pattern: default_entry_pattern(),
            root_marker: default_root_marker(),
            naming: NamingScheme::default(),
            template_extension: default_html_extension(),
            output_extension: default_html_extension(),
        }
    }
}
