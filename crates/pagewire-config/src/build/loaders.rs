use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::build::helpers::{
    default_component_extension, default_component_loader, default_style_fallback,
    default_style_languages,
};

/// Loader rules for single-file components.
///
/// Component files (`.vue` by default) go through one loader; each style
/// language inside a component gets its own loader chain, applied in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct LoaderOptions {
    /// Extension of component files, without the dot
    #[serde(default = "default_component_extension", alias = "componentExtension")]
    pub component_extension: String,

    #[serde(default = "default_component_loader", alias = "componentLoader")]
    pub component_loader: String,

    /// Loader that injects styles at runtime when they are not extracted
    #[serde(default = "default_style_fallback", alias = "styleFallback")]
    pub style_fallback: String,

    /// Style language (`lang` attribute) to its loader chain
    #[serde(default = "default_style_languages")]
    pub styles: BTreeMap<String, Vec<String>>,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            component_extension: default_component_extension(),
            component_loader: default_component_loader(),
            style_fallback: default_style_fallback(),
            styles: default_style_languages(),
        }
    }
}
