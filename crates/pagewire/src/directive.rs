//! Declarative descriptions of the external plugins a production build runs.

use std::path::{Path, PathBuf};

use pagewire_config::{CompressionOptions, PagewireConfig};
use serde::{Deserialize, Serialize};

use crate::html::HtmlRegistration;
use crate::naming::to_slash;

/// How many entry chunks must share a module before a commons chunk takes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MinChunks {
    /// Never by count; the chunk receives only the loader runtime
    Infinity,
    /// Decided per module by the plan's vendor policy
    VendorPolicy,
}

/// One external plugin invocation, in pipeline order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "plugin",
    rename_all = "camelCase",
    rename_all_fields = "camelCase"
)]
pub enum PluginDirective {
    /// Remove previous output before building
    Clean {
        targets: Vec<String>,
        root: PathBuf,
        verbose: bool,
        dry: bool,
    },
    /// Move shared modules into a named chunk
    CommonsChunk { name: String, min_chunks: MinChunks },
    MinifyJs { source_map: bool, compress_warnings: bool },
    OptimizeCss { safe: bool, inline_map: bool },
    /// Pull component styles into standalone stylesheets
    ExtractCss { filename: String, all_chunks: bool },
    HashedModuleIds,
    ModuleConcatenation,
    NoEmitOnErrors,
    FriendlyErrors,
    Compression {
        asset: String,
        algorithm: String,
        test: String,
        threshold: u64,
        min_ratio: f64,
    },
    /// Generate one page
    Html(HtmlRegistration),
}

impl PluginDirective {
    /// Directive name as it appears in the `plugin` tag.
    pub fn name(&self) -> &'static str {
        match self {
            PluginDirective::Clean { .. } => "clean",
            PluginDirective::CommonsChunk { .. } => "commonsChunk",
            PluginDirective::MinifyJs { .. } => "minifyJs",
            PluginDirective::OptimizeCss { .. } => "optimizeCss",
            PluginDirective::ExtractCss { .. } => "extractCss",
            PluginDirective::HashedModuleIds => "hashedModuleIds",
            PluginDirective::ModuleConcatenation => "moduleConcatenation",
            PluginDirective::NoEmitOnErrors => "noEmitOnErrors",
            PluginDirective::FriendlyErrors => "friendlyErrors",
            PluginDirective::Compression { .. } => "compression",
            PluginDirective::Html(_) => "html",
        }
    }
}

impl From<&CompressionOptions> for PluginDirective {
    fn from(options: &CompressionOptions) -> Self {
        PluginDirective::Compression {
            asset: options.asset.clone(),
            algorithm: options.algorithm.clone(),
            test: options.test.clone(),
            threshold: options.threshold,
            min_ratio: options.min_ratio,
        }
    }
}

/// Clean targets: configured globs, or everything under the output root.
pub fn clean_targets(config: &PagewireConfig) -> Vec<String> {
    if config.optimize.clean.targets.is_empty() {
        vec![format!("{}/*", to_slash(&config.output.output_root))]
    } else {
        config.optimize.clean.targets.clone()
    }
}

/// The production pipeline for `config`, followed by one `html` directive
/// per page.
pub fn plugin_directives(
    config: &PagewireConfig,
    project_root: &Path,
    pages: &[HtmlRegistration],
) -> Vec<PluginDirective> {
    let optimize = &config.optimize;
    let mut plugins = Vec::with_capacity(11 + pages.len());

    if optimize.clean.enabled {
        plugins.push(PluginDirective::Clean {
            targets: clean_targets(config),
            root: project_root.to_path_buf(),
            verbose: optimize.clean.verbose,
            dry: optimize.clean.dry,
        });
    }

    plugins.push(PluginDirective::CommonsChunk {
        name: config.output.vendor_chunk_name.clone(),
        min_chunks: MinChunks::VendorPolicy,
    });
    plugins.push(PluginDirective::CommonsChunk {
        name: config.output.manifest_chunk_name.clone(),
        min_chunks: MinChunks::Infinity,
    });

    if optimize.minify {
        plugins.push(PluginDirective::MinifyJs {
            source_map: optimize.source_maps,
            compress_warnings: false,
        });
    }
    if optimize.optimize_css {
        plugins.push(PluginDirective::OptimizeCss {
            safe: true,
            inline_map: false,
        });
    }
    if optimize.extract_css {
        plugins.push(PluginDirective::ExtractCss {
            filename: config.output.css_pattern.clone(),
            all_chunks: true,
        });
    }
    if optimize.hashed_module_ids {
        plugins.push(PluginDirective::HashedModuleIds);
    }
    if optimize.module_concatenation {
        plugins.push(PluginDirective::ModuleConcatenation);
    }
    if let Some(compression) = &optimize.compression {
        plugins.push(compression.into());
    }
    if optimize.no_emit_on_errors {
        plugins.push(PluginDirective::NoEmitOnErrors);
    }
    if optimize.friendly_errors {
        plugins.push(PluginDirective::FriendlyErrors);
    }

    plugins.extend(pages.iter().cloned().map(PluginDirective::Html));
    plugins
}
