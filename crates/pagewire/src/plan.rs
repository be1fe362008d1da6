//! The build plan: everything an external bundler needs for a multi-page
//! production build.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use pagewire_config::{PagewireConfig, validate_schema};
use serde::{Deserialize, Serialize};

use crate::directive::{PluginDirective, plugin_directives};
use crate::entry::{EntrySet, resolve_entries};
use crate::error::Result;
use crate::html::{HtmlRegistration, OutputBinding, bind_outputs};
use crate::loader::{LoaderRule, loader_rules};
use crate::template::FilenameTemplate;
use crate::vendor::VendorPolicy;

/// Output options as the bundler takes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputPlan {
    /// Absolute output directory
    pub path: PathBuf,
    pub filename: String,
    pub chunk_filename: String,
    pub css_filename: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_path: Option<String>,
}

/// Expected file names for one chunk, `[name]` already substituted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChunkAssets {
    pub script: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildPlan {
    pub project_root: PathBuf,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub devtool: Option<String>,
    /// Entry name to `./`-prefixed entry path
    pub entry: IndexMap<String, String>,
    pub output: OutputPlan,
    /// Module rules (loaders for component files and their styles)
    pub rules: Vec<LoaderRule>,
    /// Chunk name to expected asset names
    pub assets: IndexMap<String, ChunkAssets>,
    pub html: Vec<HtmlRegistration>,
    pub vendor: VendorPolicy,
    pub plugins: Vec<PluginDirective>,
}

impl BuildPlan {
    /// Resolve entries below `project_root` and wire every output.
    ///
    /// Fails before producing anything when the config, a filename template
    /// or any entry is invalid.
    #[tracing::instrument(level = "debug", skip(config, project_root), fields(root = %project_root.as_ref().display()))]
    pub fn assemble(config: &PagewireConfig, project_root: impl AsRef<Path>) -> Result<Self> {
        let project_root = path_clean::clean(project_root.as_ref());
        validate_schema(config)?;

        let js = FilenameTemplate::parse(&config.output.js_pattern)?;
        FilenameTemplate::parse(&config.output.chunk_pattern)?;
        let css = FilenameTemplate::parse(&config.output.css_pattern)?;

        let entries = resolve_entries(&project_root, &config.entries)?;
        Self::from_entries(config, project_root, &entries, &js, &css)
    }

    fn from_entries(
        config: &PagewireConfig,
        project_root: PathBuf,
        entries: &EntrySet,
        js: &FilenameTemplate,
        css: &FilenameTemplate,
    ) -> Result<Self> {
        let html = bind_outputs(entries, &OutputBinding::from_config(config))?;
        let extract_css = config.optimize.extract_css;

        let output = &config.output;
        let style = |name: &str| extract_css.then(|| css.fill_name(name));
        let mut assets = IndexMap::with_capacity(entries.len() + 2);
        for name in entries.names() {
            assets.insert(
                name.to_string(),
                ChunkAssets {
                    script: js.fill_name(name),
                    style: style(name),
                },
            );
        }
        assets.insert(
            output.vendor_chunk_name.clone(),
            ChunkAssets {
                script: js.fill_name(&output.vendor_chunk_name),
                style: style(&output.vendor_chunk_name),
            },
        );
        // runtime only, never styles
        assets.insert(
            output.manifest_chunk_name.clone(),
            ChunkAssets {
                script: js.fill_name(&output.manifest_chunk_name),
                style: None,
            },
        );

        let plugins = plugin_directives(config, &project_root, &html);
        let plan = Self {
            vendor: VendorPolicy::new(&project_root, &config.vendor),
            output: OutputPlan {
                path: path_clean::clean(project_root.join(&output.output_root)),
                filename: output.js_pattern.clone(),
                chunk_filename: output.chunk_pattern.clone(),
                css_filename: output.css_pattern.clone(),
                public_path: output.public_path.clone(),
            },
            project_root,
            profile: None,
            devtool: config.devtool.clone(),
            entry: entries.to_entry_map(),
            rules: loader_rules(config),
            assets,
            html,
            plugins,
        };

        tracing::info!(
            entries = plan.entry.len(),
            pages = plan.html.len(),
            rules = plan.rules.len(),
            plugins = plan.plugins.len(),
            "assembled build plan"
        );
        Ok(plan)
    }

    /// Record the profile the config was materialized with.
    pub fn with_profile(mut self, profile: Option<impl Into<String>>) -> Self {
        self.profile = profile.map(Into::into);
        self
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_value(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagewire_config::NamingScheme;

    fn plan_for(paths: &[&str], config: &PagewireConfig) -> BuildPlan {
        let entries =
            EntrySet::from_paths(&config.entries.pattern, paths.iter().copied(), NamingScheme::Relative)
                .unwrap();
        let js = FilenameTemplate::parse(&config.output.js_pattern).unwrap();
        let css = FilenameTemplate::parse(&config.output.css_pattern).unwrap();
        BuildPlan::from_entries(config, PathBuf::from("/site"), &entries, &js, &css).unwrap()
    }

    #[test]
    fn assets_cover_entries_and_shared_chunks() {
        let plan = plan_for(&["src/views/home/index.js"], &PagewireConfig::default());

        let names: Vec<_> = plan.assets.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["home/index", "vendor", "manifest"]);
        assert_eq!(plan.assets["home/index"].script, "js/home/index.[chunkhash:8].js");
        assert_eq!(
            plan.assets["home/index"].style.as_deref(),
            Some("css/home/index.[hash:8].css")
        );
        assert_eq!(plan.assets["manifest"].style, None);
    }

    #[test]
    fn styles_follow_extract_toggle() {
        let mut config = PagewireConfig::default();
        config.optimize.extract_css = false;
        let plan = plan_for(&["src/views/home/index.js"], &config);
        assert!(plan.assets.values().all(|assets| assets.style.is_none()));
        assert!(plan.rules[0].styles.values().all(|style| !style.extract));
        assert_eq!(plan.rules[0].styles["css"].uses, vec!["vue-style-loader", "css-loader"]);
    }

    #[test]
    fn component_rule_extracts_styles_by_default() {
        let plan = plan_for(&["src/views/home/index.js"], &PagewireConfig::default());
        assert_eq!(plan.rules.len(), 1);

        let rule = &plan.rules[0];
        assert_eq!(rule.test, r"\.vue$");
        assert_eq!(rule.loader, "vue-loader");
        let langs: Vec<_> = rule.styles.keys().map(String::as_str).collect();
        assert_eq!(langs, vec!["css", "scss"]);
        assert!(rule.styles.values().all(|style| style.extract));
        assert_eq!(rule.styles["scss"].uses, vec!["css-loader", "sass-loader"]);
        assert_eq!(rule.styles["scss"].fallback.as_deref(), Some("vue-style-loader"));

        let value = plan.to_value().unwrap();
        assert_eq!(value["rules"][0]["styles"]["css"]["use"][0], "css-loader");
    }

    #[test]
    fn output_path_is_absolute_under_root() {
        let plan = plan_for(&["src/views/home/index.js"], &PagewireConfig::default());
        assert_eq!(plan.output.path, PathBuf::from("/site/dist"));
        assert_eq!(plan.vendor.dir, PathBuf::from("/site/node_modules"));
    }

    #[test]
    fn html_directives_trail_the_pipeline() {
        let plan = plan_for(
            &["src/views/home/index.js", "src/views/user/list.js"],
            &PagewireConfig::default(),
        );
        let tail: Vec<_> = plan.plugins.iter().rev().take(2).map(|p| p.name()).collect();
        assert_eq!(tail, vec!["html", "html"]);
        assert_eq!(plan.html.len(), 2);
    }

    #[test]
    fn json_uses_camel_case() {
        let plan = plan_for(&["src/views/home/index.js"], &PagewireConfig::default())
            .with_profile(Some("production"));
        let value = plan.to_value().unwrap();
        assert_eq!(value["projectRoot"], "/site");
        assert_eq!(value["profile"], "production");
        assert_eq!(value["output"]["chunkFilename"], "js/[name].[id].js");
        assert_eq!(value["entry"]["home/index"], "./src/views/home/index.js");
        assert!(value["output"].get("publicPath").is_none());
    }
}
