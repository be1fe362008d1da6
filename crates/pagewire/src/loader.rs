//! Module rules handed to the bundler: which loader takes component files
//! and how styles inside them are processed.

use std::collections::BTreeMap;

use pagewire_config::{LoaderOptions, PagewireConfig};
use serde::{Deserialize, Serialize};

/// Processing for one style language inside a component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleRule {
    /// Loaders in application order
    #[serde(rename = "use")]
    pub uses: Vec<String>,
    /// Runtime-injection loader for styles the extractor does not take
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback: Option<String>,
    /// Pulled into the stylesheet named by the `extractCss` directive
    pub extract: bool,
}

/// One module rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoaderRule {
    /// Regular expression over module resource paths
    pub test: String,
    pub loader: String,
    /// Style language to its processing
    pub styles: BTreeMap<String, StyleRule>,
}

impl LoaderRule {
    /// Rule for component files.
    ///
    /// With `extract_css` every style language runs its chain with the
    /// fallback loader behind the extractor; without it the fallback loader
    /// heads the chain and styles stay in the script.
    ///
    /// ```
    /// use pagewire::LoaderRule;
    /// use pagewire_config::LoaderOptions;
    ///
    /// let rule = LoaderRule::component(&LoaderOptions::default(), true);
    /// assert_eq!(rule.test, r"\.vue$");
    /// assert_eq!(rule.loader, "vue-loader");
    /// assert_eq!(rule.styles["scss"].uses, ["css-loader", "sass-loader"]);
    /// assert_eq!(rule.styles["scss"].fallback.as_deref(), Some("vue-style-loader"));
    /// ```
    pub fn component(options: &LoaderOptions, extract_css: bool) -> Self {
        let styles = options
            .styles
            .iter()
            .map(|(lang, chain)| {
                let rule = if extract_css {
                    StyleRule {
                        uses: chain.clone(),
                        fallback: Some(options.style_fallback.clone()),
                        extract: true,
                    }
                } else {
                    StyleRule {
                        uses: std::iter::once(options.style_fallback.clone())
                            .chain(chain.iter().cloned())
                            .collect(),
                        fallback: None,
                        extract: false,
                    }
                };
                (lang.clone(), rule)
            })
            .collect();

        Self {
            test: extension_test(&options.component_extension),
            loader: options.component_loader.clone(),
            styles,
        }
    }
}

/// Module rules for `config`.
pub fn loader_rules(config: &PagewireConfig) -> Vec<LoaderRule> {
    vec![LoaderRule::component(
        &config.loaders,
        config.optimize.extract_css,
    )]
}

/// `\.<ext>$` with regex metacharacters in `ext` escaped.
fn extension_test(extension: &str) -> String {
    let mut test = String::from(r"\.");
    for ch in extension.chars() {
        if r"\.+*?()|[]{}^$".contains(ch) {
            test.push('\\');
        }
        test.push(ch);
    }
    test.push('$');
    test
}
