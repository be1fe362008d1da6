use std::path::PathBuf;

pub(crate) fn default_true() -> bool {
    true
}

pub(crate) fn default_entry_pattern() -> String {
    "src/views/**/*.js".to_string()
}

pub(crate) fn default_root_marker() -> String {
    "src".to_string()
}

pub(crate) fn default_html_extension() -> String {
    "html".to_string()
}

pub(crate) fn default_output_root() -> PathBuf {
    PathBuf::from("dist")
}

pub(crate) fn default_js_pattern() -> String {
    "js/[name].[chunkhash:8].js".to_string()
}

pub(crate) fn default_chunk_pattern() -> String {
    "js/[name].[id].js".to_string()
}

pub(crate) fn default_css_pattern() -> String {
    "css/[name].[hash:8].css".to_string()
}

pub(crate) fn default_vendor_chunk_name() -> String {
    "vendor".to_string()
}

pub(crate) fn default_manifest_chunk_name() -> String {
    "manifest".to_string()
}

pub(crate) fn default_vendor_dir() -> PathBuf {
    PathBuf::from("node_modules")
}

pub(crate) fn default_vendor_extensions() -> Vec<String> {
    vec!["js".to_string()]
}

pub(crate) fn default_devtool() -> Option<String> {
    Some("source-map".to_string())
}

pub(crate) fn default_compression_asset() -> String {
    "[path].gz[query]".to_string()
}

pub(crate) fn default_compression_algorithm() -> String {
    "gzip".to_string()
}

pub(crate) fn default_compression_test() -> String {
    r"\.js$".to_string()
}

pub(crate) fn default_compression_threshold() -> u64 {
    10_240
}

pub(crate) fn default_compression_min_ratio() -> f64 {
    0.8
}

pub(crate) fn default_component_extension() -> String {
    "vue".to_string()
}

pub(crate) fn default_component_loader() -> String {
    "vue-loader".to_string()
}

pub(crate) fn default_style_fallback() -> String {
    "vue-style-loader".to_string()
}

pub(crate) fn default_style_languages() -> std::collections::BTreeMap<String, Vec<String>> {
    [
        ("css", vec!["css-loader"]),
        ("scss", vec!["css-loader", "sass-loader"]),
    ]
    .into_iter()
    .map(|(lang, chain)| {
        (
            lang.to_string(),
            chain.into_iter().map(str::to_string).collect(),
        )
    })
    .collect()
}
