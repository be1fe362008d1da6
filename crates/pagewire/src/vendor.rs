use std::path::{Path, PathBuf};

use pagewire_config::VendorOptions;
use serde::{Deserialize, Serialize};

/// Decides which modules the shared vendor chunk takes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorPolicy {
    /// Project root relative resources are resolved against
    pub root: PathBuf,
    /// Directory holding third-party packages, below `root`
    pub dir: PathBuf,
    pub extensions: Vec<String>,
}

impl VendorPolicy {
    pub fn new(project_root: impl AsRef<Path>, options: &VendorOptions) -> Self {
        let root = path_clean::clean(project_root.as_ref());
        Self {
            dir: path_clean::clean(root.join(&options.dir)),
            root,
            extensions: options
                .extensions
                .iter()
                .map(|ext| ext.trim_start_matches('.').to_string())
                .collect(),
        }
    }

    /// True when `resource` has a vendor extension and lives under the
    /// vendor directory.
    ///
    /// Relative resources are taken relative to the project root.
    ///
    /// ```
    /// use pagewire::VendorPolicy;
    /// use pagewire_config::VendorOptions;
    ///
    /// let policy = VendorPolicy::new("/site", &VendorOptions::default());
    /// assert!(policy.is_vendor_module("/site/node_modules/vue/dist/vue.js"));
    /// assert!(!policy.is_vendor_module("/site/src/views/home/index.js"));
    /// assert!(!policy.is_vendor_module("/site/node_modules/normalize.css/normalize.css"));
    /// ```
    pub fn is_vendor_module(&self, resource: impl AsRef<Path>) -> bool {
        let resource = resource.as_ref();
        let has_extension = resource
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|allowed| allowed == ext));
        if !has_extension {
            return false;
        }

        let resource = if resource.is_absolute() {
            path_clean::clean(resource)
        } else {
            path_clean::clean(self.root.join(resource))
        };
        resource.starts_with(&self.dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> VendorPolicy {
        VendorPolicy::new("/site", &VendorOptions::default())
    }

    #[test]
    fn prefix_match_is_component_wise() {
        // a sibling directory sharing the name prefix is not vendor code
        assert!(!policy().is_vendor_module("/site/node_modules_old/lib.js"));
        assert!(policy().is_vendor_module("/site/node_modules/lib.js"));
    }

    #[test]
    fn dot_segments_cannot_escape() {
        assert!(!policy().is_vendor_module("/site/node_modules/../src/app.js"));
    }

    #[test]
    fn relative_resources_resolve_against_root() {
        assert!(policy().is_vendor_module("node_modules/vue/index.js"));
        assert!(!policy().is_vendor_module("src/index.js"));
    }

    #[test]
    fn extensions_are_configurable() {
        let options = VendorOptions {
            dir: PathBuf::from("web/vendor"),
            extensions: vec![".js".to_string(), "mjs".to_string()],
        };
        let policy = VendorPolicy::new("/site", &options);
        assert_eq!(policy.extensions, vec!["js", "mjs"]);
        assert!(policy.is_vendor_module("/site/web/vendor/a.mjs"));
        assert!(policy.is_vendor_module("web/vendor/b.js"));
        assert!(!policy.is_vendor_module("/site/web/vendor/a.ts"));
    }
}
