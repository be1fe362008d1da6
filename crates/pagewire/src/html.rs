//! Per-entry HTML output wiring.

use std::path::{Component, Path};

use pagewire_config::PagewireConfig;
use serde::{Deserialize, Serialize};

use crate::entry::{Entry, EntrySet};
use crate::error::{Error, Result};
use crate::naming::to_slash;

/// One HTML page generated for one entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HtmlRegistration {
    /// Template next to the entry script (project-relative)
    pub template: String,
    /// Page path below the output root
    pub filename: String,
    /// Chunks injected into the page: the entry's own, vendor, manifest
    pub chunks: [String; 3],
}

/// The conventions `bind_outputs` applies to every entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputBinding {
    pub root_marker: String,
    pub template_extension: String,
    pub output_extension: String,
    pub vendor_chunk_name: String,
    pub manifest_chunk_name: String,
}

impl Default for OutputBinding {
    fn default() -> Self {
        Self::from_config(&PagewireConfig::default())
    }
}

impl OutputBinding {
    pub fn from_config(config: &PagewireConfig) -> Self {
        Self {
            root_marker: config.entries.root_marker.clone(),
            template_extension: config.entries.template_extension.clone(),
            output_extension: config.entries.output_extension.clone(),
            vendor_chunk_name: config.output.vendor_chunk_name.clone(),
            manifest_chunk_name: config.output.manifest_chunk_name.clone(),
        }
    }

    /// Wire a single entry.
    pub fn bind(&self, entry: &Entry) -> Result<HtmlRegistration> {
        let template = entry.path.with_extension(&self.template_extension);
        let filename = self.output_path(&entry.path)?;

        Ok(HtmlRegistration {
            template: to_slash(&template),
            filename,
            chunks: [
                entry.name.clone(),
                self.vendor_chunk_name.clone(),
                self.manifest_chunk_name.clone(),
            ],
        })
    }

    /// Entry path with everything up to and including the root marker
    /// removed and the extension swapped for the output extension.
    fn output_path(&self, path: &Path) -> Result<String> {
        let components: Vec<Component<'_>> = path.components().collect();
        let marker = components
            .iter()
            .position(|component| {
                matches!(component, Component::Normal(segment) if *segment == self.root_marker.as_str())
            })
            .ok_or_else(|| Error::UnresolvableEntryName {
                path: path.to_path_buf(),
                reason: format!("root marker '{}' is not part of the path", self.root_marker),
            })?;

        let rest: std::path::PathBuf = components[marker + 1..].iter().collect();
        if rest.file_name().is_none() {
            return Err(Error::UnresolvableEntryName {
                path: path.to_path_buf(),
                reason: format!("nothing follows root marker '{}'", self.root_marker),
            });
        }

        Ok(to_slash(&rest.with_extension(&self.output_extension)))
    }
}

/// Derive one HTML registration per entry, in entry order.
///
/// Pure: binding the same set twice yields identical registrations.
///
/// # Example
///
/// ```
/// use pagewire::{EntrySet, OutputBinding, bind_outputs};
/// use pagewire_config::NamingScheme;
///
/// let entries = EntrySet::from_paths(
///     "src/views/**/*.js",
///     ["src/views/home/index.js"],
///     NamingScheme::Relative,
/// )
/// .unwrap();
///
/// let pages = bind_outputs(&entries, &OutputBinding::default()).unwrap();
/// assert_eq!(pages[0].template, "src/views/home/index.html");
/// assert_eq!(pages[0].filename, "views/home/index.html");
/// assert_eq!(pages[0].chunks, ["home/index", "vendor", "manifest"]);
/// ```
pub fn bind_outputs(entries: &EntrySet, binding: &OutputBinding) -> Result<Vec<HtmlRegistration>> {
    entries.iter().map(|entry| binding.bind(entry)).collect()
}
