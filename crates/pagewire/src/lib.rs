//! # pagewire
//!
//! Multi-page entry resolution and HTML output wiring for JavaScript
//! bundlers.
//!
//! A multi-page frontend keeps one view module per page
//! (`src/views/home/index.js`) next to its HTML template
//! (`src/views/home/index.html`). pagewire scans for those modules, derives
//! a unique entry name for each, and wires every entry to a generated page
//! that loads the entry chunk plus the shared `vendor` and `manifest`
//! chunks. The result is a [`BuildPlan`] an external bundler consumes.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pagewire::BuildPlan;
//! use pagewire_config::PagewireConfig;
//!
//! let config = PagewireConfig::default();
//! let plan = BuildPlan::assemble(&config, ".")?;
//! println!("{}", plan.to_json_pretty()?);
//! # Ok::<(), pagewire::Error>(())
//! ```
//!
//! The two core steps are also available on their own:
//!
//! ```no_run
//! use pagewire::{OutputBinding, bind_outputs, resolve_entries};
//! use pagewire_config::EntryOptions;
//!
//! let entries = resolve_entries(".", &EntryOptions::default())?;
//! for page in bind_outputs(&entries, &OutputBinding::default())? {
//!     println!("{} -> {}", page.template, page.filename);
//! }
//! # Ok::<(), pagewire::Error>(())
//! ```

pub mod directive;
pub mod entry;
pub mod error;
pub mod html;
pub mod loader;
pub mod naming;
pub mod plan;
pub mod template;
pub mod vendor;

pub use directive::{MinChunks, PluginDirective, clean_targets, plugin_directives};
pub use entry::{Entry, EntryResolver, EntrySet, resolve_entries};
pub use error::{Error, Result};
pub use html::{HtmlRegistration, OutputBinding, bind_outputs};
pub use loader::{LoaderRule, StyleRule, loader_rules};
pub use plan::{BuildPlan, ChunkAssets, OutputPlan};
pub use template::{ChunkContext, FilenameTemplate, Placeholder};
pub use vendor::VendorPolicy;

// Re-export config crate so users only need one import
pub use pagewire_config as config;
