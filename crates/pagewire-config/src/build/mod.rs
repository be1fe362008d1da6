//! Build option types shared across pagewire crates.

mod entries;
mod helpers;
mod loaders;
mod optimize;
mod output;

pub use entries::{EntryOptions, NamingScheme};
pub use loaders::LoaderOptions;
pub use optimize::{CleanOptions, CompressionOptions, OptimizeOptions};
pub use output::{OutputConventions, VendorOptions};

pub(crate) use helpers::default_devtool;
