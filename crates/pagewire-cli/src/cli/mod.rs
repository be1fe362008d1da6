//! Command-line interface definition for pagewire.
//!
//! # Command Structure
//!
//! - `pagewire plan` - Resolve entries and print the build plan
//! - `pagewire check` - Validate configuration and entry discovery
//! - `pagewire clean` - Empty the output root
//! - `pagewire init` - Write a starter config

mod commands;
pub mod enums;
mod validation;

use clap::Parser;

pub use commands::{CheckArgs, CleanArgs, Command, ConfigArgs, InitArgs, PlanArgs};
pub use enums::*;
pub use validation::parse_root_marker;

/// pagewire - multi-page entry resolution for bundlers
#[derive(Parser, Debug)]
#[command(
    name = "pagewire",
    version,
    about = "Multi-page entry resolution and HTML output wiring for bundlers",
    long_about = "pagewire scans a source tree for per-page view modules, derives a unique\n\
                  entry name for each, and wires every entry to a generated HTML page that\n\
                  loads the entry chunk plus the shared vendor and manifest chunks.\n\
                  The result is a JSON build plan for an external bundler."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    ///
    /// Shows every resolved entry and the layers the configuration was
    /// loaded from.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
