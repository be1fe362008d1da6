use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::cli::enums::*;
use crate::cli::validation::parse_root_marker;

/// Available pagewire subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve entries and emit the build plan as JSON
    ///
    /// Scans for entry scripts, derives entry names, binds one HTML page per
    /// entry and lists the production plugin pipeline.
    Plan(PlanArgs),

    /// Validate configuration and entry discovery without emitting a plan
    Check(CheckArgs),

    /// Remove previous build output from the output root
    Clean(CleanArgs),

    /// Write a starter configuration file
    Init(InitArgs),
}

/// Options shared by every command that loads configuration
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Configuration file (defaults to pagewire.toml, pagewire.json or the
    /// "pagewire" field of package.json in the project root)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Profile from the config's `profiles` table to merge onto the base
    #[arg(short, long, value_name = "NAME")]
    pub profile: Option<String>,

    /// Project root (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    pub cwd: Option<PathBuf>,
}

/// Arguments for the plan command
#[derive(Args, Debug, Clone, Default)]
pub struct PlanArgs {
    /// Glob selecting entry scripts, relative to the project root
    ///
    /// Examples:
    ///   pagewire plan 'src/views/**/*.js'
    ///   pagewire plan 'src/pages/*/main.js' --naming directory
    #[arg(value_name = "PATTERN")]
    pub pattern: Option<String>,

    #[command(flatten)]
    pub config: ConfigArgs,

    /// How entry names are derived from file paths
    #[arg(long, value_enum)]
    pub naming: Option<Naming>,

    /// Path segment after which HTML output paths begin
    #[arg(long, value_name = "SEGMENT", value_parser = parse_root_marker)]
    pub root_marker: Option<String>,

    /// Output root for the bundler, relative to the project root
    #[arg(short = 'd', long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// URL prefix for emitted assets
    #[arg(long, value_name = "URL")]
    pub public_path: Option<String>,

    /// Write the plan to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Arguments for the check command
#[derive(Args, Debug, Clone, Default)]
pub struct CheckArgs {
    #[command(flatten)]
    pub config: ConfigArgs,
}

/// Arguments for the clean command
#[derive(Args, Debug, Clone, Default)]
pub struct CleanArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// List what would be removed without removing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Clean even when optimize.clean.enabled is false
    #[arg(short, long)]
    pub force: bool,
}

/// Arguments for the init command
#[derive(Args, Debug, Clone, Default)]
pub struct InitArgs {
    /// Overwrite an existing config file
    #[arg(short, long)]
    pub force: bool,

    /// Directory to write the config into (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    pub cwd: Option<PathBuf>,

    /// Config file format
    #[arg(long, value_enum, default_value = "toml")]
    pub format: ConfigFormat,

    /// Also write pagewire.schema.json for editor completion
    #[arg(long)]
    pub schema: bool,
}
