//! Error handling for the pagewire CLI.
//!
//! `CliError` is the top-level type every command returns. Library errors
//! convert into it automatically, grouped under `ConfigError` (anything
//! about loading or writing configuration) and `BuildError` (anything about
//! producing or acting on a build plan).
//!
//! # Example
//!
//! ```rust,no_run
//! use pagewire_cli::error::{Result, ResultExt};
//! use std::path::Path;
//!
//! fn read_plan(path: &Path) -> Result<String> {
//!     std::fs::read_to_string(path).with_path(path)
//! }
//! ```

pub mod miette;

use std::path::PathBuf;
use thiserror::Error;

pub use self::miette::cli_error_to_miette;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration-related errors (file not found, invalid values, etc.)
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Entry resolution, plan assembly and clean errors
    #[error("Build error: {0}")]
    Build(#[from] BuildError),

    /// Invalid command-line arguments or options
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// File or directory not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// I/O errors from file system operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Explicit config file doesn't exist
    #[error("Config file not found: {}\n\nHint: Run 'pagewire init' or pass --config <path>", .0.display())]
    NotFound(PathBuf),

    /// Requested profile doesn't exist in config
    #[error("Profile '{0}' not found in config\n\nHint: Define it under [profiles.{0}] or drop --profile")]
    ProfileNotFound(String),

    /// `init` would overwrite an existing file
    #[error("Config file already exists: {}\n\nHint: Pass --force to overwrite it", .0.display())]
    AlreadyExists(PathBuf),

    /// Loading, merging or validating the layered configuration failed
    #[error("{0}")]
    Load(pagewire_config::ConfigError),
}

impl From<pagewire_config::ConfigError> for ConfigError {
    fn from(err: pagewire_config::ConfigError) -> Self {
        match err {
            pagewire_config::ConfigError::NotFound(path) => ConfigError::NotFound(path),
            pagewire_config::ConfigError::ProfileNotFound(name) => {
                ConfigError::ProfileNotFound(name)
            }
            other => ConfigError::Load(other),
        }
    }
}

/// Build plan errors.
#[derive(Debug, Error)]
pub enum BuildError {
    /// Entry resolution or plan assembly failed
    #[error("{0}")]
    Plan(#[from] pagewire::Error),

    /// Refusing to delete a path that is not a build output directory
    #[error("Refusing to clean {}: {reason}\n\nHint: Point output.output_root at a directory inside the project", .path.display())]
    UnsafeCleanTarget { path: PathBuf, reason: String },

    /// Pages whose template file does not exist
    #[error("{count} page template(s) missing\n\nHint: Add an .html file next to each entry script")]
    MissingTemplates { count: usize },

    /// Plan output file could not be written
    #[error("Cannot write plan to {}\n\nHint: Check that the parent directory exists and is writable", .0.display())]
    OutputNotWritable(PathBuf),
}

impl From<pagewire_config::ConfigError> for CliError {
    fn from(err: pagewire_config::ConfigError) -> Self {
        CliError::Config(err.into())
    }
}

impl From<pagewire::Error> for CliError {
    fn from(err: pagewire::Error) -> Self {
        match err {
            // config failures surfaced during assembly stay config errors
            pagewire::Error::Config(err) => CliError::Config(err.into()),
            other => CliError::Build(BuildError::Plan(other)),
        }
    }
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Extension trait for attaching a path to I/O failures.
pub trait ResultExt<T> {
    /// Turn a not-found I/O error into `FileNotFound(path)`.
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T>;
}

impl<T, E: Into<CliError>> ResultExt<T> for std::result::Result<T, E> {
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            match err {
                CliError::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound => {
                    CliError::FileNotFound(path.as_ref().to_path_buf())
                }
                other => other,
            }
        })
    }
}
