//! pagewire CLI - build plans for multi-page bundler setups.
//!
//! # Architecture
//!
//! - [`cli`] - Argument definitions (clap derive)
//! - [`commands`] - `plan`, `check`, `clean` and `init`
//! - [`config`] - Layered configuration loading for commands
//! - [`error`] - CLI error types with actionable hints
//! - [`logger`] - `tracing` subscriber setup
//! - [`ui`] - Status lines and plan summaries on stderr
//!
//! # Example
//!
//! ```rust,no_run
//! use pagewire_cli::cli::PlanArgs;
//! use pagewire_cli::commands::plan_execute;
//!
//! # async fn run() -> pagewire_cli::Result<()> {
//! pagewire_cli::logger::init_logger(false, false, false);
//! plan_execute(PlanArgs::default()).await?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{BuildError, CliError, ConfigError, Result, ResultExt};
