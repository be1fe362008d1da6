//! Command implementations for the pagewire CLI.
//!
//! - [`plan`] - Emit the build plan
//! - [`check`] - Validate configuration and entries
//! - [`clean`] - Empty the output root
//! - [`init`] - Write a starter config
//!
//! Each command provides an `execute` function that takes the parsed
//! arguments and returns a Result.

pub mod check;
pub mod clean;
pub mod init;
pub mod plan;
pub mod utils;

pub use check::execute as check_execute;
pub use clean::execute as clean_execute;
pub use init::execute as init_execute;
pub use plan::execute as plan_execute;
