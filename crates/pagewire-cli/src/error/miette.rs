//! Miette diagnostic conversion for CLI errors.

use crate::error::{BuildError, CliError, ConfigError};
use miette::Report;

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Build(e) => build_error_to_miette(e),
        CliError::Config(e) => config_error_to_miette(e),
        _ => miette::miette!("{}", err),
    }
}

/// Convert BuildError to miette Report
pub fn build_error_to_miette(err: BuildError) -> Report {
    match err {
        // the core error carries its own code and help
        BuildError::Plan(e) => Report::new(e),
        other => miette::miette!("{}", other),
    }
}

/// Convert ConfigError to miette Report
pub fn config_error_to_miette(err: ConfigError) -> Report {
    match err {
        ConfigError::Load(pagewire_config::ConfigError::SchemaValidation { message, hint }) => {
            match hint {
                Some(hint) => miette::miette!(
                    code = "INVALID_CONFIG",
                    help = hint,
                    "Invalid configuration: {}",
                    message
                ),
                None => miette::miette!(code = "INVALID_CONFIG", "Invalid configuration: {}", message),
            }
        }
        ConfigError::Load(e) => miette::miette!(
            code = "CONFIG_LOAD",
            help = "Check pagewire.toml and PAGEWIRE_* environment variables",
            "Configuration error: {}",
            e
        ),
        other => miette::miette!("Configuration error: {}", other),
    }
}
