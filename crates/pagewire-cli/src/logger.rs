//! Logging setup for the pagewire CLI.
//!
//! Library crates emit `tracing` events (`debug!` per resolved entry,
//! `info!` per assembled plan); this module installs the subscriber that
//! prints them.
//!
//! # Example
//!
//! ```rust,no_run
//! use pagewire_cli::logger::init_logger;
//!
//! init_logger(false, false, false);
//! tracing::info!("resolving entries");
//! ```

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const VERBOSE_FILTER: &str = "pagewire=debug,pagewire_config=debug,pagewire_cli=debug";
const QUIET_FILTER: &str = "pagewire=error,pagewire_config=error,pagewire_cli=error";
const DEFAULT_FILTER: &str = "pagewire=info,pagewire_config=info,pagewire_cli=info";

/// Pick the filter for the given flags.
///
/// Order: `--verbose`, then `--quiet`, then `RUST_LOG`, then info level for
/// the pagewire crates.
pub fn filter_for(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Initialize the tracing subscriber. Call once, before any logging.
///
/// Logs go to stderr so a plan printed on stdout stays machine-readable.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    init_logger_with_filter(filter_for(verbose, quiet), no_color);
}

/// Initialize the tracing subscriber with a custom filter.
pub fn init_logger_with_filter(filter: EnvFilter, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color && should_use_colors())
        .compact();

    // a second init (tests, embedding) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

/// Whether stderr should get ANSI colors.
///
/// `NO_COLOR` disables colors, `FORCE_COLOR` forces them, otherwise the
/// terminal decides.
pub fn should_use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }
    console::Term::stderr().features().colors_supported()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_filters_parse() {
        for directives in [VERBOSE_FILTER, QUIET_FILTER, DEFAULT_FILTER] {
            assert!(EnvFilter::try_new(directives).is_ok(), "{directives}");
        }
    }

    #[test]
    #[serial]
    fn test_verbose_wins_over_rust_log() {
        unsafe {
            std::env::set_var("RUST_LOG", "off");
        }
        let filter = filter_for(true, false);
        unsafe {
            std::env::remove_var("RUST_LOG");
        }
        assert!(filter.to_string().contains("pagewire=debug"));
    }

    #[test]
    #[serial]
    fn test_no_color_overrides_force_color() {
        unsafe {
            std::env::set_var("NO_COLOR", "1");
            std::env::set_var("FORCE_COLOR", "1");
        }
        let colors = should_use_colors();
        unsafe {
            std::env::remove_var("NO_COLOR");
            std::env::remove_var("FORCE_COLOR");
        }
        assert!(!colors);
    }

    #[test]
    #[serial]
    fn test_force_color() {
        unsafe {
            std::env::remove_var("NO_COLOR");
            std::env::set_var("FORCE_COLOR", "1");
        }
        let colors = should_use_colors();
        unsafe {
            std::env::remove_var("FORCE_COLOR");
        }
        assert!(colors);
    }
}
