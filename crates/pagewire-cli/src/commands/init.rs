//! Init command implementation.
//!
//! Writes a starter `pagewire.toml` (or `pagewire.json`), and optionally the
//! JSON schema of the config next to it.

use crate::cli::{ConfigFormat, InitArgs};
use crate::commands::utils;
use crate::error::{ConfigError, Result};
use crate::ui;
use pagewire_config::{ConfigDiscovery, PagewireConfig};

/// File name of the schema written by `init --schema`.
pub const SCHEMA_FILE: &str = "pagewire.schema.json";

/// Execute the init command.
///
/// # Errors
///
/// Returns `ConfigError::AlreadyExists` when the file exists and `--force`
/// was not given.
pub async fn execute(args: InitArgs) -> Result<()> {
    let cwd = utils::get_cwd()?;
    let root = utils::resolve_project_root(args.cwd.as_deref(), &cwd)?;
    let path = root.join(args.format.file_name());

    let schema_path = root.join(SCHEMA_FILE);
    for target in std::iter::once(&path).chain(args.schema.then_some(&schema_path)) {
        if target.exists() && !args.force {
            return Err(ConfigError::AlreadyExists(target.clone()).into());
        }
    }

    // discovery prefers pagewire.toml, so a new json file can be shadowed
    if args.format == ConfigFormat::Json {
        if let Some(existing) = ConfigDiscovery::new(&root)
            .find()
            .filter(|existing| existing.ends_with(ConfigFormat::Toml.file_name()))
        {
            ui::warning(&format!(
                "{} already exists and takes precedence during discovery",
                existing.display()
            ));
        }
    }

    let contents = match args.format {
        ConfigFormat::Toml => PagewireConfig::example_toml(),
        ConfigFormat::Json => PagewireConfig::example_json(),
    };
    utils::write_file(&path, &contents).await?;
    ui::success(&format!("Created {}", path.display()));

    if args.schema {
        let schema = format!("{:#}\n", PagewireConfig::json_schema());
        utils::write_file(&schema_path, &schema).await?;
        ui::success(&format!("Created {}", schema_path.display()));
    }

    print_next_steps();
    Ok(())
}

fn print_next_steps() {
    eprintln!();
    eprintln!("Next steps:");
    eprintln!("  1. Put one view module per page under src/views/, with an .html template next to it");
    eprintln!("  2. pagewire check");
    eprintln!("  3. pagewire plan -o plan.json");
}
