//! Clean command implementation.

use crate::cli::CleanArgs;
use crate::commands::utils;
use crate::config;
use crate::error::Result;
use crate::ui;
use serde_json::json;

/// Execute the clean command.
///
/// Removes what the configured clean targets match (everything under the
/// output root by default). Refuses to touch anything outside the project.
/// Does nothing when `optimize.clean.enabled` is false unless `--force` is
/// given.
pub async fn execute(args: CleanArgs) -> Result<()> {
    let loaded = config::load(&args.config, json!({}))?;
    let root = &loaded.project_root;
    let clean = &loaded.config.optimize.clean;

    if !clean.enabled && !args.force {
        ui::info("Cleaning is disabled (optimize.clean.enabled = false); pass --force to clean anyway");
        return Ok(());
    }

    let output_root = root.join(&loaded.config.output.output_root);
    utils::check_clean_target(&output_root, root)?;

    let dry_run = args.dry_run || clean.dry;
    let targets = pagewire::clean_targets(&loaded.config);
    let removed = utils::clean_targets(root, &targets, dry_run)?;

    if clean.verbose || dry_run {
        let verb = if dry_run { "Would remove" } else { "Removed" };
        for path in &removed {
            ui::info(&format!("{} {}", verb, config::display_path(path, root)));
        }
    }

    match (removed.len(), dry_run) {
        (0, _) => ui::info("Nothing to clean"),
        (n, true) => ui::success(&format!("{} path(s) would be removed (dry run)", n)),
        (n, false) => ui::success(&format!("Removed {} path(s)", n)),
    }
    Ok(())
}
