//! Check command implementation.
//!
//! Validates configuration and entry discovery without emitting a plan.

use crate::cli::CheckArgs;
use crate::config;
use crate::error::{BuildError, Result};
use crate::ui;
use pagewire::BuildPlan;
use serde_json::json;

/// Execute the check command.
///
/// # Validation Steps
///
/// 1. Load and validate configuration
/// 2. Validate filename templates
/// 3. Resolve entries and bind pages
/// 4. Check that every page template exists
pub async fn execute(args: CheckArgs) -> Result<()> {
    ui::info("Checking configuration...");
    let loaded = config::load(&args.config, json!({}))?;

    match &loaded.source {
        Some(source) => ui::success(&format!(
            "Configuration is valid ({})",
            config::display_path(source, &loaded.project_root)
        )),
        None => ui::warning("No pagewire config found, using defaults"),
    }
    if let Some(profile) = &loaded.profile {
        ui::info(&format!("Profile: {}", profile));
    }

    ui::info(&format!("Resolving entries for '{}'...", loaded.config.entries.pattern));
    let plan = BuildPlan::assemble(&loaded.config, &loaded.project_root)?;
    ui::success(&format!(
        "{} entries, {} pages, {} plugins",
        plan.entry.len(),
        plan.html.len(),
        plan.plugins.len()
    ));

    let missing: Vec<_> = plan
        .html
        .iter()
        .filter(|page| !loaded.project_root.join(&page.template).is_file())
        .collect();
    for page in &missing {
        ui::error(&format!("Template not found: {}", page.template));
    }
    if !missing.is_empty() {
        return Err(BuildError::MissingTemplates {
            count: missing.len(),
        }
        .into());
    }

    for page in &plan.html {
        ui::debug(&ui::format_page_line(page));
    }

    ui::success("All checks passed!");
    Ok(())
}
