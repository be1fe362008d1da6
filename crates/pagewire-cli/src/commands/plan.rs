//! Plan command implementation.

use crate::cli::PlanArgs;
use crate::commands::utils;
use crate::config;
use crate::error::Result;
use crate::ui;
use pagewire::BuildPlan;
use std::time::Instant;

/// Execute the plan command.
///
/// 1. Load configuration (defaults, file, profile, env, flags)
/// 2. Resolve entries and bind one page per entry
/// 3. Print the plan to stdout, or write it to `--output`
///
/// Nothing is printed to stdout when any step fails.
pub async fn execute(args: PlanArgs) -> Result<()> {
    let start = Instant::now();
    let loaded = config::load(&args.config, config::plan_overrides(&args))?;

    if let Some(source) = &loaded.source {
        ui::debug(&format!(
            "Using config {}",
            config::display_path(source, &loaded.project_root)
        ));
    }

    let plan = BuildPlan::assemble(&loaded.config, &loaded.project_root)?
        .with_profile(loaded.profile.clone());
    let json = plan.to_json_pretty()?;

    match &args.output {
        Some(output) => {
            let path = utils::resolve_path(output, &utils::get_cwd()?);
            utils::write_file(&path, &json).await?;
            ui::print_plan_summary(&plan, start.elapsed());
            ui::success(&format!("Plan written to {}", path.display()));
        }
        None => println!("{}", json),
    }

    Ok(())
}
