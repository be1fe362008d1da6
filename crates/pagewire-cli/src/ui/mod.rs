//! Terminal output for status lines and plan summaries.
//!
//! Everything here writes to stderr; stdout is reserved for the plan itself.
//!
//! ```no_run
//! use pagewire_cli::ui;
//!
//! ui::init_colors(false);
//! ui::info("Resolving entries...");
//! ui::success("Plan written to plan.json");
//! ```

mod format;
mod messages;

pub use format::{format_duration, format_page_line, print_plan_summary};
pub use messages::{debug, error, info, success, warning};

/// Configure color output for `owo-colors`.
///
/// `--no-color` turns colors off; otherwise `NO_COLOR`, `FORCE_COLOR` and
/// the terminal decide.
pub fn init_colors(no_color: bool) {
    if no_color {
        owo_colors::set_override(false);
    } else {
        owo_colors::unset_override();
    }
}
