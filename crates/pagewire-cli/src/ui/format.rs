//! Formatting for durations and build plan summaries.

use console::Term;
use owo_colors::{OwoColorize, Stream::Stderr};
use pagewire::{BuildPlan, HtmlRegistration};
use std::time::Duration;

/// Format duration in human-readable form.
///
/// ```
/// use std::time::Duration;
/// use pagewire_cli::ui::format_duration;
///
/// assert_eq!(format_duration(Duration::from_millis(50)), "50ms");
/// assert_eq!(format_duration(Duration::from_millis(1500)), "1.50s");
/// assert_eq!(format_duration(Duration::from_secs(90)), "1m 30s");
/// ```
pub fn format_duration(duration: Duration) -> String {
    let total_ms = duration.as_millis();

    if total_ms < 1000 {
        format!("{}ms", total_ms)
    } else if total_ms < 60_000 {
        format!("{:.2}s", duration.as_secs_f64())
    } else {
        let secs = duration.as_secs();
        format!("{}m {}s", secs / 60, secs % 60)
    }
}

/// One summary line: `template -> filename [chunks]`, uncolored.
///
/// ```
/// use pagewire::HtmlRegistration;
/// use pagewire_cli::ui::format_page_line;
///
/// let page = HtmlRegistration {
///     template: "src/views/home/index.html".to_string(),
///     filename: "views/home/index.html".to_string(),
///     chunks: ["home/index".to_string(), "vendor".to_string(), "manifest".to_string()],
/// };
/// assert_eq!(
///     format_page_line(&page),
///     "src/views/home/index.html -> views/home/index.html [home/index, vendor, manifest]"
/// );
/// ```
pub fn format_page_line(page: &HtmlRegistration) -> String {
    format!(
        "{} -> {} [{}]",
        page.template,
        page.filename,
        page.chunks.join(", ")
    )
}

/// Print the entries and pages of a plan to stderr.
pub fn print_plan_summary(plan: &BuildPlan, elapsed: Duration) {
    let rule = "─".repeat((Term::stderr().size().1 as usize).clamp(20, 80));

    eprintln!(
        "\n{}",
        "Build Plan".if_supports_color(Stderr, |s| s.bold().underline().to_string())
    );
    eprintln!("{}", rule);

    for page in &plan.html {
        eprintln!(
            "  {} {} {}",
            "▸".if_supports_color(Stderr, |s| s.blue()),
            page.chunks[0].if_supports_color(Stderr, |s| s.bright_white().bold().to_string()),
            format!("-> {} ({})", page.filename, page.template)
                .if_supports_color(Stderr, |s| s.dimmed())
        );
    }

    eprintln!("{}", rule);
    eprintln!(
        "  {} {} entries, {} plugins in {}",
        "Total:".if_supports_color(Stderr, |s| s.bold()),
        plan.entry.len(),
        plan.plugins.len(),
        format_duration(elapsed).if_supports_color(Stderr, |s| s.green())
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration_milliseconds() {
        assert_eq!(format_duration(Duration::from_millis(0)), "0ms");
        assert_eq!(format_duration(Duration::from_millis(999)), "999ms");
    }

    #[test]
    fn test_format_duration_seconds() {
        assert_eq!(format_duration(Duration::from_millis(1000)), "1.00s");
        assert_eq!(format_duration(Duration::from_millis(59_999)), "60.00s");
    }

    #[test]
    fn test_format_duration_minutes() {
        assert_eq!(format_duration(Duration::from_secs(60)), "1m 0s");
        assert_eq!(format_duration(Duration::from_secs(125)), "2m 5s");
    }
}
