//! Text rendering of a report
//!
//! `render` produces the plain message body sent to the sink.
//! `print_summary` writes a short colored recap for the terminal.

use super::Report;
use crate::domain::UpdateOutcome;
use colored::Colorize;
use std::io::Write;

/// Prefix of every outcome whose declared version is ahead of upstream
pub const REGRESSION_MARKER: &str = "⚠️ PACKAGE RETROCEDED ! ";

/// Body line used when no outcome was collected
pub const NO_UPDATES_LINE: &str = "No new versions found.";

/// Options for rendering the delivered report
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Line placed before the header (e.g. a role mention)
    pub mention: Option<String>,
}

fn outcome_line(outcome: &UpdateOutcome) -> String {
    let marker = if outcome.is_regression {
        REGRESSION_MARKER
    } else {
        ""
    };
    format!("{}- {}", marker, outcome)
}

/// Render the report as newline-separated text
pub fn render(report: &Report, options: &RenderOptions) -> String {
    let mut lines = Vec::with_capacity(report.len() + 2);

    if let Some(mention) = &options.mention {
        lines.push(mention.clone());
    }
    lines.push(format!(
        "# Repository Checklist [{}]",
        report.date().format("%d %B %Y")
    ));

    if report.is_empty() {
        lines.push(NO_UPDATES_LINE.to_string());
    } else {
        lines.extend(report.outcomes().iter().map(outcome_line));
    }

    lines.join("\n")
}

/// Write a colored recap of the report
pub fn print_summary(report: &Report, writer: &mut dyn Write) -> std::io::Result<()> {
    if report.is_empty() {
        return writeln!(writer, "{}", NO_UPDATES_LINE.green());
    }

    for outcome in report.outcomes() {
        let name = format!("{}/{}", outcome.repo_group, outcome.package_name);
        if outcome.is_regression {
            writeln!(
                writer,
                "  {} {} {} {} {}",
                name,
                outcome.current_version.dimmed(),
                "→".dimmed(),
                outcome.latest_version.red().bold(),
                "[retroceded]".red()
            )?;
        } else {
            writeln!(
                writer,
                "  {} {} {} {}",
                name,
                outcome.current_version.dimmed(),
                "→".dimmed(),
                outcome.latest_version.bright_white().bold()
            )?;
        }
    }

    let updates = report.updates().count();
    let regressions = report.regressions().count();
    writeln!(
        writer,
        "\n{} update(s) available, {} retroceded",
        updates.to_string().green(),
        regressions.to_string().red()
    )
}
