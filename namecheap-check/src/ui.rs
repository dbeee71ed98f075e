//! Display logic for the namecheap-check CLI.
//!
//! Renders the aggregate as three sections (ERRORS when any, then
//! AVAILABLE, then TAKEN) followed by a summary bar. Uses only the
//! `console` crate, which degrades to plain text when stdout is not a
//! terminal.

use console::style;
use namecheap_check_lib::{AggregateResult, CheckError, DomainEntry};
use std::time::Duration;

/// Print the aggregate result as text sections.
pub fn print_results(result: &AggregateResult, show_premium: bool) {
    print!("{}", render_results(result, show_premium));
}

/// Print the aggregate result as pretty JSON.
pub fn print_json(result: &AggregateResult) -> Result<(), CheckError> {
    let json = serde_json::to_string_pretty(result)?;
    println!("{}", json);
    Ok(())
}

/// Print the final summary bar with colored counts.
pub fn print_summary(result: &AggregateResult, duration: Duration) {
    println!(
        "  {}",
        style("────────────────────────────────────────────────────").dim()
    );
    println!(
        "  {} domain{} in {:.1}s  {}  {}  {}  {}  {}  {}",
        style(result.result_count()).bold(),
        if result.result_count() == 1 { "" } else { "s" },
        duration.as_secs_f64(),
        style("|").dim(),
        style(format!("{} available", result.available.len())).green(),
        style("|").dim(),
        style(format!("{} taken", result.taken.len())).red(),
        style("|").dim(),
        style(format!("{} error{}", result.errors.len(), if result.errors.len() == 1 { "" } else { "s" })).yellow(),
    );
}

/// Render the three result sections into one string.
fn render_results(result: &AggregateResult, show_premium: bool) -> String {
    let mut out = String::new();

    if !result.errors.is_empty() {
        out.push_str(&format!("{}\n", style("ERRORS:").yellow().bold()));
        for error in &result.errors {
            out.push_str(&format!(" - {}\n", error));
        }
        out.push('\n');
    }

    out.push_str(&format!("{}\n", style("AVAILABLE:").green().bold()));
    for entry in &result.available {
        out.push_str(&render_entry(entry, show_premium));
    }

    out.push('\n');
    out.push_str(&format!("{}\n", style("TAKEN:").red().bold()));
    for entry in &result.taken {
        out.push_str(&render_entry(entry, show_premium));
    }

    out
}

fn render_entry(entry: &DomainEntry, show_premium: bool) -> String {
    if show_premium && entry.premium {
        format!("  - {}  {}\n", entry.domain, style("(premium)").cyan())
    } else {
        format!("  - {}\n", entry.domain)
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
