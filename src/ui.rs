//! Terminal output formatting.
//!
//! Pure formatting functions: data in, styled lines out. No prompts and no
//! decisions are made here.

use crate::advisory::Advisory;
use crate::config::SignalsConfig;
use crate::policy::ActivationDecision;
use console::style;
use std::collections::HashSet;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display an advisory to the user.
///
/// # Arguments
/// * `advisory` - The advisory to display
pub fn display_advisory(advisory: &Advisory) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), advisory);
}

/// Display a version translation (or passthrough).
///
/// Shows either:
/// - If translated: "From: source -> To: target"
/// - If unchanged: the version as-is
///
/// # Arguments
/// * `source` - The version string handed in
/// * `target` - The translated version string
pub fn display_translation(source: &str, target: &str) {
    if source == target {
        println!("{}", style("Version unchanged:").bold());
        println!("  {}", style(target).green());
    } else {
        println!("{}", style("Version translation:").bold());
        println!("  From: {}", style(source).red());
        println!("  To:   {}", style(target).green());
    }
}

/// Display an activation decision with the signals that drove it.
///
/// # Arguments
/// * `decision` - The evaluated decision
pub fn display_decision(decision: &ActivationDecision) {
    if decision.active {
        display_success(&format!(
            "Python packaging step: {}",
            style("ACTIVE").green().bold()
        ));
        println!("{}", style("Matched signals:").bold());
        for signal in &decision.matched {
            println!("  - {}", signal);
        }
    } else {
        display_status(&format!(
            "Python packaging step: {}",
            style("SKIPPED").yellow().bold()
        ));
        println!("  No activation signal present.");
    }
}

/// Display the configured signals and whether each is currently set.
///
/// # Arguments
/// * `signals` - Configured signal names
/// * `present` - Environment names observed to be set
pub fn display_signal_overview(signals: &SignalsConfig, present: &HashSet<String>) {
    println!("{}", style("Configured activation signals:").bold());

    println!("  {}:", style("one-time build flag").underlined());
    println!("    {} (pass --once to supply it)", signals.build_flag);

    println!("  {}:", style("local environment").underlined());
    for name in &signals.local_env {
        println!("    {} [{}]", name, presence(present.contains(name)));
    }

    println!("  {}:", style("CI indicators").underlined());
    for name in &signals.ci_env {
        println!("    {} [{}]", name, presence(present.contains(name)));
    }
}

fn presence(set: bool) -> console::StyledObject<&'static str> {
    if set {
        style("set").green()
    } else {
        style("not set").dim()
    }
}
