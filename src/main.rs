use anyhow::Result;
use clap::{Parser, Subcommand};
use std::collections::HashSet;

use py_publish::advisory::{self, Advisory};
use py_publish::config::{self, Config};
use py_publish::env;
use py_publish::policy::ActivationPolicy;
use py_publish::translate;
use py_publish::ui;

#[derive(Parser)]
#[command(
    name = "py-publish",
    version,
    about = "Version and gate Python binding packages built alongside a JVM artifact"
)]
struct Args {
    /// Custom configuration file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Translate a source version into its Python package version
    Translate {
        /// Source version string, e.g. 0.0.1-SNAPSHOT
        source: String,
    },
    /// Decide whether the Python packaging step should run
    #[command(after_help = "Exit codes: 0 = run the step, 1 = skip it, 2 = error")]
    Gate {
        /// Request a one-time build regardless of environment
        #[arg(long)]
        once: bool,

        /// Treat NAME as a present signal (repeatable)
        #[arg(long = "signal", value_name = "NAME")]
        signals: Vec<String>,

        /// Suppress explanation; communicate through the exit code only
        #[arg(short, long)]
        quiet: bool,
    },
    /// Report the translated version and the gate decision together
    Plan {
        /// Source version string, e.g. 0.0.1-SNAPSHOT
        source: String,

        /// Request a one-time build regardless of environment
        #[arg(long)]
        once: bool,

        /// Treat NAME as a present signal (repeatable)
        #[arg(long = "signal", value_name = "NAME")]
        signals: Vec<String>,
    },
    /// Show the configured signals and their current presence
    Signals,
}

fn main() -> Result<()> {
    let args = Args::parse();

    match args.command {
        Command::Translate { source } => run_translate(args.config.as_deref(), &source),
        Command::Gate {
            once,
            signals,
            quiet,
        } => run_gate(args.config.as_deref(), once, signals, quiet),
        Command::Plan {
            source,
            once,
            signals,
        } => run_plan(args.config.as_deref(), &source, once, signals),
        Command::Signals => run_signals(args.config.as_deref()),
    }
}

fn load_config_or_exit(config_path: Option<&str>) -> Config {
    match config::load_config(config_path) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(2);
        }
    }
}

/// Merge environment signals with the ones supplied on the command line.
fn collect_signals(config: &Config, once: bool, extra: Vec<String>) -> HashSet<String> {
    let mut present = env::scan_environment(&config.signals);
    if once {
        present.insert(config.signals.build_flag.clone());
    }
    present.extend(extra);
    present
}

fn run_translate(config_path: Option<&str>, source: &str) -> Result<()> {
    let config = load_config_or_exit(config_path);
    let target = translate::translate(source);

    // Advisories go to stderr so the translated version stays pipe-friendly
    if config.behavior.warn_nonstandard {
        for advisory in advisory::inspect_version(source) {
            ui::display_advisory(&advisory);
        }
    }

    println!("{}", target);
    Ok(())
}

fn run_gate(config_path: Option<&str>, once: bool, extra: Vec<String>, quiet: bool) -> Result<()> {
    let config = load_config_or_exit(config_path);
    let policy = ActivationPolicy::new(config.signals.clone());

    let present = collect_signals(&config, once, extra);
    let decision = policy.evaluate(&present);

    if !quiet {
        ui::display_decision(&decision);
        for name in &decision.unrecognized {
            ui::display_advisory(&Advisory::UnknownSignal { name: name.clone() });
        }
    }

    std::process::exit(if decision.active { 0 } else { 1 });
}

fn run_plan(
    config_path: Option<&str>,
    source: &str,
    once: bool,
    extra: Vec<String>,
) -> Result<()> {
    let config = load_config_or_exit(config_path);
    let target = translate::translate(source);

    ui::display_translation(source, &target);
    if config.behavior.warn_nonstandard {
        for advisory in advisory::inspect_version(source) {
            ui::display_advisory(&advisory);
        }
    }

    let policy = ActivationPolicy::new(config.signals.clone());
    let present = collect_signals(&config, once, extra);
    let decision = policy.evaluate(&present);

    println!();
    ui::display_decision(&decision);
    for name in &decision.unrecognized {
        ui::display_advisory(&Advisory::UnknownSignal { name: name.clone() });
    }

    Ok(())
}

fn run_signals(config_path: Option<&str>) -> Result<()> {
    let config = load_config_or_exit(config_path);
    let present = env::scan_environment(&config.signals);
    ui::display_signal_overview(&config.signals, &present);
    Ok(())
}
