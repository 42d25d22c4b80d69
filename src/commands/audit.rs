//! Audit command implementation

use anyhow::Result;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use nix::unistd::Uid;
use std::io::{self, IsTerminal};
use std::time::Duration;

use crate::audit::{run_sweep, scan_catalog, PathResolver, Sweep, CATALOG};
use crate::cli::Cli;
use crate::config::Config;
use crate::report::{self, AuditReport, TextReporter};
use crate::scanner::DiskUsage;

/// Run the audit and print the report to stdout.
pub fn run(cli: &Cli, config: &Config) -> Result<()> {
    let resolver = PathResolver::from_env()?;
    let root = cli
        .root
        .clone()
        .unwrap_or_else(|| resolver.home().to_path_buf());
    let measurer = DiskUsage;

    let progress = progress_spinner(!cli.json && !cli.quiet);

    progress.set_message("Measuring known cache locations");
    tracing::info!(entries = CATALOG.len(), "Scanning catalog");
    let scan = scan_catalog(
        CATALOG,
        &resolver,
        &measurer,
        config.thresholds.min_report_bytes,
    );

    let sweeps = if cli.no_sweeps {
        Vec::new()
    } else {
        Sweep::all(&config.sweeps)
            .iter()
            .map(|sweep| {
                progress.set_message(format!("Searching {} for {}", root.display(), sweep.name));
                tracing::info!(sweep = sweep.name, root = %root.display(), "Running sweep");
                run_sweep(sweep, &root, &measurer, &config.thresholds)
            })
            .collect()
    };
    progress.finish_and_clear();

    let report = AuditReport::new(
        Uid::effective().is_root(),
        config.thresholds.min_report_bytes,
        scan,
        sweeps,
    );
    tracing::debug!(findings = report.finding_count(), "Audit complete");

    let stdout = io::stdout().lock();
    if cli.json {
        report::write_json(stdout, &report)?;
    } else {
        let color = !cli.no_color && io::stdout().is_terminal();
        TextReporter::new(stdout, color).render(&report)?;
    }

    Ok(())
}

const SPINNER_TICK: Duration = Duration::from_millis(100);

fn progress_spinner(enabled: bool) -> ProgressBar {
    if !enabled || !io::stderr().is_terminal() {
        return ProgressBar::hidden();
    }
    ticking_spinner(ProgressDrawTarget::stderr())
}

/// Spinner that animates on its own while a long measurement blocks.
fn ticking_spinner(target: ProgressDrawTarget) -> ProgressBar {
    let spinner = ProgressBar::with_draw_target(None, target);
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.enable_steady_tick(SPINNER_TICK);
    spinner
}

#[cfg(test)]
mod tests {
    use super::*;
    use indicatif::InMemoryTerm;
    use std::thread;

    #[test]
    fn disabled_spinner_is_hidden() {
        assert!(progress_spinner(false).is_hidden());
    }

    #[test]
    fn spinner_draws_without_explicit_ticks() {
        let term = InMemoryTerm::new(4, 80);
        let spinner = ticking_spinner(ProgressDrawTarget::term_like(Box::new(term.clone())));

        thread::sleep(SPINNER_TICK * 4);
        let drawn = term.contents();
        spinner.finish_and_clear();

        assert!(!drawn.trim().is_empty(), "spinner never drew: {:?}", drawn);
    }
}
