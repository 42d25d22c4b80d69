use crossterm::style::{style, Color, Stylize};
use std::io::{self, Write};

use super::{AuditReport, CategoryFindings};
use crate::audit::{Finding, SafetyTier, SweepResult, CLEANUP_COMMANDS};
use crate::scanner::format_size;

const LABEL_WIDTH: usize = 30;
const SIZE_WIDTH: usize = 10;

/// Human-readable report writer.
pub struct TextReporter<W: Write> {
    out: W,
    color: bool,
}

impl<W: Write> TextReporter<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Render the full report: header, categories, sweeps, then the summary.
    pub fn render(&mut self, report: &AuditReport) -> io::Result<()> {
        self.render_header(report.privileged)?;
        for group in &report.categories {
            self.render_category(group, report.min_report_bytes)?;
        }
        for sweep in &report.sweeps {
            self.render_sweep(sweep)?;
        }
        self.render_summary(report.reclaimable_safe_bytes)
    }

    pub fn render_header(&mut self, privileged: bool) -> io::Result<()> {
        self.heading("Cache audit", '=')?;
        if !privileged {
            let note = "Note: not running as root. Paths you cannot read are measured \
                        partially; elevated privileges improve accuracy.";
            writeln!(self.out, "{}", paint(self.color, note, Color::Yellow))?;
        }
        writeln!(self.out)
    }

    pub fn render_category(
        &mut self,
        group: &CategoryFindings,
        min_report_bytes: u64,
    ) -> io::Result<()> {
        self.heading(group.name, '-')?;
        if group.findings.is_empty() {
            writeln!(self.out, "  Nothing over {}.", format_size(min_report_bytes))?;
        }
        for finding in &group.findings {
            self.render_finding(finding)?;
        }
        writeln!(self.out)
    }

    fn render_finding(&mut self, finding: &Finding) -> io::Result<()> {
        let size = format!("{:>width$}", format_size(finding.size_bytes), width = SIZE_WIDTH);
        let badge = format!("[{}]", finding.tier);
        writeln!(
            self.out,
            "  {:<width$} {}  {}",
            finding.label,
            bold(self.color, &size),
            paint(self.color, &badge, tier_color(finding.tier)),
            width = LABEL_WIDTH
        )?;
        writeln!(self.out, "      {}", finding.path.display())?;
        if !finding.advisory.is_empty() {
            writeln!(self.out, "      {}", paint(self.color, &finding.advisory, Color::DarkGrey))?;
        }
        Ok(())
    }

    pub fn render_sweep(&mut self, sweep: &SweepResult) -> io::Result<()> {
        self.heading(sweep.title, '-')?;
        writeln!(self.out, "  Searched {}", sweep.root.display())?;

        if sweep.top.is_empty() {
            writeln!(self.out, "  Nothing over {}.", format_size(sweep.min_bytes))?;
            return writeln!(self.out);
        }

        for found in &sweep.top {
            let size = format!("{:>width$}", format_size(found.size_bytes), width = SIZE_WIDTH);
            writeln!(self.out, "  {}  {}", bold(self.color, &size), found.path.display())?;
        }

        let noun = if sweep.retained_count == 1 {
            "directory"
        } else {
            "directories"
        };
        writeln!(
            self.out,
            "  Total: {} across {} {}, top {} shown",
            bold(self.color, &format_size(sweep.total_bytes)),
            sweep.retained_count,
            noun,
            sweep.top.len()
        )?;
        writeln!(self.out)
    }

    pub fn render_summary(&mut self, reclaimable_safe_bytes: u64) -> io::Result<()> {
        self.heading("Summary", '=')?;
        let total = format_size(reclaimable_safe_bytes);
        writeln!(
            self.out,
            "  Reclaimable now (SAFE items): {}",
            paint(self.color, &total, Color::Green)
        )?;
        writeln!(
            self.out,
            "  CAUTION and REVIEW items are not included in this total. Check them before deleting."
        )?;
        writeln!(self.out)?;

        self.heading("Cleanup commands", '-')?;
        for cmd in CLEANUP_COMMANDS {
            writeln!(
                self.out,
                "  {:<14} {}",
                cmd.tool,
                paint(self.color, cmd.command, Color::Cyan)
            )?;
        }
        Ok(())
    }

    fn heading(&mut self, title: &str, underline: char) -> io::Result<()> {
        let rule: String = std::iter::repeat(underline)
            .take(title.chars().count())
            .collect();
        writeln!(self.out, "{}", bold(self.color, title))?;
        writeln!(self.out, "{}", rule)
    }
}

fn paint(enabled: bool, text: &str, color: Color) -> String {
    if enabled {
        style(text).with(color).to_string()
    } else {
        text.to_string()
    }
}

fn bold(enabled: bool, text: &str) -> String {
    if enabled {
        style(text).bold().to_string()
    } else {
        text.to_string()
    }
}

fn tier_color(tier: SafetyTier) -> Color {
    match tier {
        SafetyTier::Safe => Color::Green,
        SafetyTier::Caution => Color::Yellow,
        SafetyTier::Review => Color::Red,
    }
}
