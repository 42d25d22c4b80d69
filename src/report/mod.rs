//! Rendering of audit results.

mod text;

use serde::Serialize;
use std::io::Write;

use crate::audit::{CatalogScan, Category, Finding, SweepResult};
use crate::error::Result;

pub use text::TextReporter;

/// Findings of one category, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryFindings {
    pub category: Category,
    pub name: &'static str,
    pub findings: Vec<Finding>,
}

/// Everything one audit run produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditReport {
    /// Whether the audit ran as root
    pub privileged: bool,
    pub min_report_bytes: u64,
    pub categories: Vec<CategoryFindings>,
    pub sweeps: Vec<SweepResult>,
    /// SAFE findings only; sweeps are not included
    pub reclaimable_safe_bytes: u64,
}

impl AuditReport {
    pub fn new(
        privileged: bool,
        min_report_bytes: u64,
        scan: CatalogScan,
        sweeps: Vec<SweepResult>,
    ) -> Self {
        let CatalogScan {
            findings,
            reclaimable_safe_bytes,
        } = scan;

        let mut categories: Vec<CategoryFindings> = Category::ALL
            .iter()
            .map(|category| CategoryFindings {
                category: *category,
                name: category.name(),
                findings: Vec::new(),
            })
            .collect();

        for finding in findings {
            if let Some(group) = categories.iter_mut().find(|g| g.category == finding.category) {
                group.findings.push(finding);
            }
        }

        Self {
            privileged,
            min_report_bytes,
            categories,
            sweeps,
            reclaimable_safe_bytes,
        }
    }

    pub fn finding_count(&self) -> usize {
        self.categories.iter().map(|c| c.findings.len()).sum()
    }
}

/// Write the report as pretty-printed JSON.
pub fn write_json<W: Write>(mut out: W, report: &AuditReport) -> Result<()> {
    serde_json::to_writer_pretty(&mut out, report)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::SafetyTier;
    use std::path::PathBuf;

    fn finding(category: Category, label: &str, size: u64, tier: SafetyTier) -> Finding {
        Finding {
            category,
            label: label.to_string(),
            path: PathBuf::from(format!("/x/{}", label)),
            size_bytes: size,
            tier,
            advisory: String::new(),
        }
    }

    fn sample_scan() -> CatalogScan {
        CatalogScan {
            findings: vec![
                finding(Category::PackageManagers, "npm", 10, SafetyTier::Safe),
                finding(Category::PackageManagers, "gradle", 20, SafetyTier::Caution),
                finding(Category::TrashMisc, "Trash", 30, SafetyTier::Caution),
            ],
            reclaimable_safe_bytes: 10,
        }
    }

    #[test]
    fn groups_findings_by_category_in_order() {
        let report = AuditReport::new(false, 1, sample_scan(), vec![]);

        assert_eq!(report.categories.len(), Category::ALL.len());
        assert_eq!(report.categories[0].name, "Docker");
        assert!(report.categories[0].findings.is_empty());

        let pm = &report.categories[1];
        assert_eq!(pm.category, Category::PackageManagers);
        let labels: Vec<_> = pm.findings.iter().map(|f| f.label.as_str()).collect();
        assert_eq!(labels, vec!["npm", "gradle"]);

        assert_eq!(report.finding_count(), 3);
        assert_eq!(report.reclaimable_safe_bytes, 10);
    }

    #[test]
    fn json_output_is_parseable() {
        let report = AuditReport::new(true, 1, sample_scan(), vec![]);
        let mut buf = Vec::new();
        write_json(&mut buf, &report).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["reclaimable_safe_bytes"], 10);
        assert_eq!(value["privileged"], true);
        assert_eq!(value["categories"][1]["name"], "Package Managers");
        assert_eq!(value["categories"][1]["findings"][0]["tier"], "SAFE");
        assert_eq!(value["categories"][1]["findings"][1]["tier"], "CAUTION");
    }
}
