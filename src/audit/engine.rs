use std::path::PathBuf;

use serde::Serialize;

use super::{CatalogEntry, Finding, PathResolver, RankedMatch, SafetyTier};
use crate::scanner::Measure;

/// Result of measuring every catalog entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CatalogScan {
    /// Findings in catalog order
    pub findings: Vec<Finding>,
    /// Sum of all SAFE findings
    pub reclaimable_safe_bytes: u64,
}

/// Measure each catalog entry in order.
///
/// Entries at or below `min_report_bytes` produce no finding and do not
/// count toward the reclaimable total.
pub fn scan_catalog<M: Measure + ?Sized>(
    entries: &[CatalogEntry],
    resolver: &PathResolver,
    measurer: &M,
    min_report_bytes: u64,
) -> CatalogScan {
    entries
        .iter()
        .fold(CatalogScan::default(), |mut scan, entry| {
            let path = resolver.resolve(entry.path);
            let size_bytes = measurer.measure(&path);

            if size_bytes <= min_report_bytes {
                tracing::debug!(label = entry.label, size_bytes, "Below report threshold");
                return scan;
            }

            if entry.tier == SafetyTier::Safe {
                scan.reclaimable_safe_bytes += size_bytes;
            }

            scan.findings.push(Finding {
                category: entry.category,
                label: entry.label.to_string(),
                path,
                size_bytes,
                tier: entry.tier,
                advisory: entry.advisory.to_string(),
            });
            scan
        })
}

/// Sweep matches that passed the size threshold.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ranking {
    /// Largest matches, descending, at most `top_n`
    pub top: Vec<RankedMatch>,
    /// Sum over every retained match, not just `top`
    pub total_bytes: u64,
    /// Number of retained matches
    pub retained_count: usize,
}

/// Measure candidates, keep those above `min_bytes`, and rank them.
///
/// Ties keep discovery order.
pub fn rank_sweep<M, I>(candidates: I, measurer: &M, min_bytes: u64, top_n: usize) -> Ranking
where
    M: Measure + ?Sized,
    I: IntoIterator<Item = PathBuf>,
{
    let mut retained: Vec<RankedMatch> = candidates
        .into_iter()
        .filter_map(|path| {
            let size_bytes = measurer.measure(&path);
            if size_bytes > min_bytes {
                Some(RankedMatch { path, size_bytes })
            } else {
                tracing::trace!(path = %path.display(), size_bytes, "Below sweep threshold");
                None
            }
        })
        .collect();

    let total_bytes = retained.iter().map(|m| m.size_bytes).sum();
    let retained_count = retained.len();

    retained.sort_by(|a, b| b.size_bytes.cmp(&a.size_bytes));
    retained.truncate(top_n);

    Ranking {
        top: retained,
        total_bytes,
        retained_count,
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::audit::Category;
    use crate::scanner::MIB;
    use std::collections::HashMap;
    use std::path::Path;

    /// Measurer backed by a fixed table; unknown paths are missing.
    #[derive(Default)]
    pub(crate) struct FixedSizes(pub HashMap<PathBuf, u64>);

    impl FixedSizes {
        pub(crate) fn with(mut self, path: &str, size: u64) -> Self {
            self.0.insert(PathBuf::from(path), size);
            self
        }
    }

    impl Measure for FixedSizes {
        fn measure(&self, path: &Path) -> u64 {
            self.0.get(path).copied().unwrap_or(0)
        }
    }

    const ENTRIES: &[CatalogEntry] = &[
        CatalogEntry::new(Category::PackageManagers, "npm", "~/.npm", SafetyTier::Safe, ""),
        CatalogEntry::new(
            Category::PackageManagers,
            "gradle",
            "~/.gradle",
            SafetyTier::Caution,
            "re-download",
        ),
        CatalogEntry::new(Category::IdeTools, "xcode", "~/xcode", SafetyTier::Safe, ""),
        CatalogEntry::new(Category::TrashMisc, "tiny", "~/tiny", SafetyTier::Safe, ""),
        CatalogEntry::new(Category::TrashMisc, "boundary", "/boundary", SafetyTier::Safe, ""),
        CatalogEntry::new(Category::TrashMisc, "missing", "~/missing", SafetyTier::Review, "x"),
    ];

    fn sizes() -> FixedSizes {
        FixedSizes::default()
            .with("/home/u/.npm", 300 * MIB)
            .with("/home/u/.gradle", 2 * 1024 * MIB)
            .with("/home/u/xcode", 5 * MIB)
            .with("/home/u/tiny", 512 * 1024)
            .with("/boundary", MIB)
    }

    #[test]
    fn test_scan_catalog_filters_and_keeps_order() {
        let resolver = PathResolver::new("/home/u");
        let scan = scan_catalog(ENTRIES, &resolver, &sizes(), MIB);

        let labels: Vec<&str> = scan.findings.iter().map(|f| f.label.as_str()).collect();
        assert_eq!(labels, vec!["npm", "gradle", "xcode"]);
        assert_eq!(scan.findings[0].path, PathBuf::from("/home/u/.npm"));
        assert_eq!(scan.findings[1].advisory, "re-download");
    }

    #[test]
    fn test_scan_catalog_total_counts_only_safe() {
        let resolver = PathResolver::new("/home/u");
        let scan = scan_catalog(ENTRIES, &resolver, &sizes(), MIB);

        let expected: u64 = scan
            .findings
            .iter()
            .filter(|f| f.tier == SafetyTier::Safe)
            .map(|f| f.size_bytes)
            .sum();
        assert_eq!(scan.reclaimable_safe_bytes, expected);
        assert_eq!(scan.reclaimable_safe_bytes, 305 * MIB);
    }

    #[test]
    fn test_scan_catalog_threshold_is_exclusive() {
        let resolver = PathResolver::new("/home/u");
        let measurer = FixedSizes::default().with("/boundary", MIB + 1);
        let scan = scan_catalog(&ENTRIES[4..5], &resolver, &measurer, MIB);
        assert_eq!(scan.findings.len(), 1);
        assert_eq!(scan.reclaimable_safe_bytes, MIB + 1);

        let measurer = FixedSizes::default().with("/boundary", MIB);
        let scan = scan_catalog(&ENTRIES[4..5], &resolver, &measurer, MIB);
        assert!(scan.findings.is_empty());
        assert_eq!(scan.reclaimable_safe_bytes, 0);
    }

    #[test]
    fn test_scan_catalog_is_repeatable() {
        let resolver = PathResolver::new("/home/u");
        let measurer = sizes();
        assert_eq!(
            scan_catalog(ENTRIES, &resolver, &measurer, MIB),
            scan_catalog(ENTRIES, &resolver, &measurer, MIB)
        );
    }

    #[test]
    fn test_scan_catalog_empty() {
        let resolver = PathResolver::new("/home/u");
        let scan = scan_catalog(&[], &resolver, &sizes(), MIB);
        assert!(scan.findings.is_empty());
        assert_eq!(scan.reclaimable_safe_bytes, 0);
    }

    #[test]
    fn test_rank_sweep_filters_and_sorts() {
        let measurer = FixedSizes::default()
            .with("/r/a", 10 * MIB)
            .with("/r/b", 60 * MIB)
            .with("/r/c", 200 * MIB);
        let candidates = ["/r/a", "/r/b", "/r/c"].map(PathBuf::from);

        let ranking = rank_sweep(candidates, &measurer, 50 * MIB, 10);

        let sizes: Vec<u64> = ranking.top.iter().map(|m| m.size_bytes).collect();
        assert_eq!(sizes, vec![200 * MIB, 60 * MIB]);
        assert_eq!(ranking.top[0].path, PathBuf::from("/r/c"));
        assert_eq!(ranking.total_bytes, 272_629_760);
        assert_eq!(ranking.retained_count, 2);
    }

    #[test]
    fn test_rank_sweep_total_covers_all_retained() {
        let mut measurer = FixedSizes::default();
        let mut candidates = Vec::new();
        for i in 0..15u64 {
            let path = format!("/r/{}", i);
            measurer = measurer.with(&path, (51 + i) * MIB);
            candidates.push(PathBuf::from(path));
        }

        let ranking = rank_sweep(candidates, &measurer, 50 * MIB, 10);

        assert_eq!(ranking.top.len(), 10);
        assert_eq!(ranking.retained_count, 15);
        let all: u64 = (0..15u64).map(|i| (51 + i) * MIB).sum();
        assert_eq!(ranking.total_bytes, all);
        let shown: u64 = ranking.top.iter().map(|m| m.size_bytes).sum();
        assert!(shown < ranking.total_bytes);
        assert!(ranking.top.windows(2).all(|w| w[0].size_bytes >= w[1].size_bytes));
        assert_eq!(ranking.top[0].size_bytes, 65 * MIB);
    }

    #[test]
    fn test_rank_sweep_ties_keep_discovery_order() {
        let measurer = FixedSizes::default()
            .with("/r/first", 80 * MIB)
            .with("/r/second", 80 * MIB)
            .with("/r/big", 90 * MIB);
        let candidates = ["/r/first", "/r/second", "/r/big"].map(PathBuf::from);

        let ranking = rank_sweep(candidates, &measurer, 50 * MIB, 10);

        let paths: Vec<_> = ranking.top.iter().map(|m| m.path.clone()).collect();
        assert_eq!(
            paths,
            ["/r/big", "/r/first", "/r/second"].map(PathBuf::from).to_vec()
        );
    }

    #[test]
    fn test_rank_sweep_nothing_retained() {
        let measurer = FixedSizes::default().with("/r/a", 50 * MIB);
        let ranking = rank_sweep(vec![PathBuf::from("/r/a")], &measurer, 50 * MIB, 10);
        assert_eq!(ranking, Ranking::default());
    }
}
