use std::path::{Path, PathBuf};

use serde::Serialize;

use super::engine::rank_sweep;
use super::RankedMatch;
use crate::config::{SweepsConfig, Thresholds};
use crate::scanner::{find_matching_dirs, FindOptions, Measure};

/// Paths below these are already covered by catalog entries.
const LIBRARY_EXCLUDE: &str = "/Library/";
const NODE_MODULES_EXCLUDE: &str = "/node_modules/";

/// A search for directories by name below a root.
#[derive(Debug, Clone)]
pub struct Sweep {
    pub name: &'static str,
    pub title: &'static str,
    /// Tried one at a time; each contributes at most `candidate_cap` matches.
    pub patterns: Vec<String>,
    pub candidate_cap: usize,
    pub options: FindOptions,
}

impl Sweep {
    /// Oversized dependency install directories.
    pub fn node_modules(config: &SweepsConfig) -> Self {
        let mut exclude = vec![LIBRARY_EXCLUDE.to_string()];
        exclude.extend(config.extra_excludes.iter().cloned());

        Self {
            name: "node_modules",
            title: "Large node_modules directories",
            patterns: vec!["node_modules".to_string()],
            candidate_cap: config.node_modules.candidate_cap,
            options: FindOptions::new()
                .with_max_depth(config.node_modules.max_depth)
                .with_exclude(exclude),
        }
    }

    /// Build output directories outside dependency installs.
    pub fn build_artifacts(config: &SweepsConfig) -> Self {
        let mut exclude = vec![
            NODE_MODULES_EXCLUDE.to_string(),
            LIBRARY_EXCLUDE.to_string(),
        ];
        exclude.extend(config.extra_excludes.iter().cloned());

        Self {
            name: "build_artifacts",
            title: "Large build artifact directories",
            patterns: config.build_artifacts.patterns.clone(),
            candidate_cap: config.build_artifacts.candidate_cap,
            options: FindOptions::new()
                .with_max_depth(config.build_artifacts.max_depth)
                .with_exclude(exclude),
        }
    }

    pub fn all(config: &SweepsConfig) -> Vec<Self> {
        vec![Self::node_modules(config), Self::build_artifacts(config)]
    }

    /// Pooled candidates: the first `candidate_cap` matches of each pattern,
    /// in pattern order.
    pub fn candidates(&self, root: &Path) -> Vec<PathBuf> {
        self.patterns
            .iter()
            .flat_map(|pattern| {
                find_matching_dirs(root, std::slice::from_ref(pattern), &self.options)
                    .take(self.candidate_cap)
            })
            .collect()
    }
}

/// Outcome of one sweep, ready for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SweepResult {
    pub name: &'static str,
    pub title: &'static str,
    pub root: PathBuf,
    pub min_bytes: u64,
    pub top: Vec<RankedMatch>,
    pub total_bytes: u64,
    pub retained_count: usize,
}

/// Search `root`, measure the candidates and rank them.
///
/// A root that is missing or not a directory yields an empty result.
pub fn run_sweep<M: Measure + ?Sized>(
    sweep: &Sweep,
    root: &Path,
    measurer: &M,
    thresholds: &Thresholds,
) -> SweepResult {
    let mut result = SweepResult {
        name: sweep.name,
        title: sweep.title,
        root: root.to_path_buf(),
        min_bytes: thresholds.min_sweep_bytes,
        top: Vec::new(),
        total_bytes: 0,
        retained_count: 0,
    };

    if !root.is_dir() {
        tracing::info!(sweep = sweep.name, root = %root.display(), "Sweep root unavailable, skipping");
        return result;
    }

    let candidates = sweep.candidates(root);
    tracing::info!(sweep = sweep.name, candidates = candidates.len(), "Measuring sweep candidates");

    let ranking = rank_sweep(
        candidates,
        measurer,
        thresholds.min_sweep_bytes,
        thresholds.top_n,
    );
    result.top = ranking.top;
    result.total_bytes = ranking.total_bytes;
    result.retained_count = ranking.retained_count;
    result
}
