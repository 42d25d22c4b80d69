//! Catalog of known cache locations and the engine that measures them.

pub mod catalog;
mod engine;
mod resolver;
mod sweep;

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

pub use catalog::{CatalogEntry, CleanupCommand, CATALOG, CLEANUP_COMMANDS};
pub use engine::{rank_sweep, scan_catalog, CatalogScan, Ranking};
pub use resolver::PathResolver;
pub use sweep::{run_sweep, Sweep, SweepResult};

/// How safe it is to delete a location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SafetyTier {
    /// Regenerated automatically; delete freely.
    Safe,
    /// Deletable, with a side effect such as a re-download.
    Caution,
    /// May hold irreplaceable data; inspect first.
    Review,
}

impl SafetyTier {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Safe => "SAFE",
            Self::Caution => "CAUTION",
            Self::Review => "REVIEW",
        }
    }
}

impl fmt::Display for SafetyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Display grouping for catalog entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Docker,
    PackageManagers,
    IdeTools,
    CloudVm,
    SystemCaches,
    TrashMisc,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 6] = [
        Self::Docker,
        Self::PackageManagers,
        Self::IdeTools,
        Self::CloudVm,
        Self::SystemCaches,
        Self::TrashMisc,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Docker => "Docker",
            Self::PackageManagers => "Package Managers",
            Self::IdeTools => "IDE Tools",
            Self::CloudVm => "Cloud/VM",
            Self::SystemCaches => "System Caches",
            Self::TrashMisc => "Trash/Misc",
        }
    }
}

/// A catalog entry whose measured size passed the report threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub category: Category,
    pub label: String,
    pub path: PathBuf,
    pub size_bytes: u64,
    pub tier: SafetyTier,
    pub advisory: String,
}

/// A directory found by a sweep, with its measured size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedMatch {
    pub path: PathBuf,
    pub size_bytes: u64,
}
