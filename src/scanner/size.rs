use std::collections::HashSet;
use std::fs::{self, Metadata};
use std::os::unix::fs::MetadataExt;
use std::path::Path;
use walkdir::WalkDir;

pub const KIB: u64 = 1024;
pub const MIB: u64 = 1024 * KIB;
pub const GIB: u64 = 1024 * MIB;

/// Get actual disk usage (blocks * block_size)
/// On most Linux systems, st_blocks is in 512-byte units
pub fn disk_usage(metadata: &Metadata) -> u64 {
    metadata.blocks() * 512
}

/// Something that can tell how many bytes a path occupies on disk.
pub trait Measure {
    /// Total size of `path` in bytes. Missing paths measure as 0.
    fn measure(&self, path: &Path) -> u64;
}

/// Measures allocated size the way `du` does.
///
/// Counts the blocks of every non-directory entry below the path, counting
/// hard-linked inodes once. Unreadable subtrees are skipped and the partial
/// sum is returned.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskUsage;

impl Measure for DiskUsage {
    fn measure(&self, path: &Path) -> u64 {
        let metadata = match fs::metadata(path) {
            Ok(m) => m,
            Err(_) => return 0,
        };

        if metadata.is_file() {
            return disk_usage(&metadata);
        }
        if !metadata.is_dir() {
            return 0;
        }

        let mut seen_inodes: HashSet<(u64, u64)> = HashSet::new();
        let mut total = 0u64;

        for result in WalkDir::new(path) {
            let entry = match result {
                Ok(e) => e,
                Err(err) => {
                    tracing::debug!(path = %path.display(), error = %err, "Skipping unreadable entry");
                    continue;
                }
            };

            if entry.file_type().is_dir() {
                continue;
            }

            let metadata = match entry.metadata() {
                Ok(m) => m,
                Err(err) => {
                    tracing::debug!(path = %entry.path().display(), error = %err, "Cannot stat entry");
                    continue;
                }
            };

            // Hard links share blocks
            if metadata.nlink() > 1 && !seen_inodes.insert((metadata.dev(), metadata.ino())) {
                continue;
            }

            total += disk_usage(&metadata);
        }

        total
    }
}

/// Format size in human-readable format
///
/// Binary units: whole kilobytes, one decimal for megabytes, two for
/// gigabytes.
pub fn format_size(bytes: u64) -> String {
    if bytes < KIB {
        format!("{} B", bytes)
    } else if bytes < MIB {
        format!("{} KB", bytes / KIB)
    } else if bytes < GIB {
        format!("{:.1} MB", bytes as f64 / MIB as f64)
    } else {
        format!("{:.2} GB", bytes as f64 / GIB as f64)
    }
}
