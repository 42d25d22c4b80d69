mod options;
mod size;
mod walker;

pub use options::FindOptions;
pub use size::{disk_usage, format_size, DiskUsage, Measure, GIB, KIB, MIB};
pub use walker::{find_matching_dirs, MatchingDirs};
