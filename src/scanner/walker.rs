use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

use super::options::FindOptions;

/// Lazily walk `root` and yield directories whose name is one of `patterns`.
///
/// Hidden directories and directories matching an exclusion pattern are
/// pruned. A matched directory is yielded but not descended into. Entries
/// within a directory are visited in file name order, so the output order is
/// stable for an unchanged tree. Symbolic links are never followed and
/// unreadable subtrees are skipped.
pub fn find_matching_dirs(root: &Path, patterns: &[String], options: &FindOptions) -> MatchingDirs {
    let walker = WalkDir::new(root)
        .max_depth(options.max_depth)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter();

    MatchingDirs {
        root: root.to_path_buf(),
        patterns: patterns.to_vec(),
        exclude_patterns: options.exclude_patterns.clone(),
        walker,
    }
}

/// Iterator returned by [`find_matching_dirs`].
pub struct MatchingDirs {
    root: PathBuf,
    patterns: Vec<String>,
    exclude_patterns: Vec<String>,
    walker: walkdir::IntoIter,
}

impl MatchingDirs {
    fn is_match(&self, name: &OsStr) -> bool {
        let name = name.to_string_lossy();
        self.patterns.iter().any(|p| *p == name)
    }

    fn is_excluded(&self, path: &Path) -> bool {
        let relative = path.strip_prefix(&self.root).unwrap_or(path);

        let mut rel = String::from("/");
        for component in relative.components() {
            if let Component::Normal(name) = component {
                let name = name.to_string_lossy();
                if name.starts_with('.') {
                    return true;
                }
                rel.push_str(&name);
                rel.push('/');
            }
        }

        self.exclude_patterns
            .iter()
            .any(|pattern| rel.contains(pattern.as_str()))
    }
}

impl Iterator for MatchingDirs {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        loop {
            let entry = match self.walker.next()? {
                Ok(e) => e,
                Err(err) => {
                    tracing::debug!(error = %err, "Skipping unreadable directory");
                    continue;
                }
            };

            if entry.depth() == 0 || !entry.file_type().is_dir() {
                continue;
            }

            if self.is_excluded(entry.path()) {
                self.walker.skip_current_dir();
                continue;
            }

            if self.is_match(entry.file_name()) {
                self.walker.skip_current_dir();
                tracing::trace!(path = %entry.path().display(), "Matched directory");
                return Some(entry.into_path());
            }
        }
    }
}
