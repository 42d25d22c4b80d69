/// Configuration options for directory name searches.
#[derive(Debug, Clone)]
pub struct FindOptions {
    /// Maximum depth to descend below the root (root is depth 0)
    pub max_depth: usize,

    /// Substrings that exclude a path when found in it.
    ///
    /// Matched against the part of the path below the search root, with a
    /// leading and trailing `/` (e.g. `/src/node_modules/`).
    pub exclude_patterns: Vec<String>,
}

impl Default for FindOptions {
    fn default() -> Self {
        Self {
            max_depth: 5,
            exclude_patterns: Vec::new(),
        }
    }
}

impl FindOptions {
    /// Create a new FindOptions with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set maximum recursion depth
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Set exclusion patterns
    pub fn with_exclude(mut self, patterns: Vec<String>) -> Self {
        self.exclude_patterns = patterns;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = FindOptions::default();
        assert_eq!(opts.max_depth, 5);
        assert!(opts.exclude_patterns.is_empty());
    }

    #[test]
    fn test_builder_pattern() {
        let opts = FindOptions::new()
            .with_max_depth(6)
            .with_exclude(vec!["/Library/".to_string()]);

        assert_eq!(opts.max_depth, 6);
        assert_eq!(opts.exclude_patterns, vec!["/Library/".to_string()]);
    }
}
