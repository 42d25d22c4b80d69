use std::path::{Path, PathBuf};

use crate::error::{AuditError, Result};

/// Expands catalog path templates against the current environment.
///
/// A template is either absolute (`/Library/Caches`) or starts with `~`,
/// which stands for the user's home directory.
#[derive(Debug, Clone)]
pub struct PathResolver {
    home: PathBuf,
}

impl PathResolver {
    pub fn new(home: impl Into<PathBuf>) -> Self {
        Self { home: home.into() }
    }

    /// Resolver for the invoking user's home directory.
    pub fn from_env() -> Result<Self> {
        dirs::home_dir()
            .map(Self::new)
            .ok_or(AuditError::HomeNotFound)
    }

    pub fn home(&self) -> &Path {
        &self.home
    }

    pub fn resolve(&self, template: &str) -> PathBuf {
        if template == "~" {
            return self.home.clone();
        }
        match template.strip_prefix("~/") {
            Some(rest) => self.home.join(rest),
            None => PathBuf::from(template),
        }
    }
}
