use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};
use crate::scanner::MIB;

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub thresholds: Thresholds,
    pub sweeps: SweepsConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// Catalog entries at or below this size are not reported
    pub min_report_bytes: u64,
    /// Sweep matches at or below this size are discarded
    pub min_sweep_bytes: u64,
    /// Number of sweep matches to display
    pub top_n: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepsConfig {
    pub node_modules: NodeModulesSweep,
    pub build_artifacts: BuildArtifactsSweep,
    /// Extra path substrings excluded from every sweep
    pub extra_excludes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeModulesSweep {
    pub max_depth: usize,
    pub candidate_cap: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildArtifactsSweep {
    pub max_depth: usize,
    /// Matches taken per pattern
    pub candidate_cap: usize,
    pub patterns: Vec<String>,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            min_report_bytes: MIB,
            min_sweep_bytes: 50 * MIB,
            top_n: 10,
        }
    }
}

impl Default for NodeModulesSweep {
    fn default() -> Self {
        Self {
            max_depth: 6,
            candidate_cap: 30,
        }
    }
}

impl Default for BuildArtifactsSweep {
    fn default() -> Self {
        Self {
            max_depth: 5,
            candidate_cap: 20,
            patterns: vec![
                "target".to_string(),
                "build".to_string(),
                "dist".to_string(),
            ],
        }
    }
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit path must exist and parse. Without one, the user config
    /// file is read if present, otherwise defaults are used.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Some(path) if path.is_file() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// `$XDG_CONFIG_HOME/cache-audit/config.toml` or the platform equivalent
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("cache-audit").join("config.toml"))
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Config = toml::from_str(&content).map_err(|source| ConfigError::ParseError {
            path: path.to_path_buf(),
            source,
        })?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.thresholds.top_n == 0 {
            return Err(ConfigError::Invalid("top_n must be at least 1".into()));
        }
        if self.sweeps.node_modules.max_depth == 0 || self.sweeps.build_artifacts.max_depth == 0 {
            return Err(ConfigError::Invalid("sweep max_depth must be at least 1".into()));
        }
        if self.sweeps.node_modules.candidate_cap == 0
            || self.sweeps.build_artifacts.candidate_cap == 0
        {
            return Err(ConfigError::Invalid(
                "sweep candidate_cap must be at least 1".into(),
            ));
        }
        if self.sweeps.build_artifacts.patterns.is_empty()
            || self
                .sweeps
                .build_artifacts
                .patterns
                .iter()
                .any(|p| p.trim().is_empty())
        {
            return Err(ConfigError::Invalid(
                "build_artifacts patterns must be non-empty names".into(),
            ));
        }
        // A blank substring matches every path
        if self.sweeps.extra_excludes.iter().any(|e| e.trim().is_empty()) {
            return Err(ConfigError::Invalid(
                "extra_excludes entries must not be blank".into(),
            ));
        }
        Ok(())
    }
}
