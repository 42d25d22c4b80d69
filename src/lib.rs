//! cache-audit - A read-only audit of reclaimable disk space
//!
//! This crate provides functionality for:
//! - Measuring well-known cache, tool and trash locations
//! - Searching for large node_modules and build output directories
//! - Reporting sizes with a safety classification

pub mod audit;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod report;
pub mod scanner;

// Re-export commonly used types
pub use config::Config;
pub use error::{AuditError, Result};
