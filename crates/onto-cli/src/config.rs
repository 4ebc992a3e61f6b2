//! Configuration management for the onto CLI
//!
//! Values come from defaults, then a `.env` file, then the environment.
//! Command-line flags override all of them.

use crate::error::{CliError, Result};
use onto_core::pathways::DEFAULT_PATHWAY_NAMESPACE;
use onto_core::subset::BIOLOGICAL_PROCESS_ROOT;
use onto_core::{IndexOptions, DEFAULT_ROOT_FALLBACK_LIMIT};

// ============================================================================
// Environment Variables
// ============================================================================

pub const ENV_ROOT_FALLBACK_LIMIT: &str = "ONTO_ROOT_FALLBACK_LIMIT";
pub const ENV_SUBSET_ROOT: &str = "ONTO_SUBSET_ROOT";
pub const ENV_PATHWAY_NAMESPACE: &str = "ONTO_PATHWAY_NAMESPACE";

/// CLI configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Classes shown as roots when no class lacks a parent
    pub root_fallback_limit: usize,

    /// Root class for `onto subset`
    pub subset_root: String,

    /// Namespace for classes written by `onto pathways`
    pub pathway_namespace: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root_fallback_limit: DEFAULT_ROOT_FALLBACK_LIMIT,
            subset_root: BIOLOGICAL_PROCESS_ROOT.to_string(),
            pathway_namespace: DEFAULT_PATHWAY_NAMESPACE.to_string(),
        }
    }
}

impl Config {
    /// Load `.env` if present, then read the environment
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_env()
    }

    /// Read settings from the process environment over defaults
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup` over defaults, then validate
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(limit) = lookup(ENV_ROOT_FALLBACK_LIMIT) {
            config.root_fallback_limit = limit.trim().parse().map_err(|_| {
                CliError::config(format!(
                    "{} must be a positive integer, got '{}'",
                    ENV_ROOT_FALLBACK_LIMIT, limit
                ))
            })?;
        }
        if let Some(root) = lookup(ENV_SUBSET_ROOT) {
            config.subset_root = root;
        }
        if let Some(namespace) = lookup(ENV_PATHWAY_NAMESPACE) {
            config.pathway_namespace = namespace;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.root_fallback_limit == 0 {
            return Err(CliError::config(format!("{} must be greater than 0", ENV_ROOT_FALLBACK_LIMIT)));
        }
        if self.subset_root.trim().is_empty() {
            return Err(CliError::config(format!("{} must not be empty", ENV_SUBSET_ROOT)));
        }
        if self.pathway_namespace.trim().is_empty() {
            return Err(CliError::config(format!("{} must not be empty", ENV_PATHWAY_NAMESPACE)));
        }
        Ok(())
    }

    pub fn index_options(&self) -> IndexOptions {
        IndexOptions {
            root_fallback_limit: self.root_fallback_limit,
        }
    }
}
