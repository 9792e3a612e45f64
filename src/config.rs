//! Mining configuration
//!
//! The support threshold is an absolute transaction count, not a fraction.
//! Zero is accepted (every candidate is frequent) and so is a threshold above
//! the number of transactions (nothing is frequent).

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{MiningError, Result};

/// Settings shared by both mining algorithms.
///
/// # Example
/// ```
/// use basket::MiningConfig;
///
/// let config = MiningConfig::from_toml_str("min_support = 3\nmax_level = 4").unwrap();
/// assert_eq!(config.min_support, 3);
/// assert!(config.allows_level(4));
/// assert!(!config.allows_level(5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MiningConfig {
    /// Minimum number of transactions an itemset must appear in
    pub min_support: usize,

    /// Largest itemset size to mine, unbounded when absent
    #[serde(default)]
    pub max_level: Option<usize>,
}

impl Default for MiningConfig {
    fn default() -> Self {
        Self {
            min_support: 1,
            max_level: None,
        }
    }
}

impl MiningConfig {
    pub fn new(min_support: usize) -> Self {
        Self {
            min_support,
            max_level: None,
        }
    }

    pub fn with_max_level(mut self, max_level: usize) -> Self {
        self.max_level = Some(max_level);
        self
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).map_err(|e| MiningError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|e| MiningError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_level == Some(0) {
            return Err(MiningError::Config(
                "max_level must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Whether itemsets of size `k` may be mined.
    pub fn allows_level(&self, k: usize) -> bool {
        self.max_level.map_or(true, |max| k <= max)
    }
}
