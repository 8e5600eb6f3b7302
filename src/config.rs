use std::{fs::File, io::BufReader, path::Path};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::{exchange::ExchangeOptions, parcel::RegionLevel};

/// Settings for one analysis run. Every field has a default, so a JSON file
/// only needs to name the values it changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    /// Region level that bounds merging and the same-region bonus.
    pub region: RegionLevel,
    /// Maximum number of suggestions reported.
    pub max_suggestions: usize,
    /// Maximum number of suggestions involving any one owner.
    pub max_suggestions_per_owner: Option<usize>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        let exchange = ExchangeOptions::default();
        Self {
            region: exchange.region,
            max_suggestions: exchange.max_suggestions,
            max_suggestions_per_owner: exchange.max_suggestions_per_owner,
        }
    }
}

impl AnalysisConfig {
    /// Read a configuration from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("[config] Failed to open config file: {}", path.display()))?;
        serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("[config] Invalid config file: {}", path.display()))
    }

    /// Options handed to the exchange advisor.
    pub fn exchange_options(&self) -> ExchangeOptions {
        ExchangeOptions {
            max_suggestions: self.max_suggestions,
            max_suggestions_per_owner: self.max_suggestions_per_owner,
            region: self.region,
        }
    }
}
