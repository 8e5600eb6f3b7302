use std::{fmt, str::FromStr};

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Administrative level used to group parcels: parish ⊂ municipality ⊂ island.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegionLevel {
    #[default]
    Parish,
    Municipality,
    Island,
}

impl RegionLevel {
    pub const ALL: [RegionLevel; 3] = [RegionLevel::Parish, RegionLevel::Municipality, RegionLevel::Island];

    /// Lowercase name, as used in configuration files and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            RegionLevel::Parish => "parish",
            RegionLevel::Municipality => "municipality",
            RegionLevel::Island => "island",
        }
    }
}

impl fmt::Display for RegionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RegionLevel {
    type Err = anyhow::Error;

    /// Accepts the English names as well as the registry's Portuguese column names.
    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().to_ascii_lowercase();
        let name = match name.as_str() {
            "freguesia" => "parish",
            "municipio" => "municipality",
            "ilha" => "island",
            other => other,
        };
        match RegionLevel::ALL.into_iter().find(|level| level.as_str() == name) {
            Some(level) => Ok(level),
            None => bail!("unknown region level: {name:?}, expected one of parish, municipality, island"),
        }
    }
}
