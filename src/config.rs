//! Configuration for park-ledger
//!
//! The config lives as YAML at `config.yaml` inside the lot directory, next
//! to the lot state. A missing file yields the defaults; a present file may
//! override any subset of fields.

use crate::core::TariffRates;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// File holding the configuration inside the lot directory
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Lot sizing configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LotConfig {
    /// Number of spots created at initialization
    #[serde(default = "default_spot_count")]
    pub spot_count: u32,
}

fn default_spot_count() -> u32 {
    30
}

impl Default for LotConfig {
    fn default() -> Self {
        Self {
            spot_count: default_spot_count(),
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub lot: LotConfig,
    #[serde(default)]
    pub tariff: TariffRates,
}

impl Config {
    /// Loads the config from the lot directory, falling back to defaults
    /// when no config file exists
    pub fn load_or_default(lot_dir: &Path) -> Result<Self> {
        let path = lot_dir.join(CONFIG_FILE_NAME);
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(&path)?;
        Ok(serde_yaml::from_str(&contents)?)
    }

    /// Writes the config to the lot directory
    pub fn save(&self, lot_dir: &Path) -> Result<()> {
        fs::create_dir_all(lot_dir)?;
        let contents = serde_yaml::to_string(self)?;
        fs::write(lot_dir.join(CONFIG_FILE_NAME), contents)?;
        Ok(())
    }
}
