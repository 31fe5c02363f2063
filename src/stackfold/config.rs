use crate::addons::AddonsOptions;
use crate::error::{Result, StackfoldError};
use crate::model::{ListingOrder, SplitMode};
use crate::workspace::fs::DEFAULT_ADDONS_DIR;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Keys accepted by `get`/`set`, in display order.
pub const CONFIG_KEYS: [&str; 3] = ["addons-dir", "listing-order", "split-mode"];

/// Configuration for stackfold, stored in .stackfold/config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct StackfoldConfig {
    /// Name of the per-service directory holding addons
    #[serde(default = "default_addons_dir")]
    pub addons_dir: String,

    /// Order in which listed addons files are folded
    #[serde(default)]
    pub listing_order: ListingOrder,

    /// How merged sections are passed to the template
    #[serde(default)]
    pub split_mode: SplitMode,
}

fn default_addons_dir() -> String {
    DEFAULT_ADDONS_DIR.to_string()
}

impl Default for StackfoldConfig {
    fn default() -> Self {
        Self {
            addons_dir: default_addons_dir(),
            listing_order: ListingOrder::default(),
            split_mode: SplitMode::default(),
        }
    }
}

impl StackfoldConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: StackfoldConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Load the first config found in `dirs`, or defaults
    pub fn load_first<P: AsRef<Path>>(dirs: &[P]) -> Result<Self> {
        for dir in dirs {
            if dir.as_ref().join(CONFIG_FILENAME).exists() {
                return Self::load(dir);
            }
        }
        Ok(Self::default())
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }

    pub fn addons_options(&self) -> AddonsOptions {
        AddonsOptions {
            listing_order: self.listing_order,
            split_mode: self.split_mode,
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "addons-dir" => Some(self.addons_dir.clone()),
            "listing-order" => Some(self.listing_order.to_string()),
            "split-mode" => Some(self.split_mode.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "addons-dir" => {
                let value = value.trim();
                if value.is_empty() || value.contains('/') || value.contains('\\') || value == ".." {
                    return Err(StackfoldError::Config(format!(
                        "Invalid addons directory name: {:?}",
                        value
                    )));
                }
                self.addons_dir = value.to_string();
            }
            "listing-order" => {
                self.listing_order = value.parse().map_err(StackfoldError::Config)?;
            }
            "split-mode" => {
                self.split_mode = value.parse().map_err(StackfoldError::Config)?;
            }
            other => {
                return Err(StackfoldError::Config(format!(
                    "Unknown config key: {}",
                    other
                )))
            }
        }
        Ok(())
    }
}
