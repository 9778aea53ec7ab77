use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::egui_app::state::Section;
use crate::metrics::ZeroRatioPolicy;

/// Settings persisted in the TOML config file.
///
/// Config keys: `display`, `data`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default)]
    pub display: DisplaySettings,
    #[serde(default)]
    pub data: DataSettings,
}

/// Presentation preferences.
///
/// Config keys: `zero_ratio`, `initial_section`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// What a percentage with a zero denominator shows.
    #[serde(default)]
    pub zero_ratio: ZeroRatioPolicy,
    /// Section selected at launch.
    #[serde(default)]
    pub initial_section: Section,
}

/// Where dashboard records come from.
///
/// Config keys: `snapshot_path`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataSettings {
    /// JSON snapshot replacing the built-in sample figures.
    #[serde(default)]
    pub snapshot_path: Option<PathBuf>,
}

impl DataSettings {
    /// Snapshot path with relative entries anchored at `config_dir`.
    pub fn snapshot_path_in(&self, config_dir: &std::path::Path) -> Option<PathBuf> {
        self.snapshot_path.as_ref().map(|path| {
            if path.is_relative() {
                config_dir.join(path)
            } else {
                path.clone()
            }
        })
    }
}
