use std::path::{Path, PathBuf};

use crate::app_dirs;

use super::{AppSettings, ConfigError};

/// Default filename used to store the dashboard settings.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Resolve the configuration file path, ensuring the parent directory exists.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    Ok(app_dirs::app_root_dir()?.join(CONFIG_FILE_NAME))
}

/// Load settings from the app folder.
///
/// A missing file yields defaults, which are written out so they can be edited.
pub fn load_or_default() -> Result<AppSettings, ConfigError> {
    let path = config_path()?;
    if path.exists() {
        return load_from_path(&path);
    }
    let settings = AppSettings::default();
    save_to_path(&settings, &path)?;
    tracing::info!(path = %path.display(), "Wrote default config");
    Ok(settings)
}

/// Parse settings from a specific TOML file.
pub fn load_from_path(path: &Path) -> Result<AppSettings, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&text).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}

/// Save settings to a specific path, creating parent directories as needed.
pub fn save_to_path(settings: &AppSettings, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| ConfigError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let text = toml::to_string_pretty(settings).map_err(|source| ConfigError::SerializeToml {
        path: path.to_path_buf(),
        source,
    })?;
    std::fs::write(path, text).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DataSettings, DisplaySettings};
    use crate::egui_app::state::Section;
    use crate::metrics::ZeroRatioPolicy;
    use tempfile::tempdir;

    #[test]
    fn saves_and_loads_settings() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("cfg.toml");
        let settings = AppSettings {
            display: DisplaySettings {
                zero_ratio: ZeroRatioPolicy::Zero,
                initial_section: Section::Evaluation,
            },
            data: DataSettings {
                snapshot_path: Some(PathBuf::from("run.json")),
            },
        };
        save_to_path(&settings, &path).unwrap();
        assert_eq!(load_from_path(&path).unwrap(), settings);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cfg.toml");
        std::fs::write(&path, "[display]\ninitial_section = \"training\"\n").unwrap();
        let settings = load_from_path(&path).unwrap();
        assert_eq!(settings.display.initial_section, Section::Training);
        assert_eq!(settings.display.zero_ratio, ZeroRatioPolicy::Error);
        assert_eq!(settings.data.snapshot_path, None);
    }

    #[test]
    fn rejects_unknown_policy() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cfg.toml");
        std::fs::write(&path, "[display]\nzero_ratio = \"nan\"\n").unwrap();
        assert!(matches!(
            load_from_path(&path),
            Err(ConfigError::ParseToml { .. })
        ));
    }

    #[test]
    fn missing_config_writes_defaults() {
        let dir = tempdir().unwrap();
        let _guard = app_dirs::ConfigBaseGuard::set(dir.path().to_path_buf());
        let settings = load_or_default().unwrap();
        assert_eq!(settings, AppSettings::default());
        let written = dir.path().join(app_dirs::APP_DIR_NAME).join(CONFIG_FILE_NAME);
        assert!(written.is_file());
    }

    #[test]
    fn relative_snapshot_path_is_anchored_to_config_dir() {
        let data = DataSettings {
            snapshot_path: Some(PathBuf::from("snap.json")),
        };
        let base = Path::new("/tmp/asrdash");
        assert_eq!(data.snapshot_path_in(base), Some(base.join("snap.json")));
    }
}
