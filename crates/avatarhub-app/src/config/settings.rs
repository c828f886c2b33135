//! Settings parser for config.toml

use super::types::{Settings, MIN_NARROW_BREAKPOINT};
use avatarhub_core::prelude::*;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.toml";
const CONFIG_DIR: &str = "avatarhub";

/// Default location: `<config dir>/avatarhub/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|base| base.join(CONFIG_DIR).join(CONFIG_FILENAME))
}

/// Load settings from an explicit path, or from the default location.
///
/// Missing files yield defaults. Unreadable or malformed files are logged and
/// also yield defaults, so a broken config never prevents the dashboard from
/// starting.
pub fn load_settings(explicit: Option<&Path>) -> Settings {
    let Some(config_path) = explicit.map(Path::to_path_buf).or_else(default_config_path) else {
        debug!("No config directory available, using defaults");
        return Settings::default();
    };

    match read_settings(&config_path) {
        Ok(Some(settings)) => {
            debug!("Loaded settings from {:?}", config_path);
            settings
        }
        Ok(None) => {
            debug!("No config file at {:?}, using defaults", config_path);
            Settings::default()
        }
        Err(e) => {
            warn!("{}", e);
            Settings::default()
        }
    }
}

/// Read and validate a config file; `Ok(None)` when it does not exist
pub fn read_settings(config_path: &Path) -> Result<Option<Settings>> {
    if !config_path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(config_path)?;
    let mut settings: Settings = toml::from_str(&content)
        .map_err(|e| Error::config_invalid(config_path, e.message().to_string()))?;
    normalize(&mut settings);
    Ok(Some(settings))
}

/// Clamp values that would make the layout unusable
fn normalize(settings: &mut Settings) {
    if settings.ui.narrow_breakpoint < MIN_NARROW_BREAKPOINT {
        warn!(
            "ui.narrow_breakpoint={} is below {}, clamping",
            settings.ui.narrow_breakpoint, MIN_NARROW_BREAKPOINT
        );
        settings.ui.narrow_breakpoint = MIN_NARROW_BREAKPOINT;
    }
    if settings.user.username.trim().is_empty() {
        warn!("user.username is empty, using default");
        settings.user.username = Settings::default().user.username;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{IconMode, SourceKind};
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");

        assert!(read_settings(&path).unwrap().is_none());
        assert_eq!(load_settings(Some(&path)), Settings::default());
    }

    #[test]
    fn test_load_from_explicit_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[user]
username = "Sam"

[ui]
dark_mode = true
icons = "ascii"

[data]
source = "file"
"#,
        )
        .unwrap();

        let settings = load_settings(Some(&path));
        assert_eq!(settings.user.username, "Sam");
        assert!(settings.ui.dark_mode);
        assert_eq!(settings.ui.icons, IconMode::Ascii);
        assert_eq!(settings.data.source, SourceKind::File);
    }

    #[test]
    fn test_invalid_toml_is_reported_and_falls_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[ui\ndark_mode = yes").unwrap();

        let err = read_settings(&path).unwrap_err();
        assert!(matches!(err, Error::ConfigInvalid { .. }));

        assert_eq!(load_settings(Some(&path)), Settings::default());
    }

    #[test]
    fn test_breakpoint_is_clamped() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[ui]\nnarrow_breakpoint = 5\n").unwrap();

        let settings = load_settings(Some(&path));
        assert_eq!(settings.ui.narrow_breakpoint, MIN_NARROW_BREAKPOINT);
    }

    #[test]
    fn test_blank_username_uses_default() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[user]\nusername = \"  \"\n").unwrap();

        let settings = load_settings(Some(&path));
        assert_eq!(settings.user.username, "Rohit");
    }

    #[test]
    fn test_default_config_path_shape() {
        if let Some(path) = default_config_path() {
            assert!(path.ends_with("avatarhub/config.toml"));
        }
    }
}
