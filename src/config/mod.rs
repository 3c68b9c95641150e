use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::canvas::ColorChangePolicy;
use crate::export::ExportSettings;
use crate::palette::DotColor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ConfigPathError {
    MissingHomeDirectory,
}

const APP_DIR: &str = "dotpad";
const APP_CONFIG_FILE: &str = "config.json";

/// Application-level settings from `config.json`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub color_change_policy: ColorChangePolicy,
    #[serde(default)]
    pub initial_color: DotColor,
    #[serde(default)]
    pub export: ExportSettings,
}

pub fn load_app_config() -> AppConfig {
    let (xdg_config_home, home) = config_env_dirs();
    load_app_config_with(xdg_config_home.as_deref(), home.as_deref())
}

fn load_app_config_with(xdg_config_home: Option<&Path>, home: Option<&Path>) -> AppConfig {
    let Ok(path) = app_config_path(APP_DIR, APP_CONFIG_FILE, xdg_config_home, home) else {
        tracing::debug!("no config directory resolvable; using default drawing settings");
        return AppConfig::default();
    };
    let contents = match std::fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return AppConfig::default(),
        Err(err) => {
            tracing::warn!(?err, ?path, "failed to read config.json; using defaults");
            return AppConfig::default();
        }
    };
    match serde_json::from_str::<AppConfig>(&contents) {
        Ok(config) => {
            tracing::debug!(?path, "loaded drawing settings");
            config
        }
        Err(err) => {
            tracing::warn!(?err, ?path, "failed to parse config.json; using defaults");
            AppConfig::default()
        }
    }
}

pub(crate) fn config_env_dirs() -> (Option<PathBuf>, Option<PathBuf>) {
    (
        std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from),
        std::env::var_os("HOME").map(PathBuf::from),
    )
}

pub(crate) fn app_config_path(
    app_dir: &str,
    file_name: &str,
    xdg_config_home: Option<&Path>,
    home: Option<&Path>,
) -> Result<PathBuf, ConfigPathError> {
    let mut path = config_root(xdg_config_home, home)?;
    path.push(app_dir);
    path.push(file_name);
    Ok(path)
}

fn config_root(
    xdg_config_home: Option<&Path>,
    home: Option<&Path>,
) -> Result<PathBuf, ConfigPathError> {
    if let Some(xdg) = xdg_config_home.filter(|path| !path.as_os_str().is_empty()) {
        return Ok(xdg.to_path_buf());
    }

    let home = home.ok_or(ConfigPathError::MissingHomeDirectory)?;
    Ok(home.join(".config"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::ExportMode;

    struct TempConfigRoot(PathBuf);

    impl TempConfigRoot {
        fn new(name: &str) -> Self {
            let root = std::env::temp_dir().join(format!(
                "dotpad-config-{name}-{}",
                std::process::id()
            ));
            let _ = std::fs::remove_dir_all(&root);
            std::fs::create_dir_all(&root).expect("config root should be created");
            Self(root)
        }

        fn write_config(&self, relative_dir: &str, contents: &str) {
            let dir = self.0.join(relative_dir);
            std::fs::create_dir_all(&dir).expect("config dir should be created");
            std::fs::write(dir.join(APP_CONFIG_FILE), contents).expect("config should be written");
        }
    }

    impl Drop for TempConfigRoot {
        fn drop(&mut self) {
            let _ = std::fs::remove_dir_all(&self.0);
        }
    }

    #[test]
    fn app_config_path_prefers_xdg_config_home() {
        let path = app_config_path(
            "dotpad",
            "config.json",
            Some(Path::new("/tmp/config-root")),
            Some(Path::new("/tmp/home")),
        )
        .expect("path should resolve");

        assert_eq!(path, PathBuf::from("/tmp/config-root/dotpad/config.json"));
    }

    #[test]
    fn empty_xdg_value_loads_from_home_dot_config() {
        let home = TempConfigRoot::new("home-fallback");
        home.write_config(".config/dotpad", r#"{ "initial_color": "blue" }"#);

        let config = load_app_config_with(Some(Path::new("")), Some(&home.0));
        assert_eq!(config.initial_color, DotColor::Blue);
        assert_eq!(config.color_change_policy, ColorChangePolicy::Persist);
    }

    #[test]
    fn app_config_path_errors_when_home_missing_and_xdg_unset() {
        let error = app_config_path("dotpad", "config.json", None, None).unwrap_err();
        assert_eq!(error, ConfigPathError::MissingHomeDirectory);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let root = TempConfigRoot::new("missing");
        let config = load_app_config_with(Some(&root.0), None);

        assert_eq!(config.color_change_policy, ColorChangePolicy::Persist);
        assert_eq!(config.initial_color, DotColor::Black);
        assert!(config.export.enabled);
        assert_eq!(config.export.mode, ExportMode::Intact);
        assert_eq!((config.export.width, config.export.height), (300, 500));
    }

    #[test]
    fn partial_file_overrides_only_given_fields() {
        let root = TempConfigRoot::new("partial");
        root.write_config(
            APP_DIR,
            r#"{
                "color_change_policy": "clear_on_change",
                "initial_color": "red",
                "export": { "mode": "corrupt" }
            }"#,
        );

        let config = load_app_config_with(Some(&root.0), None);
        assert_eq!(config.color_change_policy, ColorChangePolicy::ClearOnChange);
        assert_eq!(config.initial_color, DotColor::Red);
        assert_eq!(config.export.mode, ExportMode::Corrupt);
        assert!(config.export.enabled);
        assert_eq!(config.export.width, 300);
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let root = TempConfigRoot::new("malformed");
        root.write_config(APP_DIR, "{ not json");

        let config = load_app_config_with(Some(&root.0), None);
        assert_eq!(config.color_change_policy, ColorChangePolicy::Persist);
        assert!(config.export.enabled);
    }
}
