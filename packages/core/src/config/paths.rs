//! Config file path resolution
//!
//! The store lives at `~/.config/dockhand/config.json` on Linux and
//! macOS and under `%APPDATA%\dockhand\` on Windows. The
//! `DOCKHAND_CONFIG` environment variable overrides the full path.

use std::path::PathBuf;

/// Environment variable overriding the config file path
pub const CONFIG_PATH_ENV: &str = "DOCKHAND_CONFIG";

/// Get the configuration directory path
pub fn get_config_dir() -> Option<PathBuf> {
    #[cfg(any(target_os = "linux", target_os = "macos"))]
    {
        directories::BaseDirs::new().map(|dirs| dirs.home_dir().join(".config").join("dockhand"))
    }
    #[cfg(target_os = "windows")]
    {
        directories::BaseDirs::new().map(|dirs| dirs.config_dir().join("dockhand"))
    }
    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    {
        None
    }
}

/// Get the full path to the config file
///
/// Honors `DOCKHAND_CONFIG` when set, else `{config_dir}/config.json`.
pub fn default_config_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(CONFIG_PATH_ENV)
        && !path.is_empty()
    {
        return Some(PathBuf::from(path));
    }
    get_config_dir().map(|d| d.join("config.json"))
}
