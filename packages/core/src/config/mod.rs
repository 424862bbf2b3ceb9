//! Configuration store
//!
//! Loads and saves the whole configuration as a single unit. A missing
//! file is not an error: the first run starts from an empty config.
//! Saves go through a sibling temporary file and a rename, so a
//! concurrent reader never observes a truncated store. No cross-process
//! lock is taken; concurrent invocations race last-writer-wins.

pub mod error;
pub mod paths;
pub mod schema;

use std::fs;
use std::path::Path;

use jsonc_parser::parse_to_serde_value;

pub use error::ConfigError;
pub use paths::{CONFIG_PATH_ENV, default_config_path, get_config_dir};
pub use schema::{Config, Host, IndexServer};

/// Load the configuration from `path`
///
/// Returns `Config::default()` if the file does not exist. Accepts JSON
/// with comments.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        tracing::debug!("Config file not found, starting empty: {}", path.display());
        return Ok(Config::default());
    }

    let contents = fs::read_to_string(path)
        .map_err(|e| ConfigError::Load(format!("Failed to read {}: {}", path.display(), e)))?;

    let parsed_value = parse_to_serde_value(&contents, &Default::default())
        .map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })?
        .ok_or_else(|| ConfigError::Parse {
            path: path.display().to_string(),
            message: "file is empty".to_string(),
        })?;

    let config: Config = serde_json::from_value(parsed_value).map_err(|e| ConfigError::Parse {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    tracing::debug!(
        "Loaded {} hosts from {}",
        config.hosts.len(),
        path.display()
    );
    Ok(config)
}

/// Save the configuration to `path`
///
/// Whole-file replace: the config is serialized, written to a temporary
/// file next to the target, then renamed over it. Creates parent
/// directories as needed and keeps a `.bak` copy of the previous file.
pub fn save_config(config: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)
            .map_err(|e| ConfigError::Save(format!("Failed to create directory: {e}")))?;
    }

    if path.exists() {
        let backup_path = path.with_extension("json.bak");
        fs::copy(path, &backup_path)
            .map_err(|e| ConfigError::Save(format!("Failed to create backup: {e}")))?;
        tracing::debug!("Created config backup: {}", backup_path.display());
    }

    let json = serde_json::to_string_pretty(config)
        .map_err(|e| ConfigError::Save(format!("Failed to serialize: {e}")))?;

    // Write-then-rename keeps the replace atomic for readers.
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, json.as_bytes()).map_err(|e| {
        ConfigError::Save(format!("Failed to write {}: {}", tmp_path.display(), e))
    })?;
    fs::rename(&tmp_path, path).map_err(|e| {
        ConfigError::Save(format!("Failed to replace {}: {}", path.display(), e))
    })?;

    tracing::debug!("Saved {} hosts to {}", config.hosts.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_file_returns_empty_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config = load_config(&path).unwrap();
        assert!(config.hosts.is_empty());
        assert!(config.default_host.is_empty());
        assert!(config.index_servers.is_empty());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = Config::default();
        config.hosts.push(Host::new("prod", "tcp://10.0.0.1:2375", ""));
        config.default_host = "prod".into();

        save_config(&config, &path).unwrap();
        let loaded = load_config(&path).unwrap();
        assert_eq!(config, loaded);
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("config.json");

        save_config(&Config::default(), &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_save_leaves_no_temp_file_behind() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        save_config(&Config::default(), &path).unwrap();
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_second_save_keeps_backup_of_previous() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = Config::default();
        save_config(&config, &path).unwrap();

        config.hosts.push(Host::new("prod", "tcp://10.0.0.1:2375", ""));
        config.default_host = "prod".into();
        save_config(&config, &path).unwrap();

        let backup = path.with_extension("json.bak");
        assert!(backup.exists());
        let previous = load_config(&backup).unwrap();
        assert!(previous.hosts.is_empty());
    }

    #[test]
    fn test_load_rejects_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_load_accepts_comments() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{
  // hand-edited
  "hosts": [{ "name": "dev", "url": "unix:///var/run/docker.sock" }],
  "default": "dev"
}"#,
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.default_host, "dev");
        assert_eq!(config.hosts.len(), 1);
    }

    #[test]
    fn test_load_rejects_unknown_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "hosts": [], "defautl": "typo" }"#).unwrap();

        assert!(load_config(&path).is_err());
    }
}
