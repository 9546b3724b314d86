use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct MapsSettings {
    pub api_key: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct HostConfig {
    pub maps: MapsSettings,
    pub log_filter: Option<String>,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            maps: MapsSettings::default(),
            log_filter: Some("info".to_string()),
        }
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("bound-location-picker").join("config.json"))
}

/// Reads the config at `path`. No path or a missing file yields defaults;
/// an unreadable or unparsable file is an error so callers never save over it.
pub fn load_config(path: Option<&Path>) -> Result<HostConfig> {
    let Some(path) = path else {
        return Ok(HostConfig::default());
    };
    if !path.exists() {
        return Ok(HostConfig::default());
    }
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

pub fn save_config(path: &Path, config: &HostConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serde_json::to_string_pretty(config)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HostError;

    fn scratch(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("bound-location-host-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = load_config(Some(&scratch("absent.json"))).unwrap();
        assert!(config.maps.api_key.is_none());
        assert_eq!(config.log_filter.as_deref(), Some("info"));
        assert!(load_config(None).unwrap().maps.api_key.is_none());
    }

    #[test]
    fn test_save_then_load() {
        let path = scratch("saved/config.json");
        let mut config = HostConfig::default();
        config.maps.api_key = Some("maps-key".to_string());
        save_config(&path, &config).unwrap();

        let loaded = load_config(Some(&path)).unwrap();
        assert_eq!(loaded.maps.api_key.as_deref(), Some("maps-key"));
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_partial_and_invalid_files() {
        let partial = scratch("partial.json");
        fs::create_dir_all(partial.parent().unwrap()).unwrap();
        fs::write(&partial, r#"{"maps": {"api_key": "k"}}"#).unwrap();
        let config = load_config(Some(&partial)).unwrap();
        assert_eq!(config.maps.api_key.as_deref(), Some("k"));
        assert_eq!(config.log_filter.as_deref(), Some("info"));
        fs::remove_file(&partial).unwrap();

        let invalid = scratch("invalid.json");
        fs::write(&invalid, "{ not json").unwrap();
        assert!(matches!(
            load_config(Some(&invalid)),
            Err(HostError::Config(_))
        ));
        fs::remove_file(&invalid).unwrap();
    }
}
