use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_reveal_delay_ms")]
    pub reveal_delay_ms: u64,
    #[serde(default = "default_shuffle_definitions")]
    pub shuffle_definitions: bool,
}

fn default_theme() -> String {
    "catppuccin-mocha".to_string()
}
fn default_reveal_delay_ms() -> u64 {
    2000
}
fn default_shuffle_definitions() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            reveal_delay_ms: default_reveal_delay_ms(),
            shuffle_definitions: default_shuffle_definitions(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(Self::config_path())
    }

    fn load_from(path: PathBuf) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    #[allow(dead_code)]
    pub fn save(&self) -> Result<()> {
        self.save_to(Self::config_path())
    }

    fn save_to(&self, path: PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("aiquest")
            .join("config.toml")
    }

    pub fn reveal_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.reveal_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_from_empty_file() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.theme, "catppuccin-mocha");
        assert_eq!(config.reveal_delay_ms, 2000);
        assert!(config.shuffle_definitions);
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_fields() {
        let config: Config = toml::from_str("theme = \"terminal-default\"").unwrap();
        assert_eq!(config.theme, "terminal-default");
        assert_eq!(config.reveal_delay_ms, 2000);
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("aiquest").join("config.toml");

        let config = Config {
            theme: "sunrise-light".to_string(),
            reveal_delay_ms: 1500,
            ..Config::default()
        };
        config.save_to(path.clone()).unwrap();

        let loaded = Config::load_from(path).unwrap();
        assert_eq!(loaded.theme, "sunrise-light");
        assert_eq!(loaded.reveal_delay_ms, 1500);
        assert!(loaded.shuffle_definitions);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = Config::load_from(dir.path().join("nope.toml")).unwrap();
        assert_eq!(loaded.theme, "catppuccin-mocha");
    }
}
