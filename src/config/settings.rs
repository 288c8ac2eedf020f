use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::motivation::FALLBACK_LINE;
use crate::stats::Window;

fn default_true() -> bool {
    true
}
fn default_language() -> String {
    "fa".to_string()
}
fn default_window() -> String {
    "week".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MotivationConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Language of the generated line ("fa" or "en").
    #[serde(default = "default_language")]
    pub language: String,
    /// Overrides the built-in fallback line shown when the fetch fails.
    #[serde(default)]
    pub fallback: Option<String>,
}

impl Default for MotivationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            language: default_language(),
            fallback: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Dashboard range opened first: "week" or "month".
    #[serde(default = "default_window")]
    pub default_window: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            default_window: default_window(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub motivation: MotivationConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

impl AppConfig {
    fn project_dirs() -> Result<ProjectDirs> {
        ProjectDirs::from("", "", "dastyar")
            .context("Could not determine project directories")
    }

    pub fn config_path() -> Result<PathBuf> {
        let dirs = Self::project_dirs()?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn data_dir() -> Result<PathBuf> {
        let dirs = Self::project_dirs()?;
        Ok(dirs.data_dir().to_path_buf())
    }

    pub fn logs_path() -> Result<PathBuf> {
        Ok(Self::data_dir()?.join("logs.json"))
    }

    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let content =
            std::fs::read_to_string(&path).with_context(|| format!("Reading {:?}", path))?;
        let config: AppConfig = toml::from_str(&content).context("Parsing config.toml")?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self).context("Serializing config")?;
        std::fs::write(&path, content).with_context(|| format!("Writing {:?}", path))?;
        Ok(())
    }

    pub fn default_window(&self) -> Window {
        if self.display.default_window == "month" {
            Window::Month
        } else {
            Window::Week
        }
    }

    pub fn fallback_line(&self) -> &str {
        self.motivation
            .fallback
            .as_deref()
            .filter(|line| !line.trim().is_empty())
            .unwrap_or(FALLBACK_LINE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert!(config.motivation.enabled);
        assert_eq!(config.motivation.language, "fa");
        assert_eq!(config.default_window(), Window::Week);
        assert_eq!(config.fallback_line(), FALLBACK_LINE);
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let config: AppConfig = toml::from_str(
            "[display]\ndefault_window = \"month\"\n\n[motivation]\nfallback = \"keep going\"\n",
        )
        .unwrap();
        assert_eq!(config.default_window(), Window::Month);
        assert!(config.motivation.enabled);
        assert_eq!(config.fallback_line(), "keep going");
    }

    #[test]
    fn blank_fallback_override_is_ignored() {
        let config: AppConfig =
            toml::from_str("[motivation]\nfallback = \"  \"\n").unwrap();
        assert_eq!(config.fallback_line(), FALLBACK_LINE);
    }

    #[test]
    fn config_roundtrips_through_toml() {
        let mut config = AppConfig::default();
        config.display.default_window = "month".to_string();
        let text = toml::to_string_pretty(&config).unwrap();
        let back: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(back.default_window(), Window::Month);
    }
}
