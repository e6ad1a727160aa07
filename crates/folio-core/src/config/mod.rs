//! Configuration management with file persistence

use anyhow::{Context, anyhow};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::Error;
use crate::view::View;

/// Folio configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub latency: LatencyConfig,
    pub health: HealthConfig,
    pub display: DisplayConfig,
}

/// Simulated per-call latency of the api shim, in milliseconds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LatencyConfig {
    pub enabled: bool,
    pub health_ms: u64,
    pub profile_ms: u64,
    pub projects_ms: u64,
    pub top_skills_ms: u64,
    pub search_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthConfig {
    /// Seconds between liveness probes
    pub interval_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// View shown on startup
    pub default_view: String,
    /// Marker inserted before a highlighted match
    pub highlight_open: String,
    /// Marker inserted after a highlighted match
    pub highlight_close: String,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            health_ms: 100,
            profile_ms: 200,
            projects_ms: 150,
            top_skills_ms: 200,
            search_ms: 200,
        }
    }
}

impl LatencyConfig {
    /// No delay on any call
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    /// Delay to apply for a call configured at `ms`
    pub fn delay(&self, ms: u64) -> Duration {
        if self.enabled {
            Duration::from_millis(ms)
        } else {
            Duration::ZERO
        }
    }
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self { interval_secs: 30 }
    }
}

impl HealthConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            default_view: View::Profile.as_str().to_string(),
            highlight_open: "[".to_string(),
            highlight_close: "]".to_string(),
        }
    }
}

impl DisplayConfig {
    /// The configured startup view
    pub fn default_view(&self) -> crate::Result<View> {
        self.default_view.parse()
    }
}

const KEYS: &[&str] = &[
    "latency.enabled",
    "latency.health_ms",
    "latency.profile_ms",
    "latency.projects_ms",
    "latency.top_skills_ms",
    "latency.search_ms",
    "health.interval_secs",
    "display.default_view",
    "display.highlight_open",
    "display.highlight_close",
];

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> anyhow::Result<PathBuf> {
        let dir = if let Ok(custom_dir) = env::var("FOLIO_CONFIG_DIR") {
            PathBuf::from(custom_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| anyhow!("Could not determine config directory"))?
                .join("folio")
        };
        Ok(dir)
    }

    /// Get the config file path
    pub fn config_path() -> anyhow::Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load configuration from file, or defaults if it doesn't exist
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            // Return default config without creating file
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to a specific file, creating parent directories
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        self.validate()?;

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create config directory: {}", dir.display()))?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        self.display
            .default_view()
            .map_err(|e| config_error(format!("display.default_view: {}", e)))?;
        if self.health.interval_secs == 0 {
            return Err(config_error("health.interval_secs must be greater than 0"));
        }
        if self.display.highlight_open.is_empty() || self.display.highlight_close.is_empty() {
            return Err(config_error("Highlight markers must not be empty"));
        }
        Ok(())
    }

    /// Get a configuration value by key
    pub fn get(&self, key: &str) -> anyhow::Result<String> {
        match key {
            "latency.enabled" => Ok(self.latency.enabled.to_string()),
            "latency.health_ms" => Ok(self.latency.health_ms.to_string()),
            "latency.profile_ms" => Ok(self.latency.profile_ms.to_string()),
            "latency.projects_ms" => Ok(self.latency.projects_ms.to_string()),
            "latency.top_skills_ms" => Ok(self.latency.top_skills_ms.to_string()),
            "latency.search_ms" => Ok(self.latency.search_ms.to_string()),

            "health.interval_secs" => Ok(self.health.interval_secs.to_string()),

            "display.default_view" => Ok(self.display.default_view.clone()),
            "display.highlight_open" => Ok(self.display.highlight_open.clone()),
            "display.highlight_close" => Ok(self.display.highlight_close.clone()),

            _ => Err(unknown_key(key)),
        }
    }

    /// Set a configuration value by key
    pub fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        let parse_ms = |value: &str| -> anyhow::Result<u64> {
            value
                .parse()
                .map_err(|_| config_error(format!("Invalid millisecond value for {}: {}", key, value)))
        };

        match key {
            "latency.enabled" => {
                self.latency.enabled = value
                    .parse()
                    .map_err(|_| config_error(format!("Invalid boolean value: {}", value)))?;
            }
            "latency.health_ms" => self.latency.health_ms = parse_ms(value)?,
            "latency.profile_ms" => self.latency.profile_ms = parse_ms(value)?,
            "latency.projects_ms" => self.latency.projects_ms = parse_ms(value)?,
            "latency.top_skills_ms" => self.latency.top_skills_ms = parse_ms(value)?,
            "latency.search_ms" => self.latency.search_ms = parse_ms(value)?,

            "health.interval_secs" => {
                let secs: u64 = value
                    .parse()
                    .map_err(|_| config_error(format!("Invalid interval_secs value: {}", value)))?;
                if secs == 0 {
                    return Err(config_error("health.interval_secs must be greater than 0"));
                }
                self.health.interval_secs = secs;
            }

            "display.default_view" => {
                let view: View = value
                    .parse()
                    .map_err(|e| config_error(format!("display.default_view: {}", e)))?;
                self.display.default_view = view.as_str().to_string();
            }
            "display.highlight_open" | "display.highlight_close" => {
                if value.is_empty() {
                    return Err(config_error("Highlight markers must not be empty"));
                }
                if key == "display.highlight_open" {
                    self.display.highlight_open = value.to_string();
                } else {
                    self.display.highlight_close = value.to_string();
                }
            }

            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }

    /// List all configuration keys and their values
    pub fn list(&self) -> anyhow::Result<Vec<(String, String)>> {
        KEYS.iter()
            .map(|key| {
                let value = self.get(key)?;
                Ok((key.to_string(), value))
            })
            .collect()
    }

    /// Reset configuration to defaults
    pub fn reset() -> anyhow::Result<()> {
        let path = Self::config_path()?;
        if path.exists() {
            fs::remove_file(&path)
                .with_context(|| format!("Failed to remove config file: {}", path.display()))?;
        }
        Ok(())
    }
}

fn config_error(message: impl Into<String>) -> anyhow::Error {
    Error::ConfigError(message.into()).into()
}

fn unknown_key(key: &str) -> anyhow::Error {
    config_error(format!("Unknown configuration key: {}", key))
}
