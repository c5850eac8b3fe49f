use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{env, fs, path::PathBuf, time::Duration};

pub const DEFAULT_BASE_URL: &str = "http://api.weatherapi.com/v1";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

pub const API_KEY_ENV: &str = "WEATHER_API_KEY";
pub const BASE_URL_ENV: &str = "WEATHER_BASE_URL";

/// Settings for the upstream weather provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Upper bound on one outbound request, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ProviderConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port() }
    }
}

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// [provider]
/// api_key = "..."
///
/// [server]
/// port = 8000
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub provider: ProviderConfig,

    #[serde(default)]
    pub server: ServerConfig,
}

impl Config {
    /// Load config from disk, or return defaults if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        let cfg: Config = toml::from_str(contents)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        if self.provider.timeout_secs == 0 {
            return Err(anyhow!("provider.timeout_secs must be greater than zero"));
        }
        Ok(())
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-proxy", "weather-server")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Apply `WEATHER_API_KEY` / `WEATHER_BASE_URL` from the process environment.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(env::var(API_KEY_ENV).ok(), env::var(BASE_URL_ENV).ok());
    }

    fn apply_overrides(&mut self, api_key: Option<String>, base_url: Option<String>) {
        if let Some(key) = api_key.filter(|k| !k.trim().is_empty()) {
            self.provider.api_key = Some(key);
        }
        if let Some(url) = base_url.filter(|u| !u.trim().is_empty()) {
            self.provider.base_url = url;
        }
    }

    pub fn set_api_key(&mut self, api_key: String) {
        self.provider.api_key = Some(api_key);
    }

    /// Returns the provider API key or an error with a hint on how to set it.
    pub fn require_api_key(&self) -> Result<&str> {
        self.provider.api_key.as_deref().filter(|k| !k.is_empty()).ok_or_else(|| {
            anyhow!(
                "No API key configured for the weather provider.\n\
                 Hint: run `weather-server configure` or set {API_KEY_ENV}."
            )
        })
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}
