use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5/weather";
pub const DEFAULT_USER_AGENT: &str = concat!("weather-alert/", env!("CARGO_PKG_VERSION"));
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;

pub const ENV_API_KEY: &str = "OPENWEATHER_API_KEY";
pub const ENV_BASE_URL: &str = "OPENWEATHER_BASE_URL";
pub const ENV_USER_AGENT: &str = "WEATHER_ALERT_USER_AGENT";
pub const ENV_HOST: &str = "WEATHER_ALERT_HOST";
pub const ENV_PORT: &str = "WEATHER_ALERT_PORT";

/// Credentials and endpoint for the OpenWeather current-weather API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenWeatherConfig {
    pub api_key: Option<String>,
    pub base_url: String,
}

impl Default for OpenWeatherConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// Bind address for the HTTP and SSE transports.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// user_agent = "weather-alert/0.1.0"
///
/// [openweather]
/// api_key = "..."
///
/// [server]
/// port = 8000
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Sent as the `User-Agent` header on every upstream request.
    pub user_agent: String,
    pub openweather: OpenWeatherConfig,
    pub server: ServerConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            openweather: OpenWeatherConfig::default(),
            server: ServerConfig::default(),
        }
    }
}

impl Config {
    /// Load config from disk (or defaults if there is no file yet), then
    /// apply environment overrides.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        let mut cfg = Self::load_from(&path)?;
        cfg.apply_env_overrides(|name| std::env::var(name).ok())?;
        Ok(cfg)
    }

    /// Load config from an explicit path without looking at the environment.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            // First run: no config file, return defaults.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to the platform config file.
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_file_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Save config to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-alert", "weather-alert")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Overlay values from the environment. `lookup` is `std::env::var` in
    /// production; tests pass a closure over a map.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(key) = get(ENV_API_KEY) {
            self.openweather.api_key = Some(key);
        }
        if let Some(url) = get(ENV_BASE_URL) {
            self.openweather.base_url = url;
        }
        if let Some(agent) = get(ENV_USER_AGENT) {
            self.user_agent = agent;
        }
        if let Some(host) = get(ENV_HOST) {
            self.server.host = host;
        }
        if let Some(port) = get(ENV_PORT) {
            self.server.port = port
                .trim()
                .parse()
                .with_context(|| format!("Invalid {ENV_PORT} value '{port}'"))?;
        }

        Ok(())
    }

    /// Set or replace the OpenWeather API key.
    pub fn set_api_key(&mut self, api_key: String) {
        self.openweather.api_key = Some(api_key);
    }

    /// Returns the API key, or an error with a hint on how to provide one.
    pub fn api_key(&self) -> Result<&str> {
        self.openweather
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                anyhow!(
                    "No OpenWeather API key configured.\n\
                     Hint: run `weather-alert configure` or set {ENV_API_KEY}."
                )
            })
    }
}
