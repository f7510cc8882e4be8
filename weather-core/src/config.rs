use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::Deserialize;
use tracing::debug;
use std::{
    env, fs,
    path::{Path, PathBuf},
    time::Duration,
};

/// Environment variable holding the OpenWeather API key.
pub const API_KEY_VAR: &str = "API_KEY";

pub const DEFAULT_ENDPOINT: &str = "https://api.openweathermap.org/data/2.5/weather";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Optional overrides stored on disk.
///
/// Example TOML:
/// endpoint = "https://api.openweathermap.org/data/2.5/weather"
/// timeout_secs = 30
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub endpoint: String,
    pub timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Settings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Load settings from the platform config file, or defaults if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        Self::load_optional(Self::config_file_path().as_deref())
    }

    /// No resolvable config location counts the same as a missing file.
    fn load_optional(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => {
                debug!("no platform config directory, using default settings");
                Ok(Self::default())
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(settings)
    }

    /// Path to the config file, if the platform has a home directory to put it in.
    pub fn config_file_path() -> Option<PathBuf> {
        ProjectDirs::from("dev", "weatherscan", "weatherscan")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

/// Everything a lookup needs: the credential plus the request settings.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub settings: Settings,
}

impl Config {
    pub fn new(api_key: String, settings: Settings) -> Self {
        Self { api_key, settings }
    }
}

/// Read the API key from [`API_KEY_VAR`].
pub fn api_key_from_env() -> Result<String> {
    read_api_key(env::var(API_KEY_VAR))
}

fn read_api_key(var: Result<String, env::VarError>) -> Result<String> {
    var.map_err(|err| match err {
        env::VarError::NotPresent => {
            anyhow!("API key not found in environment variable {API_KEY_VAR}.")
        }
        env::VarError::NotUnicode(_) => {
            anyhow!("Environment variable {API_KEY_VAR} is not valid UTF-8.")
        }
    })
}
