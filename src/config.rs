//! Configuration Management

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use url::Url;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_API_KEY_ENV: &str = "API_KEY";

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Generation provider settings
    #[serde(default)]
    pub provider: ProviderConfig,
    /// Front-end settings
    #[serde(default)]
    pub cli: CliConfig,
}

/// Generation provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Model used for grounded generation
    pub model: String,
    /// Base URL of the Generative Language API
    pub api_base: Url,
    /// Environment variable holding the API key
    pub api_key_env: String,
}

/// Front-end configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Give up waiting after this many seconds (0 = wait indefinitely)
    #[serde(default)]
    pub request_timeout_secs: u64,
    /// Print results as JSON instead of a terminal report
    #[serde(default)]
    pub json: bool,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            api_base: Url::parse(DEFAULT_API_BASE).expect("default api base is a valid URL"),
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
        }
    }
}

impl Config {
    /// Validate config values.
    /// Returns Ok(()) if valid, or Err with a description of the first invalid field.
    pub fn validate(&self) -> Result<(), crate::Error> {
        if self.provider.model.trim().is_empty() {
            return Err(crate::Error::Configuration("model must not be empty".to_string()));
        }
        if self.provider.model.contains('/') {
            return Err(crate::Error::Configuration(format!(
                "model must be a bare model id, got {}",
                self.provider.model
            )));
        }
        match self.provider.api_base.scheme() {
            "http" | "https" => {}
            other => {
                return Err(crate::Error::Configuration(format!(
                    "api_base must use http or https, got {}",
                    other
                )))
            }
        }
        if self.provider.api_key_env.trim().is_empty() {
            return Err(crate::Error::Configuration(
                "api_key_env must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Load config from file
    pub fn load(path: &PathBuf) -> Result<Self, crate::Error> {
        let content = std::fs::read_to_string(path)?;
        let config: Self =
            toml::from_str(&content).map_err(|e| crate::Error::Configuration(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from default location
    pub fn load_default() -> Result<Self, crate::Error> {
        let path = Self::default_path();
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply `VERITAS_MODEL` and `VERITAS_API_BASE` on top of the file values.
    pub fn apply_env_overrides(&mut self) -> Result<(), crate::Error> {
        self.apply_overrides(
            std::env::var("VERITAS_MODEL").ok(),
            std::env::var("VERITAS_API_BASE").ok(),
        )
    }

    fn apply_overrides(
        &mut self,
        model: Option<String>,
        api_base: Option<String>,
    ) -> Result<(), crate::Error> {
        if let Some(model) = model.filter(|m| !m.trim().is_empty()) {
            self.provider.model = model.trim().to_string();
        }
        if let Some(raw) = api_base.filter(|b| !b.trim().is_empty()) {
            self.provider.api_base = Url::parse(raw.trim()).map_err(|e| {
                crate::Error::Configuration(format!("VERITAS_API_BASE is not a URL: {e}"))
            })?;
        }
        self.validate()
    }

    /// Save config to file
    pub fn save(&self, path: &PathBuf) -> Result<(), crate::Error> {
        let content = self.to_toml()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get default config path
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .map(|h| h.join(".veritas").join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }

    /// Generate TOML representation
    pub fn to_toml(&self) -> Result<String, crate::Error> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Configuration(e.to_string()))
    }
}
