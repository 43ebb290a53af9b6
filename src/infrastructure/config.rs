use crate::presentation::config::keybindings;
use crate::presentation::config::styles;

use std::path::{Path, PathBuf};

use config::ConfigError;
use serde::Deserialize;
use url::Url;

use crate::utils;

const CONFIG: &str = include_str!("../../.config/config.json5");

pub const DEFAULT_SERVICE_URL: &str = "http://127.0.0.1:8080";

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub keybindings: keybindings::KeyBindings,
    #[serde(default)]
    pub styles: styles::Styles,
    /// Base address of the arithmetic service
    #[serde(default)]
    pub service_url: String,
}

impl Config {
    /// Load the configuration from the platform config directory
    pub fn new() -> Result<Self, ConfigError> {
        Self::from_dirs(&utils::get_config_dir(), &utils::get_data_dir())
    }

    /// Load `config.*` from `config_dir` layered over the embedded defaults.
    /// A missing config file is not an error.
    pub fn from_dirs(config_dir: &Path, data_dir: &Path) -> Result<Self, ConfigError> {
        let default_config = Self::embedded_default()?;
        let mut builder = config::Config::builder()
            .set_default("_data_dir", data_dir.to_string_lossy().into_owned())?
            .set_default("_config_dir", config_dir.to_string_lossy().into_owned())?;

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
            ("config.ini", config::FileFormat::Ini),
        ];
        let mut found_config = false;
        for (file, format) in &config_files {
            builder = builder.add_source(
                config::File::from(config_dir.join(file))
                    .format(*format)
                    .required(false),
            );
            if config_dir.join(file).exists() {
                found_config = true
            }
        }
        if !found_config {
            log::info!(
                "No configuration file found in {}, using defaults",
                config_dir.display()
            );
        }

        let mut cfg: Self = builder.build()?.try_deserialize()?;

        // Merge default keybindings and styles under user values
        for (key, action) in default_config.keybindings.iter() {
            cfg.keybindings
                .entry(*key)
                .or_insert_with(|| action.clone());
        }
        for (style_key, style) in default_config.styles.iter() {
            cfg.styles
                .entry(style_key.clone())
                .or_insert_with(|| *style);
        }

        if cfg.service_url.is_empty() {
            cfg.service_url.clone_from(&default_config.service_url);
        }
        cfg.validate()?;

        Ok(cfg)
    }

    /// Configuration compiled into the binary
    pub fn embedded_default() -> Result<Self, ConfigError> {
        let mut cfg: Self = json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))?;
        if cfg.service_url.is_empty() {
            cfg.service_url = DEFAULT_SERVICE_URL.to_string();
        }
        Ok(cfg)
    }

    /// Replace the service address (command line override)
    pub fn with_service_url(mut self, service_url: impl Into<String>) -> Result<Self, ConfigError> {
        self.service_url = service_url.into();
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        Url::parse(&self.service_url).map_err(|e| {
            ConfigError::Message(format!("Invalid service_url `{}`: {e}", self.service_url))
        })?;
        Ok(())
    }
}
