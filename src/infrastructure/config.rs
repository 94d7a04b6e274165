use crate::presentation::config::keybindings;
use crate::presentation::config::styles;

use std::{
    env,
    path::{Path, PathBuf},
};

use config::ConfigError;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::{
    infrastructure::email::{EmailCredentials, DEFAULT_API_URL},
    utils,
};

const CONFIG: &str = include_str!("../../.config/config.json5");

pub const SERVICE_ID_ENV: &str = "FOLIO_EMAILJS_SERVICE_ID";
pub const TEMPLATE_ID_ENV: &str = "FOLIO_EMAILJS_TEMPLATE_ID";
pub const PUBLIC_KEY_ENV: &str = "FOLIO_EMAILJS_PUBLIC_KEY";

/// Directories the configuration was resolved against
#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default, rename = "_data_dir")]
    pub data_dir: PathBuf,
    #[serde(default, rename = "_config_dir")]
    pub config_dir: PathBuf,
}

/// Email provider settings; sending is enabled only when all three ids are present
#[derive(Clone, Debug, Deserialize)]
pub struct EmailJsConfig {
    #[serde(default)]
    pub service_id: Option<String>,
    #[serde(default)]
    pub template_id: Option<String>,
    #[serde(default)]
    pub public_key: Option<SecretString>,
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl Default for EmailJsConfig {
    fn default() -> Self {
        Self {
            service_id: None,
            template_id: None,
            public_key: None,
            api_url: default_api_url(),
        }
    }
}

impl EmailJsConfig {
    pub fn credentials(&self) -> Option<EmailCredentials> {
        let present = |v: Option<&str>| {
            v.map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };
        Some(EmailCredentials::new(
            present(self.service_id.as_deref())?,
            present(self.template_id.as_deref())?,
            SecretString::from(present(
                self.public_key.as_ref().map(|k| k.expose_secret()),
            )?),
        ))
    }

    pub fn is_configured(&self) -> bool {
        self.credentials().is_some()
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub keybindings: keybindings::KeyBindings,
    #[serde(default)]
    pub styles: styles::Styles,
    #[serde(default)]
    pub emailjs: EmailJsConfig,
}

impl Default for Config {
    /// The embedded defaults without any user files or environment applied
    fn default() -> Self {
        json5::from_str(CONFIG).unwrap_or_else(|e| {
            log::error!("Failed to load default config: {e}");
            Self {
                config: AppConfig::default(),
                keybindings: keybindings::KeyBindings::default(),
                styles: styles::Styles::default(),
                emailjs: EmailJsConfig::default(),
            }
        })
    }
}

impl Config {
    pub fn new() -> Result<Self, ConfigError> {
        Self::load(&utils::get_config_dir(), &utils::get_data_dir())
    }

    /// Layer user config files from `config_dir` and the `FOLIO_EMAILJS_*`
    /// environment over the embedded defaults. Missing files are fine.
    pub fn load(config_dir: &Path, data_dir: &Path) -> Result<Self, ConfigError> {
        let default_config: Config = json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))?;
        let mut builder = config::Config::builder()
            .set_default("_data_dir", data_dir.to_string_lossy().to_string())?
            .set_default("_config_dir", config_dir.to_string_lossy().to_string())?;

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
                "No configuration file in {}, using defaults",
                config_dir.display()
            );
        }

        builder = builder
            .set_override_option("emailjs.service_id", env::var(SERVICE_ID_ENV).ok())?
            .set_override_option("emailjs.template_id", env::var(TEMPLATE_ID_ENV).ok())?
            .set_override_option("emailjs.public_key", env::var(PUBLIC_KEY_ENV).ok())?;

        let mut cfg: Self = builder.build()?.try_deserialize()?;

        // Merge default keybindings into user config (flat mapping)
        for (keyseq, action) in default_config.keybindings.iter() {
            cfg.keybindings
                .entry(keyseq.clone())
                .or_insert_with(|| action.clone());
        }
        // Styles are merged per theme so a user can override a single colour
        for (theme, defaults) in default_config.styles.iter() {
            let user = cfg.styles.entry(*theme).or_default();
            for (style_key, style) in defaults {
                user.entry(style_key.clone()).or_insert_with(|| *style);
            }
        }

        Ok(cfg)
    }
}
