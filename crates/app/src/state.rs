use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use url::Url;

pub const APP_NAME: &str = "tcv";
pub const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Remote base URL for the Trimble Connect API
    pub remote: Url,

    /// Optional stored bearer credential. The --token flag and the
    /// TCV_ACCESS_TOKEN environment variable take precedence; storing one
    /// here is a convenience for long-lived tokens.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            remote: Url::parse(connect::DEFAULT_REMOTE).expect("valid default remote"),
            access_token: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppState {
    /// Path to the tcv directory (~/.tcv)
    pub tcv_dir: PathBuf,
    /// Path to the config file
    pub config_path: PathBuf,
    /// Loaded configuration
    pub config: AppConfig,
}

impl AppState {
    /// Get the tcv directory path (~/.tcv)
    pub fn tcv_dir() -> Result<PathBuf, StateError> {
        let home = dirs::home_dir().ok_or(StateError::NoHomeDirectory)?;
        Ok(home.join(format!(".{}", APP_NAME)))
    }

    /// Initialize a new tcv state directory
    pub fn init(config: AppConfig) -> Result<Self, StateError> {
        Self::init_at(Self::tcv_dir()?, config)
    }

    /// Load existing state from the tcv directory
    pub fn load() -> Result<Self, StateError> {
        Self::load_at(Self::tcv_dir()?)
    }

    fn init_at(tcv_dir: PathBuf, config: AppConfig) -> Result<Self, StateError> {
        if tcv_dir.exists() {
            return Err(StateError::AlreadyInitialized);
        }

        fs::create_dir_all(&tcv_dir)?;

        let config_path = tcv_dir.join(CONFIG_FILE_NAME);
        let config_toml = toml::to_string_pretty(&config)?;
        fs::write(&config_path, config_toml)?;

        Ok(Self {
            tcv_dir,
            config_path,
            config,
        })
    }

    fn load_at(tcv_dir: PathBuf) -> Result<Self, StateError> {
        if !tcv_dir.exists() {
            return Err(StateError::NotInitialized);
        }

        let config_path = tcv_dir.join(CONFIG_FILE_NAME);
        if !config_path.exists() {
            return Err(StateError::MissingFile(CONFIG_FILE_NAME.to_string()));
        }

        let config_toml = fs::read_to_string(&config_path)?;
        let config: AppConfig = toml::from_str(&config_toml)?;

        Ok(Self {
            tcv_dir,
            config_path,
            config,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("tcv directory not initialized. Run 'tcv init' first")]
    NotInitialized,

    #[error("tcv directory already initialized")]
    AlreadyInitialized,

    #[error("no home directory found")]
    NoHomeDirectory,

    #[error("missing required file: {0}")]
    MissingFile(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDe(#[from] toml::de::Error),
}
