use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use engine_logging::{engine_info, engine_warn};
use sentiment_core::DEFAULT_ORB_COUNT;
use sentiment_engine::PredictSettings;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_PATH: &str = "sentiment_app.ron";

/// User-editable settings. Fields missing from the file keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub base_url: String,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub orb_count: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        let settings = PredictSettings::default();
        Self {
            base_url: settings.base_url,
            connect_timeout_secs: settings.connect_timeout.as_secs(),
            request_timeout_secs: settings.request_timeout.as_secs(),
            orb_count: DEFAULT_ORB_COUNT,
        }
    }
}

impl AppConfig {
    pub fn predict_settings(&self) -> PredictSettings {
        PredictSettings {
            base_url: self.base_url.clone(),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            ..PredictSettings::default()
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config from {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config from {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
}

/// Reads the config file; `Ok(None)` when it does not exist.
pub fn read_config(path: &Path) -> Result<Option<AppConfig>, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    ron::from_str(&content)
        .map(Some)
        .map_err(|err| ConfigError::Parse {
            path: path.to_path_buf(),
            message: err.to_string(),
        })
}

/// Like [`read_config`], but never fails: problems are logged and the
/// defaults are used instead.
pub fn load_config(path: &Path) -> AppConfig {
    match read_config(path) {
        Ok(Some(config)) => {
            engine_info!("Loaded config from {:?}", path);
            config
        }
        Ok(None) => AppConfig::default(),
        Err(err) => {
            engine_warn!("{}; using defaults", err);
            AppConfig::default()
        }
    }
}
