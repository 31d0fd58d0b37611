//! Environment-derived runtime configuration.

use std::env;
use std::path::PathBuf;

use tracing::warn;

const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Root directory holding the model artifact groups.
    pub model_dir: PathBuf,
    /// TCP port the API binds on.
    pub port: u16,
    /// Directory for daily-rolling log files.
    pub log_dir: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let model_dir = env::var("AGRISHIELD_MODEL_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("models"));

        let port = match env::var("AGRISHIELD_PORT") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                warn!(value = %raw, "AGRISHIELD_PORT is not a valid port, using default");
                DEFAULT_PORT
            }),
            Err(_) => DEFAULT_PORT,
        };

        let log_dir = env::var("AGRISHIELD_LOG_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("logs"));

        Self {
            model_dir,
            port,
            log_dir,
        }
    }
}
