// src/core/config.rs
use std::env;
use std::path::PathBuf;

use log::LevelFilter;

// Configuration for the generator application
#[derive(Debug, Clone)]
pub struct Config {
    // Password Generation
    pub default_password_length: usize,

    // History
    pub history_file: Option<PathBuf>,

    // Web Interface
    pub web_enabled: bool,
    pub web_port: u16,
    pub web_address: String,

    // Logging
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Password Generation
            default_password_length: 12,

            // History
            history_file: None, // Will be initialized in load()

            // Web Interface
            web_enabled: true,
            web_port: 5000,
            web_address: "127.0.0.1".to_string(),

            // Logging
            log_level: LevelFilter::Info,
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        let mut config = Config::default();

        // Default the history file into the app config dir
        config.history_file = crate::utils::get_app_config_dir().map(|path| path.join("history.json"));

        // Password Generation
        if let Ok(val) = env::var("DEFAULT_PASSWORD_LENGTH") {
            if let Ok(length) = val.parse() {
                config.default_password_length = length;
            }
        }

        // History
        if let Ok(file) = env::var("HISTORY_FILE") {
            config.history_file = Some(PathBuf::from(file));
        }

        // Web Interface
        if let Ok(val) = env::var("WEB_ENABLED") {
            if let Ok(enabled) = val.parse() {
                config.web_enabled = enabled;
            }
        }

        if let Ok(val) = env::var("WEB_PORT") {
            if let Ok(port) = val.parse() {
                config.web_port = port;
            }
        }

        if let Ok(address) = env::var("WEB_ADDRESS") {
            config.web_address = address;
        }

        // Logging
        if let Ok(level) = env::var("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => {}
            }
        }

        config
    }

    // Create directories needed for operation
    pub fn ensure_directories_exist(&self) {
        if let Some(parent) = self.history_file.as_ref().and_then(|f| f.parent()) {
            if !parent.exists() {
                if let Err(e) = std::fs::create_dir_all(parent) {
                    log::warn!("Failed to create history directory: {}", e);
                }
            }
        }
    }
}
