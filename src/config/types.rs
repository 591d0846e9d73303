// Configuration types module
// Defines the startup configuration data structures

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub page: PageConfig,
    pub logging: LoggingConfig,
}

/// Network listener configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Served page configuration
#[derive(Debug, Deserialize, Clone)]
pub struct PageConfig {
    pub file: String,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub access_log: bool,
}

impl PageConfig {
    /// Resolve the configured file to the path served for the process
    /// lifetime.
    ///
    /// Absolute paths are used as-is. Relative paths anchor at the
    /// directory containing the running executable, falling back to the
    /// working directory when the executable path is unavailable.
    pub fn resolve(&self) -> PathBuf {
        let file = Path::new(&self.file);
        if file.is_absolute() {
            return file.to_path_buf();
        }

        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join(file)))
            .unwrap_or_else(|| file.to_path_buf())
    }
}
