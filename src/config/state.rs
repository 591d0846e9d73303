// Application state module
// Immutable runtime state shared by request handlers

use std::path::PathBuf;

use super::types::Config;

/// Application state
///
/// Built once at startup and never mutated afterwards; handlers share it
/// behind an `Arc` and only ever read from it.
pub struct AppState {
    pub config: Config,
    /// Page path resolved at startup, constant for the process lifetime
    pub page_path: PathBuf,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let page_path = config.page.resolve();
        Self { config, page_path }
    }
}
