// Configuration module entry point
// Loads the startup configuration and owns the immutable application state

mod state;
mod types;

use std::io;
use std::net::{SocketAddr, ToSocketAddrs};

// Re-export public types
pub use state::AppState;
pub use types::{Config, LoggingConfig, PageConfig, ServerConfig};

impl Config {
    /// Load configuration from "config.toml" in the working directory,
    /// with the `HOST` and `PORT` environment variables applied on top.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(
            "config",
            std::env::var("HOST").ok(),
            std::env::var("PORT").ok(),
        )
    }

    /// Load configuration from the specified file path (without extension).
    ///
    /// The file is optional; built-in defaults cover every key. `host` and
    /// `port` override both the file and the defaults when present, so the
    /// environment always wins.
    pub fn load_from(
        config_path: &str,
        host: Option<String>,
        port: Option<String>,
    ) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .set_default("server.host", "localhost")?
            .set_default("server.port", 3000)?
            .set_default("page.file", "index.html")?
            .set_default("logging.access_log", false)?
            .set_override_option("server.host", host)?
            .set_override_option("server.port", port)?
            .build()?;

        settings.try_deserialize()
    }

    /// Resolve the configured host/port to a bindable socket address.
    ///
    /// Hostnames (including the default "localhost") go through the system
    /// resolver; the first resolved address wins.
    pub fn socket_addr(&self) -> io::Result<SocketAddr> {
        (self.server.host.as_str(), self.server.port)
            .to_socket_addrs()?
            .next()
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::AddrNotAvailable,
                    format!(
                        "no address found for {}:{}",
                        self.server.host, self.server.port
                    ),
                )
            })
    }
}
