use std::{env, net::SocketAddr, path::PathBuf};

/// Renders allowed to run at once when `YEARDOTS_MAX_RENDERS` is unset.
pub const DEFAULT_MAX_RENDERS: usize = 4;

/// HTTP server settings, read from the environment (and `.env` if present).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Extra font directory loaded on top of the system fonts.
    pub font_dir: Option<PathBuf>,
    /// Upper bound on concurrent image renders. Further requests wait for a slot.
    pub max_renders: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            font_dir: None,
            max_renders: DEFAULT_MAX_RENDERS,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key/value source; used by `from_env` and tests.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let host = lookup("YEARDOTS_HOST")
            .filter(|h| !h.trim().is_empty())
            .unwrap_or(defaults.host);

        let port = match lookup("YEARDOTS_PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => defaults.port,
        };

        let font_dir = lookup("YEARDOTS_FONT_DIR")
            .filter(|d| !d.trim().is_empty())
            .map(PathBuf::from);

        let max_renders = match lookup("YEARDOTS_MAX_RENDERS") {
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => return Err(ConfigError::InvalidMaxRenders(raw)),
            },
            None => defaults.max_renders,
        };

        Ok(Self {
            host,
            port,
            font_dir,
            max_renders,
        })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ConfigError::InvalidHost(self.host.clone()))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid port number: {0:?}")]
    InvalidPort(String),

    #[error("invalid host address: {0:?}")]
    InvalidHost(String),

    #[error("max renders must be a positive integer: {0:?}")]
    InvalidMaxRenders(String),
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
