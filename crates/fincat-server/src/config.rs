//! Server configuration

use serde::{Deserialize, Serialize};

/// Listen configuration for the HTTP server.
///
/// Resolution order: defaults, then `FINCAT_HOST`/`FINCAT_PORT` environment
/// variables, then explicit overrides (the CLI flags in the binary).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,
    /// TCP port to bind
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
        }
    }
}

impl ServerConfig {
    /// Apply `FINCAT_HOST` / `FINCAT_PORT` when set. An unparseable port is
    /// ignored in favor of the current value.
    pub fn with_env(mut self) -> Self {
        if let Ok(host) = std::env::var("FINCAT_HOST") {
            self.host = host;
        }
        if let Ok(port) = std::env::var("FINCAT_PORT") {
            if let Ok(port) = port.parse() {
                self.port = port;
            }
        }
        self
    }

    /// Address string suitable for `TcpListener::bind`.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.addr(), "127.0.0.1:8000");
    }

    #[test]
    fn test_addr_formatting() {
        let config = ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 9090,
        };
        assert_eq!(config.addr(), "0.0.0.0:9090");
    }
}
