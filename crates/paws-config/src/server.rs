//! HTTP server configuration.

use serde::{Deserialize, Serialize};

fn default_host() -> String {
    "127.0.0.1".to_string()
}

const fn default_port() -> u16 {
    3000
}

const fn default_max_records() -> usize {
    10_000
}

/// Default upload cap: 5 MiB.
const fn default_max_upload_bytes() -> usize {
    5 * 1024 * 1024
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Interface to bind.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind. `0` picks an ephemeral port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Largest accepted request body for `POST /api/upload`.
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,

    /// Most reports, and most adoption requests, public submissions may grow
    /// the in-memory board to. Further submissions get `503`.
    #[serde(default = "default_max_records")]
    pub max_records: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_upload_bytes: default_max_upload_bytes(),
            max_records: default_max_records(),
        }
    }
}

impl ServerConfig {
    /// `host:port` suitable for `TcpListener::bind`.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 3000);
        assert_eq!(config.max_upload_bytes, 5 * 1024 * 1024);
        assert_eq!(config.max_records, 10_000);
        assert_eq!(config.bind_address(), "127.0.0.1:3000");
    }
}
