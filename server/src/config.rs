//! Server Configuration
//!
//! Command-line flags, each with an environment variable fallback.

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "roadmap-server", version, about = "REST API for the product roadmap board")]
pub struct ServerConfig {
    /// Interface to bind
    #[arg(long, env = "ROADMAP_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(long, short, env = "ROADMAP_PORT", default_value_t = 5000)]
    pub port: u16,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, env = "ROADMAP_LOG", default_value = "info")]
    pub log_level: String,

    /// Directory for rotated log files (stderr only when absent)
    #[arg(long, env = "ROADMAP_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// Directory with the built UI, served at `/`
    #[arg(long, env = "ROADMAP_STATIC_DIR")]
    pub static_dir: Option<PathBuf>,

    /// Allow cross-origin requests (UI served from another origin)
    #[arg(long, env = "ROADMAP_CORS")]
    pub cors: bool,
}

impl ServerConfig {
    pub fn bind_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse()
            .map_err(|e| anyhow::anyhow!("invalid bind address '{}': {}", addr, e))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            log_level: "info".to_string(),
            log_dir: None,
            static_dir: None,
            cors: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags() {
        let parsed = ServerConfig::try_parse_from([
            "roadmap-server",
            "--host",
            "0.0.0.0",
            "--port",
            "8080",
            "--static-dir",
            "dist",
            "--cors",
        ])
        .unwrap();
        assert_eq!(parsed.bind_addr().unwrap().to_string(), "0.0.0.0:8080");
        assert_eq!(parsed.static_dir, Some(PathBuf::from("dist")));
        assert!(parsed.cors);
    }

    #[test]
    fn test_bad_host_is_error() {
        let config = ServerConfig {
            host: "not a host".to_string(),
            ..Default::default()
        };
        assert!(config.bind_addr().is_err());
    }
}
