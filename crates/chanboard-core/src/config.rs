//! Runtime configuration
//!
//! Values normally arrive from CLI flags or environment variables; the
//! defaults here match an unconfigured deployment.

use crate::error::CoreError;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

/// Where raw channel counters are read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceConfig {
    /// SQLite database holding the `channels` table
    pub db_path: PathBuf,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from("chanboard.db"),
        }
    }
}

impl SourceConfig {
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.db_path.as_os_str().is_empty() {
            return Err(CoreError::InvalidConfig {
                message: "database path must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

/// HTTP server settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind: IpAddr,
    pub port: u16,
    /// Dashboard auto-refresh interval in seconds
    pub refresh_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8080,
            refresh_secs: 60,
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.port == 0 {
            return Err(CoreError::InvalidConfig {
                message: "server port must be between 1 and 65535".to_string(),
            });
        }
        if self.refresh_secs == 0 {
            return Err(CoreError::InvalidConfig {
                message: "refresh interval must be at least 1 second".to_string(),
            });
        }
        Ok(())
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }
}
