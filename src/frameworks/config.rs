use serde::Deserialize;
use std::{
    env,
    io,
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::Path,
    time::Duration,
};

// Runtime/server settings. Batch size is not configurable.

pub const CONFIG_PATH_ENV: &str = "MATCHMAKING_CONFIG";
pub const HOST_ENV: &str = "MATCHMAKING_HOST";
pub const PORT_ENV: &str = "MATCHMAKING_PORT";
pub const SHUTDOWN_TIMEOUT_ENV: &str = "MATCHMAKING_SHUTDOWN_TIMEOUT_SECS";
pub const REQUEST_TIMEOUT_ENV: &str = "MATCHMAKING_REQUEST_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    // Grace period for in-flight requests after a shutdown signal.
    pub shutdown_timeout_secs: u64,
    // Upper bound on handling a single request; slower ones get a 408.
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8080,
            shutdown_timeout_secs: 15,
            request_timeout_secs: 10,
        }
    }
}

impl ServerConfig {
    // Defaults, then the optional TOML file, then environment overrides.
    pub fn load() -> io::Result<Self> {
        let mut config = match env::var(CONFIG_PATH_ENV) {
            Ok(path) => Self::from_file(Path::new(&path))?,
            Err(_) => Self::default(),
        };
        config.apply_overrides(|key| env::var(key).ok());
        Ok(config)
    }

    pub fn from_file(path: &Path) -> io::Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw).map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("invalid config file {}: {e}", path.display()),
            )
        })
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }

    // Values that fail to parse keep whatever was configured before.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(host) = lookup(HOST_ENV).and_then(|v| v.parse().ok()) {
            self.host = host;
        }
        if let Some(port) = lookup(PORT_ENV).and_then(|v| v.parse().ok()) {
            self.port = port;
        }
        if let Some(secs) = lookup(SHUTDOWN_TIMEOUT_ENV).and_then(|v| v.parse().ok()) {
            self.shutdown_timeout_secs = secs;
        }
        if let Some(secs) = lookup(REQUEST_TIMEOUT_ENV).and_then(|v| v.parse().ok()) {
            self.request_timeout_secs = secs;
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn shutdown_timeout(&self) -> Duration {
        Duration::from_secs(self.shutdown_timeout_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
