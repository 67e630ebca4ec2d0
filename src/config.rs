// ⚙️ Server configuration from environment variables

use anyhow::{Context, Result};
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use tracing::Level;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DATA_PATH: &str = "movieData/movieData.json";
pub const DEFAULT_PUBLIC_DIR: &str = "public";

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub data_path: PathBuf,
    pub public_dir: PathBuf,
    pub log_level: Level,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)),
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            public_dir: PathBuf::from(DEFAULT_PUBLIC_DIR),
            log_level: Level::INFO,
        }
    }
}

impl ServerConfig {
    /// Read `MOVIE_CATALOG_HOST`, `PORT`, `MOVIE_DATA_PATH`, `MOVIE_PUBLIC_DIR`, `MOVIE_LOG_LEVEL`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env` but against any key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ServerConfig::default();

        let host: IpAddr = match lookup("MOVIE_CATALOG_HOST") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("Invalid MOVIE_CATALOG_HOST: {:?}", raw))?,
            None => defaults.bind_addr.ip(),
        };

        let port: u16 = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("Invalid PORT: {:?}", raw))?,
            None => defaults.bind_addr.port(),
        };

        let log_level: Level = match lookup("MOVIE_LOG_LEVEL") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("Invalid MOVIE_LOG_LEVEL: {:?}", raw))?,
            None => defaults.log_level,
        };

        Ok(ServerConfig {
            bind_addr: SocketAddr::new(host, port),
            data_path: lookup("MOVIE_DATA_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_path),
            public_dir: lookup("MOVIE_PUBLIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.public_dir),
            log_level,
        })
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.bind_addr.port(), 3000);
        assert_eq!(config.data_path, PathBuf::from("movieData/movieData.json"));
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("MOVIE_CATALOG_HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("MOVIE_DATA_PATH", "/srv/movies.json"),
            ("MOVIE_PUBLIC_DIR", "/srv/public"),
            ("MOVIE_LOG_LEVEL", "debug"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr, "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(config.data_path, PathBuf::from("/srv/movies.json"));
        assert_eq!(config.public_dir, PathBuf::from("/srv/public"));
        assert_eq!(config.log_level, Level::DEBUG);
    }

    #[test]
    fn test_invalid_port() {
        let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_invalid_host_and_level() {
        assert!(ServerConfig::from_lookup(lookup_from(&[("MOVIE_CATALOG_HOST", "nowhere")])).is_err());
        assert!(ServerConfig::from_lookup(lookup_from(&[("MOVIE_LOG_LEVEL", "loud")])).is_err());
    }
}
