use std::env;
use std::net::SocketAddr;
use thiserror::Error;

const ADDR_ENV: &str = "VISTAHAVEN_ADDR";
const WORKERS_ENV: &str = "VISTAHAVEN_WORKERS";


#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub addr: SocketAddr,
    pub max_workers: usize,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("VISTAHAVEN_ADDR is not a socket address: {0}")]
    InvalidAddr(String),
    #[error("VISTAHAVEN_WORKERS must be a positive integer, got {0:?}")]
    InvalidWorkers(String),
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            max_workers: 8,
        }
    }
}

impl Config {
    /// Reads `.env` (if present) and then the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let addr = match lookup(ADDR_ENV) {
            None => defaults.addr,
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidAddr(raw.clone()))?,
        };

        let max_workers = match lookup(WORKERS_ENV) {
            None => defaults.max_workers,
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => return Err(ConfigError::InvalidWorkers(raw)),
            },
        };

        Ok(Self { addr, max_workers })
    }
}
