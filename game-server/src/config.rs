use std::env;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

/// Where the golfer catalog is read from.
#[derive(Debug, Clone, PartialEq)]
pub enum GolferSourceConfig {
    Url(String),
    File(PathBuf),
}

/// Startup configuration. Read once in `main` and handed to the components
/// that need it; nothing else looks at the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub database_url: String,
    pub golfer_source: GolferSourceConfig,
    /// Fixed seed for puzzle selection, for reproducible environments
    pub rng_seed: Option<u64>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
    #[error("Set GOLFERS_URL or GOLFERS_FILE to locate the golfer catalog")]
    MissingGolferSource,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from any key/value lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = parse_or("HOST", lookup("HOST"), IpAddr::from([127, 0, 0, 1]))?;
        let port = parse_or("PORT", lookup("PORT"), 8080)?;
        let database_url = lookup("DATABASE_URL")
            .unwrap_or_else(|| "sqlite://golf_wordle.db?mode=rwc".to_string());

        let golfer_source = match (lookup("GOLFERS_URL"), lookup("GOLFERS_FILE")) {
            (Some(url), _) if !url.trim().is_empty() => GolferSourceConfig::Url(url),
            (_, Some(path)) if !path.trim().is_empty() => GolferSourceConfig::File(PathBuf::from(path)),
            _ => return Err(ConfigError::MissingGolferSource),
        };

        let rng_seed = match lookup("PUZZLE_RNG_SEED") {
            Some(value) => Some(parse_value("PUZZLE_RNG_SEED", &value)?),
            None => None,
        };

        Ok(Self {
            host,
            port,
            database_url,
            golfer_source,
            rng_seed,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_or<T: std::str::FromStr>(name: &'static str, value: Option<String>, default: T) -> Result<T, ConfigError> {
    match value {
        Some(value) => parse_value(name, &value),
        None => Ok(default),
    }
}

fn parse_value<T: std::str::FromStr>(name: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        name,
        value: value.to_string(),
    })
}
