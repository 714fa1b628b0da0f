//! Process settings, read from the environment.
//!
//! | Variable | Default |
//! |---|---|
//! | `SHOPFRONT_ADDR` | `0.0.0.0:8080` |
//! | `SHOPFRONT_CATALOG` | `config/catalog.toml` |
//! | `SHOPFRONT_LOG_FORMAT` | `pretty` (or `json`) |

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::Error;

pub const ADDR_VAR: &str = "SHOPFRONT_ADDR";
pub const CATALOG_VAR: &str = "SHOPFRONT_CATALOG";
pub const LOG_FORMAT_VAR: &str = "SHOPFRONT_LOG_FORMAT";

const DEFAULT_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_CATALOG: &str = "config/catalog.toml";

/// Source of environment variables.
///
/// Injected so tests can supply settings without touching the process
/// environment.
pub trait EnvironmentProvider {
    fn get_var(&self, key: &str) -> Option<String>;
}

/// Reads the real process environment.
pub struct SystemEnvironment;

impl EnvironmentProvider for SystemEnvironment {
    fn get_var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub addr: SocketAddr,
    pub catalog_path: PathBuf,
    pub log_format: LogFormat,
}

impl Config {
    pub fn from_env(env: &impl EnvironmentProvider) -> Result<Self, Error> {
        let addr = env.get_var(ADDR_VAR).unwrap_or_else(|| DEFAULT_ADDR.to_owned());
        let addr = addr.parse().map_err(|e| Error::Config {
            name: ADDR_VAR.to_owned(),
            reason: format!("`{addr}` is not a socket address: {e}"),
        })?;

        let catalog_path = env
            .get_var(CATALOG_VAR)
            .map_or_else(|| PathBuf::from(DEFAULT_CATALOG), PathBuf::from);

        let log_format = match env.get_var(LOG_FORMAT_VAR).as_deref() {
            Some(v) if v.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Pretty,
        };

        Ok(Self { addr, catalog_path, log_format })
    }
}
