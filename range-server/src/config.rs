//! Process configuration read from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use tracing::warn;

use crate::ekispert::EkispertConfig;
use crate::search::ApiKeys;

/// Default station file location.
const DEFAULT_STATION_DATA_PATH: &str = "data/stations.json";

/// Default listen address.
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// How often to reload the station file by default (24 hours).
const DEFAULT_STATION_REFRESH: Duration = Duration::from_secs(24 * 60 * 60);

/// Errors in environment-supplied settings.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A variable is set but cannot be parsed
    #[error("invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Everything `main` needs to start the server.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Ordered API keys; the first is primary, the second the fallback
    pub api_keys: ApiKeys,
    /// Range API client settings
    pub ekispert: EkispertConfig,
    /// JSON file the station table is loaded from
    pub station_data_path: PathBuf,
    /// Interval between station table reloads
    pub station_refresh: Duration,
    /// Address to listen on
    pub bind_addr: SocketAddr,
}

impl AppConfig {
    /// Read the configuration from process environment variables.
    ///
    /// A `.env` file in the working directory is loaded first, if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Err(e) = env_file_loaded(dotenvy::dotenv().map(|_| ())) {
            warn!(error = %e, ".env file could not be loaded");
        }
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_keys = match lookup("EKISPERT_API_KEY") {
            Some(list) => ApiKeys::parse(&list),
            None => ApiKeys::default(),
        };
        if api_keys.is_empty() {
            warn!("EKISPERT_API_KEY not set. Range searches will fail.");
        } else if api_keys.len() < 2 {
            warn!("only one API key configured; key rotation is unavailable");
        }

        let mut ekispert = EkispertConfig::new();
        if let Some(url) = lookup("EKISPERT_BASE_URL") {
            ekispert = ekispert.with_base_url(url);
        }
        if let Some(secs) = lookup("EKISPERT_TIMEOUT_SECS") {
            ekispert = ekispert.with_timeout(parse_var("EKISPERT_TIMEOUT_SECS", secs)?);
        }

        let station_data_path: PathBuf = lookup("STATION_DATA_PATH")
            .unwrap_or_else(|| DEFAULT_STATION_DATA_PATH.to_string())
            .into();

        let station_refresh = match lookup("STATION_REFRESH_SECS") {
            Some(secs) => Duration::from_secs(parse_var("STATION_REFRESH_SECS", secs)?),
            None => DEFAULT_STATION_REFRESH,
        };

        let bind_addr: SocketAddr = parse_var(
            "BIND_ADDR",
            lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
        )?;

        Ok(Self {
            api_keys,
            ekispert,
            station_data_path,
            station_refresh,
            bind_addr,
        })
    }
}

/// Whether a `.env` file was loaded. A missing file is not an error.
fn env_file_loaded(result: Result<(), dotenvy::Error>) -> Result<bool, dotenvy::Error> {
    match result {
        Ok(()) => Ok(true),
        Err(e) if e.not_found() => Ok(false),
        Err(e) => Err(e),
    }
}

fn parse_var<T: std::str::FromStr>(name: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid { name, value })
}
