use std::{
    env,
    fmt::{self, Display},
    fs::read_to_string,
    str::FromStr,
};

use tracing::{info, warn};

pub const DEFAULT_PORT: u16 = 1111;
pub const DEFAULT_STORE_BACKEND: StoreBackend = StoreBackend::Memory;
pub const DEFAULT_REDIS_URL: &str = "redis://127.0.0.1:6379";
pub const DEFAULT_SHEET_KEY: &str = "leads:sheet";
pub const DEFAULT_CORS_MAX_AGE_SECS: u64 = 60 * 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Memory,
    Redis,
}

impl FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(StoreBackend::Memory),
            "redis" => Ok(StoreBackend::Redis),
            other => Err(format!("unknown store backend '{other}'")),
        }
    }
}

impl Display for StoreBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreBackend::Memory => f.write_str("memory"),
            StoreBackend::Redis => f.write_str("redis"),
        }
    }
}

pub struct Config {
    pub port: u16,
    pub store_backend: StoreBackend,
    pub redis_url: String,
    pub sheet_key: String,
    pub cors_max_age_secs: u64,
}

impl Config {
    pub fn load() -> Self {
        Self {
            port: try_load("RUST_PORT", DEFAULT_PORT),
            store_backend: try_load("STORE_BACKEND", DEFAULT_STORE_BACKEND),
            redis_url: read_secret("REDIS_URL")
                .unwrap_or_else(|| try_load("REDIS_URL", DEFAULT_REDIS_URL.to_string())),
            sheet_key: try_load("SHEET_KEY", DEFAULT_SHEET_KEY.to_string()),
            cors_max_age_secs: try_load("CORS_MAX_AGE_SECS", DEFAULT_CORS_MAX_AGE_SECS),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            store_backend: DEFAULT_STORE_BACKEND,
            redis_url: DEFAULT_REDIS_URL.to_string(),
            sheet_key: DEFAULT_SHEET_KEY.to_string(),
            cors_max_age_secs: DEFAULT_CORS_MAX_AGE_SECS,
        }
    }
}

fn var(key: &str) -> Result<String, ()> {
    env::var(key).map_err(|_| {
        warn!("Environment variable {key} not found, using default");
    })
}

fn try_load<T: FromStr + Display>(key: &str, default: T) -> T
where
    T::Err: Display,
{
    let Ok(value) = var(key) else {
        info!("{key} not set, using default: {default}");
        return default;
    };

    value
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
        })
        .expect("Environment misconfigured!")
}

fn read_secret(secret_name: &str) -> Option<String> {
    let path = format!("/run/secrets/{secret_name}");

    read_to_string(&path)
        .map(|s| s.trim().to_string())
        .map_err(|e| {
            info!("No {secret_name} secret file ({e}), falling back to environment");
        })
        .ok()
}
