use crate::{Result, TtlSecs};
use tracing::{info, warn};

pub struct Config {
    pub default_ttl: TtlSecs,
}

impl Config {
    pub const TTL_VAR: &str = "CACHE_DEFAULT_TTL";
    const DEFAULT_TTL_SECS: u64 = 300;

    /// Reads `.env` when present, then the process environment.
    pub fn load() -> Result<Self> {
        match dotenvy::dotenv() {
            Ok(path) => info!("Loaded environment variables from {}", path.display()),
            Err(_) => info!("No .env file found, using system environment variables"),
        }
        Self::from_env()
    }

    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let default_ttl = match lookup(Self::TTL_VAR) {
            Some(raw) => raw.parse::<TtlSecs>()?,
            None => {
                warn!(
                    "{} not set, using default ttl of {}s",
                    Self::TTL_VAR,
                    Self::DEFAULT_TTL_SECS
                );
                TtlSecs::from_secs(Self::DEFAULT_TTL_SECS)?
            }
        };

        info!("Cache default ttl: {}", default_ttl);
        Ok(Self { default_ttl })
    }
}
