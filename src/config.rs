use crate::error::StockroomError;
use crate::types::Role;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Default config file, looked up in the working directory.
pub const CONFIG_FILE: &str = "stockroom.toml";

/// Prefix for environment overrides, e.g. `STOCKROOM_DATABASE_URL`.
pub const ENV_PREFIX: &str = "STOCKROOM_";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub database_url: String,
    pub create_if_missing: bool,
    pub acquire_timeout_secs: u64,
    pub loglevel: String,
    /// Report "Request recorded." even when the access request could not be stored.
    pub quiet_request_failures: bool,
    /// Hashed user table. When empty the built-in legacy table is used.
    pub users: Vec<UserEntry>,
}

/// One configured login: Argon2 PHC hash plus the role it grants.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserEntry {
    pub username: String,
    pub password_hash: String,
    pub role: Role,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite:stockroom.db".to_string(),
            create_if_missing: true,
            acquire_timeout_secs: 5,
            loglevel: "warn".to_string(),
            quiet_request_failures: false,
            users: Vec::new(),
        }
    }
}

impl Config {
    /// Defaults, then `stockroom.toml`, then `STOCKROOM_*` environment variables.
    pub fn load() -> Result<Self, StockroomError> {
        Self::load_from(CONFIG_FILE)
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, StockroomError> {
        let cfg: Self = Self::figment(path).extract()?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), StockroomError> {
        if self.acquire_timeout_secs == 0 {
            return Err(figment::Error::from(
                "acquire_timeout_secs must be at least 1".to_string(),
            )
            .into());
        }
        Ok(())
    }

    pub fn figment(path: impl AsRef<Path>) -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }
}
