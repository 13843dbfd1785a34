// src/config.rs
use ::config::{Config, ConfigError, Environment};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::env;
use std::fmt::Display;
use std::net::SocketAddr;

/// Runtime settings, read once at start-up.
///
/// `JOBTRACK_*` variables (optionally from a `.env` file) map onto the
/// renamed fields; `APP_ENV` and `LOG_FORMAT` keep their bare names.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub addr: SocketAddr,
    #[serde(rename = "db")]
    pub db_path: String,
    #[serde(rename = "schema")]
    pub schema_path: String,
    /// Owner id every job query is scoped to.
    #[serde(rename = "owner")]
    pub owner_id: String,
    #[serde(rename = "workers")]
    pub max_workers: usize,
    /// Cards shown per board column before "show more".
    pub board_page: usize,
    pub environment: String,
    /// `json` switches the log output to JSON lines.
    pub log_format: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            db_path: "jobs.sqlite3".to_string(),
            schema_path: "sql/schema.sql".to_string(),
            owner_id: "local".to_string(),
            max_workers: 8,
            board_page: 4,
            environment: "development".to_string(),
            log_format: "text".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        match sources() {
            Ok(config) => Self::from_config(&config),
            Err(e) => {
                // Logging is not up yet when config loads.
                eprintln!("warning: could not read configuration ({e}), using defaults");
                Self::default()
            }
        }
    }

    /// Deserializes `config`. When any value is invalid, each key is read on
    /// its own and the bad ones fall back to their defaults.
    pub fn from_config(config: &Config) -> Self {
        let cfg = config
            .clone()
            .try_deserialize::<Self>()
            .unwrap_or_else(|e| {
                eprintln!("warning: invalid configuration ({e}), checking keys one by one");
                Self::key_by_key(config)
            });
        cfg.normalized()
    }

    pub fn json_logs(&self) -> bool {
        self.log_format.eq_ignore_ascii_case("json")
    }

    fn key_by_key(config: &Config) -> Self {
        let d = Self::default();
        Self {
            addr: setting(config, "addr", d.addr),
            db_path: setting(config, "db", d.db_path),
            schema_path: setting(config, "schema", d.schema_path),
            owner_id: setting(config, "owner", d.owner_id),
            max_workers: setting(config, "workers", d.max_workers),
            board_page: setting(config, "board_page", d.board_page),
            environment: setting(config, "environment", d.environment),
            log_format: setting(config, "log_format", d.log_format),
        }
    }

    fn normalized(mut self) -> Self {
        self.owner_id = self.owner_id.trim().to_string();
        if self.owner_id.is_empty() {
            self.owner_id = Self::default().owner_id;
        }
        self.max_workers = self.max_workers.max(1);
        self.board_page = self.board_page.max(1);
        self
    }
}

fn sources() -> Result<Config, ConfigError> {
    Config::builder()
        .add_source(Environment::with_prefix("JOBTRACK"))
        .set_override_option("environment", env::var("APP_ENV").ok())?
        .set_override_option("log_format", env::var("LOG_FORMAT").ok())?
        .build()
}

/// Reads one key, falling back to `default` when unset or invalid.
fn setting<T>(config: &Config, key: &str, default: T) -> T
where
    T: DeserializeOwned + Display,
{
    match config.get::<T>(key) {
        Ok(v) => v,
        Err(ConfigError::NotFound(_)) => default,
        Err(e) => {
            eprintln!("warning: invalid {key} ({e}), using default {default}");
            default
        }
    }
}
