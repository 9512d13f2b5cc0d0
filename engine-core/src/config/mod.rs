use crate::error::EngineError;
use config::{Config as Cfg, File};
use serde::Deserialize;
use uuid::Uuid;

/// Connection settings for the PostgreSQL store.
#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

/// Engine settings, layered from `configuration.*` and `APP__`-prefixed
/// environment variables.
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Admin identities that bypass every quota check.
    #[serde(default)]
    pub admin_user_ids: Vec<Uuid>,

    #[serde(default)]
    pub database: Option<DatabaseSettings>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            log_level: default_log_level(),
            admin_user_ids: Vec::new(),
            database: None,
        }
    }
}

impl Settings {
    pub fn load() -> Result<Self, EngineError> {
        dotenvy::dotenv().ok();

        let config = Cfg::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
