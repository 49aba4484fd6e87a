use ::config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    /// Base URL under which object storage serves public files,
    /// e.g. "https://cdn.example.com/storage/v1/object/public/images".
    pub base_url: String,
    /// Category used when a reference carries no category of its own
    /// (legacy absolute URLs, bare filenames).
    pub default_category: String,
    /// Absolute URL returned for missing image references.
    pub fallback_image: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub run_migrations: bool,
    pub server_addr: String,
    pub storage: StorageConfig,
    /// Per-section query budget for homepage aggregation, in milliseconds.
    pub query_timeout_ms: u64,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let s = Config::builder()
            .set_default("run_migrations", false)?
            .set_default("server_addr", "0.0.0.0:3000")?
            .set_default("storage.default_category", "weddings")?
            .set_default("query_timeout_ms", 3000_i64)?
            .add_source(File::with_name("config"))
            .add_source(Environment::default().separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
