use config::{Config, ConfigError, Environment};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Path of the SQLite database file.
    pub database_url: String,
    pub upload_folder: String,
    pub cors_allowed_origin: String,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("database_url", "props.db")?
            .set_default("upload_folder", "runtime/uploads")?
            .set_default("cors_allowed_origin", "*")?
            .add_source(Environment::default())
            .build()?
            .try_deserialize()
    }
}
