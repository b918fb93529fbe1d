use common::config::StorageAppConfig;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct CorsConfig {
    pub allow_origins: Vec<String>,
    pub max_age: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors: CorsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    /// The single administrator account.
    pub admin_email: String,
    /// Argon2 PHC string for the administrator password.
    pub admin_password_hash: String,
    #[serde(default = "default_session_ttl_hours")]
    pub session_ttl_hours: i64,
}

fn default_session_ttl_hours() -> i64 {
    24 * 7
}

#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    /// Absolute origin used in sitemap URLs.
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    #[serde(default)]
    pub storage: StorageAppConfig,
    pub site: SiteConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let s = Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("server.cors.allow_origins", Vec::<String>::new())?
            .set_default("server.cors.max_age", 3600)?
            .set_default("site.base_url", "https://www.silverspringastro.com")?
            // Load from config/config.toml
            .add_source(File::with_name("config/config").required(false))
            // Override from environment (e.g., GALLERY__AUTH__JWT_SECRET)
            .add_source(Environment::with_prefix("GALLERY").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
