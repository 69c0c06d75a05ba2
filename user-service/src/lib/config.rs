use std::env;

use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub jwt: JwtConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expiration_hours: i64,
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (DATABASE__URL, JWT__SECRET, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on environment-specific configuration
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Layer on environment variables (with __ as separator)
            // Example: JWT__SECRET=... overrides jwt.secret
            .add_source(Environment::default().separator("__"))
            .build()?;

        let config: Config = configuration.try_deserialize()?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_variables_are_collected() {
        env::set_var("DATABASE__URL", "postgres://override:5432/users");
        env::set_var("SERVER__HTTP_PORT", "9999");
        env::set_var("JWT__SECRET", "secret_from_environment");
        env::set_var("JWT__EXPIRATION_HOURS", "12");

        let config = Config::load().expect("Failed to load config from environment");

        assert_eq!(config.database.url, "postgres://override:5432/users");
        assert_eq!(config.server.http_port, 9999);
        assert_eq!(config.jwt.secret, "secret_from_environment");
        assert_eq!(config.jwt.expiration_hours, 12);

        env::remove_var("DATABASE__URL");
        env::remove_var("SERVER__HTTP_PORT");
        env::remove_var("JWT__SECRET");
        env::remove_var("JWT__EXPIRATION_HOURS");
    }
}
