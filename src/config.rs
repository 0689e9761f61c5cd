use std::env;

use crate::database::{database_name_from_uri, DEFAULT_DATABASE_NAME};
use crate::utils::error::AppError;

/// Selects the in-process store instead of MongoDB.
pub const MEMORY_DATABASE_URL: &str = "memory";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub database_name: String,
    /// Access gate is enabled when set
    pub jwt_secret: Option<String>,
    /// Empty means any origin
    pub cors_allowed_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| AppError::ValidationError(format!("PORT must be a port number, got '{}'", raw)))?,
            None => 5000,
        };

        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| AppError::ValidationError("DATABASE_URL must be set".to_string()))?;

        let database_name = lookup("DATABASE_NAME")
            .filter(|name| !name.trim().is_empty())
            .or_else(|| database_name_from_uri(&database_url))
            .unwrap_or_else(|| DEFAULT_DATABASE_NAME.to_string());

        let jwt_secret = lookup("JWT_SECRET").filter(|secret| !secret.is_empty());

        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            host,
            port,
            database_url,
            database_name,
            jwt_secret,
            cors_allowed_origins,
        })
    }

    pub fn uses_memory_store(&self) -> bool {
        self.database_url == MEMORY_DATABASE_URL
    }

    pub fn auth_enabled(&self) -> bool {
        self.jwt_secret.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<Config, AppError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[("DATABASE_URL", "mongodb://localhost:27017")]).unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 5000);
        assert_eq!(config.database_name, DEFAULT_DATABASE_NAME);
        assert!(!config.auth_enabled());
        assert!(!config.uses_memory_store());
        assert!(config.cors_allowed_origins.is_empty());
    }

    #[test]
    fn test_database_url_is_required() {
        assert!(config(&[]).is_err());
        assert!(config(&[("DATABASE_URL", "  ")]).is_err());
    }

    #[test]
    fn test_overrides() {
        let config = config(&[
            ("DATABASE_URL", "mongodb://db:27017/kitchen"),
            ("PORT", "8080"),
            ("HOST", "127.0.0.1"),
            ("JWT_SECRET", "s3cret"),
            ("CORS_ALLOWED_ORIGINS", "http://localhost:3000, https://ward.example.org,"),
        ])
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.database_name, "kitchen");
        assert!(config.auth_enabled());
        assert_eq!(
            config.cors_allowed_origins,
            vec!["http://localhost:3000", "https://ward.example.org"]
        );
    }

    #[test]
    fn test_explicit_database_name_wins() {
        let config = config(&[
            ("DATABASE_URL", "mongodb://db:27017/kitchen"),
            ("DATABASE_NAME", "wards"),
        ])
        .unwrap();
        assert_eq!(config.database_name, "wards");
    }

    #[test]
    fn test_invalid_port() {
        assert!(config(&[("DATABASE_URL", "memory"), ("PORT", "http")]).is_err());
    }

    #[test]
    fn test_memory_store_and_empty_secret() {
        let config = config(&[("DATABASE_URL", "memory"), ("JWT_SECRET", "")]).unwrap();
        assert!(config.uses_memory_store());
        assert!(!config.auth_enabled());
    }
}
