use std::str::FromStr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;
/// `tower_sessions::cookie::Key` needs at least this many bytes.
const MIN_SECRET_LEN: usize = 64;

/// Which variant of the application is served.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessMode {
    /// No login; every page sees every fleet and forms pick the fleet.
    Open,
    /// Session login with manager and driver roles scoped to one fleet.
    Secured,
}

impl FromStr for AccessMode {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "open" => Ok(Self::Open),
            "secured" => Ok(Self::Secured),
            other => Err(ConfigError::InvalidEnvVar {
                name: "ACCESS_MODE".to_string(),
                reason: format!("expected 'open' or 'secured', got '{}'", other),
            }),
        }
    }
}

pub struct Config {
    pub database_url: String,
    pub app_secret: String,
    pub host: String,
    pub port: u16,
    pub access_mode: AccessMode,
    pub secure_cookie: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let app_secret = lookup("APP_SECRET")
            .ok_or_else(|| ConfigError::MissingEnvVar("APP_SECRET".to_string()))?;
        if app_secret.len() < MIN_SECRET_LEN {
            return Err(ConfigError::InvalidEnvVar {
                name: "APP_SECRET".to_string(),
                reason: format!("must be at least {} bytes", MIN_SECRET_LEN),
            }
            .into());
        }

        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("PORT") {
            Some(value) => value.parse::<u16>().map_err(|e| ConfigError::InvalidEnvVar {
                name: "PORT".to_string(),
                reason: e.to_string(),
            })?,
            None => DEFAULT_PORT,
        };

        let access_mode = match lookup("ACCESS_MODE") {
            Some(value) => value.parse::<AccessMode>()?,
            None => AccessMode::Secured,
        };

        let secure_cookie = match lookup("SESSION_SECURE_COOKIE") {
            Some(value) => value
                .parse::<bool>()
                .map_err(|e| ConfigError::InvalidEnvVar {
                    name: "SESSION_SECURE_COOKIE".to_string(),
                    reason: e.to_string(),
                })?,
            None => false,
        };

        Ok(Self {
            database_url,
            app_secret,
            host,
            port,
            access_mode,
            secure_cookie,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
