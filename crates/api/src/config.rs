use std::fmt::Display;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use axum::http::HeaderValue;

/// Output format for the tracing subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable, multi-field lines.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(format!("expected 'pretty' or 'json', got '{other}'")),
        }
    }
}

/// Startup configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{var} has invalid value '{value}': {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Server configuration loaded from environment variables.
///
/// Everything except `DATABASE_URL` has a default suitable for local
/// development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: IpAddr,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// How long shutdown waits for background tasks (default: `30`).
    pub shutdown_timeout_secs: u64,
    pub log_format: LogFormat,
    pub database_url: String,
    /// Upper bound on pooled database connections (default: `20`).
    pub db_max_connections: u32,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                 | Default                 |
    /// |-------------------------|-------------------------|
    /// | `HOST`                  | `0.0.0.0`               |
    /// | `PORT`                  | `3000`                  |
    /// | `CORS_ORIGINS`          | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS`  | `30`                    |
    /// | `SHUTDOWN_TIMEOUT_SECS` | `30`                    |
    /// | `LOG_FORMAT`            | `pretty`                |
    /// | `DATABASE_URL`          | required                |
    /// | `DB_MAX_CONNECTIONS`    | `20`                    |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = parse_var(&lookup, "HOST", IpAddr::from([0, 0, 0, 0]))?;
        let port = parse_var(&lookup, "PORT", 3000u16)?;

        let raw_origins =
            lookup("CORS_ORIGINS").unwrap_or_else(|| "http://localhost:5173".into());
        let cors_origins: Vec<String> = raw_origins
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        for origin in &cors_origins {
            if let Err(e) = HeaderValue::from_str(origin) {
                return Err(ConfigError::Invalid {
                    var: "CORS_ORIGINS",
                    value: origin.clone(),
                    reason: e.to_string(),
                });
            }
        }

        let request_timeout_secs = parse_var(&lookup, "REQUEST_TIMEOUT_SECS", 30u64)?;
        let shutdown_timeout_secs = parse_var(&lookup, "SHUTDOWN_TIMEOUT_SECS", 30u64)?;
        let log_format = parse_var(&lookup, "LOG_FORMAT", LogFormat::default())?;

        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let db_max_connections = parse_var(
            &lookup,
            "DB_MAX_CONNECTIONS",
            hostel_db::DEFAULT_MAX_CONNECTIONS,
        )?;

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            shutdown_timeout_secs,
            log_format,
            database_url,
            db_max_connections,
        })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_var<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Display,
{
    match lookup(var) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            var,
            reason: e.to_string(),
            value,
        }),
    }
}
