use crate::server::error::config::ConfigError;

/// Database used when `DATABASE_URL` is not set.
pub static DEFAULT_DATABASE_URL: &str = "sqlite:///tmp/holocron.db?mode=rwc";
/// Port used when `PORT` is not set.
pub const DEFAULT_PORT: u16 = 3000;

pub struct Config {
    pub database_url: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_source(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup, `from_env` passes the process environment.
    pub fn from_source<F>(get: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = get("DATABASE_URL")
            .map(|url| normalize_database_url(&url))
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let port = match get("PORT") {
            Some(port) => port
                .parse::<u16>()
                .map_err(|e| ConfigError::InvalidEnvValue {
                    var: "PORT".to_string(),
                    reason: e.to_string(),
                })?,
            None => DEFAULT_PORT,
        };

        Ok(Self { database_url, port })
    }
}

/// Rewrites the legacy `postgres://` scheme some hosting providers hand out to `postgresql://`.
pub fn normalize_database_url(url: &str) -> String {
    match url.strip_prefix("postgres://") {
        Some(rest) => format!("postgresql://{}", rest),
        None => url.to_string(),
    }
}
