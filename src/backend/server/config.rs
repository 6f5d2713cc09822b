/**
 * Server Configuration
 *
 * Settings are read once at startup from the environment (after `.env` has
 * been loaded) and passed explicitly to `create_app`. Nothing reads the
 * environment after that.
 *
 * # Variables
 *
 * - `PORT` - listening port (default 8080)
 * - `JWT_SECRET` - token signing secret (required, non-empty)
 * - `DATABASE_URL` - PostgreSQL URL; unset selects the in-memory store
 * - `BCRYPT_COST` - bcrypt work factor (default `bcrypt::DEFAULT_COST`)
 */

use std::fmt;
use std::net::SocketAddr;

use thiserror::Error;

/// Default listening port
pub const DEFAULT_PORT: u16 = 8080;

/// Configuration errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// `JWT_SECRET` is unset or empty
    #[error("JWT_SECRET must be set to a non-empty value")]
    MissingSecret,

    /// A variable is present but cannot be parsed
    #[error("Invalid value for {name}: {value:?}")]
    InvalidValue {
        /// Variable name
        name: &'static str,
        /// Raw value
        value: String,
    },
}

/// Process-wide settings, built once at startup
#[derive(Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Listening port
    pub port: u16,
    /// HMAC secret for issuing and verifying tokens
    pub jwt_secret: String,
    /// PostgreSQL URL, or `None` for the in-memory store
    pub database_url: Option<String>,
    /// bcrypt work factor used when registering users
    pub bcrypt_cost: u32,
}

impl fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerConfig")
            .field("port", &self.port)
            .field("jwt_secret", &"<redacted>")
            .field("database_url", &self.database_url.as_ref().map(|_| "<redacted>"))
            .field("bcrypt_cost", &self.bcrypt_cost)
            .finish()
    }
}

impl ServerConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let jwt_secret = read("JWT_SECRET").ok_or(ConfigError::MissingSecret)?;

        let port = match read("PORT") {
            Some(value) => value.trim().parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                name: "PORT",
                value,
            })?,
            None => DEFAULT_PORT,
        };

        let bcrypt_cost = match read("BCRYPT_COST") {
            Some(value) => value
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|cost| (4..=31).contains(cost))
                .ok_or(ConfigError::InvalidValue {
                    name: "BCRYPT_COST",
                    value,
                })?,
            None => bcrypt::DEFAULT_COST,
        };

        Ok(Self {
            port,
            jwt_secret,
            database_url: read("DATABASE_URL"),
            bcrypt_cost,
        })
    }

    /// Address to bind: all interfaces on the configured port
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[("JWT_SECRET", "s3cret")])).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.jwt_secret, "s3cret");
        assert_eq!(config.database_url, None);
        assert_eq!(config.bcrypt_cost, bcrypt::DEFAULT_COST);
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8080");
    }

    #[test]
    fn test_all_values() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("JWT_SECRET", "s3cret"),
            ("PORT", "3000"),
            ("DATABASE_URL", "postgres://localhost/favourites"),
            ("BCRYPT_COST", "6"),
        ]))
        .unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(
            config.database_url.as_deref(),
            Some("postgres://localhost/favourites")
        );
        assert_eq!(config.bcrypt_cost, 6);
    }

    #[test]
    fn test_missing_secret() {
        assert_eq!(
            ServerConfig::from_lookup(lookup(&[])),
            Err(ConfigError::MissingSecret)
        );
        assert_eq!(
            ServerConfig::from_lookup(lookup(&[("JWT_SECRET", "  ")])),
            Err(ConfigError::MissingSecret)
        );
    }

    #[test]
    fn test_invalid_values() {
        let port = ServerConfig::from_lookup(lookup(&[("JWT_SECRET", "s"), ("PORT", "http")]));
        assert!(matches!(port, Err(ConfigError::InvalidValue { name: "PORT", .. })));

        let cost = ServerConfig::from_lookup(lookup(&[("JWT_SECRET", "s"), ("BCRYPT_COST", "2")]));
        assert!(matches!(cost, Err(ConfigError::InvalidValue { name: "BCRYPT_COST", .. })));
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("JWT_SECRET", "s3cret"),
            ("DATABASE_URL", "postgres://user:pw@host/db"),
        ]))
        .unwrap();
        let debug = format!("{:?}", config);
        assert!(!debug.contains("s3cret"));
        assert!(!debug.contains("pw@host"));
    }
}
