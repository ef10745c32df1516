//! Configuration loading and representation.
//!
//! Everything comes from environment variables. Missing values fall back to
//! development defaults; malformed values are logged and replaced by defaults.

use std::net::SocketAddr;
use std::time::Duration;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 5;

/// Process configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Address the HTTP listener binds to (`FILMCAT_BIND_ADDR`).
    pub bind_addr: SocketAddr,
    /// Postgres settings; `None` selects the in-memory backend.
    pub database: Option<DatabaseSettings>,
}

/// Postgres connection settings.
#[derive(Clone, PartialEq, Eq)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

// The URL usually embeds a password.
impl core::fmt::Debug for DatabaseSettings {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DatabaseSettings")
            .field("url", &"<redacted>")
            .field("max_connections", &self.max_connections)
            .field("acquire_timeout", &self.acquire_timeout)
            .finish()
    }
}

impl Settings {
    /// Load settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load settings through an arbitrary key lookup (used by tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let bind_addr = parse_or_default(&lookup, "FILMCAT_BIND_ADDR", || {
            DEFAULT_BIND_ADDR
                .parse()
                .unwrap_or_else(|_| SocketAddr::from(([0, 0, 0, 0], 8080)))
        });

        let database = match lookup("DATABASE_URL").filter(|url| !url.trim().is_empty()) {
            Some(url) => Some(DatabaseSettings {
                url,
                max_connections: parse_or_default(&lookup, "FILMCAT_DB_MAX_CONNECTIONS", || {
                    DEFAULT_MAX_CONNECTIONS
                }),
                acquire_timeout: Duration::from_secs(parse_or_default(
                    &lookup,
                    "FILMCAT_DB_ACQUIRE_TIMEOUT_SECS",
                    || DEFAULT_ACQUIRE_TIMEOUT_SECS,
                )),
            }),
            None => None,
        };

        Self {
            bind_addr,
            database,
        }
    }
}

fn parse_or_default<T, F>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: F) -> T
where
    T: core::str::FromStr,
    F: FnOnce() -> T,
{
    match lookup(key) {
        Some(raw) => match raw.trim().parse() {
            Ok(v) => v,
            Err(_) => {
                tracing::warn!(key, value = %raw, "invalid configuration value; using default");
                default()
            }
        },
        None => default(),
    }
}
