//! Application settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `FOOD_ORDERS_*` environment variables, and an
//! optional configuration file. Unset optional values fall back to the
//! defaults exposed by the accessors below.

use std::fmt;
use std::str::FromStr;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_APPLICATION_NAME: &str = "food-orders";
const DEFAULT_API_VERSION: &str = "v1";
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;

/// Configuration failures detected after loading.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    /// No database URL was provided.
    #[error("database url is required (set FOOD_ORDERS_DATABASE_URL)")]
    MissingDatabaseUrl,
    /// The environment name is not recognised.
    #[error("unknown environment `{value}`; expected local, production, or test")]
    UnknownEnvironment {
        /// Rejected input.
        value: String,
    },
}

/// Deployment environment controlling log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// Developer workstation: human-readable logs at `debug`.
    Local,
    /// Deployed service: JSON logs at `info`.
    #[default]
    Production,
    /// Test runs: no subscriber installed.
    Test,
}

impl Environment {
    /// Lowercase name of the environment.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Production => "production",
            Self::Test => "test",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = SettingsError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            "test" => Ok(Self::Test),
            _ => Err(SettingsError::UnknownEnvironment {
                value: value.to_owned(),
            }),
        }
    }
}

/// Service configuration.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "FOOD_ORDERS")]
pub struct AppSettings {
    /// PostgreSQL connection URL.
    pub database_url: Option<String>,
    /// Interface to bind.
    pub host: Option<String>,
    /// Port to bind.
    pub port: Option<u16>,
    /// First segment of the API prefix.
    pub application_name: Option<String>,
    /// Version segment of the API prefix.
    pub api_version: Option<String>,
    /// Deployment environment name.
    pub environment: Option<String>,
    /// Tracing filter directive overriding the environment default.
    pub log_level: Option<String>,
    /// Upper bound on pooled database connections.
    pub db_max_connections: Option<u32>,
    /// Apply pending migrations on start-up.
    pub run_migrations: Option<bool>,
}

impl AppSettings {
    /// Return the database URL or fail when none was configured.
    pub fn database_url(&self) -> Result<&str, SettingsError> {
        self.database_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .ok_or(SettingsError::MissingDatabaseUrl)
    }

    /// Return the bind host, falling back to all interfaces.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Return the bind port.
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Return the application name used in the API prefix.
    pub fn application_name(&self) -> &str {
        self.application_name
            .as_deref()
            .unwrap_or(DEFAULT_APPLICATION_NAME)
    }

    /// Return the API version used in the API prefix.
    pub fn api_version(&self) -> &str {
        self.api_version.as_deref().unwrap_or(DEFAULT_API_VERSION)
    }

    /// Parse the configured environment, defaulting to production.
    pub fn environment(&self) -> Result<Environment, SettingsError> {
        self.environment
            .as_deref()
            .map_or(Ok(Environment::default()), str::parse)
    }

    /// Return the explicit log directive, if any.
    pub fn log_level(&self) -> Option<&str> {
        self.log_level.as_deref()
    }

    /// Return the pool size limit.
    pub fn db_max_connections(&self) -> u32 {
        self.db_max_connections
            .unwrap_or(DEFAULT_DB_MAX_CONNECTIONS)
    }

    /// Whether migrations run before the server starts.
    pub fn run_migrations(&self) -> bool {
        self.run_migrations.unwrap_or(true)
    }

    /// Route prefix shared by every endpoint, e.g. `/food-orders/api/v1`.
    pub fn api_prefix(&self) -> String {
        api_prefix(self.application_name(), self.api_version())
    }
}

/// Build the route prefix from an application name and API version.
///
/// # Examples
/// ```
/// use food_orders::settings::api_prefix;
///
/// assert_eq!(api_prefix("food-orders", "v1"), "/food-orders/api/v1");
/// ```
#[must_use]
pub fn api_prefix(application_name: &str, api_version: &str) -> String {
    format!(
        "/{}/api/{}",
        application_name.trim_matches('/'),
        api_version.trim_matches('/')
    )
}
