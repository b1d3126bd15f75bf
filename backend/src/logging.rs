//! Tracing subscriber set-up.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;

use crate::settings::Environment;

/// Default filter directive for an environment.
#[must_use]
pub const fn default_directive(environment: Environment) -> &'static str {
    match environment {
        Environment::Local => "debug",
        Environment::Production | Environment::Test => "info",
    }
}

/// Install the global tracing subscriber for `environment`.
///
/// `log_level` overrides the environment default. The `test` environment
/// installs nothing so test harnesses can bring their own subscriber.
///
/// # Errors
/// Returns an error when the directive cannot be parsed or a global
/// subscriber is already installed.
pub fn init_tracing(
    environment: Environment,
    log_level: Option<&str>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let directive = log_level.unwrap_or(default_directive(environment));
    match environment {
        Environment::Test => Ok(()),
        Environment::Local => fmt()
            .with_env_filter(EnvFilter::try_new(directive)?)
            .with_target(false)
            .try_init(),
        Environment::Production => fmt()
            .with_env_filter(EnvFilter::try_new(directive)?)
            .json()
            .try_init(),
    }
}
