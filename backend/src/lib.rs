//! Food orders ingredient service.
//!
//! Hexagonal layout: [`domain`] holds the ingredient entity, errors, ports,
//! and services; [`inbound::http`] exposes them over Actix Web; and
//! [`outbound::persistence`] stores them in PostgreSQL via Diesel.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod logging;
pub mod middleware;
pub mod outbound;
pub mod settings;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Correlation;
