//! HTTP inbound adapter exposing REST endpoints.

pub mod error;
pub mod extractors;
pub mod health;
pub mod ingredients;
pub mod sanitiser;
pub mod schemas;
pub mod state;

use actix_web::{Scope, web};

pub use error::ApiResult;

/// Scope registering every endpoint under `prefix`.
///
/// Callers provide [`state::HttpState`] and [`health::HealthState`] as app
/// data. Body and path extraction failures are answered with the standard
/// error body.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use food_orders::inbound::http::api_scope;
///
/// let app = App::new().service(api_scope("/food-orders/api/v1"));
/// ```
pub fn api_scope(prefix: &str) -> Scope {
    web::scope(prefix)
        .app_data(web::JsonConfig::default().error_handler(error::json_error_handler))
        .app_data(web::PathConfig::default().error_handler(error::path_error_handler))
        .service(ingredients::get_ingredient)
        .service(ingredients::add_ingredient)
        .service(ingredients::update_quantity)
        .service(health::health_check)
}
