//! Builders wiring persistence adapters into HTTP state.

use std::sync::Arc;

use actix_web::web;

use food_orders::domain::IngredientService;
use food_orders::inbound::http::state::HttpState;
use food_orders::outbound::persistence::{DbPool, DieselIngredientRepository};

/// Build handler state backed by the Diesel ingredient repository.
pub(super) fn build_http_state(pool: &DbPool) -> web::Data<HttpState> {
    let repository = Arc::new(DieselIngredientRepository::new(pool.clone()));
    let service = Arc::new(IngredientService::new(repository));
    web::Data::new(HttpState::from_service(service))
}
