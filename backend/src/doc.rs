//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every ingredient endpoint plus the health check, and
//! the adapter-level schema wrappers that describe them. Paths are relative
//! to the API prefix, which defaults to `/food-orders/api/v1`.
//!
//! The document is served by Swagger UI in debug builds and exported via
//! `cargo run --bin openapi-dump` for external tooling.

use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::ingredients::{
    AddIngredientRequestBody, AddIngredientResponseBody, UpdateQuantityRequestBody,
};
use crate::inbound::http::schemas::IngredientSchema;
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Food orders API",
        description = "Ingredient inventory and health endpoints."
    ),
    servers(
        (url = "/food-orders/api/v1", description = "Default API prefix")
    ),
    paths(
        crate::inbound::http::ingredients::get_ingredient,
        crate::inbound::http::ingredients::add_ingredient,
        crate::inbound::http::ingredients::update_quantity,
        crate::inbound::http::health::health_check,
    ),
    components(schemas(
        IngredientSchema,
        AddIngredientRequestBody,
        AddIngredientResponseBody,
        UpdateQuantityRequestBody,
        ErrorBody
    )),
    tags(
        (name = "ingredients", description = "Ingredient inventory"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
