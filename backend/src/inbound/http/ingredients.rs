//! Ingredient HTTP handlers.
//!
//! ```text
//! GET  /{prefix}/ingredients/{ingredientId}
//! POST /{prefix}/ingredients
//! PUT  /{prefix}/ingredients/{ingredientId}/quantity
//! ```

use actix_web::{get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::{
    AddIngredientRequest, AddIngredientResponse, GetIngredientRequest, UpdateQuantityRequest,
};
use crate::domain::{Error, IngredientDto, IngredientId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::extractors::SanitisedJson;
use crate::inbound::http::schemas::IngredientSchema;
use crate::inbound::http::state::HttpState;

/// Request payload for creating an ingredient.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AddIngredientRequestBody {
    /// Caller-chosen identifier; generated when omitted.
    #[schema(example = "57526bf4-7226-4195-b5d6-0219923f65b1")]
    pub ingredient_id: Option<String>,
    /// Display name.
    #[schema(example = "Salt")]
    pub name: String,
    /// Initial stock, must not be negative.
    #[schema(example = 5)]
    pub quantity: i32,
    /// Storage bucket.
    #[schema(example = "DRY")]
    pub category: String,
    /// Optional availability flag.
    #[serde(default)]
    pub availability: Option<bool>,
}

/// Response payload for ingredient creation.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddIngredientResponseBody {
    /// Identifier of the stored ingredient.
    #[schema(example = "57526bf4-7226-4195-b5d6-0219923f65b1")]
    pub ingredient_id: String,
}

/// Request payload for replacing an ingredient's quantity.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateQuantityRequestBody {
    /// New stock level, must not be negative.
    #[schema(example = 7)]
    pub quantity: i32,
}

impl From<AddIngredientRequestBody> for AddIngredientRequest {
    fn from(body: AddIngredientRequestBody) -> Self {
        Self {
            ingredient_id: body.ingredient_id,
            name: body.name,
            quantity: body.quantity,
            category: body.category,
            availability: body.availability,
        }
    }
}

impl From<AddIngredientResponse> for AddIngredientResponseBody {
    fn from(response: AddIngredientResponse) -> Self {
        Self {
            ingredient_id: response.ingredient_id.into_inner(),
        }
    }
}

fn parse_ingredient_id(raw: String) -> Result<IngredientId, Error> {
    IngredientId::new(raw).map_err(|err| Error::invalid_request(err.to_string()))
}

/// Fetch one ingredient by identifier.
#[utoipa::path(
    get,
    path = "/ingredients/{ingredientId}",
    params(("ingredientId" = String, Path, description = "Ingredient identifier")),
    responses(
        (status = 200, description = "Ingredient", body = IngredientSchema),
        (status = 400, description = "Invalid identifier", body = ErrorBody),
        (status = 404, description = "Ingredient not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["ingredients"],
    operation_id = "getIngredient"
)]
#[get("/ingredients/{ingredientId}")]
pub async fn get_ingredient(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<IngredientDto>> {
    let ingredient_id = parse_ingredient_id(path.into_inner())?;
    let ingredient = state
        .ingredients_query
        .get_by_id(GetIngredientRequest { ingredient_id })
        .await?;
    Ok(web::Json(ingredient))
}

/// Create an ingredient.
///
/// The identifier is returned once the row has been stored. Supplying an
/// identifier that already exists yields `409 Conflict`.
#[utoipa::path(
    post,
    path = "/ingredients",
    request_body = AddIngredientRequestBody,
    responses(
        (status = 200, description = "Ingredient created", body = AddIngredientResponseBody),
        (status = 400, description = "Invalid ingredient", body = ErrorBody),
        (status = 409, description = "Ingredient id already exists", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["ingredients"],
    operation_id = "addIngredient"
)]
#[post("/ingredients")]
pub async fn add_ingredient(
    state: web::Data<HttpState>,
    SanitisedJson(body): SanitisedJson<AddIngredientRequestBody>,
) -> ApiResult<web::Json<AddIngredientResponseBody>> {
    let response = state.ingredients.add_ingredient(body.into()).await?;
    Ok(web::Json(response.into()))
}

/// Replace the quantity of an existing ingredient.
#[utoipa::path(
    put,
    path = "/ingredients/{ingredientId}/quantity",
    params(("ingredientId" = String, Path, description = "Ingredient identifier")),
    request_body = UpdateQuantityRequestBody,
    responses(
        (status = 200, description = "Updated ingredient", body = IngredientSchema),
        (status = 400, description = "Invalid quantity", body = ErrorBody),
        (status = 404, description = "Ingredient not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["ingredients"],
    operation_id = "updateIngredientQuantity"
)]
#[put("/ingredients/{ingredientId}/quantity")]
pub async fn update_quantity(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    SanitisedJson(body): SanitisedJson<UpdateQuantityRequestBody>,
) -> ApiResult<web::Json<IngredientDto>> {
    let ingredient_id = parse_ingredient_id(path.into_inner())?;
    let ingredient = state
        .ingredients
        .update_quantity(UpdateQuantityRequest {
            ingredient_id,
            quantity: body.quantity,
        })
        .await?;
    Ok(web::Json(ingredient))
}

#[cfg(test)]
#[path = "ingredients_tests.rs"]
mod tests;
