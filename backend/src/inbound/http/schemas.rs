//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay framework-agnostic by not deriving `ToSchema`. The
//! wrappers here mirror their domain counterparts so utoipa can document
//! them from the adapter layer.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::IngredientDto`].
///
/// `availability` is omitted entirely when it was never set.
#[derive(ToSchema)]
#[schema(as = Ingredient, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct IngredientSchema {
    /// Ingredient identifier.
    #[schema(example = "57526bf4-7226-4195-b5d6-0219923f65b1")]
    ingredient_id: String,
    /// Display name.
    #[schema(example = "Tomato")]
    name: String,
    /// Stock on hand.
    #[schema(example = 3, minimum = 0)]
    quantity: i32,
    /// Storage bucket.
    #[schema(example = "FROZEN")]
    category: String,
    /// Availability flag, absent when unset.
    availability: Option<bool>,
}
