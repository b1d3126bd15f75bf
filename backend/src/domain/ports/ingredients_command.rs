//! Driving port for ingredient writes.

use async_trait::async_trait;

use crate::domain::{Error, IngredientDto, IngredientId};

/// Sanitised input for creating an ingredient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddIngredientRequest {
    /// Caller-chosen identifier; one is generated when `None`.
    pub ingredient_id: Option<String>,
    /// Display name.
    pub name: String,
    /// Initial stock.
    pub quantity: i32,
    /// Storage bucket.
    pub category: String,
    /// Optional availability flag.
    pub availability: Option<bool>,
}

/// Result of a successful create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddIngredientResponse {
    /// Identifier of the persisted ingredient.
    pub ingredient_id: IngredientId,
}

/// Request to replace an ingredient's quantity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateQuantityRequest {
    /// Ingredient to update.
    pub ingredient_id: IngredientId,
    /// New stock level.
    pub quantity: i32,
}

/// Driving port for ingredient write operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IngredientsCommand: Send + Sync {
    /// Validate and persist a new ingredient.
    ///
    /// The identifier is returned only once storage has accepted the row.
    async fn add_ingredient(&self, request: AddIngredientRequest) -> Result<AddIngredientResponse, Error>;

    /// Replace the quantity of an existing ingredient and return its state.
    async fn update_quantity(&self, request: UpdateQuantityRequest) -> Result<IngredientDto, Error>;
}
