//! Port for ingredient persistence.

use async_trait::async_trait;

use crate::domain::{IngredientDto, IngredientId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by ingredient repository adapters.
    ///
    /// Messages never carry driver text; adapters log the underlying failure
    /// where it occurs.
    pub enum IngredientRepositoryError {
        /// An ingredient with the same identifier already exists.
        Conflict { ingredient_id: String } =>
            "Ingredient with id {ingredient_id} already exists",
        /// Storage failed while running the named operation.
        Storage { operation: String } =>
            "ingredient repository {operation} failed",
    }
}

/// Port for reading and writing ingredients.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IngredientRepository: Send + Sync {
    /// Find an ingredient by id, returning `None` when no row exists.
    async fn find_by_id(
        &self,
        ingredient_id: &IngredientId,
    ) -> Result<Option<IngredientDto>, IngredientRepositoryError>;

    /// Insert a new ingredient.
    async fn add_ingredient(&self, ingredient: &IngredientDto) -> Result<(), IngredientRepositoryError>;

    /// Overwrite the mutable columns of an existing ingredient.
    ///
    /// Returns `false` when no row matched the identifier.
    async fn update_ingredient(
        &self,
        ingredient: &IngredientDto,
    ) -> Result<bool, IngredientRepositoryError>;
}
