//! Ingredient domain service.
//!
//! Implements the ingredient driving ports on top of an
//! [`IngredientRepository`]. The service owns entity validation and the
//! translation of repository outcomes into domain errors; it holds no
//! persistence or transport logic.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error};

use crate::domain::ports::{
    AddIngredientRequest, AddIngredientResponse, GetIngredientRequest, IngredientRepository,
    IngredientRepositoryError, IngredientsCommand, IngredientsQuery, UpdateQuantityRequest,
};
use crate::domain::{
    Error, Ingredient, IngredientDraft, IngredientDto, IngredientId, IngredientValidationError,
};

// Storage failures are logged by the adapter, so only the kind is kept here.
fn map_repository_error(error: IngredientRepositoryError) -> Error {
    match error {
        IngredientRepositoryError::Conflict { ingredient_id } => {
            Error::conflict(format!("Ingredient with id {ingredient_id} already exists"))
        }
        IngredientRepositoryError::Storage { operation } => {
            Error::storage(format!("ingredient storage {operation} failed"))
        }
    }
}

fn map_validation_error(error: IngredientValidationError) -> Error {
    Error::invalid_request(error.to_string())
}

fn not_found(ingredient_id: &IngredientId) -> Error {
    Error::not_found(format!("Ingredient with id {ingredient_id} not found"))
}

/// Ingredient service implementing the query and command driving ports.
#[derive(Clone)]
pub struct IngredientService<R> {
    ingredient_repo: Arc<R>,
}

impl<R> IngredientService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(ingredient_repo: Arc<R>) -> Self {
        Self { ingredient_repo }
    }
}

impl<R> IngredientService<R>
where
    R: IngredientRepository,
{
    async fn load(&self, ingredient_id: &IngredientId) -> Result<Ingredient, Error> {
        let record = self
            .ingredient_repo
            .find_by_id(ingredient_id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| not_found(ingredient_id))?;

        Ingredient::from_record(record).map_err(|err| {
            error!(
                ingredient_id = %ingredient_id,
                error = %err,
                "stored ingredient failed validation"
            );
            Error::internal(format!("stored ingredient {ingredient_id} is invalid"))
        })
    }
}

#[async_trait]
impl<R> IngredientsQuery for IngredientService<R>
where
    R: IngredientRepository,
{
    async fn get_by_id(&self, request: GetIngredientRequest) -> Result<IngredientDto, Error> {
        debug!(ingredient_id = %request.ingredient_id, "fetching ingredient");
        let ingredient = self.load(&request.ingredient_id).await?;
        Ok(ingredient.to_dto())
    }
}

#[async_trait]
impl<R> IngredientsCommand for IngredientService<R>
where
    R: IngredientRepository,
{
    async fn add_ingredient(
        &self,
        request: AddIngredientRequest,
    ) -> Result<AddIngredientResponse, Error> {
        let AddIngredientRequest {
            ingredient_id,
            name,
            quantity,
            category,
            availability,
        } = request;

        let ingredient_id = ingredient_id
            .map(IngredientId::new)
            .transpose()
            .map_err(map_validation_error)?;
        let ingredient = Ingredient::new(IngredientDraft {
            ingredient_id,
            name,
            quantity,
            category,
            availability,
        })
        .map_err(map_validation_error)?;

        self.ingredient_repo
            .add_ingredient(&ingredient.to_dto())
            .await
            .map_err(map_repository_error)?;

        debug!(ingredient_id = %ingredient.ingredient_id(), "ingredient added");
        Ok(AddIngredientResponse {
            ingredient_id: ingredient.ingredient_id().clone(),
        })
    }

    async fn update_quantity(&self, request: UpdateQuantityRequest) -> Result<IngredientDto, Error> {
        let UpdateQuantityRequest {
            ingredient_id,
            quantity,
        } = request;

        let mut ingredient = self.load(&ingredient_id).await?;
        ingredient
            .set_quantity(quantity)
            .map_err(map_validation_error)?;

        let dto = ingredient.to_dto();
        let updated = self
            .ingredient_repo
            .update_ingredient(&dto)
            .await
            .map_err(map_repository_error)?;
        if !updated {
            return Err(not_found(&ingredient_id));
        }

        debug!(ingredient_id = %ingredient_id, quantity, "ingredient quantity updated");
        Ok(dto)
    }
}

#[cfg(test)]
#[path = "ingredient_service_tests.rs"]
mod tests;
