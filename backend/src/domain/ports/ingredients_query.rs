//! Driving port for ingredient reads.
//!
//! Inbound adapters use this port to fetch ingredients without depending on
//! repository details.

use async_trait::async_trait;

use crate::domain::{Error, IngredientDto, IngredientId};

/// Request to fetch one ingredient by identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetIngredientRequest {
    /// Identifier to look up.
    pub ingredient_id: IngredientId,
}

/// Driving port for ingredient read operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IngredientsQuery: Send + Sync {
    /// Fetch one ingredient, failing with a not-found error when it is absent.
    async fn get_by_id(&self, request: GetIngredientRequest) -> Result<IngredientDto, Error>;
}
