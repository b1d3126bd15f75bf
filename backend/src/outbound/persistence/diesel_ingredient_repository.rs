//! PostgreSQL-backed `IngredientRepository` implementation using Diesel ORM.
//!
//! Every failure is logged here with the operation, the ingredient id, and
//! the query label. Bind values and driver text stay out of the
//! returned errors.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel_async::RunQueryDsl;
use tracing::{error, warn};

use crate::domain::ports::{IngredientRepository, IngredientRepositoryError};
use crate::domain::{IngredientDto, IngredientId};

use super::models::{IngredientRow, IngredientUpdate, NewIngredientRow};
use super::pool::{DbPool, PoolError};
use super::schema::ingredients;

/// A repository operation and the label logged when its query fails.
///
/// Labels name the statement shape only; they are not the SQL Diesel sends.
#[derive(Debug, Clone, Copy)]
struct Operation {
    name: &'static str,
    query_label: &'static str,
}

const FIND_BY_ID: Operation = Operation {
    name: "find_by_id",
    query_label: "ingredients.select_by_id",
};

const ADD_INGREDIENT: Operation = Operation {
    name: "add_ingredient",
    query_label: "ingredients.insert",
};

const UPDATE_INGREDIENT: Operation = Operation {
    name: "update_ingredient",
    query_label: "ingredients.update_by_id",
};

/// Diesel-backed implementation of the ingredient repository port.
#[derive(Clone)]
pub struct DieselIngredientRepository {
    pool: DbPool,
}

impl DieselIngredientRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map pool errors to domain repository errors.
fn map_pool_error(
    operation: Operation,
    ingredient_id: &str,
    error: &PoolError,
) -> IngredientRepositoryError {
    error!(
        operation = operation.name,
        ingredient_id,
        error = %error,
        "ingredient repository could not obtain a connection"
    );
    IngredientRepositoryError::storage(operation.name)
}

/// Map Diesel errors to domain repository errors.
fn map_diesel_error(
    operation: Operation,
    ingredient_id: &str,
    error: &DieselError,
) -> IngredientRepositoryError {
    match error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
            warn!(
                operation = operation.name,
                ingredient_id,
                constraint = info.constraint_name(),
                "ingredient id already exists"
            );
            IngredientRepositoryError::conflict(ingredient_id)
        }
        DieselError::DatabaseError(kind, info) => {
            error!(
                operation = operation.name,
                ingredient_id,
                query_label = operation.query_label,
                ?kind,
                message = info.message(),
                "ingredient query failed"
            );
            IngredientRepositoryError::storage(operation.name)
        }
        other => {
            error!(
                operation = operation.name,
                ingredient_id,
                query_label = operation.query_label,
                error = %other,
                "ingredient query failed"
            );
            IngredientRepositoryError::storage(operation.name)
        }
    }
}

#[async_trait]
impl IngredientRepository for DieselIngredientRepository {
    async fn find_by_id(
        &self,
        ingredient_id: &IngredientId,
    ) -> Result<Option<IngredientDto>, IngredientRepositoryError> {
        let id = ingredient_id.as_ref();
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(FIND_BY_ID, id, &err))?;

        let row = ingredients::table
            .filter(ingredients::ingredient_id.eq(id))
            .select(IngredientRow::as_select())
            .first::<IngredientRow>(&mut conn)
            .await
            .optional()
            .map_err(|err| map_diesel_error(FIND_BY_ID, id, &err))?;

        Ok(row.map(IngredientDto::from))
    }

    async fn add_ingredient(&self, ingredient: &IngredientDto) -> Result<(), IngredientRepositoryError> {
        let id = ingredient.ingredient_id.as_str();
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(ADD_INGREDIENT, id, &err))?;

        diesel::insert_into(ingredients::table)
            .values(NewIngredientRow::from(ingredient))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(|err| map_diesel_error(ADD_INGREDIENT, id, &err))
    }

    async fn update_ingredient(
        &self,
        ingredient: &IngredientDto,
    ) -> Result<bool, IngredientRepositoryError> {
        let id = ingredient.ingredient_id.as_str();
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(UPDATE_INGREDIENT, id, &err))?;

        let updated = diesel::update(ingredients::table.find(id))
            .set(IngredientUpdate::from(ingredient))
            .execute(&mut conn)
            .await
            .map_err(|err| map_diesel_error(UPDATE_INGREDIENT, id, &err))?;

        Ok(updated > 0)
    }
}
