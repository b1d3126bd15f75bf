//! Test utilities for the food-orders crate.
//!
//! Shared by unit tests in `src/` and integration tests in `tests/`. Only
//! compiled for tests or with the `test-support` feature.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::ports::{IngredientRepository, IngredientRepositoryError};
use crate::domain::{IngredientDto, IngredientId, IngredientService};
use crate::inbound::http::state::HttpState;

/// In-memory [`IngredientRepository`] keyed by ingredient id.
///
/// Mirrors the database adapter: inserting an existing id is a conflict and
/// updating a missing id reports `false`.
#[derive(Debug, Default, Clone)]
pub struct InMemoryIngredientRepository {
    rows: Arc<Mutex<HashMap<String, IngredientDto>>>,
}

impl InMemoryIngredientRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `row` directly, bypassing validation.
    pub fn seed(&self, row: IngredientDto) {
        self.lock().insert(row.ingredient_id.clone(), row);
    }

    /// Number of stored rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether nothing has been stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, IngredientDto>> {
        self.rows
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[async_trait]
impl IngredientRepository for InMemoryIngredientRepository {
    async fn find_by_id(
        &self,
        ingredient_id: &IngredientId,
    ) -> Result<Option<IngredientDto>, IngredientRepositoryError> {
        Ok(self.lock().get(ingredient_id.as_ref()).cloned())
    }

    async fn add_ingredient(
        &self,
        ingredient: &IngredientDto,
    ) -> Result<(), IngredientRepositoryError> {
        let mut rows = self.lock();
        if rows.contains_key(&ingredient.ingredient_id) {
            return Err(IngredientRepositoryError::conflict(
                ingredient.ingredient_id.clone(),
            ));
        }
        rows.insert(ingredient.ingredient_id.clone(), ingredient.clone());
        Ok(())
    }

    async fn update_ingredient(
        &self,
        ingredient: &IngredientDto,
    ) -> Result<bool, IngredientRepositoryError> {
        let mut rows = self.lock();
        match rows.get_mut(&ingredient.ingredient_id) {
            Some(row) => {
                *row = ingredient.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

/// Build handler state backed by the real service over `repository`.
#[must_use]
pub fn in_memory_http_state(repository: InMemoryIngredientRepository) -> HttpState {
    HttpState::from_service(Arc::new(IngredientService::new(Arc::new(repository))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn salt() -> IngredientDto {
        IngredientDto {
            ingredient_id: "salt".to_owned(),
            name: "Salt".to_owned(),
            quantity: 5,
            category: "DRY".to_owned(),
            availability: None,
        }
    }

    fn id(value: &str) -> IngredientId {
        IngredientId::new(value).expect("valid id")
    }

    #[rstest]
    #[tokio::test]
    async fn duplicate_insert_is_a_conflict(salt: IngredientDto) {
        let repo = InMemoryIngredientRepository::new();
        repo.add_ingredient(&salt).await.expect("first insert");

        let err = repo
            .add_ingredient(&salt)
            .await
            .expect_err("second insert conflicts");
        assert!(matches!(err, IngredientRepositoryError::Conflict { .. }));
        assert_eq!(repo.len(), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn update_reports_whether_a_row_matched(salt: IngredientDto) {
        let repo = InMemoryIngredientRepository::new();
        assert!(!repo.update_ingredient(&salt).await.expect("update"));

        repo.seed(salt.clone());
        let updated = IngredientDto {
            quantity: 9,
            ..salt
        };
        assert!(repo.update_ingredient(&updated).await.expect("update"));
        let stored = repo.find_by_id(&id("salt")).await.expect("find");
        assert_eq!(stored, Some(updated));
    }

    #[rstest]
    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn concurrent_service_adds_of_one_id_yield_one_conflict() {
        use crate::domain::ErrorCode;
        use crate::domain::ports::{AddIngredientRequest, IngredientsCommand};

        let repo = InMemoryIngredientRepository::new();
        let service = Arc::new(IngredientService::new(Arc::new(repo.clone())));
        let request = AddIngredientRequest {
            ingredient_id: Some("salt".to_owned()),
            name: "Salt".to_owned(),
            quantity: 5,
            category: "DRY".to_owned(),
            availability: None,
        };

        let first = tokio::spawn({
            let service = Arc::clone(&service);
            let request = request.clone();
            async move { service.add_ingredient(request).await }
        });
        let second = tokio::spawn({
            let service = Arc::clone(&service);
            async move { service.add_ingredient(request).await }
        });
        let outcomes = [
            first.await.expect("first task joins"),
            second.await.expect("second task joins"),
        ];

        assert_eq!(outcomes.iter().filter(|result| result.is_ok()).count(), 1);
        assert_eq!(
            outcomes
                .iter()
                .filter(|result| {
                    result
                        .as_ref()
                        .is_err_and(|error| error.code() == ErrorCode::Conflict)
                })
                .count(),
            1
        );
        assert_eq!(repo.len(), 1);
    }
}
