//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{IngredientsCommand, IngredientsQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Ingredient read use-cases.
    pub ingredients_query: Arc<dyn IngredientsQuery>,
    /// Ingredient write use-cases.
    pub ingredients: Arc<dyn IngredientsCommand>,
}

impl HttpState {
    /// Bundle the driving ports used by handlers.
    pub fn new(
        ingredients_query: Arc<dyn IngredientsQuery>,
        ingredients: Arc<dyn IngredientsCommand>,
    ) -> Self {
        Self {
            ingredients_query,
            ingredients,
        }
    }

    /// Build state from one service implementing both ports.
    pub fn from_service<S>(service: Arc<S>) -> Self
    where
        S: IngredientsQuery + IngredientsCommand + 'static,
    {
        Self {
            ingredients_query: service.clone(),
            ingredients: service,
        }
    }
}
