//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (`IngredientRepository`) describe how the domain talks to
//! storage; driving ports (`IngredientsQuery`, `IngredientsCommand`) are what
//! inbound adapters call. Each driven port exposes a typed error enum so
//! adapters map their failures into predictable variants.

mod macros;
pub(crate) use macros::define_port_error;

mod ingredient_repository;
mod ingredients_command;
mod ingredients_query;

#[cfg(test)]
pub use ingredient_repository::MockIngredientRepository;
pub use ingredient_repository::{IngredientRepository, IngredientRepositoryError};
#[cfg(test)]
pub use ingredients_command::MockIngredientsCommand;
pub use ingredients_command::{
    AddIngredientRequest, AddIngredientResponse, IngredientsCommand, UpdateQuantityRequest,
};
#[cfg(test)]
pub use ingredients_query::MockIngredientsQuery;
pub use ingredients_query::{GetIngredientRequest, IngredientsQuery};
