//! Domain primitives, services, and ports.
//!
//! Purpose: define the ingredient entity and the use-cases around it without
//! depending on HTTP or storage details. Invariants are documented on each
//! type and enforced by their constructors.
//!
//! Public surface:
//! - Error (alias to `error::Error`): transport-agnostic failure.
//! - ErrorCode (alias to `error::ErrorCode`): stable failure category.
//! - Ingredient (alias to `ingredient::Ingredient`): validated entity.
//! - IngredientService: implementation of the ingredient driving ports.

pub mod correlation_id;
pub mod error;
pub mod ingredient;
pub mod ingredient_service;
pub mod ports;

pub use self::correlation_id::{
    CORRELATION_ID_HEADER, CorrelationId, CorrelationIdError, MAX_CORRELATION_ID_LEN,
};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::ingredient::{
    Ingredient, IngredientDraft, IngredientDto, IngredientId, IngredientValidationError,
};
pub use self::ingredient_service::IngredientService;
