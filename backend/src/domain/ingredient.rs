//! Ingredient entity and its transport projection.
//!
//! An [`Ingredient`] is only ever built through a validating constructor, so
//! no instance is observable with a negative quantity or blank text fields.
//! Only the [`IngredientDto`] crosses the repository and HTTP boundaries.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Validation errors raised while constructing or mutating an ingredient.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IngredientValidationError {
    /// A supplied identifier was blank.
    #[error("Ingredient id must not be empty")]
    EmptyId,
    /// The name was blank.
    #[error("Name must not be empty")]
    EmptyName,
    /// The category was blank.
    #[error("Category must not be empty")]
    EmptyCategory,
    /// The quantity was below zero.
    #[error("Quantity cannot be negative")]
    NegativeQuantity,
}

/// Opaque ingredient identifier.
///
/// Freshly generated identifiers are the string form of a random UUID, but
/// any non-blank string supplied by a caller is accepted.
///
/// # Examples
/// ```
/// use food_orders::domain::IngredientId;
///
/// let id = IngredientId::new("57526bf4-7226-4195-b5d6-0219923f65b1").expect("valid id");
/// assert_eq!(id.as_ref(), "57526bf4-7226-4195-b5d6-0219923f65b1");
/// assert!(IngredientId::new("  ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IngredientId(String);

impl IngredientId {
    /// Validate and wrap an identifier.
    pub fn new(id: impl Into<String>) -> Result<Self, IngredientValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(IngredientValidationError::EmptyId);
        }
        Ok(Self(id))
    }

    /// Generate a new random identifier.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Consume the identifier, returning the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for IngredientId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl std::fmt::Display for IngredientId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Plain ingredient representation shared by storage and transport.
///
/// `availability` is omitted from JSON when unset, which keeps "never set"
/// distinct from `false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientDto {
    /// Ingredient identifier.
    pub ingredient_id: String,
    /// Display name.
    pub name: String,
    /// Stock on hand, never negative.
    pub quantity: i32,
    /// Storage bucket.
    pub category: String,
    /// Optional availability flag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<bool>,
}

/// Input required to construct an [`Ingredient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientDraft {
    /// Identifier to use; a random one is generated when `None`.
    pub ingredient_id: Option<IngredientId>,
    /// Display name.
    pub name: String,
    /// Stock on hand.
    pub quantity: i32,
    /// Storage bucket.
    pub category: String,
    /// Optional availability flag.
    pub availability: Option<bool>,
}

/// Validated ingredient entity.
///
/// # Examples
/// ```
/// use food_orders::domain::{Ingredient, IngredientDraft};
///
/// let mut ingredient = Ingredient::new(IngredientDraft {
///     ingredient_id: None,
///     name: "Salt".to_owned(),
///     quantity: 5,
///     category: "DRY".to_owned(),
///     availability: None,
/// })
/// .expect("valid ingredient");
///
/// assert!(ingredient.set_quantity(-1).is_err());
/// assert_eq!(ingredient.quantity(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ingredient {
    ingredient_id: IngredientId,
    name: String,
    quantity: i32,
    category: String,
    availability: Option<bool>,
}

impl Ingredient {
    /// Build an ingredient, generating an identifier when none is supplied.
    pub fn new(draft: IngredientDraft) -> Result<Self, IngredientValidationError> {
        let IngredientDraft {
            ingredient_id,
            name,
            quantity,
            category,
            availability,
        } = draft;

        if name.trim().is_empty() {
            return Err(IngredientValidationError::EmptyName);
        }
        if category.trim().is_empty() {
            return Err(IngredientValidationError::EmptyCategory);
        }
        validate_quantity(quantity)?;

        Ok(Self {
            ingredient_id: ingredient_id.unwrap_or_else(IngredientId::random),
            name,
            quantity,
            category,
            availability,
        })
    }

    /// Rebuild an ingredient from its persisted representation.
    pub fn from_record(record: IngredientDto) -> Result<Self, IngredientValidationError> {
        let IngredientDto {
            ingredient_id,
            name,
            quantity,
            category,
            availability,
        } = record;

        Self::new(IngredientDraft {
            ingredient_id: Some(IngredientId::new(ingredient_id)?),
            name,
            quantity,
            category,
            availability,
        })
    }

    /// Replace the quantity, rejecting negative values.
    pub fn set_quantity(&mut self, quantity: i32) -> Result<(), IngredientValidationError> {
        validate_quantity(quantity)?;
        self.quantity = quantity;
        Ok(())
    }

    /// Project the entity into its DTO.
    #[must_use]
    pub fn to_dto(&self) -> IngredientDto {
        IngredientDto {
            ingredient_id: self.ingredient_id.to_string(),
            name: self.name.clone(),
            quantity: self.quantity,
            category: self.category.clone(),
            availability: self.availability,
        }
    }

    /// Ingredient identifier.
    #[must_use]
    pub fn ingredient_id(&self) -> &IngredientId {
        &self.ingredient_id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Stock on hand.
    #[must_use]
    pub fn quantity(&self) -> i32 {
        self.quantity
    }

    /// Storage bucket.
    #[must_use]
    pub fn category(&self) -> &str {
        self.category.as_str()
    }

    /// Availability flag when one was set.
    #[must_use]
    pub fn availability(&self) -> Option<bool> {
        self.availability
    }
}

fn validate_quantity(quantity: i32) -> Result<(), IngredientValidationError> {
    if quantity < 0 {
        return Err(IngredientValidationError::NegativeQuantity);
    }
    Ok(())
}
