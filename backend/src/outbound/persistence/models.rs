//! Diesel row types for the `ingredients` table.
//!
//! Rows use the storage column names; conversion to and from
//! [`IngredientDto`] is the only place column naming meets field naming.

use diesel::prelude::*;

use crate::domain::IngredientDto;

use super::schema::ingredients;

/// Row read from `ingredients`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = ingredients)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct IngredientRow {
    pub ingredient_id: String,
    pub name: String,
    pub quantity: i32,
    pub category: String,
    pub availability: Option<bool>,
}

/// Row inserted into `ingredients`.
#[derive(Debug, Insertable)]
#[diesel(table_name = ingredients)]
pub(crate) struct NewIngredientRow<'a> {
    pub ingredient_id: &'a str,
    pub name: &'a str,
    pub quantity: i32,
    pub category: &'a str,
    pub availability: Option<bool>,
}

/// Changeset overwriting every mutable column, including a cleared
/// availability.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = ingredients)]
#[diesel(treat_none_as_null = true)]
pub(crate) struct IngredientUpdate<'a> {
    pub name: &'a str,
    pub quantity: i32,
    pub category: &'a str,
    pub availability: Option<bool>,
}

impl From<IngredientRow> for IngredientDto {
    fn from(row: IngredientRow) -> Self {
        let IngredientRow {
            ingredient_id,
            name,
            quantity,
            category,
            availability,
        } = row;
        Self {
            ingredient_id,
            name,
            quantity,
            category,
            availability,
        }
    }
}

impl<'a> From<&'a IngredientDto> for NewIngredientRow<'a> {
    fn from(dto: &'a IngredientDto) -> Self {
        Self {
            ingredient_id: dto.ingredient_id.as_str(),
            name: dto.name.as_str(),
            quantity: dto.quantity,
            category: dto.category.as_str(),
            availability: dto.availability,
        }
    }
}

impl<'a> From<&'a IngredientDto> for IngredientUpdate<'a> {
    fn from(dto: &'a IngredientDto) -> Self {
        Self {
            name: dto.name.as_str(),
            quantity: dto.quantity,
            category: dto.category.as_str(),
            availability: dto.availability,
        }
    }
}
